//! Bonus criteria. Each one returns its neutral value early when its signal is
//! unavailable, so absence of data never reduces the base score.

use super::tables::{field_label, CTA_WORDS, GSC_LOW_CTR, GSC_NEUTRAL_SCORE};
use super::types::{FieldScore, GscQueryData, ProductSeoInput, SeoFieldType, SeoIssue, SeoSeverity};
use crate::text::{collapse_whitespace, extract_html_text};

/// The fields searched for the focus keyword, in reporting order.
pub const KEYWORD_FIELDS: [SeoFieldType; 4] = [
    SeoFieldType::Title,
    SeoFieldType::MetaTitle,
    SeoFieldType::MetaDescription,
    SeoFieldType::Slug,
];

pub fn score_keyword_presence(input: &ProductSeoInput) -> FieldScore {
    let field = SeoFieldType::KeywordPresence;
    let keyword = input
        .focus_keyword
        .as_deref()
        .map(|k| collapse_whitespace(k).to_lowercase())
        .unwrap_or_default();

    if keyword.is_empty() {
        let issue = SeoIssue::new(
            field,
            SeoSeverity::Info,
            0.0,
            "Aucun mot-clé principal",
            "Aucun mot-clé cible n'est défini pour ce produit.",
        )
        .with_recommendation("Choisissez le mot-clé sur lequel ce produit doit se positionner.");
        return FieldScore::new(0.0, vec![issue]);
    }

    // Slugs carry the keyword hyphenated.
    let slug_keyword = keyword.replace(' ', "-");

    let missing: Vec<SeoFieldType> = KEYWORD_FIELDS
        .iter()
        .copied()
        .filter(|f| {
            let found = match f {
                SeoFieldType::Title => extract_html_text(&input.title)
                    .to_lowercase()
                    .contains(&keyword),
                SeoFieldType::MetaTitle => extract_html_text(&input.meta_title)
                    .to_lowercase()
                    .contains(&keyword),
                SeoFieldType::MetaDescription => extract_html_text(&input.meta_description)
                    .to_lowercase()
                    .contains(&keyword),
                SeoFieldType::Slug => {
                    let slug = input.slug.to_lowercase();
                    slug.contains(&keyword) || slug.contains(&slug_keyword)
                }
                _ => false,
            };
            !found
        })
        .collect();

    let found = KEYWORD_FIELDS.len() - missing.len();
    let score = (100.0 * found as f64 / KEYWORD_FIELDS.len() as f64).round();

    if missing.is_empty() {
        return FieldScore::clean(score);
    }

    let severity = if found == 0 {
        SeoSeverity::Critical
    } else {
        SeoSeverity::Warning
    };
    let names = missing
        .iter()
        .map(|f| field_label(*f))
        .collect::<Vec<_>>()
        .join(", ");

    let issue = SeoIssue::new(
        field,
        severity,
        score,
        "Mot-clé absent de champs clés",
        format!("« {keyword} » n'apparaît pas dans : {names}."),
    )
    .with_recommendation(format!("Intégrez « {keyword} » naturellement dans : {names}."));

    FieldScore::new(score, vec![issue])
}

pub fn contains_cta(text: &str) -> bool {
    let normalized = extract_html_text(text).to_lowercase();
    !normalized.is_empty() && CTA_WORDS.iter().any(|w| normalized.contains(w))
}

pub fn score_cta(input: &ProductSeoInput) -> FieldScore {
    let field = SeoFieldType::CtaDetection;
    let in_meta = contains_cta(&input.meta_description);
    let in_short = contains_cta(&input.short_description);

    match (in_meta, in_short) {
        (true, true) => FieldScore::clean(100.0),
        (true, false) | (false, true) => {
            let (present, absent) = if in_meta {
                (SeoFieldType::MetaDescription, SeoFieldType::ShortDescription)
            } else {
                (SeoFieldType::ShortDescription, SeoFieldType::MetaDescription)
            };
            let issue = SeoIssue::new(
                field,
                SeoSeverity::Info,
                60.0,
                "Appel à l'action partiel",
                format!(
                    "Un appel à l'action est présent dans « {} » mais pas dans « {} ».",
                    field_label(present),
                    field_label(absent)
                ),
            )
            .with_recommendation(format!(
                "Ajoutez un verbe d'action (découvrez, commandez…) dans « {} ».",
                field_label(absent)
            ));
            FieldScore::new(60.0, vec![issue])
        }
        (false, false) => {
            let issue = SeoIssue::new(
                field,
                SeoSeverity::Warning,
                0.0,
                "Aucun appel à l'action",
                "Ni la meta description ni la description courte n'incitent à l'action.",
            )
            .with_recommendation(
                "Terminez la meta description par une incitation : \
                 « Découvrez », « Commandez », « Livraison offerte »…",
            );
            FieldScore::new(0.0, vec![issue])
        }
    }
}

/// Traffic signal from the top Search Console query.
///
/// `gsc_data` must already be sorted by impressions, descending.
pub fn score_gsc_traffic_signal(gsc_data: Option<&[GscQueryData]>) -> FieldScore {
    let field = SeoFieldType::GscTrafficSignal;
    let Some(top) = gsc_data.and_then(|rows| rows.first()) else {
        return FieldScore::clean(GSC_NEUTRAL_SCORE);
    };

    let impression_score = ((top.impressions.max(1) as f64).log10() * 25.0).min(80.0);
    let position_bonus = if top.position <= 10.0 {
        20.0
    } else if top.position <= 20.0 {
        10.0
    } else {
        0.0
    };
    let score = (impression_score + position_bonus).round().min(100.0);

    let mut issues = Vec::new();
    if top.position > 20.0 {
        issues.push(
            SeoIssue::new(
                field,
                SeoSeverity::Info,
                score,
                "Positionnement faible",
                format!(
                    "Requête principale « {} » en position {:.1}.",
                    top.query, top.position
                ),
            )
            .with_recommendation(
                "Renforcez le contenu autour de cette requête pour entrer dans le top 20.",
            ),
        );
    }
    if top.impressions > 0 && top.ctr < GSC_LOW_CTR {
        issues.push(
            SeoIssue::new(
                field,
                SeoSeverity::Info,
                score,
                "Taux de clic faible",
                format!(
                    "{} impressions pour un CTR de {:.1} %.",
                    top.impressions,
                    top.ctr * 100.0
                ),
            )
            .with_recommendation("Rendez la meta description et le meta titre plus incitatifs."),
        );
    }

    FieldScore::new(score, issues)
}
