use super::fields::clamp_score;
use super::tables::{field_label, SLUG_WORD_THRESHOLDS};
use super::types::{FieldScore, SeoFieldType, SeoIssue, SeoSeverity};
use once_cell::sync::Lazy;
use regex::Regex;

static SLUG_FORMAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid slug pattern"));

/// Score ceiling for a slug that is not lowercase alphanumeric words joined by hyphens.
pub const SLUG_FORMAT_CAP: f64 = 40.0;

/// Word-count curve: 0 -> 50 below the minimum, 50 -> 100 up to the ideal band,
/// 100 -> 70 up to the maximum, then -10 per extra word with a floor of 20.
pub fn score_by_word_count(words: usize) -> f64 {
    let t = SLUG_WORD_THRESHOLDS;
    let w = words as f64;
    let (min, ideal_min, ideal_max, max) = (
        t.min as f64,
        t.ideal_min as f64,
        t.ideal_max as f64,
        t.max as f64,
    );

    let score = if w < min {
        (w / min * 50.0).round()
    } else if w < ideal_min {
        50.0 + (w - min) / (ideal_min - min) * 50.0
    } else if w <= ideal_max {
        100.0
    } else if w <= max {
        100.0 - (w - ideal_max) / (max - ideal_max) * 30.0
    } else {
        (70.0 - (w - max) * 10.0).max(20.0)
    };

    clamp_score(score)
}

pub fn score_slug(slug: &str) -> FieldScore {
    let field = SeoFieldType::Slug;
    let label = field_label(field);
    let cleaned = slug.trim().trim_matches('/');

    if cleaned.is_empty() {
        let issue = SeoIssue::new(
            field,
            SeoSeverity::Critical,
            0.0,
            format!("{label} manquant"),
            "Le produit n'a pas d'URL personnalisée.",
        )
        .with_recommendation(
            "Définissez un slug court en minuscules, mots séparés par des tirets.",
        );
        return FieldScore::new(0.0, vec![issue]);
    }

    let t = SLUG_WORD_THRESHOLDS;
    // Raw split: stray hyphens count as words and also fail the format check.
    let word_count = cleaned.split('-').count();
    let mut score = score_by_word_count(word_count);
    let mut issues = Vec::new();
    let ideal = format!("{} à {} mots", t.ideal_min, t.ideal_max);

    if word_count < t.min {
        issues.push(
            SeoIssue::new(
                field,
                SeoSeverity::Warning,
                score,
                format!("{label} trop court"),
                format!("{word_count} mot(s), minimum recommandé : {}.", t.min),
            )
            .with_recommendation(format!("Décrivez le produit en {ideal}.")),
        );
    } else if word_count < t.ideal_min {
        issues.push(
            SeoIssue::new(
                field,
                SeoSeverity::Info,
                score,
                format!("{label} un peu court"),
                format!("{word_count} mots, en dessous de la plage idéale."),
            )
            .with_recommendation(format!("Ajoutez un mot descriptif pour atteindre {ideal}.")),
        );
    } else if word_count > t.max {
        issues.push(
            SeoIssue::new(
                field,
                SeoSeverity::Warning,
                score,
                format!("{label} trop long"),
                format!("{word_count} mots, maximum recommandé : {}.", t.max),
            )
            .with_recommendation(format!("Retirez les mots vides pour revenir à {ideal}.")),
        );
    } else if word_count > t.ideal_max {
        issues.push(
            SeoIssue::new(
                field,
                SeoSeverity::Info,
                score,
                format!("{label} un peu long"),
                format!("{word_count} mots, au-delà de la plage idéale."),
            )
            .with_recommendation(format!("Visez {ideal}.")),
        );
    }

    if !SLUG_FORMAT_RE.is_match(cleaned) {
        score = score.min(SLUG_FORMAT_CAP);
        issues.push(
            SeoIssue::new(
                field,
                SeoSeverity::Warning,
                score,
                format!("Format de {label} invalide"),
                format!(
                    "« {cleaned} » contient des majuscules, des caractères spéciaux \
                     ou des tirets multiples."
                ),
            )
            .with_recommendation(
                "Utilisez uniquement des lettres minuscules sans accents, \
                 des chiffres et des tirets simples.",
            ),
        );
    }

    FieldScore::new(score, issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 25.0)]
    #[case(2, 50.0)]
    #[case(3, 100.0)]
    #[case(5, 100.0)]
    #[case(6, 90.0)]
    #[case(8, 70.0)]
    #[case(9, 60.0)]
    #[case(20, 20.0)]
    fn word_curve(#[case] words: usize, #[case] expected: f64) {
        assert!((score_by_word_count(words) - expected).abs() < 1e-9);
    }

    #[test]
    fn single_word_slug() {
        let res = score_slug("a");
        assert_eq!(res.score, 25.0);
        assert_eq!(res.issues.len(), 1);
        assert_eq!(res.issues[0].severity, SeoSeverity::Warning);
    }

    #[test]
    fn invalid_format_is_capped_and_flagged() {
        let res = score_slug("PRODUIT_BIO!!");
        assert_eq!(res.score, 25.0);
        assert_eq!(res.issues.len(), 2);
        assert!(res.issues.iter().any(|i| i.title.contains("Format")));
    }

    #[test]
    fn format_cap_dominates_length() {
        let res = score_slug("Sac-Cuir-Noir-Femme");
        assert_eq!(res.score, SLUG_FORMAT_CAP);
        assert_eq!(res.issues.len(), 1);
    }

    #[test]
    fn trailing_hyphen_counts_as_a_word() {
        let res = score_slug("a-");
        // Two words (50), then the format cap.
        assert_eq!(res.score, SLUG_FORMAT_CAP);
        assert_eq!(res.issues.len(), 2);
        assert_eq!(res.issues[0].severity, SeoSeverity::Info);
        assert!(res.issues[1].title.contains("Format"));
    }

    #[test]
    fn surrounding_slashes_are_ignored() {
        let res = score_slug("/sac-cuir-noir/");
        assert_eq!(res.score, 100.0);
        assert!(res.issues.is_empty());
    }

    #[test]
    fn missing_slug_is_critical() {
        let res = score_slug("  / ");
        assert_eq!(res.score, 0.0);
        assert_eq!(res.issues[0].severity, SeoSeverity::Critical);
    }
}
