use super::tables::LengthThresholds;
use super::types::{FieldScore, SeoFieldType, SeoIssue, SeoSeverity};
use crate::text::{char_len, extract_html_text};

/// Piecewise length curve, continuous at every boundary.
///
/// * below `min`: 0 -> 40 (rounded)
/// * `min..ideal_min`: 40 -> 100
/// * `ideal_min..=ideal_max`: 100
/// * `ideal_max..=max`: 100 -> 70
/// * past `max`: 70 -> 0 over another `max / 2` characters
pub fn score_by_char_length(len: usize, t: &LengthThresholds) -> f64 {
    let len = len as f64;
    let min = t.min as f64;
    let ideal_min = t.ideal_min as f64;
    let ideal_max = t.ideal_max as f64;
    let max = t.max as f64;

    let score = if len < min {
        (len / min * 40.0).round()
    } else if len < ideal_min {
        40.0 + (len - min) / (ideal_min - min) * 60.0
    } else if len <= ideal_max {
        100.0
    } else if len <= max {
        100.0 - (len - ideal_max) / (max - ideal_max) * 30.0
    } else {
        (70.0 - (len - max) / (max * 0.5) * 70.0).max(0.0)
    };

    clamp_score(score)
}

/// Scores one length-based text field on its rendered text.
pub fn score_text_field(
    value: &str,
    field: SeoFieldType,
    label: &str,
    t: &LengthThresholds,
) -> FieldScore {
    let text = extract_html_text(value);
    let ideal = format!("{} à {} caractères", t.ideal_min, t.ideal_max);

    if text.is_empty() {
        let issue = SeoIssue::new(
            field,
            SeoSeverity::Critical,
            0.0,
            format!("{label} manquant"),
            format!("Le champ « {label} » est vide."),
        )
        .with_recommendation(format!("Rédigez un contenu de {ideal}."));
        return FieldScore::new(0.0, vec![issue]);
    }

    let len = char_len(&text);
    let score = score_by_char_length(len, t);
    let mut issues = Vec::new();

    if len < t.min {
        issues.push(
            SeoIssue::new(
                field,
                SeoSeverity::Warning,
                score,
                format!("{label} trop court"),
                format!("{len} caractères, minimum recommandé : {}.", t.min),
            )
            .with_recommendation(format!("Visez {ideal}.")),
        );
    } else if len < t.ideal_min {
        issues.push(
            SeoIssue::new(
                field,
                SeoSeverity::Info,
                score,
                format!("{label} un peu court"),
                format!("{len} caractères, en dessous de la plage idéale."),
            )
            .with_recommendation(format!("Enrichissez le texte pour atteindre {ideal}.")),
        );
    } else if len > t.max {
        issues.push(
            SeoIssue::new(
                field,
                SeoSeverity::Warning,
                score,
                format!("{label} trop long"),
                format!(
                    "{len} caractères, au-delà de {} : \
                     le texte sera tronqué dans les résultats de recherche.",
                    t.max
                ),
            )
            .with_recommendation(format!("Raccourcissez à {ideal}.")),
        );
    } else if len > t.ideal_max {
        issues.push(
            SeoIssue::new(
                field,
                SeoSeverity::Info,
                score,
                format!("{label} un peu long"),
                format!("{len} caractères, au-delà de la plage idéale."),
            )
            .with_recommendation(format!("Resserrez le texte pour rester entre {ideal}.")),
        );
    }

    FieldScore::new(score, issues)
}

#[inline]
pub(crate) fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::tables::{DESCRIPTION_THRESHOLDS, META_TITLE_THRESHOLDS, TITLE_THRESHOLDS};
    use rstest::rstest;

    #[rstest]
    #[case(0, 0.0)]
    #[case(15, 20.0)]
    #[case(30, 40.0)]
    #[case(40, 70.0)]
    #[case(50, 100.0)]
    #[case(55, 100.0)]
    #[case(60, 100.0)]
    #[case(65, 85.0)]
    #[case(70, 70.0)]
    #[case(105, 0.0)]
    #[case(200, 0.0)]
    fn meta_title_curve(#[case] len: usize, #[case] expected: f64) {
        let score = score_by_char_length(len, &META_TITLE_THRESHOLDS);
        assert!(
            (score - expected).abs() < 1e-9,
            "len {len}: expected {expected}, got {score}"
        );
    }

    #[test]
    fn below_min_never_exceeds_forty() {
        for len in 0..TITLE_THRESHOLDS.min {
            assert!(score_by_char_length(len, &TITLE_THRESHOLDS) <= 40.0);
        }
    }

    #[test]
    fn just_past_max_drops_below_seventy() {
        let t = DESCRIPTION_THRESHOLDS;
        assert!(score_by_char_length(t.max + 1, &t) < 70.0);
        assert!(score_by_char_length(t.ideal_min - 1, &t) < 100.0);
    }

    #[test]
    fn empty_field_is_single_critical() {
        let res = score_text_field("  <p> </p> ", SeoFieldType::Title, "Titre", &TITLE_THRESHOLDS);
        assert_eq!(res.score, 0.0);
        assert_eq!(res.issues.len(), 1);
        assert_eq!(res.issues[0].severity, SeoSeverity::Critical);
    }

    #[test]
    fn markup_is_not_counted() {
        let plain = "a".repeat(55);
        let html = format!("<h1><strong>{plain}</strong></h1>");
        let res = score_text_field(
            &html,
            SeoFieldType::MetaTitle,
            "Meta titre",
            &META_TITLE_THRESHOLDS,
        );
        assert_eq!(res.score, 100.0);
        assert!(res.issues.is_empty());
    }

    #[test]
    fn too_long_warns_about_truncation() {
        let res = score_text_field(
            &"x".repeat(90),
            SeoFieldType::MetaTitle,
            "Meta titre",
            &META_TITLE_THRESHOLDS,
        );
        assert_eq!(res.issues.len(), 1);
        assert_eq!(res.issues[0].severity, SeoSeverity::Warning);
        assert!(res.issues[0].description.contains("tronqué"));
    }
}
