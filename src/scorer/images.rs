use super::types::{FieldScore, ProductImage, SeoFieldType, SeoIssue, SeoSeverity};

/// Stepped scale on the gallery size. No interpolation between steps.
pub fn image_count_score(count: usize) -> f64 {
    match count {
        0 => 0.0,
        1 => 40.0,
        2 => 65.0,
        3 | 4 => 85.0,
        _ => 100.0,
    }
}

pub fn score_images(images: &[ProductImage]) -> FieldScore {
    let field = SeoFieldType::Images;
    let count = images.len();
    let score = image_count_score(count);

    let issue = match count {
        0 => Some(
            SeoIssue::new(
                field,
                SeoSeverity::Warning,
                score,
                "Aucune image",
                "Le produit n'a aucune image.",
            )
            .with_recommendation("Ajoutez au moins 3 photos du produit sous différents angles."),
        ),
        1 => Some(
            SeoIssue::new(
                field,
                SeoSeverity::Info,
                score,
                "Une seule image",
                "Une galerie d'une seule photo limite la visibilité dans la recherche d'images.",
            )
            .with_recommendation("Ajoutez des vues complémentaires (détail, porté, contexte)."),
        ),
        2 => Some(
            SeoIssue::new(
                field,
                SeoSeverity::Info,
                score,
                "Galerie réduite",
                "2 images seulement.",
            )
            .with_recommendation("Visez 5 images ou plus."),
        ),
        _ => None,
    };

    FieldScore::new(score, issue.into_iter().collect())
}

pub fn score_alt_text(images: &[ProductImage]) -> FieldScore {
    let field = SeoFieldType::AltText;
    let total = images.len();

    if total == 0 {
        let issue = SeoIssue::new(
            field,
            SeoSeverity::Info,
            0.0,
            "Aucun texte alternatif à évaluer",
            "Le produit n'a pas d'image.",
        )
        .with_recommendation("Ajoutez des images avec un texte alternatif descriptif.");
        return FieldScore::new(0.0, vec![issue]);
    }

    let with_alt = images.iter().filter(|img| img.has_alt()).count();
    let missing = total - with_alt;
    let score = (100.0 * with_alt as f64 / total as f64).round();

    if missing == 0 {
        return FieldScore::clean(score);
    }

    let (severity, title) = if with_alt == 0 {
        (SeoSeverity::Critical, "Aucun texte alternatif")
    } else {
        (SeoSeverity::Warning, "Textes alternatifs incomplets")
    };

    let issue = SeoIssue::new(
        field,
        severity,
        score,
        title,
        format!("{missing} image(s) sur {total} sans texte alternatif."),
    )
    .with_recommendation("Décrivez chaque image en incluant le nom du produit.");

    FieldScore::new(score, vec![issue])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn gallery(alts: &[Option<&str>]) -> Vec<ProductImage> {
        alts.iter()
            .map(|a| ProductImage {
                alt: a.map(str::to_string),
            })
            .collect()
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(1, 40.0)]
    #[case(2, 65.0)]
    #[case(3, 85.0)]
    #[case(4, 85.0)]
    #[case(5, 100.0)]
    #[case(12, 100.0)]
    fn count_steps(#[case] count: usize, #[case] expected: f64) {
        assert_eq!(image_count_score(count), expected);
    }

    #[test]
    fn no_images_is_warning_not_critical() {
        let res = score_images(&[]);
        assert_eq!(res.issues[0].severity, SeoSeverity::Warning);
        let alt = score_alt_text(&[]);
        assert_eq!(alt.score, 0.0);
        assert_eq!(alt.issues[0].severity, SeoSeverity::Info);
    }

    #[test]
    fn partial_alt_coverage() {
        let imgs = gallery(&[Some("Sac"), None, Some("  "), Some("Sac dos")]);
        let res = score_alt_text(&imgs);
        assert_eq!(res.score, 50.0);
        assert_eq!(res.issues.len(), 1);
        assert_eq!(res.issues[0].severity, SeoSeverity::Warning);
        assert!(res.issues[0].description.starts_with("2 image(s)"));
    }

    #[test]
    fn zero_coverage_with_images_is_critical() {
        let res = score_alt_text(&gallery(&[None, None]));
        assert_eq!(res.score, 0.0);
        assert_eq!(res.issues[0].severity, SeoSeverity::Critical);
    }

    #[test]
    fn full_coverage_has_no_issue() {
        let res = score_alt_text(&gallery(&[Some("a"), Some("b")]));
        assert_eq!(res.score, 100.0);
        assert!(res.issues.is_empty());
    }
}
