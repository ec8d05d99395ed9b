use rstest::rstest;
use seoscore::scorer::fields::{score_by_char_length, score_text_field};
use seoscore::scorer::tables::{
    LengthThresholds, DESCRIPTION_THRESHOLDS, META_DESCRIPTION_THRESHOLDS, META_TITLE_THRESHOLDS,
    SHORT_DESCRIPTION_THRESHOLDS, TITLE_THRESHOLDS,
};
use seoscore::scorer::types::{GscQueryData, ProductImage};
use seoscore::scorer::{
    calculate_product_seo_score, ProductSeoInput, SeoFieldType, SeoLevel, SeoScorer, SeoSeverity,
};

fn text_of_len(prefix: &str, len: usize) -> String {
    let mut s = prefix.to_string();
    while s.chars().count() < len {
        s.push('x');
    }
    s
}

fn strong_product() -> ProductSeoInput {
    ProductSeoInput {
        title: "Sac à main en cuir noir pour femme".into(),
        meta_title: text_of_len("Sac à main en cuir noir ", 55),
        meta_description: text_of_len(
            "Découvrez notre sac à main en cuir noir, livraison offerte ",
            145,
        ),
        short_description: format!("<p>{}</p>", text_of_len("Commandez ce sac en cuir noir ", 150)),
        description: format!("<p>{}</p>", "cuir ".repeat(100)),
        slug: "sac-main-cuir-noir".into(),
        focus_keyword: Some("cuir noir".into()),
        images: (0..5).map(|i| ProductImage::with_alt(format!("Vue {i}"))).collect(),
        gsc_data: None,
    }
}

// --- CONCRETE SCENARIOS ---

#[test]
fn test_empty_product_scores_single_digit() {
    let res = calculate_product_seo_score(&ProductSeoInput::default());

    assert!(res.overall < 10, "overall = {}", res.overall);
    assert_eq!(res.level, SeoLevel::Critical);

    for key in [
        SeoFieldType::Title,
        SeoFieldType::MetaTitle,
        SeoFieldType::MetaDescription,
        SeoFieldType::ShortDescription,
        SeoFieldType::Description,
        SeoFieldType::Slug,
        SeoFieldType::Images,
        SeoFieldType::AltText,
        SeoFieldType::KeywordPresence,
        SeoFieldType::CtaDetection,
    ] {
        assert_eq!(res.field_scores[&key], 0.0, "{key}");
    }
    assert_eq!(res.field_scores[&SeoFieldType::GscTrafficSignal], 50.0);
}

#[test]
fn test_meta_title_in_ideal_band() {
    let input = ProductSeoInput {
        meta_title: text_of_len("Sac en cuir ", 55),
        ..Default::default()
    };
    let res = calculate_product_seo_score(&input);
    assert_eq!(res.field_scores[&SeoFieldType::MetaTitle], 100.0);
    assert_eq!(res.issues_for(SeoFieldType::MetaTitle).count(), 0);
}

#[test]
fn test_single_word_slug() {
    let res = calculate_product_seo_score(&ProductSeoInput {
        slug: "a".into(),
        ..Default::default()
    });
    assert_eq!(res.field_scores[&SeoFieldType::Slug], 25.0);
    let issues: Vec<_> = res.issues_for(SeoFieldType::Slug).collect();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, SeoSeverity::Warning);
}

#[test]
fn test_invalid_slug_is_capped_and_flagged() {
    let res = calculate_product_seo_score(&ProductSeoInput {
        slug: "PRODUIT_BIO!!".into(),
        ..Default::default()
    });
    assert_eq!(res.field_scores[&SeoFieldType::Slug], 25.0);
    let issues: Vec<_> = res.issues_for(SeoFieldType::Slug).collect();
    assert_eq!(issues.len(), 2);
    assert!(issues.iter().any(|i| i.title.contains("Format")));
}

#[test]
fn test_long_invalid_slug_hits_format_cap() {
    let res = calculate_product_seo_score(&ProductSeoInput {
        slug: "Sac-Cuir-Noir".into(),
        ..Default::default()
    });
    assert_eq!(res.field_scores[&SeoFieldType::Slug], 40.0);
}

#[test]
fn test_partial_alt_coverage() {
    let images = vec![
        ProductImage::with_alt("Face"),
        ProductImage::with_alt("Dos"),
        ProductImage::default(),
        ProductImage::with_alt("   "),
    ];
    let res = calculate_product_seo_score(&ProductSeoInput {
        images,
        ..Default::default()
    });
    assert_eq!(res.field_scores[&SeoFieldType::Images], 85.0);
    assert_eq!(res.field_scores[&SeoFieldType::AltText], 50.0);

    let alt: Vec<_> = res.issues_for(SeoFieldType::AltText).collect();
    assert_eq!(alt.len(), 1);
    assert_eq!(alt[0].severity, SeoSeverity::Warning);
    assert!(alt[0].description.contains('2'));
}

#[test]
fn test_gsc_signal() {
    let res = calculate_product_seo_score(&ProductSeoInput {
        gsc_data: Some(vec![GscQueryData {
            query: "x".into(),
            clicks: 10,
            impressions: 1000,
            ctr: 0.01,
            position: 5.0,
        }]),
        ..Default::default()
    });
    assert_eq!(res.field_scores[&SeoFieldType::GscTrafficSignal], 95.0);
    let gsc: Vec<_> = res.issues_for(SeoFieldType::GscTrafficSignal).collect();
    assert_eq!(gsc.len(), 1);
    assert_eq!(gsc[0].severity, SeoSeverity::Info);
}

#[test]
fn test_strong_product_is_excellent() {
    let res = calculate_product_seo_score(&strong_product());
    for c in res.criteria.iter().filter(|c| !c.is_bonus) {
        assert_eq!(c.score, 100.0, "{}", c.key);
    }
    assert_eq!(res.field_scores[&SeoFieldType::KeywordPresence], 100.0);
    assert_eq!(res.field_scores[&SeoFieldType::CtaDetection], 100.0);
    assert_eq!(res.overall, 100);
    assert_eq!(res.level, SeoLevel::Excellent);
    assert!(res.issues.is_empty());
}

// --- LENGTH CURVE ---

#[rstest]
#[case(META_TITLE_THRESHOLDS)]
#[case(META_DESCRIPTION_THRESHOLDS)]
#[case(TITLE_THRESHOLDS)]
#[case(SHORT_DESCRIPTION_THRESHOLDS)]
#[case(DESCRIPTION_THRESHOLDS)]
fn test_sweet_spot_edges(#[case] t: LengthThresholds) {
    assert_eq!(score_by_char_length(t.ideal_min, &t), 100.0);
    assert_eq!(score_by_char_length(t.ideal_max, &t), 100.0);
    assert!(score_by_char_length(t.ideal_min - 1, &t) < 100.0);
    assert!(score_by_char_length(t.max + 1, &t) < 70.0);
    assert!(score_by_char_length(t.min - 1, &t) <= 40.0);
}

#[rstest]
#[case(META_TITLE_THRESHOLDS)]
#[case(TITLE_THRESHOLDS)]
#[case(DESCRIPTION_THRESHOLDS)]
fn test_curve_is_continuous_at_boundaries(#[case] t: LengthThresholds) {
    assert_eq!(score_by_char_length(t.min, &t), 40.0);
    assert_eq!(score_by_char_length(t.max, &t), 70.0);
    assert_eq!(score_by_char_length(t.max + t.max / 2, &t), 0.0);
}

#[test]
fn test_length_measured_on_rendered_text() {
    let t = TITLE_THRESHOLDS;
    let html = format!("<h1 class=\"very-long-attribute-value\">{}</h1>", "a".repeat(40));
    let fs = score_text_field(&html, SeoFieldType::Title, "Titre", &t);
    assert_eq!(fs.score, 100.0);
    assert!(fs.issues.is_empty());
}

#[rstest]
#[case("", 1)]
#[case("   ", 1)]
#[case("<p>&nbsp;</p>", 1)]
fn test_blank_field_gets_single_critical(#[case] value: &str, #[case] expected: usize) {
    let fs = score_text_field(value, SeoFieldType::MetaTitle, "Meta titre", &META_TITLE_THRESHOLDS);
    assert_eq!(fs.score, 0.0);
    assert_eq!(fs.issues.len(), expected);
    assert_eq!(fs.issues[0].severity, SeoSeverity::Critical);
}

#[test]
fn test_every_imperfect_length_field_has_an_issue() {
    for t in [
        META_TITLE_THRESHOLDS,
        META_DESCRIPTION_THRESHOLDS,
        TITLE_THRESHOLDS,
        SHORT_DESCRIPTION_THRESHOLDS,
    ] {
        for len in 1..=(t.max * 2) {
            let fs = score_text_field(&"a".repeat(len), SeoFieldType::Title, "Titre", &t);
            if fs.score < 100.0 {
                assert!(!fs.issues.is_empty(), "len {len} score {}", fs.score);
            } else {
                assert!(fs.issues.is_empty(), "len {len}");
            }
        }
    }
}

// --- AGGREGATION ---

#[test]
fn test_issues_sorted_by_severity() {
    let res = calculate_product_seo_score(&ProductSeoInput {
        slug: "a".into(),
        images: vec![ProductImage::default()],
        gsc_data: Some(vec![GscQueryData {
            query: "x".into(),
            impressions: 50,
            position: 35.0,
            ..Default::default()
        }]),
        ..Default::default()
    });
    let ranks: Vec<u8> = res.issues.iter().map(|i| i.severity.rank()).collect();
    assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "{ranks:?}");
}

#[test]
fn test_bonus_cannot_exceed_hundred() {
    let mut input = strong_product();
    input.gsc_data = Some(vec![GscQueryData {
        query: "sac cuir noir".into(),
        clicks: 900,
        impressions: 100_000,
        ctr: 0.09,
        position: 2.0,
    }]);
    assert_eq!(calculate_product_seo_score(&input).overall, 100);
}

#[test]
fn test_projection_reports_delta() {
    let mut input = strong_product();
    input.meta_title = String::new();
    let scorer = SeoScorer::default();

    let p = scorer.project_field_change(
        &input,
        SeoFieldType::MetaTitle,
        &text_of_len("Sac à main en cuir noir ", 55),
    );
    assert_eq!(p.field_before, 0.0);
    assert_eq!(p.field_after, 100.0);
    assert!(p.after > p.before);
    assert_eq!(p.delta, p.after as i16 - p.before as i16);
}

#[test]
fn test_projection_on_non_text_field_is_noop() {
    let p = SeoScorer::default().project_field_change(
        &strong_product(),
        SeoFieldType::Images,
        "ignored",
    );
    assert_eq!(p.delta, 0);
    assert_eq!(p.before, p.after);
}

#[test]
fn test_projection_of_focus_keyword() {
    let mut input = strong_product();
    input.focus_keyword = None;
    let p = SeoScorer::default().project_field_change(
        &input,
        SeoFieldType::KeywordPresence,
        "sac",
    );
    assert_eq!(p.field_before, 0.0);
    assert_eq!(p.field_after, 100.0);
}
