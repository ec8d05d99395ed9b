use seoscore::api::{analyze_content, score_catalog, score_product_json, CatalogSummary};
use seoscore::config::ScoringWeights;
use seoscore::error::SeoError;
use seoscore::realtime::RealTimeSeoOptions;
use seoscore::scorer::types::ProductImage;
use seoscore::scorer::{calculate_product_seo_score, compute_seo_breakdown, ProductSeoInput};

fn catalog() -> Vec<ProductSeoInput> {
    (0..40)
        .map(|i| ProductSeoInput {
            title: format!("Produit numéro {i} en cuir pleine fleur"),
            slug: if i % 3 == 0 {
                String::new()
            } else {
                format!("produit-cuir-{i}")
            },
            images: (0..i % 6).map(|_| ProductImage::with_alt("Vue")).collect(),
            ..Default::default()
        })
        .collect()
}

#[test]
fn test_score_product_json_matches_direct_call() {
    let json = r#"{"title": "Sac en cuir noir pour femme", "slug": "sac-cuir-noir",
                   "images": [{"alt": "Face"}]}"#;
    let via_json = score_product_json(json).unwrap();
    let input: ProductSeoInput = serde_json::from_str(json).unwrap();
    assert_eq!(via_json, calculate_product_seo_score(&input));
}

#[test]
fn test_score_product_json_rejects_garbage() {
    assert!(score_product_json("[1, 2").is_err());
}

#[test]
fn test_catalog_rejects_invalid_weights() {
    let nan = ScoringWeights {
        weight_slug: f64::NAN,
        ..Default::default()
    };
    assert!(matches!(score_catalog(&catalog(), &nan), Err(SeoError::Config(_))));

    let negative = ScoringWeights {
        bonus_pool: -1.0,
        ..Default::default()
    };
    assert!(matches!(score_catalog(&catalog(), &negative), Err(SeoError::Config(_))));

    let empty: &[ProductSeoInput] = &[];
    assert!(score_catalog(empty, &nan).is_err());
}

#[test]
fn test_catalog_order_and_consistency() {
    let products = catalog();
    let entries = score_catalog(&products, &ScoringWeights::default()).unwrap();
    assert_eq!(entries.len(), products.len());

    for (i, (entry, product)) in entries.iter().zip(&products).enumerate() {
        assert_eq!(entry.index, i);
        assert_eq!(entry.title, product.title);
        let direct = calculate_product_seo_score(product);
        assert_eq!(entry.result, direct);
        assert_eq!(entry.breakdown, compute_seo_breakdown(&direct.criteria));
    }
}

#[test]
fn test_catalog_summary() {
    let entries = score_catalog(&catalog(), &ScoringWeights::default()).unwrap();
    let summary = CatalogSummary::from_entries(&entries);

    assert_eq!(summary.products, 40);
    assert_eq!(summary.per_level.len(), 5);
    assert_eq!(summary.per_level.values().sum::<usize>(), 40);

    let mean = entries.iter().map(|e| e.result.overall as f64).sum::<f64>() / 40.0;
    assert!((summary.average_overall - mean).abs() < 1e-9);
}

#[test]
fn test_empty_catalog_summary() {
    let summary = CatalogSummary::from_entries(&[]);
    assert_eq!(summary.products, 0);
    assert_eq!(summary.average_overall, 0.0);
    assert!(summary.per_level.values().all(|&n| n == 0));
}

#[test]
fn test_breakdown_buckets_stay_in_range() {
    for entry in score_catalog(&catalog(), &ScoringWeights::default()).unwrap() {
        let b = entry.breakdown;
        for bucket in [b.titles, b.descriptions, b.images, b.technical] {
            assert!(bucket <= 25);
        }
    }
}

#[test]
fn test_analyze_content_wrapper() {
    let a = analyze_content(
        "# Titre\n\nUn paragraphe.",
        &["paragraphe".to_string()],
        &RealTimeSeoOptions::default(),
    );
    assert_eq!(a.keywords.len(), 1);
    assert_eq!(a.keywords[0].occurrences, 1);
}
