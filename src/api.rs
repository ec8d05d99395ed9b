use crate::config::ScoringWeights;
use crate::error::SeoResult;
use crate::realtime::{analyze_realtime_seo, RealTimeSeoAnalysis, RealTimeSeoOptions};
use crate::scorer::types::{ProductSeoInput, ProductSeoResult, SeoBreakdown, SeoLevel};
use crate::scorer::{calculate_product_seo_score, compute_seo_breakdown, SeoScorer};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use tracing::info;

/// One scored product of a catalog run.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub index: usize,
    pub title: String,
    pub result: ProductSeoResult,
    pub breakdown: SeoBreakdown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub products: usize,
    pub average_overall: f64,
    pub per_level: BTreeMap<String, usize>,
}

impl CatalogSummary {
    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        let mut per_level: BTreeMap<String, usize> =
            SeoLevel::iter().map(|l| (l.to_string(), 0)).collect();
        for e in entries {
            *per_level.entry(e.result.level.to_string()).or_default() += 1;
        }

        let average_overall = if entries.is_empty() {
            0.0
        } else {
            entries.iter().map(|e| e.result.overall as f64).sum::<f64>() / entries.len() as f64
        };

        Self {
            products: entries.len(),
            average_overall,
            per_level,
        }
    }
}

/// Service: score one product given as JSON, with the reference weights.
pub fn score_product_json(json: &str) -> SeoResult<ProductSeoResult> {
    let input: ProductSeoInput = serde_json::from_str(json)?;
    Ok(calculate_product_seo_score(&input))
}

/// Service: score a whole catalog in parallel. Output order follows input order.
///
/// Fails on invalid weights before any product is scored.
pub fn score_catalog(
    products: &[ProductSeoInput],
    weights: &ScoringWeights,
) -> SeoResult<Vec<CatalogEntry>> {
    let scorer = SeoScorer::new(weights.clone())?;

    let entries: Vec<CatalogEntry> = products
        .par_iter()
        .enumerate()
        .map(|(index, product)| {
            let result = scorer.score(product);
            let breakdown = compute_seo_breakdown(&result.criteria);
            CatalogEntry {
                index,
                title: product.title.clone(),
                result,
                breakdown,
            }
        })
        .collect();

    info!("📊 Scored {} products", entries.len());
    Ok(entries)
}

/// Service: long-form content analysis with the default parameters.
pub fn analyze_content(
    content: &str,
    keywords: &[String],
    options: &RealTimeSeoOptions,
) -> RealTimeSeoAnalysis {
    analyze_realtime_seo(content, keywords, options)
}
