pub mod bonus;
pub mod breakdown;
pub mod engine;
pub mod fields;
pub mod images;
pub mod loader;
pub mod slug;
pub mod tables;
pub mod types;

pub use self::breakdown::compute_seo_breakdown;
pub use self::engine::calculate_product_seo_score;
pub use self::types::{
    ProductSeoCriterion, ProductSeoInput, ProductSeoResult, SeoBreakdown, SeoFieldType, SeoIssue,
    SeoLevel, SeoSeverity,
};
use crate::config::ScoringWeights;
use crate::error::SeoResult;

/// Product SEO evaluator. Holds the criterion weights; scoring itself is pure.
#[derive(Debug, Clone, Default)]
pub struct SeoScorer {
    pub weights: ScoringWeights,
}

impl SeoScorer {
    pub fn new(weights: ScoringWeights) -> SeoResult<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn breakdown(&self, input: &ProductSeoInput) -> SeoBreakdown {
        compute_seo_breakdown(&self.score(input).criteria)
    }
}
