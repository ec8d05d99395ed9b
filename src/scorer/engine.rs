use super::bonus::{score_cta, score_gsc_traffic_signal, score_keyword_presence};
use super::fields::score_text_field;
use super::images::{score_alt_text, score_images};
use super::slug::score_slug;
use super::tables::{
    field_label, get_seo_level, is_bonus, DESCRIPTION_THRESHOLDS, META_DESCRIPTION_THRESHOLDS,
    META_TITLE_THRESHOLDS, SHORT_DESCRIPTION_THRESHOLDS, TITLE_THRESHOLDS,
};
use super::types::{
    FieldScore, ProductSeoCriterion, ProductSeoInput, ProductSeoResult, ScoreProjection,
    SeoFieldType,
};
use super::SeoScorer;
use crate::config::ScoringWeights;
use strum::IntoEnumIterator;
use tracing::debug;

/// Dispatches one criterion to its scorer. Total over `SeoFieldType`.
pub fn score_field(field: SeoFieldType, input: &ProductSeoInput) -> FieldScore {
    let label = field_label(field);
    match field {
        SeoFieldType::Title => score_text_field(&input.title, field, label, &TITLE_THRESHOLDS),
        SeoFieldType::ShortDescription => score_text_field(
            &input.short_description,
            field,
            label,
            &SHORT_DESCRIPTION_THRESHOLDS,
        ),
        SeoFieldType::Description => {
            score_text_field(&input.description, field, label, &DESCRIPTION_THRESHOLDS)
        }
        SeoFieldType::MetaTitle => {
            score_text_field(&input.meta_title, field, label, &META_TITLE_THRESHOLDS)
        }
        SeoFieldType::MetaDescription => score_text_field(
            &input.meta_description,
            field,
            label,
            &META_DESCRIPTION_THRESHOLDS,
        ),
        SeoFieldType::Slug => score_slug(&input.slug),
        SeoFieldType::Images => score_images(&input.images),
        SeoFieldType::AltText => score_alt_text(&input.images),
        SeoFieldType::KeywordPresence => score_keyword_presence(input),
        SeoFieldType::CtaDetection => score_cta(input),
        SeoFieldType::GscTrafficSignal => score_gsc_traffic_signal(input.gsc_data.as_deref()),
    }
}

/// Runs every scorer once, in `SeoFieldType` declaration order.
pub fn evaluate_criteria(
    input: &ProductSeoInput,
    weights: &ScoringWeights,
) -> Vec<ProductSeoCriterion> {
    SeoFieldType::iter()
        .map(|key| {
            let FieldScore { score, issues } = score_field(key, input);
            ProductSeoCriterion {
                key,
                label: field_label(key).to_string(),
                score,
                weight: weights.weight_for(key),
                is_bonus: is_bonus(key),
                issues,
            }
        })
        .collect()
}

/// Weight-proportional mean of the given criteria. Zero when the weights sum to zero.
pub fn weighted_average<'a, I>(criteria: I) -> f64
where
    I: IntoIterator<Item = &'a ProductSeoCriterion>,
{
    let (sum, total_weight) = criteria
        .into_iter()
        .fold((0.0, 0.0), |(sum, tw), c| (sum + c.score * c.weight, tw + c.weight));
    if total_weight > 0.0 {
        sum / total_weight
    } else {
        0.0
    }
}

/// Bonus criteria share `pool` points in proportion to their weights, each scaled by its score.
pub fn bonus_points(criteria: &[ProductSeoCriterion], pool: f64) -> f64 {
    let bonus_total: f64 = criteria.iter().filter(|c| c.is_bonus).map(|c| c.weight).sum();
    if bonus_total <= 0.0 {
        return 0.0;
    }
    criteria
        .iter()
        .filter(|c| c.is_bonus)
        .map(|c| (c.score / 100.0) * (c.weight / bonus_total) * pool)
        .sum()
}

pub fn aggregate(criteria: Vec<ProductSeoCriterion>, weights: &ScoringWeights) -> ProductSeoResult {
    let base_score = weighted_average(criteria.iter().filter(|c| !c.is_bonus));
    let bonus = bonus_points(&criteria, weights.bonus_pool);
    let overall = (base_score + bonus).round().clamp(0.0, 100.0) as u8;
    let level = get_seo_level(overall).level;

    let mut issues: Vec<_> = criteria.iter().flat_map(|c| c.issues.iter().cloned()).collect();
    // Stable: equal severities keep criterion order.
    issues.sort_by_key(|i| i.severity.rank());

    let field_scores = criteria.iter().map(|c| (c.key, c.score)).collect();

    debug!(
        "SEO score: overall={} base={:.2} bonus={:.2} issues={}",
        overall,
        base_score,
        bonus,
        issues.len()
    );

    ProductSeoResult {
        overall,
        level,
        criteria,
        issues,
        field_scores,
    }
}

impl SeoScorer {
    pub fn score(&self, input: &ProductSeoInput) -> ProductSeoResult {
        aggregate(evaluate_criteria(input, &self.weights), &self.weights)
    }

    /// Scores the product as-is and with `field` replaced by `value`.
    ///
    /// `KeywordPresence` replaces the focus keyword. Non-text fields are left
    /// untouched and yield a zero delta.
    pub fn project_field_change(
        &self,
        input: &ProductSeoInput,
        field: SeoFieldType,
        value: &str,
    ) -> ScoreProjection {
        let before = self.score(input);

        let mut modified = input.clone();
        match field {
            SeoFieldType::Title => modified.title = value.to_string(),
            SeoFieldType::ShortDescription => modified.short_description = value.to_string(),
            SeoFieldType::Description => modified.description = value.to_string(),
            SeoFieldType::MetaTitle => modified.meta_title = value.to_string(),
            SeoFieldType::MetaDescription => modified.meta_description = value.to_string(),
            SeoFieldType::Slug => modified.slug = value.to_string(),
            SeoFieldType::KeywordPresence => modified.focus_keyword = Some(value.to_string()),
            SeoFieldType::Images
            | SeoFieldType::AltText
            | SeoFieldType::CtaDetection
            | SeoFieldType::GscTrafficSignal => {}
        }
        let after = self.score(&modified);

        let field_score = |r: &ProductSeoResult| r.field_scores.get(&field).copied().unwrap_or(0.0);

        ScoreProjection {
            field,
            before: before.overall,
            after: after.overall,
            delta: after.overall as i16 - before.overall as i16,
            field_before: field_score(&before),
            field_after: field_score(&after),
        }
    }
}

/// Scores a product with the reference weights.
pub fn calculate_product_seo_score(input: &ProductSeoInput) -> ProductSeoResult {
    SeoScorer::default().score(input)
}
