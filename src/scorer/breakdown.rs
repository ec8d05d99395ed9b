use super::engine::weighted_average;
use super::types::{ProductSeoCriterion, SeoBreakdown, SeoFieldType};

/// Sub-maximum of each dashboard bucket; four buckets span 0..=100.
pub const BUCKET_MAX: f64 = 25.0;

pub const TITLE_KEYS: [SeoFieldType; 2] = [SeoFieldType::MetaTitle, SeoFieldType::Title];
pub const DESCRIPTION_KEYS: [SeoFieldType; 3] = [
    SeoFieldType::MetaDescription,
    SeoFieldType::ShortDescription,
    SeoFieldType::Description,
];
pub const IMAGE_KEYS: [SeoFieldType; 2] = [SeoFieldType::Images, SeoFieldType::AltText];
pub const TECHNICAL_KEYS: [SeoFieldType; 4] = [
    SeoFieldType::Slug,
    SeoFieldType::KeywordPresence,
    SeoFieldType::CtaDetection,
    SeoFieldType::GscTrafficSignal,
];

fn bucket(criteria: &[ProductSeoCriterion], keys: &[SeoFieldType]) -> u8 {
    let avg = weighted_average(criteria.iter().filter(|c| keys.contains(&c.key)));
    (avg * BUCKET_MAX / 100.0).round().clamp(0.0, BUCKET_MAX) as u8
}

fn raw(criteria: &[ProductSeoCriterion], key: SeoFieldType) -> f64 {
    criteria
        .iter()
        .find(|c| c.key == key)
        .map(|c| c.score)
        .unwrap_or(0.0)
}

/// Regroups criteria into the four dashboard buckets.
///
/// The buckets are not reconciled with `overall`: they group a different
/// subset per bucket and bonus criteria count at full weight here.
pub fn compute_seo_breakdown(criteria: &[ProductSeoCriterion]) -> SeoBreakdown {
    SeoBreakdown {
        titles: bucket(criteria, &TITLE_KEYS),
        descriptions: bucket(criteria, &DESCRIPTION_KEYS),
        images: bucket(criteria, &IMAGE_KEYS),
        technical: bucket(criteria, &TECHNICAL_KEYS),
        f_meta_title: raw(criteria, SeoFieldType::MetaTitle),
        f_title: raw(criteria, SeoFieldType::Title),
        f_meta_description: raw(criteria, SeoFieldType::MetaDescription),
        f_description: (raw(criteria, SeoFieldType::ShortDescription)
            + raw(criteria, SeoFieldType::Description))
            / 2.0,
        f_images: (raw(criteria, SeoFieldType::Images) + raw(criteria, SeoFieldType::AltText))
            / 2.0,
        f_slug: raw(criteria, SeoFieldType::Slug),
    }
}
