//! Static scoring tables: ideal ranges, reference weights, CTA vocabulary and level tiers.

use super::types::{SeoFieldType, SeoLevel};

/// Character (or word) range for a length-scored field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthThresholds {
    pub min: usize,
    pub ideal_min: usize,
    pub ideal_max: usize,
    pub max: usize,
}

impl LengthThresholds {
    pub const fn new(min: usize, ideal_min: usize, ideal_max: usize, max: usize) -> Self {
        Self {
            min,
            ideal_min,
            ideal_max,
            max,
        }
    }
}

pub const META_TITLE_THRESHOLDS: LengthThresholds = LengthThresholds::new(30, 50, 60, 70);
pub const META_DESCRIPTION_THRESHOLDS: LengthThresholds = LengthThresholds::new(80, 130, 160, 170);
pub const TITLE_THRESHOLDS: LengthThresholds = LengthThresholds::new(10, 30, 60, 80);
pub const SHORT_DESCRIPTION_THRESHOLDS: LengthThresholds = LengthThresholds::new(50, 100, 200, 300);
pub const DESCRIPTION_THRESHOLDS: LengthThresholds = LengthThresholds::new(200, 400, 800, 5000);

/// Slug length is measured in hyphen-separated words.
pub const SLUG_WORD_THRESHOLDS: LengthThresholds = LengthThresholds::new(2, 3, 5, 8);

/// Shared pool redistributed across bonus criteria.
pub const MAX_BONUS_POINTS: f64 = 8.0;

/// Neutral score of the traffic signal when no Search Console data exists.
pub const GSC_NEUTRAL_SCORE: f64 = 50.0;

/// CTR under which a visible query is reported as unclicked.
pub const GSC_LOW_CTR: f64 = 0.02;

/// Reference weight of each criterion. Base weights sum to 13.0.
pub const fn default_weight(field: SeoFieldType) -> f64 {
    match field {
        SeoFieldType::MetaTitle => 2.5,
        SeoFieldType::MetaDescription => 2.5,
        SeoFieldType::Title => 2.0,
        SeoFieldType::ShortDescription => 1.5,
        SeoFieldType::Description => 2.0,
        SeoFieldType::Slug => 1.0,
        SeoFieldType::Images => 0.75,
        SeoFieldType::AltText => 0.75,
        SeoFieldType::KeywordPresence => 1.5,
        SeoFieldType::CtaDetection => 1.0,
        SeoFieldType::GscTrafficSignal => 1.5,
    }
}

pub const fn is_bonus(field: SeoFieldType) -> bool {
    matches!(
        field,
        SeoFieldType::KeywordPresence | SeoFieldType::CtaDetection | SeoFieldType::GscTrafficSignal
    )
}

pub const fn field_label(field: SeoFieldType) -> &'static str {
    match field {
        SeoFieldType::Title => "Titre du produit",
        SeoFieldType::ShortDescription => "Description courte",
        SeoFieldType::Description => "Description longue",
        SeoFieldType::MetaTitle => "Meta titre",
        SeoFieldType::MetaDescription => "Meta description",
        SeoFieldType::Slug => "Slug (URL)",
        SeoFieldType::Images => "Images",
        SeoFieldType::AltText => "Textes alternatifs",
        SeoFieldType::KeywordPresence => "Mot-clé principal",
        SeoFieldType::CtaDetection => "Appel à l'action",
        SeoFieldType::GscTrafficSignal => "Signal Search Console",
    }
}

/// Action words matched (lowercase, substring) in the meta and short descriptions.
pub const CTA_WORDS: [&str; 26] = [
    "achetez",
    "acheter",
    "découvrez",
    "découvrir",
    "commandez",
    "commander",
    "profitez",
    "profiter",
    "essayez",
    "réservez",
    "offrez",
    "craquez",
    "ajoutez au panier",
    "gratuit",
    "gratuite",
    "livraison offerte",
    "maintenant",
    "aujourd'hui",
    "dès maintenant",
    "en stock",
    "promo",
    "exclusif",
    "exclusivité",
    "quantité limitée",
    "offre",
    "vite",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeoLevelInfo {
    pub level: SeoLevel,
    pub min: u8,
    pub label: &'static str,
    pub color: &'static str,
    pub bg_color: &'static str,
}

/// Tiers in descending `min` order; the first tier whose `min <= score` wins.
pub const SEO_LEVELS: [SeoLevelInfo; 5] = [
    SeoLevelInfo {
        level: SeoLevel::Excellent,
        min: 90,
        label: "Excellent",
        color: "#16a34a",
        bg_color: "#dcfce7",
    },
    SeoLevelInfo {
        level: SeoLevel::Good,
        min: 70,
        label: "Bon",
        color: "#65a30d",
        bg_color: "#ecfccb",
    },
    SeoLevelInfo {
        level: SeoLevel::Average,
        min: 50,
        label: "Moyen",
        color: "#ca8a04",
        bg_color: "#fef9c3",
    },
    SeoLevelInfo {
        level: SeoLevel::Poor,
        min: 30,
        label: "Faible",
        color: "#ea580c",
        bg_color: "#ffedd5",
    },
    SeoLevelInfo {
        level: SeoLevel::Critical,
        min: 0,
        label: "Critique",
        color: "#dc2626",
        bg_color: "#fee2e2",
    },
];

pub fn get_seo_level(score: u8) -> &'static SeoLevelInfo {
    SEO_LEVELS
        .iter()
        .find(|tier| tier.min <= score)
        .unwrap_or(&SEO_LEVELS[SEO_LEVELS.len() - 1])
}

impl SeoLevel {
    pub fn info(self) -> &'static SeoLevelInfo {
        SEO_LEVELS
            .iter()
            .find(|tier| tier.level == self)
            .unwrap_or(&SEO_LEVELS[SEO_LEVELS.len() - 1])
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }
}
