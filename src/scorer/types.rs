use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString};

/// Every scoreable aspect of a product. Each variant maps to exactly one scorer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SeoFieldType {
    Title,
    ShortDescription,
    Description,
    MetaTitle,
    MetaDescription,
    Slug,
    Images,
    AltText,
    KeywordPresence,
    CtaDetection,
    GscTrafficSignal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SeoSeverity {
    Critical,
    Warning,
    Info,
    Success,
}

impl SeoSeverity {
    /// Sort rank: lower comes first.
    pub fn rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::Warning => 1,
            Self::Info => 2,
            Self::Success => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoIssue {
    pub field: SeoFieldType,
    pub severity: SeoSeverity,
    pub score: f64,
    pub title: String,
    pub description: String,
    pub recommendation: Option<String>,
}

impl SeoIssue {
    pub fn new(
        field: SeoFieldType,
        severity: SeoSeverity,
        score: f64,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            field,
            severity,
            score,
            title: title.into(),
            description: description.into(),
            recommendation: None,
        }
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }
}

/// Output of a single scorer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldScore {
    pub score: f64,
    pub issues: Vec<SeoIssue>,
}

impl FieldScore {
    pub fn new(score: f64, issues: Vec<SeoIssue>) -> Self {
        Self { score, issues }
    }

    pub fn clean(score: f64) -> Self {
        Self {
            score,
            issues: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    #[serde(default)]
    pub alt: Option<String>,
}

impl ProductImage {
    pub fn with_alt(alt: impl Into<String>) -> Self {
        Self {
            alt: Some(alt.into()),
        }
    }

    pub fn has_alt(&self) -> bool {
        self.alt.as_deref().is_some_and(|a| !a.trim().is_empty())
    }
}

/// One Search Console row. Callers supply rows sorted by impressions, descending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GscQueryData {
    pub query: String,
    pub clicks: u64,
    pub impressions: u64,
    pub ctr: f64,
    pub position: f64,
}

/// Read-only snapshot of the SEO-relevant fields of one product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductSeoInput {
    pub title: String,
    pub meta_title: String,
    pub meta_description: String,
    pub short_description: String,
    pub description: String,
    pub slug: String,
    pub focus_keyword: Option<String>,
    pub images: Vec<ProductImage>,
    pub gsc_data: Option<Vec<GscQueryData>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSeoCriterion {
    pub key: SeoFieldType,
    pub label: String,
    pub score: f64,
    pub weight: f64,
    pub is_bonus: bool,
    pub issues: Vec<SeoIssue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SeoLevel {
    Excellent,
    Good,
    Average,
    Poor,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSeoResult {
    pub overall: u8,
    pub level: SeoLevel,
    pub criteria: Vec<ProductSeoCriterion>,
    pub issues: Vec<SeoIssue>,
    pub field_scores: BTreeMap<SeoFieldType, f64>,
}

impl ProductSeoResult {
    pub fn criterion(&self, key: SeoFieldType) -> Option<&ProductSeoCriterion> {
        self.criteria.iter().find(|c| c.key == key)
    }

    pub fn issues_for(&self, key: SeoFieldType) -> impl Iterator<Item = &SeoIssue> {
        self.issues.iter().filter(move |i| i.field == key)
    }
}

/// Dashboard projection: four buckets scaled to 0..=25 plus raw per-field scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoBreakdown {
    pub titles: u8,
    pub descriptions: u8,
    pub images: u8,
    pub technical: u8,
    pub f_meta_title: f64,
    pub f_title: f64,
    pub f_meta_description: f64,
    pub f_description: f64,
    pub f_images: f64,
    pub f_slug: f64,
}

/// Projected effect of replacing one field value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreProjection {
    pub field: SeoFieldType,
    pub before: u8,
    pub after: u8,
    pub delta: i16,
    pub field_before: f64,
    pub field_after: f64,
}
