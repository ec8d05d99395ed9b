use crate::error::{SeoError, SeoResult};
use crate::scorer::tables::{default_weight, is_bonus, MAX_BONUS_POINTS};
use crate::scorer::types::SeoFieldType;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::info;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === BASE (weighted mean) ===
    #[arg(long, default_value_t = 2.0)]
    pub weight_title: f64,
    #[arg(long, default_value_t = 1.5)]
    pub weight_short_description: f64,
    #[arg(long, default_value_t = 2.0)]
    pub weight_description: f64,
    #[arg(long, default_value_t = 2.5)]
    pub weight_meta_title: f64,
    #[arg(long, default_value_t = 2.5)]
    pub weight_meta_description: f64,
    #[arg(long, default_value_t = 1.0)]
    pub weight_slug: f64,
    #[arg(long, default_value_t = 0.75)]
    pub weight_images: f64,
    #[arg(long, default_value_t = 0.75)]
    pub weight_alt_text: f64,

    // === BONUS (shared pool) ===
    #[arg(long, default_value_t = 1.5)]
    pub weight_keyword_presence: f64,
    #[arg(long, default_value_t = 1.0)]
    pub weight_cta_detection: f64,
    #[arg(long, default_value_t = 1.5)]
    pub weight_gsc_traffic_signal: f64,

    #[arg(long, default_value_t = 8.0)]
    pub bonus_pool: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            weight_title: default_weight(SeoFieldType::Title),
            weight_short_description: default_weight(SeoFieldType::ShortDescription),
            weight_description: default_weight(SeoFieldType::Description),
            weight_meta_title: default_weight(SeoFieldType::MetaTitle),
            weight_meta_description: default_weight(SeoFieldType::MetaDescription),
            weight_slug: default_weight(SeoFieldType::Slug),
            weight_images: default_weight(SeoFieldType::Images),
            weight_alt_text: default_weight(SeoFieldType::AltText),
            weight_keyword_presence: default_weight(SeoFieldType::KeywordPresence),
            weight_cta_detection: default_weight(SeoFieldType::CtaDetection),
            weight_gsc_traffic_signal: default_weight(SeoFieldType::GscTrafficSignal),
            bonus_pool: MAX_BONUS_POINTS,
        }
    }
}

impl ScoringWeights {
    pub fn weight_for(&self, field: SeoFieldType) -> f64 {
        match field {
            SeoFieldType::Title => self.weight_title,
            SeoFieldType::ShortDescription => self.weight_short_description,
            SeoFieldType::Description => self.weight_description,
            SeoFieldType::MetaTitle => self.weight_meta_title,
            SeoFieldType::MetaDescription => self.weight_meta_description,
            SeoFieldType::Slug => self.weight_slug,
            SeoFieldType::Images => self.weight_images,
            SeoFieldType::AltText => self.weight_alt_text,
            SeoFieldType::KeywordPresence => self.weight_keyword_presence,
            SeoFieldType::CtaDetection => self.weight_cta_detection,
            SeoFieldType::GscTrafficSignal => self.weight_gsc_traffic_signal,
        }
    }

    pub fn base_total(&self) -> f64 {
        SeoFieldType::iter()
            .filter(|f| !is_bonus(*f))
            .map(|f| self.weight_for(f))
            .sum()
    }

    pub fn bonus_total(&self) -> f64 {
        SeoFieldType::iter()
            .filter(|f| is_bonus(*f))
            .map(|f| self.weight_for(f))
            .sum()
    }

    pub fn validate(&self) -> SeoResult<()> {
        for field in SeoFieldType::iter() {
            let w = self.weight_for(field);
            if !w.is_finite() || w < 0.0 {
                return Err(SeoError::Config(format!(
                    "weight for '{}' must be a finite, non-negative number (got {})",
                    field, w
                )));
            }
        }
        if self.base_total() <= 0.0 {
            return Err(SeoError::Config(
                "base criteria weights must not all be zero".to_string(),
            ));
        }
        if !self.bonus_pool.is_finite() || self.bonus_pool < 0.0 {
            return Err(SeoError::Config(format!(
                "bonus_pool must be a finite, non-negative number (got {})",
                self.bonus_pool
            )));
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SeoResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let weights: Self = serde_json::from_str(&content)?;
        weights.validate()?;
        info!("⚖️  Loaded weights from {}", path.display());
        Ok(weights)
    }

    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(weight_title, "weight_title");
        update_if_present!(weight_short_description, "weight_short_description");
        update_if_present!(weight_description, "weight_description");
        update_if_present!(weight_meta_title, "weight_meta_title");
        update_if_present!(weight_meta_description, "weight_meta_description");
        update_if_present!(weight_slug, "weight_slug");
        update_if_present!(weight_images, "weight_images");
        update_if_present!(weight_alt_text, "weight_alt_text");

        update_if_present!(weight_keyword_presence, "weight_keyword_presence");
        update_if_present!(weight_cta_detection, "weight_cta_detection");
        update_if_present!(weight_gsc_traffic_signal, "weight_gsc_traffic_signal");

        update_if_present!(bonus_pool, "bonus_pool");
    }
}

/// Tunables of the long-form content analyzer.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerParams {
    #[arg(long, default_value_t = 1000)]
    pub target_word_count: usize,
    #[arg(long, default_value_t = 200)]
    pub words_per_minute: usize,

    // === KEYWORD DENSITY (%) ===
    #[arg(long, default_value_t = 0.5)]
    pub density_low: f64,
    #[arg(long, default_value_t = 3.0)]
    pub density_high: f64,

    // === META LENGTHS (chars) ===
    #[arg(long, default_value_t = 30)]
    pub meta_title_min: usize,
    #[arg(long, default_value_t = 60)]
    pub meta_title_max: usize,
    #[arg(long, default_value_t = 120)]
    pub meta_description_min: usize,
    #[arg(long, default_value_t = 160)]
    pub meta_description_max: usize,
}

impl Default for AnalyzerParams {
    fn default() -> Self {
        Self {
            target_word_count: 1000,
            words_per_minute: 200,
            density_low: 0.5,
            density_high: 3.0,
            meta_title_min: 30,
            meta_title_max: 60,
            meta_description_min: 120,
            meta_description_max: 160,
        }
    }
}

impl AnalyzerParams {
    pub fn validate(&self) -> SeoResult<()> {
        if self.words_per_minute == 0 {
            return Err(SeoError::Config(
                "words_per_minute must be greater than zero".to_string(),
            ));
        }
        if self.density_low > self.density_high {
            return Err(SeoError::Config(format!(
                "density_low ({}) must not exceed density_high ({})",
                self.density_low, self.density_high
            )));
        }
        if self.meta_title_min > self.meta_title_max
            || self.meta_description_min > self.meta_description_max
        {
            return Err(SeoError::Config(
                "meta length ranges must have min <= max".to_string(),
            ));
        }
        Ok(())
    }
}
