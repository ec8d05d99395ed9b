use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RealTimeSeoOptions {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    /// Overrides `AnalyzerParams::target_word_count` when set.
    pub target_word_count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStructure {
    pub has_introduction: bool,
    pub has_conclusion: bool,
    pub has_faq: bool,
    pub heading_count: usize,
    pub list_count: usize,
    pub image_count: usize,
    pub link_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DensityStatus {
    Low,
    Optimal,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub keyword: String,
    pub occurrences: usize,
    pub density: f64,
    pub status: DensityStatus,
    pub in_title: bool,
    pub in_headings: bool,
    pub in_first_paragraph: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityReport {
    pub flesch_score: f64,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    pub avg_syllables_per_word: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealTimeScores {
    pub keyword: u8,
    pub readability: u8,
    pub structure: u8,
    pub meta: u8,
    pub overall: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProblemKind {
    Error,
    Warning,
    Info,
    Success,
}

impl ProblemKind {
    pub fn priority(self) -> u8 {
        match self {
            Self::Error => 0,
            Self::Warning => 1,
            Self::Info => 2,
            Self::Success => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProblemCategory {
    Length,
    Keyword,
    Structure,
    Readability,
    Meta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoProblem {
    pub kind: ProblemKind,
    pub category: ProblemCategory,
    pub message: String,
    pub suggestion: Option<String>,
}

impl SeoProblem {
    pub fn new(kind: ProblemKind, category: ProblemCategory, message: impl Into<String>) -> Self {
        Self {
            kind,
            category,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealTimeSeoAnalysis {
    pub word_count: usize,
    pub char_count: usize,
    pub read_time_minutes: usize,
    pub headings: Vec<Heading>,
    pub first_paragraph: Option<String>,
    pub structure: ContentStructure,
    pub keywords: Vec<KeywordAnalysis>,
    pub readability: ReadabilityReport,
    pub scores: RealTimeScores,
    pub problems: Vec<SeoProblem>,
}
