use super::types::{DensityStatus, Heading, KeywordAnalysis};
use crate::config::AnalyzerParams;
use crate::text::{collapse_whitespace, contains_ci};

/// Non-overlapping, case-insensitive occurrences of `keyword` in `text`.
pub fn count_occurrences(text: &str, keyword: &str) -> usize {
    let keyword = keyword.to_lowercase();
    if keyword.is_empty() {
        return 0;
    }
    text.to_lowercase().matches(keyword.as_str()).count()
}

pub fn density_status(density: f64, params: &AnalyzerParams) -> DensityStatus {
    if density < params.density_low {
        DensityStatus::Low
    } else if density > params.density_high {
        DensityStatus::High
    } else {
        DensityStatus::Optimal
    }
}

pub fn analyze_keyword(
    keyword: &str,
    plain: &str,
    total_words: usize,
    title: &str,
    headings: &[Heading],
    first_paragraph: Option<&str>,
    params: &AnalyzerParams,
) -> KeywordAnalysis {
    let keyword = collapse_whitespace(keyword);
    let occurrences = count_occurrences(plain, &keyword);
    let density = if total_words > 0 {
        occurrences as f64 / total_words as f64 * 100.0
    } else {
        0.0
    };

    KeywordAnalysis {
        status: density_status(density, params),
        in_title: contains_ci(title, &keyword),
        in_headings: headings.iter().any(|h| contains_ci(&h.text, &keyword)),
        in_first_paragraph: first_paragraph.is_some_and(|p| contains_ci(p, &keyword)),
        keyword,
        occurrences,
        density,
    }
}

/// Per-keyword score: density band plus placement bonuses, capped at 100.
pub fn keyword_score(analysis: &KeywordAnalysis) -> f64 {
    if analysis.occurrences == 0 {
        return 0.0;
    }
    let mut score: f64 = match analysis.status {
        DensityStatus::Optimal => 60.0,
        DensityStatus::Low | DensityStatus::High => 30.0,
    };
    if analysis.in_title {
        score += 15.0;
    }
    if analysis.in_headings {
        score += 15.0;
    }
    if analysis.in_first_paragraph {
        score += 10.0;
    }
    score.min(100.0)
}
