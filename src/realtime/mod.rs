//! Real-time analyzer for long-form article content (Markdown).
//!
//! Independent of the product scorer; shares only text normalization.

pub mod keywords;
pub mod readability;
pub mod structure;
pub mod types;

use self::keywords::{analyze_keyword, keyword_score};
use self::readability::analyze_readability;
use self::structure::{detect_structure, extract_headings, first_paragraph, plain_text};
pub use self::types::{
    ContentStructure, DensityStatus, Heading, KeywordAnalysis, ProblemCategory, ProblemKind,
    ReadabilityReport, RealTimeScores, RealTimeSeoAnalysis, RealTimeSeoOptions, SeoProblem,
};
use crate::config::AnalyzerParams;
use crate::error::SeoResult;
use crate::text::{char_len, collapse_whitespace, words};
use tracing::debug;

/// Keyword score when no keyword is tracked.
pub const NEUTRAL_KEYWORD_SCORE: f64 = 50.0;

/// Readability under which a warning is raised.
pub const READABILITY_WARNING: f64 = 40.0;

#[derive(Debug, Clone, Default)]
pub struct RealTimeAnalyzer {
    pub params: AnalyzerParams,
}

impl RealTimeAnalyzer {
    pub fn new(params: AnalyzerParams) -> SeoResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn analyze(
        &self,
        content: &str,
        keywords: &[String],
        options: &RealTimeSeoOptions,
    ) -> RealTimeSeoAnalysis {
        let params = &self.params;
        let content = &content.replace("\r\n", "\n");
        let plain = plain_text(content);
        let word_count = words(&plain).count();
        let char_count = char_len(&plain);
        let read_time_minutes = word_count.div_ceil(params.words_per_minute.max(1));

        let headings = extract_headings(content);
        let first_paragraph = first_paragraph(content);
        let structure = detect_structure(content, &headings);

        let title = options.title.as_deref().map(collapse_whitespace).unwrap_or_default();
        let meta_description = options
            .meta_description
            .as_deref()
            .map(collapse_whitespace)
            .unwrap_or_default();

        let keyword_reports: Vec<KeywordAnalysis> = keywords
            .iter()
            .filter(|k| !k.trim().is_empty())
            .map(|k| {
                analyze_keyword(
                    k,
                    &plain,
                    word_count,
                    &title,
                    &headings,
                    first_paragraph.as_deref(),
                    params,
                )
            })
            .collect();

        let readability = analyze_readability(&plain);

        let keyword = if keyword_reports.is_empty() {
            NEUTRAL_KEYWORD_SCORE
        } else {
            keyword_reports.iter().map(keyword_score).sum::<f64>() / keyword_reports.len() as f64
        };
        let structure_points = structure_score(&structure);
        let meta = meta_score(&title, &meta_description, params);
        let overall = 0.3 * keyword
            + 0.2 * readability.flesch_score
            + 0.3 * structure_points
            + 0.2 * meta;

        let scores = RealTimeScores {
            keyword: to_u8(keyword),
            readability: to_u8(readability.flesch_score),
            structure: to_u8(structure_points),
            meta: to_u8(meta),
            overall: to_u8(overall),
        };

        let target = options.target_word_count.unwrap_or(params.target_word_count);
        let mut problems = Vec::new();
        length_problems(word_count, target, &mut problems);
        keyword_problems(&keyword_reports, !title.is_empty(), &mut problems);
        structure_problems(&structure, &mut problems);
        problems.extend(readability_problem(word_count, readability.flesch_score));
        meta_problems(&title, &meta_description, params, &mut problems);
        problems.sort_by_key(|p| p.kind.priority());

        debug!(
            "Content analysis: words={} overall={} problems={}",
            word_count,
            scores.overall,
            problems.len()
        );

        RealTimeSeoAnalysis {
            word_count,
            char_count,
            read_time_minutes,
            headings,
            first_paragraph,
            structure,
            keywords: keyword_reports,
            readability,
            scores,
            problems,
        }
    }
}

/// Analyzes content with the default parameters.
pub fn analyze_realtime_seo(
    content: &str,
    keywords: &[String],
    options: &RealTimeSeoOptions,
) -> RealTimeSeoAnalysis {
    RealTimeAnalyzer::default().analyze(content, keywords, options)
}

fn to_u8(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

pub fn structure_score(s: &ContentStructure) -> f64 {
    let mut score = match s.heading_count {
        0 => 0.0,
        1 => 15.0,
        _ => 25.0,
    };
    if s.has_introduction {
        score += 15.0;
    }
    if s.has_conclusion {
        score += 15.0;
    }
    if s.list_count > 0 {
        score += 15.0;
    }
    if s.image_count > 0 {
        score += 15.0;
    }
    if s.link_count > 0 {
        score += 10.0;
    }
    if s.has_faq {
        score += 5.0;
    }
    score
}

fn meta_part(text: &str, min: usize, max: usize) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let len = char_len(text);
    if (min..=max).contains(&len) {
        50.0
    } else {
        25.0
    }
}

pub fn meta_score(title: &str, meta_description: &str, params: &AnalyzerParams) -> f64 {
    meta_part(title, params.meta_title_min, params.meta_title_max)
        + meta_part(
            meta_description,
            params.meta_description_min,
            params.meta_description_max,
        )
}

fn length_problems(word_count: usize, target: usize, problems: &mut Vec<SeoProblem>) {
    let problem = if word_count * 2 < target {
        SeoProblem::new(
            ProblemKind::Error,
            ProblemCategory::Length,
            format!("Contenu trop court : {word_count} mots pour un objectif de {target}."),
        )
        .suggest("Développez les sections existantes et ajoutez des exemples concrets.")
    } else if word_count < target {
        SeoProblem::new(
            ProblemKind::Warning,
            ProblemCategory::Length,
            format!("{word_count} mots, objectif : {target}."),
        )
        .suggest(format!("Ajoutez environ {} mots.", target - word_count))
    } else {
        SeoProblem::new(
            ProblemKind::Success,
            ProblemCategory::Length,
            format!("Longueur suffisante ({word_count} mots)."),
        )
    };
    problems.push(problem);
}

fn keyword_problems(reports: &[KeywordAnalysis], has_title: bool, problems: &mut Vec<SeoProblem>) {
    for k in reports {
        let problem = if k.occurrences == 0 {
            SeoProblem::new(
                ProblemKind::Error,
                ProblemCategory::Keyword,
                format!("Le mot-clé « {} » est absent du contenu.", k.keyword),
            )
            .suggest("Mentionnez-le dans l'introduction et au moins un intertitre.")
        } else {
            match k.status {
                DensityStatus::Low => SeoProblem::new(
                    ProblemKind::Warning,
                    ProblemCategory::Keyword,
                    format!("Densité faible pour « {} » ({:.2} %).", k.keyword, k.density),
                )
                .suggest("Utilisez le mot-clé un peu plus souvent."),
                DensityStatus::High => SeoProblem::new(
                    ProblemKind::Error,
                    ProblemCategory::Keyword,
                    format!(
                        "Sur-optimisation de « {} » ({:.2} %).",
                        k.keyword, k.density
                    ),
                )
                .suggest("Remplacez certaines occurrences par des synonymes."),
                DensityStatus::Optimal => SeoProblem::new(
                    ProblemKind::Success,
                    ProblemCategory::Keyword,
                    format!("Densité optimale pour « {} » ({:.2} %).", k.keyword, k.density),
                ),
            }
        };
        problems.push(problem);

        if has_title && !k.in_title {
            problems.push(
                SeoProblem::new(
                    ProblemKind::Warning,
                    ProblemCategory::Keyword,
                    format!("Le titre ne contient pas « {} ».", k.keyword),
                )
                .suggest("Placez le mot-clé au début du titre."),
            );
        }
    }
}

/// Warning for hard-to-read text. Empty content is reported by the length rule instead.
fn readability_problem(word_count: usize, flesch_score: f64) -> Option<SeoProblem> {
    (word_count > 0 && flesch_score < READABILITY_WARNING).then(|| {
        SeoProblem::new(
            ProblemKind::Warning,
            ProblemCategory::Readability,
            format!("Lisibilité faible ({:.0}/100).", flesch_score),
        )
        .suggest("Raccourcissez les phrases et préférez des mots simples.")
    })
}

fn structure_problems(s: &ContentStructure, problems: &mut Vec<SeoProblem>) {
    if s.heading_count < 2 {
        problems.push(
            SeoProblem::new(
                ProblemKind::Warning,
                ProblemCategory::Structure,
                format!("Structure trop pauvre : {} intertitre(s).", s.heading_count),
            )
            .suggest("Découpez le contenu avec des intertitres H2/H3."),
        );
    }
    if s.list_count == 0 {
        problems.push(
            SeoProblem::new(ProblemKind::Info, ProblemCategory::Structure, "Aucune liste à puces.")
                .suggest("Une liste facilite la lecture en diagonale."),
        );
    }
    if s.image_count == 0 {
        problems.push(
            SeoProblem::new(ProblemKind::Info, ProblemCategory::Structure, "Aucune image.")
                .suggest("Illustrez le contenu avec au moins une image légendée."),
        );
    }
}

fn meta_problems(
    title: &str,
    meta_description: &str,
    params: &AnalyzerParams,
    problems: &mut Vec<SeoProblem>,
) {
    let checks = [
        ("Titre", title, params.meta_title_min, params.meta_title_max),
        (
            "Meta description",
            meta_description,
            params.meta_description_min,
            params.meta_description_max,
        ),
    ];
    for (label, text, min, max) in checks {
        if text.is_empty() {
            problems.push(
                SeoProblem::new(
                    ProblemKind::Warning,
                    ProblemCategory::Meta,
                    format!("{label} absent."),
                )
                .suggest(format!("Rédigez un texte de {min} à {max} caractères.")),
            );
            continue;
        }
        let len = char_len(text);
        if !(min..=max).contains(&len) {
            problems.push(
                SeoProblem::new(
                    ProblemKind::Warning,
                    ProblemCategory::Meta,
                    format!("{label} : {len} caractères (idéal {min} à {max})."),
                )
                .suggest("Ajustez la longueur pour éviter la troncature."),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_structure_is_worth_hundred() {
        let s = ContentStructure {
            has_introduction: true,
            has_conclusion: true,
            has_faq: true,
            heading_count: 4,
            list_count: 2,
            image_count: 1,
            link_count: 3,
        };
        assert_eq!(structure_score(&s), 100.0);
        assert_eq!(structure_score(&ContentStructure::default()), 0.0);
    }

    #[test]
    fn meta_score_bands() {
        let p = AnalyzerParams::default();
        assert_eq!(meta_score("", "", &p), 0.0);
        assert_eq!(meta_score(&"t".repeat(45), &"d".repeat(140), &p), 100.0);
        assert_eq!(meta_score("court", &"d".repeat(140), &p), 75.0);
    }

    #[test]
    fn readability_threshold() {
        assert!(readability_problem(120, READABILITY_WARNING).is_none());
        assert!(readability_problem(120, 40.5).is_none());
        assert!(readability_problem(0, 0.0).is_none());

        let p = readability_problem(120, 39.9).unwrap();
        assert_eq!(p.kind, ProblemKind::Warning);
        assert_eq!(p.category, ProblemCategory::Readability);
    }

    #[test]
    fn crlf_matches_lf() {
        let lf = "# Titre\n\n\
                  Un premier paragraphe assez long pour compter comme introduction.\n\n\
                  Le sac en cuir noir arrive ensuite dans un second bloc.\n";
        let crlf = lf.replace('\n', "\r\n");
        let kw = vec!["sac en cuir".to_string()];
        let options = RealTimeSeoOptions::default();
        assert_eq!(
            analyze_realtime_seo(&crlf, &kw, &options),
            analyze_realtime_seo(lf, &kw, &options)
        );
    }

    #[test]
    fn empty_content() {
        let a = analyze_realtime_seo("", &[], &RealTimeSeoOptions::default());
        assert_eq!(a.word_count, 0);
        assert_eq!(a.read_time_minutes, 0);
        assert_eq!(a.scores.readability, 0);
        assert_eq!(a.problems[0].kind, ProblemKind::Error);
    }
}
