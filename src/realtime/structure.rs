//! Markdown structure detection for long-form content.

use super::types::{ContentStructure, Heading};
use crate::text::{char_len, extract_html_text};
use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(#{1,6})[ \t]+(.+?)[ \t#]*$").expect("valid heading pattern"));
static HEADING_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]+").expect("valid marker pattern"));
static HEADING_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]+.*$").expect("valid heading line pattern"));
static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*\]\([^)]*\)").expect("valid image pattern"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").expect("valid link pattern"));
static LIST_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*(?:[-*+]|\d+\.)[ \t]+\S").expect("valid list pattern"));
static LIST_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*(?:[-*+]|\d+\.)[ \t]+").expect("valid marker pattern"));
static QUOTE_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*>[ \t]?").expect("valid quote pattern"));
static EMPHASIS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[*_`~]+").expect("valid emphasis pattern"));
static BLOCK_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n[ \t]*\r?\n").expect("valid block pattern"));

static INTRO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(introduction|intro|présentation)\b").expect("valid intro pattern")
});
static CONCLUSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(conclusion|pour conclure|en résumé|en bref|pour finir|to sum up|in summary)\b",
    )
    .expect("valid conclusion pattern")
});
static FAQ_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(faq|foire aux questions|questions fréquentes|questions courantes",
        r"|frequently asked questions)\b",
    ))
    .expect("valid faq pattern")
});

/// Minimum rendered length of a block to count as a paragraph.
pub const PARAGRAPH_MIN_CHARS: usize = 50;

/// Rendered text of a Markdown (or HTML) document: images dropped, links
/// reduced to their label, block and inline markers removed.
pub fn plain_text(content: &str) -> String {
    let text = IMAGE_RE.replace_all(content, " ");
    let text = LINK_RE.replace_all(&text, "$1");
    let text = HEADING_MARKER_RE.replace_all(&text, "");
    let text = LIST_MARKER_RE.replace_all(&text, "");
    let text = QUOTE_MARKER_RE.replace_all(&text, "");
    let text = EMPHASIS_RE.replace_all(&text, "");
    extract_html_text(&text)
}

pub fn extract_headings(content: &str) -> Vec<Heading> {
    HEADING_RE
        .captures_iter(content)
        .map(|cap| Heading {
            level: cap[1].len() as u8,
            text: plain_text(&cap[2]),
        })
        .filter(|h| !h.text.is_empty())
        .collect()
}

/// First block longer than [`PARAGRAPH_MIN_CHARS`] once headings are removed.
pub fn first_paragraph(content: &str) -> Option<String> {
    BLOCK_SPLIT_RE
        .split(content)
        .map(|block| plain_text(&HEADING_LINE_RE.replace_all(block, "")))
        .find(|text| char_len(text) > PARAGRAPH_MIN_CHARS)
}

pub fn detect_structure(content: &str, headings: &[Heading]) -> ContentStructure {
    let heading_text = headings
        .iter()
        .map(|h| h.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let body = plain_text(content);

    let has_introduction = first_paragraph(content).is_some() || INTRO_RE.is_match(&heading_text);

    let without_images = IMAGE_RE.replace_all(content, " ");

    ContentStructure {
        has_introduction,
        has_conclusion: CONCLUSION_RE.is_match(&heading_text) || CONCLUSION_RE.is_match(&body),
        has_faq: FAQ_RE.is_match(&heading_text) || FAQ_RE.is_match(&body),
        heading_count: headings.len(),
        list_count: LIST_ITEM_RE.find_iter(content).count(),
        image_count: IMAGE_RE.find_iter(content).count(),
        link_count: LINK_RE.find_iter(&without_images).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = "# Guide du sac en cuir\n\n\
Choisir un sac en cuir demande un peu d'attention, voici l'essentiel à connaître.\n\n\
## Les matières\n\n\
- Cuir pleine fleur\n\
- Cuir [nubuck](https://example.com/nubuck)\n\n\
![Sac noir](sac.jpg)\n\n\
## FAQ\n\n\
Combien de temps dure un sac ?\n\n\
## Conclusion\n\n\
Un bon sac dure des années.\n";

    #[test]
    fn headings_with_levels() {
        let headings = extract_headings(ARTICLE);
        assert_eq!(headings.len(), 4);
        assert_eq!(headings[0].level, 1);
        assert_eq!(headings[0].text, "Guide du sac en cuir");
        assert_eq!(headings[3].text, "Conclusion");
    }

    #[test]
    fn first_paragraph_skips_headings() {
        let p = first_paragraph(ARTICLE).unwrap();
        assert!(p.starts_with("Choisir un sac"));
    }

    #[test]
    fn crlf_blank_lines_separate_blocks() {
        let crlf = ARTICLE.replace('\n', "\r\n");
        assert_eq!(first_paragraph(&crlf), first_paragraph(ARTICLE));
    }

    #[test]
    fn no_paragraph_in_short_content() {
        assert_eq!(first_paragraph("# Titre\n\nCourt."), None);
    }

    #[test]
    fn structure_flags_and_counts() {
        let headings = extract_headings(ARTICLE);
        let s = detect_structure(ARTICLE, &headings);
        assert!(s.has_introduction);
        assert!(s.has_conclusion);
        assert!(s.has_faq);
        assert_eq!(s.heading_count, 4);
        assert_eq!(s.list_count, 2);
        assert_eq!(s.image_count, 1);
        assert_eq!(s.link_count, 1);
    }

    #[test]
    fn plain_text_drops_markup() {
        assert_eq!(
            plain_text("## **Gras** et [lien](http://x) ![img](a.png)"),
            "Gras et lien"
        );
    }
}
