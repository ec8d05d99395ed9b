//! Text normalization shared by every scorer.
//!
//! All length measurements are taken on rendered text, never on markup.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<\s*/?\s*([a-zA-Z][a-zA-Z0-9]*)?[^>]*>").expect("valid tag pattern")
});

/// Tags that break the text flow. Any other tag is removed without a separator,
/// so `Sac<sup>®</sup>` renders as `Sac®`.
const BLOCK_TAGS: [&str; 25] = [
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "footer",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "ol", "p", "section", "td",
    "tr", "ul",
];

fn tag_separator(caps: &Captures) -> &'static str {
    match caps.get(1) {
        Some(name) if BLOCK_TAGS.contains(&name.as_str().to_ascii_lowercase().as_str()) => " ",
        Some(_) => "",
        // Comments, doctypes and other non-element markup.
        None => " ",
    }
}

/// Ordered so that `&amp;` is decoded last and never produces a second entity.
const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

/// Strips markup, decodes the basic HTML entities and collapses whitespace.
///
/// Never fails: any input, including an empty string, yields a (possibly
/// empty) trimmed string.
pub fn extract_html_text(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let mut text = TAG_RE.replace_all(html, tag_separator).into_owned();
    for (entity, decoded) in ENTITIES {
        if text.contains(entity) {
            text = text.replace(entity, decoded);
        }
    }

    collapse_whitespace(&text)
}

/// Collapses every whitespace run to a single space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Length in characters (not bytes), so accented text measures like it reads.
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Case-insensitive substring test. An empty needle never matches.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whitespace-separated tokens holding at least one alphanumeric character.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
}
