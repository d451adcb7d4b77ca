//! Heuristic HTML extraction engine.
//!
//! The upstream site is WordPress with a job-board theme; class names and
//! markup drift between revisions, so every field is extracted through an
//! ordered chain of fallback strategies. All functions here are pure and
//! synchronous: `scraper::Html` is not `Send`, so documents are parsed and
//! consumed entirely between await points.

pub mod detail;
pub mod entry;
pub mod facets;
pub mod pagination;

use scraper::{ElementRef, Selector};

/// Parse a CSS selector known to be syntactically valid.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Whitespace-normalized text content of an element.
pub(crate) fn text_of(el: &ElementRef) -> String {
    el.text().collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text content, or `None` when empty after normalization.
pub(crate) fn nonempty_text(el: &ElementRef) -> Option<String> {
    let text = text_of(el);
    (!text.is_empty()).then_some(text)
}

/// Title-case a hyphenated slug: `"full-time"` -> `"Full Time"`.
///
/// Each hyphen-separated word gets an uppercase first letter and a lowercase
/// remainder, matching how the site renders slugs it never labels.
pub(crate) fn title_case_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Hard-truncate to `max` characters, appending an ellipsis marker when
/// anything was cut. Operates on chars, not bytes.
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_slug() {
        assert_eq!(title_case_slug("full-time"), "Full Time");
        assert_eq!(title_case_slug("gaborone-west"), "Gaborone West");
        assert_eq!(title_case_slug("IT-and-telecoms"), "It And Telecoms");
    }

    #[test]
    fn test_truncate_chars_boundary() {
        let short = "a".repeat(1000);
        assert_eq!(truncate_chars(&short, 1000), short);

        let long = "b".repeat(1001);
        let cut = truncate_chars(&long, 1000);
        assert_eq!(cut.chars().count(), 1003);
        assert!(cut.ends_with("..."));
        assert_eq!(&cut[..1000], &long[..1000]);
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        let text = "é".repeat(1200);
        let cut = truncate_chars(&text, 1000);
        assert_eq!(cut.chars().count(), 1003);
    }
}
