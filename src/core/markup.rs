//! Inline markup helpers
//!
//! Transliterations are stored as small HTML fragments (only `<sup>` is used
//! by the built-in tables). The rich clipboard path copies the fragment
//! verbatim inside `<i>`; the plain path copies what a reader would see.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Basic entities that can appear in a fragment's text content
const ENTITIES: &[(&str, &str)] = &[
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&nbsp;", "\u{00a0}"),
    // Must come last so `&amp;lt;` decodes to `&lt;`, not `<`
    ("&amp;", "&"),
];

/// Whether the string contains inline tags
pub fn has_markup(s: &str) -> bool {
    TAG_RE.is_match(s)
}

/// Visible text of an HTML fragment.
///
/// ```rust
/// use hebrew_translit::markup::plain_text;
///
/// assert_eq!(plain_text("<sup>e</sup>"), "e");
/// assert_eq!(plain_text("\u{1e6f}"), "\u{1e6f}");
/// ```
pub fn plain_text(markup: &str) -> String {
    if !has_markup(markup) && !markup.contains('&') {
        return markup.to_string();
    }
    let stripped = TAG_RE.replace_all(markup, "");
    if !stripped.contains('&') {
        return stripped.into_owned();
    }
    let mut text = stripped.into_owned();
    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }
    text
}

/// Wrap a fragment in italic markup for the rich clipboard.
pub fn italic_html(markup: &str) -> String {
    format!("<i>{}</i>", markup)
}
