//! Description trimming: shortcode and markup stripping plus
//! word-boundary truncation.

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::config::ELLIPSIS;

static SHORTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("static shortcode pattern is valid"));

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static markup pattern is valid"));

/// Remove `[shortcode]` syntax, leaving the surrounding plain text.
pub fn strip_shortcodes(text: &str) -> String {
    SHORTCODE.replace_all(text, "").into_owned()
}

/// Truncate to at most `limit` words, appending `more` when anything was
/// dropped. Markup tags are stripped first and whitespace collapsed, so
/// words are never split mid-way.
pub fn trim_words(text: &str, limit: usize, more: &str) -> String {
    let stripped = MARKUP_TAG.replace_all(text, "");
    let words: Vec<&str> = stripped.split_whitespace().collect();

    if words.len() > limit {
        let mut out = words[..limit].iter().join(" ");
        out.push_str(more);
        out
    } else {
        words.iter().join(" ")
    }
}

/// Full trimming step applied to resolved descriptions: strip shortcodes,
/// escape a literal `]]>` so the value stays safe inside CDATA, then
/// truncate to the word limit.
pub fn trim_description(text: &str, limit: usize) -> String {
    let text = strip_shortcodes(text);
    let text = text.replace("]]>", "]]&gt;");
    trim_words(&text, limit, ELLIPSIS)
}
