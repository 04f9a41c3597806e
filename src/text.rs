//! Free-text canonicalization.
//!
//! Two variants exist on purpose: [`normalize`] is the aggressive form every
//! field comparison runs through, [`normalize_name`] is the lookup form that
//! maps free-text guess input onto a dataset team name. Name lookup must
//! tolerate punctuation and spacing differences but nothing more, while field
//! comparison additionally folds accents and drops all non-alphanumerics.

use unicode_normalization::UnicodeNormalization;

/// Canonicalize a free-text field value for comparison.
///
/// Lowercase, NFKD-decompose, then keep only `[a-z0-9 ]` and trim. The NFKD
/// pass moves accents into combining marks, which the ASCII filter then
/// drops, so "é" becomes "e". Total on any input, including empty.
pub fn normalize(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .nfkd()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | ' '))
        .collect();
    kept.trim().to_string()
}

/// Strict team-name identity form: lowercase with whitespace and a fixed set
/// of apostrophe/backtick/period/hyphen punctuation removed. Keeps all other
/// characters as-is (no diacritic folding).
pub fn normalize_name(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '\u{2019}' | '\'' | '`' | '.' | '-'))
        .collect()
}
