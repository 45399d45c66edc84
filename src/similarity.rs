//! Normalized edit-distance similarity between text spans.
//!
//! Both inputs are normalized (lowercased, whitespace collapsed,
//! comments stripped) before comparison, so spans differing only in
//! layout or comments compare as identical.

use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*.*?\*/").unwrap());

/// Normalize text for comparison: lowercase, collapse all whitespace
/// runs to single spaces, then strip block and line comments.
///
/// Line-comment stripping happens after whitespace collapse, so a `//`
/// or `#` marker removes the rest of the normalized string. Block
/// comments are removed wherever they appear.
pub fn normalize(content: &str) -> String {
    let lowered = content.to_lowercase();
    let collapsed = lowered
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let mut text = BLOCK_COMMENT.replace_all(&collapsed, "").into_owned();
    if let Some(idx) = text.find("//") {
        text.truncate(idx);
    }
    if let Some(idx) = text.find('#') {
        text.truncate(idx);
    }
    text.trim().to_string()
}

/// Levenshtein edit distance over characters
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0usize; a.len() + 1];

    for (i, bc) in b.iter().enumerate() {
        curr[0] = i + 1;
        for (j, ac) in a.iter().enumerate() {
            let substitution = prev[j] + usize::from(ac != bc);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}

/// Similarity score in [0, 1] between two text spans.
///
/// Defined as `1 - distance / max(len)` over the normalized strings,
/// and `1` when both normalize to empty. Symmetric, and
/// `similarity(x, x) == 1` for any `x`.
pub fn similarity(text_a: &str, text_b: &str) -> f64 {
    let norm_a = normalize(text_a);
    let norm_b = normalize(text_b);

    let max_len = norm_a.chars().count().max(norm_b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein(&norm_a, &norm_b);
    1.0 - (distance as f64 / max_len as f64)
}
