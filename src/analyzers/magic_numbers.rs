//! Per-line numeric literal classifier.
//!
//! Extracts decimal literals and filters the ones that are almost never
//! worth naming: common constants, dates/times/versions, array indices,
//! loop bounds, and test assertions. Surviving literals are reported
//! one smell per line.

use once_cell::sync::Lazy;
use regex::Regex;

use super::SmellAnalyzer;
use crate::config::Thresholds;
use crate::core::{Result, Severity, Smell, SmellPayload, SmellType, SourceUnit};

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b-?\d+\.?\d*\b").unwrap());
static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}[-/]\d{1,2}[-/]\d{1,2}").unwrap());
static TIME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{1,2}:\d{2}(:\d{2})?").unwrap());
static VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"v?\d+\.\d+(\.\d+)?").unwrap());
static DURATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+ms|\d+s|\d+min|\d+h").unwrap());
static LOOP_HEAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(for|while)\s*\(").unwrap());

const ALLOWED_NUMBERS: [f64; 7] = [0.0, 1.0, -1.0, 2.0, 10.0, 100.0, 1000.0];
const ALLOWED_DECIMALS: [&str; 4] = ["0.0", "1.0", "-1.0", "2.0"];

const TEST_KEYWORDS: [&str; 9] = [
    "assert",
    "expect",
    "test",
    "should",
    "assertequals",
    "assertequal",
    "asserttrue",
    "assertfalse",
    "mock",
];

pub struct MagicNumbersAnalyzer;

impl MagicNumbersAnalyzer {
    pub fn new(_thresholds: &Thresholds) -> Self {
        Self
    }

    fn severity(count: usize) -> Severity {
        if count > 5 {
            Severity::High
        } else if count > 2 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

impl SmellAnalyzer for MagicNumbersAnalyzer {
    fn smell_type(&self) -> SmellType {
        SmellType::MagicNumbers
    }

    fn analyze(&self, unit: &SourceUnit) -> Result<Vec<Smell>> {
        let mut smells = Vec::new();

        for (i, line) in unit.lines.iter().enumerate() {
            if is_comment_or_string(line) {
                continue;
            }

            let magic = find_magic_numbers(line);
            if magic.is_empty() {
                continue;
            }

            smells.push(Smell {
                smell_type: SmellType::MagicNumbers,
                lines: (i + 1).to_string(),
                description: format!("Magic numbers detected: {}.", magic.join(", ")),
                details: "Consider defining these as named constants".to_string(),
                severity: Self::severity(magic.len()),
                payload: SmellPayload::MagicNumbers {
                    magic_numbers: magic,
                    line_content: line.trim().to_string(),
                },
            });
        }

        Ok(smells)
    }
}

/// Literals on one line that survive every guard, deduplicated in
/// order of appearance.
fn find_magic_numbers(line: &str) -> Vec<String> {
    if is_test_context(line) {
        return vec![];
    }

    let mut found: Vec<String> = Vec::new();

    for m in NUMBER.find_iter(line) {
        let text = m.as_str();
        let Ok(value) = text.parse::<f64>() else {
            continue;
        };

        if ALLOWED_NUMBERS.contains(&value) || ALLOWED_DECIMALS.contains(&text) {
            continue;
        }
        if is_date_time_or_version(line, m.start()) {
            continue;
        }
        if is_array_index_or_similar(line, m.start()) {
            continue;
        }

        if !found.iter().any(|f| f == text) {
            found.push(text.to_string());
        }
    }

    found
}

/// Lines that are comments, or whose code region is mostly string
/// literal text, are not scanned.
fn is_comment_or_string(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.starts_with('#') || trimmed.starts_with("//") || trimmed.starts_with("/*") {
        return true;
    }

    let python_comment = line.find('#');
    let java_comment = line.find("//");

    let code_only = match (python_comment, java_comment) {
        (Some(idx), _) if idx > 0 => &line[..idx],
        (_, Some(idx)) if idx > 0 => &line[..idx],
        (Some(0), _) | (_, Some(0)) => return true,
        _ => line,
    };

    let in_strings = string_literal_length(code_only);
    in_strings as f64 > code_only.len() as f64 * 0.7
}

/// Total length (quotes included) of closed string literals in `code`.
/// Unterminated literals are ignored.
fn string_literal_length(code: &str) -> usize {
    let chars: Vec<char> = code.chars().collect();
    let mut total = 0;
    let mut i = 0;

    while i < chars.len() {
        let quote = chars[i];
        if quote != '\'' && quote != '"' && quote != '`' {
            i += 1;
            continue;
        }
        let mut j = i + 1;
        let mut span = None;
        while j < chars.len() {
            if chars[j] == '\\' {
                j += 2;
                continue;
            }
            if chars[j] == quote {
                span = Some(j);
                break;
            }
            j += 1;
        }
        match span {
            Some(end) => {
                total += end - i + 1;
                i = end + 1;
            }
            None => break,
        }
    }

    total
}

fn is_date_time_or_version(line: &str, index: usize) -> bool {
    let context = slice_clamped(line, index.saturating_sub(10), index + 20);
    DATE.is_match(context)
        || TIME.is_match(context)
        || VERSION.is_match(context)
        || DURATION.is_match(context)
}

fn is_array_index_or_similar(line: &str, index: usize) -> bool {
    let before = slice_clamped(line, index.saturating_sub(5), index);
    let after = slice_clamped(line, index, index + 10);

    if before.contains('[') || after.contains(']') {
        return true;
    }
    if LOOP_HEAD.is_match(line) && after.contains(['<', '>', '=']) {
        return true;
    }

    let before_range = slice_clamped(line, index.saturating_sub(6), index);
    before_range.contains("range(") || before_range.contains("range ")
}

fn is_test_context(line: &str) -> bool {
    let lower = line.to_lowercase();
    TEST_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Byte-range slice clamped to the string's length and to char
/// boundaries, so context windows never split a multi-byte character.
fn slice_clamped(s: &str, mut start: usize, mut end: usize) -> &str {
    end = end.min(s.len());
    while start < s.len() && !s.is_char_boundary(start) {
        start += 1;
    }
    while end > start && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[start..end]
}
