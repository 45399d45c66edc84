//! Heuristic structural extraction.
//!
//! Recovers function and class boundaries from raw text without a real
//! grammar: indentation tracking for Python, brace balancing for Java.
//! Extraction never fails; malformed input degrades to fewer or partial
//! entities. The language-specific boundary rules live in their own
//! modules so adding a language means adding a module, not touching
//! shared logic.

pub mod java;
pub mod python;

use crate::core::{Language, SourceUnit};

/// Extract the structural view of one source file.
///
/// Pure function of `(content, language)`; re-entrant, no shared state.
pub fn extract(content: &str, language: Language) -> SourceUnit {
    let lines: Vec<String> = content.split('\n').map(str::to_string).collect();

    let (functions, classes, imports, variables) = match language {
        Language::Python => (
            python::extract_functions(&lines),
            python::extract_classes(&lines),
            python::extract_imports(&lines),
            python::extract_variables(&lines),
        ),
        Language::Java => (
            java::extract_functions(&lines),
            java::extract_classes(&lines),
            java::extract_imports(&lines),
            java::extract_variables(&lines),
        ),
    };

    SourceUnit {
        language,
        lines,
        functions,
        classes,
        imports,
        variables,
    }
}

/// Split a raw parameter list on commas, keeping tokens verbatim.
///
/// No nested-generic or default-value awareness; tokens are trimmed but
/// otherwise raw.
pub(crate) fn split_parameters(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return vec![];
    }
    raw.split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Leading-whitespace count of a line
pub(crate) fn indentation(line: &str) -> usize {
    line.len() - line.trim_start().len()
}
