//! Common type definitions used across the codebase

pub mod errors;

pub use errors::{Error, Result};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Language enumeration for all supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Python,
    Java,
}

impl Language {
    /// Get file extensions for this language
    pub fn extensions(&self) -> &[&str] {
        match self {
            Language::Python => &["py"],
            Language::Java => &["java"],
        }
    }

    /// Get the display name for this language
    pub fn display_name(&self) -> &str {
        match self {
            Language::Python => "Python",
            Language::Java => "Java",
        }
    }

    /// Map a file extension (without the dot) to a language
    pub fn from_extension(ext: &str) -> Option<Language> {
        match ext {
            "py" => Some(Language::Python),
            "java" => Some(Language::Java),
            _ => None,
        }
    }

    /// Map a file path to a language by its extension
    pub fn from_path(path: &Path) -> Option<Language> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Language::from_extension)
    }
}

/// Severity levels for detected smells
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// The six smell kinds this tool detects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SmellType {
    LongMethod,
    GodClass,
    DuplicatedCode,
    LargeParameterList,
    MagicNumbers,
    FeatureEnvy,
}

impl SmellType {
    /// All smell types in their fixed analyzer ordering
    pub const ALL: [SmellType; 6] = [
        SmellType::LongMethod,
        SmellType::GodClass,
        SmellType::DuplicatedCode,
        SmellType::LargeParameterList,
        SmellType::MagicNumbers,
        SmellType::FeatureEnvy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SmellType::LongMethod => "LongMethod",
            SmellType::GodClass => "GodClass",
            SmellType::DuplicatedCode => "DuplicatedCode",
            SmellType::LargeParameterList => "LargeParameterList",
            SmellType::MagicNumbers => "MagicNumbers",
            SmellType::FeatureEnvy => "FeatureEnvy",
        }
    }

    /// Parse a smell name as written in configuration or CLI flags
    pub fn from_name(name: &str) -> Option<SmellType> {
        SmellType::ALL.iter().copied().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for SmellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A function or method recovered by structural extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionEntity {
    pub name: String,
    /// Raw parameter tokens, split on top-level commas, not type-resolved
    pub parameters: Vec<String>,
    /// 1-based inclusive start line
    pub start_line: usize,
    /// 1-based inclusive end line
    pub end_line: usize,
    pub line_count: usize,
    /// Verbatim source slice covering [start_line, end_line]
    pub content: String,
}

/// A class recovered by structural extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassEntity {
    pub name: String,
    pub start_line: usize,
    pub end_line: usize,
    pub line_count: usize,
    pub content: String,
    /// Method names in order of appearance
    pub methods: Vec<String>,
    /// Field/attribute names, deduplicated, in order of first appearance
    pub fields: Vec<String>,
}

/// A module-level variable binding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub line: usize,
}

/// Heuristic structural view of one source file.
///
/// Produced once by the extractor and treated as immutable by every
/// analyzer. There is no back-reference from classes to functions;
/// membership is recomputed via [`methods_of`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceUnit {
    pub language: Language,
    /// Raw text lines, 1-indexed conceptually
    pub lines: Vec<String>,
    pub functions: Vec<FunctionEntity>,
    pub classes: Vec<ClassEntity>,
    pub imports: Vec<String>,
    pub variables: Vec<Variable>,
}

/// Functions physically nested within the class's line range.
///
/// Membership is a query over the flat function list, not a stored
/// relationship, so entity ownership stays acyclic.
pub fn methods_of<'a>(
    class: &ClassEntity,
    functions: &'a [FunctionEntity],
) -> Vec<&'a FunctionEntity> {
    functions
        .iter()
        .filter(|f| f.start_line >= class.start_line && f.end_line <= class.end_line)
        .collect()
}

/// How FeatureEnvy inferred the class of a call receiver, most
/// trustworthy first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassInference {
    /// Inferred from a field assignment in the owning class body
    Field,
    /// Inferred from a `name: ClassName` parameter annotation
    Annotation,
    /// Inferred from an instantiation inside the method itself
    Instantiation,
    /// Capitalized object name, unverified
    Guessed,
}

/// Kind-specific payload carried alongside the common smell fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SmellPayload {
    LongMethod {
        method_name: String,
        actual_lines: usize,
        threshold: usize,
    },
    GodClass {
        class_name: String,
        method_count: usize,
        field_count: usize,
        method_threshold: usize,
        field_threshold: usize,
    },
    DuplicatedFunctions {
        function1: String,
        function2: String,
        similarity: f64,
        threshold: f64,
    },
    DuplicatedBlocks {
        similarity: f64,
        block_size: usize,
        threshold: f64,
    },
    LargeParameterList {
        function_name: String,
        parameter_count: usize,
        parameters: Vec<String>,
        threshold: usize,
    },
    MagicNumbers {
        magic_numbers: Vec<String>,
        line_content: String,
    },
    FeatureEnvy {
        method_name: String,
        class_name: String,
        envied_class: String,
        external_references: usize,
        own_references: usize,
        threshold: usize,
        inference: ClassInference,
    },
}

/// A single reported violation. Pure value record, created once by an
/// analyzer and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Smell {
    #[serde(rename = "type")]
    pub smell_type: SmellType,
    /// Human-readable line range, e.g. "12-30" or "12-30, 41-59"
    pub lines: String,
    pub description: String,
    pub details: String,
    pub severity: Severity,
    #[serde(flatten)]
    pub payload: SmellPayload,
}

/// Counts summarizing one file's analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_smells: usize,
    pub unique_smell_types: usize,
    pub lines_analyzed: usize,
}

/// The report produced for a single analyzed file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub file: String,
    pub file_path: String,
    pub language: String,
    /// Smell types that actually fired, in analyzer order
    pub active_smells: Vec<SmellType>,
    /// Flat smell list: analyzer order, then emission order within each
    pub detected: Vec<Smell>,
    pub summary: ReportSummary,
}

/// Aggregated report for a directory batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub directory: String,
    pub total_files: usize,
    pub files_with_smells: usize,
    pub results: Vec<FileReport>,
}
