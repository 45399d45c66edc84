// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod config;
pub mod core;
pub mod detector;
pub mod extract;
pub mod io;
pub mod output;
pub mod similarity;

// Re-export commonly used types
pub use crate::core::{
    BatchReport, ClassEntity, ClassInference, Error, FileReport, FunctionEntity, Language,
    ReportSummary, Result, Severity, Smell, SmellPayload, SmellType, SourceUnit, Variable,
};

pub use crate::analyzers::{build_analyzers, SmellAnalyzer};
pub use crate::config::{load_config, SmellhoundConfig, Thresholds};
pub use crate::detector::Detector;
pub use crate::extract::extract;
pub use crate::output::{render_batch_report, render_file_report, OutputFormat};
pub use crate::similarity::similarity;
