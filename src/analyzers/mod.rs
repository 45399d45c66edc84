//! Smell analyzers.
//!
//! Each analyzer consumes the same immutable [`SourceUnit`] and emits
//! its own smell records; analyzers have no dependencies on each other
//! and are safe to run concurrently.

pub mod duplicated_code;
pub mod feature_envy;
pub mod god_class;
pub mod large_parameter_list;
pub mod long_method;
pub mod magic_numbers;

pub use duplicated_code::DuplicatedCodeAnalyzer;
pub use feature_envy::FeatureEnvyAnalyzer;
pub use god_class::GodClassAnalyzer;
pub use large_parameter_list::LargeParameterListAnalyzer;
pub use long_method::LongMethodAnalyzer;
pub use magic_numbers::MagicNumbersAnalyzer;

use crate::config::SmellhoundConfig;
use crate::core::{Result, Smell, SmellType, SourceUnit};

/// A single smell detector.
///
/// Implementations only read the shared `SourceUnit`; a failure is
/// reported as an `Err` and isolated by the orchestrator rather than
/// aborting the run.
pub trait SmellAnalyzer: Send + Sync {
    fn smell_type(&self) -> SmellType;
    fn analyze(&self, unit: &SourceUnit) -> Result<Vec<Smell>>;
}

/// Build the enabled analyzers in their fixed registration order.
pub fn build_analyzers(config: &SmellhoundConfig) -> Vec<Box<dyn SmellAnalyzer>> {
    type Factory = fn(&SmellhoundConfig) -> Box<dyn SmellAnalyzer>;

    static REGISTRY: &[(SmellType, Factory)] = &[
        (SmellType::LongMethod, |c| {
            Box::new(LongMethodAnalyzer::new(&c.thresholds))
        }),
        (SmellType::GodClass, |c| {
            Box::new(GodClassAnalyzer::new(&c.thresholds))
        }),
        (SmellType::DuplicatedCode, |c| {
            Box::new(DuplicatedCodeAnalyzer::new(&c.thresholds))
        }),
        (SmellType::LargeParameterList, |c| {
            Box::new(LargeParameterListAnalyzer::new(&c.thresholds))
        }),
        (SmellType::MagicNumbers, |c| {
            Box::new(MagicNumbersAnalyzer::new(&c.thresholds))
        }),
        (SmellType::FeatureEnvy, |c| {
            Box::new(FeatureEnvyAnalyzer::new(&c.thresholds))
        }),
    ];

    REGISTRY
        .iter()
        .filter(|(smell, _)| config.smells.is_enabled(*smell))
        .map(|(_, factory)| factory(config))
        .collect()
}
