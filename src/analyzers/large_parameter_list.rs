//! Flags functions with more parameters than the configured threshold.

use super::SmellAnalyzer;
use crate::config::Thresholds;
use crate::core::{Result, Severity, Smell, SmellPayload, SmellType, SourceUnit};

pub struct LargeParameterListAnalyzer {
    threshold: usize,
}

impl LargeParameterListAnalyzer {
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            threshold: thresholds.large_parameter_list,
        }
    }

    fn severity(&self, param_count: usize) -> Severity {
        let count = param_count as f64;
        let threshold = self.threshold as f64;
        if count > threshold * 2.0 {
            Severity::High
        } else if count > threshold * 1.5 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

impl SmellAnalyzer for LargeParameterListAnalyzer {
    fn smell_type(&self) -> SmellType {
        SmellType::LargeParameterList
    }

    fn analyze(&self, unit: &SourceUnit) -> Result<Vec<Smell>> {
        let smells = unit
            .functions
            .iter()
            .filter(|f| f.parameters.len() > self.threshold)
            .map(|f| {
                let param_count = f.parameters.len();
                Smell {
                    smell_type: SmellType::LargeParameterList,
                    lines: f.start_line.to_string(),
                    description: format!(
                        "Function '{}()' has {} parameters (threshold: {}).",
                        f.name, param_count, self.threshold
                    ),
                    details: format!("Parameters: {}", f.parameters.join(", ")),
                    severity: self.severity(param_count),
                    payload: SmellPayload::LargeParameterList {
                        function_name: f.name.clone(),
                        parameter_count: param_count,
                        parameters: f.parameters.clone(),
                        threshold: self.threshold,
                    },
                }
            })
            .collect();

        Ok(smells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FunctionEntity, Language, SmellPayload};

    fn unit_with_params(count: usize) -> SourceUnit {
        let parameters: Vec<String> = (0..count).map(|i| format!("p{i}")).collect();
        SourceUnit {
            language: Language::Python,
            lines: vec![],
            functions: vec![FunctionEntity {
                name: "build".to_string(),
                parameters,
                start_line: 3,
                end_line: 5,
                line_count: 3,
                content: String::new(),
            }],
            classes: vec![],
            imports: vec![],
            variables: vec![],
        }
    }

    fn analyzer(threshold: usize) -> LargeParameterListAnalyzer {
        let thresholds = Thresholds {
            large_parameter_list: threshold,
            ..Thresholds::default()
        };
        LargeParameterListAnalyzer::new(&thresholds)
    }

    #[test]
    fn seven_of_five_is_low_severity() {
        // 7 is not > 5 * 1.5 = 7.5, so this stays low
        let smells = analyzer(5).analyze(&unit_with_params(7)).unwrap();
        assert_eq!(smells.len(), 1);
        assert_eq!(smells[0].severity, Severity::Low);
        assert_eq!(smells[0].lines, "3");
        match &smells[0].payload {
            SmellPayload::LargeParameterList {
                parameter_count, ..
            } => assert_eq!(*parameter_count, 7),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn eight_of_five_is_medium_severity() {
        let smells = analyzer(5).analyze(&unit_with_params(8)).unwrap();
        assert_eq!(smells[0].severity, Severity::Medium);
    }

    #[test]
    fn eleven_of_five_is_high_severity() {
        let smells = analyzer(5).analyze(&unit_with_params(11)).unwrap();
        assert_eq!(smells[0].severity, Severity::High);
    }

    #[test]
    fn at_threshold_is_not_flagged() {
        let smells = analyzer(5).analyze(&unit_with_params(5)).unwrap();
        assert!(smells.is_empty());
    }
}
