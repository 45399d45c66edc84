//! Flags functions whose line count exceeds the configured threshold.

use super::SmellAnalyzer;
use crate::config::Thresholds;
use crate::core::{Result, Severity, Smell, SmellPayload, SmellType, SourceUnit};

pub struct LongMethodAnalyzer {
    threshold: usize,
}

impl LongMethodAnalyzer {
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            threshold: thresholds.long_method,
        }
    }

    fn severity(&self, line_count: usize) -> Severity {
        let count = line_count as f64;
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

impl SmellAnalyzer for LongMethodAnalyzer {
    fn smell_type(&self) -> SmellType {
        SmellType::LongMethod
    }

    fn analyze(&self, unit: &SourceUnit) -> Result<Vec<Smell>> {
        let smells = unit
            .functions
            .iter()
            .filter(|f| f.line_count > self.threshold)
            .map(|f| Smell {
                smell_type: SmellType::LongMethod,
                lines: format!("{}-{}", f.start_line, f.end_line),
                description: format!(
                    "Method '{}()' exceeds {} lines ({} lines).",
                    f.name, self.threshold, f.line_count
                ),
                details: format!(
                    "Function has {} lines, threshold is {}",
                    f.line_count, self.threshold
                ),
                severity: self.severity(f.line_count),
                payload: SmellPayload::LongMethod {
                    method_name: f.name.clone(),
                    actual_lines: f.line_count,
                    threshold: self.threshold,
                },
            })
            .collect();

        Ok(smells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FunctionEntity, Language};

    fn unit_with_function(line_count: usize) -> SourceUnit {
        SourceUnit {
            language: Language::Python,
            lines: vec![],
            functions: vec![FunctionEntity {
                name: "work".to_string(),
                parameters: vec![],
                start_line: 1,
                end_line: line_count,
                line_count,
                content: String::new(),
            }],
            classes: vec![],
            imports: vec![],
            variables: vec![],
        }
    }

    fn analyzer(threshold: usize) -> LongMethodAnalyzer {
        let thresholds = Thresholds {
            long_method: threshold,
            ..Thresholds::default()
        };
        LongMethodAnalyzer::new(&thresholds)
    }

    #[test]
    fn function_at_threshold_is_not_flagged() {
        let smells = analyzer(40).analyze(&unit_with_function(40)).unwrap();
        assert!(smells.is_empty());
    }

    #[test]
    fn function_over_threshold_is_flagged_once() {
        let smells = analyzer(40).analyze(&unit_with_function(41)).unwrap();
        assert_eq!(smells.len(), 1);
        assert_eq!(smells[0].severity, Severity::Low);
        assert_eq!(smells[0].lines, "1-41");
    }

    #[test]
    fn severity_scales_with_threshold_multiples() {
        let analyzer = analyzer(40);
        // >1.5x is medium, >2x is high; boundaries themselves stay lower
        assert_eq!(
            analyzer.analyze(&unit_with_function(60)).unwrap()[0].severity,
            Severity::Low
        );
        assert_eq!(
            analyzer.analyze(&unit_with_function(61)).unwrap()[0].severity,
            Severity::Medium
        );
        assert_eq!(
            analyzer.analyze(&unit_with_function(80)).unwrap()[0].severity,
            Severity::Medium
        );
        assert_eq!(
            analyzer.analyze(&unit_with_function(81)).unwrap()[0].severity,
            Severity::High
        );
    }

    #[test]
    fn severity_is_monotonic_in_line_count() {
        let analyzer = analyzer(10);
        let mut last = Severity::Low;
        for count in 11..40 {
            let severity = analyzer.analyze(&unit_with_function(count)).unwrap()[0].severity;
            assert!(severity >= last);
            last = severity;
        }
    }
}
