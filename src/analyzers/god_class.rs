//! Flags classes whose method or field count exceeds the configured
//! thresholds. Both counts are checked independently but a violating
//! class gets a single combined smell.

use super::SmellAnalyzer;
use crate::config::Thresholds;
use crate::core::{Result, Severity, Smell, SmellPayload, SmellType, SourceUnit};

pub struct GodClassAnalyzer {
    method_threshold: usize,
    field_threshold: usize,
}

impl GodClassAnalyzer {
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            method_threshold: thresholds.god_class_methods,
            field_threshold: thresholds.god_class_fields,
        }
    }

    fn severity(&self, method_count: usize, field_count: usize) -> Severity {
        let method_ratio = method_count as f64 / self.method_threshold as f64;
        let field_ratio = field_count as f64 / self.field_threshold as f64;
        let max_ratio = method_ratio.max(field_ratio);

        if max_ratio >= 2.0 {
            Severity::High
        } else if max_ratio > 1.5 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

impl SmellAnalyzer for GodClassAnalyzer {
    fn smell_type(&self) -> SmellType {
        SmellType::GodClass
    }

    fn analyze(&self, unit: &SourceUnit) -> Result<Vec<Smell>> {
        let mut smells = Vec::new();

        for class in &unit.classes {
            let method_count = class.methods.len();
            let field_count = class.fields.len();

            let mut violations = Vec::new();
            if method_count > self.method_threshold {
                violations.push(format!(
                    "{} methods (threshold: {})",
                    method_count, self.method_threshold
                ));
            }
            if field_count > self.field_threshold {
                violations.push(format!(
                    "{} fields (threshold: {})",
                    field_count, self.field_threshold
                ));
            }

            if violations.is_empty() {
                continue;
            }

            smells.push(Smell {
                smell_type: SmellType::GodClass,
                lines: format!("{}-{}", class.start_line, class.end_line),
                description: format!(
                    "Class '{}' has too many responsibilities: {}.",
                    class.name,
                    violations.join(", ")
                ),
                details: format!(
                    "Class complexity: {} methods, {} fields",
                    method_count, field_count
                ),
                severity: self.severity(method_count, field_count),
                payload: SmellPayload::GodClass {
                    class_name: class.name.clone(),
                    method_count,
                    field_count,
                    method_threshold: self.method_threshold,
                    field_threshold: self.field_threshold,
                },
            });
        }

        Ok(smells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClassEntity, Language};

    fn unit_with_class(method_count: usize, field_count: usize) -> SourceUnit {
        SourceUnit {
            language: Language::Java,
            lines: vec![],
            functions: vec![],
            classes: vec![ClassEntity {
                name: "Everything".to_string(),
                start_line: 1,
                end_line: 100,
                line_count: 100,
                content: String::new(),
                methods: (0..method_count).map(|i| format!("m{i}")).collect(),
                fields: (0..field_count).map(|i| format!("f{i}")).collect(),
            }],
            imports: vec![],
            variables: vec![],
        }
    }

    fn analyzer() -> GodClassAnalyzer {
        GodClassAnalyzer::new(&Thresholds::default())
    }

    #[test]
    fn class_within_thresholds_is_clean() {
        let smells = analyzer().analyze(&unit_with_class(10, 15)).unwrap();
        assert!(smells.is_empty());
    }

    #[test]
    fn both_violations_produce_single_combined_smell() {
        // thresholds 10/15: ratios 1.1 and ~1.07, both under 1.5
        let smells = analyzer().analyze(&unit_with_class(11, 16)).unwrap();
        assert_eq!(smells.len(), 1);
        let smell = &smells[0];
        assert!(smell.description.contains("11 methods"));
        assert!(smell.description.contains("16 fields"));
        assert_eq!(smell.severity, Severity::Low);
    }

    #[test]
    fn method_violation_alone_fires() {
        let smells = analyzer().analyze(&unit_with_class(12, 3)).unwrap();
        assert_eq!(smells.len(), 1);
        assert!(smells[0].description.contains("12 methods"));
        assert!(!smells[0].description.contains("fields (threshold"));
    }

    #[test]
    fn severity_follows_max_threshold_ratio() {
        // field ratio 16/15 is low; method ratio drives the severity
        assert_eq!(
            analyzer().analyze(&unit_with_class(16, 0)).unwrap()[0].severity,
            Severity::Medium
        );
        assert_eq!(
            analyzer().analyze(&unit_with_class(20, 0)).unwrap()[0].severity,
            Severity::High
        );
        assert_eq!(
            analyzer().analyze(&unit_with_class(11, 31)).unwrap()[0].severity,
            Severity::High
        );
    }

    #[test]
    fn severity_is_monotonic_in_max_ratio() {
        let analyzer = analyzer();
        let mut last = Severity::Low;
        for methods in 11..30 {
            let severity = analyzer.analyze(&unit_with_class(methods, 0)).unwrap()[0].severity;
            assert!(severity >= last);
            last = severity;
        }
    }
}
