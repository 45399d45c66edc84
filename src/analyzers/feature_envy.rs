//! Feature-envy detection: methods that reference another class's
//! data or behavior more than their own.
//!
//! Receiver classes are inferred, not resolved. The inference chain is
//! best-effort with a last-resort guess (capitalize the receiver name),
//! and guessed-only detections are capped at medium severity since
//! nothing verified them.

use once_cell::sync::Lazy;
use regex::Regex;

use super::SmellAnalyzer;
use crate::config::Thresholds;
use crate::core::{
    methods_of, ClassEntity, ClassInference, FunctionEntity, Result, Severity, Smell,
    SmellPayload, SmellType, SourceUnit,
};

static MEMBER_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z_]\w*)\.([A-Za-z_]\w*)\s*\(").unwrap());
static MEMBER_ACCESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z_]\w*)\.([A-Za-z_]\w*)").unwrap());
static SELF_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bself\.").unwrap());
static THIS_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bthis\.").unwrap());

pub struct FeatureEnvyAnalyzer {
    threshold: usize,
}

/// External reference tally for one inferred class, in first-seen order
struct ExternalRef {
    class_name: String,
    count: usize,
    inference: ClassInference,
}

impl FeatureEnvyAnalyzer {
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            threshold: thresholds.feature_envy,
        }
    }

    fn severity(external: usize, own: usize, inference: ClassInference) -> Severity {
        let ratio = external as f64 / own.max(1) as f64;
        let base = if ratio > 5.0 {
            Severity::High
        } else if ratio > 2.0 {
            Severity::Medium
        } else {
            Severity::Low
        };

        // an unverified guess alone never justifies the top severity
        if inference == ClassInference::Guessed {
            base.min(Severity::Medium)
        } else {
            base
        }
    }
}

impl SmellAnalyzer for FeatureEnvyAnalyzer {
    fn smell_type(&self) -> SmellType {
        SmellType::FeatureEnvy
    }

    fn analyze(&self, unit: &SourceUnit) -> Result<Vec<Smell>> {
        let mut smells = Vec::new();

        for class in &unit.classes {
            for method in methods_of(class, &unit.functions) {
                let own = own_references(method, class);

                for external in external_references(method, class) {
                    if external.count < self.threshold || external.count <= own {
                        continue;
                    }

                    smells.push(Smell {
                        smell_type: SmellType::FeatureEnvy,
                        lines: format!("{}-{}", method.start_line, method.end_line),
                        description: format!(
                            "Method '{}()' in class '{}' uses {} features from '{}' \
                             but only {} from its own class.",
                            method.name, class.name, external.count, external.class_name, own
                        ),
                        details: "Method shows feature envy towards external class".to_string(),
                        severity: Self::severity(external.count, own, external.inference),
                        payload: SmellPayload::FeatureEnvy {
                            method_name: method.name.clone(),
                            class_name: class.name.clone(),
                            envied_class: external.class_name.clone(),
                            external_references: external.count,
                            own_references: own,
                            threshold: self.threshold,
                            inference: external.inference,
                        },
                    });
                }
            }
        }

        Ok(smells)
    }
}

/// Tally `object.member` accesses in the method body per inferred
/// receiver class, excluding self/this references and receivers that
/// resolve to the owning class.
fn external_references(method: &FunctionEntity, class: &ClassEntity) -> Vec<ExternalRef> {
    let mut refs: Vec<ExternalRef> = Vec::new();

    for line in method.content.split('\n') {
        for pattern in [&*MEMBER_CALL, &*MEMBER_ACCESS] {
            for caps in pattern.captures_iter(line) {
                let object = &caps[1];
                if object == "self" || object == "this" {
                    continue;
                }

                let (class_name, inference) = identify_object_class(object, class, method);
                if class_name == class.name {
                    continue;
                }

                match refs.iter_mut().find(|r| r.class_name == class_name) {
                    Some(existing) => {
                        existing.count += 1;
                        // keep the most trustworthy inference seen
                        if inference < existing.inference {
                            existing.inference = inference;
                        }
                    }
                    None => refs.push(ExternalRef {
                        class_name,
                        count: 1,
                        inference,
                    }),
                }
            }
        }
    }

    refs
}

/// Count references a method makes to its own class: self/this
/// accesses, plus whole-word mentions of the class's fields and calls
/// to its other methods.
fn own_references(method: &FunctionEntity, class: &ClassEntity) -> usize {
    let content = &method.content;
    let mut own = SELF_REF.find_iter(content).count() + THIS_REF.find_iter(content).count();

    for field in &class.fields {
        own += count_matches(content, &format!(r"\b{}\b", regex::escape(field)));
    }
    for method_name in &class.methods {
        if method_name != &method.name {
            own += count_matches(content, &format!(r"\b{}\s*\(", regex::escape(method_name)));
        }
    }

    own
}

/// Infer the class of a receiver, in priority order: field assignment
/// in the owning class, parameter annotation, instantiation inside the
/// method, then the capitalized receiver name as a last-resort guess.
fn identify_object_class(
    object: &str,
    class: &ClassEntity,
    method: &FunctionEntity,
) -> (String, ClassInference) {
    let escaped = regex::escape(object);

    if class.fields.iter().any(|f| f == object) {
        let field_patterns = [
            format!(r"(?i){escaped}\s*=\s*new\s+(\w+)"),
            format!(r"(?i){escaped}\s*=\s*(\w+)\("),
            format!(r"(?i)(\w+)\s+{escaped}\s*[=;]"),
        ];
        for pattern in &field_patterns {
            if let Some(name) = first_capture(&class.content, pattern) {
                return (name, ClassInference::Field);
            }
        }
    }

    if let Some(name) = first_capture(&method.content, &format!(r"(?i){escaped}\s*:\s*(\w+)")) {
        return (name, ClassInference::Annotation);
    }

    if let Some(name) = first_capture(
        &method.content,
        &format!(r"(?i){escaped}\s*=\s*(?:new\s+)?(\w+)\s*\("),
    ) {
        return (name, ClassInference::Instantiation);
    }

    (capitalize(object), ClassInference::Guessed)
}

fn first_capture(text: &str, pattern: &str) -> Option<String> {
    Regex::new(pattern)
        .ok()
        .and_then(|re| re.captures(text).map(|c| c[1].to_string()))
}

fn count_matches(text: &str, pattern: &str) -> usize {
    Regex::new(pattern)
        .map(|re| re.find_iter(text).count())
        .unwrap_or(0)
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
