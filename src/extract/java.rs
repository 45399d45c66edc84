//! Java boundary detection: regex recognition plus brace balancing.

use once_cell::sync::Lazy;
use regex::Regex;

use super::split_parameters;
use crate::core::{ClassEntity, FunctionEntity, Variable};

static METHOD_DEF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:public|private|protected)?\s*(?:static)?\s*\w+\s+(\w+)\s*\((.*?)\)").unwrap()
});
static CLASS_DEF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:public|private|protected)?\s*class\s+(\w+)").unwrap());
static FIELD_DEF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:private|public|protected)?\s*\w+\s+(\w+)\s*[=;]").unwrap());
static LOCAL_VAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+\s+(\w+)\s*[=;]").unwrap());
static IMPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^import\s+(.+);").unwrap());

pub fn extract_functions(lines: &[String]) -> Vec<FunctionEntity> {
    let mut functions = Vec::new();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.contains("class ") {
            continue;
        }
        let Some(caps) = METHOD_DEF.captures(line) else {
            continue;
        };

        let start_line = i + 1;
        let end_line = block_end(lines, i);

        functions.push(FunctionEntity {
            name: caps[1].to_string(),
            parameters: split_parameters(&caps[2]),
            start_line,
            end_line,
            line_count: end_line - start_line + 1,
            content: lines[i..end_line].join("\n"),
        });
    }

    functions
}

pub fn extract_classes(lines: &[String]) -> Vec<ClassEntity> {
    let mut classes = Vec::new();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        let Some(caps) = CLASS_DEF.captures(line) else {
            continue;
        };
        let start_line = i + 1;
        let end_line = block_end(lines, i);
        let content = lines[i..end_line].join("\n");

        classes.push(ClassEntity {
            name: caps[1].to_string(),
            start_line,
            end_line,
            line_count: end_line - start_line + 1,
            methods: class_methods(&content),
            fields: class_fields(&content),
            content,
        });
    }

    classes
}

pub fn extract_imports(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|raw| IMPORT.captures(raw.trim()).map(|c| c[1].to_string()))
        .collect()
}

pub fn extract_variables(lines: &[String]) -> Vec<Variable> {
    let mut variables = Vec::new();
    for (i, raw) in lines.iter().enumerate() {
        if let Some(caps) = LOCAL_VAR.captures(raw.trim()) {
            variables.push(Variable {
                name: caps[1].to_string(),
                line: i + 1,
            });
        }
    }
    variables
}

/// Brace-balance scope closing: counting `{`/`}` from the start line,
/// the construct ends on the first line where the running balance
/// returns to zero after having gone positive. Returns a 1-based
/// inclusive end line; an unbalanced construct runs to end of file.
fn block_end(lines: &[String], start: usize) -> usize {
    let mut balance = 0i32;
    let mut opened = false;

    for (i, line) in lines.iter().enumerate().skip(start) {
        for ch in line.chars() {
            match ch {
                '{' => {
                    balance += 1;
                    opened = true;
                }
                '}' => {
                    balance -= 1;
                    if opened && balance == 0 {
                        return i + 1;
                    }
                }
                _ => {}
            }
        }
    }

    lines.len()
}

fn class_methods(content: &str) -> Vec<String> {
    content
        .split('\n')
        .filter_map(|raw| {
            let line = raw.trim();
            if line.contains("class ") {
                return None;
            }
            METHOD_DEF.captures(line).map(|c| c[1].to_string())
        })
        .collect()
}

fn class_fields(content: &str) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    for raw in content.split('\n') {
        let line = raw.trim();
        if line.contains('(') || line.contains("class ") {
            continue;
        }
        if let Some(caps) = FIELD_DEF.captures(line) {
            let name = caps[1].to_string();
            if !fields.contains(&name) {
                fields.push(name);
            }
        }
    }
    fields
}
