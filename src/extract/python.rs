//! Python boundary detection: dedent-based scope closing.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{indentation, split_parameters};
use crate::core::{ClassEntity, FunctionEntity, Variable};

static DEF_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^def\s+(\w+)\s*\(").unwrap());
static SIGNATURE_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\)\s*(?:->\s*\w+\s*)?:\s*$").unwrap());
static SIGNATURE_PARAMS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"def\s+\w+\s*\((.*?)\)\s*(?:->\s*\w+\s*)?:").unwrap());
static CLASS_DEF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^class\s+(\w+)(?:\(.*?\))?:").unwrap());
static METHOD_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"def\s+(\w+)").unwrap());
static SELF_FIELD: Lazy<Regex> = Lazy::new(|| Regex::new(r"self\.(\w+)\s*=").unwrap());
static MODULE_VAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)\s*=").unwrap());
static IMPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(import|from)\s+(.+)").unwrap());

/// How many blank lines a multi-line signature scan tolerates before
/// giving up on finding the closing `):`.
const SIGNATURE_BLANK_TOLERANCE: usize = 3;

pub fn extract_functions(lines: &[String]) -> Vec<FunctionEntity> {
    let mut functions = Vec::new();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if !line.starts_with("def ") {
            continue;
        }
        let Some(caps) = DEF_NAME.captures(line) else {
            continue;
        };
        let name = caps[1].to_string();

        // Recover multi-line signatures by concatenating continuation
        // lines until the closing pattern appears. A string literal,
        // a comment, or too many blank lines ends the search.
        let mut full_signature = line.to_string();
        if !SIGNATURE_CLOSE.is_match(line) {
            for (j, continuation) in lines.iter().enumerate().skip(i + 1) {
                let next = continuation.trim();
                full_signature.push(' ');
                full_signature.push_str(next);
                if SIGNATURE_CLOSE.is_match(next) {
                    break;
                }
                if next.starts_with("\"\"\"")
                    || next.starts_with('#')
                    || (next.is_empty() && j > i + SIGNATURE_BLANK_TOLERANCE)
                {
                    break;
                }
            }
        }

        let parameters = SIGNATURE_PARAMS
            .captures(&full_signature)
            .map(|c| split_parameters(&c[1]))
            .unwrap_or_default();

        let start_line = i + 1;
        let end_line = block_end(lines, i);

        functions.push(FunctionEntity {
            name,
            parameters,
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
        let name = caps[1].to_string();
        let start_line = i + 1;
        let end_line = block_end(lines, i);
        let content = lines[i..end_line].join("\n");

        classes.push(ClassEntity {
            name,
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
    let mut imports = Vec::new();
    for raw in lines {
        if let Some(caps) = IMPORT.captures(raw.trim()) {
            for item in caps[2].split(',') {
                imports.push(item.trim().to_string());
            }
        }
    }
    imports
}

pub fn extract_variables(lines: &[String]) -> Vec<Variable> {
    let mut variables = Vec::new();
    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.contains("def ") || line.contains("class ") {
            continue;
        }
        if let Some(caps) = MODULE_VAR.captures(line) {
            variables.push(Variable {
                name: caps[1].to_string(),
                line: i + 1,
            });
        }
    }
    variables
}

/// Dedent-based scope closing: the block started at `start` (0-based)
/// ends just before the first subsequent non-blank line whose
/// indentation is <= the start line's. Returns a 1-based inclusive end
/// line; runs to end of file when no dedent is found.
fn block_end(lines: &[String], start: usize) -> usize {
    let base_indent = indentation(&lines[start]);
    for (i, line) in lines.iter().enumerate().skip(start + 1) {
        if line.trim().is_empty() {
            continue;
        }
        if indentation(line) <= base_indent {
            return i;
        }
    }
    lines.len()
}

fn class_methods(content: &str) -> Vec<String> {
    content
        .split('\n')
        .filter_map(|raw| {
            let line = raw.trim();
            if line.starts_with("def ") {
                METHOD_NAME.captures(line).map(|c| c[1].to_string())
            } else {
                None
            }
        })
        .collect()
}

fn class_fields(content: &str) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    for raw in content.split('\n') {
        if let Some(caps) = SELF_FIELD.captures(raw.trim()) {
            let name = caps[1].to_string();
            if !fields.contains(&name) {
                fields.push(name);
            }
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn lines(source: &str) -> Vec<String> {
        source.split('\n').map(str::to_string).collect()
    }

    #[test]
    fn extracts_simple_function() {
        let src = lines(indoc! {"
            def greet(name):
                message = 'hi ' + name
                return message

            x = 1
        "});
        let functions = extract_functions(&src);
        assert_eq!(functions.len(), 1);
        let f = &functions[0];
        assert_eq!(f.name, "greet");
        assert_eq!(f.parameters, vec!["name"]);
        assert_eq!(f.start_line, 1);
        // the blank separator line precedes the dedent, so it belongs
        // to the function span
        assert_eq!(f.end_line, 4);
        assert_eq!(f.line_count, 4);
        assert!(f.content.contains("return message"));
    }

    #[test]
    fn function_without_dedent_runs_to_end_of_file() {
        let src = lines("def f():\n    a = 1\n    b = 2");
        let functions = extract_functions(&src);
        assert_eq!(functions[0].end_line, 3);
    }

    #[test]
    fn blank_lines_do_not_close_a_block() {
        let src = lines(indoc! {"
            def f():
                a = 1

                b = 2
            c = 3
        "});
        let functions = extract_functions(&src);
        assert_eq!(functions[0].end_line, 4);
    }

    #[test]
    fn recovers_multi_line_signature() {
        let src = lines(indoc! {"
            def configure(host,
                          port,
                          timeout):
                return host
        "});
        let functions = extract_functions(&src);
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].parameters, vec!["host", "port", "timeout"]);
    }

    #[test]
    fn signature_with_return_annotation() {
        let src = lines("def total(a, b) -> int:\n    return a + b");
        let functions = extract_functions(&src);
        assert_eq!(functions[0].parameters, vec!["a", "b"]);
    }

    #[test]
    fn nested_methods_are_extracted_as_functions() {
        let src = lines(indoc! {"
            class Cart:
                def __init__(self):
                    self.items = []

                def add(self, item):
                    self.items.append(item)
        "});
        let functions = extract_functions(&src);
        let names: Vec<&str> = functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["__init__", "add"]);
    }

    #[test]
    fn extracts_class_with_methods_and_fields() {
        let src = lines(indoc! {"
            class Cart:
                def __init__(self):
                    self.items = []
                    self.total = 0
                    self.total = 0

                def add(self, item):
                    self.items.append(item)
            done = True
        "});
        let classes = extract_classes(&src);
        assert_eq!(classes.len(), 1);
        let c = &classes[0];
        assert_eq!(c.name, "Cart");
        assert_eq!(c.start_line, 1);
        assert_eq!(c.end_line, 8);
        assert_eq!(c.methods, vec!["__init__", "add"]);
        // fields deduplicated, order of first appearance
        assert_eq!(c.fields, vec!["items", "total"]);
    }

    #[test]
    fn class_with_base_list() {
        let src = lines("class Child(Base):\n    pass");
        let classes = extract_classes(&src);
        assert_eq!(classes[0].name, "Child");
    }

    #[test]
    fn extracts_imports() {
        let src = lines(indoc! {"
            import os
            from collections import deque, Counter
            x = 1
        "});
        let imports = extract_imports(&src);
        assert_eq!(imports, vec!["os", "collections import deque", "Counter"]);
    }

    #[test]
    fn extracts_module_variables() {
        let src = lines(indoc! {"
            LIMIT = 10
            def f():
                inner = 2
            class C:
                pass
        "});
        let variables = extract_variables(&src);
        assert_eq!(variables.len(), 2);
        assert_eq!(variables[0].name, "LIMIT");
        assert_eq!(variables[0].line, 1);
        assert_eq!(variables[1].name, "inner");
    }

    #[test]
    fn malformed_input_degrades_gracefully() {
        let src = lines("def (((\nclass :\n    ???");
        assert!(extract_functions(&src).is_empty());
        assert!(extract_classes(&src).is_empty());
    }
}
