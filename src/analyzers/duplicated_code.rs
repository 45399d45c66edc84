//! Near-duplicate detection.
//!
//! Two passes: pairwise comparison of whole function bodies, and a
//! sliding-window scan over raw lines for duplicated blocks. Both use
//! the normalized edit-distance similarity and are O(n²) by design;
//! the window scan is capped by a configurable line-count guard since
//! it dominates worst-case latency.

use super::SmellAnalyzer;
use crate::config::Thresholds;
use crate::core::{Result, Severity, Smell, SmellPayload, SmellType, SourceUnit};
use crate::similarity::{normalize, similarity};

/// Windows whose normalized text is shorter than this are near-empty
/// or comment-only and not worth comparing.
const MIN_BLOCK_CHARS: usize = 10;

pub struct DuplicatedCodeAnalyzer {
    similarity_threshold: f64,
    min_line_count: usize,
    max_block_scan_lines: usize,
}

impl DuplicatedCodeAnalyzer {
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            similarity_threshold: thresholds.duplicated_code_similarity,
            min_line_count: thresholds.duplicated_code_min_lines,
            max_block_scan_lines: thresholds.max_block_scan_lines,
        }
    }

    fn severity(similarity: f64) -> Severity {
        if similarity > 0.95 {
            Severity::High
        } else if similarity > 0.9 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    /// Compare every unordered pair of sufficiently long functions.
    fn function_pairs(&self, unit: &SourceUnit) -> Vec<Smell> {
        let mut smells = Vec::new();
        let functions = &unit.functions;

        for i in 0..functions.len() {
            for j in (i + 1)..functions.len() {
                let (a, b) = (&functions[i], &functions[j]);
                if a.line_count < self.min_line_count || b.line_count < self.min_line_count {
                    continue;
                }

                let score = similarity(&a.content, &b.content);
                if score < self.similarity_threshold {
                    continue;
                }

                smells.push(Smell {
                    smell_type: SmellType::DuplicatedCode,
                    lines: format!(
                        "{}-{}, {}-{}",
                        a.start_line, a.end_line, b.start_line, b.end_line
                    ),
                    description: format!(
                        "Functions '{}()' and '{}()' have {}% similarity.",
                        a.name,
                        b.name,
                        (score * 100.0).round() as i64
                    ),
                    details: "Code duplication detected between two functions".to_string(),
                    severity: Self::severity(score),
                    payload: SmellPayload::DuplicatedFunctions {
                        function1: a.name.clone(),
                        function2: b.name.clone(),
                        similarity: score,
                        threshold: self.similarity_threshold,
                    },
                });
            }
        }

        smells
    }

    /// Slide a fixed-size window over the file and compare each window
    /// against every later, non-overlapping one. A match advances the
    /// inner cursor past the matched span so overlapping duplicates of
    /// the same block are reported once.
    fn duplicated_blocks(&self, unit: &SourceUnit) -> Vec<Smell> {
        let mut smells = Vec::new();
        let lines = &unit.lines;
        let block = self.min_line_count;

        if lines.len() < block * 2 {
            return smells;
        }
        if lines.len() > self.max_block_scan_lines {
            log::debug!(
                "skipping block duplication scan: {} lines exceeds cap of {}",
                lines.len(),
                self.max_block_scan_lines
            );
            return smells;
        }

        for i in 0..=(lines.len() - block) {
            let window_a = normalize(&lines[i..i + block].join("\n"));
            if window_a.len() < MIN_BLOCK_CHARS {
                continue;
            }

            let mut j = i + block;
            while j <= lines.len() - block {
                let window_b = normalize(&lines[j..j + block].join("\n"));
                if window_b.len() < MIN_BLOCK_CHARS {
                    j += 1;
                    continue;
                }

                let score = similarity(&window_a, &window_b);
                if score >= self.similarity_threshold {
                    smells.push(Smell {
                        smell_type: SmellType::DuplicatedCode,
                        lines: format!("{}-{}, {}-{}", i + 1, i + block, j + 1, j + block),
                        description: format!(
                            "Code blocks have {}% similarity.",
                            (score * 100.0).round() as i64
                        ),
                        details: "Duplicated code blocks detected".to_string(),
                        severity: Self::severity(score),
                        payload: SmellPayload::DuplicatedBlocks {
                            similarity: score,
                            block_size: block,
                            threshold: self.similarity_threshold,
                        },
                    });
                    // skip past the matched span
                    j += block;
                } else {
                    j += 1;
                }
            }
        }

        smells
    }
}

impl SmellAnalyzer for DuplicatedCodeAnalyzer {
    fn smell_type(&self) -> SmellType {
        SmellType::DuplicatedCode
    }

    fn analyze(&self, unit: &SourceUnit) -> Result<Vec<Smell>> {
        let mut smells = self.function_pairs(unit);
        smells.extend(self.duplicated_blocks(unit));
        Ok(smells)
    }
}
