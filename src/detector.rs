//! Analysis orchestration: single files, in-memory content, and
//! directory batches.
//!
//! Analyzer failures are isolated per analyzer (the rest of the file
//! still reports) and per file within a batch (the rest of the batch
//! still reports). Batch analysis runs files in parallel; ordering is
//! restored by analyzing a pre-sorted path list.

use rayon::prelude::*;
use std::fs;
use std::path::Path;

use crate::analyzers::{build_analyzers, SmellAnalyzer};
use crate::config::SmellhoundConfig;
use crate::core::{BatchReport, Error, FileReport, Language, ReportSummary, Result, Smell};
use crate::extract::extract;
use crate::io::FileWalker;

pub struct Detector {
    analyzers: Vec<Box<dyn SmellAnalyzer>>,
}

impl Detector {
    pub fn new(config: &SmellhoundConfig) -> Self {
        Self {
            analyzers: build_analyzers(config),
        }
    }

    /// Analyze one file on disk. Unsupported extensions are an error;
    /// no partial report is produced for them.
    pub fn analyze_path(&self, path: &Path) -> Result<FileReport> {
        let language = Language::from_path(path).ok_or_else(|| Error::unsupported(path))?;
        let content = fs::read_to_string(path)?;
        Ok(self.analyze_content(&content, language, path))
    }

    /// Analyze already-loaded source text. A failing analyzer logs a
    /// warning and contributes nothing.
    pub fn analyze_content(&self, content: &str, language: Language, path: &Path) -> FileReport {
        let unit = extract(content, language);

        let mut detected: Vec<Smell> = Vec::new();
        let mut active_smells = Vec::new();

        for analyzer in &self.analyzers {
            match analyzer.analyze(&unit) {
                Ok(smells) if !smells.is_empty() => {
                    active_smells.push(analyzer.smell_type());
                    detected.extend(smells);
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("{} analyzer failed: {}", analyzer.smell_type(), e);
                }
            }
        }

        FileReport {
            file: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            file_path: path.to_string_lossy().into_owned(),
            language: language.display_name().to_string(),
            summary: ReportSummary {
                total_smells: detected.len(),
                unique_smell_types: active_smells.len(),
                lines_analyzed: unit.lines.len(),
            },
            active_smells,
            detected,
        }
    }

    /// Analyze every supported file under a directory. Files that fail
    /// to read or analyze are logged and skipped, not fatal.
    pub fn analyze_directory(
        &self,
        directory: &Path,
        ignore_patterns: &[String],
    ) -> Result<BatchReport> {
        let files = FileWalker::new(directory.to_path_buf())
            .with_ignore_patterns(ignore_patterns.to_vec())
            .walk()
            .map_err(|e| Error::Analysis(e.to_string()))?;

        let results: Vec<FileReport> = files
            .par_iter()
            .filter_map(|path| match self.analyze_path(path) {
                Ok(report) => Some(report),
                Err(e) => {
                    log::warn!("Skipping {}: {}", path.display(), e);
                    None
                }
            })
            .collect();

        Ok(BatchReport {
            directory: directory.to_string_lossy().into_owned(),
            total_files: results.len(),
            files_with_smells: results.iter().filter(|r| !r.detected.is_empty()).count(),
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SmellType;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn detector() -> Detector {
        Detector::new(&SmellhoundConfig::default())
    }

    #[test]
    fn clean_content_yields_empty_report() {
        let source = indoc! {"
            def add(a, b):
                return a + b
        "};
        let report =
            detector().analyze_content(source, Language::Python, &PathBuf::from("clean.py"));
        assert!(report.active_smells.is_empty());
        assert!(report.detected.is_empty());
        assert_eq!(report.summary.total_smells, 0);
        assert_eq!(report.file, "clean.py");
        assert_eq!(report.language, "Python");
    }

    #[test]
    fn lines_analyzed_counts_split_lines() {
        // trailing newline yields one extra empty element, as reported
        let report =
            detector().analyze_content("a = 1\nb = 2\n", Language::Python, Path::new("x.py"));
        assert_eq!(report.summary.lines_analyzed, 3);
    }

    #[test]
    fn active_smells_follow_analyzer_order() {
        let params = "a, b, c, d, e, f, g";
        let body: String = (0..45).map(|i| format!("    x{i} = x{i} + step\n")).collect();
        let source = format!("def heavy({params}):\n{body}");
        let report =
            detector().analyze_content(&source, Language::Python, Path::new("heavy.py"));
        assert!(report.active_smells.contains(&SmellType::LongMethod));
        assert!(report.active_smells.contains(&SmellType::LargeParameterList));
        let positions: Vec<usize> = report
            .active_smells
            .iter()
            .map(|s| SmellType::ALL.iter().position(|t| t == s).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert_eq!(report.summary.unique_smell_types, report.active_smells.len());
    }

    #[test]
    fn disabled_analyzer_does_not_fire() {
        let mut config = SmellhoundConfig::default();
        config.smells.set_enabled(SmellType::LargeParameterList, false);
        let source = "def wide(a, b, c, d, e, f, g, h, i, j, k, l):\n    return a\n";
        let report = Detector::new(&config).analyze_content(
            source,
            Language::Python,
            Path::new("wide.py"),
        );
        assert!(!report.active_smells.contains(&SmellType::LargeParameterList));
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "x = 99999\n").unwrap();
        let err = detector().analyze_path(&path).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFileKind { .. }));
        assert!(err
            .to_string()
            .contains("Only .py and .java files are supported"));
    }

    #[test]
    fn directory_batch_counts_files_with_smells() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("clean.py"), "def f(a):\n    return a\n").unwrap();
        std::fs::write(
            dir.path().join("smelly.py"),
            "def wide(a, b, c, d, e, f, g, h, i, j, k, l):\n    return a\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("ignored.txt"), "99999\n").unwrap();

        let batch = detector().analyze_directory(dir.path(), &[]).unwrap();
        assert_eq!(batch.total_files, 2);
        assert_eq!(batch.files_with_smells, 1);
        assert_eq!(batch.results[0].file, "clean.py");
        assert_eq!(batch.results[1].file, "smelly.py");
    }
}
