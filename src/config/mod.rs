//! Configuration loading and defaults.
//!
//! Configuration lives in `.smellhound.toml`, discovered by walking
//! directory ancestors from the working directory. A missing or invalid
//! file degrades to defaults with a warning; it never fails the run.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{Error, Result, SmellType};
use crate::output::OutputFormat;

const CONFIG_FILE_NAME: &str = ".smellhound.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SmellhoundConfig {
    #[serde(default)]
    pub smells: SmellToggles,

    #[serde(default)]
    pub thresholds: Thresholds,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Per-detector enable switches. Keys mirror the smell type names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmellToggles {
    #[serde(default = "default_true", rename = "LongMethod")]
    pub long_method: bool,
    #[serde(default = "default_true", rename = "GodClass")]
    pub god_class: bool,
    #[serde(default = "default_true", rename = "DuplicatedCode")]
    pub duplicated_code: bool,
    #[serde(default = "default_true", rename = "LargeParameterList")]
    pub large_parameter_list: bool,
    #[serde(default = "default_true", rename = "MagicNumbers")]
    pub magic_numbers: bool,
    #[serde(default = "default_true", rename = "FeatureEnvy")]
    pub feature_envy: bool,
}

impl Default for SmellToggles {
    fn default() -> Self {
        Self {
            long_method: true,
            god_class: true,
            duplicated_code: true,
            large_parameter_list: true,
            magic_numbers: true,
            feature_envy: true,
        }
    }
}

impl SmellToggles {
    pub fn is_enabled(&self, smell: SmellType) -> bool {
        match smell {
            SmellType::LongMethod => self.long_method,
            SmellType::GodClass => self.god_class,
            SmellType::DuplicatedCode => self.duplicated_code,
            SmellType::LargeParameterList => self.large_parameter_list,
            SmellType::MagicNumbers => self.magic_numbers,
            SmellType::FeatureEnvy => self.feature_envy,
        }
    }

    pub fn set_enabled(&mut self, smell: SmellType, enabled: bool) {
        match smell {
            SmellType::LongMethod => self.long_method = enabled,
            SmellType::GodClass => self.god_class = enabled,
            SmellType::DuplicatedCode => self.duplicated_code = enabled,
            SmellType::LargeParameterList => self.large_parameter_list = enabled,
            SmellType::MagicNumbers => self.magic_numbers = enabled,
            SmellType::FeatureEnvy => self.feature_envy = enabled,
        }
    }
}

/// Detector thresholds. Key names mirror the original report fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_long_method", rename = "LongMethod")]
    pub long_method: usize,
    #[serde(default = "default_large_parameter_list", rename = "LargeParameterList")]
    pub large_parameter_list: usize,
    #[serde(default = "default_god_class_methods", rename = "GodClassMethods")]
    pub god_class_methods: usize,
    #[serde(default = "default_god_class_fields", rename = "GodClassFields")]
    pub god_class_fields: usize,
    #[serde(
        default = "default_duplicated_code_similarity",
        rename = "DuplicatedCodeSimilarity"
    )]
    pub duplicated_code_similarity: f64,
    #[serde(
        default = "default_duplicated_code_min_lines",
        rename = "DuplicatedCodeMinLines"
    )]
    pub duplicated_code_min_lines: usize,
    #[serde(default = "default_feature_envy", rename = "FeatureEnvyThreshold")]
    pub feature_envy: usize,
    /// Files longer than this skip the O(n²) block duplication scan
    #[serde(default = "default_max_block_scan_lines", rename = "MaxBlockScanLines")]
    pub max_block_scan_lines: usize,
}

fn default_true() -> bool {
    true
}
fn default_long_method() -> usize {
    40
}
fn default_large_parameter_list() -> usize {
    5
}
fn default_god_class_methods() -> usize {
    10
}
fn default_god_class_fields() -> usize {
    15
}
fn default_duplicated_code_similarity() -> f64 {
    0.8
}
fn default_duplicated_code_min_lines() -> usize {
    5
}
fn default_feature_envy() -> usize {
    3
}
fn default_max_block_scan_lines() -> usize {
    2000
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            long_method: default_long_method(),
            large_parameter_list: default_large_parameter_list(),
            god_class_methods: default_god_class_methods(),
            god_class_fields: default_god_class_fields(),
            duplicated_code_similarity: default_duplicated_code_similarity(),
            duplicated_code_min_lines: default_duplicated_code_min_lines(),
            feature_envy: default_feature_envy(),
            max_block_scan_lines: default_max_block_scan_lines(),
        }
    }
}

/// Output options consumed by the CLI layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_true", rename = "includeLineNumbers")]
    pub include_line_numbers: bool,
    #[serde(default, rename = "verboseMode")]
    pub verbose_mode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            include_line_numbers: true,
            verbose_mode: false,
        }
    }
}

impl SmellhoundConfig {
    /// Apply `--only` / `--exclude` CLI selections. `only` rewrites
    /// every toggle; `exclude` switches the named detectors off.
    pub fn apply_smell_selection(&mut self, only: Option<&[String]>, exclude: Option<&[String]>) {
        if let Some(only) = only {
            for smell in SmellType::ALL {
                self.smells
                    .set_enabled(smell, only.iter().any(|n| n.trim() == smell.as_str()));
            }
        }
        if let Some(exclude) = exclude {
            for name in exclude {
                if let Some(smell) = SmellType::from_name(name.trim()) {
                    self.smells.set_enabled(smell, false);
                }
            }
        }
    }
}

/// Parse and validate a TOML config string
pub fn parse_config(contents: &str) -> Result<SmellhoundConfig> {
    let mut config: SmellhoundConfig = toml::from_str(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))?;

    let similarity = config.thresholds.duplicated_code_similarity;
    if !(0.0..=1.0).contains(&similarity) {
        log::warn!("similarity threshold {similarity} outside [0, 1], using default");
        config.thresholds.duplicated_code_similarity = default_duplicated_code_similarity();
    }

    Ok(config)
}

fn try_load_from_path(path: &Path) -> Option<SmellhoundConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{e}. Using defaults.");
            None
        }
    }
}

/// Load configuration: from an explicit path when given, otherwise by
/// searching the working directory and its ancestors. Falls back to
/// defaults rather than failing.
pub fn load_config(explicit: Option<&Path>) -> SmellhoundConfig {
    if let Some(path) = explicit {
        return try_load_from_path(path).unwrap_or_else(|| {
            log::warn!(
                "Could not load config file {}. Using defaults.",
                path.display()
            );
            SmellhoundConfig::default()
        });
    }

    let Ok(current) = std::env::current_dir() else {
        return SmellhoundConfig::default();
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!("No config file found. Using defaults.");
            SmellhoundConfig::default()
        })
}

/// Ancestor chain used for config discovery, bounded by depth
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| dir.parent().map(Path::to_path_buf)).take(max_depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_documented_values() {
        let config = SmellhoundConfig::default();
        assert_eq!(config.thresholds.long_method, 40);
        assert_eq!(config.thresholds.large_parameter_list, 5);
        assert_eq!(config.thresholds.god_class_methods, 10);
        assert_eq!(config.thresholds.god_class_fields, 15);
        assert_eq!(config.thresholds.duplicated_code_similarity, 0.8);
        assert_eq!(config.thresholds.feature_envy, 3);
        assert!(SmellType::ALL.iter().all(|s| config.smells.is_enabled(*s)));
    }

    #[test]
    fn parses_partial_config() {
        let config = parse_config(
            r#"
            [smells]
            MagicNumbers = false

            [thresholds]
            LongMethod = 25
            "#,
        )
        .unwrap();
        assert!(!config.smells.is_enabled(SmellType::MagicNumbers));
        assert!(config.smells.is_enabled(SmellType::LongMethod));
        assert_eq!(config.thresholds.long_method, 25);
        assert_eq!(config.thresholds.large_parameter_list, 5);
    }

    #[test]
    fn invalid_similarity_resets_to_default() {
        let config = parse_config(
            r#"
            [thresholds]
            DuplicatedCodeSimilarity = 3.5
            "#,
        )
        .unwrap();
        assert_eq!(config.thresholds.duplicated_code_similarity, 0.8);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_config("[[[not toml").is_err());
    }

    #[test]
    fn only_selection_rewrites_all_toggles() {
        let mut config = SmellhoundConfig::default();
        config.apply_smell_selection(
            Some(&["LongMethod".to_string(), "GodClass".to_string()]),
            None,
        );
        assert!(config.smells.is_enabled(SmellType::LongMethod));
        assert!(config.smells.is_enabled(SmellType::GodClass));
        assert!(!config.smells.is_enabled(SmellType::MagicNumbers));
        assert!(!config.smells.is_enabled(SmellType::FeatureEnvy));
    }

    #[test]
    fn exclude_selection_disables_named_smells() {
        let mut config = SmellhoundConfig::default();
        config.apply_smell_selection(None, Some(&["DuplicatedCode".to_string()]));
        assert!(!config.smells.is_enabled(SmellType::DuplicatedCode));
        assert!(config.smells.is_enabled(SmellType::LongMethod));
    }

    #[test]
    fn unknown_exclude_names_are_ignored() {
        let mut config = SmellhoundConfig::default();
        config.apply_smell_selection(None, Some(&["NoSuchSmell".to_string()]));
        assert!(SmellType::ALL.iter().all(|s| config.smells.is_enabled(*s)));
    }

    #[test]
    fn ancestor_walk_is_depth_bounded() {
        let ancestors: Vec<PathBuf> =
            directory_ancestors(PathBuf::from("/a/b/c/d/e/f"), 3).collect();
        assert_eq!(ancestors.len(), 3);
        assert_eq!(ancestors[0], PathBuf::from("/a/b/c/d/e/f"));
        assert_eq!(ancestors[2], PathBuf::from("/a/b/c/d"));
    }
}
