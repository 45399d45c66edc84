use clap::Parser;
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "smellhound")]
#[command(about = "Detects common code smells in Python and Java source files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File to analyze
    #[arg(short, long, conflicts_with = "directory")]
    pub file: Option<PathBuf>,

    /// Directory to analyze recursively
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Configuration file path (defaults to searching for .smellhound.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Comma-separated list of smells to detect only
    #[arg(long, value_delimiter = ',')]
    pub only: Option<Vec<String>>,

    /// Comma-separated list of smells to exclude
    #[arg(long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// Glob patterns for paths to skip during directory analysis
    #[arg(long = "ignore", value_delimiter = ',')]
    pub ignore_patterns: Option<Vec<String>>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Save report to file instead of stdout
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_mode_with_selections() {
        let cli = Cli::parse_from([
            "smellhound",
            "-f",
            "sample.py",
            "--only",
            "LongMethod,GodClass",
            "-o",
            "markdown",
            "-v",
        ]);
        assert_eq!(cli.file, Some(PathBuf::from("sample.py")));
        assert_eq!(
            cli.only,
            Some(vec!["LongMethod".to_string(), "GodClass".to_string()])
        );
        assert_eq!(cli.output, Some(OutputFormat::Markdown));
        assert!(cli.verbose);
    }

    #[test]
    fn parses_directory_mode() {
        let cli = Cli::parse_from(["smellhound", "-d", "src", "--exclude", "MagicNumbers"]);
        assert_eq!(cli.directory, Some(PathBuf::from("src")));
        assert_eq!(cli.exclude, Some(vec!["MagicNumbers".to_string()]));
        assert_eq!(cli.output, None);
    }

    #[test]
    fn file_and_directory_are_mutually_exclusive() {
        assert!(Cli::try_parse_from(["smellhound", "-f", "a.py", "-d", "src"]).is_err());
    }
}
