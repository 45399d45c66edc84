use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;

use smellhound::cli::Cli;
use smellhound::config::{self, SmellhoundConfig};
use smellhound::detector::Detector;
use smellhound::output::{render_batch_report, render_file_report};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.file.is_none() && cli.directory.is_none() {
        bail!("Please specify a file (-f) or directory (-d) to analyze");
    }

    let config = resolve_config(&cli);
    let detector = Detector::new(&config);
    let format = config.output.format;
    let verbose = config.output.verbose_mode;

    let rendered = if let Some(file) = &cli.file {
        let report = detector
            .analyze_path(file)
            .with_context(|| format!("Failed to analyze {}", file.display()))?;
        render_file_report(&report, format, verbose)?
    } else {
        let directory = cli.directory.as_ref().expect("checked above");
        let ignore = cli.ignore_patterns.clone().unwrap_or_default();
        let report = detector
            .analyze_directory(directory, &ignore)
            .with_context(|| format!("Failed to analyze {}", directory.display()))?;
        render_batch_report(&report, format, verbose)?
    };

    match &cli.report {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("Report saved to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> SmellhoundConfig {
    let mut config = config::load_config(cli.config.as_deref());
    config.apply_smell_selection(cli.only.as_deref(), cli.exclude.as_deref());

    if let Some(format) = cli.output {
        config.output.format = format;
    }
    if cli.verbose {
        config.output.verbose_mode = true;
    }

    config
}
