//! Command-line interface for codegauge.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::{self, Config};
use crate::language::Language;
use crate::report;
use crate::scan::Scanner;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Default config written by `codegauge init`.
const DEFAULT_TEMPLATE: &str = include_str!("templates/default.yaml");

/// Heuristic source quality analyzer.
///
/// Guesses the language of each source file, extracts its structure,
/// computes quality metrics and reduces them to a 0-100 score.
#[derive(Parser)]
#[command(name = "codegauge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a file or directory and score its quality
    #[command(visible_alias = "check")]
    Analyze(AnalyzeArgs),
    /// Print the detected language of each file
    Detect(DetectArgs),
    /// Write a default codegauge config file
    Init(InitArgs),
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to analyze (file or directory)
    pub path: PathBuf,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Minimum acceptable quality score (exit non-zero if any file is below)
    #[arg(short, long)]
    pub threshold: Option<i32>,

    /// Force a language instead of detecting it (python, cpp, c, javascript)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// With --lang, fail files whose detected language differs
    #[arg(long)]
    pub strict: bool,

    /// Include identifier frequencies in JSON output
    #[arg(long)]
    pub tokens: bool,
}

/// Arguments for the detect command.
#[derive(Parser)]
pub struct DetectArgs {
    /// Path to inspect (file or directory)
    pub path: PathBuf,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "codegauge.yaml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Load the explicit config, or discover one in the working directory.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<(Config, Option<PathBuf>)> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => Config::discover(Path::new(".")),
    };

    match path {
        Some(p) => {
            debug!(path = %p.display(), "loading config");
            let config = Config::parse_file(&p)?;
            Ok((config, Some(p)))
        }
        None => {
            debug!("no config file found, using defaults");
            Ok((Config::default(), None))
        }
    }
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    // Validate format
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let (mut config, config_path) = match load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return Ok(EXIT_ERROR);
        }
    };

    // Command-line flags take precedence over the config file
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(lang) = &args.lang {
        config.language = Some(lang.clone());
    }
    if args.strict {
        config.strict = true;
    }
    if args.tokens {
        config.token_frequency = true;
    }

    if let Err(e) = config::validate(&config) {
        eprintln!("Error: invalid config: {}", e);
        return Ok(EXIT_ERROR);
    }
    let language = config.language()?;

    if !args.path.exists() {
        eprintln!("Error: cannot access path {:?}", args.path);
        return Ok(EXIT_ERROR);
    }

    let include_tokens = config.token_frequency;
    let strict = config.strict;
    let scanner = Scanner::new(&args.path)
        .config(config)
        .language(language)
        .strict(strict);

    let files = scanner
        .collect_files()
        .with_context(|| format!("failed to collect files under {}", args.path.display()))?;
    if files.is_empty() {
        eprintln!("Warning: no files to analyze");
    }
    info!(count = files.len(), "analyzing files");
    let result = scanner.scan_files(&files);

    let path_str = args.path.to_string_lossy().to_string();
    let config_str = config_path.map(|p| p.to_string_lossy().to_string());

    match args.format.as_str() {
        "json" => report::write_json(&path_str, config_str.as_deref(), &result, include_tokens)?,
        _ => report::write_pretty(&path_str, config_str.as_deref(), &result),
    }

    if result.passed() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}

/// Run the detect command.
pub fn run_detect(args: &DetectArgs) -> anyhow::Result<i32> {
    if !args.path.exists() {
        eprintln!("Error: cannot access path {:?}", args.path);
        return Ok(EXIT_ERROR);
    }

    let (config, _) = load_config(None)?;
    let files = Scanner::new(&args.path).config(config).collect_files()?;

    for file in files {
        let bytes = std::fs::read(&file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let language: Language = crate::language::detect(&String::from_utf8_lossy(&bytes));
        println!("{:<12} {}", language.as_str(), file.display());
    }

    Ok(EXIT_SUCCESS)
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    // Check if output already exists
    if args.output.exists() && !args.force {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Use --force to overwrite or --output to choose another path");
        return Ok(EXIT_ERROR);
    }

    // Create output directory if needed
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, DEFAULT_TEMPLATE) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to set your threshold and exclusions", args.output.display());
    println!("  2. Run: codegauge analyze . --config {}", args.output.display());

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_template_is_valid() {
        let config: Config = serde_yaml::from_str(DEFAULT_TEMPLATE).unwrap();
        config::validate(&config).unwrap();
        assert_eq!(config.threshold, crate::score::DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_init_writes_and_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("nested").join("codegauge.yaml");

        let args = InitArgs {
            output: output.clone(),
            force: false,
        };
        assert_eq!(run_init(&args).unwrap(), EXIT_SUCCESS);
        assert!(Config::parse_file(&output).is_ok());

        assert_eq!(run_init(&args).unwrap(), EXIT_ERROR);

        let args = InitArgs {
            output,
            force: true,
        };
        assert_eq!(run_init(&args).unwrap(), EXIT_SUCCESS);
    }

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::parse_from([
            "codegauge", "-vv", "check", "src", "--format", "json", "--lang", "c", "--strict",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.path, PathBuf::from("src"));
                assert_eq!(args.format, "json");
                assert_eq!(args.lang.as_deref(), Some("c"));
                assert!(args.strict);
                assert!(!args.tokens);
            }
            _ => panic!("expected analyze command"),
        }
    }
}
