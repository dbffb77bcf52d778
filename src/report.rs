//! Output formatting for codegauge results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::scan::{FileReport, ScanResult};

// =============================================================================
// JSON Format
// =============================================================================

/// Top-level JSON report.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
    pub threshold: i32,
    pub passed: bool,
    pub files_scanned: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_score: Option<f64>,
    pub files: Vec<JsonFileReport>,
}

/// Per-file JSON entry.
#[derive(Serialize, Deserialize, Default)]
pub struct JsonFileReport {
    pub file_path: String,
    pub file_name: String,
    pub language: String,
    pub complexity: usize,
    pub imports: Vec<String>,
    pub functions: Vec<String>,
    pub classes: Vec<String>,
    pub line_count: usize,
    pub comment_count: usize,
    pub comment_ratio: f64,
    pub nesting_depth: usize,
    pub cyclomatic_complexity: usize,
    pub potential_issues: Vec<String>,
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub metadata: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_frequency: Option<BTreeMap<String, usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JsonFileReport {
    fn from_report(report: &FileReport, include_tokens: bool) -> Self {
        let mut entry = JsonFileReport {
            file_path: report.path.to_string_lossy().to_string(),
            file_name: report.file_name.clone(),
            error: report.error.clone(),
            ..Default::default()
        };

        if let Some(structure) = &report.structure {
            entry.language = structure.language.as_str().to_string();
            entry.complexity = structure.complexity;
            entry.imports = structure.imports.clone();
            entry.functions = structure.functions.clone();
            entry.classes = structure.classes.clone();
        }

        if let Some(analysis) = &report.analysis {
            entry.line_count = analysis.line_count;
            entry.comment_count = analysis.comment_count;
            entry.comment_ratio = analysis.comment_ratio;
            entry.nesting_depth = analysis.nesting_length;
            entry.cyclomatic_complexity = analysis.cyclomatic_complexity;
            entry.potential_issues = analysis.potential_issues.clone();
            entry.suggestions = analysis.suggestions.clone();
            entry.metadata = analysis.metadata.clone();
            if include_tokens {
                entry.token_frequency = Some(analysis.token_frequency.clone());
            }
        }

        if let Some(quality) = &report.quality {
            entry.quality_score = Some(quality.score);
            entry.grade = Some(quality.grade.clone());
        }

        entry
    }
}

/// Build the JSON report for a scan.
pub fn build_json_report(
    path: &str,
    config_path: Option<&str>,
    scan: &ScanResult,
    include_tokens: bool,
) -> JsonReport {
    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        config: config_path.map(str::to_string),
        threshold: scan.threshold,
        passed: scan.passed(),
        files_scanned: scan.files_scanned(),
        average_score: scan.average_score(),
        files: scan
            .files
            .iter()
            .map(|f| JsonFileReport::from_report(f, include_tokens))
            .collect(),
    }
}

/// Write results in JSON format.
pub fn write_json(
    path: &str,
    config_path: Option<&str>,
    scan: &ScanResult,
    include_tokens: bool,
) -> anyhow::Result<()> {
    let report = build_json_report(path, config_path, scan, include_tokens);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in colored terminal format.
pub fn write_pretty(path: &str, config_path: Option<&str>, scan: &ScanResult) {
    // Header
    println!();
    print!("  ");
    print!("{}", "codegauge".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Scanning: ".dimmed());
    println!("{}", path);
    print!("  {}", "Config:   ".dimmed());
    println!("{}", config_path.unwrap_or("(defaults)"));
    println!();

    if scan.files.is_empty() {
        println!("  {}", "No files to analyze".dimmed());
        println!();
    }

    for file in &scan.files {
        write_file(file);
        println!();
    }

    write_final_status(scan);
    println!();
}

fn write_file(file: &FileReport) {
    if file.passed() {
        print!("  {}", "✓ PASS".green());
    } else {
        print!("  {}", "✗ FAIL".red());
    }
    print!("  {}", file.path.to_string_lossy().blue());

    if let Some(error) = &file.error {
        println!();
        println!("    {} {}", "ERROR".red(), error);
        return;
    }

    if let Some(quality) = &file.quality {
        print!("  Score: ");
        write_colored_score(quality.score);
        print!("  Grade: ");
        write_colored_grade(&quality.grade);
    }
    if let Some(structure) = &file.structure {
        print!(
            "  {}",
            format!("({})", structure.language.display_name()).dimmed()
        );
    }
    println!();

    if let Some(structure) = &file.structure {
        println!(
            "    {}",
            format!(
                "{} functions, {} classes, {} imports, structural complexity {}",
                structure.functions.len(),
                structure.classes.len(),
                structure.imports.len(),
                structure.complexity
            )
            .dimmed()
        );
    }

    let Some(analysis) = &file.analysis else {
        return;
    };
    println!(
        "    {}",
        format!(
            "{} lines, {} comments ({:.2}), nesting {}, cyclomatic {}",
            analysis.line_count,
            analysis.comment_count,
            analysis.comment_ratio,
            analysis.nesting_length,
            analysis.cyclomatic_complexity
        )
        .dimmed()
    );

    for issue in &analysis.potential_issues {
        println!("    {} {}", "ISSUE".yellow(), issue);
    }
    for suggestion in &analysis.suggestions {
        println!("    {} {}", "HINT ".blue(), suggestion);
    }
}

fn write_colored_score(s: i32) {
    match s {
        s if s >= 90 => print!("{}", s.to_string().green().bold()),
        s if s >= 80 => print!("{}", s.to_string().green()),
        s if s >= 70 => print!("{}", s.to_string().yellow()),
        s if s >= 60 => print!("{}", s.to_string().yellow().bold()),
        _ => print!("{}", s.to_string().red()),
    }
}

fn write_colored_grade(grade: &str) {
    match grade {
        "A" => print!("{}", grade.green().bold()),
        "B" => print!("{}", grade.green()),
        "C" => print!("{}", grade.yellow()),
        "D" => print!("{}", grade.yellow().bold()),
        _ => print!("{}", grade.red()),
    }
}

fn write_final_status(scan: &ScanResult) {
    print!("  {}", format!("Threshold: {}", scan.threshold).dimmed());
    print!("  {}", format!("Files: {}", scan.files_scanned()).dimmed());
    if let Some(average) = scan.average_score() {
        print!("  Average: {:.1}", average);
    }
    print!("  ");

    if scan.passed() {
        print!("{}", "PASSED".green());
    } else {
        print!("{}", "FAILED".red());
    }
    println!();
}
