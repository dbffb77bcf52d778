//! codegauge - heuristic source quality analyzer.
//!
//! Given raw source text, codegauge guesses its language (Python, C++,
//! JavaScript; C only on request), extracts coarse structure (imports,
//! function and class names), computes quality metrics, flags potential
//! issues, proposes improvements and reduces everything to a 0-100 score.
//!
//! Everything is regex and line based. No syntax tree is built, so results
//! are approximations meant for quick triage.
//!
//! # Architecture
//!
//! - `language`: language tags and marker-based detection
//! - `structure`: imports, functions, classes and structural complexity
//! - `metrics`: lines, comments, nesting, cyclomatic complexity, tokens
//! - `detect`: potential issues and improvement suggestions
//! - `analyzer`: orchestration and strict per-language entry points
//! - `score`: quality score and grade
//! - `config`, `scan`, `report`, `cli`: the command-line tool
//!
//! # Example
//!
//! ```
//! use codegauge::{analyze, calculate_quality};
//!
//! let result = analyze("def foo():\n    pass\n");
//! assert_eq!(result.line_count, 2);
//! assert_eq!(calculate_quality(&result), 90);
//! ```

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod language;
pub mod metrics;
pub mod report;
pub mod scan;
pub mod score;
pub mod structure;

pub use analyzer::{
    analyze, analyze_as, analyze_c, analyze_cpp, analyze_javascript, analyze_python,
    analyze_with_language, analyze_with_structure, extract_checked, suggest, AnalysisResult,
};
pub use config::Config;
pub use error::AnalyzeError;
pub use language::{detect, Language};
pub use scan::{FileReport, ScanResult, Scanner};
pub use score::{calculate_quality, QualityScore};
pub use structure::{extract, extract_as, CodeStructure};
