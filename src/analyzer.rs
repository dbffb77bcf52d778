//! Analysis orchestration.
//!
//! Sequences detection, structural extraction, the metric passes and the
//! issue/suggestion heuristics into one [`AnalysisResult`]. Every entry
//! point is a pure function of its input text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::detect;
use crate::error::AnalyzeError;
use crate::language::Language;
use crate::metrics;
use crate::structure::{self, CodeStructure};

/// Metrics, issues and suggestions for one snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Lines containing at least one non-whitespace character
    pub line_count: usize,
    pub comment_count: usize,
    /// `comment_count / line_count`, or 0.0 for blank input. Not clamped.
    pub comment_ratio: f64,
    pub nesting_length: usize,
    /// Approximate cyclomatic complexity, always >= 1
    pub cyclomatic_complexity: usize,
    pub token_frequency: BTreeMap<String, usize>,
    pub potential_issues: Vec<String>,
    pub suggestions: Vec<String>,
    /// `language`, `function_count`, `class_count` and `import_count`
    pub metadata: BTreeMap<String, String>,
}

impl AnalysisResult {
    /// The language recorded in the metadata, if it parses.
    pub fn language(&self) -> Option<Language> {
        self.metadata.get("language").and_then(|s| s.parse().ok())
    }
}

/// Detect, extract and analyze `text`.
pub fn analyze(text: &str) -> AnalysisResult {
    let structure = structure::extract(text);
    analyze_with_structure(text, &structure)
}

/// Analyze `text` using an already extracted structure.
///
/// The structure's language selects the language-aware passes. Comment
/// counting is skipped for [`Language::Unknown`], leaving the count at 0.
pub fn analyze_with_structure(text: &str, structure: &CodeStructure) -> AnalysisResult {
    let language = structure.language;

    let line_count = metrics::count_lines(text);
    let comment_count = if language == Language::Unknown {
        0
    } else {
        metrics::count_comments(text, language).unwrap_or_else(|err| {
            debug!(%err, "comment count unavailable");
            0
        })
    };
    let comment_ratio = if line_count > 0 {
        comment_count as f64 / line_count as f64
    } else {
        0.0
    };

    let nesting_length = metrics::calculate_nesting_length(text, language);
    let cyclomatic_complexity = metrics::calculate_cyclomatic_complexity(text, language);

    debug!(
        language = %language,
        line_count,
        comment_count,
        nesting_length,
        cyclomatic_complexity,
        "analyzed snippet"
    );

    let mut metadata = BTreeMap::new();
    metadata.insert("language".to_string(), language.as_str().to_string());
    metadata.insert(
        "function_count".to_string(),
        structure.functions.len().to_string(),
    );
    metadata.insert("class_count".to_string(), structure.classes.len().to_string());
    metadata.insert(
        "import_count".to_string(),
        structure.imports.len().to_string(),
    );

    AnalysisResult {
        line_count,
        comment_count,
        comment_ratio,
        nesting_length,
        cyclomatic_complexity,
        token_frequency: metrics::calculate_token_frequency(text),
        potential_issues: detect::find_potential_issues(text, language),
        suggestions: detect::generate_suggestions(text, structure),
        metadata,
    }
}

/// Extract the structure of `text`, failing if its detected language is
/// not `expected`.
pub fn extract_checked(text: &str, expected: Language) -> Result<CodeStructure, AnalyzeError> {
    let structure = structure::extract(text);
    if structure.language != expected {
        debug!(
            expected = %expected,
            detected = %structure.language,
            "language mismatch"
        );
        return Err(AnalyzeError::LanguageMismatch {
            expected,
            detected: structure.language,
        });
    }
    Ok(structure)
}

/// Analyze `text`, failing if its detected language is not `expected`.
pub fn analyze_as(text: &str, expected: Language) -> Result<AnalysisResult, AnalyzeError> {
    let structure = extract_checked(text, expected)?;
    Ok(analyze_with_structure(text, &structure))
}

pub fn analyze_python(text: &str) -> Result<AnalysisResult, AnalyzeError> {
    analyze_as(text, Language::Python)
}

pub fn analyze_cpp(text: &str) -> Result<AnalysisResult, AnalyzeError> {
    analyze_as(text, Language::Cpp)
}

pub fn analyze_javascript(text: &str) -> Result<AnalysisResult, AnalyzeError> {
    analyze_as(text, Language::JavaScript)
}

/// Strict C entry point.
///
/// Detection never reports C, so this always fails with
/// [`AnalyzeError::LanguageMismatch`]. Use [`analyze_with_language`] to
/// analyze C sources.
pub fn analyze_c(text: &str) -> Result<AnalysisResult, AnalyzeError> {
    analyze_as(text, Language::C)
}

/// Analyze `text` as `language` without running detection.
pub fn analyze_with_language(text: &str, language: Language) -> AnalysisResult {
    let structure = structure::extract_as(text, language);
    analyze_with_structure(text, &structure)
}

/// Suggestions for `text` given its extracted structure.
pub fn suggest(text: &str, structure: &CodeStructure) -> Vec<String> {
    detect::generate_suggestions(text, structure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::messages;

    #[test]
    fn test_analyze_python_snippet() {
        let result = analyze("def foo():\n    pass\n");
        assert_eq!(result.line_count, 2);
        assert_eq!(result.comment_count, 0);
        assert_eq!(result.nesting_length, 1);
        assert_eq!(result.cyclomatic_complexity, 1);
        assert_eq!(result.metadata["language"], "python");
        assert_eq!(result.metadata["function_count"], "1");
        assert_eq!(result.metadata["class_count"], "0");
        assert_eq!(result.metadata["import_count"], "0");
        assert_eq!(result.language(), Some(Language::Python));
    }

    #[test]
    fn test_analyze_empty_text() {
        let result = analyze("");
        assert_eq!(result.line_count, 0);
        assert_eq!(result.comment_count, 0);
        assert_eq!(result.comment_ratio, 0.0);
        assert_eq!(result.cyclomatic_complexity, 1);
        assert_eq!(result.nesting_length, 0);
        assert!(result.potential_issues.is_empty());
        assert!(result.suggestions.is_empty());
        assert!(result.token_frequency.is_empty());
        assert_eq!(result.metadata["language"], "unknown");
    }

    #[test]
    fn test_comment_ratio_is_exact() {
        let text = "#include <stdio.h>\n// one\n// two\nint main() {\n}\n";
        let result = analyze(text);
        assert_eq!(result.line_count, 5);
        assert_eq!(result.comment_count, 2);
        assert_eq!(result.comment_ratio, 2.0 / 5.0);
    }

    #[test]
    fn test_comment_ratio_may_exceed_one() {
        // `//`, the complete inline block, and the line inside that block
        let text = "#include <a.h> // x /* y */";
        let result = analyze(text);
        assert_eq!(result.line_count, 1);
        assert_eq!(result.comment_count, 3);
        assert_eq!(result.comment_ratio, 3.0);
    }

    #[test]
    fn test_analyze_as_mismatch() {
        let err = analyze_as("def foo():\n    pass\n", Language::Cpp).unwrap_err();
        assert_eq!(
            err,
            AnalyzeError::LanguageMismatch {
                expected: Language::Cpp,
                detected: Language::Python,
            }
        );
        assert!(analyze_python("def foo():\n    pass\n").is_ok());
        assert!(analyze_cpp("int main() {\n}\n").is_ok());
        assert!(analyze_javascript("const x = 1;").is_ok());
    }

    #[test]
    fn test_extract_checked_returns_detected_structure() {
        let text = "def foo():\n    pass\n";
        let structure = extract_checked(text, Language::Python).unwrap();
        assert_eq!(structure, structure::extract(text));
        assert_eq!(
            extract_checked(text, Language::JavaScript).unwrap_err(),
            AnalyzeError::LanguageMismatch {
                expected: Language::JavaScript,
                detected: Language::Python,
            }
        );
    }

    #[test]
    fn test_analyze_c_always_mismatches() {
        let err = analyze_c("int main() {\n}\n").unwrap_err();
        assert_eq!(
            err,
            AnalyzeError::LanguageMismatch {
                expected: Language::C,
                detected: Language::Cpp,
            }
        );
        assert!(analyze_c("char buf[8];").is_err());
    }

    #[test]
    fn test_analyze_with_language_hint() {
        let text = "class Foo {\n  eval(x);\n}";
        assert!(analyze(text).potential_issues.is_empty());

        let result = analyze_with_language(text, Language::JavaScript);
        assert_eq!(result.potential_issues, vec![messages::EVAL]);
        assert_eq!(result.metadata["class_count"], "1");

        let text = "char *p = malloc(4);\n";
        let result = analyze_with_language(text, Language::C);
        assert_eq!(result.metadata["language"], "c");
        assert_eq!(result.suggestions, vec![messages::FREE_MALLOC]);
    }

    #[test]
    fn test_suggest_matches_analysis() {
        let text = "var a = 1;\nconst b = a == 1;\n";
        let structure = structure::extract(text);
        assert_eq!(suggest(text, &structure), analyze(text).suggestions);
        assert_eq!(suggest(text, &structure), vec![messages::LET_CONST]);
    }
}
