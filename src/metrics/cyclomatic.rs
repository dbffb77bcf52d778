//! Approximate cyclomatic complexity.
//!
//! Not the graph-theoretic metric: it starts at 1 and adds one per regex
//! match of a branch or boolean-operator pattern. `.*` stops at line ends and
//! is greedy, so two `if (...)` on one line count once.
//!
//! Language rules stack on top of the universal ones:
//! - Python counts `except (...)` a second time
//! - C and C++ add `goto label`
//! - JavaScript and C++ count `catch (...)` a second time

use lazy_static::lazy_static;
use regex::Regex;

use crate::language::Language;

lazy_static! {
    /// Patterns counted for every language.
    static ref BRANCH_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"if\s*\(.*\)").unwrap(),
        Regex::new(r"for\s*\(.*\)").unwrap(),
        Regex::new(r"while\s*\(.*\)").unwrap(),
        Regex::new(r"case\s+.*:").unwrap(),
        Regex::new(r"switch\s*\(.*\)").unwrap(),
        Regex::new(r"&&").unwrap(),
        Regex::new(r"\|\|").unwrap(),
        Regex::new(r"\?").unwrap(),
        EXCEPT.clone(),
        CATCH.clone(),
    ];

    static ref EXCEPT: Regex = Regex::new(r"except\s*\(.*\)").unwrap();
    static ref CATCH: Regex = Regex::new(r"catch\s*\(.*\)").unwrap();
    static ref GOTO: Regex = Regex::new(r"goto\s+[[:word:]]+").unwrap();
}

/// Calculate the approximate cyclomatic complexity of `text`. Always >= 1.
pub fn calculate_cyclomatic_complexity(text: &str, language: Language) -> usize {
    let mut complexity = 1;

    complexity += BRANCH_PATTERNS
        .iter()
        .map(|pattern| pattern.find_iter(text).count())
        .sum::<usize>();

    if language == Language::Python {
        complexity += EXCEPT.find_iter(text).count();
    }
    if matches!(language, Language::C | Language::Cpp) {
        complexity += GOTO.find_iter(text).count();
    }
    if matches!(language, Language::JavaScript | Language::Cpp) {
        complexity += CATCH.find_iter(text).count();
    }

    complexity
}
