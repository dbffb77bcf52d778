//! Structural complexity score.
//!
//! This number is distinct from the cyclomatic approximation in
//! [`crate::metrics`]: it mixes text length, weighted control keywords and
//! the deepest indentation seen.
//!
//! score = len / 100 + Σ weight × matches + max_indent / 2

use lazy_static::lazy_static;
use regex::Regex;

use crate::language::Language;

lazy_static! {
    /// Control keywords and their weights. Counted once per match,
    /// whatever the language.
    static ref WEIGHTED_KEYWORDS: Vec<(Regex, usize)> = vec![
        (Regex::new(r"if\s*\(|if\s+").unwrap(), 1),
        (Regex::new(r"for\s*\(|for\s+").unwrap(), 2),
        (Regex::new(r"while\s*\(|while\s+").unwrap(), 2),
        (Regex::new(r"switch\s*\(").unwrap(), 3),
        (Regex::new(r"try\s*\{|try:").unwrap(), 1),
    ];
}

/// Calculate the structural complexity of a snippet.
pub fn calculate_complexity(text: &str, _language: Language) -> usize {
    let length_score = text.len() / 100;

    let keyword_score: usize = WEIGHTED_KEYWORDS
        .iter()
        .map(|(pattern, weight)| pattern.find_iter(text).count() * weight)
        .sum();

    length_score + keyword_score + max_leading_whitespace(text) / 2
}

/// Longest run of leading spaces/tabs over all lines that contain something
/// other than whitespace. Each character counts as one column.
fn max_leading_whitespace(text: &str) -> usize {
    text.lines()
        .filter_map(|line| line.find(|c: char| c != ' ' && c != '\t'))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(calculate_complexity("", Language::Unknown), 0);
    }

    #[test]
    fn test_keywords_and_indentation() {
        let text = "def foo():\n    if x:\n        for i in y:\n            pass\n";
        // if: 1, for: 2, indentation 12 / 2 = 6
        assert_eq!(calculate_complexity(text, Language::Python), 9);
    }

    #[test]
    fn test_keyword_weights() {
        assert_eq!(calculate_complexity("switch (x) {}", Language::Cpp), 3);
        assert_eq!(calculate_complexity("while (x) {}", Language::Cpp), 2);
        assert_eq!(calculate_complexity("try {}", Language::JavaScript), 1);
        assert_eq!(calculate_complexity("try:", Language::Python), 1);
    }

    #[test]
    fn test_length_component() {
        let text = "a".repeat(350);
        assert_eq!(calculate_complexity(&text, Language::Python), 3);
    }

    #[test]
    fn test_tabs_count_as_one_column() {
        assert_eq!(max_leading_whitespace("\t\tx\n    y\n"), 4);
        assert_eq!(max_leading_whitespace("\t\t\t\t\tx\n"), 5);
    }

    #[test]
    fn test_whitespace_only_lines_are_ignored() {
        assert_eq!(max_leading_whitespace("x\n            \n  y\n"), 2);
    }
}
