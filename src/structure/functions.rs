//! Function name extraction.

use lazy_static::lazy_static;
use regex::Regex;

use crate::language::Language;

lazy_static! {
    static ref PYTHON_DEF: Regex = Regex::new(r"def\s+([[:word:]]+)\s*\(").unwrap();

    /// `<type> <name>(<params>) {` - two tokens before a parenthesised list
    /// followed by an opening brace.
    static ref C_FAMILY_DEF: Regex =
        Regex::new(r"([[:word:]]+)\s+([[:word:]]+)\s*\([^)]*\)\s*\{").unwrap();

    static ref JS_DEF: Regex = Regex::new(
        r"function\s+([[:word:]]+)\s*\(|const\s+([[:word:]]+)\s*=\s*function|let\s+([[:word:]]+)\s*=\s*function"
    )
    .unwrap();
}

/// Leading tokens that mark a control statement rather than a return type.
const CONTROL_KEYWORDS: &[&str] = &["if", "for", "while", "switch"];

/// Extract function names in source order.
pub fn extract_functions(text: &str, language: Language) -> Vec<String> {
    match language {
        Language::Python => PYTHON_DEF
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect(),
        Language::Cpp | Language::C => C_FAMILY_DEF
            .captures_iter(text)
            .filter(|caps| {
                caps.get(1)
                    .map(|lead| !CONTROL_KEYWORDS.contains(&lead.as_str()))
                    .unwrap_or(false)
            })
            .filter_map(|caps| caps.get(2))
            .map(|m| m.as_str().to_string())
            .collect(),
        Language::JavaScript => JS_DEF
            .captures_iter(text)
            .filter_map(|caps| {
                caps.iter()
                    .skip(1)
                    .flatten()
                    .find(|m| !m.as_str().is_empty())
                    .map(|m| m.as_str().to_string())
            })
            .collect(),
        Language::Unknown => Vec::new(),
    }
}
