//! Import and include statement extraction.

use lazy_static::lazy_static;
use regex::Regex;

use crate::language::Language;

lazy_static! {
    /// `import pkg.mod ...` or `from pkg import ...`, to the end of the line
    static ref PYTHON_IMPORT: Regex =
        Regex::new(r"(import|from)\s+([[:word:].]+).*").unwrap();

    /// `#include <path>` or `#include "path"`
    static ref C_INCLUDE: Regex =
        Regex::new(r#"#include\s*[<"]([[:word:]./]+)[>"]"#).unwrap();

    /// `import 'mod'`, `import {'mod'`, `require('mod')`
    static ref JS_IMPORT: Regex =
        Regex::new(r#"(import|require)\s*[({]?\s*['"]([[:word:]./]+)['"]"#).unwrap();
}

/// Extract import statements as the full matched text.
///
/// Duplicates are kept and source order is preserved. Returns an empty list
/// for [`Language::Unknown`].
pub fn extract_imports(text: &str, language: Language) -> Vec<String> {
    let pattern: &Regex = match language {
        Language::Python => &PYTHON_IMPORT,
        Language::Cpp | Language::C => &C_INCLUDE,
        Language::JavaScript => &JS_IMPORT,
        Language::Unknown => return Vec::new(),
    };

    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
