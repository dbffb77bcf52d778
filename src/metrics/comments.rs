//! Comment counting.
//!
//! This is a line scan, not a lexer: markers inside string literals count,
//! and a line holding a complete `/* ... */` block is counted twice (once as
//! a single-line block, once as a line inside a block). Comment ratios built
//! on this count can therefore exceed 1.

use crate::error::AnalyzeError;
use crate::language::Language;

/// Count comments in `text` for the given language.
///
/// Returns [`AnalyzeError::UnsupportedLanguage`] for [`Language::Unknown`].
pub fn count_comments(text: &str, language: Language) -> Result<usize, AnalyzeError> {
    match language {
        Language::Python => Ok(count_python_comments(text)),
        lang if lang.is_c_family() => Ok(count_c_family_comments(text)),
        _ => Err(AnalyzeError::UnsupportedLanguage(language)),
    }
}

fn count_python_comments(text: &str) -> usize {
    let mut count = text.lines().filter(|line| line.contains('#')).count();

    // Docstring delimiters are only looked for on the final line. A
    // trailing newline leaves that line empty.
    let last = if text.ends_with('\n') {
        ""
    } else {
        text.lines().last().unwrap_or("")
    };
    let mut in_docstring = false;
    if last.contains("'''") || last.contains("\"\"\"") {
        in_docstring = !in_docstring;
        count += 1;
    }
    if in_docstring {
        count += 1;
    }

    count
}

fn count_c_family_comments(text: &str) -> usize {
    let mut count = 0;
    let mut in_block = false;

    for line in text.lines() {
        if line.contains("//") {
            count += 1;
        }
        let opens = line.contains("/*");
        let closes = line.contains("*/");
        if opens && closes {
            count += 1;
        }
        if opens {
            in_block = true;
        }
        if in_block {
            count += 1;
        }
        if closes {
            in_block = false;
        }
    }

    count
}
