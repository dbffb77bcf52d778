//! Maximum nesting depth.
//!
//! Python depth comes from indentation deltas; everything else is measured by
//! counting braces outside string, character and block-comment contexts.
//! String and character literals end with their line; block comments may
//! span lines.

use crate::language::Language;

/// Columns per indentation level (and per tab).
const INDENT_WIDTH: i64 = 4;

/// Calculate the maximum nesting depth reached in `text`.
pub fn calculate_nesting_length(text: &str, language: Language) -> usize {
    let max_depth = match language {
        Language::Python => indentation_depth(text),
        _ => brace_depth(text),
    };
    max_depth.max(0) as usize
}

/// Track depth as `±delta / 4` against the previous non-blank line.
///
/// Irregular indentation can drive the running depth negative; only the
/// maximum is reported.
fn indentation_depth(text: &str) -> i64 {
    let mut max_depth = 0;
    let mut depth: i64 = 0;
    let mut prev_indent: i64 = 0;

    for line in text.lines() {
        if line.chars().all(|c| c == ' ' || c == '\t') {
            continue;
        }

        let indent = leading_columns(line);
        if indent > prev_indent {
            depth += (indent - prev_indent) / INDENT_WIDTH;
        } else if indent < prev_indent {
            depth -= (prev_indent - indent) / INDENT_WIDTH;
        }

        prev_indent = indent;
        max_depth = max_depth.max(depth);
    }

    max_depth
}

fn leading_columns(line: &str) -> i64 {
    let mut columns = 0;
    for c in line.chars() {
        match c {
            ' ' => columns += 1,
            '\t' => columns += INDENT_WIDTH,
            _ => break,
        }
    }
    columns
}

/// Brace scanner state. Only `in_block_comment` survives a line break.
#[derive(Debug, Default)]
struct BraceScanner {
    in_string: bool,
    in_char: bool,
    in_block_comment: bool,
    depth: i64,
    max_depth: i64,
}

impl BraceScanner {
    fn scan_line(&mut self, line: &str) {
        let bytes = line.as_bytes();
        let mut i = 0;

        while i < bytes.len() {
            let c = bytes[i];
            let next = bytes.get(i + 1).copied();

            if self.in_block_comment {
                if c == b'*' && next == Some(b'/') {
                    self.in_block_comment = false;
                    i += 2;
                } else {
                    i += 1;
                }
                continue;
            }

            if self.in_string || self.in_char {
                match c {
                    b'\\' => i += 1,
                    b'"' if self.in_string => self.in_string = false,
                    b'\'' if self.in_char => self.in_char = false,
                    _ => {}
                }
                i += 1;
                continue;
            }

            match c {
                b'"' => self.in_string = true,
                b'\'' => self.in_char = true,
                b'/' if next == Some(b'/') => return,
                b'/' if next == Some(b'*') => {
                    self.in_block_comment = true;
                    i += 2;
                    continue;
                }
                b'{' => {
                    self.depth += 1;
                    self.max_depth = self.max_depth.max(self.depth);
                }
                b'}' => self.depth -= 1,
                _ => {}
            }
            i += 1;
        }

        self.in_string = false;
        self.in_char = false;
    }
}

fn brace_depth(text: &str) -> i64 {
    let mut scanner = BraceScanner::default();
    for line in text.lines() {
        scanner.scan_line(line);
    }
    scanner.max_depth
}
