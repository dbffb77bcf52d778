//! Identifier token frequency.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static! {
    /// Maximal runs of ASCII word characters.
    static ref WORD_RUN: Regex = Regex::new(r"[[:word:]]+").unwrap();
}

/// Count identifier tokens (`[A-Za-z_][A-Za-z0-9_]*` between ASCII word
/// boundaries).
///
/// A run that starts with a digit, such as `9abc`, is not an identifier and
/// yields nothing.
pub fn calculate_token_frequency(text: &str) -> BTreeMap<String, usize> {
    let mut frequency = BTreeMap::new();

    for run in WORD_RUN.find_iter(text) {
        let token = run.as_str();
        if token.starts_with(|c: char| c.is_ascii_digit()) {
            continue;
        }
        *frequency.entry(token.to_string()).or_insert(0) += 1;
    }

    frequency
}
