//! Ordered predicate → message rules.
//!
//! Issue and suggestion heuristics are expressed as tables of rules grouped
//! by how they are evaluated. A [`Evaluation::FirstMatch`] group stops at
//! the first rule that fires, which keeps mutually exclusive advice (for
//! example "bare except" vs "global variables") down to one message.

use tracing::trace;

/// A single text predicate with the message it produces.
pub struct Rule {
    /// Stable identifier, used for tracing
    pub id: &'static str,
    pub message: &'static str,
    pub predicate: fn(&str) -> bool,
}

impl Rule {
    pub fn matches(&self, text: &str) -> bool {
        (self.predicate)(text)
    }
}

/// How the rules of a group are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Every matching rule fires.
    Every,
    /// Only the first matching rule fires.
    FirstMatch,
}

/// An ordered group of rules sharing an evaluation mode.
pub struct RuleGroup {
    pub evaluation: Evaluation,
    pub rules: &'static [Rule],
}

/// Evaluate groups in order and collect the produced messages.
pub fn evaluate(groups: &[RuleGroup], text: &str) -> Vec<String> {
    let mut messages = Vec::new();

    for group in groups {
        for rule in group.rules {
            if !rule.matches(text) {
                continue;
            }
            trace!(rule = rule.id, "rule matched");
            messages.push(rule.message.to_string());
            if group.evaluation == Evaluation::FirstMatch {
                break;
            }
        }
    }

    messages
}
