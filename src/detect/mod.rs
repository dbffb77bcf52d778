//! Issue and suggestion heuristics.
//!
//! Both are ordered lists of messages. Issues are derived from the text and
//! its metrics; suggestions from the text and its extracted structure.

mod issues;
pub mod messages;
mod rules;
mod suggestions;

pub use issues::{find_potential_issues, MAX_CYCLOMATIC, MAX_NESTING, MAX_TEXT_LENGTH};
pub use rules::{evaluate, Evaluation, Rule, RuleGroup};
pub use suggestions::generate_suggestions;
