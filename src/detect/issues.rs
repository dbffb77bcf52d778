//! Potential issue detection.
//!
//! Three threshold checks (length, nesting, cyclomatic complexity) followed
//! by literal-substring checks chosen by language.

use tracing::trace;

use super::messages;
use super::rules::{self, Evaluation, Rule, RuleGroup};
use crate::language::Language;
use crate::metrics::{calculate_cyclomatic_complexity, calculate_nesting_length};

/// Texts longer than this (in bytes) are flagged.
pub const MAX_TEXT_LENGTH: usize = 1000;
/// Nesting depth above this is flagged.
pub const MAX_NESTING: usize = 5;
/// Cyclomatic complexity above this is flagged.
pub const MAX_CYCLOMATIC: usize = 10;

const EVAL_RULE: Rule = Rule {
    id: "eval",
    message: messages::EVAL,
    predicate: |t| t.contains("eval("),
};

static PYTHON_EVAL: &[Rule] = &[EVAL_RULE];

static PYTHON_EXCEPTIONS: &[Rule] = &[
    Rule {
        id: "except_without_type",
        message: messages::EXCEPTION_TYPE,
        predicate: |t| t.contains("except"),
    },
    Rule {
        id: "global_variable",
        message: messages::GLOBALS,
        predicate: |t| t.contains("global "),
    },
];

static CPP_RULES: &[Rule] = &[Rule {
    id: "using_namespace_std",
    message: messages::NAMESPACE_STD,
    predicate: |t| t.contains("using namespace std;"),
}];

static JAVASCRIPT_RULES: &[Rule] = &[EVAL_RULE];

fn language_rules(language: Language) -> Vec<RuleGroup> {
    match language {
        Language::Python => vec![
            RuleGroup {
                evaluation: Evaluation::Every,
                rules: PYTHON_EVAL,
            },
            RuleGroup {
                evaluation: Evaluation::FirstMatch,
                rules: PYTHON_EXCEPTIONS,
            },
        ],
        Language::Cpp => vec![RuleGroup {
            evaluation: Evaluation::Every,
            rules: CPP_RULES,
        }],
        Language::JavaScript => vec![RuleGroup {
            evaluation: Evaluation::Every,
            rules: JAVASCRIPT_RULES,
        }],
        Language::C | Language::Unknown => Vec::new(),
    }
}

/// Find potential issues in `text`, in a fixed order.
pub fn find_potential_issues(text: &str, language: Language) -> Vec<String> {
    let mut issues = Vec::new();

    if text.len() > MAX_TEXT_LENGTH {
        trace!(length = text.len(), "text exceeds length limit");
        issues.push(messages::TOO_LONG.to_string());
    }

    let nesting = calculate_nesting_length(text, language);
    if nesting > MAX_NESTING {
        trace!(nesting, "nesting exceeds limit");
        issues.push(messages::HIGH_NESTING.to_string());
    }

    let cyclomatic = calculate_cyclomatic_complexity(text, language);
    if cyclomatic > MAX_CYCLOMATIC {
        trace!(cyclomatic, "cyclomatic complexity exceeds limit");
        issues.push(messages::HIGH_COMPLEXITY.to_string());
    }

    issues.extend(rules::evaluate(&language_rules(language), text));
    issues
}
