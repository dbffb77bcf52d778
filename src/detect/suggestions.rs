//! Improvement suggestions.
//!
//! Count thresholds over the extracted structure come first, each checked
//! independently. Then at most one language-specific hint is added.

use tracing::trace;

use super::messages;
use super::rules::{self, Evaluation, Rule, RuleGroup};
use crate::language::Language;
use crate::structure::CodeStructure;

pub const MAX_COMPLEXITY: usize = 10;
pub const MAX_FUNCTIONS: usize = 10;
pub const MAX_CLASSES: usize = 5;
pub const MAX_IMPORTS: usize = 5;

static PYTHON_HINTS: &[Rule] = &[
    Rule {
        id: "bare_except",
        message: messages::EXCEPTION_TYPE,
        predicate: |t| t.contains("except:"),
    },
    Rule {
        id: "global_variable",
        message: messages::GLOBALS,
        predicate: |t| t.contains("global "),
    },
];

static CPP_HINTS: &[Rule] = &[
    Rule {
        id: "new_without_delete",
        message: messages::SMART_POINTERS,
        predicate: |t| t.contains("new") && !t.contains("delete"),
    },
    Rule {
        id: "using_namespace_std",
        message: messages::NAMESPACE_STD,
        predicate: |t| t.contains("using namespace std;"),
    },
];

static JAVASCRIPT_HINTS: &[Rule] = &[
    Rule {
        id: "var_declaration",
        message: messages::LET_CONST,
        predicate: |t| t.contains("var "),
    },
    Rule {
        id: "loose_equality",
        message: messages::STRICT_EQUALITY,
        predicate: |t| t.contains("=="),
    },
];

static C_HINTS: &[Rule] = &[
    Rule {
        id: "malloc_without_free",
        message: messages::FREE_MALLOC,
        predicate: |t| t.contains("malloc") && !t.contains("free"),
    },
    Rule {
        id: "strcpy",
        message: messages::STRNCPY,
        predicate: |t| t.contains("strcpy"),
    },
];

fn language_hints(language: Language) -> Option<&'static [Rule]> {
    match language {
        Language::Python => Some(PYTHON_HINTS),
        Language::Cpp => Some(CPP_HINTS),
        Language::JavaScript => Some(JAVASCRIPT_HINTS),
        Language::C => Some(C_HINTS),
        Language::Unknown => None,
    }
}

/// Generate suggestions for `text` given its extracted structure.
pub fn generate_suggestions(text: &str, structure: &CodeStructure) -> Vec<String> {
    let mut suggestions = Vec::new();

    let counts = [
        (structure.complexity, MAX_COMPLEXITY, messages::REDUCE_COMPLEXITY),
        (structure.functions.len(), MAX_FUNCTIONS, messages::SPLIT_FUNCTIONS),
        (structure.classes.len(), MAX_CLASSES, messages::SPLIT_CLASSES),
        (structure.imports.len(), MAX_IMPORTS, messages::UNUSED_IMPORTS),
    ];
    for (value, limit, message) in counts {
        if value > limit {
            trace!(value, limit, suggestion = message, "count threshold exceeded");
            suggestions.push(message.to_string());
        }
    }

    if let Some(hints) = language_hints(structure.language) {
        let groups = [RuleGroup {
            evaluation: Evaluation::FirstMatch,
            rules: hints,
        }];
        suggestions.extend(rules::evaluate(&groups, text));
    }

    suggestions
}
