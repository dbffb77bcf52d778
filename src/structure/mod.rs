//! Structural extraction: imports, functions, classes and a coarse
//! complexity number.
//!
//! Extraction is regex driven and line agnostic. It builds no syntax tree,
//! so results are best effort: declarations without bodies, templates and
//! multi-line signatures are easily missed or misread.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ Raw text │────▶│ detect()     │────▶│ extract_as()     │
//! └──────────┘     │ (Language)   │     │ imports          │
//!                  └──────────────┘     │ functions        │
//!                                       │ classes          │
//!                                       │ complexity       │
//!                                       └──────────────────┘
//!                                                │
//!                                                ▼
//!                                        ┌───────────────┐
//!                                        │ CodeStructure │
//!                                        └───────────────┘
//! ```

mod classes;
mod complexity;
mod functions;
mod imports;

pub use classes::extract_classes;
pub use complexity::calculate_complexity;
pub use functions::extract_functions;
pub use imports::extract_imports;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::language::{self, Language};

/// Structural facts extracted from one snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeStructure {
    pub language: Language,
    /// Structural complexity score (see [`calculate_complexity`])
    pub complexity: usize,
    /// Full matched import/include statements, in source order
    pub imports: Vec<String>,
    pub functions: Vec<String>,
    pub classes: Vec<String>,
    /// Free-form annotations
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl CodeStructure {
    /// The structure reported for text whose language is not recognized.
    pub fn unknown(text: &str) -> Self {
        Self {
            language: Language::Unknown,
            complexity: text.len() / 100,
            imports: Vec::new(),
            functions: Vec::new(),
            classes: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }
}

/// Detect the language of `text` and extract its structure.
pub fn extract(text: &str) -> CodeStructure {
    extract_as(text, language::detect(text))
}

/// Extract structure using a caller-supplied language, skipping detection.
///
/// This is the only way to reach the C extraction rules, since detection
/// never reports C.
pub fn extract_as(text: &str, language: Language) -> CodeStructure {
    if language == Language::Unknown {
        return CodeStructure::unknown(text);
    }

    CodeStructure {
        language,
        complexity: calculate_complexity(text, language),
        imports: extract_imports(text, language),
        functions: extract_functions(text, language),
        classes: extract_classes(text, language),
        metadata: BTreeMap::new(),
    }
}
