//! Errors raised by the analysis core.

use thiserror::Error;

use crate::language::Language;

/// Errors that can occur while analyzing a snippet.
///
/// Both variants are fatal to the single call that raised them and leave
/// nothing behind to clean up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("unsupported language for comment counting: {0}")]
    UnsupportedLanguage(Language),
    #[error("language mismatch: expected {}, detected {}", .expected.display_name(), .detected.display_name())]
    LanguageMismatch {
        expected: Language,
        detected: Language,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AnalyzeError::UnsupportedLanguage(Language::Unknown);
        assert_eq!(
            err.to_string(),
            "unsupported language for comment counting: unknown"
        );

        let err = AnalyzeError::LanguageMismatch {
            expected: Language::Cpp,
            detected: Language::Python,
        };
        assert_eq!(
            err.to_string(),
            "language mismatch: expected C++, detected Python"
        );
    }
}
