//! Language tags and marker-based language detection.

use serde::{Deserialize, Serialize};

/// Languages the analyzer knows how to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Cpp,
    C,
    JavaScript,
    Unknown,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::JavaScript => "javascript",
            Language::Unknown => "unknown",
        }
    }

    /// Human-readable name used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Cpp => "C++",
            Language::C => "C",
            Language::JavaScript => "JavaScript",
            Language::Unknown => "Unknown",
        }
    }

    /// True for the brace-delimited languages that share comment syntax.
    pub fn is_c_family(&self) -> bool {
        matches!(self, Language::Cpp | Language::C | Language::JavaScript)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "cpp" | "c++" | "cxx" => Ok(Language::Cpp),
            "c" => Ok(Language::C),
            "javascript" | "js" => Ok(Language::JavaScript),
            "unknown" => Ok(Language::Unknown),
            _ => Err(format!("unknown language: {}", s)),
        }
    }
}

/// Guess the language of a source snippet.
///
/// Checks run in a fixed order and the first match wins, so text carrying
/// both Python and C++ markers is classified as Python. The detector never
/// returns [`Language::C`]; C handling is only reachable through an explicit
/// language hint.
pub fn detect(text: &str) -> Language {
    if text.contains("def ")
        || text.contains("import ")
        || (text.contains("class ") && text.contains(':'))
    {
        return Language::Python;
    }

    if text.contains("#include") || text.contains("int main") || text.contains("std::") {
        return Language::Cpp;
    }

    if text.contains("function ")
        || text.contains("const ")
        || text.contains("let ")
        || text.contains("=>")
    {
        return Language::JavaScript;
    }

    Language::Unknown
}
