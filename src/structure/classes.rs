//! Class name extraction.

use lazy_static::lazy_static;
use regex::Regex;

use crate::language::Language;

lazy_static! {
    static ref CLASS_DEF: Regex = Regex::new(r"class\s+([[:word:]]+)").unwrap();
}

/// Extract class names in source order.
///
/// The same `class <Name>` rule applies to every language, so the language
/// argument does not change the result.
pub fn extract_classes(text: &str, _language: Language) -> Vec<String> {
    CLASS_DEF
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_are_language_independent() {
        let python = "class Foo:\n    pass\nclass Bar(Foo):\n    pass\n";
        let cpp = "class Foo {\n};\nclass Bar : public Foo {\n};\n";
        let js = "class Foo {}\nclass Bar extends Foo {}\n";

        for (text, lang) in [
            (python, Language::Python),
            (cpp, Language::Cpp),
            (js, Language::JavaScript),
        ] {
            assert_eq!(extract_classes(text, lang), vec!["Foo", "Bar"]);
        }
    }

    #[test]
    fn test_substring_match_is_accepted() {
        // Best effort: "subclass Foo" still yields Foo
        assert_eq!(extract_classes("subclass Foo", Language::Python), vec!["Foo"]);
    }
}
