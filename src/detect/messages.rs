//! Issue and suggestion texts.

// Issues
pub const TOO_LONG: &str = "Code is too long, consider breaking it into smaller functions.";
pub const HIGH_NESTING: &str = "Code has high nesting length, consider refactoring.";
pub const HIGH_COMPLEXITY: &str = "Code has high cyclomatic complexity, consider refactoring.";
pub const EVAL: &str = "Avoid using eval() for security reasons.";
pub const EXCEPTION_TYPE: &str = "Consider specifying the exception type in the except clause.";
pub const GLOBALS: &str = "Avoid using global variables unless necessary.";
pub const NAMESPACE_STD: &str = "Avoid using 'using namespace std;' in header files.";

// Suggestions
pub const REDUCE_COMPLEXITY: &str = "Consider refactoring the code to reduce complexity.";
pub const SPLIT_FUNCTIONS: &str = "Consider breaking down large functions into smaller ones.";
pub const SPLIT_CLASSES: &str = "Consider breaking down large classes into smaller ones.";
pub const UNUSED_IMPORTS: &str = "Consider removing unused imports.";
pub const SMART_POINTERS: &str = "Consider using smart pointers to manage memory.";
pub const LET_CONST: &str = "Consider using 'let' or 'const' instead of 'var'.";
pub const STRICT_EQUALITY: &str = "Consider using '===' for strict equality comparison.";
pub const FREE_MALLOC: &str = "Consider using 'free' to deallocate memory allocated with 'malloc'.";
pub const STRNCPY: &str = "Consider using 'strncpy' to avoid buffer overflow.";
