//! Independent metric passes over raw source text.
//!
//! Each pass is a pure function of the text and (where it matters) the
//! language tag. None of them share state, so they can run in any order.

mod comments;
mod cyclomatic;
mod lines;
mod nesting;
mod tokens;

pub use comments::count_comments;
pub use cyclomatic::calculate_cyclomatic_complexity;
pub use lines::count_lines;
pub use nesting::calculate_nesting_length;
pub use tokens::calculate_token_frequency;
