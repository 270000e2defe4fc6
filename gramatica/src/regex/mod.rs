#![deny(warnings)]

mod language;
mod parser;
mod scanner;

pub use self::language::{append, union, Language};
pub use self::parser::{RegExpr, EPSILON};

use thiserror::Error;


/// Why a text is not a regular expression.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected '{0}'")]
    Unexpected(char),
    #[error("letter or '(' expected")]
    FactorExpected,
    /// `found` is empty at the end of the input.
    #[error("'{found}' found when expecting '{expected}'")]
    Mismatch { found: String, expected: char },
}

/// Approximate number of characters shown by `language_string`.
pub const PREVIEW_BUDGET: i64 = 150;

/// The language of `e` written as a set, cut short with "..." after about
/// `PREVIEW_BUDGET` characters.
pub fn language_string(e: &RegExpr) -> String {
    language_string_limited(e, PREVIEW_BUDGET)
}

pub fn language_string_limited(e: &RegExpr, budget: i64) -> String {
    let mut budget = budget;
    let mut shown = Vec::new();
    let mut language = e.language();
    for s in language.strings() {
        budget -= s.chars().count() as i64 + 2;
        if budget < 0 {
            shown.push("...".to_string());
            break;
        }
        shown.push(s);
    }
    if shown.first().is_some_and(String::is_empty) {
        shown[0] = EPSILON.to_string();
    }
    format!("{{ {} }}", shown.join(", "))
}

/// Preview of the language denoted by `text`, or why it couldn't be read.
pub fn regex_language(text: &str) -> String {
    match RegExpr::parse(text) {
        Ok(e) => language_string(&e),
        Err(err) => format!("Malformed expression: {}", err),
    }
}
