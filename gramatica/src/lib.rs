#![deny(warnings)]

// Verbose tracing, compiled in with the "debug" feature.
macro_rules! debug {
    ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
}

mod grammar;
pub use crate::grammar::{split_row, Grammar, GrammarBuilder, Rule};

mod properties;
pub use crate::properties::GrammarProperties;

mod trees;
pub use crate::trees::{NonTerminalTree, ParseTree};

pub mod layout;
pub use crate::layout::{draw_tree, Drawing, Picture};

mod items;
mod parser;
pub use crate::parser::{EarleyParser, ParseResult, EXPANSION_LIMIT};

mod expansion;
pub use crate::expansion::Expansion;

pub mod regex;
pub use crate::regex::{regex_language, Language, RegExpr};

pub mod explorer;
pub use crate::explorer::{all_derivations, derive_sentence, Gallery};

#[cfg(test)]
mod properties_test;
