#![deny(warnings)]

use crate::expansion::Expansion;
use crate::grammar::Grammar;
use crate::parser::EarleyParser;
use crate::properties::GrammarProperties;
use crate::trees::ParseTree;
use std::fmt;

/// Size budget for enumerating derivations.
pub const LIMIT: usize = 10000;

/// Trees ready to be shown under a caption, with the grammar's issues.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    pub caption: String,
    pub issues: Vec<String>,
    pub trees: Vec<ParseTree>,
}

impl Gallery {
    fn new(caption: String, grammar: &Grammar, mut trees: Vec<ParseTree>) -> Gallery {
        trees.sort_by(ParseTree::display_cmp);
        let issues = GrammarProperties::new(grammar).issues();
        Gallery { caption, issues, trees }
    }
}

impl fmt::Display for Gallery {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.issues.is_empty() {
            writeln!(f, "This grammar has the following problems:")?;
            for issue in &self.issues {
                writeln!(f, "  * {}", issue)?;
            }
        }
        writeln!(f, "{}", self.caption)?;
        for tree in &self.trees {
            write!(f, "{}", tree.print())?;
        }
        Ok(())
    }
}

/// Derivation trees of the start symbol, as deep as the budget allows.
/// The grammar must not be empty.
pub fn all_derivations(grammar: &Grammar) -> Gallery {
    let max_depth = grammar.nonterminals().len() + 9;
    let mut expansion = Expansion::new(grammar, LIMIT);
    expansion.expand_to_depth(max_depth);
    let trees = expansion.derivations(grammar.start()).to_vec();
    let caption = if expansion.complete() {
        "All derivation trees".to_string()
    } else {
        format!("Derivation trees of depth at most {}", expansion.depth())
    };
    Gallery::new(caption, grammar, trees)
}

/// Parse trees for a sentence of one-character terminals.
/// The grammar must not be empty.
pub fn derive_sentence(grammar: &Grammar, sentence: &str) -> Gallery {
    let result = EarleyParser::new(grammar.clone()).parse_sentence(sentence);
    let prefix = if !result.complete {
        "Some of the derivations"
    } else {
        match result.trees.len() {
            0 => "There are no derivations",
            1 => "Derivation tree",
            _ => "Derivation trees",
        }
    };
    Gallery::new(format!("{} for '{}'", prefix, sentence), grammar, result.trees)
}

///////////////////////////////////////////////////////////////////////////////
