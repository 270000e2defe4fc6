#![deny(warnings)]

use crate::grammar::Grammar;
use crate::items::{Head, Item};
use crate::trees::ParseTree;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

/// Maximum number of items per state set before a position gives up.
pub const EXPANSION_LIMIT: usize = 100;

pub struct EarleyParser {
    pub grammar: Grammar,
    pub expansion_limit: usize,
}

/// Parse trees for the whole input. `complete` is false when some state
/// set hit the expansion limit: `trees` is then only a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub complete: bool,
    pub trees: Vec<ParseTree>,
}

///////////////////////////////////////////////////////////////////////////////

impl EarleyParser {
    pub fn new(grammar: Grammar) -> EarleyParser {
        Self::with_limit(grammar, EXPANSION_LIMIT)
    }

    pub fn with_limit(grammar: Grammar, expansion_limit: usize) -> EarleyParser {
        EarleyParser { grammar, expansion_limit }
    }

    // Rhs arrays are shared by every item predicted from them.
    fn shared_rhss(&self) -> HashMap<&str, Vec<Rc<[String]>>> {
        self.grammar.nonterminals().iter()
            .map(|nt| (nt.as_str(), self.grammar.expansions(nt).iter()
                .map(|rhs| Rc::from(rhs.as_slice()))
                .collect()))
            .collect()
    }

    /// Build the chart from the end of the input towards its start. Each
    /// position's state set holds the items whose matched suffix ends
    /// there, completed trees are threaded through the items themselves.
    pub fn parse<S: AsRef<str>>(&self, input: &[S]) -> ParseResult {
        let rhss = self.shared_rhss();
        let mut statesets: Vec<Vec<Item>> = vec![Vec::new(); input.len() + 1];
        let mut truncated = false;

        for pos in (0..=input.len()).rev() {
            let mut queue = VecDeque::new();
            if pos == input.len() {
                // augmented production: Start -> S
                let start: Rc<[String]> = Rc::from(vec![self.grammar.start().to_string()]);
                queue.push_back(Item::predict_new(Head::Start, start, pos));
            } else {
                let lexeme = input[pos].as_ref();
                if self.grammar.is_terminal(lexeme) {
                    let scanned = ParseTree::terminal(lexeme);
                    queue.extend(statesets[pos + 1].iter()
                        .filter(|item| item.matches(lexeme))
                        .map(|item| item.advance(scanned.clone())));
                }
            }

            let mut stateset: Vec<Item> = Vec::new();
            // completions spanning no input, by nonterminal
            let mut empties: Vec<(String, ParseTree)> = Vec::new();
            while let Some(item) = queue.pop_front() {
                if stateset.len() > self.expansion_limit {
                    debug!("Position {}: expansion limit reached, {} items left", pos, queue.len() + 1);
                    truncated = true;
                    break;
                }
                if stateset.contains(&item) {
                    continue;
                }
                if item.finished() {
                    if let Head::NonTerm(nt) = &item.head {
                        // complete: advance every item waiting on nt
                        let tree = item.complete();
                        if item.end == pos {
                            empties.push((nt.clone(), tree.clone()));
                        }
                        let waiting = if item.end == pos { &stateset } else { &statesets[item.end] };
                        queue.extend(waiting.iter()
                            .filter(|prev| prev.matches(nt))
                            .map(|prev| prev.advance(tree.clone())));
                    }
                } else {
                    // predict: expand the nonterminal left of the dot
                    let sym = item.current();
                    if let Some(alternatives) = rhss.get(sym) {
                        queue.extend(alternatives.iter().map(|rhs|
                            Item::predict_new(Head::NonTerm(sym.to_string()), rhs.clone(), pos)));
                        queue.extend(empties.iter()
                            .filter(|(nt, _)| nt == sym)
                            .map(|(_, tree)| item.advance(tree.clone())));
                    }
                }
                stateset.push(item);
            }

            if cfg!(feature="debug") {
                eprintln!("=== StateSet {} ===", pos);
                for item in &stateset {
                    eprintln!("{:?}", item);
                }
            }
            statesets[pos] = stateset;
        }

        let trees: Vec<ParseTree> = statesets[0].iter()
            .filter(|item| item.finished_start())
            .map(Item::complete_top)
            .collect();
        debug!("Parsed {} trees (complete: {})", trees.len(), !truncated);
        ParseResult { complete: !truncated, trees }
    }

    /// Parse a sentence of one-character terminals, whitespace ignored.
    pub fn parse_sentence(&self, sentence: &str) -> ParseResult {
        self.parse(&Grammar::symbols_of(sentence))
    }
}
