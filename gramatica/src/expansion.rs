#![deny(warnings)]

use crate::grammar::Grammar;
use crate::trees::ParseTree;
use std::collections::{HashMap, HashSet};

/// Breadth-first enumeration of derivation trees. After `n` expansions
/// each nonterminal holds every derivation tree of depth at most `n`, as
/// long as the total size of generated trees stays within `limit`.
pub struct Expansion<'g> {
    grammar: &'g Grammar,
    limit: usize,
    // sum of height * width over every tree ever built
    count: usize,
    depth: usize,
    finished: bool,
    // nonterminals occurring on some right-hand side
    used: HashSet<&'g str>,
    derivations: HashMap<String, Vec<ParseTree>>,
}

impl<'g> Expansion<'g> {
    pub fn new(grammar: &'g Grammar, limit: usize) -> Self {
        let derivations = grammar.nonterminals().iter()
            .map(|nt| (nt.clone(), Vec::new()))
            .collect();
        let used = grammar.nonterminals().iter()
            .flat_map(|nt| grammar.expansions(nt))
            .flatten()
            .map(String::as_str)
            .filter(|sym| grammar.is_nonterminal(sym))
            .collect();
        Expansion { grammar, limit, count: 0, depth: 0, finished: false, used, derivations }
    }

    /// Grow every nonterminal's trees by one level. Returns false, keeping
    /// the previous state, as soon as the size budget is exceeded.
    pub fn expand(&mut self) -> bool {
        let grammar = self.grammar;
        let mut expanded = HashMap::new();
        for nt in grammar.nonterminals() {
            let mut trees = Vec::new();
            for rhs in grammar.expansions(nt) {
                if !self.expand_rhs(nt, rhs, &mut trees) {
                    debug!("Expansion {}: size budget {} exceeded", self.depth + 1, self.limit);
                    return false;
                }
            }
            expanded.insert(nt.clone(), trees);
        }
        // trees only ever grow: if no nonterminal used on a rhs grew, the
        // next expansion would rebuild exactly the same trees.
        let settled = self.used.iter()
            .all(|nt| self.derivations[*nt].len() == expanded[*nt].len());
        self.derivations = expanded;
        self.depth += 1;
        self.finished = settled;
        debug!("Expansion {}: {} trees, size {}", self.depth, self.size(), self.count);
        true
    }

    // Push a tree for every combination of the current trees of each
    // symbol in `rhs`, charging each one as it is built. Combinations are
    // walked with an odometer over `choices`, last symbol fastest.
    fn expand_rhs(&mut self, nt: &str, rhs: &[String], trees: &mut Vec<ParseTree>) -> bool {
        let choices: Vec<Vec<ParseTree>> = rhs.iter()
            .map(|sym| if self.grammar.is_terminal(sym) {
                vec![ParseTree::terminal(sym.clone())]
            } else {
                self.derivations[sym.as_str()].clone()
            })
            .collect();
        if choices.iter().any(Vec::is_empty) {
            return true;
        }
        let mut odometer = vec![0; choices.len()];
        loop {
            let children = odometer.iter().zip(&choices)
                .map(|(&i, choice)| choice[i].clone())
                .collect();
            let tree = ParseTree::nonterminal(nt, children);
            self.count += tree.height() * tree.width();
            if self.count > self.limit {
                return false;
            }
            trees.push(tree);

            let mut k = odometer.len();
            loop {
                if k == 0 {
                    return true;
                }
                k -= 1;
                odometer[k] += 1;
                if odometer[k] < choices[k].len() {
                    break;
                }
                odometer[k] = 0;
            }
        }
    }

    /// Expand until `max_depth` is reached, the budget runs out or the
    /// trees stop growing.
    pub fn expand_to_depth(&mut self, max_depth: usize) {
        while self.depth < max_depth && !self.finished && self.expand() {}
    }

    pub fn derivations(&self, nt: &str) -> &[ParseTree] {
        self.derivations.get(nt)
            .unwrap_or_else(|| panic!("BUG: derivations of terminal {:?}", nt))
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of trees held across all nonterminals.
    pub fn size(&self) -> usize {
        self.derivations.values().map(Vec::len).sum()
    }

    /// The trees held are every derivation tree of the grammar.
    pub fn complete(&self) -> bool {
        self.finished
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Expansion;
    use crate::grammar::{Grammar, GrammarBuilder};
    use crate::trees::ParseTree;

    fn sentences(e: &Expansion, nt: &str) -> Vec<String> {
        let mut trees = e.derivations(nt).to_vec();
        trees.sort_by(ParseTree::display_cmp);
        trees.iter().map(|t| t.sentence().to_string()).collect()
    }

    #[test]
    fn finite_grammar_one_step() {
        let g = Grammar::from_rows(&[("S", "a|b")]);
        let mut e = Expansion::new(&g, 10000);
        assert!(e.expand());
        assert!(e.complete());
        assert_eq!(e.depth(), 1);
        assert_eq!(e.derivations("S"), &[
            ParseTree::nonterminal("S", vec![ParseTree::terminal("a")]),
            ParseTree::nonterminal("S", vec![ParseTree::terminal("b")]),
        ]);
    }

    #[test]
    fn finite_grammar_fixed_point() {
        // S -> A A ; A -> a | b
        let g = GrammarBuilder::default()
            .rule("S", &["A", "A"])
            .rule("A", &["a"])
            .rule("A", &["b"])
            .into_grammar()
            .unwrap();
        let mut e = Expansion::new(&g, 10000);
        e.expand_to_depth(10);
        assert!(e.complete());
        assert_eq!(e.depth(), 2);
        assert_eq!(sentences(&e, "S"), vec!["aa", "ab", "ba", "bb"]);
    }

    #[test]
    fn recursive_grammar_bounded_by_depth() {
        // S -> a S | <e>
        let g = Grammar::from_rows(&[("S", "aS|")]);
        let mut e = Expansion::new(&g, 10000);
        e.expand_to_depth(4);
        assert!(!e.complete());
        assert_eq!(e.depth(), 4);
        assert_eq!(sentences(&e, "S"), vec!["", "a", "aa", "aaa"]);
    }

    #[test]
    fn recursive_grammar_bounded_by_size() {
        // S -> S S | a  grows as the Catalan numbers
        let g = Grammar::from_rows(&[("S", "SS|a")]);
        let mut e = Expansion::new(&g, 200);
        e.expand_to_depth(100);
        assert!(!e.complete());
        let depth = e.depth();
        assert!(depth > 0 && depth < 100);
        let kept = e.derivations("S").len();
        // the failed expansion left the previous trees in place
        assert!(!e.expand());
        assert_eq!(e.depth(), depth);
        assert_eq!(e.derivations("S").len(), kept);
    }

    #[test]
    fn wide_rhs_stops_at_the_budget() {
        // S -> A A A A A A A A ; A -> 0 | ... | 9 : 10^8 trees at depth 2
        let g = Grammar::from_rows(&[("S", "AAAAAAAA"), ("A", "0|1|2|3|4|5|6|7|8|9")]);
        let mut e = Expansion::new(&g, 10000);
        assert!(e.expand());
        assert_eq!(e.depth(), 1);
        assert!(!e.expand());
        assert_eq!(e.depth(), 1);
        assert!(!e.complete());
        assert!(e.derivations("S").is_empty());
        assert_eq!(e.derivations("A").len(), 10);
    }

    #[test]
    fn combinations_in_rhs_order() {
        // S -> A B ; A -> a | b ; B -> c | d
        let g = Grammar::from_rows(&[("S", "AB"), ("A", "a|b"), ("B", "c|d")]);
        let mut e = Expansion::new(&g, 10000);
        e.expand_to_depth(10);
        assert!(e.complete());
        let sentences: Vec<&str> = e.derivations("S").iter().map(|t| t.sentence()).collect();
        assert_eq!(sentences, vec!["ac", "ad", "bc", "bd"]);
    }

    #[test]
    fn unrealizable_nonterminal_has_no_trees() {
        let g = Grammar::from_rows(&[("S", "a|B"), ("B", "bB")]);
        let mut e = Expansion::new(&g, 10000);
        e.expand_to_depth(10);
        assert!(e.complete());
        assert_eq!(sentences(&e, "S"), vec!["a"]);
        assert!(e.derivations("B").is_empty());
    }
}
