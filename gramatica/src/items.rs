#![deny(warnings)]

use crate::trees::ParseTree;
use std::fmt;
use std::rc::Rc;

/// Persistent list of the trees matched so far. Items advanced from the
/// same source share its tail.
#[derive(Clone, Default)]
pub struct Matched(Option<Rc<Cons>>);

struct Cons {
    head: ParseTree,
    tail: Matched,
}

impl Matched {
    pub fn cons(&self, head: ParseTree) -> Matched {
        Matched(Some(Rc::new(Cons { head, tail: self.clone() })))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParseTree> {
        std::iter::successors(self.0.as_deref(), |cell| cell.tail.0.as_deref())
            .map(|cell| &cell.head)
    }
}

impl PartialEq for Matched {
    fn eq(&self, other: &Matched) -> bool {
        let (mut xs, mut ys) = (&self.0, &other.0);
        loop {
            match (xs, ys) {
                (None, None) => return true,
                (Some(x), Some(y)) => {
                    if Rc::ptr_eq(x, y) {
                        return true;
                    }
                    if x.head != y.head {
                        return false;
                    }
                    xs = &x.tail.0;
                    ys = &y.tail.0;
                }
                _ => return false,
            }
        }
    }
}

impl Eq for Matched {}

/// Left side of an item: the augmented start production or a grammar
/// nonterminal.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Head {
    Start,
    NonTerm(String),
}

/// A dotted production `A -> u . v` matched right to left: `v` has been
/// matched (its trees are in `parsed`) and `u` is still pending. `dot`
/// counts the pending symbols, so an item is finished when it reaches 0.
#[derive(Clone, PartialEq, Eq)]
pub struct Item {
    pub head: Head,
    pub rhs: Rc<[String]>,
    pub dot: usize,
    parsed: Matched,
    // input position where the matched suffix ends
    pub end: usize,
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let head = match &self.head {
            Head::Start => "<Start>",
            Head::NonTerm(nt) => nt,
        };
        write!(f, "(- {}) {} -> {} \u{00b7} {} [{:?}]",
               self.end, head,
               self.rhs[..self.dot].join(" "),
               self.rhs[self.dot..].join(" "),
               self.parsed.iter().collect::<Vec<_>>())
    }
}

impl Item {
    /// Item at the end of a right-hand side, nothing matched yet.
    pub fn predict_new(head: Head, rhs: Rc<[String]>, end: usize) -> Item {
        let dot = rhs.len();
        Item { head, rhs, dot, parsed: Matched::default(), end }
    }

    /// Advance over the symbol left of the dot, which `tree` matched.
    pub fn advance(&self, tree: ParseTree) -> Item {
        assert!(!self.finished(), "BUG: advancing a finished item");
        Item {
            head: self.head.clone(),
            rhs: self.rhs.clone(),
            dot: self.dot - 1,
            parsed: self.parsed.cons(tree),
            end: self.end,
        }
    }

    /// Whole rhs has been matched.
    pub fn finished(&self) -> bool {
        self.dot == 0
    }

    pub fn finished_start(&self) -> bool {
        self.finished() && self.head == Head::Start
    }

    /// Does `sym` occur immediately left of the dot?
    pub fn matches(&self, sym: &str) -> bool {
        self.dot > 0 && self.rhs[self.dot - 1] == sym
    }

    /// Symbol immediately left of the dot.
    pub fn current(&self) -> &str {
        assert!(!self.finished(), "BUG: no symbol left of the dot");
        &self.rhs[self.dot - 1]
    }

    /// Tree for a finished production of a grammar nonterminal.
    pub fn complete(&self) -> ParseTree {
        assert!(self.finished(), "BUG: completing an unfinished item");
        match &self.head {
            Head::NonTerm(nt) => ParseTree::nonterminal(nt.clone(), self.parsed.iter().cloned().collect()),
            Head::Start => panic!("BUG: the augmented start has no tree of its own"),
        }
    }

    /// The start symbol's tree held by a finished augmented item.
    pub fn complete_top(&self) -> ParseTree {
        assert!(self.finished_start(), "BUG: not a finished start item");
        let mut parsed = self.parsed.iter();
        let top = parsed.next().expect("BUG: start item without a tree").clone();
        assert!(parsed.next().is_none(), "BUG: start item with several trees");
        top
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Head, Item};
    use crate::trees::ParseTree;
    use std::rc::Rc;

    fn rhs(syms: &[&str]) -> Rc<[String]> {
        syms.iter().map(|s| s.to_string()).collect()
    }

    fn s_item(end: usize) -> Item {
        // S -> a S b .
        Item::predict_new(Head::NonTerm("S".to_string()), rhs(&["a", "S", "b"]), end)
    }

    #[test]
    fn item_basics() {
        let item = s_item(3);
        assert_eq!(item.dot, 3);
        assert!(!item.finished());
        assert!(item.matches("b"));
        assert!(!item.matches("a"));
        assert_eq!(item.current(), "b");
        assert_eq!(item, s_item(3));
        assert_ne!(item, s_item(2));
    }

    #[test]
    fn item_advance() {
        let item = s_item(3).advance(ParseTree::terminal("b"));
        assert_eq!(item.current(), "S");
        let inner = ParseTree::nonterminal("S", vec![]);
        let item = item.advance(inner.clone()).advance(ParseTree::terminal("a"));
        assert!(item.finished());
        assert!(!item.matches("a"));
        assert_eq!(item.end, 3);
        let tree = item.complete();
        assert_eq!(tree, ParseTree::nonterminal("S", vec![
            ParseTree::terminal("a"), inner, ParseTree::terminal("b")]));
    }

    #[test]
    fn item_equality_follows_trees() {
        let x = s_item(1).advance(ParseTree::terminal("b"));
        let y = s_item(1).advance(ParseTree::terminal("b"));
        assert_eq!(x, y);
        let z = s_item(1).advance(ParseTree::terminal("c"));
        assert_ne!(x, z);
    }

    #[test]
    fn start_item() {
        let start = Item::predict_new(Head::Start, rhs(&["S"]), 0);
        assert!(!start.finished_start());
        let top = ParseTree::nonterminal("S", vec![ParseTree::terminal("a")]);
        let done = start.advance(top.clone());
        assert!(done.finished_start());
        assert_eq!(done.complete_top(), top);
    }

    #[test]
    #[should_panic]
    fn advance_finished_item() {
        let item = Item::predict_new(Head::NonTerm("E".to_string()), rhs(&[]), 0);
        item.advance(ParseTree::terminal("a"));
    }

    #[test]
    #[should_panic]
    fn current_of_finished_item() {
        let item = Item::predict_new(Head::NonTerm("E".to_string()), rhs(&[]), 0);
        item.current();
    }
}
