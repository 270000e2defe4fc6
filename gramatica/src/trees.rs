#![deny(warnings)]

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// A derivation tree. Nonterminal nodes are reference counted so the
/// chart and the derivation enumerator can share subtrees; they are never
/// mutated after construction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ParseTree {
    Terminal(String),
    NonTerminal(Rc<NonTerminalTree>),
}

/// A nonterminal with its children. Height, width and the generated
/// sentence are computed once, at construction.
pub struct NonTerminalTree {
    symbol: String,
    children: Vec<ParseTree>,
    height: usize,
    width: usize,
    sentence: String,
}

impl NonTerminalTree {
    pub fn new(symbol: impl Into<String>, children: Vec<ParseTree>) -> Self {
        let height = 1 + children.iter().map(ParseTree::height).max().unwrap_or(0);
        let width = children.iter().map(ParseTree::width).sum::<usize>().max(1);
        let sentence = children.iter().map(ParseTree::sentence).collect();
        NonTerminalTree {
            symbol: symbol.into(),
            children,
            height,
            width,
            sentence,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn children(&self) -> &[ParseTree] {
        &self.children
    }
}

// Structural equality: cached attributes follow from the children.
impl PartialEq for NonTerminalTree {
    fn eq(&self, other: &NonTerminalTree) -> bool {
        self.symbol == other.symbol && self.children == other.children
    }
}

impl Eq for NonTerminalTree {}

impl std::hash::Hash for NonTerminalTree {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
        self.children.hash(state);
    }
}

impl ParseTree {
    pub fn terminal(symbol: impl Into<String>) -> Self {
        ParseTree::Terminal(symbol.into())
    }

    pub fn nonterminal(symbol: impl Into<String>, children: Vec<ParseTree>) -> Self {
        ParseTree::NonTerminal(Rc::new(NonTerminalTree::new(symbol, children)))
    }

    pub fn symbol(&self) -> &str {
        match self {
            ParseTree::Terminal(sym) => sym,
            ParseTree::NonTerminal(nt) => nt.symbol(),
        }
    }

    pub fn children(&self) -> &[ParseTree] {
        match self {
            ParseTree::Terminal(_) => &[],
            ParseTree::NonTerminal(nt) => nt.children(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ParseTree::Terminal(_))
    }

    pub fn height(&self) -> usize {
        match self {
            ParseTree::Terminal(_) => 1,
            ParseTree::NonTerminal(nt) => nt.height,
        }
    }

    pub fn width(&self) -> usize {
        match self {
            ParseTree::Terminal(_) => 1,
            ParseTree::NonTerminal(nt) => nt.width,
        }
    }

    /// Terminal leaves concatenated left to right.
    pub fn sentence(&self) -> &str {
        match self {
            ParseTree::Terminal(sym) => sym,
            ParseTree::NonTerminal(nt) => &nt.sentence,
        }
    }

    /// Display order: shorter sentences first, then sentence text, then
    /// shallower trees.
    pub fn display_cmp(&self, other: &ParseTree) -> Ordering {
        let (a, b) = (self.sentence(), other.sentence());
        a.chars()
            .count()
            .cmp(&b.chars().count())
            .then_with(|| a.cmp(b))
            .then_with(|| self.height().cmp(&other.height()))
    }

    /// Render the tree as indented text, one node per line.
    pub fn print(&self) -> String {
        let mut out = String::new();
        self.print_helper("", &mut out);
        out
    }

    fn print_helper(&self, level: &str, out: &mut String) {
        match self {
            ParseTree::Terminal(sym) => *out += &format!("{}`-- {:?}\n", level, sym),
            ParseTree::NonTerminal(nt) => {
                if nt.children.is_empty() {
                    *out += &format!("{}`-- {} \u{03b5}\n", level, nt.symbol);
                    return;
                }
                *out += &format!("{}`-- {}\n", level, nt.symbol);
                if let Some((last, rest)) = nt.children.split_last() {
                    let l = format!("{}  |", level);
                    for n in rest {
                        n.print_helper(&l, out);
                    }
                    let l = format!("{}   ", level);
                    last.print_helper(&l, out);
                }
            }
        }
    }
}

impl fmt::Debug for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseTree::Terminal(sym) => write!(f, "{:?}", sym),
            ParseTree::NonTerminal(nt) => {
                write!(f, "{}(", nt.symbol)?;
                for (i, child) in nt.children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{:?}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
