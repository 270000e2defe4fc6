#![deny(warnings)]

use std::collections::HashMap;
use std::fmt;

/// A production `head -> spec`. Symbols are plain strings; whether a symbol
/// is a terminal depends only on the grammar it's used in.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pub head: String,
    pub spec: Vec<String>,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.head, self.spec.join(" "))
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Ordered collection of nonterminals and their right-hand sides.
/// The first nonterminal added is the start symbol. Any symbol that is not
/// the head of some production is a terminal.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Grammar {
    lhss: Vec<String>,
    productions: HashMap<String, Vec<Vec<String>>>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `rhs` to the alternatives of `lhs`, registering `lhs` if new.
    pub fn add_production<S: AsRef<str>>(&mut self, lhs: &str, rhs: &[S]) {
        let rhs = rhs.iter().map(|s| s.as_ref().to_string()).collect();
        match self.productions.get_mut(lhs) {
            Some(entry) => entry.push(rhs),
            None => {
                self.lhss.push(lhs.to_string());
                self.productions.insert(lhs.to_string(), vec![rhs]);
            }
        }
    }

    /// The first nonterminal added. Panics if the grammar has no productions.
    pub fn start(&self) -> &str {
        self.lhss.first().expect("BUG: start symbol of an empty grammar")
    }

    pub fn is_empty(&self) -> bool {
        self.lhss.is_empty()
    }

    /// Nonterminals in the order they were first added.
    pub fn nonterminals(&self) -> &[String] {
        &self.lhss
    }

    pub fn is_terminal(&self, sym: &str) -> bool {
        !self.productions.contains_key(sym)
    }

    pub fn is_nonterminal(&self, sym: &str) -> bool {
        self.productions.contains_key(sym)
    }

    /// Right-hand sides of `nt`. Requires `is_nonterminal(nt)`.
    pub fn expansions(&self, nt: &str) -> &[Vec<String>] {
        self.productions
            .get(nt)
            .unwrap_or_else(|| panic!("BUG: expansions of terminal {:?}", nt))
    }

    /// All productions, grouped by head in first-seen order.
    pub fn rules(&self) -> impl Iterator<Item = Rule> + '_ {
        self.lhss.iter().flat_map(move |head| {
            self.expansions(head).iter().map(move |spec| Rule {
                head: head.clone(),
                spec: spec.clone(),
            })
        })
    }

    /// Build a grammar from `(lhs, rhs)` text rows. The rhs separates
    /// alternatives with `|` and each alternative is a string of
    /// one-character symbols, spaces ignored. Rows with an empty lhs are
    /// skipped.
    pub fn from_rows<L, R>(rows: &[(L, R)]) -> Self
    where
        L: AsRef<str>,
        R: AsRef<str>,
    {
        let mut grammar = Grammar::new();
        for (lhs, rhs) in rows {
            let lhs = lhs.as_ref().trim();
            if lhs.is_empty() {
                continue;
            }
            for alternative in rhs.as_ref().split('|') {
                grammar.add_production(lhs, &Self::symbols_of(alternative));
            }
        }
        grammar
    }

    /// Build a grammar from lines like `S -> a S b |`. Blank lines and
    /// lines starting with `#` are ignored.
    pub fn from_text(text: &str) -> Result<Self, String> {
        let mut rows = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (lhs, rhs) = split_row(line)
                .ok_or_else(|| format!("Line {}: missing '->' in {:?}", lineno + 1, line))?;
            if lhs.is_empty() {
                return Err(format!("Line {}: missing nonterminal before '->'", lineno + 1));
            }
            rows.push((lhs, rhs));
        }
        Ok(Self::from_rows(&rows))
    }

    /// Single-character symbols of `text`, ignoring whitespace.
    pub fn symbols_of(text: &str) -> Vec<String> {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_string())
            .collect()
    }
}

/// Split `A -> rhs` (or `A ::= rhs`) into its trimmed halves.
pub fn split_row(line: &str) -> Option<(&str, &str)> {
    ["->", "::=", "→"]
        .iter()
        .find_map(|arrow| line.split_once(arrow))
        .map(|(lhs, rhs)| (lhs.trim(), rhs.trim()))
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for head in &self.lhss {
            let alternatives = self
                .expansions(head)
                .iter()
                .map(|rhs| rhs.join(" "))
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(f, "{} -> {}", head, alternatives)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(start) = self.lhss.first() {
            writeln!(f, "Start: {}", start)?;
        }
        for rule in self.rules() {
            writeln!(f, "{}", rule)?;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct GrammarBuilder {
    grammar: Grammar,
}

/// Chained construction of a Grammar, handy for literals in code and tests.
impl GrammarBuilder {
    pub fn rule<S: AsRef<str>>(mut self, head: &str, spec: &[S]) -> Self {
        self.grammar.add_production(head, spec);
        self
    }

    pub fn into_grammar(self) -> Result<Grammar, String> {
        if self.grammar.is_empty() {
            return Err("Empty Grammar".to_string());
        }
        Ok(self.grammar)
    }
}

///////////////////////////////////////////////////////////////////////////////
