#![deny(warnings)]

use crate::grammar::Grammar;
use std::collections::{HashMap, HashSet, VecDeque};

/// Statically computable properties of a grammar. Each set lists
/// nonterminals in the grammar's own order.
pub struct GrammarProperties<'g> {
    grammar: &'g Grammar,
    unreachable: Vec<String>,
    unrealizable: Vec<String>,
    nullable: Vec<String>,
    cyclic: Vec<String>,
}

impl<'g> GrammarProperties<'g> {
    /// The grammar must not be empty.
    pub fn new(grammar: &'g Grammar) -> Self {
        let unreachable = unreachable(grammar);
        let unrealizable = unrealizable(grammar);
        let nullable = nullable(grammar);
        let cyclic = cyclic(grammar, &nullable);
        let in_order = |set: HashSet<&str>| grammar.nonterminals().iter()
            .filter(|nt| set.contains(nt.as_str()))
            .cloned()
            .collect::<Vec<_>>();
        GrammarProperties {
            grammar,
            unreachable: in_order(unreachable),
            unrealizable: in_order(unrealizable),
            nullable: in_order(nullable),
            cyclic: in_order(cyclic),
        }
    }

    /// Nonterminals that cannot be reached from the start symbol.
    pub fn unreachable(&self) -> &[String] {
        &self.unreachable
    }

    /// Nonterminals that do not generate any strings.
    pub fn unrealizable(&self) -> &[String] {
        &self.unrealizable
    }

    /// Nonterminals that can generate the empty string.
    pub fn nullable(&self) -> &[String] {
        &self.nullable
    }

    /// Nonterminals that can derive themselves.
    pub fn cyclic(&self) -> &[String] {
        &self.cyclic
    }

    /// Some strings have infinitely many derivations. This happens exactly
    /// when a cyclic nonterminal is both reachable and realizable.
    pub fn infinitely_ambiguous(&self) -> bool {
        self.cyclic.iter().any(|nt|
            !self.unreachable.contains(nt) && !self.unrealizable.contains(nt))
    }

    /// One sentence per property the grammar violates.
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if !self.unreachable.is_empty() {
            issues.push(describe(&self.unreachable,
                &format!("unreachable from the start symbol {}", self.grammar.start())));
        }
        if !self.unrealizable.is_empty() {
            issues.push(describe(&self.unrealizable,
                "unrealizable (cannot generate any strings)"));
        }
        if !self.cyclic.is_empty() {
            let adjective = if self.infinitely_ambiguous() {
                "cyclic, so some strings have infinitely many derivations"
            } else {
                "cyclic"
            };
            issues.push(describe(&self.cyclic, adjective));
        }
        issues
    }
}

// Sentence saying the nonterminals in `nts` have a property.
fn describe(nts: &[String], adjective: &str) -> String {
    let plural = nts.len() > 1;
    format!("{} {} {} {}.",
            if plural { "Nonterminals" } else { "Nonterminal" },
            nts.join(", "),
            if plural { "are" } else { "is" },
            adjective)
}

fn complement<'a>(grammar: &'a Grammar, set: &HashSet<&str>) -> HashSet<&'a str> {
    grammar.nonterminals().iter()
        .map(String::as_str)
        .filter(|nt| !set.contains(nt))
        .collect()
}

// Walk forward from the start symbol following nonterminals on the rhs.
fn unreachable(grammar: &Grammar) -> HashSet<&str> {
    let mut reachable = HashSet::new();
    let mut queue = VecDeque::from([grammar.start()]);
    while let Some(nt) = queue.pop_front() {
        if reachable.insert(nt) {
            queue.extend(grammar.expansions(nt).iter()
                .flatten()
                .map(String::as_str)
                .filter(|sym| grammar.is_nonterminal(sym)));
        }
    }
    complement(grammar, &reachable)
}

// Shrink from "everything unrealizable" until every remaining nonterminal
// lacks a rhs made only of realizable symbols.
fn unrealizable(grammar: &Grammar) -> HashSet<&str> {
    let mut unrealizable: HashSet<&str> = grammar.nonterminals().iter()
        .map(String::as_str)
        .collect();
    loop {
        let realized = unrealizable.iter().copied().find(|nt|
            grammar.expansions(nt).iter().any(|rhs|
                rhs.iter().all(|sym| !unrealizable.contains(sym.as_str()))));
        match realized {
            Some(nt) => { unrealizable.remove(nt); }
            None => return unrealizable,
        }
    }
}

// Grow from nothing: a nonterminal is nullable if some rhs is all nullable.
fn nullable(grammar: &Grammar) -> HashSet<&str> {
    let mut nullable = HashSet::new();
    loop {
        let nulled = grammar.nonterminals().iter()
            .map(String::as_str)
            .find(|nt| !nullable.contains(nt) &&
                grammar.expansions(nt).iter().any(|rhs|
                    rhs.iter().all(|sym| nullable.contains(sym.as_str()))));
        match nulled {
            Some(nt) => { nullable.insert(nt); }
            None => return nullable,
        }
    }
}

// A is cyclic if A =>+ A, ie: A -> u B v with u and v nullable, chained
// back to A.
fn cyclic<'a>(grammar: &'a Grammar, nullable: &HashSet<&str>) -> HashSet<&'a str> {
    let mut expansion = direct_expansion(grammar, nullable);
    transitive_close(&mut expansion);
    expansion.iter()
        .filter(|(nt, reach)| reach.contains(*nt))
        .map(|(nt, _)| *nt)
        .collect()
}

// For each nonterminal A, the symbols B occurring in A -> u B v where u and
// v are nullable.
fn direct_expansion<'a>(grammar: &'a Grammar, nullable: &HashSet<&str>)
    -> HashMap<&'a str, HashSet<&'a str>>
{
    let mut expansion = HashMap::new();
    for nt in grammar.nonterminals() {
        let mut direct = HashSet::new();
        for rhs in grammar.expansions(nt) {
            let non_null: Vec<&str> = rhs.iter()
                .map(String::as_str)
                .filter(|sym| !nullable.contains(sym))
                .collect();
            match non_null.as_slice() {
                [] => direct.extend(rhs.iter().map(String::as_str)),
                [sym] if grammar.is_nonterminal(sym) => { direct.insert(*sym); }
                _ => (),
            }
        }
        if !direct.is_empty() {
            expansion.insert(nt.as_str(), direct);
        }
    }
    expansion
}

// Union every set with the sets of its members until nothing grows.
fn transitive_close<'a>(relation: &mut HashMap<&'a str, HashSet<&'a str>>) {
    loop {
        let mut changed = false;
        let keys: Vec<&str> = relation.keys().copied().collect();
        for key in keys {
            let extra: HashSet<&str> = relation[key].iter()
                .filter_map(|target| relation.get(target))
                .flatten()
                .copied()
                .collect();
            let targets = relation.get_mut(key).expect("BUG: key vanished");
            let before = targets.len();
            targets.extend(extra);
            changed |= targets.len() > before;
        }
        if !changed {
            return;
        }
    }
}
