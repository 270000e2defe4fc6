#![deny(warnings)]

use crate::grammar::{Grammar, GrammarBuilder};
use crate::properties::GrammarProperties;
use expect_test::expect;

// unreachable, unrealizable, nullable and cyclic sets
fn props(rows: &[(&str, &str)]) -> Vec<Vec<String>> {
    let grammar = Grammar::from_rows(rows);
    let p = GrammarProperties::new(&grammar);
    vec![p.unreachable().to_vec(), p.unrealizable().to_vec(),
         p.nullable().to_vec(), p.cyclic().to_vec()]
}

fn strs(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|s| s.to_string()).collect()
}

///////////////////////////////////////////////////////////////////////////////

#[test]
fn clean_grammar() {
    // S -> a S b | <e>
    let sets = props(&[("S", "aSb|")]);
    assert_eq!(sets, vec![strs(&[]), strs(&[]), strs(&["S"]), strs(&[])]);
    let g = Grammar::from_rows(&[("S", "aSb|")]);
    let p = GrammarProperties::new(&g);
    assert!(!p.infinitely_ambiguous());
    assert!(p.issues().is_empty());
}

#[test]
fn unreachable_nonterminal() {
    // S -> A ; A -> a ; B -> b
    let sets = props(&[("S", "A"), ("A", "a"), ("B", "b")]);
    assert_eq!(sets[0], strs(&["B"]));
    assert_eq!(sets[1], strs(&[]));
}

#[test]
fn reachability_follows_every_alternative() {
    // S -> a | A ; A -> B c ; B -> b ; C -> C
    let sets = props(&[("S", "a|A"), ("A", "Bc"), ("B", "b"), ("C", "C")]);
    assert_eq!(sets[0], strs(&["C"]));
    assert_eq!(sets[1], strs(&["C"]));
}

#[test]
fn unrealizable_nonterminals() {
    // S -> a | A ; A -> a B ; B -> A b
    let sets = props(&[("S", "a|A"), ("A", "aB"), ("B", "Ab")]);
    assert_eq!(sets[1], strs(&["A", "B"]));
    // realizable through a chain of other nonterminals
    let sets = props(&[("S", "AB"), ("A", "B|a"), ("B", "b")]);
    assert_eq!(sets[1], strs(&[]));
}

#[test]
fn nullable_nonterminals() {
    // S -> A B ; A -> <e> | a ; B -> <e>
    let sets = props(&[("S", "AB"), ("A", "|a"), ("B", "")]);
    assert_eq!(sets[2], strs(&["S", "A", "B"]));
    // a terminal anywhere blocks nullability
    let sets = props(&[("S", "AcB"), ("A", ""), ("B", "")]);
    assert_eq!(sets[2], strs(&["A", "B"]));
}

#[test]
fn direct_cycle() {
    // S -> S | a
    let g = Grammar::from_rows(&[("S", "S|a")]);
    let p = GrammarProperties::new(&g);
    assert_eq!(p.cyclic(), &["S"]);
    assert!(p.infinitely_ambiguous());
}

#[test]
fn cycle_through_nullable_neighbours() {
    // S -> A S B | x ; A -> <e> ; B -> b | <e>
    let sets = props(&[("S", "ASB|x"), ("A", ""), ("B", "b|")]);
    assert_eq!(sets[3], strs(&["S"]));
    // the same shape with a non nullable neighbour is no cycle
    let sets = props(&[("S", "aSB|x"), ("B", "b|")]);
    assert_eq!(sets[3], strs(&[]));
}

#[test]
fn indirect_cycle() {
    // S -> A | s ; A -> B ; B -> S | b
    let sets = props(&[("S", "A|s"), ("A", "B"), ("B", "S|b")]);
    assert_eq!(sets[3], strs(&["S", "A", "B"]));
}

#[test]
fn cycle_without_ambiguity() {
    // S -> a ; U -> U | u  (U unreachable)
    let g = Grammar::from_rows(&[("S", "a"), ("U", "U|u")]);
    let p = GrammarProperties::new(&g);
    assert_eq!(p.cyclic(), &["U"]);
    assert!(!p.infinitely_ambiguous());
    // R -> R is reachable but generates nothing
    let g = GrammarBuilder::default()
        .rule("S", &["a"])
        .rule("S", &["R"])
        .rule("R", &["R"])
        .into_grammar()
        .expect("Bad Grammar");
    let p = GrammarProperties::new(&g);
    assert_eq!(p.cyclic(), &["R"]);
    assert_eq!(p.unrealizable(), &["R"]);
    assert!(!p.infinitely_ambiguous());
}

#[test]
fn mutually_dependent_nonterminals() {
    let g = Grammar::from_rows(&[("S", "AB|C"), ("A", "a|"), ("B", "Bb"), ("C", "cS"), ("D", "d")]);
    let p = GrammarProperties::new(&g);
    assert_eq!(p.unreachable(), &["D"]);
    assert_eq!(p.unrealizable(), &["S", "B", "C"]);
}

#[test]
fn issue_sentences() {
    let g = Grammar::from_rows(&[("S", "S|a|A"), ("A", "aB"), ("B", "Ab"), ("C", "c"), ("D", "d")]);
    let p = GrammarProperties::new(&g);
    expect![[r#"
        [
            "Nonterminals C, D are unreachable from the start symbol S.",
            "Nonterminals A, B are unrealizable (cannot generate any strings).",
            "Nonterminal S is cyclic, so some strings have infinitely many derivations.",
        ]
    "#]]
    .assert_debug_eq(&p.issues());

    let g = Grammar::from_rows(&[("S", "a"), ("U", "U|u")]);
    assert_eq!(GrammarProperties::new(&g).issues(), vec![
        "Nonterminal U is unreachable from the start symbol S.",
        "Nonterminal U is cyclic.",
    ]);
}
