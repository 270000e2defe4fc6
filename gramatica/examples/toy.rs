fn main() {
    // Grammar:  S -> S + N | N;  N -> 1 | 2 | 3
    let grammar = gramatica::GrammarBuilder::default()
        .rule("S", &["S", "+", "N"])
        .rule("S", &["N"])
        .rule("N", &["1"])
        .rule("N", &["2"])
        .rule("N", &["3"])
        .into_grammar()
        .unwrap();

    // Check the grammar before using it
    for issue in gramatica::GrammarProperties::new(&grammar).issues() {
        println!("{}", issue);
    }

    // Parse some sum
    let result = gramatica::EarleyParser::new(grammar.clone()).parse_sentence("1 + 2 + 3");
    for tree in &result.trees {
        print!("{}", tree.print());
    }

    // Every derivation, as deep as the budget allows
    let mut expansion = gramatica::Expansion::new(&grammar, 200);
    expansion.expand_to_depth(4);
    println!("{} trees of depth at most {} (complete: {})",
             expansion.derivations(grammar.start()).len(),
             expansion.depth(),
             expansion.complete());

    // and a regular language
    println!("{}", gramatica::regex_language("(a|b)*c"));
}
