use gramatica::{all_derivations, derive_sentence, regex_language};
use gramatica::{Grammar, GrammarProperties};

const HELP: &str = "\
rule A -> rhs     add productions for A, alternatives separated by '|'
grammar           show the grammar
clear             forget every production
issues            report unreachable, unrealizable and cyclic nonterminals
derive            list derivation trees of the start symbol
parse <sentence>  derivation trees of a sentence of one-character symbols
regex <expr>      strings of the language of a regular expression
help              this text
";

/// Grammar lines typed so far and the commands over them.
#[derive(Default)]
pub struct Session {
    rules: Vec<String>,
}

impl Session {
    /// Run one command line, returning what to print.
    pub fn run(&mut self, line: &str) -> Result<String, String> {
        let line = line.trim();
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        match command {
            "" => Ok(String::new()),
            "rule" => {
                if Grammar::from_text(rest)?.is_empty() {
                    return Err("expected 'rule A -> rhs'".to_string());
                }
                self.rules.push(rest.to_string());
                Ok(String::new())
            }
            "grammar" => Ok(self.grammar()?.to_string()),
            "clear" => {
                self.rules.clear();
                Ok(String::new())
            }
            "issues" => {
                let grammar = self.grammar()?;
                let issues = GrammarProperties::new(&grammar).issues();
                if issues.is_empty() {
                    return Ok("No issues\n".to_string());
                }
                Ok(issues.iter().map(|issue| format!("{}\n", issue)).collect())
            }
            "derive" => Ok(all_derivations(&self.grammar()?).to_string()),
            "parse" => Ok(derive_sentence(&self.grammar()?, rest).to_string()),
            "regex" => Ok(format!("{}\n", regex_language(rest))),
            "help" => Ok(HELP.to_string()),
            _ => Err(format!("unknown command '{}', try 'help'", command)),
        }
    }

    fn grammar(&self) -> Result<Grammar, String> {
        let grammar = Grammar::from_text(&self.rules.join("\n"))?;
        if grammar.is_empty() {
            return Err("Empty Grammar".to_string());
        }
        Ok(grammar)
    }
}

///////////////////////////////////////////////////////////////////////////////
