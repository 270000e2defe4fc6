#![deny(warnings)]

use super::scanner::CharScanner;
use super::ParseError;
use std::str::FromStr;

pub const EPSILON: char = '\u{03b5}';

/// Regular expressions over alphanumeric symbols.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegExpr {
    /// the empty string
    Empty,
    Single(char),
    Or(Box<RegExpr>, Box<RegExpr>),
    And(Box<RegExpr>, Box<RegExpr>),
    Star(Box<RegExpr>),
}

impl RegExpr {
    /// Parse the whole of `text`:
    ///
    /// ```text
    /// expr   = term ('|' term)*
    /// term   = factor*
    /// factor = (alnum | '(' expr ')' | 'ε') '*'*
    /// ```
    pub fn parse(text: &str) -> Result<RegExpr, ParseError> {
        let mut scanner = CharScanner::new(text);
        let e = expr(&mut scanner)?;
        match scanner.peek() {
            Some(c) => Err(ParseError::Unexpected(c)),
            None => Ok(e),
        }
    }
}

impl FromStr for RegExpr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegExpr::parse(s)
    }
}

fn starts_factor(c: char) -> bool {
    c == '(' || c == EPSILON || c.is_ascii_alphanumeric()
}

fn expr(scanner: &mut CharScanner) -> Result<RegExpr, ParseError> {
    let mut e = term(scanner)?;
    while scanner.accept('|') {
        e = RegExpr::Or(Box::new(e), Box::new(term(scanner)?));
    }
    Ok(e)
}

// Juxtaposition, left nested onto an initial Empty.
fn term(scanner: &mut CharScanner) -> Result<RegExpr, ParseError> {
    let mut t = RegExpr::Empty;
    while scanner.peek().is_some_and(starts_factor) {
        t = RegExpr::And(Box::new(t), Box::new(factor(scanner)?));
    }
    Ok(t)
}

fn factor(scanner: &mut CharScanner) -> Result<RegExpr, ParseError> {
    let mut f = if let Some(c) = scanner.accept_if(|c| c.is_ascii_alphanumeric()) {
        RegExpr::Single(c)
    } else if scanner.accept('(') {
        let inner = expr(scanner)?;
        scanner.expect(')')?;
        inner
    } else if scanner.accept(EPSILON) {
        RegExpr::Empty
    } else {
        return Err(ParseError::FactorExpected);
    };
    while scanner.accept('*') {
        f = RegExpr::Star(Box::new(f));
    }
    Ok(f)
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{factor, RegExpr};
    use crate::regex::scanner::CharScanner;
    use crate::regex::ParseError;

    #[test]
    fn factor_needs_a_start() {
        for text in [")", "|b", "*", ""] {
            let mut scanner = CharScanner::new(text);
            assert_eq!(factor(&mut scanner), Err(ParseError::FactorExpected), "{:?}", text);
            assert_eq!(scanner.peek(), text.chars().next());
        }
        assert_eq!(ParseError::FactorExpected.to_string(), "letter or '(' expected");
    }

    #[test]
    fn factor_with_stars() {
        let mut scanner = CharScanner::new("a**b");
        let a = RegExpr::Single('a');
        assert_eq!(factor(&mut scanner), Ok(RegExpr::Star(Box::new(RegExpr::Star(Box::new(a))))));
        assert_eq!(scanner.peek(), Some('b'));
    }
}
