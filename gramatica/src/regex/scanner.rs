#![deny(warnings)]

use super::ParseError;

/// Character cursor for the recursive descent parser. Characters are
/// only consumed through `accept*` so a failed match never advances.
pub struct CharScanner {
    buf: Vec<char>,
    pos: usize,
}

impl CharScanner {
    pub fn new(source: &str) -> CharScanner {
        CharScanner { buf: source.chars().collect(), pos: 0 }
    }

    /// Next character, `None` at the end of input.
    pub fn peek(&self) -> Option<char> {
        self.buf.get(self.pos).copied()
    }

    pub fn accept(&mut self, what: char) -> bool {
        self.accept_if(|c| c == what).is_some()
    }

    // Consume the next char if it satisfies `pred`.
    pub fn accept_if<F: Fn(char) -> bool>(&mut self, pred: F) -> Option<char> {
        let next = self.peek().filter(|&c| pred(c))?;
        self.pos += 1;
        Some(next)
    }

    pub fn expect(&mut self, what: char) -> Result<(), ParseError> {
        if self.accept(what) {
            return Ok(());
        }
        Err(ParseError::Mismatch {
            found: self.peek().map(String::from).unwrap_or_default(),
            expected: what,
        })
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::CharScanner;
    use crate::regex::ParseError;

    #[test]
    fn accept_does_not_advance_on_mismatch() {
        let mut s = CharScanner::new("ab");
        assert!(!s.accept('b'));
        assert_eq!(s.peek(), Some('a'));
        assert!(s.accept('a'));
        assert_eq!(s.accept_if(char::is_alphanumeric), Some('b'));
        assert_eq!(s.peek(), None);
        assert_eq!(s.accept_if(|_| true), None);
    }

    #[test]
    fn expect_reports_what_was_found() {
        let mut s = CharScanner::new("x");
        assert_eq!(s.expect(')'), Err(ParseError::Mismatch { found: "x".to_string(), expected: ')' }));
        assert!(s.expect('x').is_ok());
        assert_eq!(s.expect(')').unwrap_err().to_string(), "'' found when expecting ')'");
    }
}
