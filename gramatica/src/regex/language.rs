#![deny(warnings)]

use super::parser::RegExpr;

/// A possibly infinite regular language, enumerated by length. Level `n`
/// holds the strings of length `n` in order and without duplicates.
/// Levels are computed on demand and cached, each node of the expression
/// keeps its own cache, which is what lets a starred language read back
/// its earlier levels.
pub struct Language {
    source: Source,
    levels: Vec<Vec<String>>,
    // no levels beyond those cached
    exhausted: bool,
}

enum Source {
    Empty,
    Single(char),
    Or(Box<Language>, Box<Language>),
    And(Box<Language>, Box<Language>),
    Star(Box<Language>),
}

impl Language {
    fn new(source: Source) -> Language {
        Language { source, levels: Vec::new(), exhausted: false }
    }

    /// Only the empty string.
    pub fn empty() -> Language {
        Language::new(Source::Empty)
    }

    pub fn single(c: char) -> Language {
        Language::new(Source::Single(c))
    }

    pub fn or(l1: Language, l2: Language) -> Language {
        Language::new(Source::Or(Box::new(l1), Box::new(l2)))
    }

    /// Every string of `l1` followed by every string of `l2`.
    pub fn and(l1: Language, l2: Language) -> Language {
        Language::new(Source::And(Box::new(l1), Box::new(l2)))
    }

    pub fn star(l: Language) -> Language {
        Language::new(Source::Star(Box::new(l)))
    }

    /// Strings of length `n`, `None` once the language has no strings of
    /// length `n` or longer.
    pub fn level(&mut self, n: usize) -> Option<&[String]> {
        while self.levels.len() <= n && !self.exhausted {
            match self.next_level() {
                Some(level) => self.levels.push(level),
                None => self.exhausted = true,
            }
        }
        self.levels.get(n).map(Vec::as_slice)
    }

    // Level right after the cached ones.
    fn next_level(&mut self) -> Option<Vec<String>> {
        let Language { source, levels, .. } = self;
        let n = levels.len();
        match source {
            Source::Empty => (n == 0).then(|| vec![String::new()]),
            Source::Single(c) => match n {
                0 => Some(Vec::new()),
                1 => Some(vec![c.to_string()]),
                _ => None,
            },
            Source::Or(l1, l2) => match (l1.level(n), l2.level(n)) {
                (None, None) => None,
                (xs, ys) => Some(union(xs.unwrap_or_default(), ys.unwrap_or_default())),
            },
            // all x + y with x in level i of l1 and y in level n - i of l2
            Source::And(l1, l2) => {
                let mut level: Option<Vec<String>> = None;
                for i in 0..=n {
                    if let (Some(xs), Some(ys)) = (l1.level(i), l2.level(n - i)) {
                        let joined = append(xs, ys);
                        level = Some(union(level.as_deref().unwrap_or_default(), &joined));
                    }
                }
                level
            }
            // L* = {""} + (L minus its empty string) L*
            Source::Star(l) => {
                if n == 0 {
                    return Some(vec![String::new()]);
                }
                // nothing but the empty string to repeat
                l.level(1)?;
                let mut level = Vec::new();
                for i in 1..=n {
                    if let Some(xs) = l.level(i) {
                        level = union(&level, &append(xs, &levels[n - i]));
                    }
                }
                Some(level)
            }
        }
    }

    /// Lazy sequence of the levels, in order of length.
    pub fn levels(&mut self) -> impl Iterator<Item = Vec<String>> + '_ {
        (0..).map_while(move |n| self.level(n).map(<[String]>::to_vec))
    }

    /// Every string of the language, by length and then alphabetically.
    /// Infinite for infinite languages, callers bound the consumption.
    pub fn strings(&mut self) -> impl Iterator<Item = String> + '_ {
        self.levels().flatten()
    }
}

impl RegExpr {
    pub fn language(&self) -> Language {
        match self {
            RegExpr::Empty => Language::empty(),
            RegExpr::Single(c) => Language::single(*c),
            RegExpr::Or(e1, e2) => Language::or(e1.language(), e2.language()),
            RegExpr::And(e1, e2) => Language::and(e1.language(), e2.language()),
            RegExpr::Star(e) => Language::star(e.language()),
        }
    }
}

/// Merge two ordered sets of strings.
pub fn union(xs: &[String], ys: &[String]) -> Vec<String> {
    let mut result = Vec::with_capacity(xs.len() + ys.len());
    let (mut i, mut j) = (0, 0);
    while i < xs.len() && j < ys.len() {
        match xs[i].cmp(&ys[j]) {
            std::cmp::Ordering::Less => { result.push(xs[i].clone()); i += 1; }
            std::cmp::Ordering::Greater => { result.push(ys[j].clone()); j += 1; }
            std::cmp::Ordering::Equal => { result.push(xs[i].clone()); i += 1; j += 1; }
        }
    }
    result.extend_from_slice(&xs[i..]);
    result.extend_from_slice(&ys[j..]);
    result
}

/// Every concatenation of a string of `xs` with a string of `ys`, as an
/// ordered set.
pub fn append(xs: &[String], ys: &[String]) -> Vec<String> {
    let mut joined: Vec<String> = xs.iter()
        .flat_map(|x| ys.iter().map(move |y| format!("{}{}", x, y)))
        .collect();
    joined.sort();
    joined.dedup();
    joined
}
