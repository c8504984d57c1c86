//! Scanning matcher combinators
//!
//! A second, simpler engine. [`Scanner`]s are combined programmatically
//! instead of being compiled from pattern syntax, and a scan tries every
//! starting offset of the input rather than anchoring at 0. Alternation
//! takes the first branch that fits and repetition is greedy with no
//! give-back, so each offset reports at most one match; nothing here feeds
//! the enumerating matcher in `engine`.

use std::fmt;

/// A region of the scanned input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanMatch {
    /// Byte offset where the match starts
    pub start: usize,
    /// Byte offset one past the end of the match
    pub end: usize,
}

impl ScanMatch {
    /// Slice the matched text out of the input
    pub fn as_str<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start..self.end]
    }

    /// Length of the match in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the match is zero-width
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A matcher built by combining smaller matchers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scanner {
    /// A literal string, possibly longer than one character
    Lit(String),
    /// Any single character
    Any,
    /// The inner scanner, accepted only at offset 0
    Start(Box<Scanner>),
    /// End of input; zero-width
    End,
    /// Each part in order, every one must match
    Seq(Vec<Scanner>),
    /// Left if it matches, otherwise right
    Alt(Box<Scanner>, Box<Scanner>),
    /// Zero or more of the inner scanner, greedy, no give-back
    Star(Box<Scanner>),
    /// One or more of the inner scanner, greedy, no give-back
    Plus(Box<Scanner>),
    /// The inner scanner or nothing, preferring the inner one
    Opt(Box<Scanner>),
}

impl Scanner {
    /// Match a literal string
    pub fn lit(text: impl Into<String>) -> Self {
        Scanner::Lit(text.into())
    }

    /// Match any single character
    pub fn any() -> Self {
        Scanner::Any
    }

    /// Accept `inner` only at the start of the input
    pub fn start(inner: Scanner) -> Self {
        Scanner::Start(Box::new(inner))
    }

    /// Match the end of the input
    pub fn end() -> Self {
        Scanner::End
    }

    /// Match `parts` one after another
    pub fn seq(parts: Vec<Scanner>) -> Self {
        Scanner::Seq(parts)
    }

    /// Match `left`, or `right` when `left` fails
    pub fn alt(left: Scanner, right: Scanner) -> Self {
        Scanner::Alt(Box::new(left), Box::new(right))
    }

    /// Match `inner` zero or more times
    pub fn star(inner: Scanner) -> Self {
        Scanner::Star(Box::new(inner))
    }

    /// Match `inner` one or more times
    pub fn plus(inner: Scanner) -> Self {
        Scanner::Plus(Box::new(inner))
    }

    /// Match `inner` or nothing
    pub fn opt(inner: Scanner) -> Self {
        Scanner::Opt(Box::new(inner))
    }

    /// Try to match at `start`, returning the end offset of the first match
    ///
    /// `start` must lie on a character boundary; every returned offset does.
    pub fn match_at(&self, text: &str, start: usize) -> Option<usize> {
        match self {
            Scanner::Lit(chars) => {
                let end = start + chars.len();
                if end <= text.len() && text[start..].starts_with(chars.as_str()) {
                    Some(end)
                } else {
                    None
                }
            }
            Scanner::Any => text[start..].chars().next().map(|c| start + c.len_utf8()),
            Scanner::Start(inner) => {
                if start != 0 {
                    return None;
                }
                inner.match_at(text, 0)
            }
            Scanner::End => {
                if start == text.len() {
                    Some(start)
                } else {
                    None
                }
            }
            Scanner::Seq(parts) => {
                let mut pos = start;
                for part in parts {
                    pos = part.match_at(text, pos)?;
                }
                Some(pos)
            }
            Scanner::Alt(left, right) => left
                .match_at(text, start)
                .or_else(|| right.match_at(text, start)),
            Scanner::Star(inner) => Some(repeat_greedy(inner, text, start)),
            Scanner::Plus(inner) => {
                let first = inner.match_at(text, start)?;
                Some(repeat_greedy(inner, text, first))
            }
            Scanner::Opt(inner) => Some(inner.match_at(text, start).unwrap_or(start)),
        }
    }

    /// Scan the whole input, reporting each offset's first match
    ///
    /// Matches do not overlap: scanning resumes at the end of each match,
    /// or one character further for a zero-width match.
    pub fn find_all(&self, text: &str) -> Vec<ScanMatch> {
        // start-anchored scanners only ever try offset 0
        if matches!(self, Scanner::Start(_)) {
            return match self.match_at(text, 0) {
                Some(end) => vec![ScanMatch { start: 0, end }],
                None => Vec::new(),
            };
        }
        let mut found = Vec::new();
        let mut pos = 0;
        while pos < text.len() {
            match self.match_at(text, pos) {
                Some(end) => {
                    found.push(ScanMatch { start: pos, end });
                    pos = if end > pos { end } else { next_boundary(text, pos) };
                }
                None => pos = next_boundary(text, pos),
            }
        }
        found
    }
}

/// Apply `inner` as often as it keeps matching and making progress
///
/// Stops on a zero-width match so scanners like `star(opt(..))` terminate.
fn repeat_greedy(inner: &Scanner, text: &str, start: usize) -> usize {
    let mut pos = start;
    while pos < text.len() {
        match inner.match_at(text, pos) {
            Some(end) if end > pos => pos = end,
            _ => break,
        }
    }
    pos
}

/// The byte offset of the character after the one at `pos`
fn next_boundary(text: &str, pos: usize) -> usize {
    match text[pos..].chars().next() {
        Some(c) => pos + c.len_utf8(),
        None => text.len(),
    }
}

impl fmt::Display for Scanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scanner::Lit(chars) => write!(f, "{}", chars),
            Scanner::Any => write!(f, "."),
            Scanner::Start(inner) => write!(f, "^{}", inner),
            Scanner::End => write!(f, "$"),
            Scanner::Seq(parts) => {
                for part in parts {
                    write!(f, "{}", part)?;
                }
                Ok(())
            }
            Scanner::Alt(left, right) => write!(f, "{}|{}", left, right),
            Scanner::Star(inner) => write!(f, "{}*", inner),
            Scanner::Plus(inner) => write!(f, "{}+", inner),
            Scanner::Opt(inner) => write!(f, "{}?", inner),
        }
    }
}
