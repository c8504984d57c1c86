//! Prex Core Library
//!
//! A miniature regex engine that enumerates every way a pattern can match
//! the start of its input.

pub mod ast;
pub mod engine;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod scanner;

pub use ast::Node;
pub use engine::Regex;
pub use error::{PatternError, Result};
pub use lexer::{Token, TokenKind, tokenize};
pub use parser::parse;
pub use scanner::{ScanMatch, Scanner};

/// Compile `pattern` and collect every match anchored at the start of `text`
///
/// Convenience for one-off checks; compile a [`Regex`] when a pattern is
/// reused across inputs.
pub fn match_all(pattern: &str, text: &str) -> Result<Vec<String>> {
    Ok(Regex::new(pattern)?.matches(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end() {
        // full pipeline: pattern -> tokens -> tree -> matches
        let matches = match_all("h[aeiou]llo", "hello world").unwrap();
        assert_eq!(matches, vec!["hello"]);
    }

    #[test]
    fn test_reusable_regex() {
        let regex = Regex::new("ab*").unwrap();
        assert_eq!(regex.matches("abbb"), vec!["a", "ab", "abb", "abbb"]);
        assert_eq!(regex.matches("xa"), Vec::<String>::new());
    }

    #[test]
    fn test_bad_pattern_reports_position() {
        let err = match_all("a)b", "ab").unwrap_err();
        assert_eq!(err, PatternError::UnmatchedGroupClose { position: 1 });
    }
}
