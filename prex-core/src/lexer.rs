//! Tokenizer for pattern strings
//!
//! Converts a pattern into a flat stream of [`Token`]s for the parser.
//! Tokenizing never fails: an unterminated character set falls back to a
//! literal `[`, and `^`/`$` outside their anchor positions are plain
//! literals.

use std::fmt;

/// A single token with its source position
///
/// `position` is the character index in the pattern, kept for diagnostics
/// only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is
    pub kind: TokenKind,
    /// Character index in the pattern where the token starts
    pub position: usize,
}

/// The kinds of token a pattern can contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A single literal character
    Literal(char),
    /// A character set `[...]`; members are listed, duplicates are harmless
    CharSet(Vec<char>),
    /// Postfix `*`, zero or more of the preceding element
    Repeat,
    /// Infix `|`
    Alternate,
    /// `(`
    GroupStart,
    /// `)`
    GroupEnd,
    /// `^` at index 0
    StartAnchor,
    /// `$` at the last index
    EndAnchor,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Literal(c) => write!(f, "literal `{}`", c),
            TokenKind::CharSet(members) => {
                write!(f, "set `[{}]`", members.iter().collect::<String>())
            }
            TokenKind::Repeat => write!(f, "`*`"),
            TokenKind::Alternate => write!(f, "`|`"),
            TokenKind::GroupStart => write!(f, "`(`"),
            TokenKind::GroupEnd => write!(f, "`)`"),
            TokenKind::StartAnchor => write!(f, "start anchor `^`"),
            TokenKind::EndAnchor => write!(f, "end anchor `$`"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// The fixed single-character tokens
///
/// `^` and `$` are positional and resolved by `tokenize` itself.
fn simple_kind(c: char) -> Option<TokenKind> {
    match c {
        '*' => Some(TokenKind::Repeat),
        '|' => Some(TokenKind::Alternate),
        '(' => Some(TokenKind::GroupStart),
        ')' => Some(TokenKind::GroupEnd),
        _ => None,
    }
}

/// Scan a character set opened at `open`, returning its members and the
/// index of the closing `]`, or `None` when the set never closes
fn scan_set(chars: &[char], open: usize) -> Option<(Vec<char>, usize)> {
    let close = chars[open + 1..].iter().position(|&c| c == ']')? + open + 1;
    Some((chars[open + 1..close].to_vec(), close))
}

/// Tokenize a whole pattern
///
/// One token per character, except `[...]` which consumes a run. Source
/// order is preserved.
pub fn tokenize(pattern: &str) -> Vec<Token> {
    let chars: Vec<char> = pattern.chars().collect();
    let last = chars.len().saturating_sub(1);
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if let Some(kind) = simple_kind(c) {
            tokens.push(Token { kind, position: i });
            i += 1;
            continue;
        }
        match c {
            '[' => match scan_set(&chars, i) {
                Some((members, close)) => {
                    tokens.push(Token {
                        kind: TokenKind::CharSet(members),
                        position: i,
                    });
                    i = close + 1;
                }
                None => {
                    // no closing `]`: the bracket is an ordinary literal
                    tokens.push(Token {
                        kind: TokenKind::Literal('['),
                        position: i,
                    });
                    i += 1;
                }
            },
            '^' if i == 0 => {
                tokens.push(Token {
                    kind: TokenKind::StartAnchor,
                    position: i,
                });
                i += 1;
            }
            '$' if i == last => {
                tokens.push(Token {
                    kind: TokenKind::EndAnchor,
                    position: i,
                });
                i += 1;
            }
            _ => {
                tokens.push(Token {
                    kind: TokenKind::Literal(c),
                    position: i,
                });
                i += 1;
            }
        }
    }
    tokens
}
