//! One-pass pattern parser
//!
//! Tokens fold onto a single working list; there is no grammar table and no
//! recursion over the token stream. Postfix `*` and infix `|` pop their
//! operand off the list as they arrive, while `(`/`)` bracket raw sub-lists
//! into [`Node::Group`]s. A final [`compress`] fold merges the list into one
//! tree. Alternation binds lowest: `ab|c` parses as `(ab)|c`, and `a|b|c`
//! collects alternatives left to right as `((a|b))|c`.
//!
//! Group children are kept as the raw sub-list; the matcher re-runs the same
//! `compress` fold on them every time the group is visited.

use crate::ast::Node;
use crate::error::{PatternError, Result};
use crate::lexer::{Token, TokenKind, tokenize};

/// An entry on the parser's working list
enum Item {
    /// A finished (or pending-alternate) node
    Node(Node),
    /// Sentinel for an open `(`, with its position for diagnostics
    GroupOpen(usize),
}

/// Parse a pattern into a single AST node
///
/// Fails with a [`PatternError`] naming the violated invariant; no partial
/// tree is ever returned.
pub fn parse(pattern: &str) -> Result<Node> {
    let tokens = tokenize(pattern);
    let last = tokens.len().saturating_sub(1);
    let mut work: Vec<Item> = Vec::new();
    for (index, token) in tokens.into_iter().enumerate() {
        handle(&mut work, token, index == last)?;
    }
    let mut nodes = Vec::with_capacity(work.len());
    for item in work {
        match item {
            Item::Node(node) => nodes.push(node),
            Item::GroupOpen(position) => {
                return Err(PatternError::UnclosedGroup { position });
            }
        }
    }
    compress(nodes).ok_or(PatternError::EmptyPattern)
}

/// Apply one token to the working list
fn handle(work: &mut Vec<Item>, token: Token, is_last: bool) -> Result<()> {
    let position = token.position;
    match token.kind {
        TokenKind::Literal(c) => work.push(Item::Node(Node::Literal(c))),
        TokenKind::CharSet(members) => work.push(Item::Node(Node::CharSet(members))),
        TokenKind::StartAnchor => {
            if !work.is_empty() {
                return Err(PatternError::MisplacedStartAnchor { position });
            }
            work.push(Item::Node(Node::StartAnchor));
        }
        TokenKind::EndAnchor => {
            if !is_last {
                return Err(PatternError::MisplacedEndAnchor { position });
            }
            work.push(Item::Node(Node::EndAnchor));
        }
        TokenKind::GroupStart => work.push(Item::GroupOpen(position)),
        TokenKind::GroupEnd => close_group(work, position)?,
        TokenKind::Repeat => {
            let operand = match pop_node(work) {
                Some(node) => node,
                None => return Err(PatternError::MissingRepeatOperand { position }),
            };
            work.push(Item::Node(Node::repeat(operand)));
        }
        TokenKind::Alternate => {
            let operand = match pop_node(work) {
                Some(node) => node,
                None => return Err(PatternError::MissingAlternateOperand { position }),
            };
            // a doubled `|` pops the alternate it just opened; keep it as is
            let node = match operand {
                pending @ Node::Alternate(_, None) => pending,
                other => Node::pending_alternate(other),
            };
            work.push(Item::Node(node));
        }
    }
    Ok(())
}

/// Pop the most recent node, refusing to reach across an open `(`
fn pop_node(work: &mut Vec<Item>) -> Option<Node> {
    match work.pop() {
        Some(Item::Node(node)) => Some(node),
        Some(marker @ Item::GroupOpen(_)) => {
            work.push(marker);
            None
        }
        None => None,
    }
}

/// Close the innermost open group, wrapping the drained nodes as its raw
/// child list
fn close_group(work: &mut Vec<Item>, position: usize) -> Result<()> {
    let mut children = Vec::new();
    loop {
        match work.pop() {
            Some(Item::Node(node)) => children.push(node),
            Some(Item::GroupOpen(_)) => break,
            None => return Err(PatternError::UnmatchedGroupClose { position }),
        }
    }
    if children.is_empty() {
        return Err(PatternError::EmptyGroup { position });
    }
    children.reverse();
    work.push(Item::Node(Node::Group(children)));
    Ok(())
}

/// Fold a raw node list into one tree
///
/// A plain node extends the running sequence. A pending alternate closes the
/// running sequence around the operand it captured at `|`-time, making that
/// one alternative, and chains alternatives left to right. Returns `None`
/// for an empty list. The matcher reuses this fold for lazy group
/// compilation, so it must stay free of side effects.
pub(crate) fn compress(items: Vec<Node>) -> Option<Node> {
    // completed alternatives, collected left to right
    let mut chain: Option<Node> = None;
    // the sequence under construction since the last `|`
    let mut seq: Option<Node> = None;
    for item in items {
        match item {
            Node::Alternate(first, None) => {
                let alternative = match seq.take() {
                    Some(before) => Node::sequence(before, *first),
                    None => *first,
                };
                chain = Some(match chain.take() {
                    Some(left) => Node::alternate(left, alternative),
                    None => alternative,
                });
            }
            node => {
                seq = Some(match seq.take() {
                    Some(left) => Node::sequence(left, node),
                    None => node,
                });
            }
        }
    }
    match (chain, seq) {
        (Some(left), Some(right)) => Some(Node::alternate(left, right)),
        // trailing `|`: the right side stays unset and matches empty
        (Some(left), None) => Some(Node::pending_alternate(left)),
        (None, Some(node)) => Some(node),
        (None, None) => None,
    }
}
