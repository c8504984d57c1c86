//! Abstract syntax tree for compiled patterns
//!
//! A pattern parses into a single [`Node`]. The tree is a closed set of
//! variants; the matcher dispatches over it exhaustively, so there is no
//! "unknown node" failure mode.

use std::fmt;

/// One node of a compiled pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single literal character
    Literal(char),

    /// A character set; matches one input character that is a member
    CharSet(Vec<char>),

    /// `^`: succeeds only at offset 0, consumes nothing
    StartAnchor,

    /// `$`: succeeds only at end of input, consumes nothing
    EndAnchor,

    /// Zero or more consecutive repetitions of the operand
    Repeat(Box<Node>),

    /// One alternative or the other
    ///
    /// `right` is `None` while the node is partially built: on the parser's
    /// working list, inside a `Group`'s raw children, or in a pattern whose
    /// final alternative is empty (trailing `|`). The matcher treats an
    /// unset right as matching the empty string.
    Alternate(Box<Node>, Option<Box<Node>>),

    /// Match `left` fully, then continue with `right`
    Sequence(Box<Node>, Box<Node>),

    /// A parenthesized sub-pattern
    ///
    /// Children stay a raw node list and are folded into one node every
    /// time the group is visited during matching, never at parse time.
    Group(Vec<Node>),
}

impl Node {
    /// Create a literal node
    pub fn literal(c: char) -> Self {
        Node::Literal(c)
    }

    /// Create a character-set node
    pub fn char_set(members: Vec<char>) -> Self {
        Node::CharSet(members)
    }

    /// Create a repetition of `operand`
    pub fn repeat(operand: Node) -> Self {
        Node::Repeat(Box::new(operand))
    }

    /// Create a completed alternation
    pub fn alternate(left: Node, right: Node) -> Self {
        Node::Alternate(Box::new(left), Some(Box::new(right)))
    }

    /// Create a partially-built alternation whose right side is still unset
    pub fn pending_alternate(left: Node) -> Self {
        Node::Alternate(Box::new(left), None)
    }

    /// Create a concatenation of two nodes
    pub fn sequence(left: Node, right: Node) -> Self {
        Node::Sequence(Box::new(left), Box::new(right))
    }

    /// Create a group over a raw child list
    pub fn group(children: Vec<Node>) -> Self {
        Node::Group(children)
    }

    /// Render the node back to pattern syntax
    ///
    /// Meant for diagnostics and demo output; it does not promise to
    /// reproduce the original pattern byte for byte (an unterminated `[`
    /// tokenizes as a literal and renders as one).
    pub fn to_pattern_string(&self) -> String {
        match self {
            Node::Literal(c) => c.to_string(),
            Node::CharSet(members) => {
                format!("[{}]", members.iter().collect::<String>())
            }
            Node::StartAnchor => "^".to_string(),
            Node::EndAnchor => "$".to_string(),
            Node::Repeat(operand) => format!("{}*", operand.to_pattern_string()),
            Node::Alternate(left, Some(right)) => {
                format!("{}|{}", left.to_pattern_string(), right.to_pattern_string())
            }
            Node::Alternate(left, None) => format!("{}|", left.to_pattern_string()),
            Node::Sequence(left, right) => {
                format!("{}{}", left.to_pattern_string(), right.to_pattern_string())
            }
            Node::Group(children) => {
                let inner: String = children.iter().map(|n| n.to_pattern_string()).collect();
                format!("({})", inner)
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_pattern_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal() {
        assert_eq!(Node::literal('a').to_pattern_string(), "a");
    }

    #[test]
    fn test_char_set() {
        let node = Node::char_set(vec!['a', 'b', 'c']);
        assert_eq!(node.to_pattern_string(), "[abc]");
    }

    #[test]
    fn test_anchors() {
        assert_eq!(Node::StartAnchor.to_pattern_string(), "^");
        assert_eq!(Node::EndAnchor.to_pattern_string(), "$");
    }

    #[test]
    fn test_repeat() {
        let node = Node::repeat(Node::literal('a'));
        assert_eq!(node.to_pattern_string(), "a*");
    }

    #[test]
    fn test_sequence() {
        let node = Node::sequence(
            Node::sequence(Node::literal('a'), Node::literal('b')),
            Node::literal('c'),
        );
        assert_eq!(node.to_pattern_string(), "abc");
    }

    #[test]
    fn test_alternate() {
        let node = Node::alternate(Node::literal('a'), Node::literal('b'));
        assert_eq!(node.to_pattern_string(), "a|b");
    }

    #[test]
    fn test_pending_alternate_renders_open() {
        let node = Node::pending_alternate(Node::literal('a'));
        assert_eq!(node.to_pattern_string(), "a|");
    }

    #[test]
    fn test_group() {
        let node = Node::group(vec![
            Node::pending_alternate(Node::literal('a')),
            Node::literal('b'),
        ]);
        assert_eq!(node.to_pattern_string(), "(a|b)");
    }

    #[test]
    fn test_display_matches_render() {
        let node = Node::repeat(Node::char_set(vec!['x', 'y']));
        assert_eq!(node.to_string(), node.to_pattern_string());
    }
}
