//! Backtracking matcher
//!
//! [`Regex`] compiles a pattern once, then enumerates every distinct prefix
//! of an input that the pattern can match, anchored at offset 0. The search
//! walks the AST recursively: each visit returns every accumulator state it
//! can reach, and the caller merges those lists, so no shared mutable
//! results collection is threaded through the recursion.

use crate::ast::Node;
use crate::error::Result;
use crate::parser::{compress, parse};

/// A compiled pattern
///
/// Holds the parsed AST for the lifetime of all matches against it. No
/// state survives between `matches` calls, so a compiled pattern can be
/// shared read-only across threads.
pub struct Regex {
    root: Node,
    pattern: String,
}

impl Regex {
    /// Compile a pattern
    pub fn new(pattern: &str) -> Result<Self> {
        let root = parse(pattern)?;
        Ok(Regex {
            root,
            pattern: pattern.to_string(),
        })
    }

    /// The pattern this engine was compiled from
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Enumerate every distinct prefix of `text` this pattern matches
    ///
    /// Matching starts at offset 0 only; input beyond a successful prefix is
    /// ignored. Results are deduplicated, first discovery wins, and come
    /// back in discovery order. An empty list is the normal no-match
    /// outcome, not an error. Pathological patterns can reach exponentially
    /// many states; bound the input if the pattern is untrusted.
    pub fn matches(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut out: Vec<String> = Vec::new();
        for state in visit(&self.root, &chars, 0, &[]) {
            let joined: String = state.into_iter().collect();
            if !out.contains(&joined) {
                out.push(joined);
            }
        }
        out
    }

    /// Whether the pattern matches any prefix of `text`
    pub fn is_match(&self, text: &str) -> bool {
        !self.matches(text).is_empty()
    }
}

/// Walk one node, returning every accumulator state reachable from `accum`
/// with the input positioned at `offset`
///
/// Every returned state extends `accum`; the length difference is how many
/// characters the node consumed.
fn visit(node: &Node, text: &[char], offset: usize, accum: &[char]) -> Vec<Vec<char>> {
    match node {
        Node::Literal(c) => match text.get(offset) {
            Some(d) if d == c => {
                let mut next = accum.to_vec();
                next.push(*c);
                vec![next]
            }
            _ => Vec::new(),
        },
        Node::CharSet(members) => match text.get(offset) {
            Some(d) if members.contains(d) => {
                let mut next = accum.to_vec();
                next.push(*d);
                vec![next]
            }
            _ => Vec::new(),
        },
        Node::StartAnchor => {
            if offset == 0 {
                vec![accum.to_vec()]
            } else {
                Vec::new()
            }
        }
        Node::EndAnchor => {
            if offset == text.len() {
                vec![accum.to_vec()]
            } else {
                Vec::new()
            }
        }
        // groups recompile their raw children on every visit
        Node::Group(children) => match compress(children.clone()) {
            Some(compiled) => visit(&compiled, text, offset, accum),
            None => Vec::new(),
        },
        Node::Sequence(left, right) => {
            let mut states = Vec::new();
            for reached in visit(left, text, offset, accum) {
                let advanced = offset + (reached.len() - accum.len());
                states.extend(visit(right, text, advanced, &reached));
            }
            states
        }
        Node::Alternate(left, right) => {
            let mut states = visit(left, text, offset, accum);
            match right {
                Some(node) => states.extend(visit(node, text, offset, accum)),
                // unset right: the empty alternative, succeeds consuming
                // nothing
                None => states.push(accum.to_vec()),
            }
            states
        }
        Node::Repeat(operand) => {
            // zero applications reach the unchanged accumulator
            let mut states = vec![accum.to_vec()];
            let mut frontier = vec![accum.to_vec()];
            while !frontier.is_empty() {
                let mut next = Vec::new();
                for state in frontier {
                    let advanced = offset + (state.len() - accum.len());
                    for reached in visit(operand, text, advanced, &state) {
                        // zero-width operand match, no progress; drop it so
                        // the expansion terminates
                        if reached.len() > state.len() {
                            next.push(reached);
                        }
                    }
                }
                states.extend(next.iter().cloned());
                frontier = next;
            }
            states
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(pattern: &str, text: &str) -> Vec<String> {
        Regex::new(pattern).unwrap().matches(text)
    }

    #[test]
    fn test_literal_pair() {
        assert_eq!(m("ab", "ab"), vec!["ab"]);
        assert_eq!(m("ab", "ax"), Vec::<String>::new());
        assert_eq!(m("ab", "a"), Vec::<String>::new());
    }

    #[test]
    fn test_trailing_input_is_ignored() {
        assert_eq!(m("ab", "abcdef"), vec!["ab"]);
    }

    #[test]
    fn test_char_set() {
        assert_eq!(m("[abc]", "b"), vec!["b"]);
        assert_eq!(m("[abc]", "d"), Vec::<String>::new());
    }

    #[test]
    fn test_set_members_are_not_a_range() {
        // [0-9] lists exactly '0', '-', '9'
        assert_eq!(m("[0-9]", "0"), vec!["0"]);
        assert_eq!(m("[0-9]", "-"), vec!["-"]);
        assert_eq!(m("[0-9]", "5"), Vec::<String>::new());
    }

    #[test]
    fn test_alternation_branches() {
        assert_eq!(m("a|b", "a"), vec!["a"]);
        assert_eq!(m("a|b", "b"), vec!["b"]);
        assert_eq!(m("a|b", "c"), Vec::<String>::new());
    }

    #[test]
    fn test_alternation_unions_both_branches() {
        assert_eq!(m("a|aa", "aa"), vec!["a", "aa"]);
    }

    #[test]
    fn test_group_matches() {
        assert_eq!(m("(a|b)", "a"), vec!["a"]);
        assert_eq!(m("x(a|b)y", "xay"), vec!["xay"]);
        assert_eq!(m("x(a|b)y", "xcy"), Vec::<String>::new());
    }

    #[test]
    fn test_anchors() {
        assert_eq!(m("^a", "a"), vec!["a"]);
        assert_eq!(m("a$", "a"), vec!["a"]);
        assert_eq!(m("a$", "ab"), Vec::<String>::new());
        assert_eq!(m("^$", ""), vec![""]);
        assert_eq!(m("^$", "x"), Vec::<String>::new());
    }

    #[test]
    fn test_bare_start_anchor_matches_empty_prefix() {
        assert_eq!(m("^", "anything"), vec![""]);
    }

    #[test]
    fn test_repeat_enumerates_every_count() {
        assert_eq!(m("[xyz]*", "xyz"), vec!["", "x", "xy", "xyz"]);
        assert_eq!(
            m("[xyz]*", "xyxyz"),
            vec!["", "x", "xy", "xyx", "xyxy", "xyxyz"]
        );
    }

    #[test]
    fn test_repeat_applications_are_consecutive() {
        // the 'a' stops the run; later 'x'/'y' are unreachable
        assert_eq!(m("[xy]*", "xaxy"), vec!["", "x"]);
    }

    #[test]
    fn test_repeat_of_zero_width_operand_terminates() {
        assert_eq!(m("(a|)*", "aa"), vec!["", "a", "aa"]);
    }

    #[test]
    fn test_repeat_inside_sequence() {
        assert_eq!(m("a*b", "b"), vec!["b"]);
        assert_eq!(m("a*b", "aab"), vec!["aab"]);
        assert_eq!(m("a*b", "aax"), Vec::<String>::new());
    }

    #[test]
    fn test_trailing_pipe_matches_empty() {
        assert_eq!(m("a|", "b"), vec![""]);
        assert_eq!(m("a|", "a"), vec!["a", ""]);
    }

    #[test]
    fn test_results_are_distinct() {
        assert_eq!(m("a|a", "a"), vec!["a"]);
    }

    #[test]
    fn test_offsets_count_chars_not_bytes() {
        assert_eq!(m("[αβ]*", "αβ"), vec!["", "α", "αβ"]);
    }

    #[test]
    fn test_is_match() {
        let re = Regex::new("h[aeiou]llo").unwrap();
        assert!(re.is_match("hello"));
        assert!(re.is_match("hallo"));
        assert!(!re.is_match("hxllo"));
    }

    #[test]
    fn test_pattern_accessor() {
        let re = Regex::new("a*").unwrap();
        assert_eq!(re.pattern(), "a*");
    }

    #[test]
    fn test_malformed_pattern_fails_compilation() {
        assert!(Regex::new(")").is_err());
        assert!(Regex::new("*").is_err());
    }
}
