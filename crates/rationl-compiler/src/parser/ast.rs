//! Arena-allocated syntax tree.
//!
//! Nodes live in one `Vec` and refer to their children by `NodeId`. Children
//! are always pushed before their parent, so every id a node holds is smaller
//! than its own and the tree has no cycles.

use std::fmt::Write;
use std::ops::Range;

use rationl_automata::Look;
use rowan::TextRange;

use super::class_set::ClassSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize);
        Self(index as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Matches the empty string: an empty pattern, branch or group.
    Empty,
    Literal(char),
    Class(ClassSet),
    Concat(Vec<NodeId>),
    Alternate(Vec<NodeId>),
    /// `max: None` is unbounded. `min <= max` always holds.
    Repeat {
        child: NodeId,
        min: u32,
        max: Option<u32>,
    },
    /// `index` is the 1-based capture number; `None` for `(?:...)`.
    Group {
        child: NodeId,
        index: Option<u32>,
    },
    Anchor(Look),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ast {
    nodes: Vec<Node>,
    ranges: Vec<TextRange>,
    root: NodeId,
    group_count: u32,
}

impl Ast {
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Byte range of the pattern text the node was parsed from.
    pub fn range(&self, id: NodeId) -> Range<usize> {
        let range = self.ranges[id.index()];
        usize::from(range.start())..usize::from(range.end())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of capturing groups.
    pub fn group_count(&self) -> u32 {
        self.group_count
    }

    /// Indented tree view, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let indent = "  ".repeat(depth);
            let node = self.node(id);
            let _ = match node {
                Node::Empty => writeln!(out, "{indent}Empty"),
                Node::Literal(c) => writeln!(out, "{indent}Literal {c:?}"),
                Node::Class(set) => writeln!(out, "{indent}Class {set:?}"),
                Node::Concat(_) => writeln!(out, "{indent}Concat"),
                Node::Alternate(_) => writeln!(out, "{indent}Alternate"),
                Node::Repeat { min, max, .. } => match max {
                    Some(max) => writeln!(out, "{indent}Repeat {{{min},{max}}}"),
                    None => writeln!(out, "{indent}Repeat {{{min},}}"),
                },
                Node::Group { index, .. } => match index {
                    Some(index) => writeln!(out, "{indent}Group #{index}"),
                    None => writeln!(out, "{indent}Group"),
                },
                Node::Anchor(look) => writeln!(out, "{indent}Anchor {}", look.as_char()),
            };
            match node {
                Node::Concat(children) | Node::Alternate(children) => {
                    stack.extend(children.iter().rev().map(|&c| (c, depth + 1)));
                }
                Node::Repeat { child, .. } | Node::Group { child, .. } => {
                    stack.push((*child, depth + 1));
                }
                _ => {}
            }
        }
        out
    }
}

/// Append-only node arena used while parsing.
#[derive(Debug, Default)]
pub(crate) struct AstBuilder {
    nodes: Vec<Node>,
    ranges: Vec<TextRange>,
}

impl AstBuilder {
    pub fn push(&mut self, node: Node, range: TextRange) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        self.ranges.push(range);
        id
    }

    pub fn range(&self, id: NodeId) -> TextRange {
        self.ranges[id.index()]
    }

    pub fn finish(self, root: NodeId, group_count: u32) -> Ast {
        Ast {
            nodes: self.nodes,
            ranges: self.ranges,
            root,
            group_count,
        }
    }
}
