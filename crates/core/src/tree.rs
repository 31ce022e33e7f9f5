//! Decoding tree for prefix codes.
//!
//! The tree is an arena of nodes addressed by integer handles. The root is
//! always node 0; each node has an optional child per bit and an optional
//! decoded character. A code `c` for character `x` is the path from the root
//! to the node holding `x`:
//!
//! ```text
//!   table { a: "11", b: "1001", z: "0101" }
//!
//!          root
//!         /    \
//!        0      1
//!         \    / \
//!          1  0   [a]
//!         /   /
//!        0   0
//!         \   \
//!         [z] [b]
//! ```
//!
//! # Decoding
//!
//! Decoding walks the bit string from the root. Arriving at a node with a
//! value emits it and resets the walk to the root. When input runs out
//! mid-path, the leftover bits are padding from the last chunk and are
//! discarded without error. The same holds when an incomplete table leaves
//! no branch for the padding: an all-zero tail from a code boundary is
//! dropped, anything else is `TreeError::NoPath`.

use std::sync::OnceLock;

use crate::error::{Result, TreeError};
use crate::table::CodeTable;

/// Handle of a node inside a [`DecodingTree`].
pub type NodeId = usize;

/// Handle of the root node.
pub const ROOT: NodeId = 0;

static STANDARD_TREE: OnceLock<DecodingTree> = OnceLock::new();

/// One arena slot: children indexed by bit value, plus the decoded value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Node {
    children: [Option<NodeId>; 2],
    value: Option<char>,
}

/// Binary tree derived from a code table, read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodingTree {
    nodes: Vec<Node>,
}

impl DecodingTree {
    /// Build the tree for `table`.
    ///
    /// Prefix freedom is assumed, not checked. If one code prefixes another,
    /// the shorter one shadows the longer during decoding.
    pub fn build(table: &CodeTable) -> Self {
        let mut tree = Self {
            nodes: vec![Node::default()],
        };

        for (ch, code) in table.iter() {
            tree.insert(code, ch);
        }

        tree
    }

    /// The tree for the standard table, built once on first access.
    pub fn standard() -> &'static DecodingTree {
        STANDARD_TREE.get_or_init(|| Self::build(CodeTable::standard()))
    }

    /// Walk/create the path for `code` and store `value` at its end.
    fn insert(&mut self, code: &str, value: char) {
        let mut current = ROOT;

        for bit in code.chars() {
            let slot = match bit {
                '0' => 0,
                _ => 1,
            };
            current = match self.nodes[current].children[slot] {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[current].children[slot] = Some(next);
                    next
                }
            };
        }

        self.nodes[current].value = Some(value);
    }

    /// Decode a bit string into characters.
    ///
    /// # Errors
    /// - `TreeError::InvalidBit` if the input contains a non-binary character
    /// - `TreeError::NoPath` if a bit leads off the tree (the table does not
    ///   cover that prefix) and the rest of the input is not zero padding
    pub fn decode(&self, bits: &str) -> Result<String> {
        let mut out = String::new();
        let mut current = ROOT;
        let mut pending = 0usize;
        // Byte offset where the current code started
        let mut code_start = 0usize;

        for (position, (offset, bit)) in bits.char_indices().enumerate() {
            let slot = match bit {
                '0' => 0,
                '1' => 1,
                _ => return Err(TreeError::InvalidBit { bit, position }.into()),
            };

            if pending == 0 {
                code_start = offset;
            }

            current = match self.nodes[current].children[slot] {
                Some(next) => next,
                // Padding starts at a code boundary and is all zeros
                None if bits[code_start..].chars().all(|b| b == '0') => {
                    tracing::trace!(
                        bits = bits.len() - code_start,
                        "discarding zero padding that leaves the tree"
                    );
                    return Ok(out);
                }
                None => return Err(TreeError::NoPath { position }.into()),
            };
            pending += 1;

            if let Some(value) = self.nodes[current].value {
                out.push(value);
                current = ROOT;
                pending = 0;
            }
        }

        if pending > 0 {
            tracing::trace!(bits = pending, "discarding trailing bits that complete no code");
        }

        Ok(out)
    }

    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Child of `node` along `bit` (`false` = '0', `true` = '1').
    pub fn child(&self, node: NodeId, bit: bool) -> Option<NodeId> {
        self.nodes.get(node)?.children[usize::from(bit)]
    }

    /// Character stored at `node`, if a code ends there.
    pub fn value(&self, node: NodeId) -> Option<char> {
        self.nodes.get(node)?.value
    }

    /// Follow a path of '0'/'1' characters from the root.
    ///
    /// Returns `None` if the path leaves the tree or contains other characters.
    pub fn find(&self, path: &str) -> Option<NodeId> {
        path.chars().try_fold(ROOT, |node, bit| match bit {
            '0' => self.child(node, false),
            '1' => self.child(node, true),
            _ => None,
        })
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree holds only the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}
