//! Zero node chain used to pad a tree without materializing its empty slots.

use crate::node::{Entry, Hasher, Node};

/// Precomputed zero nodes, one per level.
///
/// `zeroes[0]` is the leaf of [`Entry::zero`], `zeroes[i]` combines two
/// `zeroes[i - 1]` and `zeroes[depth]` is the root of an empty tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroNodes(Vec<Node>);

impl ZeroNodes {
    /// Builds the zero chain of a tree of the given depth. This performs `depth + 1` hashes.
    pub fn new(depth: usize, hasher: &dyn Hasher) -> Self {
        let mut zeroes = Vec::with_capacity(depth + 1);
        zeroes.push(Entry::zero().leaf(hasher));
        for i in 1..=depth {
            zeroes.push(Node::middle(&zeroes[i - 1], &zeroes[i - 1], hasher));
        }
        Self(zeroes)
    }

    pub fn depth(&self) -> usize {
        self.0.len() - 1
    }

    /// Zero node at `level`, `0` being the leaf level.
    pub fn at(&self, level: usize) -> &Node {
        &self.0[level]
    }

    /// Root of a tree with no populated leaf.
    pub fn root(&self) -> &Node {
        &self.0[self.depth()]
    }

    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }
}
