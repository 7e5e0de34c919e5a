mod built;
mod incremental;
mod zero;

use std::borrow::Borrow;

use num_bigint::BigUint;

pub use built::MerkleSumTree;
pub use incremental::{IncrementalMerkleSumTree, Phase};
pub use zero::ZeroNodes;

use crate::{
    config::LeafDisclosure,
    node::{Entry, Hasher, Node},
    proof::{MembershipProof, ProofLeaf, TargetSumProof},
    validate, TreeError,
};

/// Walk up the tree from a leaf to the root.
/// * `start` - starting leaf.
/// * `path_indices` - `0` if the current node is the left child at that level, `1` otherwise.
/// * `siblings` - All the sibling nodes on the path (from the leaf to the root).
/// * `for_each` - Closure that is executed at each step of the traversal of the tree.
///     * `level: usize` - current level in the tree, `0` being the leaves
///     * `current: &Node` - current node on the way to the root
///     * `sibling: &Node` - sibling node of the current node
///     * `parent: &Node` - parent node of the current node
///
/// Returns the root. `path_indices` and `siblings` must have the same length.
pub fn walk_up<S: Borrow<Node>>(
    hasher: &dyn Hasher,
    start: Node,
    path_indices: &[u8],
    siblings: &[S],
    mut for_each: impl FnMut(usize, &Node, &Node, &Node),
) -> Node {
    let mut current = start;
    for (level, (bit, sibling)) in path_indices.iter().zip(siblings).enumerate() {
        let sibling: &Node = Borrow::<Node>::borrow(sibling);
        // order the children based on the path
        let parent = if *bit == 0 {
            Node::middle(&current, sibling, hasher)
        } else {
            Node::middle(sibling, &current, hasher)
        };
        for_each(level, &current, sibling, &parent);
        current = parent;
    }
    current
}

/// Path indices of the leaf at `index` in a tree of the given depth, from the leaf level up.
pub fn path_indices(index: usize, depth: usize) -> Vec<u8> {
    (0..depth).map(|level| ((index >> level) & 1) as u8).collect()
}

/// Node grid shared by both tree variants: one list of nodes per level plus the root.
///
/// Levels that are not fully populated are completed on the fly with [`ZeroNodes`].
#[derive(Debug, Clone)]
pub struct NodeGrid {
    levels: Vec<Vec<Node>>,
    entries: Vec<Entry>,
    zeroes: ZeroNodes,
    root: Node,
}

impl NodeGrid {
    fn empty(depth: usize, hasher: &dyn Hasher) -> Self {
        let zeroes = ZeroNodes::new(depth, hasher);
        Self {
            levels: vec![Vec::new(); depth],
            entries: Vec::new(),
            root: zeroes.root().clone(),
            zeroes,
        }
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn level(&self, level: usize) -> &[Node] {
        &self.levels[level]
    }

    pub fn leaves(&self) -> &[Node] {
        &self.levels[0]
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn zeroes(&self) -> &ZeroNodes {
        &self.zeroes
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Sibling of the node at `index` in `level`, or the zero node of the level
    /// if the sibling slot is not populated.
    pub fn sibling(&self, level: usize, index: usize) -> &Node {
        self.levels[level]
            .get(index ^ 1)
            .unwrap_or_else(|| self.zeroes.at(level))
    }

    /// Siblings on the path of the leaf at `index`, from the leaf level up.
    pub fn siblings(&self, index: usize) -> Vec<&Node> {
        (0..self.depth())
            .map(|level| self.sibling(level, index >> level))
            .collect()
    }

    /// Recomputes the path of the leaf at `index` with `leaf` in place, then
    /// writes it. Nothing is written unless the whole path was computed.
    fn write_path(&mut self, index: usize, leaf: Node, hasher: &dyn Hasher) {
        let depth = self.depth();
        let mut path = Vec::with_capacity(depth);
        let root = walk_up(
            hasher,
            leaf,
            &path_indices(index, depth),
            &self.siblings(index),
            |_, current, _, _| path.push(current.clone()),
        );
        for (level, node) in path.into_iter().enumerate() {
            let position = index >> level;
            let nodes = &mut self.levels[level];
            if position == nodes.len() {
                nodes.push(node);
            } else {
                nodes[position] = node;
            }
        }
        self.root = root;
    }

    fn index_of(&self, leaf_hash: &BigUint) -> Option<usize> {
        self.leaves().iter().position(|leaf| leaf.hash() == leaf_hash)
    }

    fn merkle_proof(
        &self,
        index: usize,
        disclosure: LeafDisclosure,
    ) -> Result<MembershipProof, TreeError> {
        validate::check_index(index, self.leaves().len())?;
        let leaf = &self.leaves()[index];
        let proof_leaf = match disclosure {
            LeafDisclosure::Hash => ProofLeaf::Hash(leaf.hash().clone()),
            LeafDisclosure::Identifier => {
                ProofLeaf::Identifier(self.entries[index].encoded_identifier())
            }
        };
        MembershipProof::new(
            self.root.hash().clone(),
            proof_leaf,
            leaf.sum().clone(),
            self.siblings(index).into_iter().cloned().collect(),
            path_indices(index, self.depth()),
        )
    }
}

/// Read access shared by [`MerkleSumTree`] and [`IncrementalMerkleSumTree`]:
/// lookups and proof generation over the node grid.
pub trait SumTree {
    /// The node grid of the tree.
    fn grid(&self) -> &NodeGrid;

    /// The hasher the tree was built with.
    fn hasher(&self) -> &dyn Hasher;

    /// How proofs created by this tree identify their leaf.
    fn disclosure(&self) -> LeafDisclosure;

    /// Root node of the tree.
    fn root(&self) -> &Node {
        self.grid().root()
    }

    fn depth(&self) -> usize {
        self.grid().depth()
    }

    /// Maximum number of leaves, `2^depth`.
    fn capacity(&self) -> usize {
        1 << self.depth()
    }

    /// Number of populated leaves.
    fn leaf_count(&self) -> usize {
        self.grid().leaves().len()
    }

    fn leaves(&self) -> &[Node] {
        self.grid().leaves()
    }

    /// Returns the index of the first leaf committing to `entry`, if any.
    fn index_of(&self, entry: &Entry) -> Option<usize> {
        self.grid().index_of(entry.leaf(self.hasher()).hash())
    }

    /// Same as [`SumTree::index_of`] from the raw identifier and balance.
    fn index_of_identifier(&self, identifier: &str, balance: &BigUint) -> Option<usize> {
        let entry = Entry::new(identifier, balance.clone()).ok()?;
        self.index_of(&entry)
    }

    /// Creates a proof of membership of the leaf at `index`.
    fn merkle_proof(&self, index: usize) -> Result<MembershipProof, TreeError> {
        self.grid().merkle_proof(index, self.disclosure())
    }

    /// Creates a proof of membership of the leaf at `index` that also claims the
    /// total of the tree does not exceed `target_sum`.
    fn merkle_proof_with_target_sum(
        &self,
        index: usize,
        target_sum: BigUint,
    ) -> Result<TargetSumProof, TreeError> {
        Ok(TargetSumProof::new(self.merkle_proof(index)?, target_sum))
    }

    /// Verifies a proof with the hasher of this tree.
    fn verify_proof(&self, proof: &MembershipProof) -> bool {
        crate::verify_proof(proof, self.hasher())
    }

    /// Verifies a target sum proof with the hasher of this tree.
    fn verify_proof_with_target_sum(&self, proof: &TargetSumProof) -> bool {
        crate::verify_proof_with_target_sum(proof, self.hasher())
    }
}
