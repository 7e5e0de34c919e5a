//! Append-only Merkle sum tree of fixed depth.

use std::sync::Arc;

use log::{debug, trace};

use super::{NodeGrid, SumTree, ZeroNodes};
use crate::{
    config::LeafDisclosure,
    node::{Entry, Hasher},
    validate, TreeError,
};

/// Lifecycle phase of an [`IncrementalMerkleSumTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Leaves can still be inserted.
    Growing,
    /// Every leaf slot is populated, [`IncrementalMerkleSumTree::insert`] fails.
    Full,
}

/// Incremental Merkle sum tree.
///
/// Leaves are appended one at a time up to `2^depth`. Slots that were never
/// populated are never stored: the [`ZeroNodes`] of their level stand in for
/// them, so an insertion or an update costs `depth` hashes whatever the capacity.
pub struct IncrementalMerkleSumTree {
    grid: NodeGrid,
    hasher: Arc<dyn Hasher>,
    disclosure: LeafDisclosure,
}

impl IncrementalMerkleSumTree {
    /// Creates an empty tree. Fails with [`TreeError::InvalidDepth`] if `depth` is not in `[1, 32]`.
    pub fn new(depth: usize, hasher: Arc<dyn Hasher>) -> Result<Self, TreeError> {
        Self::with_disclosure(depth, hasher, LeafDisclosure::default())
    }

    /// Creates an empty tree whose proofs identify their leaf as `disclosure` says.
    pub fn with_disclosure(
        depth: usize,
        hasher: Arc<dyn Hasher>,
        disclosure: LeafDisclosure,
    ) -> Result<Self, TreeError> {
        let depth = validate::check_depth(depth)?;
        let grid = NodeGrid::empty(depth, hasher.as_ref());
        debug!("created incremental tree of depth {}", depth);
        Ok(Self {
            grid,
            hasher,
            disclosure,
        })
    }

    pub fn phase(&self) -> Phase {
        if self.leaf_count() < self.capacity() {
            Phase::Growing
        } else {
            Phase::Full
        }
    }

    pub fn entries(&self) -> &[Entry] {
        self.grid.entries()
    }

    pub fn zeroes(&self) -> &ZeroNodes {
        self.grid.zeroes()
    }

    /// Appends a leaf and returns its index.
    pub fn insert(&mut self, entry: Entry) -> Result<usize, TreeError> {
        let index = self.leaf_count();
        if self.phase() == Phase::Full {
            return Err(TreeError::TreeFull {
                capacity: self.capacity(),
            });
        }
        let leaf = entry.leaf(self.hasher.as_ref());
        trace!("inserting {} at {}", entry, index);
        self.grid.write_path(index, leaf, self.hasher.as_ref());
        self.grid.entries.push(entry);
        Ok(index)
    }

    /// Replaces the leaf at `index`. The leaf count does not change.
    pub fn update(&mut self, index: usize, entry: Entry) -> Result<(), TreeError> {
        validate::check_index(index, self.leaf_count())?;
        let leaf = entry.leaf(self.hasher.as_ref());
        trace!("updating {} with {}", index, entry);
        self.grid.write_path(index, leaf, self.hasher.as_ref());
        self.grid.entries[index] = entry;
        Ok(())
    }

    /// Resets the leaf at `index` to [`Entry::zero`]. The slot stays populated.
    pub fn delete(&mut self, index: usize) -> Result<(), TreeError> {
        self.update(index, Entry::zero())
    }
}

impl SumTree for IncrementalMerkleSumTree {
    fn grid(&self) -> &NodeGrid {
        &self.grid
    }

    fn hasher(&self) -> &dyn Hasher {
        self.hasher.as_ref()
    }

    fn disclosure(&self) -> LeafDisclosure {
        self.disclosure
    }
}
