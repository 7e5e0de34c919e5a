//! Merkle sum tree built in one pass from a finite list of entries.

use std::{path::Path, sync::Arc};

use log::{debug, warn};

use super::{NodeGrid, SumTree};
use crate::{
    config::{LeafDisclosure, PaddingPolicy, TreeConfig},
    node::{Entry, Hasher, Node},
    source, validate, TreeError,
};

/// Merkle sum tree built bottom-up from an ordered list of entries.
///
/// The structure is frozen once built: every accessor hands out shared
/// references and there is no mutating method. Use an
/// [`IncrementalMerkleSumTree`](super::IncrementalMerkleSumTree) to insert or
/// update leaves.
pub struct MerkleSumTree {
    grid: NodeGrid,
    real_entries: usize,
    hasher: Arc<dyn Hasher>,
    config: TreeConfig,
}

impl MerkleSumTree {
    /// Builds a tree from `entries` with the default [`TreeConfig`].
    pub fn new(entries: Vec<Entry>, hasher: Arc<dyn Hasher>) -> Result<Self, TreeError> {
        Self::with_config(entries, hasher, TreeConfig::default())
    }

    /// Builds a tree from `entries`.
    ///
    /// The depth is the smallest `d` with `2^d >= entries.len()`. Depending on
    /// [`TreeConfig::padding`] the missing leaves are filled with [`Entry::zero`] or
    /// the build fails.
    pub fn with_config(
        mut entries: Vec<Entry>,
        hasher: Arc<dyn Hasher>,
        config: TreeConfig,
    ) -> Result<Self, TreeError> {
        let real_entries = entries.len();
        let depth = validate::depth_for(real_entries)?;
        let capacity = 1usize << depth;
        if real_entries < capacity {
            if config.padding == PaddingPolicy::Exact {
                return Err(TreeError::InvalidParameter(format!(
                    "The number of entries must be at least 2 and a power of 2, got {real_entries}"
                )));
            }
            warn!(
                "padding {} entries with {} zero entries",
                real_entries,
                capacity - real_entries
            );
            entries.resize(capacity, Entry::zero());
        }

        let mut grid = NodeGrid::empty(depth, hasher.as_ref());
        let leaves: Vec<Node> = entries
            .iter()
            .map(|entry| entry.leaf(hasher.as_ref()))
            .collect();
        grid.levels[0] = leaves;
        grid.entries = entries;

        // pair adjacent nodes until a single one is left, that one is the root
        let mut level = 0;
        let root = loop {
            let mut parents: Vec<Node> = grid.levels[level]
                .chunks_exact(2)
                .map(|pair| Node::middle(&pair[0], &pair[1], hasher.as_ref()))
                .collect();
            if parents.len() == 1 {
                break parents.remove(0);
            }
            level += 1;
            grid.levels[level] = parents;
        };
        grid.root = root;

        debug!(
            "built tree of depth {} from {} entries, root sum {}",
            depth,
            real_entries,
            grid.root.sum()
        );
        Ok(Self {
            grid,
            real_entries,
            hasher,
            config,
        })
    }

    /// Reads the entries from a csv file, see [`source::parse_entries`], and builds the tree.
    pub fn from_csv(
        path: impl AsRef<Path>,
        hasher: Arc<dyn Hasher>,
        config: TreeConfig,
    ) -> Result<Self, TreeError> {
        Self::with_config(source::parse_entries(path)?, hasher, config)
    }

    /// The entries the tree was built from, without padding.
    pub fn entries(&self) -> &[Entry] {
        &self.grid.entries()[..self.real_entries]
    }

    /// Every leaf slot, padding included.
    pub fn padded_entries(&self) -> &[Entry] {
        self.grid.entries()
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }
}

impl SumTree for MerkleSumTree {
    fn grid(&self) -> &NodeGrid {
        &self.grid
    }

    fn hasher(&self) -> &dyn Hasher {
        self.hasher.as_ref()
    }

    fn disclosure(&self) -> LeafDisclosure {
        self.config.disclosure
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use num_bigint::BigUint;

    use super::MerkleSumTree;
    use crate::{
        config::{PaddingPolicy, TreeConfig},
        node::{Entry, FieldHasher, Node},
        tree::SumTree,
        TreeError,
    };

    fn entries(balances: &[u64]) -> Vec<Entry> {
        balances
            .iter()
            .enumerate()
            .map(|(i, balance)| Entry::new(format!("user{i}"), *balance).unwrap())
            .collect()
    }

    #[test]
    fn test_build_power_of_two() {
        let tree = MerkleSumTree::new(entries(&[1, 2, 3, 4]), Arc::new(FieldHasher::new())).unwrap();
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.root().sum(), &BigUint::from(10u32));
        assert_eq!(tree.grid().level(1).len(), 2);
    }

    #[test]
    fn test_build_root_matches_manual_hashing() {
        let hasher = FieldHasher::new();
        let entries = entries(&[5, 6, 7, 8]);
        let leaves: Vec<Node> = entries.iter().map(|e| e.leaf(&hasher)).collect();
        let left = Node::middle(&leaves[0], &leaves[1], &hasher);
        let right = Node::middle(&leaves[2], &leaves[3], &hasher);
        let root = Node::middle(&left, &right, &hasher);

        let tree = MerkleSumTree::new(entries, Arc::new(hasher)).unwrap();
        assert_eq!(tree.root(), &root);
    }

    #[test]
    fn test_build_pads_to_power_of_two() {
        let tree = MerkleSumTree::new(entries(&[1, 2, 3]), Arc::new(FieldHasher::new())).unwrap();
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.entries().len(), 3);
        assert_eq!(tree.padded_entries().len(), 4);
        assert!(tree.padded_entries()[3].is_zero());
        assert_eq!(tree.root().sum(), &BigUint::from(6u32));
    }

    #[test]
    fn test_build_single_entry_has_depth_one() {
        let tree = MerkleSumTree::new(entries(&[42]), Arc::new(FieldHasher::new())).unwrap();
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.root().sum(), &BigUint::from(42u32));
    }

    #[test]
    fn test_build_depth_one_root() {
        let hasher = FieldHasher::new();
        let entries = entries(&[50, 30]);
        let root = Node::middle(&entries[0].leaf(&hasher), &entries[1].leaf(&hasher), &hasher);
        let tree = MerkleSumTree::new(entries, Arc::new(hasher)).unwrap();
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.root(), &root);
    }

    #[test]
    fn test_build_exact_policy() {
        let config = TreeConfig::default().with_padding(PaddingPolicy::Exact);
        let err = MerkleSumTree::with_config(entries(&[1, 2, 3]), Arc::new(FieldHasher::new()), config)
            .err()
            .unwrap();
        assert!(matches!(err, TreeError::InvalidParameter(_)));
        assert!(MerkleSumTree::with_config(
            entries(&[1, 2, 3, 4]),
            Arc::new(FieldHasher::new()),
            config
        )
        .is_ok());
    }

    #[test]
    fn test_build_exact_policy_single_entry() {
        let config = TreeConfig::default().with_padding(PaddingPolicy::Exact);
        let err = MerkleSumTree::with_config(entries(&[7]), Arc::new(FieldHasher::new()), config)
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "Invalid parameter: The number of entries must be at least 2 and a power of 2, got 1"
        );
        assert!(MerkleSumTree::with_config(
            entries(&[7, 8]),
            Arc::new(FieldHasher::new()),
            config
        )
        .is_ok());
    }

    #[test]
    fn test_build_empty() {
        assert_eq!(
            MerkleSumTree::new(vec![], Arc::new(FieldHasher::new()))
                .err()
                .unwrap(),
            TreeError::InvalidDepth(0)
        );
    }
}
