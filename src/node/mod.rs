mod entry;
mod hasher;

use std::fmt::Display;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

pub use entry::Entry;
pub use hasher::{FieldHasher, Hasher, ThreadSafe};

use crate::TreeError;

pub type Sum = BigUint;

/// A node of the tree: a hash and the sum of every balance below it.
///
/// Leaves are built from an [`Entry`] with [`Node::leaf`], middle nodes from two
/// children with [`Node::middle`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    hash: BigUint,
    sum: Sum,
}

impl Node {
    /// Creates a node from an already computed hash and sum. NO HASHING IS DONE HERE.
    ///
    /// The caller is responsible for `hash` matching `sum`, otherwise proofs
    /// built on top of this node won't verify.
    pub fn new(hash: BigUint, sum: Sum) -> Self {
        Self { hash, sum }
    }

    /// Same as [`Node::new`] for a sum coming from untrusted, signed input.
    pub fn try_from_signed(hash: BigUint, sum: BigInt) -> Result<Self, TreeError> {
        match sum.to_biguint() {
            Some(sum) => Ok(Self { hash, sum }),
            None => Err(TreeError::NegativeSum(sum)),
        }
    }

    /// Creates a leaf node from an entry: `H(identifier, balance)`. This function performs a hash.
    pub fn leaf(entry: &Entry, hasher: &dyn Hasher) -> Self {
        let balance = entry.balance().clone();
        let hash = hasher.hash(&[entry.encoded_identifier(), balance.clone()]);
        Self { hash, sum: balance }
    }

    /// Creates a middle node: `H(left.hash, left.sum, right.hash, right.sum)`.
    /// This function performs a hash and an addition.
    pub fn middle(left: &Node, right: &Node, hasher: &dyn Hasher) -> Self {
        let hash = hasher.hash(&[
            left.hash.clone(),
            left.sum.clone(),
            right.hash.clone(),
            right.sum.clone(),
        ]);
        Self {
            hash,
            sum: &left.sum + &right.sum,
        }
    }

    /// Returns the hash of the node. NO HASHING IS DONE HERE.
    pub fn hash(&self) -> &BigUint {
        &self.hash
    }

    /// Returns the sum of the node. NO OPERATION IS DONE HERE.
    pub fn sum(&self) -> &Sum {
        &self.sum
    }

    pub fn is_empty_sum(&self) -> bool {
        self.sum.is_zero()
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Node {{ sum: {}, hash: {} }}",
            self.sum,
            hex::encode(self.hash.to_bytes_be())
        )
    }
}
