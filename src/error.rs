//! Error types for the Incremental Merkle Sum Tree implementation

use num_bigint::BigInt;
use thiserror::Error;

/// Error type for tree operations
#[derive(Debug, Error)]
pub enum TreeError {
    /// An argument has the wrong shape or value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Depth outside of `[1, MAX_DEPTH]`
    #[error("The tree depth must be between 1 and 32, got {0}")]
    InvalidDepth(usize),
    /// An entry was created with a balance below zero
    #[error("Entry balance can't be negative, got {0}")]
    NegativeBalance(BigInt),
    /// A node sum below zero was supplied from outside of the tree
    #[error("Node sum can't be negative, got {0}")]
    NegativeSum(BigInt),
    /// Insertion attempted with every leaf slot populated
    #[error("The tree is full ({capacity} leaves)")]
    TreeFull { capacity: usize },
    /// Index outside of the populated leaf range
    #[error("The leaf {index} does not exist in this tree ({leaf_count} leaves)")]
    LeafNotFound { index: usize, leaf_count: usize },
    /// Non numeric balance in the record source
    #[error("Balance must be a number (row {row}, column {column}): {value:?}")]
    MalformedBalance {
        row: usize,
        column: usize,
        value: String,
    },
    /// Invalid merkle proof
    #[error("Invalid merkle proof")]
    InvalidMerkleProof,
    /// Reading the record source failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PartialEq for TreeError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidParameter(a), Self::InvalidParameter(b)) => a == b,
            (Self::InvalidDepth(a), Self::InvalidDepth(b)) => a == b,
            (Self::NegativeBalance(a), Self::NegativeBalance(b)) => a == b,
            (Self::NegativeSum(a), Self::NegativeSum(b)) => a == b,
            (Self::TreeFull { capacity: a }, Self::TreeFull { capacity: b }) => a == b,
            (
                Self::LeafNotFound {
                    index: a,
                    leaf_count: ac,
                },
                Self::LeafNotFound {
                    index: b,
                    leaf_count: bc,
                },
            ) => a == b && ac == bc,
            (
                Self::MalformedBalance {
                    row: ar,
                    column: ac,
                    value: av,
                },
                Self::MalformedBalance {
                    row: br,
                    column: bc,
                    value: bv,
                },
            ) => ar == br && ac == bc && av == bv,
            (Self::InvalidMerkleProof, Self::InvalidMerkleProof) => true,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}
