//! Tree configuration.

use serde::{Deserialize, Serialize};

/// What a bulk build does with an entry count that is not a power of two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaddingPolicy {
    /// Round the depth up and fill the free slots with [`Entry::zero`](crate::Entry::zero).
    #[default]
    Pad,
    /// Refuse anything but an exact power of two.
    Exact,
}

/// How a proof identifies its leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafDisclosure {
    /// The proof carries the committed leaf hash only.
    #[default]
    Hash,
    /// The proof carries the encoded identifier and the verifier recomputes the
    /// leaf hash. This reveals the identifier to whoever holds the proof.
    Identifier,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    pub padding: PaddingPolicy,
    pub disclosure: LeafDisclosure,
}

impl TreeConfig {
    pub fn with_padding(mut self, padding: PaddingPolicy) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_disclosure(mut self, disclosure: LeafDisclosure) -> Self {
        self.disclosure = disclosure;
        self
    }
}
