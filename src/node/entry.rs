use std::fmt::Display;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use super::{Hasher, Node};
use crate::{codec, TreeError};

/// An entry is the data committed by a leaf: an identifier and its balance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    identifier: String,
    balance: BigUint,
}

impl Entry {
    /// Creates a new [`Entry`].
    ///
    /// Fails with [`TreeError::NegativeBalance`] if `balance < 0` and with
    /// [`TreeError::InvalidParameter`] if `identifier` is empty, which is reserved
    /// for [`Entry::zero`], or starts with a NUL byte, which [`codec::encode`]
    /// drops.
    pub fn new(identifier: impl Into<String>, balance: impl Into<BigInt>) -> Result<Self, TreeError> {
        let identifier = identifier.into();
        let balance = balance.into();
        if identifier.is_empty() {
            return Err(TreeError::InvalidParameter(
                "identifier can't be empty".to_string(),
            ));
        }
        if identifier.starts_with('\0') {
            return Err(TreeError::InvalidParameter(format!(
                "identifier can't start with a NUL byte, got {identifier:?}"
            )));
        }
        let Some(balance) = balance.to_biguint() else {
            return Err(TreeError::NegativeBalance(balance));
        };
        Ok(Self {
            identifier,
            balance,
        })
    }

    /// Creates an entry from an encoded identifier, see [`codec::decode`].
    pub fn from_encoded(identifier: &BigUint, balance: impl Into<BigInt>) -> Result<Self, TreeError> {
        Self::new(codec::decode(identifier)?, balance)
    }

    /// The padding entry: empty identifier and zero balance.
    pub fn zero() -> Self {
        Self {
            identifier: String::new(),
            balance: BigUint::zero(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.identifier.is_empty() && self.balance.is_zero()
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Integer form of the identifier, as fed to the hasher.
    pub fn encoded_identifier(&self) -> BigUint {
        codec::encode(&self.identifier)
    }

    pub fn balance(&self) -> &BigUint {
        &self.balance
    }

    /// Computes the leaf node of this entry. This function performs a hash.
    pub fn leaf(&self, hasher: &dyn Hasher) -> Node {
        Node::leaf(self, hasher)
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Entry {{ identifier: {:?}, balance: {} }}",
            self.identifier, self.balance
        )
    }
}
