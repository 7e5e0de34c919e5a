//! Proofs of membership of a leaf in a tree.
//!
//! A proof carries the leaf, the siblings on its path to the root and the
//! side of each step. Verifying it replays the hash chain and the sum chain in
//! parallel, without access to the tree.
//!
//! A proof can be compressed by dropping the siblings that are zero nodes, and a
//! compressed proof can be encoded into bytes.
use std::str::FromStr;

use bitvec::order::Lsb0;
use bitvec::vec::BitVec;
use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};

use crate::{
    node::{Entry, Hasher, Node},
    tree::{walk_up, ZeroNodes},
    validate, TreeError,
};

/// How a proof identifies its leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofLeaf {
    /// The committed leaf hash.
    Hash(BigUint),
    /// The encoded identifier, see [`codec::encode`](crate::codec::encode). The
    /// verifier recomputes the leaf hash from it and the leaf sum.
    Identifier(BigUint),
}

/// A merkle proof of membership for a given leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMembershipProof", into = "RawMembershipProof")]
pub struct MembershipProof {
    root_hash: BigUint,
    leaf: ProofLeaf,
    leaf_sum: BigUint,
    siblings: Vec<Node>,
    path_indices: Vec<u8>,
}

impl MembershipProof {
    /// Creates a new proof. Fails with [`TreeError::InvalidParameter`] if there is
    /// not exactly one path index per sibling, if a path index is not a bit, or if
    /// the depth is not in `[1, 32]`.
    pub fn new(
        root_hash: BigUint,
        leaf: ProofLeaf,
        leaf_sum: BigUint,
        siblings: Vec<Node>,
        path_indices: Vec<u8>,
    ) -> Result<Self, TreeError> {
        validate::check_proof_shape(siblings.len(), siblings.len(), &path_indices)?;
        Ok(Self {
            root_hash,
            leaf,
            leaf_sum,
            siblings,
            path_indices,
        })
    }

    pub fn root_hash(&self) -> &BigUint {
        &self.root_hash
    }

    pub fn leaf(&self) -> &ProofLeaf {
        &self.leaf
    }

    pub fn leaf_sum(&self) -> &BigUint {
        &self.leaf_sum
    }

    pub fn siblings(&self) -> &[Node] {
        &self.siblings
    }

    pub fn path_indices(&self) -> &[u8] {
        &self.path_indices
    }

    pub fn depth(&self) -> usize {
        self.siblings.len()
    }

    /// Index of the leaf in the tree, read from the path indices.
    pub fn leaf_index(&self) -> usize {
        self.path_indices
            .iter()
            .enumerate()
            .fold(0, |index, (level, bit)| index | ((*bit as usize) << level))
    }

    /// The disclosed entry, if the proof carries the identifier.
    pub fn entry(&self) -> Option<Result<Entry, TreeError>> {
        match &self.leaf {
            ProofLeaf::Identifier(identifier) => {
                Some(Entry::from_encoded(identifier, self.leaf_sum.clone()))
            }
            ProofLeaf::Hash(_) => None,
        }
    }

    /// The leaf node the proof starts from. Hashes the identifier if disclosed.
    pub fn leaf_node(&self, hasher: &dyn Hasher) -> Node {
        match &self.leaf {
            ProofLeaf::Hash(hash) => Node::new(hash.clone(), self.leaf_sum.clone()),
            ProofLeaf::Identifier(identifier) => Node::new(
                hasher.hash(&[identifier.clone(), self.leaf_sum.clone()]),
                self.leaf_sum.clone(),
            ),
        }
    }

    /// Replays the proof and returns the computed root along with the sum
    /// accumulated from the leaf sum and the sibling sums.
    pub fn root(&self, hasher: &dyn Hasher) -> (Node, BigUint) {
        let leaf = self.leaf_node(hasher);
        let mut sum = leaf.sum().clone();
        let root = walk_up(
            hasher,
            leaf,
            &self.path_indices,
            &self.siblings,
            |_, _, sibling, _| sum += sibling.sum(),
        );
        (root, sum)
    }

    /// Verify the proof.
    ///
    /// Returns the recomputed root if its hash is the root hash of the proof and
    /// the accumulated sum is its sum, otherwise [`TreeError::InvalidMerkleProof`].
    pub fn verify(&self, hasher: &dyn Hasher) -> Result<Node, TreeError> {
        validate::check_proof_shape(
            self.siblings.len(),
            self.siblings.len(),
            &self.path_indices,
        )?;
        let (root, sum) = self.root(hasher);
        if root.hash() == &self.root_hash && root.sum() == &sum {
            Ok(root)
        } else {
            Err(TreeError::InvalidMerkleProof)
        }
    }

    /// Compresses the proof, dropping the siblings equal to the zero node of their level.
    pub fn compress(&self, hasher: &dyn Hasher) -> CompressedProof {
        let zeroes = ZeroNodes::new(self.depth(), hasher);
        let mut bits = BitVec::with_capacity(self.siblings.len());
        let mut siblings = Vec::new();
        for (level, sibling) in self.siblings.iter().enumerate() {
            if sibling == zeroes.at(level) {
                bits.push(true);
            } else {
                bits.push(false);
                siblings.push(sibling.clone());
            }
        }
        CompressedProof {
            root_hash: self.root_hash.clone(),
            leaf: self.leaf.clone(),
            leaf_sum: self.leaf_sum.clone(),
            siblings,
            zero_bits: bits,
            path_bits: self.path_indices.iter().map(|bit| *bit == 1).collect(),
        }
    }
}

/// A membership proof that also claims the total of the tree does not exceed `target_sum`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTargetSumProof", into = "RawTargetSumProof")]
pub struct TargetSumProof {
    proof: MembershipProof,
    target_sum: BigUint,
}

impl TargetSumProof {
    pub fn new(proof: MembershipProof, target_sum: BigUint) -> Self {
        Self { proof, target_sum }
    }

    pub fn proof(&self) -> &MembershipProof {
        &self.proof
    }

    pub fn target_sum(&self) -> &BigUint {
        &self.target_sum
    }

    /// Verify the proof: the membership proof must hold and its root sum must not
    /// exceed the target sum.
    pub fn verify(&self, hasher: &dyn Hasher) -> Result<Node, TreeError> {
        let root = self.proof.verify(hasher)?;
        if &self.target_sum >= root.sum() {
            Ok(root)
        } else {
            Err(TreeError::InvalidMerkleProof)
        }
    }
}

/// Returns whether `proof` is a valid membership proof.
pub fn verify_proof(proof: &MembershipProof, hasher: &dyn Hasher) -> bool {
    proof.verify(hasher).is_ok()
}

/// Returns whether `proof` is a valid membership proof whose root sum is at most its target sum.
pub fn verify_proof_with_target_sum(proof: &TargetSumProof, hasher: &dyn Hasher) -> bool {
    proof.verify(hasher).is_ok()
}

/// A compressed merkle proof.
/// We don't store the siblings that are zero nodes, nor the path indices as bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedProof {
    root_hash: BigUint,
    leaf: ProofLeaf,
    leaf_sum: BigUint,
    siblings: Vec<Node>,
    zero_bits: BitVec<u8, Lsb0>,
    path_bits: BitVec<u8, Lsb0>,
}

impl CompressedProof {
    /// Number of siblings actually stored.
    pub fn stored_siblings(&self) -> usize {
        self.siblings.len()
    }

    /// Decompresses the proof into a proof.
    pub fn decompress(&self, hasher: &dyn Hasher) -> Result<MembershipProof, TreeError> {
        let expected = self.zero_bits.count_zeros();
        if self.siblings.len() != expected || self.zero_bits.len() != self.path_bits.len() {
            return Err(TreeError::InvalidParameter(format!(
                "compressed proof holds {} siblings, expected {}",
                self.siblings.len(),
                expected
            )));
        }
        validate::check_depth(self.zero_bits.len())?;
        let zeroes = ZeroNodes::new(self.zero_bits.len(), hasher);
        let mut stored = self.siblings.iter();
        let mut siblings = Vec::with_capacity(self.zero_bits.len());
        for (level, is_zero) in self.zero_bits.iter().enumerate() {
            let sibling = if *is_zero {
                zeroes.at(level).clone()
            } else {
                // count checked above
                stored.next().cloned().ok_or(TreeError::InvalidMerkleProof)?
            };
            siblings.push(sibling);
        }
        MembershipProof::new(
            self.root_hash.clone(),
            self.leaf.clone(),
            self.leaf_sum.clone(),
            siblings,
            self.path_bits.iter().map(|bit| *bit as u8).collect(),
        )
    }

    /// Encodes the proof into a byte vector.
    ///
    /// Layout: depth (`u8`), path bits, zero bits, leaf kind (`0` hash, `1`
    /// identifier), then root hash, leaf, leaf sum and every stored sibling hash
    /// and sum as length prefixed (`u32`) big-endian integers.
    ///
    /// Fails with [`TreeError::InvalidParameter`] if an integer doesn't fit the prefix.
    pub fn encode(&self) -> Result<Vec<u8>, TreeError> {
        let mut encoded = Vec::new();
        encoded.push(self.zero_bits.len() as u8);
        encoded.extend_from_slice(self.path_bits.as_raw_slice());
        encoded.extend_from_slice(self.zero_bits.as_raw_slice());
        let (kind, leaf) = match &self.leaf {
            ProofLeaf::Hash(hash) => (0u8, hash),
            ProofLeaf::Identifier(identifier) => (1u8, identifier),
        };
        encoded.push(kind);
        for value in [&self.root_hash, leaf, &self.leaf_sum] {
            write_uint(&mut encoded, value)?;
        }
        for sibling in self.siblings.iter() {
            write_uint(&mut encoded, sibling.hash())?;
            write_uint(&mut encoded, sibling.sum())?;
        }
        Ok(encoded)
    }

    /// Decodes a proof from a byte vector.
    pub fn decode(data: &[u8]) -> Result<Self, TreeError> {
        let mut reader = Reader { data, position: 0 };
        let depth = validate::check_depth(reader.take(1)?[0] as usize)?;
        let bit_bytes = depth.div_ceil(8);
        let mut path_bits = BitVec::<u8, Lsb0>::from_slice(reader.take(bit_bytes)?);
        path_bits.truncate(depth);
        let mut zero_bits = BitVec::<u8, Lsb0>::from_slice(reader.take(bit_bytes)?);
        zero_bits.truncate(depth);
        let kind = reader.take(1)?[0];
        let root_hash = reader.uint()?;
        let leaf = match kind {
            0 => ProofLeaf::Hash(reader.uint()?),
            1 => ProofLeaf::Identifier(reader.uint()?),
            other => {
                return Err(TreeError::InvalidParameter(format!(
                    "unknown leaf kind {other}"
                )))
            }
        };
        let leaf_sum = reader.uint()?;
        let mut siblings = Vec::with_capacity(zero_bits.count_zeros());
        for _ in 0..zero_bits.count_zeros() {
            let hash = reader.uint()?;
            let sum = reader.uint()?;
            siblings.push(Node::new(hash, sum));
        }
        if reader.position != data.len() {
            return Err(TreeError::InvalidParameter(format!(
                "{} trailing bytes after proof",
                data.len() - reader.position
            )));
        }
        Ok(Self {
            root_hash,
            leaf,
            leaf_sum,
            siblings,
            zero_bits,
            path_bits,
        })
    }
}

fn write_uint(buffer: &mut Vec<u8>, value: &BigUint) -> Result<(), TreeError> {
    let bytes = value.to_bytes_be();
    let len = u32::try_from(bytes.len()).map_err(|_| {
        TreeError::InvalidParameter(format!(
            "integer of {} bytes is too long to encode",
            bytes.len()
        ))
    })?;
    buffer.extend_from_slice(&len.to_be_bytes());
    buffer.extend_from_slice(&bytes);
    Ok(())
}

struct Reader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8], TreeError> {
        let (data, start) = (self.data, self.position);
        let Some(bytes) = start.checked_add(len).and_then(|end| data.get(start..end)) else {
            return Err(TreeError::InvalidParameter(format!(
                "proof truncated at byte {}",
                self.position
            )));
        };
        self.position += len;
        Ok(bytes)
    }

    fn uint(&mut self) -> Result<BigUint, TreeError> {
        let len = self.take(4)?;
        let len = u32::from_be_bytes([len[0], len[1], len[2], len[3]]) as usize;
        Ok(BigUint::from_bytes_be(self.take(len)?))
    }
}

/// Wire form of the leaf identity: `leafHash` or `leafIdentifier`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
enum RawProofLeaf {
    LeafHash(String),
    LeafIdentifier(String),
}

/// Wire form of a [`MembershipProof`]: big integers as decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMembershipProof {
    root_hash: String,
    #[serde(flatten)]
    leaf: RawProofLeaf,
    leaf_sum: String,
    siblings_hashes: Vec<String>,
    siblings_sums: Vec<String>,
    path_indices: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTargetSumProof {
    #[serde(flatten)]
    proof: RawMembershipProof,
    target_sum: String,
}

fn parse_int(value: &str) -> Result<BigInt, TreeError> {
    BigInt::from_str(value)
        .map_err(|e| TreeError::InvalidParameter(format!("{value:?} is not an integer: {e}")))
}

fn parse_hash(value: &str) -> Result<BigUint, TreeError> {
    let int = parse_int(value)?;
    int.to_biguint()
        .ok_or_else(|| TreeError::InvalidParameter(format!("hash can't be negative, got {int}")))
}

fn parse_sum(value: &str) -> Result<BigUint, TreeError> {
    let int = parse_int(value)?;
    int.to_biguint().ok_or(TreeError::NegativeSum(int))
}

impl TryFrom<RawMembershipProof> for MembershipProof {
    type Error = TreeError;

    fn try_from(raw: RawMembershipProof) -> Result<Self, Self::Error> {
        validate::check_proof_shape(
            raw.siblings_hashes.len(),
            raw.siblings_sums.len(),
            &raw.path_indices,
        )?;
        let leaf = match &raw.leaf {
            RawProofLeaf::LeafHash(hash) => ProofLeaf::Hash(parse_hash(hash)?),
            RawProofLeaf::LeafIdentifier(identifier) => {
                ProofLeaf::Identifier(parse_hash(identifier)?)
            }
        };
        let siblings = raw
            .siblings_hashes
            .iter()
            .zip(raw.siblings_sums.iter())
            .map(|(hash, sum)| Node::try_from_signed(parse_hash(hash)?, parse_int(sum)?))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(
            parse_hash(&raw.root_hash)?,
            leaf,
            parse_sum(&raw.leaf_sum)?,
            siblings,
            raw.path_indices,
        )
    }
}

impl From<MembershipProof> for RawMembershipProof {
    fn from(proof: MembershipProof) -> Self {
        Self {
            root_hash: proof.root_hash.to_string(),
            leaf: match proof.leaf {
                ProofLeaf::Hash(hash) => RawProofLeaf::LeafHash(hash.to_string()),
                ProofLeaf::Identifier(identifier) => {
                    RawProofLeaf::LeafIdentifier(identifier.to_string())
                }
            },
            leaf_sum: proof.leaf_sum.to_string(),
            siblings_hashes: proof.siblings.iter().map(|s| s.hash().to_string()).collect(),
            siblings_sums: proof.siblings.iter().map(|s| s.sum().to_string()).collect(),
            path_indices: proof.path_indices,
        }
    }
}

impl TryFrom<RawTargetSumProof> for TargetSumProof {
    type Error = TreeError;

    fn try_from(raw: RawTargetSumProof) -> Result<Self, Self::Error> {
        Ok(Self::new(
            MembershipProof::try_from(raw.proof)?,
            parse_sum(&raw.target_sum)?,
        ))
    }
}

impl From<TargetSumProof> for RawTargetSumProof {
    fn from(proof: TargetSumProof) -> Self {
        Self {
            proof: proof.proof.into(),
            target_sum: proof.target_sum.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use num_bigint::BigUint;

    use super::*;
    use crate::{
        config::{LeafDisclosure, TreeConfig},
        node::FieldHasher,
        tree::{IncrementalMerkleSumTree, MerkleSumTree, SumTree},
    };

    fn built_tree(disclosure: LeafDisclosure) -> MerkleSumTree {
        let entries = (0..6)
            .map(|i| Entry::new(format!("user{i}"), 10 * (i + 1)).unwrap())
            .collect();
        MerkleSumTree::with_config(
            entries,
            Arc::new(FieldHasher::new()),
            TreeConfig::default().with_disclosure(disclosure),
        )
        .unwrap()
    }

    #[test]
    fn test_proof_shape() {
        let tree = built_tree(LeafDisclosure::Hash);
        let proof = tree.merkle_proof(5).unwrap();
        assert_eq!(proof.depth(), 3);
        assert_eq!(proof.path_indices(), &[1, 0, 1]);
        assert_eq!(proof.leaf_index(), 5);
        assert_eq!(proof.root_hash(), tree.root().hash());
        assert_eq!(proof.leaf_sum(), &BigUint::from(60u32));
        assert_eq!(proof.leaf(), &ProofLeaf::Hash(tree.leaves()[5].hash().clone()));
        assert!(proof.entry().is_none());
    }

    #[test]
    fn test_proof_root_and_sum() {
        let hasher = FieldHasher::new();
        let tree = built_tree(LeafDisclosure::Hash);
        let (root, sum) = tree.merkle_proof(2).unwrap().root(&hasher);
        assert_eq!(&root, tree.root());
        assert_eq!(sum, BigUint::from(210u32));
    }

    #[test]
    fn test_identifier_disclosure() {
        let hasher = FieldHasher::new();
        let tree = built_tree(LeafDisclosure::Identifier);
        let proof = tree.merkle_proof(3).unwrap();
        assert_eq!(
            proof.entry().unwrap().unwrap(),
            Entry::new("user3", 40).unwrap()
        );
        assert!(verify_proof(&proof, &hasher));
    }

    #[test]
    fn test_verify_rejects_wrong_hasher() {
        let tree = built_tree(LeafDisclosure::Hash);
        let proof = tree.merkle_proof(0).unwrap();
        let other = FieldHasher::with_modulus(BigUint::from(1_000_003u32)).unwrap();
        assert!(!verify_proof(&proof, &other));
        assert!(tree.verify_proof(&proof));
    }

    #[test]
    fn test_new_rejects_bad_shape() {
        let node = Node::new(BigUint::from(1u32), BigUint::from(1u32));
        let leaf = ProofLeaf::Hash(BigUint::from(1u32));
        assert!(MembershipProof::new(
            BigUint::from(1u32),
            leaf.clone(),
            BigUint::from(1u32),
            vec![node.clone()],
            vec![0, 1]
        )
        .is_err());
        assert!(MembershipProof::new(
            BigUint::from(1u32),
            leaf,
            BigUint::from(1u32),
            vec![node],
            vec![2]
        )
        .is_err());
    }

    #[test]
    fn test_target_sum_proof() {
        let hasher = FieldHasher::new();
        let tree = built_tree(LeafDisclosure::Hash);
        let proof = tree
            .merkle_proof_with_target_sum(1, BigUint::from(210u32))
            .unwrap();
        assert!(verify_proof_with_target_sum(&proof, &hasher));
        let proof = tree
            .merkle_proof_with_target_sum(1, BigUint::from(209u32))
            .unwrap();
        assert!(!verify_proof_with_target_sum(&proof, &hasher));
        assert!(verify_proof(proof.proof(), &hasher));
    }

    #[test]
    fn test_json_wire_shape() {
        let tree = built_tree(LeafDisclosure::Hash);
        let proof = tree.merkle_proof(4).unwrap();
        let json = serde_json::to_value(&proof).unwrap();
        for field in [
            "rootHash",
            "leafHash",
            "leafSum",
            "siblingsHashes",
            "siblingsSums",
            "pathIndices",
        ] {
            assert!(json.get(field).is_some(), "missing {field}");
        }
        assert_eq!(json["leafSum"], "50");
        assert_eq!(json["pathIndices"], serde_json::json!([0, 0, 1]));
        let decoded: MembershipProof = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, proof);
    }

    #[test]
    fn test_json_identifier_and_target_sum() {
        let hasher = FieldHasher::new();
        let tree = built_tree(LeafDisclosure::Identifier);
        let proof = tree
            .merkle_proof_with_target_sum(0, BigUint::from(1000u32))
            .unwrap();
        let json = serde_json::to_string(&proof).unwrap();
        assert!(json.contains("\"leafIdentifier\""));
        assert!(json.contains("\"targetSum\":\"1000\""));
        let decoded: TargetSumProof = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, proof);
        assert!(verify_proof_with_target_sum(&decoded, &hasher));
    }

    #[test]
    fn test_json_rejects_negative_sum() {
        let tree = built_tree(LeafDisclosure::Hash);
        let mut json = serde_json::to_value(tree.merkle_proof(0).unwrap()).unwrap();
        json["siblingsSums"][0] = serde_json::json!("-10");
        let err = serde_json::from_value::<MembershipProof>(json).unwrap_err();
        assert!(err.to_string().contains("Node sum can't be negative"));
    }

    #[test]
    fn test_json_rejects_unequal_arrays() {
        let tree = built_tree(LeafDisclosure::Hash);
        let mut json = serde_json::to_value(tree.merkle_proof(0).unwrap()).unwrap();
        json["siblingsSums"].as_array_mut().unwrap().pop();
        assert!(serde_json::from_value::<MembershipProof>(json).is_err());
    }

    #[test]
    fn test_compress_sparse_proof() {
        let hasher = FieldHasher::new();
        let mut tree = IncrementalMerkleSumTree::new(8, Arc::new(FieldHasher::new())).unwrap();
        tree.insert(Entry::new("alice", 1).unwrap()).unwrap();
        let proof = tree.merkle_proof(0).unwrap();
        let compressed = proof.compress(&hasher);
        assert_eq!(compressed.stored_siblings(), 0);
        let decompressed = compressed.decompress(&hasher).unwrap();
        assert_eq!(decompressed, proof);
        assert!(verify_proof(&decompressed, &hasher));
    }

    #[test]
    fn test_compressed_proof_encode_decode() {
        let hasher = FieldHasher::new();
        let mut tree = IncrementalMerkleSumTree::with_disclosure(
            10,
            Arc::new(FieldHasher::new()),
            LeafDisclosure::Identifier,
        )
        .unwrap();
        for i in 0..3 {
            tree.insert(Entry::new(format!("user{i}"), i + 1).unwrap())
                .unwrap();
        }
        let proof = tree.merkle_proof(2).unwrap();
        let compressed = proof.compress(&hasher);
        // only the level 1 sibling (leaves 0 and 1) is populated
        assert_eq!(compressed.stored_siblings(), 1);
        let decoded = CompressedProof::decode(&compressed.encode().unwrap()).unwrap();
        assert_eq!(decoded, compressed);
        assert_eq!(decoded.decompress(&hasher).unwrap(), proof);
    }

    #[test]
    fn test_encode_wide_integers() {
        let hasher = FieldHasher::new();
        let tree = built_tree(LeafDisclosure::Hash);
        let proof = tree.merkle_proof(0).unwrap();
        // a leaf sum longer than 65535 bytes
        let wide: BigUint = BigUint::from(1u32) << (8 * 70_000);
        let proof = MembershipProof::new(
            proof.root_hash().clone(),
            proof.leaf().clone(),
            wide.clone(),
            proof.siblings().to_vec(),
            proof.path_indices().to_vec(),
        )
        .unwrap();
        let compressed = proof.compress(&hasher);
        let decoded = CompressedProof::decode(&compressed.encode().unwrap()).unwrap();
        assert_eq!(decoded, compressed);
        assert_eq!(decoded.decompress(&hasher).unwrap().leaf_sum(), &wide);
    }

    #[test]
    fn test_decode_truncated() {
        let hasher = FieldHasher::new();
        let tree = built_tree(LeafDisclosure::Hash);
        let encoded = tree.merkle_proof(1).unwrap().compress(&hasher).encode().unwrap();
        assert!(CompressedProof::decode(&encoded[..encoded.len() - 1]).is_err());
        let mut trailing = encoded.clone();
        trailing.push(0);
        assert!(CompressedProof::decode(&trailing).is_err());
    }
}
