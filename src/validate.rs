//! Parameter checks shared by the tree variants and the proof verifier.

use crate::TreeError;

/// Maximum depth of a tree.
pub const MAX_DEPTH: usize = 32;

/// Checks `depth` is within `[1, MAX_DEPTH]`.
pub fn check_depth(depth: usize) -> Result<usize, TreeError> {
    if (1..=MAX_DEPTH).contains(&depth) {
        Ok(depth)
    } else {
        Err(TreeError::InvalidDepth(depth))
    }
}

/// Smallest depth `d` with `2^d >= leaves`, at least 1.
pub fn depth_for(leaves: usize) -> Result<usize, TreeError> {
    if leaves == 0 {
        return Err(TreeError::InvalidDepth(0));
    }
    let depth = match leaves.checked_next_power_of_two() {
        Some(capacity) => capacity.trailing_zeros() as usize,
        None => usize::BITS as usize,
    };
    check_depth(depth.max(1))
}

/// Checks `index` addresses a populated leaf.
pub fn check_index(index: usize, leaf_count: usize) -> Result<(), TreeError> {
    if index < leaf_count {
        Ok(())
    } else {
        Err(TreeError::LeafNotFound { index, leaf_count })
    }
}

/// Checks every array of a proof has one element per level and every path index is a bit.
pub fn check_proof_shape(
    hashes: usize,
    sums: usize,
    path_indices: &[u8],
) -> Result<(), TreeError> {
    if hashes != sums || hashes != path_indices.len() {
        return Err(TreeError::InvalidParameter(format!(
            "proof arrays differ in length: {} hashes, {} sums, {} path indices",
            hashes,
            sums,
            path_indices.len()
        )));
    }
    check_depth(hashes)?;
    if let Some(bad) = path_indices.iter().find(|bit| **bit > 1) {
        return Err(TreeError::InvalidParameter(format!(
            "path index must be 0 or 1, got {bad}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_check_depth() {
        assert!(check_depth(1).is_ok());
        assert!(check_depth(32).is_ok());
        assert_eq!(check_depth(0).unwrap_err(), TreeError::InvalidDepth(0));
        assert_eq!(check_depth(33).unwrap_err(), TreeError::InvalidDepth(33));
    }

    #[test]
    fn test_depth_for() {
        assert_eq!(depth_for(1).unwrap(), 1);
        assert_eq!(depth_for(2).unwrap(), 1);
        assert_eq!(depth_for(3).unwrap(), 2);
        assert_eq!(depth_for(16).unwrap(), 4);
        assert_eq!(depth_for(17).unwrap(), 5);
        assert_eq!(depth_for(0).unwrap_err(), TreeError::InvalidDepth(0));
    }

    #[test]
    fn test_check_index() {
        assert!(check_index(0, 1).is_ok());
        assert_eq!(
            check_index(1, 1).unwrap_err(),
            TreeError::LeafNotFound {
                index: 1,
                leaf_count: 1
            }
        );
    }

    #[test]
    fn test_check_proof_shape() {
        assert!(check_proof_shape(2, 2, &[0, 1]).is_ok());
        assert!(check_proof_shape(2, 1, &[0, 1]).is_err());
        assert!(check_proof_shape(2, 2, &[0]).is_err());
        assert!(check_proof_shape(2, 2, &[0, 2]).is_err());
        assert!(check_proof_shape(0, 0, &[]).is_err());
    }
}
