use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak::hashv;

/**
 * Merkle allowlist verification
 *
 * An allowlist entry is a (wallet, entry index) pair committed into the
 * claim's merkle root. Leaves are keccak256(wallet || entry_index_le) and
 * interior nodes hash their children in lexicographic order, so a proof is
 * just the sibling list and its order never depends on tree shape.
 */

/// Computes the leaf hash for an allowlist entry
pub fn allowlist_leaf(claimant: &Pubkey, mint_index: u32) -> [u8; 32] {
    hashv(&[&claimant.to_bytes(), &mint_index.to_le_bytes()]).to_bytes()
}

/// Verifies a merkle proof against the expected root
///
/// Folds the proof from the leaf upward, hashing each (node, sibling) pair
/// with the lexicographically smaller hash first, and compares the result to
/// the root. An empty proof verifies a single-leaf tree.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let mut computed = leaf;
    for sibling in proof {
        computed = if computed <= *sibling {
            hashv(&[&computed, sibling]).to_bytes()
        } else {
            hashv(&[sibling, &computed]).to_bytes()
        };
    }
    computed == root
}
