use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines the constant values used throughout the lazy claim
 * program. These constants control PDA derivation and identifier assignment.
 */

#[constant]
/// ===== PDA SEED CONSTANTS =====

/// Seed for creator nonce PDA derivation
/// - Used in: ["creator_nonce", creator]
/// - Creates a unique nonce tracking account for each creator
/// - Enables automatic nonce assignment for collections
pub const CREATOR_NONCE_SEED: &str = "creator_nonce";

/// Seed for collection PDA derivation
/// - Used in: ["collection", creator, nonce]
/// - Creates unique collection accounts for each (creator, nonce) combination
/// - The collection owns the shared token identifier counter
pub const COLLECTION_SEED: &str = "collection";

/// Seed for claim PDA derivation
/// - Used in: ["claim", collection, claim_id]
/// - Claim ids are assigned densely per collection (1, 2, 3, ...)
pub const CLAIM_SEED: &str = "claim";

/// Seed for per-wallet mint counter PDA derivation
/// - Used in: ["wallet", claim, claimant]
/// - Tracks how many units each wallet has received under a claim
pub const WALLET_SEED: &str = "wallet";

/// ===== IDENTIFIER CONSTANTS =====

/// First token identifier assigned in a new collection
/// - The shared counter starts here and only ever increases
pub const FIRST_TOKEN_ID: u64 = 1;

/// First claim identifier assigned in a new collection
pub const FIRST_CLAIM_ID: u32 = 1;
