use anchor_lang::prelude::*;

/**
 * Creator nonce account
 *
 * This struct tracks the nonce counter for each creator, enabling automatic
 * nonce assignment for new collections.
 *
 * Derivation: ["creator_nonce", creator]
 *
 * Lifecycle:
 * 1. Created on first collection creation (using init_if_needed)
 * 2. Updated with each new collection creation (nonce incremented)
 * 3. Persistent across multiple collections
 */
#[account]
#[derive(Default, Debug)]
pub struct CreatorNonce {
    /// Increments with each collection creation
    /// - Ensures unique nonces for each creator's collections
    pub nonce: u32,
}

impl CreatorNonce {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<CreatorNonce>();
}
