use anchor_lang::prelude::*;

use crate::error::LazyClaimError;

/**
 * Collection registry account
 *
 * This struct is the asset registry a collection's claims are attached to.
 * It owns the two shared counters of the collection: the token identifier
 * counter, advanced by every creation path (claim mints and base mints
 * alike), and the dense claim id counter.
 *
 * Derivation: ["collection", creator, nonce]
 *
 * Lifecycle:
 * 1. Created during create_collection instruction
 * 2. next_token_id advances with every mint against the collection
 * 3. next_claim_id advances with every initialized claim
 * 4. Never closed; claims reference it for the life of the collection
 *
 * Design Notes:
 * - Because next_token_id is shared by all creation paths, two consecutive
 *   mints under the same claim are not guaranteed consecutive identifiers.
 *   Claims absorb the gaps with their index range lists.
 */
#[account]
#[derive(Default, Debug)]
pub struct Collection {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Nonce number for this collection
    /// - Allows multiple collections for the same creator
    pub nonce: u32,

    /// Creator of the collection
    /// - Always counts as an administrator
    pub creator: Pubkey,

    /// Delegated administrator
    /// - Can initialize and update claims and mint base units
    pub admin: Pubkey,

    /// Shared monotonic token identifier counter
    /// - Next identifier to be assigned; starts at 1
    pub next_token_id: u64,

    /// Dense claim id counter; starts at 1
    pub next_claim_id: u32,
}

impl Collection {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Collection>();

    /// Whether the given wallet holds administrator rights on this collection
    pub fn is_administrator(&self, wallet: &Pubkey) -> bool {
        *wallet == self.creator || *wallet == self.admin
    }

    /// Assigns `count` consecutive token identifiers from the shared counter
    /// and returns the first one
    pub fn assign_token_ids(&mut self, count: u32) -> Result<u64> {
        let first = self.next_token_id;
        self.next_token_id = self
            .next_token_id
            .checked_add(count as u64)
            .ok_or(LazyClaimError::ArithmeticOverflow)?;
        Ok(first)
    }

    /// Assigns the next claim id and advances the dense counter
    pub fn assign_claim_id(&mut self) -> Result<u32> {
        let id = self.next_claim_id;
        self.next_claim_id = self
            .next_claim_id
            .checked_add(1)
            .ok_or(LazyClaimError::ArithmeticOverflow)?;
        Ok(id)
    }
}
