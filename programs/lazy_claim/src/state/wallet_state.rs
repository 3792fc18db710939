use anchor_lang::prelude::*;

/**
 * Per-wallet mint counter account
 *
 * Tracks how many units a single wallet has received under one claim.
 *
 * Derivation: ["wallet", claim_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created on the wallet's first mint against the claim (init_if_needed)
 * 2. Incremented with each successful mint
 *
 * Design Notes:
 * - One WalletMinted account per (claim, claimant) pair
 * - Enforces the claim's wallet_max when it is non-zero
 */
#[account]
#[derive(Default, Debug)]
pub struct WalletMinted {
    /// Total units granted to this wallet under the claim (cumulative)
    pub count: u32,
}

impl WalletMinted {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<WalletMinted>();
}
