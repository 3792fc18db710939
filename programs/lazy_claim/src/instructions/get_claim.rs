use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::*;

/**
 * Account context for reading a claim
 *
 * View instruction; the claim summary is returned through instruction
 * return data. A missing claim fails the account check.
 */
#[derive(Accounts)]
#[instruction(claim_id: u32)]
pub struct GetClaim<'info> {
    /// The collection the claim belongs to
    pub collection: Account<'info, Collection>,

    /// The claim to read
    /// - Derived from: ["claim", collection, claim_id]
    #[account(
        seeds = [
            CLAIM_SEED.as_bytes(),
            collection.key().as_ref(),
            claim_id.to_le_bytes().as_ref()
        ],
        bump = claim.bump
    )]
    pub claim: Account<'info, ClaimAccount>,
}

/// Returns the claim's parameters and minted count
pub fn handle_get_claim(ctx: Context<GetClaim>, _claim_id: u32) -> Result<ClaimSummary> {
    Ok(ctx.accounts.claim.summary())
}
