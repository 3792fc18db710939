use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::*;

/**
 * Account context for resolving a token's metadata location
 *
 * View instruction; metadata is computed on demand from the claim's range
 * list instead of being stored per unit. The resolved location is returned
 * through instruction return data.
 */
#[derive(Accounts)]
#[instruction(claim_id: u32)]
pub struct TokenUri<'info> {
    /// The collection the claim belongs to
    pub collection: Account<'info, Collection>,

    /// The claim the token is expected to belong to
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

/**
 * Resolves a token identifier to its metadata location
 *
 * @param ctx - The account context containing collection and claim accounts
 * @param token_id - Globally assigned token identifier
 *
 * Shared mode returns the claim's location unmodified; per-unit mode appends
 * the 1-based claim-relative position. Fails with TokenNotFound when the
 * identifier was not granted under this claim.
 */
pub fn handle_token_uri(ctx: Context<TokenUri>, _claim_id: u32, token_id: u64) -> Result<String> {
    ctx.accounts.claim.token_uri(token_id)
}
