use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::resize_account;

/**
 * Account context for updating a claim
 *
 * Replaces a claim's configurable fields wholesale while preserving every
 * mutable counter. Capacities may only grow, never shrink.
 *
 * Access Control: Only a collection administrator can update a claim
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(claim_id: u32)]
pub struct UpdateClaim<'info> {
    /// The collection the claim belongs to
    pub collection: Account<'info, Collection>,

    /// The claim account to update
    /// - Derived from: ["claim", collection, claim_id]
    /// - Resized when the new location changes the required space
    #[account(
        mut,
        seeds = [
            CLAIM_SEED.as_bytes(),
            collection.key().as_ref(),
            claim_id.to_le_bytes().as_ref()
        ],
        bump = claim.bump
    )]
    pub claim: Account<'info, ClaimAccount>,

    /// The administrator updating the claim; funds any account growth
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for rent top-ups on resize
    pub system_program: Program<'info, System>,
}

/**
 * Updates the claim's parameters
 *
 * @param ctx - The account context containing collection and claim accounts
 * @param claim_id - Claim id within the collection
 * @param params - Replacement configuration
 *
 * Validation Rules:
 * - Same parameter rules as initialize_claim
 * - total_max and wallet_max may never be lowered; a previously unlimited
 *   total_max cannot be set below what was already minted
 *
 * total_minted, the range list, the consumed-slot bitmap, and per-wallet
 * counters are untouched.
 */
pub fn handle_update_claim(
    ctx: Context<UpdateClaim>,
    claim_id: u32,
    params: ClaimParams,
) -> Result<()> {
    let collection = &ctx.accounts.collection;
    let claim = &mut ctx.accounts.claim;

    require!(
        collection.is_administrator(&ctx.accounts.payer.key()),
        LazyClaimError::Unauthorized
    );

    let mode = claim.validate_update(&params)?;

    // A longer location needs more room; shrinking is skipped since the
    // account may grow right back on the next mint
    let required = ClaimAccount::required_space(
        params.location.len(),
        claim.ranges.len(),
        claim.used_slots.len(),
    );
    let claim_info = claim.to_account_info();
    if required > claim_info.data_len() {
        resize_account(
            &claim_info,
            &ctx.accounts.payer.to_account_info(),
            &ctx.accounts.system_program.to_account_info(),
            required,
        )?;
    }

    claim.apply_params(params, mode);

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(ClaimUpdated {
        collection: collection.key(),
        claim_id,
        updater: ctx.accounts.payer.key(),
        total_max: claim.total_max,
        wallet_max: claim.wallet_max,
        start_time: claim.start_time,
        end_time: claim.end_time,
        cost: claim.cost,
        payment_receiver: claim.payment_receiver,
    });

    Ok(())
}
