use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for initializing a claim
 *
 * Creates a new minting campaign under a collection. The claim id is the
 * collection's next dense id and doubles as a PDA seed, so the caller passes
 * the id it expects and the instruction verifies it against the counter.
 *
 * Access Control: Only a collection administrator can initialize a claim
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(claim_id: u32, params: ClaimParams)]
pub struct InitializeClaim<'info> {
    /// The collection the claim belongs to
    /// - Will be modified to advance next_claim_id
    #[account(mut)]
    pub collection: Account<'info, Collection>,

    /// The claim account (PDA)
    /// - Derived from: ["claim", collection, claim_id]
    /// - Sized for the initial location; grows later as ranges and the
    ///   allowlist bitmap fill in
    #[account(
        init,
        payer = payer,
        space = ClaimAccount::required_space(params.location.len(), 0, 0),
        seeds = [
            CLAIM_SEED.as_bytes(),
            collection.key().as_ref(),
            claim_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub claim: Account<'info, ClaimAccount>,

    /// The administrator initializing the claim; pays for the account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Initializes a new claim under the collection
 *
 * @param ctx - The account context containing collection and claim accounts
 * @param claim_id - Must equal the collection's next claim id
 * @param params - Claim configuration (root, location, caps, window, cost)
 *
 * Validation Rules:
 * - Caller must be a collection administrator
 * - metadata_mode must be a recognized value
 * - start_time < end_time unless both are zero
 * - An allowlist claim cannot also carry a wallet max
 */
pub fn handle_initialize_claim(
    ctx: Context<InitializeClaim>,
    claim_id: u32,
    params: ClaimParams,
) -> Result<()> {
    let collection = &mut ctx.accounts.collection;
    let claim = &mut ctx.accounts.claim;

    require!(
        collection.is_administrator(&ctx.accounts.payer.key()),
        LazyClaimError::Unauthorized
    );
    require!(
        claim_id == collection.next_claim_id,
        LazyClaimError::InvalidClaimId
    );

    let mode = params.validate()?;
    collection.assign_claim_id()?;

    claim.bump = ctx.bumps.claim;
    claim.claim_id = claim_id;
    claim.apply_params(params, mode);
    // total_minted, ranges and used_slots start at their zero values

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(ClaimInitialized {
        collection: collection.key(),
        claim_id,
        initializer: ctx.accounts.payer.key(),
        total_max: claim.total_max,
        wallet_max: claim.wallet_max,
        start_time: claim.start_time,
        end_time: claim.end_time,
        cost: claim.cost,
        payment_receiver: claim.payment_receiver,
    });

    Ok(())
}
