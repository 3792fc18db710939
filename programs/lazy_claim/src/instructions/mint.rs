use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{resize_account, transfer_lamports};

/**
 * Account context for a single-unit claim mint
 *
 * This instruction lets an eligible wallet mint one unit under a claim:
 * the claim is validated (timing, capacity, eligibility, payment), one
 * identifier is taken from the collection's shared counter, the payment is
 * forwarded to the claim's receiver, and the identifier is recorded in the
 * claim's range list for later metadata resolution.
 *
 * Access Control: Any wallet; allowlist claims additionally require a valid
 * merkle proof
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(claim_id: u32)]
pub struct Mint<'info> {
    /// The collection the claim belongs to
    /// - Will be modified to advance the shared token identifier counter
    #[account(mut)]
    pub collection: Account<'info, Collection>,

    /// The claim being minted against
    /// - Derived from: ["claim", collection, claim_id]
    /// - Counters, ranges and the slot bitmap advance on success
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

    /// Per-wallet mint counter for this claim
    /// - Created on the wallet's first mint
    /// - Derived from: ["wallet", claim, claimant]
    #[account(
        init_if_needed,
        payer = claimant,
        space = WalletMinted::LEN,
        seeds = [WALLET_SEED.as_bytes(), claim.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub wallet_minted: Account<'info, WalletMinted>,

    /// Wallet credited with the payment
    /// CHECK: validated against the receiver stored in the claim
    #[account(mut, address = claim.payment_receiver @ LazyClaimError::PaymentReceiverMismatch)]
    pub payment_receiver: UncheckedAccount<'info>,

    /// The wallet minting; signs, pays, and receives the unit
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation, resize top-ups and payment
    pub system_program: Program<'info, System>,
}

/**
 * Mints a single unit under a claim
 *
 * @param ctx - The account context containing all required accounts
 * @param claim_id - Claim id within the collection
 * @param mint_index - Allowlist entry index; ignored without an allowlist
 * @param merkle_proof - Proof for (claimant, mint_index); ignored without an
 *                       allowlist
 * @param payment - Lamports offered; must cover the unit cost, surplus is
 *                  forwarded to the receiver rather than refunded
 *
 * @returns The token identifier assigned to the minted unit
 */
pub fn handle_mint(
    ctx: Context<Mint>,
    claim_id: u32,
    mint_index: u32,
    merkle_proof: Vec<[u8; 32]>,
    payment: u64,
) -> Result<u64> {
    let (mint_indices, merkle_proofs) = if ctx.accounts.claim.allowlist_enabled() {
        (vec![mint_index], vec![merkle_proof])
    } else {
        (vec![], vec![])
    };

    let first_token_id = process_mint(
        &mut ctx.accounts.collection,
        &mut ctx.accounts.claim,
        &mut ctx.accounts.wallet_minted,
        &ctx.accounts.claimant,
        &ctx.accounts.payment_receiver,
        &ctx.accounts.system_program,
        1,
        &mint_indices,
        &merkle_proofs,
        payment,
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(ClaimMinted {
        collection: ctx.accounts.collection.key(),
        claim_id,
        claimant: ctx.accounts.claimant.key(),
        first_token_id,
        count: 1,
        payment,
        total_minted: ctx.accounts.claim.total_minted,
    });

    Ok(first_token_id)
}

/**
 * Shared allocation path for mint and mint_batch
 *
 * Validates everything before mutating anything: steps 1-6 of the request
 * contract through validate_mint, the per-unit allowlist checks through
 * check_allowlist, and only then consumes slots, assigns identifiers from
 * the shared counter, records the range, advances the wallet counter, and
 * forwards the payment. Any failure aborts the transaction and with it every
 * account mutation, so there are no partial grants.
 */
#[allow(clippy::too_many_arguments)]
pub(crate) fn process_mint<'info>(
    collection: &mut Account<'info, Collection>,
    claim: &mut Account<'info, ClaimAccount>,
    wallet_minted: &mut Account<'info, WalletMinted>,
    claimant: &Signer<'info>,
    payment_receiver: &UncheckedAccount<'info>,
    system_program: &Program<'info, System>,
    quantity: u32,
    mint_indices: &[u32],
    merkle_proofs: &[Vec<[u8; 32]>],
    payment: u64,
) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    claim.validate_mint(
        now,
        quantity,
        wallet_minted.count,
        payment,
        mint_indices,
        merkle_proofs.len(),
    )?;
    claim.check_allowlist(&claimant.key(), mint_indices, merkle_proofs)?;

    // Make room for a possible new range entry and any bitmap growth before
    // touching claim state; a merged range leaves harmless slack
    let required = ClaimAccount::required_space(
        claim.location.len(),
        claim.ranges.len() + 1,
        claim.slot_bytes_required(mint_indices),
    );
    let claim_info = claim.to_account_info();
    if required > claim_info.data_len() {
        resize_account(
            &claim_info,
            &claimant.to_account_info(),
            &system_program.to_account_info(),
            required,
        )?;
    }

    // Entry indices only have meaning on allowlist claims; stray indices on
    // an open claim must not touch the bitmap
    if claim.allowlist_enabled() {
        claim.mark_allowlist(mint_indices);
    }
    let first_token_id = collection.assign_token_ids(quantity)?;
    claim.record_mint(first_token_id, quantity)?;
    wallet_minted.count = wallet_minted
        .count
        .checked_add(quantity)
        .ok_or(LazyClaimError::ArithmeticOverflow)?;

    // The full offered payment goes to the receiver; overpayment is kept
    if payment > 0 {
        transfer_lamports(
            &claimant.to_account_info(),
            &payment_receiver.to_account_info(),
            &system_program.to_account_info(),
            payment,
        )?;
    }

    Ok(first_token_id)
}
