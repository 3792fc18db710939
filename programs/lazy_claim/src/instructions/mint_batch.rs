use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::instructions::mint::process_mint;
use crate::state::*;

/**
 * Account context for a batched claim mint
 *
 * Same accounts as the single-unit mint; the batch takes its identifiers
 * from the shared counter in one consecutive block, so it records at most
 * one new range regardless of batch size.
 *
 * Access Control: Any wallet; allowlist claims additionally require one
 * valid merkle proof per requested unit
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(claim_id: u32)]
pub struct MintBatch<'info> {
    /// The collection the claim belongs to
    /// - Will be modified to advance the shared token identifier counter
    #[account(mut)]
    pub collection: Account<'info, Collection>,

    /// The claim being minted against
    /// - Derived from: ["claim", collection, claim_id]
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

    /// The wallet minting; signs, pays, and receives the units
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation, resize top-ups and payment
    pub system_program: Program<'info, System>,
}

/**
 * Mints `mint_count` units under a claim in one call
 *
 * @param ctx - The account context containing all required accounts
 * @param claim_id - Claim id within the collection
 * @param mint_count - Number of units requested; must be non-zero
 * @param mint_indices - Allowlist entry indices, one per unit; must be empty
 *                       of duplicates. Ignored without an allowlist
 * @param merkle_proofs - One proof per entry index; ignored without an
 *                        allowlist
 * @param payment - Lamports offered; must cover cost * mint_count, surplus
 *                  is forwarded to the receiver rather than refunded
 *
 * @returns The first token identifier assigned; the batch occupies
 *          [first, first + mint_count)
 */
pub fn handle_mint_batch(
    ctx: Context<MintBatch>,
    claim_id: u32,
    mint_count: u16,
    mint_indices: Vec<u32>,
    merkle_proofs: Vec<Vec<[u8; 32]>>,
    payment: u64,
) -> Result<u64> {
    let first_token_id = process_mint(
        &mut ctx.accounts.collection,
        &mut ctx.accounts.claim,
        &mut ctx.accounts.wallet_minted,
        &ctx.accounts.claimant,
        &ctx.accounts.payment_receiver,
        &ctx.accounts.system_program,
        mint_count as u32,
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
        count: mint_count as u32,
        payment,
        total_minted: ctx.accounts.claim.total_minted,
    });

    Ok(first_token_id)
}
