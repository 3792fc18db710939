use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating a new collection
 *
 * This instruction initializes a new collection registry with automatic
 * nonce management:
 * - Creates or updates a nonce state PDA tracking the creator's nonces
 * - Creates the collection PDA with an auto-incremented nonce number
 * - Seeds the shared token identifier counter and the dense claim id counter
 *
 * Access Control: Anyone can create a collection they will own
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateCollection<'info> {
    /// Nonce state account (PDA) that tracks nonce numbers for this creator
    /// - Derived from: ["creator_nonce", creator]
    #[account(
        init_if_needed,
        payer = creator,
        space = CreatorNonce::LEN,
        seeds = [CREATOR_NONCE_SEED.as_bytes(), creator.key().as_ref()],
        bump
    )]
    pub creator_nonce: Account<'info, CreatorNonce>,

    /// The collection registry account (PDA)
    /// - Owns the shared token identifier counter and the claim id counter
    /// - Derived from: ["collection", creator, current_nonce]
    /// - Nonce is automatically determined from creator_nonce.nonce + 1
    #[account(
        init,
        payer = creator,
        space = Collection::LEN,
        seeds = [
            COLLECTION_SEED.as_bytes(),
            creator.key().as_ref(),
            (creator_nonce.nonce + 1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub collection: Account<'info, Collection>,

    /// The creator of the collection
    /// - Always holds administrator rights on the collection
    #[account(mut)]
    pub creator: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Creates a new collection with automatic nonce management
 *
 * @param ctx - The account context containing all required accounts
 * @param admin - Delegated administrator; may initialize and update claims
 *                and mint base units alongside the creator
 */
pub fn handle_create_collection(ctx: Context<CreateCollection>, admin: Pubkey) -> Result<()> {
    let creator_nonce = &mut ctx.accounts.creator_nonce;
    let collection = &mut ctx.accounts.collection;

    // Calculate nonce number with overflow protection
    let current_nonce = creator_nonce
        .nonce
        .checked_add(1)
        .ok_or(LazyClaimError::ArithmeticOverflow)?;
    creator_nonce.nonce = current_nonce;

    // Initialize the registry with both counters at their first values
    collection.bump = ctx.bumps.collection;
    collection.nonce = current_nonce;
    collection.creator = ctx.accounts.creator.key();
    collection.admin = admin;
    collection.next_token_id = FIRST_TOKEN_ID;
    collection.next_claim_id = FIRST_CLAIM_ID;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(CollectionCreated {
        collection: collection.key(),
        nonce: current_nonce,
        creator: ctx.accounts.creator.key(),
        admin,
    });

    Ok(())
}
