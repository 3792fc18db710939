use anchor_lang::prelude::*;

use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for minting units outside any claim
 *
 * Base mints advance the collection's shared token identifier counter
 * without touching any claim. They are the uncoordinated creation path that
 * can interleave with claim mints, which is why claims track their
 * identifiers as ranges rather than assuming contiguity.
 *
 * Access Control: Only a collection administrator can base mint
 */
#[event_cpi]
#[derive(Accounts)]
pub struct MintBase<'info> {
    /// The collection to mint against
    /// - Will be modified to advance next_token_id
    #[account(mut)]
    pub collection: Account<'info, Collection>,

    /// The administrator performing the mint
    pub minter: Signer<'info>,
}

/**
 * Mints `count` units directly against the collection
 *
 * @param ctx - The account context containing collection and minter accounts
 * @param count - Number of consecutive identifiers to assign
 *
 * @returns The first token identifier assigned
 */
pub fn handle_mint_base(ctx: Context<MintBase>, count: u16) -> Result<u64> {
    let collection = &mut ctx.accounts.collection;

    require!(
        collection.is_administrator(&ctx.accounts.minter.key()),
        LazyClaimError::Unauthorized
    );
    require!(count > 0, LazyClaimError::InvalidInput);

    let first_token_id = collection.assign_token_ids(count as u32)?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(BaseMinted {
        collection: collection.key(),
        minter: ctx.accounts.minter.key(),
        first_token_id,
        count,
    });

    Ok(first_token_id)
}
