use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::ClaimParams;
use state::ClaimSummary;

/**
 * Lazy Claim Program
 *
 * A Solana program implementing lazy, allowlist-gated, payable minting
 * campaigns for asset collections. Instead of pre-allocating units, each
 * qualifying request is validated on arrival, payment is collected, and the
 * unit identifiers are assigned from the collection's shared counter.
 *
 * Key Features:
 * - Many independent claims per collection, each with its own price,
 *   capacity, time window, and allowlist
 * - Merkle tree-based allowlists where each (wallet, index) entry grants
 *   eligibility for exactly one unit
 * - Per-claim and per-wallet capacity enforcement
 * - Index range tracking so units keep a claim-relative position even when
 *   unrelated mints interleave on the shared identifier counter
 * - On-demand metadata resolution (shared or per-unit locations)
 *
 * Architecture:
 * - Creator Nonce PDA: tracks nonce counters for collection creation
 * - Collection PDA: the registry; owns the shared token identifier counter
 *   and the dense claim id counter
 * - Claim PDAs: one per campaign; parameters, counters, consumed-slot
 *   bitmap, and identifier ranges
 * - Wallet Minted PDAs: per-(claim, wallet) mint counters
 *
 * Workflow:
 * 1. Creator creates a collection and names an administrator
 * 2. An administrator initializes claims (and may update them later; caps
 *    can only ever grow)
 * 3. Wallets mint under a claim, singly or in batches, paying in lamports
 * 4. Metadata for any minted unit resolves through its claim-relative index
 */
#[program]
pub mod lazy_claim {
    use super::*;

    /**
     * Creates a new collection registry
     *
     * Initializes the collection with automatic nonce management and seeds
     * its shared token identifier counter and dense claim id counter.
     *
     * @param ctx - Account context containing nonce, collection, and creator
     * @param admin - Delegated administrator for the collection
     *
     * Access Control: Anyone; the signer becomes the collection creator
     */
    pub fn create_collection(ctx: Context<CreateCollection>, admin: Pubkey) -> Result<()> {
        handle_create_collection(ctx, admin)
    }

    /**
     * Mints units directly against the collection, outside any claim
     *
     * Advances the shared identifier counter without touching claim state.
     * This is the creation path that can interleave with claim mints.
     *
     * @param ctx - Account context containing collection and minter accounts
     * @param count - Number of consecutive identifiers to assign
     *
     * Access Control: Collection administrators only
     */
    pub fn mint_base(ctx: Context<MintBase>, count: u16) -> Result<u64> {
        handle_mint_base(ctx, count)
    }

    /**
     * Initializes a new claim under a collection
     *
     * @param ctx - Account context containing collection and claim accounts
     * @param claim_id - Must equal the collection's next dense claim id
     * @param params - Claim configuration
     *
     * Access Control: Collection administrators only
     */
    pub fn initialize_claim(
        ctx: Context<InitializeClaim>,
        claim_id: u32,
        params: ClaimParams,
    ) -> Result<()> {
        handle_initialize_claim(ctx, claim_id, params)
    }

    /**
     * Updates a claim's parameters
     *
     * Replaces the configurable fields wholesale; counters are preserved and
     * capacities may only grow.
     *
     * @param ctx - Account context containing collection and claim accounts
     * @param claim_id - Claim id within the collection
     * @param params - Replacement configuration
     *
     * Access Control: Collection administrators only
     */
    pub fn update_claim(
        ctx: Context<UpdateClaim>,
        claim_id: u32,
        params: ClaimParams,
    ) -> Result<()> {
        handle_update_claim(ctx, claim_id, params)
    }

    /**
     * Reads a claim's parameters and minted count
     *
     * @param ctx - Account context containing collection and claim accounts
     * @param claim_id - Claim id within the collection
     *
     * Access Control: Anyone
     */
    pub fn get_claim(ctx: Context<GetClaim>, claim_id: u32) -> Result<ClaimSummary> {
        handle_get_claim(ctx, claim_id)
    }

    /**
     * Mints a single unit under a claim
     *
     * @param ctx - Account context for the mint
     * @param claim_id - Claim id within the collection
     * @param mint_index - Allowlist entry index (ignored without allowlist)
     * @param merkle_proof - Proof for (claimant, mint_index)
     * @param payment - Lamports offered; surplus over the cost is kept
     *
     * Access Control: Any wallet with a valid proof when allowlisted
     */
    pub fn mint(
        ctx: Context<Mint>,
        claim_id: u32,
        mint_index: u32,
        merkle_proof: Vec<[u8; 32]>,
        payment: u64,
    ) -> Result<u64> {
        handle_mint(ctx, claim_id, mint_index, merkle_proof, payment)
    }

    /**
     * Mints several units under a claim in one call
     *
     * The batch draws one consecutive identifier block from the shared
     * counter, so it records at most one new index range.
     *
     * @param ctx - Account context for the mint
     * @param claim_id - Claim id within the collection
     * @param mint_count - Number of units requested
     * @param mint_indices - One allowlist entry index per unit
     * @param merkle_proofs - One proof per entry index
     * @param payment - Lamports offered; surplus over the cost is kept
     *
     * Access Control: Any wallet with valid proofs when allowlisted
     */
    pub fn mint_batch(
        ctx: Context<MintBatch>,
        claim_id: u32,
        mint_count: u16,
        mint_indices: Vec<u32>,
        merkle_proofs: Vec<Vec<[u8; 32]>>,
        payment: u64,
    ) -> Result<u64> {
        handle_mint_batch(ctx, claim_id, mint_count, mint_indices, merkle_proofs, payment)
    }

    /**
     * Resolves a token identifier to its metadata location
     *
     * @param ctx - Account context containing collection and claim accounts
     * @param claim_id - Claim the token is expected to belong to
     * @param token_id - Globally assigned token identifier
     *
     * Access Control: Anyone
     */
    pub fn token_uri(ctx: Context<TokenUri>, claim_id: u32, token_id: u64) -> Result<String> {
        handle_token_uri(ctx, claim_id, token_id)
    }
}
