use anchor_lang::prelude::*;

use crate::error::LazyClaimError;
use crate::state::index_ranges::{self, IndexRange};
use crate::utils::merkle;

/// Merkle root value meaning "no allowlist, open to anyone"
pub const NO_ALLOWLIST: [u8; 32] = [0; 32];

/// How token metadata locations are derived for units minted under a claim
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MetadataMode {
    /// Every unit resolves to the claim's location unmodified
    #[default]
    Shared,
    /// Each unit resolves to location/<1-based claim-relative index>
    PerUnit,
}

impl MetadataMode {
    /// Decodes the wire representation; anything unrecognized is rejected
    pub fn from_u8(value: u8) -> Option<MetadataMode> {
        match value {
            1 => Some(MetadataMode::Shared),
            2 => Some(MetadataMode::PerUnit),
            _ => None,
        }
    }
}

/**
 * Claim parameters
 *
 * The caller-supplied configuration for initialize_claim and update_claim.
 * An update replaces every field wholesale; the claim's mutable counters are
 * never part of the parameters.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ClaimParams {
    /// Allowlist commitment; all zeros disables the allowlist
    pub merkle_root: [u8; 32],
    /// Off-chain metadata location pointer
    pub location: String,
    /// Maximum units ever grantable under the claim; 0 = unlimited
    pub total_max: u32,
    /// Maximum units one wallet may ever receive; 0 = unlimited
    pub wallet_max: u32,
    /// Start of the active window (inclusive); 0 disables the bound
    pub start_time: i64,
    /// End of the active window (exclusive); 0 disables the bound
    pub end_time: i64,
    /// Wire value of the metadata mode (1 = shared, 2 = per unit)
    pub metadata_mode: u8,
    /// Price per unit in lamports; 0 = free
    pub cost: u64,
    /// Wallet credited with collected payment
    pub payment_receiver: Pubkey,
}

impl ClaimParams {
    /// Validates the immutable-rule part of the parameters and decodes the
    /// metadata mode
    ///
    /// Validation Rules:
    /// - metadata_mode must decode (InvalidStorageMode)
    /// - start_time < end_time unless both are zero (InvalidClaimWindow)
    /// - an allowlist claim cannot also carry a wallet max; allowlist
    ///   entries, not wallets, are its capacity unit (ConflictingCapacityRule)
    pub fn validate(&self) -> Result<MetadataMode> {
        let mode = MetadataMode::from_u8(self.metadata_mode)
            .ok_or(LazyClaimError::InvalidStorageMode)?;
        if !(self.start_time == 0 && self.end_time == 0) {
            require!(
                self.start_time < self.end_time,
                LazyClaimError::InvalidClaimWindow
            );
        }
        require!(
            self.merkle_root == NO_ALLOWLIST || self.wallet_max == 0,
            LazyClaimError::ConflictingCapacityRule
        );
        Ok(mode)
    }
}

/**
 * Claim account
 *
 * One configured minting campaign within a collection. Stores the campaign
 * parameters, the running counters, the consumed allowlist entry bitmap, and
 * the index range list mapping globally assigned token identifiers back to
 * claim-relative positions.
 *
 * Derivation: ["claim", collection, claim_id]
 *
 * Lifecycle:
 * 1. Created by an administrator via initialize_claim
 * 2. Parameters replaced via update_claim (caps may only grow)
 * 3. Counters, bitmap and ranges advance only through successful mints
 * 4. Never closed; the record persists for the life of the collection
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimAccount {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Dense per-collection claim id, starting at 1; immutable
    pub claim_id: u32,

    /// Allowlist commitment; all zeros disables the allowlist
    pub merkle_root: [u8; 32],

    /// Off-chain metadata location pointer
    pub location: String,

    /// Maximum units ever grantable; 0 = unlimited
    pub total_max: u32,

    /// Maximum units one wallet may ever receive; 0 = unlimited
    pub wallet_max: u32,

    /// Active window [start_time, end_time); 0 disables a bound
    pub start_time: i64,
    pub end_time: i64,

    /// How metadata locations are derived for the claim's units
    pub metadata_mode: MetadataMode,

    /// Price per unit in lamports; 0 = free
    pub cost: u64,

    /// Wallet credited with collected payment
    pub payment_receiver: Pubkey,

    /// Running count of units granted under the claim
    pub total_minted: u32,

    /// Ordered, disjoint identifier ranges owned by the claim
    pub ranges: Vec<IndexRange>,

    /// Bitmap of consumed allowlist entry indices
    pub used_slots: Vec<u8>,
}

impl ClaimAccount {
    /// Account space for the given dynamic-field sizes
    /// - 8-byte discriminator + fixed fields + length-prefixed vecs
    pub fn required_space(location_len: usize, range_count: usize, slot_bytes: usize) -> usize {
        8    // discriminator
            + 1  // bump
            + 4  // claim_id
            + 32 // merkle_root
            + 4 + location_len
            + 4  // total_max
            + 4  // wallet_max
            + 8  // start_time
            + 8  // end_time
            + 1  // metadata_mode
            + 8  // cost
            + 32 // payment_receiver
            + 4  // total_minted
            + 4 + range_count * IndexRange::LEN
            + 4 + slot_bytes
    }

    /// Whether mints against this claim require allowlist proofs
    pub fn allowlist_enabled(&self) -> bool {
        self.merkle_root != NO_ALLOWLIST
    }

    /// Validates an update against the stored record
    ///
    /// Beyond the parameter rules, capacities may never shrink: a non-zero
    /// total_max or wallet_max cannot be lowered, and a previously unlimited
    /// (zero) capacity cannot be set below what was already minted.
    pub fn validate_update(&self, params: &ClaimParams) -> Result<MetadataMode> {
        let mode = params.validate()?;
        require!(
            params.total_max >= self.total_max,
            LazyClaimError::CapacityDecreased
        );
        if self.total_max == 0 && params.total_max != 0 {
            require!(
                params.total_max >= self.total_minted,
                LazyClaimError::CapacityDecreased
            );
        }
        require!(
            params.wallet_max >= self.wallet_max,
            LazyClaimError::CapacityDecreased
        );
        Ok(mode)
    }

    /// Replaces the configurable fields, leaving every mutable counter
    /// (total_minted, ranges, used_slots) untouched
    pub fn apply_params(&mut self, params: ClaimParams, mode: MetadataMode) {
        self.merkle_root = params.merkle_root;
        self.location = params.location;
        self.total_max = params.total_max;
        self.wallet_max = params.wallet_max;
        self.start_time = params.start_time;
        self.end_time = params.end_time;
        self.metadata_mode = mode;
        self.cost = params.cost;
        self.payment_receiver = params.payment_receiver;
    }

    /// Validates a mint request without mutating anything
    ///
    /// Checks run in a fixed order and the first violated one wins:
    /// 1. active window (ClaimNotStarted / ClaimEnded)
    /// 2. request shape: non-zero quantity; with an allowlist, exactly one
    ///    entry index and one proof per unit and no duplicate indices
    ///    (InvalidInput)
    /// 3. wallet capacity (WalletMaxExceeded)
    /// 4. claim capacity (TotalMaxExceeded)
    /// 5. payment covers cost * quantity (InsufficientPayment)
    pub fn validate_mint(
        &self,
        now: i64,
        quantity: u32,
        wallet_minted: u32,
        payment: u64,
        mint_indices: &[u32],
        proof_count: usize,
    ) -> Result<()> {
        require!(
            self.start_time == 0 || now >= self.start_time,
            LazyClaimError::ClaimNotStarted
        );
        require!(
            self.end_time == 0 || now < self.end_time,
            LazyClaimError::ClaimEnded
        );

        require!(quantity > 0, LazyClaimError::InvalidInput);
        if self.allowlist_enabled() {
            require!(
                mint_indices.len() == quantity as usize && proof_count == quantity as usize,
                LazyClaimError::InvalidInput
            );
            // Batches are small; a quadratic duplicate scan is cheaper than
            // allocating a set on-chain
            for (i, index) in mint_indices.iter().enumerate() {
                require!(
                    !mint_indices[..i].contains(index),
                    LazyClaimError::InvalidInput
                );
            }
        }

        if self.wallet_max != 0 {
            let new_wallet_count = wallet_minted
                .checked_add(quantity)
                .ok_or(LazyClaimError::ArithmeticOverflow)?;
            require!(
                new_wallet_count <= self.wallet_max,
                LazyClaimError::WalletMaxExceeded
            );
        }
        if self.total_max != 0 {
            let new_total = self
                .total_minted
                .checked_add(quantity)
                .ok_or(LazyClaimError::ArithmeticOverflow)?;
            require!(new_total <= self.total_max, LazyClaimError::TotalMaxExceeded);
        }

        let required_payment = self
            .cost
            .checked_mul(quantity as u64)
            .ok_or(LazyClaimError::ArithmeticOverflow)?;
        require!(
            payment >= required_payment,
            LazyClaimError::InsufficientPayment
        );

        Ok(())
    }

    /// Checks every requested allowlist entry without consuming any
    ///
    /// Per unit: the entry index must not already be consumed
    /// (SlotAlreadyMinted) and the proof must verify the leaf
    /// keccak(claimant, entry_index) against the stored root (InvalidProof).
    /// A no-allowlist claim accepts any request here.
    pub fn check_allowlist(
        &self,
        claimant: &Pubkey,
        mint_indices: &[u32],
        merkle_proofs: &[Vec<[u8; 32]>],
    ) -> Result<()> {
        if !self.allowlist_enabled() {
            return Ok(());
        }
        for (index, proof) in mint_indices.iter().zip(merkle_proofs.iter()) {
            require!(!self.slot_used(*index), LazyClaimError::SlotAlreadyMinted);
            let leaf = merkle::allowlist_leaf(claimant, *index);
            require!(
                merkle::verify(proof, self.merkle_root, leaf),
                LazyClaimError::InvalidProof
            );
        }
        Ok(())
    }

    /// Consumes the given allowlist entry indices
    ///
    /// Must only be called after check_allowlist has accepted the request.
    pub fn mark_allowlist(&mut self, mint_indices: &[u32]) {
        for index in mint_indices {
            let byte = (*index / 8) as usize;
            if byte >= self.used_slots.len() {
                self.used_slots.resize(byte + 1, 0);
            }
            self.used_slots[byte] |= 1 << (index % 8);
        }
    }

    /// Whether the given allowlist entry index has already been consumed
    pub fn slot_used(&self, index: u32) -> bool {
        let byte = (index / 8) as usize;
        byte < self.used_slots.len() && self.used_slots[byte] & (1 << (index % 8)) != 0
    }

    /// Bitmap size needed once the given entry indices are consumed
    pub fn slot_bytes_required(&self, mint_indices: &[u32]) -> usize {
        let mut bytes = self.used_slots.len();
        if self.allowlist_enabled() {
            for index in mint_indices {
                bytes = bytes.max((*index / 8) as usize + 1);
            }
        }
        bytes
    }

    /// Records a successful grant of `quantity` consecutive identifiers
    /// starting at `first_token_id`
    pub fn record_mint(&mut self, first_token_id: u64, quantity: u32) -> Result<()> {
        self.total_minted = self
            .total_minted
            .checked_add(quantity)
            .ok_or(LazyClaimError::ArithmeticOverflow)?;
        index_ranges::record(&mut self.ranges, first_token_id, quantity);
        Ok(())
    }

    /// Resolves a token identifier to its metadata location
    ///
    /// Fails with TokenNotFound when the identifier was not granted under
    /// this claim.
    pub fn token_uri(&self, token_id: u64) -> Result<String> {
        let index = index_ranges::resolve(&self.ranges, token_id)
            .ok_or(LazyClaimError::TokenNotFound)?;
        Ok(match self.metadata_mode {
            MetadataMode::Shared => self.location.clone(),
            MetadataMode::PerUnit => format!("{}/{}", self.location, index as u64 + 1),
        })
    }

    /// View of the claim returned by get_claim
    pub fn summary(&self) -> ClaimSummary {
        ClaimSummary {
            claim_id: self.claim_id,
            merkle_root: self.merkle_root,
            location: self.location.clone(),
            total_max: self.total_max,
            wallet_max: self.wallet_max,
            start_time: self.start_time,
            end_time: self.end_time,
            metadata_mode: self.metadata_mode,
            cost: self.cost,
            payment_receiver: self.payment_receiver,
            total_minted: self.total_minted,
        }
    }
}

/// Claim view returned through instruction return data
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ClaimSummary {
    pub claim_id: u32,
    pub merkle_root: [u8; 32],
    pub location: String,
    pub total_max: u32,
    pub wallet_max: u32,
    pub start_time: i64,
    pub end_time: i64,
    pub metadata_mode: MetadataMode,
    pub cost: u64,
    pub payment_receiver: Pubkey,
    pub total_minted: u32,
}
