use anchor_lang::prelude::*;

/// Event emitted when a new collection is created
#[event]
pub struct CollectionCreated {
    /// The collection account public key
    pub collection: Pubkey,
    /// Nonce of the collection
    pub nonce: u32,
    /// Creator of the collection
    pub creator: Pubkey,
    /// Delegated administrator
    pub admin: Pubkey,
}

/// Event emitted when an administrator mints units outside any claim
#[event]
pub struct BaseMinted {
    /// The collection account public key
    pub collection: Pubkey,
    /// Administrator who minted
    pub minter: Pubkey,
    /// First token identifier assigned
    pub first_token_id: u64,
    /// Number of units minted
    pub count: u16,
}

/// Event emitted when a claim is initialized
#[event]
pub struct ClaimInitialized {
    /// The collection account public key
    pub collection: Pubkey,
    /// Claim id within the collection
    pub claim_id: u32,
    /// Administrator who initialized the claim
    pub initializer: Pubkey,
    /// Maximum units grantable under the claim; 0 = unlimited
    pub total_max: u32,
    /// Maximum units per wallet; 0 = unlimited
    pub wallet_max: u32,
    /// Active window of the claim
    pub start_time: i64,
    pub end_time: i64,
    /// Price per unit in lamports
    pub cost: u64,
    /// Wallet credited with collected payment
    pub payment_receiver: Pubkey,
}

/// Event emitted when a claim's parameters are updated
#[event]
pub struct ClaimUpdated {
    /// The collection account public key
    pub collection: Pubkey,
    /// Claim id within the collection
    pub claim_id: u32,
    /// Administrator who updated the claim
    pub updater: Pubkey,
    /// New maximum units grantable under the claim
    pub total_max: u32,
    /// New maximum units per wallet
    pub wallet_max: u32,
    /// New active window
    pub start_time: i64,
    pub end_time: i64,
    /// New price per unit in lamports
    pub cost: u64,
    /// Wallet credited with collected payment after the update
    pub payment_receiver: Pubkey,
}

/// Event emitted when units are minted under a claim
#[event]
pub struct ClaimMinted {
    /// The collection account public key
    pub collection: Pubkey,
    /// Claim id within the collection
    pub claim_id: u32,
    /// Wallet the units were granted to
    pub claimant: Pubkey,
    /// First token identifier assigned in this mint
    pub first_token_id: u64,
    /// Number of units granted
    pub count: u32,
    /// Payment forwarded to the claim's receiver
    pub payment: u64,
    /// Total units granted under the claim after this mint
    pub total_minted: u32,
}
