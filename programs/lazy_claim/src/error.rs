use anchor_lang::prelude::*;

#[error_code]
pub enum LazyClaimError {
    // Access control errors
    #[msg("Wallet is not an administrator for collection")]
    Unauthorized,

    // Claim configuration errors
    #[msg("Claim id does not match the next claim id for this collection")]
    InvalidClaimId,
    #[msg("Cannot initialize with invalid storage mode")]
    InvalidStorageMode,
    #[msg("Cannot have start time greater than or equal to end time")]
    InvalidClaimWindow,
    #[msg("Cannot provide both wallet max and merkle root")]
    ConflictingCapacityRule,
    #[msg("Cannot decrease total max or wallet max")]
    CapacityDecreased,

    // Mint timing errors
    #[msg("Claim inactive")]
    ClaimNotStarted,
    #[msg("Claim has ended")]
    ClaimEnded,

    // Mint request errors
    #[msg("Invalid input")]
    InvalidInput,
    #[msg("Too many requested for this wallet")]
    WalletMaxExceeded,
    #[msg("Too many requested for this claim")]
    TotalMaxExceeded,
    #[msg("Must pay more")]
    InsufficientPayment,
    #[msg("Already minted")]
    SlotAlreadyMinted,
    #[msg("Could not verify merkle proof")]
    InvalidProof,

    // Resolution errors
    #[msg("Token does not belong to this claim")]
    TokenNotFound,

    // System level errors
    #[msg("Payment receiver does not match the claim")]
    PaymentReceiverMismatch,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
