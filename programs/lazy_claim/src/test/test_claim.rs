use anchor_lang::solana_program::pubkey::Pubkey;

use super::assert_lazy_err;
use super::test_merkle::{SimpleMerkleTree, TreeNode};
use crate::error::LazyClaimError;
use crate::state::{ClaimAccount, ClaimParams, Collection, MetadataMode, NO_ALLOWLIST};

fn open_params() -> ClaimParams {
    ClaimParams {
        merkle_root: NO_ALLOWLIST,
        location: "XXX".to_string(),
        total_max: 0,
        wallet_max: 0,
        start_time: 0,
        end_time: 0,
        metadata_mode: 2, // per unit
        cost: 0,
        payment_receiver: Pubkey::new_unique(),
    }
}

fn make_claim(params: ClaimParams) -> ClaimAccount {
    let mode = params.validate().expect("valid params");
    let mut claim = ClaimAccount {
        claim_id: 1,
        ..Default::default()
    };
    claim.apply_params(params, mode);
    claim
}

fn make_collection() -> Collection {
    Collection {
        next_token_id: 1,
        next_claim_id: 1,
        creator: Pubkey::new_unique(),
        admin: Pubkey::new_unique(),
        ..Default::default()
    }
}

// ===== Parameter validation =====

#[test]
fn test_param_sanitization() {
    let params = open_params();
    assert_eq!(params.validate().unwrap(), MetadataMode::PerUnit);

    let mut params = open_params();
    params.metadata_mode = 1;
    assert_eq!(params.validate().unwrap(), MetadataMode::Shared);

    // Unrecognized storage modes
    let mut params = open_params();
    params.metadata_mode = 0;
    assert_lazy_err(params.validate(), LazyClaimError::InvalidStorageMode);
    params.metadata_mode = 3;
    assert_lazy_err(params.validate(), LazyClaimError::InvalidStorageMode);
}

#[test]
fn test_window_sanitization() {
    // start >= end is rejected when windowing is enabled
    let mut params = open_params();
    params.start_time = 100;
    params.end_time = 100;
    assert_lazy_err(params.validate(), LazyClaimError::InvalidClaimWindow);

    params.end_time = 50;
    assert_lazy_err(params.validate(), LazyClaimError::InvalidClaimWindow);

    // end bound must still exceed a disabled start bound
    params.start_time = 100;
    params.end_time = 0;
    assert_lazy_err(params.validate(), LazyClaimError::InvalidClaimWindow);

    params.start_time = 100;
    params.end_time = 200;
    assert!(params.validate().is_ok());

    // both zero disables windowing entirely
    params.start_time = 0;
    params.end_time = 0;
    assert!(params.validate().is_ok());

    // a lone end bound is a valid window starting immediately
    params.end_time = 200;
    assert!(params.validate().is_ok());
}

#[test]
fn test_allowlist_excludes_wallet_max() {
    let mut params = open_params();
    params.merkle_root = [7; 32];
    params.wallet_max = 1;
    assert_lazy_err(params.validate(), LazyClaimError::ConflictingCapacityRule);

    params.wallet_max = 0;
    assert!(params.validate().is_ok());
}

// ===== Update rules =====

#[test]
fn test_update_cannot_decrease_caps() {
    let mut params = open_params();
    params.total_max = 10;
    params.wallet_max = 2;
    let claim = make_claim(params.clone());

    let mut lower = params.clone();
    lower.total_max = 9;
    assert_lazy_err(claim.validate_update(&lower), LazyClaimError::CapacityDecreased);

    // Zero means unlimited, so going non-zero -> zero is also a decrease
    let mut unlimited = params.clone();
    unlimited.total_max = 0;
    assert_lazy_err(
        claim.validate_update(&unlimited),
        LazyClaimError::CapacityDecreased,
    );

    let mut lower_wallet = params.clone();
    lower_wallet.wallet_max = 1;
    assert_lazy_err(
        claim.validate_update(&lower_wallet),
        LazyClaimError::CapacityDecreased,
    );

    let mut raise = params;
    raise.total_max = 11;
    raise.wallet_max = 3;
    assert!(claim.validate_update(&raise).is_ok());
}

#[test]
fn test_update_unlimited_to_bounded() {
    // total_max 0 with 5 already minted
    let mut claim = make_claim(open_params());
    claim.total_minted = 5;

    let mut params = open_params();
    params.total_max = 4;
    assert_lazy_err(claim.validate_update(&params), LazyClaimError::CapacityDecreased);

    params.total_max = 5;
    assert!(claim.validate_update(&params).is_ok());
}

#[test]
fn test_update_preserves_counters() {
    let mut claim = make_claim(open_params());
    claim.record_mint(1, 3).unwrap();
    claim.used_slots = vec![0b101];
    assert_eq!(claim.total_minted, 3);

    let mut params = open_params();
    params.location = "YYY".to_string();
    params.cost = 42;
    params.metadata_mode = 1;
    let mode = claim.validate_update(&params).unwrap();
    claim.apply_params(params, mode);

    assert_eq!(claim.total_minted, 3);
    assert_eq!(claim.ranges.len(), 1);
    assert_eq!(claim.used_slots, vec![0b101]);
    assert_eq!(claim.location, "YYY");
    assert_eq!(claim.cost, 42);
    assert_eq!(claim.metadata_mode, MetadataMode::Shared);
}

// ===== Mint validation =====

#[test]
fn test_mint_window_checks() {
    let mut params = open_params();
    params.start_time = 100;
    params.end_time = 200;
    let claim = make_claim(params);

    assert_lazy_err(
        claim.validate_mint(99, 1, 0, 0, &[], 0),
        LazyClaimError::ClaimNotStarted,
    );
    // window end is exclusive
    assert_lazy_err(
        claim.validate_mint(200, 1, 0, 0, &[], 0),
        LazyClaimError::ClaimEnded,
    );
    assert!(claim.validate_mint(100, 1, 0, 0, &[], 0).is_ok());
    assert!(claim.validate_mint(199, 1, 0, 0, &[], 0).is_ok());

    let open = make_claim(open_params());
    assert!(open.validate_mint(0, 1, 0, 0, &[], 0).is_ok());
    assert!(open.validate_mint(i64::MAX, 1, 0, 0, &[], 0).is_ok());
}

#[test]
fn test_mint_request_shape() {
    let claim = make_claim(open_params());
    assert_lazy_err(
        claim.validate_mint(0, 0, 0, 0, &[], 0),
        LazyClaimError::InvalidInput,
    );

    let mut params = open_params();
    params.merkle_root = [7; 32];
    let gated = make_claim(params);

    // one entry index and one proof per requested unit
    assert_lazy_err(
        gated.validate_mint(0, 2, 0, 0, &[0], 1),
        LazyClaimError::InvalidInput,
    );
    assert_lazy_err(
        gated.validate_mint(0, 1, 0, 0, &[0, 1], 1),
        LazyClaimError::InvalidInput,
    );
    assert_lazy_err(
        gated.validate_mint(0, 1, 0, 0, &[0], 2),
        LazyClaimError::InvalidInput,
    );
    // duplicate entry indices within one request
    assert_lazy_err(
        gated.validate_mint(0, 2, 0, 0, &[3, 3], 2),
        LazyClaimError::InvalidInput,
    );
    assert!(gated.validate_mint(0, 2, 0, 0, &[3, 4], 2).is_ok());
}

#[test]
fn test_mint_capacity_checks() {
    let mut params = open_params();
    params.total_max = 3;
    params.wallet_max = 2;
    let claim = make_claim(params);

    assert_lazy_err(
        claim.validate_mint(0, 3, 0, 0, &[], 0),
        LazyClaimError::WalletMaxExceeded,
    );
    assert_lazy_err(
        claim.validate_mint(0, 1, 2, 0, &[], 0),
        LazyClaimError::WalletMaxExceeded,
    );

    let mut claim = claim;
    claim.total_minted = 2;
    assert_lazy_err(
        claim.validate_mint(0, 2, 0, 0, &[], 0),
        LazyClaimError::TotalMaxExceeded,
    );
    assert!(claim.validate_mint(0, 1, 0, 0, &[], 0).is_ok());
}

#[test]
fn test_mint_payment_checks() {
    let mut params = open_params();
    params.cost = 5;
    let claim = make_claim(params);

    assert_lazy_err(
        claim.validate_mint(0, 2, 0, 9, &[], 0),
        LazyClaimError::InsufficientPayment,
    );
    assert!(claim.validate_mint(0, 2, 0, 10, &[], 0).is_ok());
    // surplus payment is accepted, not refunded
    assert!(claim.validate_mint(0, 2, 0, 100, &[], 0).is_ok());
}

#[test]
fn test_wallet_cap_enforced_over_time() {
    let mut params = open_params();
    params.wallet_max = 3;
    let claim = make_claim(params);

    // after 2 of 3, a request for 2 more fails but 1 more passes
    assert_lazy_err(
        claim.validate_mint(0, 2, 2, 0, &[], 0),
        LazyClaimError::WalletMaxExceeded,
    );
    assert!(claim.validate_mint(0, 1, 2, 0, &[], 0).is_ok());
}

// ===== Allowlist consumption =====

#[test]
fn test_allowlist_flow() {
    let wallet_a = Pubkey::new_unique();
    let wallet_b = Pubkey::new_unique();
    let tree = SimpleMerkleTree::new(vec![
        TreeNode {
            claimant: wallet_a,
            mint_index: 0,
        },
        TreeNode {
            claimant: wallet_b,
            mint_index: 1,
        },
        TreeNode {
            claimant: wallet_b,
            mint_index: 2,
        },
    ]);

    let mut params = open_params();
    params.merkle_root = tree.get_root();
    let mut claim = make_claim(params);

    let proof_a = tree.get_proof(0).unwrap();

    // B presenting A's entry fails proof verification
    assert_lazy_err(
        claim.check_allowlist(&wallet_b, &[0], &[proof_a.clone()]),
        LazyClaimError::InvalidProof,
    );

    // A consumes entry 0
    assert!(claim
        .check_allowlist(&wallet_a, &[0], &[proof_a.clone()])
        .is_ok());
    claim.mark_allowlist(&[0]);
    claim.record_mint(1, 1).unwrap();

    // The same entry cannot be consumed twice, even with a valid proof
    assert_lazy_err(
        claim.check_allowlist(&wallet_a, &[0], &[proof_a]),
        LazyClaimError::SlotAlreadyMinted,
    );

    // B batch-consumes entries 1 and 2
    let proofs_b = vec![tree.get_proof(1).unwrap(), tree.get_proof(2).unwrap()];
    assert!(claim.validate_mint(0, 2, 0, 0, &[1, 2], 2).is_ok());
    assert!(claim.check_allowlist(&wallet_b, &[1, 2], &proofs_b).is_ok());
    claim.mark_allowlist(&[1, 2]);
    claim.record_mint(2, 2).unwrap();

    assert_eq!(claim.total_minted, 3);
    for index in 0..3 {
        assert!(claim.slot_used(index));
    }
}

#[test]
fn test_check_allowlist_leaves_state_untouched() {
    let wallet_a = Pubkey::new_unique();
    let tree = SimpleMerkleTree::new(vec![
        TreeNode {
            claimant: wallet_a,
            mint_index: 0,
        },
        TreeNode {
            claimant: wallet_a,
            mint_index: 1,
        },
    ]);

    let mut params = open_params();
    params.merkle_root = tree.get_root();
    let claim = make_claim(params);

    // A failing second proof must not have consumed the first entry
    let good = tree.get_proof(0).unwrap();
    let bad = vec![[0u8; 32]];
    assert_lazy_err(
        claim.check_allowlist(&wallet_a, &[0, 1], &[good, bad]),
        LazyClaimError::InvalidProof,
    );
    assert!(!claim.slot_used(0));
    assert!(!claim.slot_used(1));
}

#[test]
fn test_slot_bitmap() {
    let mut params = open_params();
    params.merkle_root = [7; 32];
    let mut claim = make_claim(params);

    for index in [0u32, 7, 8, 255, 256] {
        assert!(!claim.slot_used(index));
        claim.mark_allowlist(&[index]);
        assert!(claim.slot_used(index));
    }
    // neighbors untouched
    assert!(!claim.slot_used(1));
    assert!(!claim.slot_used(9));
    assert!(!claim.slot_used(254));

    assert_eq!(claim.slot_bytes_required(&[255]), claim.used_slots.len());
    assert_eq!(claim.slot_bytes_required(&[1023]), 128);
}

#[test]
fn test_open_claim_ignores_entry_indices() {
    // A caller may pass entry indices to an open claim; they carry no
    // meaning and must not consume bitmap slots
    let mut collection = make_collection();
    let mut claim = make_claim(open_params());
    let stray = [5u32, 300];

    claim.validate_mint(0, 2, 0, 0, &stray, 2).unwrap();
    claim
        .check_allowlist(&Pubkey::new_unique(), &stray, &[vec![], vec![]])
        .unwrap();
    assert_eq!(claim.slot_bytes_required(&stray), 0);
    if claim.allowlist_enabled() {
        claim.mark_allowlist(&stray);
    }
    let first = collection.assign_token_ids(2).unwrap();
    claim.record_mint(first, 2).unwrap();

    assert!(claim.used_slots.is_empty());
    assert!(!claim.slot_used(5));
    assert!(!claim.slot_used(300));

    // When the claim is gated afterwards, entry 5 is still claimable by
    // the wallet the tree commits it to
    let wallet = Pubkey::new_unique();
    let tree = SimpleMerkleTree::new(vec![TreeNode {
        claimant: wallet,
        mint_index: 5,
    }]);
    let mut params = open_params();
    params.merkle_root = tree.get_root();
    let mode = claim.validate_update(&params).unwrap();
    claim.apply_params(params, mode);

    let proof = tree.get_proof(0).unwrap();
    assert!(claim.check_allowlist(&wallet, &[5], &[proof.clone()]).is_ok());
    claim.mark_allowlist(&[5]);
    assert_lazy_err(
        claim.check_allowlist(&wallet, &[5], &[proof]),
        LazyClaimError::SlotAlreadyMinted,
    );
}

// ===== End-to-end scenarios over the pure state =====

#[test]
fn test_total_cap_scenario() {
    // totalCap=3, no allowlist, unitPrice=1; three wallets mint, the fourth
    // is rejected until the cap is raised to 4
    let mut collection = make_collection();
    let mut params = open_params();
    params.total_max = 3;
    params.cost = 1;
    let mut claim = make_claim(params.clone());

    for _ in 0..3 {
        claim.validate_mint(0, 1, 0, 1, &[], 0).unwrap();
        let first = collection.assign_token_ids(1).unwrap();
        claim.record_mint(first, 1).unwrap();
    }
    assert_eq!(claim.total_minted, 3);

    assert_lazy_err(
        claim.validate_mint(0, 1, 0, 1, &[], 0),
        LazyClaimError::TotalMaxExceeded,
    );

    params.total_max = 4;
    let mode = claim.validate_update(&params).unwrap();
    claim.apply_params(params, mode);

    claim.validate_mint(0, 1, 0, 1, &[], 0).unwrap();
    let first = collection.assign_token_ids(1).unwrap();
    claim.record_mint(first, 1).unwrap();
    assert_eq!(claim.total_minted, 4);
    assert_eq!(collection.next_token_id, 5);
}

#[test]
fn test_last_unit_contention() {
    // Only one of two requests for the final unit can win
    let mut params = open_params();
    params.total_max = 1;
    let mut claim = make_claim(params);

    claim.validate_mint(0, 1, 0, 0, &[], 0).unwrap();
    claim.record_mint(1, 1).unwrap();
    assert_lazy_err(
        claim.validate_mint(0, 1, 0, 0, &[], 0),
        LazyClaimError::TotalMaxExceeded,
    );
}

#[test]
fn test_per_unit_metadata_across_gap() {
    // First claim mint takes id 7, an unrelated mint takes 8, the next claim
    // mint takes 9; positions stay 1 and 2
    let mut collection = make_collection();
    let mut claim = make_claim(open_params());
    assert_eq!(claim.metadata_mode, MetadataMode::PerUnit);

    collection.assign_token_ids(6).unwrap(); // ids 1-6 minted elsewhere
    let first = collection.assign_token_ids(1).unwrap();
    assert_eq!(first, 7);
    claim.record_mint(first, 1).unwrap();
    assert_eq!(claim.token_uri(7).unwrap(), "XXX/1");

    collection.assign_token_ids(1).unwrap(); // id 8 minted outside the claim
    let next = collection.assign_token_ids(1).unwrap();
    assert_eq!(next, 9);
    claim.record_mint(next, 1).unwrap();

    assert_eq!(claim.token_uri(7).unwrap(), "XXX/1");
    assert_eq!(claim.token_uri(9).unwrap(), "XXX/2");
    assert_lazy_err(claim.token_uri(8), LazyClaimError::TokenNotFound);
}

#[test]
fn test_shared_metadata() {
    let mut params = open_params();
    params.metadata_mode = 1;
    let mut claim = make_claim(params);

    claim.record_mint(4, 3).unwrap();
    for token_id in 4..7 {
        assert_eq!(claim.token_uri(token_id).unwrap(), "XXX");
    }
    assert_lazy_err(claim.token_uri(7), LazyClaimError::TokenNotFound);
}

#[test]
fn test_dense_claim_ids() {
    let mut collection = make_collection();
    assert_eq!(collection.assign_claim_id().unwrap(), 1);
    assert_eq!(collection.assign_claim_id().unwrap(), 2);
    assert_eq!(collection.assign_claim_id().unwrap(), 3);
    assert_eq!(collection.next_claim_id, 4);
}
