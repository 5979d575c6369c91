// Test utilities for the voting processor
#![allow(dead_code)]

use anchor_lang::{error::Error, prelude::*, AccountSerialize};
use ledger_core::LocalLedger;
use voting::processor;

// A fixed "now" so windows relative to it are deterministic
pub const NOW: u64 = 1_700_000_000;

// ======================== HELPERS ========================

pub fn setup_ledger() -> LocalLedger {
    LocalLedger::new(NOW)
}

/// Assert that `result` failed with exactly `expected`
pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: impl Into<Error>) {
    let expected: Error = expected.into();
    let error = result.expect_err("operation should have failed");
    assert_eq!(error, expected);
}

/// Write a serialized account straight into committed state,
/// padded to its full allocated size like a real record.
pub fn seed_account<T: AccountSerialize>(
    ledger: &mut LocalLedger,
    address: Pubkey,
    account: &T,
    space: usize,
) {
    let mut data = Vec::with_capacity(space);
    account
        .try_serialize(&mut data)
        .expect("Account should serialize");
    data.resize(space, 0);
    ledger.store_account(address, data);
}

// ======================== OPERATIONS ========================

pub fn initialize_poll(
    ledger: &mut LocalLedger,
    payer: &Pubkey,
    poll_id: u64,
    name: &str,
    description: &str,
    voting_start: u64,
    voting_end: u64,
) -> Result<Pubkey> {
    ledger.execute(&[*payer], |tx| {
        processor::initialize_poll(
            tx,
            payer,
            poll_id,
            name.to_string(),
            description.to_string(),
            voting_start,
            voting_end,
        )
    })
}

pub fn initialize_candidate(
    ledger: &mut LocalLedger,
    payer: &Pubkey,
    poll_id: u64,
    candidate_id: u64,
    name: &str,
) -> Result<Pubkey> {
    ledger.execute(&[*payer], |tx| {
        processor::initialize_candidate(tx, payer, poll_id, candidate_id, name.to_string())
    })
}

pub fn vote(
    ledger: &mut LocalLedger,
    voter: &Pubkey,
    poll_id: u64,
    candidate_id: u64,
) -> Result<u64> {
    ledger.execute(&[*voter], |tx| {
        processor::vote(tx, voter, poll_id, candidate_id)
    })
}

/// Poll with a window that is open around NOW and one candidate
pub fn setup_active_poll(
    ledger: &mut LocalLedger,
    payer: &Pubkey,
    poll_id: u64,
    candidate_id: u64,
) {
    initialize_poll(ledger, payer, poll_id, "Active", "Open now", NOW - 3600, NOW + 3600)
        .expect("Poll creation should succeed");
    initialize_candidate(ledger, payer, poll_id, candidate_id, "Candidate")
        .expect("Candidate creation should succeed");
}
