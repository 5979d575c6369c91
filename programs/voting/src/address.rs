use anchor_lang::prelude::*;

use crate::constants::*;

// Program-derived addresses
//
// A PDA is pushed off the ed25519 curve by its bump, so no private key
// exists for it and nobody can sign as the record. Addresses are always
// recomputed from seeds; there is no reverse index.

pub fn derive_address(namespace: &[u8], seeds: &[&[u8]]) -> (Pubkey, u8) {
    let mut all_seeds: Vec<&[u8]> = Vec::with_capacity(seeds.len() + 1);
    all_seeds.push(namespace);
    all_seeds.extend_from_slice(seeds);
    Pubkey::find_program_address(&all_seeds, &crate::ID)
}

// Seeds: ["poll", poll_id (le)]
pub fn poll_address(poll_id: u64) -> (Pubkey, u8) {
    let poll_id = poll_id.to_le_bytes();
    derive_address(POLL, &[poll_id.as_slice()])
}

// Seeds: ["candidate", poll_id (le), candidate_id (le)]
pub fn candidate_address(poll_id: u64, candidate_id: u64) -> (Pubkey, u8) {
    let poll_id = poll_id.to_le_bytes();
    let candidate_id = candidate_id.to_le_bytes();
    derive_address(CANDIDATE, &[poll_id.as_slice(), candidate_id.as_slice()])
}
