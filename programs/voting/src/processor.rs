//! Ledger-driven voting state machine.
//!
//! The same poll/candidate rules as the on-chain instructions, expressed as
//! functions over an injected [`Ledger`]. Each function is meant to run inside
//! one ledger transaction: it either returns `Ok` with every write staged, or
//! an error, in which case the caller's transaction discards all of it.

use anchor_lang::prelude::*;
use ledger_core::{load, store, Ledger};

use crate::{address::*, errors::VotingError, state::*};

fn require_signer<L: Ledger + ?Sized>(ledger: &L, identity: &Pubkey) -> Result<()> {
    require!(ledger.verify_signer(identity), VotingError::Unauthorized);
    Ok(())
}

// Create-if-absent. An occupied address surfaces as the caller's duplicate error.
fn create_record<L: Ledger + ?Sized>(
    ledger: &mut L,
    address: &Pubkey,
    space: usize,
    duplicate: VotingError,
) -> Result<()> {
    ledger.create(address, space).map_err(|error| match error {
        ProgramError::AccountAlreadyInitialized => duplicate.into(),
        other => other.into(),
    })
}

/// Create poll `poll_id`. Returns the poll's address.
pub fn initialize_poll<L: Ledger + ?Sized>(
    ledger: &mut L,
    payer: &Pubkey,
    poll_id: u64,
    poll_name: String,
    poll_description: String,
    poll_voting_start: u64,
    poll_voting_end: u64,
) -> Result<Pubkey> {
    require_signer(&*ledger, payer)?;

    let (address, bump) = poll_address(poll_id);
    create_record(ledger, &address, PollAccount::SPACE, VotingError::DuplicatePoll)?;

    let poll = PollAccount::new(
        poll_id,
        poll_name,
        poll_description,
        poll_voting_start,
        poll_voting_end,
        bump,
    )?;
    store(ledger, &address, &poll)?;

    emit!(PollInitialized {
        poll_id,
        voting_start: poll_voting_start,
        voting_end: poll_voting_end,
    });
    msg!(
        "Poll {} initialized, voting window [{}, {}]",
        poll_id,
        poll_voting_start,
        poll_voting_end
    );

    Ok(address)
}

/// Register candidate `candidate_id` under poll `poll_id`. Returns the
/// candidate's address.
pub fn initialize_candidate<L: Ledger + ?Sized>(
    ledger: &mut L,
    payer: &Pubkey,
    poll_id: u64,
    candidate_id: u64,
    candidate_name: String,
) -> Result<Pubkey> {
    require_signer(&*ledger, payer)?;

    let (poll_key, _) = poll_address(poll_id);
    let mut poll: PollAccount =
        load(&*ledger, &poll_key)?.ok_or(VotingError::PollNotFound)?;

    let (address, bump) = candidate_address(poll_id, candidate_id);
    create_record(
        ledger,
        &address,
        CandidateAccount::SPACE,
        VotingError::DuplicateCandidate,
    )?;

    let candidate = CandidateAccount::new(poll_id, candidate_id, candidate_name, bump)?;
    let candidate_count = poll.register_candidate()?;

    store(ledger, &address, &candidate)?;
    store(ledger, &poll_key, &poll)?;

    emit!(CandidateInitialized {
        poll_id,
        candidate_id,
        candidate_count,
    });
    msg!(
        "Candidate {} registered in poll {} ({} total)",
        candidate_id,
        poll_id,
        candidate_count
    );

    Ok(address)
}

/// Cast one vote. Returns the candidate's new tally.
pub fn vote<L: Ledger + ?Sized>(
    ledger: &mut L,
    voter: &Pubkey,
    poll_id: u64,
    candidate_id: u64,
) -> Result<u64> {
    require_signer(&*ledger, voter)?;

    let (poll_key, _) = poll_address(poll_id);
    let poll: PollAccount = load(&*ledger, &poll_key)?.ok_or(VotingError::PollNotFound)?;

    let (candidate_key, _) = candidate_address(poll_id, candidate_id);
    let mut candidate: CandidateAccount =
        load(&*ledger, &candidate_key)?.ok_or(VotingError::CandidateNotFound)?;
    candidate.require_poll(poll_id)?;

    let now = ledger.current_time();
    poll.require_active(now)?;

    let vote_count = candidate.record_vote()?;
    store(ledger, &candidate_key, &candidate)?;

    emit!(VoteCast {
        poll_id,
        candidate_id,
        vote_count,
        timestamp: now,
    });
    msg!(
        "Vote by {} for candidate {} in poll {} ({} votes)",
        voter,
        candidate_id,
        poll_id,
        vote_count
    );

    Ok(vote_count)
}

pub fn fetch_poll<L: Ledger + ?Sized>(ledger: &L, poll_id: u64) -> Result<PollAccount> {
    let (address, _) = poll_address(poll_id);
    load(ledger, &address)?.ok_or_else(|| error!(VotingError::PollNotFound))
}

pub fn fetch_candidate<L: Ledger + ?Sized>(
    ledger: &L,
    poll_id: u64,
    candidate_id: u64,
) -> Result<CandidateAccount> {
    let (address, _) = candidate_address(poll_id, candidate_id);
    load(ledger, &address)?.ok_or_else(|| error!(VotingError::CandidateNotFound))
}
