use anchor_lang::prelude::*;

use crate::{constants::*, errors::VotingError};

// Candidate account
// One per (poll_id, candidate_id), at PDA ["candidate", poll_id, candidate_id]
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct CandidateAccount {
    // Back-reference to the owning poll
    pub poll_id: u64,

    pub candidate_id: u64,

    // Immutable after creation
    #[max_len(32)]
    pub candidate_name: String,

    // Monotonic tally, one per successful vote
    pub vote_count: u64,

    // PDA bump seed
    pub bump: u8,
}

impl CandidateAccount {
    pub const SPACE: usize = ANCHOR_DISCRIMINATOR + Self::INIT_SPACE;

    pub fn new(poll_id: u64, candidate_id: u64, candidate_name: String, bump: u8) -> Result<Self> {
        require!(
            candidate_name.len() <= MAX_CANDIDATE_NAME_LEN,
            VotingError::FieldTooLong
        );

        Ok(Self {
            poll_id,
            candidate_id,
            candidate_name,
            vote_count: 0,
            bump,
        })
    }

    pub fn require_poll(&self, poll_id: u64) -> Result<()> {
        require!(self.poll_id == poll_id, VotingError::CandidateMismatch);
        Ok(())
    }

    pub fn record_vote(&mut self) -> Result<u64> {
        self.vote_count = self
            .vote_count
            .checked_add(1)
            .ok_or(VotingError::Overflow)?;
        Ok(self.vote_count)
    }
}
