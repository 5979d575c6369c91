use anchor_lang::prelude::*;

use crate::{constants::*, errors::VotingError};

// Poll account
// One per poll_id, at PDA ["poll", poll_id]
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct PollAccount {
    // Caller-chosen identifier, also the PDA seed
    pub poll_id: u64,

    #[max_len(32)]
    pub poll_name: String,

    #[max_len(280)]
    pub poll_description: String,

    // Voting window in unix seconds, inclusive on both ends.
    // start > end is accepted and yields a poll that is never active.
    pub poll_voting_start: u64,
    pub poll_voting_end: u64,

    // Number of candidates registered under this poll (monotonic)
    pub candidate_count: u64,

    // PDA bump seed
    pub bump: u8,
}

impl PollAccount {
    pub const SPACE: usize = ANCHOR_DISCRIMINATOR + Self::INIT_SPACE;

    pub fn new(
        poll_id: u64,
        poll_name: String,
        poll_description: String,
        poll_voting_start: u64,
        poll_voting_end: u64,
        bump: u8,
    ) -> Result<Self> {
        require!(
            poll_name.len() <= MAX_POLL_NAME_LEN,
            VotingError::FieldTooLong
        );
        require!(
            poll_description.len() <= MAX_POLL_DESCRIPTION_LEN,
            VotingError::FieldTooLong
        );

        Ok(Self {
            poll_id,
            poll_name,
            poll_description,
            poll_voting_start,
            poll_voting_end,
            candidate_count: 0,
            bump,
        })
    }

    pub fn is_active(&self, now: u64) -> bool {
        self.poll_voting_start <= now && now <= self.poll_voting_end
    }

    pub fn require_active(&self, now: u64) -> Result<()> {
        require!(self.is_active(now), VotingError::PollNotActive);
        Ok(())
    }

    // Bump the candidate counter, returning the new count
    pub fn register_candidate(&mut self) -> Result<u64> {
        self.candidate_count = self
            .candidate_count
            .checked_add(1)
            .ok_or(VotingError::Overflow)?;
        Ok(self.candidate_count)
    }
}
