use anchor_lang::prelude::*;
use crate::{state::*, constants::*, errors::*};

// Vote Instruction
//
// Adds one vote to a candidate while its poll's window is open.
// No per-voter record is kept: the same voter may vote any number of times
// inside the window.

#[derive(Accounts)]
#[instruction(poll_id: u64, candidate_id: u64)]
pub struct Vote<'info> {
    pub voter: Signer<'info>,

    #[account(
        seeds = [POLL, poll_id.to_le_bytes().as_ref()],
        bump = poll_account.bump,
    )]
    pub poll_account: Box<Account<'info, PollAccount>>,

    // The back-reference must agree with the poll being voted in
    #[account(
        mut,
        seeds = [
            CANDIDATE,
            poll_id.to_le_bytes().as_ref(),
            candidate_id.to_le_bytes().as_ref(),
        ],
        bump = candidate_account.bump,
        constraint = candidate_account.poll_id == poll_id @ VotingError::CandidateMismatch,
    )]
    pub candidate_account: Box<Account<'info, CandidateAccount>>,
}

impl<'info> Vote<'info> {
    pub fn vote(&mut self, poll_id: u64, candidate_id: u64) -> Result<()> {
        // A negative clock precedes every window
        let now = u64::try_from(Clock::get()?.unix_timestamp)
            .map_err(|_| error!(VotingError::PollNotActive))?;
        self.poll_account.require_active(now)?;

        let vote_count = self.candidate_account.record_vote()?;

        emit!(VoteCast {
            poll_id,
            candidate_id,
            vote_count,
            timestamp: now,
        });
        msg!(
            "Vote by {} for candidate {} in poll {} ({} votes)",
            self.voter.key(),
            candidate_id,
            poll_id,
            vote_count
        );

        Ok(())
    }
}
