use anchor_lang::prelude::*;
use crate::{state::*, constants::*};

// Initialize Candidate Instruction
//
// Registers a candidate under an existing poll and bumps the poll's
// candidate_count. Both writes land in the same transaction: if the counter
// overflows, the candidate account creation is rolled back with it.

#[derive(Accounts)]
#[instruction(poll_id: u64, candidate_id: u64)]
pub struct InitializeCandidate<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    // Must already exist, otherwise Anchor fails deserialization
    #[account(
        mut,
        seeds = [POLL, poll_id.to_le_bytes().as_ref()],
        bump = poll_account.bump,
    )]
    pub poll_account: Box<Account<'info, PollAccount>>,

    // Seeds: ["candidate", poll_id, candidate_id]
    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + CandidateAccount::INIT_SPACE,
        seeds = [
            CANDIDATE,
            poll_id.to_le_bytes().as_ref(),
            candidate_id.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub candidate_account: Box<Account<'info, CandidateAccount>>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeCandidate<'info> {
    pub fn initialize_candidate(
        &mut self,
        poll_id: u64,
        candidate_id: u64,
        candidate_name: String,
        bumps: &InitializeCandidateBumps,
    ) -> Result<()> {
        let candidate = CandidateAccount::new(
            poll_id,
            candidate_id,
            candidate_name,
            bumps.candidate_account,
        )?;
        let candidate_count = self.poll_account.register_candidate()?;
        self.candidate_account.set_inner(candidate);

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

        Ok(())
    }
}
