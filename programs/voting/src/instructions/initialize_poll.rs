use anchor_lang::prelude::*;
use crate::{state::*, constants::*};

// Initialize Poll Instruction
//
// Creates the poll account at PDA ["poll", poll_id] with an empty candidate list.
// `init` makes the runtime reject a second creation for the same poll_id,
// so the first record can never be overwritten.
//
// The voting window is stored as given; an inverted window is not rejected.

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct InitializePoll<'info> {
    // Pays for the poll account
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + PollAccount::INIT_SPACE,
        seeds = [POLL, poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub poll_account: Box<Account<'info, PollAccount>>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializePoll<'info> {
    pub fn initialize_poll(
        &mut self,
        poll_id: u64,
        poll_name: String,
        poll_description: String,
        poll_voting_start: u64,
        poll_voting_end: u64,
        bumps: &InitializePollBumps,
    ) -> Result<()> {
        self.poll_account.set_inner(PollAccount::new(
            poll_id,
            poll_name,
            poll_description,
            poll_voting_start,
            poll_voting_end,
            bumps.poll_account,
        )?);

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

        Ok(())
    }
}
