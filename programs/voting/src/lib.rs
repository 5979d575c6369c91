use anchor_lang::prelude::*;
pub mod address;
pub mod constants;
pub mod errors;
pub mod instructions;
pub mod processor;
pub mod state;

pub use instructions::*;
pub use errors::*;
pub use state::*;

declare_id!("9ou6NkD8q13aWybmkMWnrE9tHWMYqGgzSpDwcVh9PVub");

#[program]
pub mod voting {
    use super::*;

    // Create a poll with a name, description and inclusive voting window
    // Fails if a poll with this id already exists
    pub fn initialize_poll(
        ctx: Context<InitializePoll>,
        poll_id: u64,
        poll_name: String,
        poll_description: String,
        poll_voting_start: u64,
        poll_voting_end: u64,
    ) -> Result<()> {
        ctx.accounts.initialize_poll(
            poll_id,
            poll_name,
            poll_description,
            poll_voting_start,
            poll_voting_end,
            &ctx.bumps,
        )
    }

    // Register a candidate under an existing poll
    // Increments the poll's candidate_count
    pub fn initialize_candidate(
        ctx: Context<InitializeCandidate>,
        poll_id: u64,
        candidate_id: u64,
        candidate_name: String,
    ) -> Result<()> {
        ctx.accounts
            .initialize_candidate(poll_id, candidate_id, candidate_name, &ctx.bumps)
    }

    // Cast one vote for a candidate while the poll is active
    pub fn vote(ctx: Context<Vote>, poll_id: u64, candidate_id: u64) -> Result<()> {
        ctx.accounts.vote(poll_id, candidate_id)
    }
}
