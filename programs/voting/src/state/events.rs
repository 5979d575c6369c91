use anchor_lang::prelude::*;

#[event]
pub struct PollInitialized {
    pub poll_id: u64,
    pub voting_start: u64,
    pub voting_end: u64,
}

#[event]
pub struct CandidateInitialized {
    pub poll_id: u64,
    pub candidate_id: u64,
    /// The poll's candidate count after this registration
    pub candidate_count: u64,
}

#[event]
pub struct VoteCast {
    pub poll_id: u64,
    pub candidate_id: u64,
    pub vote_count: u64,
    pub timestamp: u64,
}
