use anchor_lang::prelude::*;

#[error_code]
pub enum VotingError {
    // Validation errors
    #[msg("Field exceeds its maximum length")]
    FieldTooLong,

    #[msg("Arithmetic overflow")]
    Overflow,

    // State errors
    #[msg("A poll with this id already exists")]
    DuplicatePoll,

    #[msg("A candidate with this id already exists in the poll")]
    DuplicateCandidate,

    #[msg("Poll not found")]
    PollNotFound,

    #[msg("Candidate not found")]
    CandidateNotFound,

    #[msg("Candidate does not belong to this poll")]
    CandidateMismatch,

    // Authorization errors
    #[msg("Signature verification failed")]
    Unauthorized,

    // Temporal errors
    #[msg("Poll is not active")]
    PollNotActive,
}
