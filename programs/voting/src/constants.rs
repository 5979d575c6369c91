pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["poll", poll_id]
pub const POLL: &[u8] = b"poll";

// Seeds for PDA derivation: ["candidate", poll_id, candidate_id]
pub const CANDIDATE: &[u8] = b"candidate";

// Field limits, in bytes of UTF-8.
// Enforced at validation; values over the limit are rejected, never truncated.
pub const MAX_POLL_NAME_LEN: usize = 32;
pub const MAX_POLL_DESCRIPTION_LEN: usize = 280;
pub const MAX_CANDIDATE_NAME_LEN: usize = 32;
