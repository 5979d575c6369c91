use anchor_lang::prelude::*;

pub mod account;
pub mod local;

pub use account::*;
pub use local::*;

pub type LedgerResult<T> = core::result::Result<T, ProgramError>;

// Ledger Capability
//
// The storage, clock and signature oracle a program state machine runs against.
// Every primitive is scoped to the active transaction: nothing written through
// this trait is observable outside the transaction until it commits.
//
// Programs take this as an explicit `&mut impl Ledger` parameter instead of
// reaching for global state, so the same rules can run on-chain (via Anchor
// account contexts) and off-chain (via `LocalLedger`).
pub trait Ledger {
    // Allocate a zeroed record of `space` bytes at `address`.
    // Fails with AccountAlreadyInitialized if the address already holds one.
    fn create(&mut self, address: &Pubkey, space: usize) -> LedgerResult<()>;

    // Current bytes at `address`, or None if nothing was ever created there.
    fn read(&self, address: &Pubkey) -> Option<&[u8]>;

    // Overwrite the leading bytes of an existing record.
    // The record's capacity is fixed at creation and never grows.
    fn write(&mut self, address: &Pubkey, data: &[u8]) -> LedgerResult<()>;

    // Trusted unix time in seconds.
    fn current_time(&self) -> u64;

    // Whether `identity` supplied a valid signature for the active transaction.
    fn verify_signer(&self, identity: &Pubkey) -> bool;

    fn exists(&self, address: &Pubkey) -> bool {
        self.read(address).is_some()
    }
}
