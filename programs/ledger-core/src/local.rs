use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::{Ledger, LedgerResult};

// In-memory ledger
//
// Holds committed records keyed by address plus a settable clock.
// All mutation goes through `execute`, which stages creates and writes in
// a per-transaction overlay and folds them in only when the transaction
// returns Ok. A failed transaction leaves the ledger byte-for-byte unchanged.
#[derive(Debug, Clone, Default)]
pub struct LocalLedger {
    accounts: BTreeMap<Pubkey, Vec<u8>>,
    unix_timestamp: u64,
}

impl LocalLedger {
    pub fn new(unix_timestamp: u64) -> Self {
        Self {
            accounts: BTreeMap::new(),
            unix_timestamp,
        }
    }

    pub fn unix_timestamp(&self) -> u64 {
        self.unix_timestamp
    }

    pub fn set_unix_timestamp(&mut self, unix_timestamp: u64) {
        self.unix_timestamp = unix_timestamp;
    }

    pub fn advance_clock(&mut self, seconds: u64) {
        self.unix_timestamp = self.unix_timestamp.saturating_add(seconds);
    }

    pub fn account(&self, address: &Pubkey) -> Option<&[u8]> {
        self.accounts.get(address).map(Vec::as_slice)
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    // Seed a record directly, bypassing transactions (genesis-style setup).
    pub fn store_account(&mut self, address: Pubkey, data: Vec<u8>) {
        self.accounts.insert(address, data);
    }

    // Read-only view of committed state with no signers.
    pub fn view(&self) -> Transaction<'_> {
        Transaction {
            ledger: self,
            staged: BTreeMap::new(),
            signers: &[],
        }
    }

    /// Run `f` as one atomic transaction signed by `signers`.
    ///
    /// Staged records are committed only if `f` returns `Ok`.
    pub fn execute<T, F>(&mut self, signers: &[Pubkey], f: F) -> Result<T>
    where
        F: FnOnce(&mut Transaction<'_>) -> Result<T>,
    {
        let mut tx = Transaction {
            ledger: self,
            staged: BTreeMap::new(),
            signers,
        };

        match f(&mut tx) {
            Ok(value) => {
                let Transaction { staged, .. } = tx;
                self.accounts.extend(staged);
                Ok(value)
            }
            Err(error) => {
                msg!("Transaction aborted: {}", error);
                Err(error)
            }
        }
    }
}

pub struct Transaction<'a> {
    ledger: &'a LocalLedger,
    staged: BTreeMap<Pubkey, Vec<u8>>,
    signers: &'a [Pubkey],
}

impl Transaction<'_> {
    pub fn staged_count(&self) -> usize {
        self.staged.len()
    }
}

impl Ledger for Transaction<'_> {
    fn create(&mut self, address: &Pubkey, space: usize) -> LedgerResult<()> {
        if self.exists(address) {
            msg!("Create rejected: {} already in use", address);
            return Err(ProgramError::AccountAlreadyInitialized);
        }
        self.staged.insert(*address, vec![0; space]);
        Ok(())
    }

    fn read(&self, address: &Pubkey) -> Option<&[u8]> {
        self.staged
            .get(address)
            .or_else(|| self.ledger.accounts.get(address))
            .map(Vec::as_slice)
    }

    fn write(&mut self, address: &Pubkey, data: &[u8]) -> LedgerResult<()> {
        let record = match self.staged.entry(*address) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let committed = self
                    .ledger
                    .accounts
                    .get(address)
                    .ok_or(ProgramError::UninitializedAccount)?;
                entry.insert(committed.clone())
            }
        };

        if data.len() > record.len() {
            return Err(ProgramError::AccountDataTooSmall);
        }
        record[..data.len()].copy_from_slice(data);
        Ok(())
    }

    fn current_time(&self) -> u64 {
        self.ledger.unix_timestamp
    }

    fn verify_signer(&self, identity: &Pubkey) -> bool {
        self.signers.contains(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commits_staged_records_on_success() {
        let mut ledger = LocalLedger::new(100);
        let address = Pubkey::new_unique();

        ledger
            .execute(&[], |tx| {
                tx.create(&address, 4)?;
                tx.write(&address, &[1, 2])?;
                assert_eq!(tx.staged_count(), 1);
                Ok(())
            })
            .unwrap();

        assert_eq!(ledger.account(&address), Some(&[1, 2, 0, 0][..]));
    }

    #[test]
    fn discards_staged_records_on_failure() {
        let mut ledger = LocalLedger::new(100);
        let kept = Pubkey::new_unique();
        let dropped = Pubkey::new_unique();
        ledger.store_account(kept, vec![7; 3]);

        let result: Result<()> = ledger.execute(&[], |tx| {
            tx.create(&dropped, 8)?;
            tx.write(&kept, &[9, 9, 9])?;
            Err(ProgramError::Custom(42).into())
        });

        assert!(result.is_err());
        assert_eq!(ledger.account(&dropped), None);
        assert_eq!(ledger.account(&kept), Some(&[7, 7, 7][..]));
        assert_eq!(ledger.account_count(), 1);
    }

    #[test]
    fn create_rejects_occupied_address() {
        let mut ledger = LocalLedger::default();
        let address = Pubkey::new_unique();
        ledger.store_account(address, vec![0; 8]);

        let result = ledger.execute(&[], |tx| Ok(tx.create(&address, 8)));
        assert_eq!(result.unwrap(), Err(ProgramError::AccountAlreadyInitialized));
    }

    #[test]
    fn write_respects_fixed_capacity() {
        let mut ledger = LocalLedger::default();
        let address = Pubkey::new_unique();
        let missing = Pubkey::new_unique();
        ledger.store_account(address, vec![0; 2]);

        let (too_large, absent) = ledger
            .execute(&[], |tx| {
                Ok((tx.write(&address, &[1, 2, 3]), tx.write(&missing, &[1])))
            })
            .unwrap();

        assert_eq!(too_large, Err(ProgramError::AccountDataTooSmall));
        assert_eq!(absent, Err(ProgramError::UninitializedAccount));
    }

    #[test]
    fn exposes_clock_and_signers() {
        let mut ledger = LocalLedger::new(1_000);
        ledger.advance_clock(30);
        let signer = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();

        let (now, signed, unsigned) = ledger
            .execute(&[signer], |tx| {
                Ok((
                    tx.current_time(),
                    tx.verify_signer(&signer),
                    tx.verify_signer(&stranger),
                ))
            })
            .unwrap();

        assert_eq!(now, 1_030);
        assert!(signed);
        assert!(!unsigned);
        assert!(!ledger.view().verify_signer(&signer));
    }
}
