use anchor_lang::prelude::*;

use crate::Ledger;

/// Deserialize the record stored at `address`.
///
/// Returns `Ok(None)` when nothing exists there; a record of another kind
/// (discriminator mismatch) is an error rather than an absence.
pub fn load<T, L>(ledger: &L, address: &Pubkey) -> Result<Option<T>>
where
    T: AccountDeserialize,
    L: Ledger + ?Sized,
{
    match ledger.read(address) {
        Some(mut data) => T::try_deserialize(&mut data).map(Some),
        None => Ok(None),
    }
}

/// Serialize `account` (discriminator followed by Borsh fields) into the
/// existing record at `address`.
pub fn store<T, L>(ledger: &mut L, address: &Pubkey, account: &T) -> Result<()>
where
    T: AccountSerialize,
    L: Ledger + ?Sized,
{
    let mut data = Vec::new();
    account.try_serialize(&mut data)?;
    ledger.write(address, &data)?;
    Ok(())
}
