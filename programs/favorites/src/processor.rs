use anchor_lang::prelude::*;
use ledger_core::{load, store, Ledger};

use crate::{errors::FavoritesError, state::*};

/// Create or overwrite `user`'s favorites. Returns the record's address.
///
/// `user` must have signed the transaction; the check runs before any
/// record is read or written.
pub fn set_favorites<L: Ledger + ?Sized>(
    ledger: &mut L,
    user: &Pubkey,
    number: u64,
    color: String,
    hobbies: Vec<String>,
) -> Result<Pubkey> {
    require!(ledger.verify_signer(user), FavoritesError::Unauthorized);

    let (address, bump) = Favorites::address(user);
    let favorites = Favorites::new(number, color, hobbies, bump)?;

    if !ledger.exists(&address) {
        ledger.create(&address, Favorites::SPACE)?;
    }
    store(ledger, &address, &favorites)?;

    emit!(FavoritesSet {
        owner: *user,
        number,
    });
    msg!("Favorites of {} set: number {}", user, number);

    Ok(address)
}

pub fn fetch_favorites<L: Ledger + ?Sized>(ledger: &L, owner: &Pubkey) -> Result<Favorites> {
    let (address, _) = Favorites::address(owner);
    load(ledger, &address)?.ok_or_else(|| error!(FavoritesError::FavoritesNotFound))
}
