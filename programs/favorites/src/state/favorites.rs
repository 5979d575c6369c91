use anchor_lang::prelude::*;

use crate::{constants::*, errors::FavoritesError};

// Favorites record, one per owner at PDA ["favorites", owner].
// Because the owner's key is a seed, a record can only ever be reached
// through a transaction the owner signed.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Favorites {
    pub number: u64,

    #[max_len(50)]
    pub color: String,

    #[max_len(5, 50)]
    pub hobbies: Vec<String>,

    pub bump: u8,
}

impl Favorites {
    pub const SPACE: usize = ANCHOR_DISCRIMINATOR + Self::INIT_SPACE;

    pub fn address(owner: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[FAVORITES, owner.as_ref()], &crate::ID)
    }

    pub fn new(number: u64, color: String, hobbies: Vec<String>, bump: u8) -> Result<Self> {
        require!(color.len() <= MAX_COLOR_LEN, FavoritesError::FieldTooLong);
        require!(hobbies.len() <= MAX_HOBBIES, FavoritesError::TooManyHobbies);
        require!(
            hobbies.iter().all(|hobby| hobby.len() <= MAX_HOBBY_LEN),
            FavoritesError::FieldTooLong
        );

        Ok(Self {
            number,
            color,
            hobbies,
            bump,
        })
    }
}

#[event]
pub struct FavoritesSet {
    pub owner: Pubkey,
    pub number: u64,
}
