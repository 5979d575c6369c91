use anchor_lang::prelude::*;
use crate::{state::*, constants::*};

// Set Favorites Instruction
//
// Creates the signer's favorites record on first use and overwrites it after.
// The PDA is derived from the signer's own key, so another signer always
// lands on a different record and can never touch this one.

#[derive(Accounts)]
pub struct SetFavorites<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        init_if_needed,
        payer = user,
        space = ANCHOR_DISCRIMINATOR + Favorites::INIT_SPACE,
        seeds = [FAVORITES, user.key().as_ref()],
        bump,
    )]
    pub favorites: Account<'info, Favorites>,

    pub system_program: Program<'info, System>,
}

impl<'info> SetFavorites<'info> {
    pub fn set_favorites(
        &mut self,
        number: u64,
        color: String,
        hobbies: Vec<String>,
        bumps: &SetFavoritesBumps,
    ) -> Result<()> {
        let owner = self.user.key();
        self.favorites
            .set_inner(Favorites::new(number, color, hobbies, bumps.favorites)?);

        emit!(FavoritesSet { owner, number });
        msg!("Favorites of {} set: number {}", owner, number);

        Ok(())
    }
}
