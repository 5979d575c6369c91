use anchor_lang::prelude::*;
pub mod constants;
pub mod errors;
pub mod instructions;
pub mod processor;
pub mod state;

pub use instructions::*;
pub use errors::*;
pub use state::*;

declare_id!("4CoNzjS3bDvvw3QBdmLFmCHU2uf7PKgHS6WUFBvi7JeY");

#[program]
pub mod favorites {
    use super::*;

    // Create or overwrite the signer's favorites record
    pub fn set_favorites(
        ctx: Context<SetFavorites>,
        number: u64,
        color: String,
        hobbies: Vec<String>,
    ) -> Result<()> {
        ctx.accounts.set_favorites(number, color, hobbies, &ctx.bumps)
    }
}
