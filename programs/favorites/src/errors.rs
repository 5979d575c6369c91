use anchor_lang::prelude::*;

#[error_code]
pub enum FavoritesError {
    #[msg("Signature verification failed")]
    Unauthorized,

    #[msg("Field exceeds its maximum length")]
    FieldTooLong,

    #[msg("Too many hobbies")]
    TooManyHobbies,

    #[msg("Favorites not found")]
    FavoritesNotFound,
}
