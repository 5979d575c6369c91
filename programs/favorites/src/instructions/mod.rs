pub mod set_favorites;

pub use set_favorites::*;
