pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["favorites", owner]
pub const FAVORITES: &[u8] = b"favorites";

pub const MAX_COLOR_LEN: usize = 50;
pub const MAX_HOBBIES: usize = 5;
pub const MAX_HOBBY_LEN: usize = 50;
