pub mod poll;
pub mod candidate;
pub mod events;

pub use poll::*;
pub use candidate::*;
pub use events::*;
