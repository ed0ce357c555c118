//! Core board topology: slot keys and coordinate transforms, valid-slot set
//! construction, and the layout projection consumed by renderers.

mod key;
mod layout;
mod topology;

pub use key::{Centered, SlotKey};
pub use layout::{Position, MAX_BOUND, MIN_BOUND};
pub use topology::{is_valid_slot, Board};
