pub mod keycodes;
pub mod layers;
pub mod modifiers;

pub use keycodes::*;
pub use layers::*;
pub use modifiers::*;
