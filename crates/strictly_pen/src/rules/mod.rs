//! Game rules for the pen game.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from board
//! storage so they can be tested and reused on their own.

pub mod crossing;
pub mod terminal;

pub use crossing::crosses;
pub use terminal::{GameStatus, status};
