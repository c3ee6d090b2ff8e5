//! Card locations for the player.
//!
//! ## Key Types
//!
//! - `Pile`: Deck, hand or discard
//! - `CardPiles`: The three piles and the moves between them

pub mod piles;

pub use piles::{CardPiles, Pile};
