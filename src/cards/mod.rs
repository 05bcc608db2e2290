//! Card system: suits, ranks, card units, and the deck supply.
//!
//! ## Key Types
//!
//! - `Suit` / `Rank`: card identity; stats and cost derive from rank
//! - `CardId`: unique identifier within one deck
//! - `Card`: a unit with attack strength and mutable health
//! - `Deck`: the 54-card supply, shuffled once and drawn down
//!
//! Cards flow one way: deck -> draft pool -> hand -> battlefield ->
//! discarded (defeated or sold). They are never duplicated and never
//! return to the deck.

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Rank, Suit};
pub use deck::Deck;
