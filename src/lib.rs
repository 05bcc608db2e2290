//! # draft-duel
//!
//! Rules engine for a two-player, turn-based card auto-battler: a
//! resource-driven drafting phase followed by deterministic combat.
//!
//! ## Design Principles
//!
//! 1. **Simulate, then replay**: combat resolves once, up front, on
//!    detached snapshots, producing an immutable event log. Live state
//!    only changes as events are replayed - one per animation tick or
//!    all at once, with an identical final state either way.
//!
//! 2. **Never crash on bad input**: every fallible operation (wrong
//!    phase, bad index, unaffordable card) returns `false` and leaves
//!    state untouched. The only construction precondition - exactly two
//!    players - is asserted.
//!
//! 3. **Deterministic**: all randomness flows through a seeded
//!    `GameRng`; the same seed and the same inputs reproduce the same
//!    match.
//!
//! 4. **No rendering, no scheduling**: the engine exposes read accessors
//!    and mutating operations plus one change-notification hook. Pacing,
//!    input, and any "think time" for the auto player belong to the
//!    driver, which invokes the synchronous strategy functions itself.
//!
//! ## Modules
//!
//! - `cards`: suits, ranks, card stats, and the deck supply
//! - `core`: players, match configuration, deterministic RNG
//! - `battle`: snapshot simulator and the combat event log
//! - `game`: the match - phase machine, draft engine, battle replay

pub mod battle;
pub mod cards;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::battle::{simulate, BattleEvent, PlayerSnapshot};
pub use crate::cards::{Card, CardId, Deck, Rank, Suit};
pub use crate::core::{Battlefield, Controller, GameConfig, GameRng, Player, PlayerId, MIN_CARD_COST};
pub use crate::game::{Game, GamePhase};
