//! Core engine types: players, configuration, and deterministic RNG.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{GameConfig, MIN_CARD_COST};
pub use player::{Battlefield, Controller, Player, PlayerId};
pub use rng::GameRng;
