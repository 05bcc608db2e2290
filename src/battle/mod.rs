//! Battle resolution: snapshot simulation and the combat event log.
//!
//! ## Key Types
//!
//! - `PlayerSnapshot`: detached pre-battle copy of a player's state
//! - `simulate`: pure resolution of a whole battle into an event log
//! - `BattleEvent`: one resolved action, replayable against live state
//!
//! Combat is resolved once, up front, on disposable copies. The live
//! match only changes when the event log is replayed through
//! `Game::apply_next_event`, at whatever pace the driver chooses.

pub mod event;
pub mod simulator;

pub use event::BattleEvent;
pub use simulator::{simulate, PlayerSnapshot};
