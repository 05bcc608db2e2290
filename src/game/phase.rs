//! The match phase state machine.
//!
//! ```text
//! Setup -> Draft -> Arrangement -> Battle -> PostBattle -> Draft (next round)
//!                                        \-> GameOver (terminal)
//! ```
//!
//! Transitions happen only through `Game` operations; no phase is ever
//! skipped. `GameOver` is terminal for a match instance - construct a new
//! `Game` to play again.

use serde::{Deserialize, Serialize};

/// Current phase of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Freshly constructed, not yet initialized.
    Setup,
    /// Players spend draft points acquiring cards from the shared pool.
    Draft,
    /// Players order their battlefields before combat.
    Arrangement,
    /// The simulated battle log is being replayed onto live state.
    Battle,
    /// Battle resolved, awaiting the next round.
    PostBattle,
    /// A player fell to 0 health. Terminal.
    GameOver,
}

impl GamePhase {
    /// Is this the terminal phase?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Setup => "setup",
            GamePhase::Draft => "draft",
            GamePhase::Arrangement => "arrangement",
            GamePhase::Battle => "battle",
            GamePhase::PostBattle => "post_battle",
            GamePhase::GameOver => "game_over",
        };
        f.write_str(name)
    }
}
