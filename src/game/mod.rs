//! The match: players, deck, draft pool, phase lifecycle.
//!
//! `Game` owns all authoritative state and composes the phase machine:
//! the draft engine (`draft` module), arrangement operations (here), and
//! battle replay (`replay` module). Every fallible operation returns
//! `bool` - wrong-phase calls, bad indices, and unaffordable actions are
//! rejected as no-ops, never panics, so an untrusted UI cannot crash the
//! rules engine. The one construction precondition (exactly two players)
//! is asserted.
//!
//! ## Change notification
//!
//! A renderer may register a single hook via `set_change_hook`; the
//! engine invokes it after every state-changing operation and places no
//! constraints on what it does. Everything works identically with no
//! hook registered.

pub mod draft;
pub mod phase;
pub mod replay;

pub use phase::GamePhase;

use rustc_hash::FxHashSet;

use crate::battle::BattleEvent;
use crate::cards::{Card, Deck};
use crate::core::{Controller, GameConfig, GameRng, Player, PlayerId};

/// Called after every state-changing operation.
pub type ChangeHook = Box<dyn FnMut()>;

/// A full match: two players, one deck, one phase machine.
pub struct Game {
    config: GameConfig,
    players: Vec<Player>,
    deck: Deck,
    draft_pool: Vec<Card>,
    phase: GamePhase,
    round_number: u32,
    turn_number: u32,
    drafting_order: Vec<usize>,
    drafting_order_position: usize,
    passed_this_phase: FxHashSet<PlayerId>,
    battle_log: Vec<BattleEvent>,
    events_applied: usize,
    rng: GameRng,
    on_change: Option<ChangeHook>,
}

impl Game {
    /// Create a match with the default configuration.
    ///
    /// The first named player is human-controlled, the second
    /// auto-controlled (override with `set_controller`).
    ///
    /// # Panics
    ///
    /// Panics unless exactly two player names are given.
    #[must_use]
    pub fn new(names: &[&str], seed: u64) -> Self {
        Self::with_config(names, GameConfig::default(), seed)
    }

    /// Create a match with a custom configuration.
    ///
    /// # Panics
    ///
    /// Panics unless exactly two player names are given.
    #[must_use]
    pub fn with_config(names: &[&str], config: GameConfig, seed: u64) -> Self {
        assert!(names.len() == 2, "A match requires exactly two players");

        let players = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let controller = if i == 0 { Controller::Human } else { Controller::Auto };
                Player::new(PlayerId::new(i as u8), *name, controller, config.starting_health)
            })
            .collect();

        Self {
            config,
            players,
            deck: Deck::new(),
            draft_pool: Vec::new(),
            phase: GamePhase::Setup,
            round_number: 1,
            turn_number: 1,
            drafting_order: Vec::new(),
            drafting_order_position: 0,
            passed_this_phase: FxHashSet::default(),
            battle_log: Vec::new(),
            events_applied: 0,
            rng: GameRng::new(seed),
            on_change: None,
        }
    }

    /// Shuffle the deck and enter the first draft phase.
    ///
    /// Valid only once, from `Setup`.
    pub fn initialize(&mut self) -> bool {
        if self.phase != GamePhase::Setup {
            return false;
        }
        self.deck.shuffle(&mut self.rng);
        self.enter_draft_phase();
        self.notify();
        true
    }

    // === Observation ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Current round (starts at 1, increments after each battle).
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Current drafting turn (increments on each drafter hand-off).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Match configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Both players.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// One player by ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not name one of the two players.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// The shared draft pool.
    #[must_use]
    pub fn draft_pool(&self) -> &[Card] {
        &self.draft_pool
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// The full event log of the current (or just-resolved) battle.
    #[must_use]
    pub fn battle_log(&self) -> &[BattleEvent] {
        &self.battle_log
    }

    /// How many battle events have been applied to live state so far.
    #[must_use]
    pub fn events_applied(&self) -> usize {
        self.events_applied
    }

    /// The winner, once the match is over. `None` while the match is
    /// live, or on the (rare) double knockout draw.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        if self.phase != GamePhase::GameOver {
            return None;
        }
        let mut alive = self.players.iter().filter(|p| !p.is_defeated());
        match (alive.next(), alive.next()) {
            (Some(winner), None) => Some(winner.id),
            _ => None,
        }
    }

    // === Control ===

    /// Override who controls a player (e.g. two humans, or two bots in a
    /// headless harness).
    ///
    /// # Panics
    ///
    /// Panics if `id` does not name one of the two players.
    pub fn set_controller(&mut self, id: PlayerId, controller: Controller) {
        self.players[id.index()].controller = controller;
    }

    /// Register the change-notification hook.
    pub fn set_change_hook(&mut self, hook: impl FnMut() + 'static) {
        self.on_change = Some(Box::new(hook));
    }

    /// Remove the change-notification hook.
    pub fn clear_change_hook(&mut self) {
        self.on_change = None;
    }

    pub(crate) fn notify(&mut self) {
        if let Some(hook) = self.on_change.as_mut() {
            hook();
        }
    }

    // === Arrangement operations ===

    /// Move a card from `player`'s hand onto their battlefield.
    ///
    /// `position` is clamped; relative order of other battlefield cards
    /// is preserved. Arrangement phase only; an unknown `player` is
    /// rejected like any other bad index.
    pub fn play_card(&mut self, player: PlayerId, hand_index: usize, position: usize) -> bool {
        if self.phase != GamePhase::Arrangement || player.index() >= self.players.len() {
            return false;
        }
        let ok = self.players[player.index()].play_card(hand_index, position);
        if ok {
            self.notify();
        }
        ok
    }

    /// Sell a battlefield card for +1 draft point next round.
    /// Arrangement phase only.
    pub fn sell_card(&mut self, player: PlayerId, battlefield_index: usize) -> bool {
        if self.phase != GamePhase::Arrangement || player.index() >= self.players.len() {
            return false;
        }
        let ok = self.players[player.index()]
            .sell_from_battlefield(battlefield_index)
            .is_some();
        if ok {
            self.notify();
        }
        ok
    }

    /// Reorder a player's battlefield with a permutation of its indices.
    /// Arrangement phase only.
    pub fn rearrange_battlefield(&mut self, player: PlayerId, new_order: &[usize]) -> bool {
        if self.phase != GamePhase::Arrangement || player.index() >= self.players.len() {
            return false;
        }
        let ok = self.players[player.index()].rearrange_battlefield(new_order);
        if ok {
            self.notify();
        }
        ok
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("round_number", &self.round_number)
            .field("turn_number", &self.turn_number)
            .field("players", &self.players)
            .field("draft_pool", &self.draft_pool)
            .field("deck_len", &self.deck.len())
            .field("battle_log_len", &self.battle_log.len())
            .field("events_applied", &self.events_applied)
            .finish_non_exhaustive()
    }
}
