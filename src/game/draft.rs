//! The draft engine: point economy, turn order, and the drafting cursor.
//!
//! One draft phase spans multiple turns. On entry every player receives
//! `round_number + 1` points plus any credit from last round's card
//! sales, and the shared pool is refilled from the deck. The drafting
//! order favors whoever is behind: round 1 starts from a random player,
//! later rounds go lowest-health-first.
//!
//! The active drafter may buy any number of cards while they can afford
//! one, or pass. "Who drafts next" is a bounded wraparound scan over the
//! fixed order - at most one full lap - skipping players who passed or
//! can no longer afford the cheapest card left in the pool. When the
//! scan finds nobody, the phase ends and the match moves to Arrangement.

use crate::core::{Controller, PlayerId};

use super::{Game, GamePhase};

impl Game {
    /// The player whose drafting turn it is, or `None` outside the draft
    /// phase.
    #[must_use]
    pub fn active_drafter(&self) -> Option<PlayerId> {
        if self.phase != GamePhase::Draft {
            return None;
        }
        self.drafting_order
            .get(self.drafting_order_position)
            .map(|&index| PlayerId::new(index as u8))
    }

    /// Remaining draft points for a player.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not name one of the two players.
    #[must_use]
    pub fn draft_points_of(&self, id: PlayerId) -> u32 {
        self.players[id.index()].draft_points
    }

    /// Has a player passed for the current draft phase?
    #[must_use]
    pub fn has_passed(&self, id: PlayerId) -> bool {
        self.passed_this_phase.contains(&id)
    }

    /// Draft the pool card at `pool_index` for the active drafter.
    ///
    /// Fails (no-op, `false`) outside the draft phase, on a bad index,
    /// if the drafter already passed, or if the card costs more than
    /// their remaining points. On success the card moves into the
    /// drafter's hand; if they can no longer afford the cheapest card
    /// left in the pool, the turn advances automatically.
    pub fn draft_card(&mut self, pool_index: usize) -> bool {
        if pool_index >= self.draft_pool.len() {
            return false;
        }
        let Some(drafter) = self.active_drafter() else {
            return false;
        };
        if self.passed_this_phase.contains(&drafter) {
            return false;
        }

        let cost = self.draft_pool[pool_index].cost;
        if cost > self.players[drafter.index()].draft_points {
            return false;
        }

        let card = self.draft_pool.remove(pool_index);
        let player = &mut self.players[drafter.index()];
        player.draft_points -= cost;
        player.add_to_hand(card);

        if !self.is_eligible_drafter(drafter) {
            self.advance_drafter();
        }
        self.notify();
        true
    }

    /// Pass: end the active drafter's participation for this phase.
    pub fn pass_draft(&mut self) -> bool {
        let Some(drafter) = self.active_drafter() else {
            return false;
        };
        self.passed_this_phase.insert(drafter);
        self.advance_drafter();
        self.notify();
        true
    }

    /// Drive every consecutive auto-controlled drafting turn: buy the
    /// strongest affordable pool card until broke, then pass.
    ///
    /// Purely synchronous - the driver decides when (and whether) the
    /// computer moves; the engine schedules nothing. Returns `false` if
    /// it is not currently an auto player's drafting turn.
    pub fn run_auto_draft(&mut self) -> bool {
        if self.active_auto_drafter().is_none() {
            return false;
        }

        while let Some(drafter) = self.active_auto_drafter() {
            let points = self.players[drafter.index()].draft_points;
            let pick = self
                .draft_pool
                .iter()
                .enumerate()
                .filter(|(_, card)| card.cost <= points)
                .max_by_key(|(_, card)| card.strength)
                .map(|(index, _)| index);

            match pick {
                Some(index) => {
                    if !self.draft_card(index) {
                        self.pass_draft();
                    }
                }
                None => {
                    self.pass_draft();
                }
            }
        }
        true
    }

    /// The active drafter, if there is one and it is auto-controlled.
    fn active_auto_drafter(&self) -> Option<PlayerId> {
        self.active_drafter()
            .filter(|id| self.players[id.index()].controller == Controller::Auto)
    }

    /// Enter the draft phase: award points, reset the pass set, compute
    /// the drafting order, refill the pool.
    pub(crate) fn enter_draft_phase(&mut self) {
        for player in &mut self.players {
            player.draft_points = self.round_number + 1 + player.points_from_sales;
            player.points_from_sales = 0;
        }
        self.passed_this_phase.clear();
        self.turn_number = 1;

        self.drafting_order = if self.round_number == 1 {
            // Random starting player, then round-robin
            let first = self.rng.gen_range(0..self.players.len());
            (0..self.players.len())
                .map(|i| (first + i) % self.players.len())
                .collect()
        } else {
            // Catch-up mechanic: lowest health drafts first
            let mut order: Vec<usize> = (0..self.players.len()).collect();
            order.sort_by_key(|&i| self.players[i].health);
            order
        };
        self.drafting_order_position = 0;

        self.refill_draft_pool();
        self.phase = GamePhase::Draft;

        // Deck exhaustion can leave the pool too thin for anyone to act
        if let Some(active) = self.active_drafter() {
            if !self.is_eligible_drafter(active) {
                self.advance_drafter();
            }
        }
    }

    /// Top the pool back up to its configured size. Deck exhaustion just
    /// leaves it short.
    fn refill_draft_pool(&mut self) {
        let missing = self
            .config
            .draft_pool_size
            .saturating_sub(self.draft_pool.len());
        self.draft_pool.extend(self.deck.draw_multiple(missing));
    }

    /// Cheapest card still in the pool, if any.
    fn cheapest_pool_cost(&self) -> Option<u32> {
        self.draft_pool.iter().map(|card| card.cost).min()
    }

    /// A player is an eligible drafter while they have not passed and can
    /// still afford the cheapest card remaining in the pool. An empty
    /// pool makes everyone ineligible.
    fn is_eligible_drafter(&self, id: PlayerId) -> bool {
        if self.passed_this_phase.contains(&id) {
            return false;
        }
        match self.cheapest_pool_cost() {
            Some(cost) => self.players[id.index()].draft_points >= cost,
            None => false,
        }
    }

    /// Hand the cursor to the next eligible drafter.
    ///
    /// Scans the fixed order starting after the current position,
    /// wrapping around, at most one full lap - guaranteed to terminate.
    /// Finding nobody ends the draft phase.
    fn advance_drafter(&mut self) {
        let len = self.drafting_order.len();
        for step in 1..=len {
            let position = (self.drafting_order_position + step) % len;
            let candidate = PlayerId::new(self.drafting_order[position] as u8);
            if self.is_eligible_drafter(candidate) {
                self.drafting_order_position = position;
                self.turn_number += 1;
                return;
            }
        }
        self.end_draft_phase();
    }

    /// Drafting is exhausted: move to Arrangement. Auto players place
    /// their whole hand onto the battlefield in hand order (a stand-in
    /// policy for an unattended player).
    fn end_draft_phase(&mut self) {
        self.phase = GamePhase::Arrangement;

        for player in &mut self.players {
            if player.controller == Controller::Auto {
                while !player.hand.is_empty() {
                    let at = player.battlefield.len();
                    player.play_card(0, at);
                }
            }
        }
    }
}
