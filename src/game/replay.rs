//! Battle kickoff and event replay against live state.
//!
//! `start_battle` runs the whole simulation up front on snapshots and
//! stores the event log. The live players only change as the driver
//! replays events through `apply_next_event` - one per animation tick,
//! or all at once; the cursor is the only carried state, so the driver
//! can stop and resume freely and the final state never depends on
//! pacing. `finish_battle` closes the round once the log is exhausted.

use crate::battle::{simulate, BattleEvent, PlayerSnapshot};
use crate::cards::CardId;
use crate::core::PlayerId;

use super::{Game, GamePhase};

impl Game {
    /// Resolve the battle: snapshot both players, simulate, store the
    /// log. Arrangement phase only. Live state is untouched until events
    /// are applied.
    pub fn start_battle(&mut self) -> bool {
        if self.phase != GamePhase::Arrangement {
            return false;
        }

        let snapshots = [
            PlayerSnapshot::of(&self.players[0]),
            PlayerSnapshot::of(&self.players[1]),
        ];
        let mut battle_rng = self.rng.fork();
        self.battle_log = simulate(snapshots, &self.config, &mut battle_rng);
        self.events_applied = 0;
        self.phase = GamePhase::Battle;
        self.notify();
        true
    }

    /// Apply exactly one battle event to the live players and advance
    /// the cursor. Returns `false` outside the battle phase or once the
    /// log is exhausted.
    pub fn apply_next_event(&mut self) -> bool {
        if self.phase != GamePhase::Battle || self.events_applied >= self.battle_log.len() {
            return false;
        }

        let event = self.battle_log[self.events_applied].clone();
        self.apply_event(&event);
        self.events_applied += 1;
        self.notify();
        true
    }

    /// Close out the battle once every event has been applied: a player
    /// at 0 health ends the match, otherwise the round is over and the
    /// next draft awaits.
    pub fn finish_battle(&mut self) -> bool {
        if self.phase != GamePhase::Battle || self.events_applied < self.battle_log.len() {
            return false;
        }

        self.phase = if self.players.iter().any(|p| p.is_defeated()) {
            GamePhase::GameOver
        } else {
            GamePhase::PostBattle
        };
        self.notify();
        true
    }

    /// Advance to the next round's draft phase. PostBattle only.
    pub fn prepare_next_round(&mut self) -> bool {
        if self.phase != GamePhase::PostBattle {
            return false;
        }

        self.round_number += 1;
        self.battle_log.clear();
        self.events_applied = 0;
        self.enter_draft_phase();
        self.notify();
        true
    }

    /// Mutate live state to match one simulated event.
    ///
    /// Tolerant by design: an event whose target card is already gone is
    /// a no-op rather than an error.
    fn apply_event(&mut self, event: &BattleEvent) {
        match event {
            BattleEvent::CardAttack {
                defender,
                defending_card,
                damage,
                ..
            } => {
                self.damage_live_card(*defender, *defending_card, *damage);
            }
            BattleEvent::DirectAttack {
                defender, damage, ..
            } => {
                self.players[defender.index()].take_damage(*damage);
            }
            BattleEvent::SynergyHeal { player, amount, .. } => {
                self.players[player.index()].heal(*amount);
            }
            BattleEvent::SynergyDamage {
                target,
                target_card,
                damage,
                ..
            } => {
                self.damage_live_card(*target, *target_card, *damage);
            }
        }
    }

    /// Damage a live battlefield card by ID, removing it if defeated.
    fn damage_live_card(&mut self, owner: PlayerId, card_id: CardId, damage: i32) {
        let player = &mut self.players[owner.index()];
        let Some(position) = player.battlefield.iter().position(|c| c.id == card_id) else {
            return;
        };

        player.battlefield[position].apply_damage(damage);
        if player.battlefield[position].defeated {
            player.remove_from_battlefield(position);
        }
    }
}
