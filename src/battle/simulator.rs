//! The battle simulator: a pure function from two battlefield snapshots
//! to an ordered event log.
//!
//! The simulator never touches live players. It runs on detached
//! `PlayerSnapshot` copies, resolves the whole battle up front, and emits
//! the complete log. The copies are scratch state, discarded afterwards;
//! the log is the only output. Replaying the log against the live match
//! (see `Game::apply_next_event`) reproduces the simulated outcome at
//! whatever pace the driver chooses.
//!
//! ## Resolution algorithm
//!
//! One player is picked uniformly at random as the initial attacker.
//! Rounds are indexed 0, 1, 2, ... and each round uses the battlefield
//! column at that index: the attacker's card at `battlefield[round]` acts,
//! then the other player's. A card defeated earlier in the battle forfeits
//! its turn silently. A card facing an empty (or fully defeated)
//! battlefield hits the defending player directly (`Card::direct_damage`)
//! - the only way players lose health. Otherwise the front-most surviving
//! defender card takes `attack()` damage; card-vs-card combat never
//! leaks damage onto a player.

use serde::{Deserialize, Serialize};

use crate::core::{Battlefield, GameConfig, GameRng, Player, PlayerId};

use super::event::BattleEvent;

/// A detached copy of one player's pre-battle state.
///
/// The battlefield keeps its pre-battle order for the whole simulation;
/// defeated cards are marked rather than removed so round indices keep
/// pointing at the right column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub battlefield: Battlefield,
}

impl PlayerSnapshot {
    /// Snapshot a live player.
    #[must_use]
    pub fn of(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            health: player.health,
            max_health: player.max_health,
            battlefield: player.battlefield.clone(),
        }
    }

    /// Index of the first surviving battlefield card, front of the line.
    fn front_survivor(&self) -> Option<usize> {
        self.battlefield.iter().position(|c| !c.defeated)
    }

    fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }
}

/// Simulate a full battle between two snapshots.
///
/// Pure aside from the RNG draw for the initial attacker: identical
/// snapshots and an identically seeded RNG produce an identical log.
#[must_use]
pub fn simulate(
    mut sides: [PlayerSnapshot; 2],
    config: &GameConfig,
    rng: &mut GameRng,
) -> Vec<BattleEvent> {
    let first_attacker = rng.gen_range(0..2);
    let mut events = Vec::new();

    let mut round = 0;
    while round < sides[0].battlefield.len() || round < sides[1].battlefield.len() {
        for offset in 0..2 {
            let attacker = (first_attacker + offset) % 2;
            resolve_column(&mut sides, attacker, round, &mut events);
        }

        if config.suit_synergies {
            for offset in 0..2 {
                let side = (first_attacker + offset) % 2;
                resolve_synergies(&mut sides, side, &mut events);
            }
        }

        round += 1;
    }

    events
}

/// Resolve one side's action for the given round column.
fn resolve_column(
    sides: &mut [PlayerSnapshot; 2],
    attacker: usize,
    round: usize,
    events: &mut Vec<BattleEvent>,
) {
    let defender = 1 - attacker;

    let Some(card) = sides[attacker].battlefield.get(round).copied() else {
        return;
    };
    // Defeated cards forfeit their turn silently
    if card.defeated {
        return;
    }

    match sides[defender].front_survivor() {
        Some(target_pos) => {
            let target = sides[defender].battlefield[target_pos];
            let damage = card.attack(&target);
            sides[defender].battlefield[target_pos].apply_damage(damage);

            let mut description = format!(
                "{}'s {} attacks {}'s {} for {} damage",
                sides[attacker].name,
                card.display_name(),
                sides[defender].name,
                target.display_name(),
                damage,
            );
            if sides[defender].battlefield[target_pos].defeated {
                description.push_str(", defeating it");
            }

            events.push(BattleEvent::CardAttack {
                attacker: sides[attacker].id,
                attacking_card: card.id,
                defender: sides[defender].id,
                defending_card: target.id,
                damage,
                description,
            });
        }
        None => {
            // Undefended: the card's direct output straight to the player
            let damage = card.direct_damage();
            sides[defender].health = (sides[defender].health - damage).max(0);

            let description = format!(
                "{}'s {} attacks {} directly for {} damage!",
                sides[attacker].name,
                card.display_name(),
                sides[defender].name,
                damage,
            );

            events.push(BattleEvent::DirectAttack {
                attacker: sides[attacker].id,
                attacking_card: card.id,
                defender: sides[defender].id,
                damage,
                description,
            });
        }
    }
}

/// Resolve suit synergies for one side: 2+ surviving Hearts heal their
/// controller, 3+ surviving Clubs chip every surviving opposing card.
fn resolve_synergies(sides: &mut [PlayerSnapshot; 2], side: usize, events: &mut Vec<BattleEvent>) {
    use crate::cards::Suit;

    let other = 1 - side;

    let hearts = sides[side]
        .battlefield
        .iter()
        .filter(|c| !c.defeated && c.suit == Suit::Hearts)
        .count();
    if hearts >= 2 {
        let amount = (hearts / 2) as i32;
        sides[side].heal(amount);
        events.push(BattleEvent::SynergyHeal {
            player: sides[side].id,
            suit: Suit::Hearts,
            amount,
            description: format!(
                "{} heals {} health from Hearts synergy",
                sides[side].name, amount
            ),
        });
    }

    let clubs = sides[side]
        .battlefield
        .iter()
        .filter(|c| !c.defeated && c.suit == Suit::Clubs)
        .count();
    if clubs >= 3 {
        let damage = (clubs / 3) as i32;
        for pos in 0..sides[other].battlefield.len() {
            if sides[other].battlefield[pos].defeated {
                continue;
            }
            let target_card = sides[other].battlefield[pos];
            sides[other].battlefield[pos].apply_damage(damage);

            events.push(BattleEvent::SynergyDamage {
                player: sides[side].id,
                suit: Suit::Clubs,
                target: sides[other].id,
                target_card: target_card.id,
                damage,
                description: format!(
                    "{}'s Clubs synergy deals {} damage to {}'s {}",
                    sides[side].name,
                    damage,
                    sides[other].name,
                    target_card.display_name(),
                ),
            });
        }
    }
}
