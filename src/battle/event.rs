//! Battle events: the ordered, immutable record of one simulated battle.
//!
//! The simulator emits one event per resolved action. Events carry enough
//! to do two jobs: mutate the live match state (card/player identities and
//! damage) and drive display (a human-readable description). A renderer
//! replays them one per animation tick; a test harness applies them all
//! at once. Either way the final state is identical.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Suit};
use crate::core::PlayerId;

/// One resolved combat action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// A card attacked an opposing card. Damage lands on the defending
    /// card only; players are never hurt by card-vs-card combat.
    CardAttack {
        attacker: PlayerId,
        attacking_card: CardId,
        defender: PlayerId,
        defending_card: CardId,
        damage: i32,
        description: String,
    },

    /// A card attacked an undefended player directly
    /// (`Card::direct_damage`). The only path that damages a player.
    DirectAttack {
        attacker: PlayerId,
        attacking_card: CardId,
        defender: PlayerId,
        damage: i32,
        description: String,
    },

    /// Suit synergy: 2+ Hearts healed their controller.
    SynergyHeal {
        player: PlayerId,
        suit: Suit,
        amount: i32,
        description: String,
    },

    /// Suit synergy: 3+ Clubs damaged one opposing battlefield card.
    SynergyDamage {
        player: PlayerId,
        suit: Suit,
        target: PlayerId,
        target_card: CardId,
        damage: i32,
        description: String,
    },
}

impl BattleEvent {
    /// Human-readable description for log display.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            BattleEvent::CardAttack { description, .. }
            | BattleEvent::DirectAttack { description, .. }
            | BattleEvent::SynergyHeal { description, .. }
            | BattleEvent::SynergyDamage { description, .. } => description,
        }
    }

    /// Damage dealt by this event. Heals report their amount as negative
    /// damage.
    #[must_use]
    pub fn damage(&self) -> i32 {
        match self {
            BattleEvent::CardAttack { damage, .. }
            | BattleEvent::DirectAttack { damage, .. }
            | BattleEvent::SynergyDamage { damage, .. } => *damage,
            BattleEvent::SynergyHeal { amount, .. } => -amount,
        }
    }

    /// Did this event target a player's health directly?
    #[must_use]
    pub fn targets_player(&self) -> bool {
        matches!(self, BattleEvent::DirectAttack { .. })
    }
}

impl std::fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let event = BattleEvent::DirectAttack {
            attacker: PlayerId::new(0),
            attacking_card: CardId::new(3),
            defender: PlayerId::new(1),
            damage: 10,
            description: "K♠ attacks Bob directly for 10 damage".to_string(),
        };

        assert_eq!(event.damage(), 10);
        assert!(event.targets_player());
        assert_eq!(format!("{event}"), "K♠ attacks Bob directly for 10 damage");
    }

    #[test]
    fn test_heal_reports_negative_damage() {
        let event = BattleEvent::SynergyHeal {
            player: PlayerId::new(1),
            suit: Suit::Hearts,
            amount: 2,
            description: "Bob heals 2 from Hearts synergy".to_string(),
        };

        assert_eq!(event.damage(), -2);
        assert!(!event.targets_player());
    }

    #[test]
    fn test_event_serde_round_trip() {
        let event = BattleEvent::CardAttack {
            attacker: PlayerId::new(0),
            attacking_card: CardId::new(12),
            defender: PlayerId::new(1),
            defending_card: CardId::new(40),
            damage: 7,
            description: "7♥ attacks Q♦ for 7 damage".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: BattleEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
