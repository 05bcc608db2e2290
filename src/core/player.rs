//! Player identity and per-player battle state.
//!
//! A `Player` owns a hand, an ordered battlefield (the attack sequence),
//! a health pool, and the draft economy counters. All index-taking
//! operations reject out-of-bounds input by returning `false`/`None`
//! rather than panicking - the engine never crashes on bad UI input.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Suit};

/// Inline capacity for a battlefield; spills to the heap past this.
pub type Battlefield = SmallVec<[Card; 8]>;

/// Player identifier. This engine runs exactly two players, `PlayerId(0)`
/// and `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player in a two-player match.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Who makes decisions for a player.
///
/// The engine never schedules anything for `Auto` players; the driver
/// invokes the synchronous strategy functions (`Game::run_auto_draft`)
/// at whatever pace it likes. The engine's only built-in `Auto` behavior
/// is placing the hand onto the battlefield when arrangement begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    Human,
    Auto,
}

/// One player's live state.
///
/// Invariants: `0 <= health <= max_health`; battlefield order is the
/// attack sequence and is only changed by explicit operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub controller: Controller,
    pub health: i32,
    pub max_health: i32,
    /// Drafted cards not yet placed.
    pub hand: Vec<Card>,
    /// In-play cards; order determines the attack sequence.
    pub battlefield: Battlefield,
    /// Points available to spend in the current draft phase.
    pub draft_points: u32,
    /// Credit from selling cards, folded into next round's draft points.
    pub points_from_sales: u32,
}

impl Player {
    /// Create a player at full health with an empty hand and battlefield.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, controller: Controller, health: i32) -> Self {
        assert!(health > 0, "Starting health must be positive");
        Self {
            id,
            name: name.into(),
            controller,
            health,
            max_health: health,
            hand: Vec::new(),
            battlefield: Battlefield::new(),
            draft_points: 0,
            points_from_sales: 0,
        }
    }

    /// Add a drafted card to the hand.
    pub fn add_to_hand(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Move the card at `hand_index` onto the battlefield at `position`.
    ///
    /// `position` is clamped into `[0, battlefield.len()]`; the relative
    /// order of all other battlefield cards is preserved. Returns `false`
    /// if `hand_index` is out of bounds.
    pub fn play_card(&mut self, hand_index: usize, position: usize) -> bool {
        if hand_index >= self.hand.len() {
            return false;
        }
        let card = self.hand.remove(hand_index);
        let position = position.min(self.battlefield.len());
        self.battlefield.insert(position, card);
        true
    }

    /// Remove the card at `index` from the battlefield.
    pub fn remove_from_battlefield(&mut self, index: usize) -> Option<Card> {
        if index >= self.battlefield.len() {
            return None;
        }
        Some(self.battlefield.remove(index))
    }

    /// Sell the battlefield card at `index` for one bonus point next round.
    ///
    /// The card is discarded immediately; the credit lands in
    /// `points_from_sales` and converts to draft points at the next
    /// draft phase entry.
    pub fn sell_from_battlefield(&mut self, index: usize) -> Option<Card> {
        let card = self.remove_from_battlefield(index)?;
        self.points_from_sales += 1;
        Some(card)
    }

    /// Reorder the battlefield to `new_order`, a permutation of the
    /// current indices. Rejects anything that is not a full permutation.
    pub fn rearrange_battlefield(&mut self, new_order: &[usize]) -> bool {
        let len = self.battlefield.len();
        if new_order.len() != len {
            return false;
        }
        let mut seen = vec![false; len];
        for &i in new_order {
            if i >= len || seen[i] {
                return false;
            }
            seen[i] = true;
        }

        let old = std::mem::take(&mut self.battlefield);
        self.battlefield = new_order.iter().map(|&i| old[i]).collect();
        true
    }

    /// Reduce health, clamped at 0.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    /// Restore health, clamped at `max_health`.
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    /// Has this player lost?
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Does the battlefield hold any card of `suit`?
    #[must_use]
    pub fn has_suit(&self, suit: Suit) -> bool {
        self.battlefield.iter().any(|c| c.suit == suit)
    }

    /// Count battlefield cards of `suit` (drives suit synergies).
    #[must_use]
    pub fn count_suit(&self, suit: Suit) -> usize {
        self.battlefield.iter().filter(|c| c.suit == suit).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Rank};

    fn player() -> Player {
        Player::new(PlayerId::new(0), "Alice", Controller::Human, 20)
    }

    fn card(id: u32, rank: Rank) -> Card {
        Card::new(CardId::new(id), Suit::Hearts, rank)
    }

    #[test]
    fn test_new_player() {
        let p = player();
        assert_eq!(p.health, 20);
        assert_eq!(p.max_health, 20);
        assert!(p.hand.is_empty());
        assert!(p.battlefield.is_empty());
        assert_eq!(p.draft_points, 0);
    }

    #[test]
    #[should_panic(expected = "Starting health must be positive")]
    fn test_zero_health_rejected() {
        let _ = Player::new(PlayerId::new(0), "x", Controller::Human, 0);
    }

    #[test]
    fn test_opponent_id() {
        assert_eq!(PlayerId::new(0).opponent(), PlayerId::new(1));
        assert_eq!(PlayerId::new(1).opponent(), PlayerId::new(0));
    }

    #[test]
    fn test_play_card_inserts_at_position() {
        let mut p = player();
        p.add_to_hand(card(0, Rank::Two));
        p.add_to_hand(card(1, Rank::Three));
        p.add_to_hand(card(2, Rank::Four));

        assert!(p.play_card(0, 0)); // [2]
        assert!(p.play_card(0, 0)); // [3, 2]
        assert!(p.play_card(0, 1)); // [3, 4, 2]

        let ranks: Vec<_> = p.battlefield.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![Rank::Three, Rank::Four, Rank::Two]);
        assert!(p.hand.is_empty());
    }

    #[test]
    fn test_play_card_clamps_position() {
        let mut p = player();
        p.add_to_hand(card(0, Rank::Two));
        assert!(p.play_card(0, 999));
        assert_eq!(p.battlefield.len(), 1);
    }

    #[test]
    fn test_play_card_bad_index() {
        let mut p = player();
        assert!(!p.play_card(0, 0));

        p.add_to_hand(card(0, Rank::Two));
        assert!(!p.play_card(1, 0));
        assert_eq!(p.hand.len(), 1);
    }

    #[test]
    fn test_sell_from_battlefield() {
        let mut p = player();
        p.add_to_hand(card(0, Rank::Five));
        p.play_card(0, 0);

        let sold = p.sell_from_battlefield(0);
        assert_eq!(sold.unwrap().rank, Rank::Five);
        assert!(p.battlefield.is_empty());
        assert_eq!(p.points_from_sales, 1);

        // Out of bounds fails without side effects
        assert!(p.sell_from_battlefield(0).is_none());
        assert_eq!(p.points_from_sales, 1);
    }

    #[test]
    fn test_rearrange_battlefield() {
        let mut p = player();
        for (i, rank) in [Rank::Two, Rank::Three, Rank::Four].iter().enumerate() {
            p.add_to_hand(card(i as u32, *rank));
            p.play_card(0, i);
        }

        assert!(p.rearrange_battlefield(&[2, 0, 1]));
        let ranks: Vec<_> = p.battlefield.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![Rank::Four, Rank::Two, Rank::Three]);

        // Not a permutation
        assert!(!p.rearrange_battlefield(&[0, 0, 1]));
        assert!(!p.rearrange_battlefield(&[0, 1]));
        assert!(!p.rearrange_battlefield(&[0, 1, 3]));
    }

    #[test]
    fn test_damage_and_heal_clamp() {
        let mut p = player();

        p.take_damage(5);
        assert_eq!(p.health, 15);

        p.take_damage(100);
        assert_eq!(p.health, 0);
        assert!(p.is_defeated());

        p.heal(7);
        assert_eq!(p.health, 7);

        p.heal(100);
        assert_eq!(p.health, p.max_health);
    }

    #[test]
    fn test_count_suit() {
        let mut p = player();
        p.add_to_hand(Card::new(CardId::new(0), Suit::Hearts, Rank::Two));
        p.add_to_hand(Card::new(CardId::new(1), Suit::Hearts, Rank::Three));
        p.add_to_hand(Card::new(CardId::new(2), Suit::Clubs, Rank::Four));
        for i in 0..3 {
            p.play_card(0, i);
        }

        assert_eq!(p.count_suit(Suit::Hearts), 2);
        assert_eq!(p.count_suit(Suit::Clubs), 1);
        assert_eq!(p.count_suit(Suit::Spades), 0);
        assert!(p.has_suit(Suit::Clubs));
        assert!(!p.has_suit(Suit::Joker));
    }
}
