//! Card units: suits, ranks, and derived combat stats.
//!
//! A `Card` is an immutable identity (id, suit, rank) plus mutable combat
//! state (health, defeated). Strength, health, and draft cost are derived
//! once at construction from the rank:
//!
//! - Number ranks (2-10): strength = health = face value
//! - Jack: 11/11 (assassin - bonus damage vs royalty)
//! - Queen: 12/12
//! - King: 13/15 (tank - trades attack output for extra health)
//! - Ace and Joker: 14/14 (the strongest units)
//!
//! The cost schedule is a deliberate pricing curve, not a flat constant:
//! number cards cost 2, Jack/Queen 3, King 4, Ace/Joker 5.

use serde::{Deserialize, Serialize};

/// Card suit. Suits carry combat roles; Joker is the dedicated suit for
/// the two joker cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Healing/support (synergy: battlefield healing).
    Hearts,
    /// Economy.
    Diamonds,
    /// Area damage (synergy: damage to the opposing battlefield).
    Clubs,
    /// Single-target damage (+20% attack).
    Spades,
    /// Special suit for jokers only.
    Joker,
}

impl Suit {
    /// The four standard suits, excluding `Joker`.
    pub const STANDARD: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Display symbol for this suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
            Suit::Joker => '★',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank. Number ranks map to their face value; court ranks and the
/// joker have fixed elevated stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Joker,
}

impl Rank {
    /// The thirteen ranks of a standard suit, excluding `Joker`.
    pub const STANDARD: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Is this a court card (Jack, Queen, King)?
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    /// Base attack strength for this rank.
    #[must_use]
    pub const fn strength(self) -> i32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace | Rank::Joker => 14,
        }
    }

    /// Base health for this rank. Kings get extra health as tanks.
    #[must_use]
    pub const fn health(self) -> i32 {
        match self {
            Rank::King => 15,
            other => other.strength(),
        }
    }

    /// Draft cost for this rank.
    #[must_use]
    pub const fn cost(self) -> u32 {
        match self {
            Rank::Jack | Rank::Queen => 3,
            Rank::King => 4,
            Rank::Ace | Rank::Joker => 5,
            _ => 2,
        }
    }

    /// Short display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Joker => "Joker",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Unique card identifier within one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card unit: immutable identity plus mutable combat state.
///
/// Invariant: `0 <= health <= max_health`. A card at 0 health is defeated
/// and takes no further part in combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique ID within the deck this card was created in.
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
    /// Attack strength, fixed at construction.
    pub strength: i32,
    /// Current health.
    pub health: i32,
    /// Health at construction; healing never exceeds this.
    pub max_health: i32,
    /// Draft cost in points.
    pub cost: u32,
    /// Set once health reaches 0.
    pub defeated: bool,
}

impl Card {
    /// Create a card with stats derived from its rank.
    #[must_use]
    pub fn new(id: CardId, suit: Suit, rank: Rank) -> Self {
        Self {
            id,
            suit,
            rank,
            strength: rank.strength(),
            health: rank.health(),
            max_health: rank.health(),
            cost: rank.cost(),
            defeated: false,
        }
    }

    /// Is this a court card (Jack, Queen, King)?
    #[must_use]
    pub fn is_face_card(&self) -> bool {
        self.rank.is_face()
    }

    /// Compute the damage this card deals to `target`.
    ///
    /// Damage starts at `strength` and applies ordered multiplicative
    /// modifiers, floored to an integer at the end:
    ///
    /// 1. Jack attacking King/Queen/Ace: x1.5
    /// 2. King attacking anything: x0.8
    /// 3. Spades attacking anything: x1.2
    ///
    /// Pure - neither card is modified.
    #[must_use]
    pub fn attack(&self, target: &Card) -> i32 {
        let mut damage = f64::from(self.strength);

        if self.rank == Rank::Jack
            && matches!(target.rank, Rank::King | Rank::Queen | Rank::Ace)
        {
            damage *= 1.5;
        } else if self.rank == Rank::King {
            damage *= 0.8;
        }

        if self.suit == Suit::Spades {
            damage *= 1.2;
        }

        damage.floor() as i32
    }

    /// Compute the damage this card deals to an undefended player.
    ///
    /// Kings still pull their punch (x0.8, floored); the Spades bonus
    /// and the Jack bonus only apply against card targets.
    #[must_use]
    pub fn direct_damage(&self) -> i32 {
        if self.rank == Rank::King {
            (f64::from(self.strength) * 0.8).floor() as i32
        } else {
            self.strength
        }
    }

    /// Apply damage, clamping health into `[0, max_health]` and marking
    /// the card defeated at 0. Negative amounts heal.
    pub fn apply_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).clamp(0, self.max_health);
        if self.health == 0 {
            self.defeated = true;
        }
    }

    /// Restore the card to full health and clear the defeated flag.
    pub fn reset(&mut self) {
        self.health = self.max_health;
        self.defeated = false;
    }

    /// Display name, e.g. `"K♠"` or `"Joker★"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}{}", self.rank, self.suit)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
