//! Property-based tests over the engine's core invariants.
//!
//! Randomized inputs exercise what fixed examples cannot:
//! - Health clamping under arbitrary damage/heal sequences
//! - Battlefield placement against a simple insert model
//! - Rearrangement accepting exactly the permutations
//! - Simulation determinism and damage-formula consistency
//! - Draft phases terminating under arbitrary action scripts

use proptest::prelude::*;

use draft_duel::{
    simulate, BattleEvent, Card, CardId, Controller, Game, GameConfig, GamePhase, GameRng, Player,
    PlayerId, PlayerSnapshot, Rank, Suit,
};

/// Up to `max` cards with unique IDs starting at `id_base`.
fn cards(id_base: u32, max: usize) -> impl Strategy<Value = Vec<Card>> {
    proptest::collection::vec((0..4usize, 0..13usize), 0..=max).prop_map(move |specs| {
        specs
            .iter()
            .enumerate()
            .map(|(i, &(suit, rank))| {
                Card::new(
                    CardId::new(id_base + i as u32),
                    Suit::STANDARD[suit],
                    Rank::STANDARD[rank],
                )
            })
            .collect()
    })
}

fn snapshot(id: u8, name: &str, cards: Vec<Card>) -> PlayerSnapshot {
    PlayerSnapshot {
        id: PlayerId::new(id),
        name: name.to_string(),
        health: 20,
        max_health: 20,
        battlefield: cards.into_iter().collect(),
    }
}

proptest! {
    #[test]
    fn prop_health_stays_in_bounds(
        ops in proptest::collection::vec((any::<bool>(), 0..60i32), 0..40),
    ) {
        let mut player = Player::new(PlayerId::new(0), "Alice", Controller::Human, 20);
        for (is_damage, amount) in ops {
            if is_damage {
                player.take_damage(amount);
            } else {
                player.heal(amount);
            }
            prop_assert!(player.health >= 0);
            prop_assert!(player.health <= player.max_health);
        }
    }

    #[test]
    fn prop_play_card_matches_insert_model(
        count in 0..8usize,
        positions in proptest::collection::vec(0..12usize, 8),
    ) {
        let mut player = Player::new(PlayerId::new(0), "Alice", Controller::Human, 20);
        for i in 0..count {
            player.add_to_hand(Card::new(CardId::new(i as u32), Suit::Hearts, Rank::Two));
        }

        // Clamped Vec::insert is the reference model
        let mut model: Vec<u32> = Vec::new();
        for (i, &position) in positions.iter().take(count).enumerate() {
            prop_assert!(player.play_card(0, position));
            model.insert(position.min(model.len()), i as u32);
        }

        let ids: Vec<u32> = player.battlefield.iter().map(|c| c.id.raw()).collect();
        prop_assert_eq!(ids, model);
        prop_assert!(player.hand.is_empty());
    }

    #[test]
    fn prop_rearrange_accepts_exactly_permutations(
        count in 0..6usize,
        order in proptest::collection::vec(0..8usize, 0..8),
    ) {
        let mut player = Player::new(PlayerId::new(0), "Alice", Controller::Human, 20);
        for i in 0..count {
            player.add_to_hand(Card::new(CardId::new(i as u32), Suit::Hearts, Rank::Two));
            let at = player.battlefield.len();
            player.play_card(0, at);
        }
        let before: Vec<u32> = player.battlefield.iter().map(|c| c.id.raw()).collect();

        let mut sorted = order.clone();
        sorted.sort_unstable();
        let is_permutation = sorted == (0..count).collect::<Vec<_>>();

        let accepted = player.rearrange_battlefield(&order);
        prop_assert_eq!(accepted, is_permutation);

        let after: Vec<u32> = player.battlefield.iter().map(|c| c.id.raw()).collect();
        if accepted {
            let expected: Vec<u32> = order.iter().map(|&i| before[i]).collect();
            prop_assert_eq!(after, expected);
        } else {
            prop_assert_eq!(after, before);
        }
    }

    #[test]
    fn prop_simulation_is_deterministic(
        alice in cards(0, 6),
        bob in cards(100, 6),
        seed in any::<u64>(),
    ) {
        let sides = [
            snapshot(0, "Alice", alice),
            snapshot(1, "Bob", bob),
        ];

        let log1 = simulate(sides.clone(), &GameConfig::default(), &mut GameRng::new(seed));
        let log2 = simulate(sides, &GameConfig::default(), &mut GameRng::new(seed));
        prop_assert_eq!(log1, log2);
    }

    #[test]
    fn prop_event_damage_matches_card_formulas(
        alice in cards(0, 6),
        bob in cards(100, 6),
        seed in any::<u64>(),
    ) {
        let all: Vec<Card> = alice.iter().chain(bob.iter()).copied().collect();
        let sides = [
            snapshot(0, "Alice", alice),
            snapshot(1, "Bob", bob),
        ];

        let log = simulate(sides, &GameConfig::default(), &mut GameRng::new(seed));
        let by_id = |id: CardId| all.iter().find(|c| c.id == id).copied();

        for event in &log {
            match event {
                BattleEvent::CardAttack {
                    attacking_card,
                    defending_card,
                    damage,
                    ..
                } => {
                    let attacker = by_id(*attacking_card);
                    let defender = by_id(*defending_card);
                    prop_assert!(attacker.is_some() && defender.is_some());
                    prop_assert_eq!(*damage, attacker.unwrap().attack(&defender.unwrap()));
                }
                BattleEvent::DirectAttack {
                    attacking_card,
                    damage,
                    ..
                } => {
                    let attacker = by_id(*attacking_card);
                    prop_assert!(attacker.is_some());
                    prop_assert_eq!(*damage, attacker.unwrap().direct_damage());
                    prop_assert!(*damage >= 0);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn prop_draft_phase_always_terminates(
        seed in any::<u64>(),
        script in proptest::collection::vec(any::<Option<u8>>(), 0..30),
    ) {
        let mut game = Game::new(&["Alice", "Bob"], seed);
        game.set_controller(PlayerId::new(1), Controller::Human);
        game.initialize();

        for action in script {
            if game.phase() != GamePhase::Draft {
                break;
            }
            match action {
                Some(index) => {
                    // May legitimately fail (bad index, unaffordable)
                    let _ = game.draft_card(index as usize % 6);
                }
                None => {
                    prop_assert!(game.pass_draft());
                }
            }
        }

        // Whatever the script did, everyone passing ends the phase
        let mut guard = 0;
        while game.phase() == GamePhase::Draft {
            prop_assert!(game.pass_draft());
            guard += 1;
            prop_assert!(guard <= 2, "draft phase did not terminate");
        }
        prop_assert_eq!(game.phase(), GamePhase::Arrangement);
    }
}
