use sixmax_engine::game::Game;
use sixmax_engine::player::{all_positions, Position, SEAT_COUNT, STARTING_STACK};

#[test]
fn six_seats_in_fixed_position_order() {
    let game = Game::new(Some(1));
    let positions: Vec<Position> = game.seats().iter().map(|s| s.position()).collect();
    assert_eq!(positions, all_positions().to_vec());
    assert_eq!(game.seats().len(), SEAT_COUNT);
}

#[test]
fn exactly_one_human_seat_for_any_seed() {
    for seed in 0..32 {
        let game = Game::new(Some(seed));
        let humans = game.seats().iter().filter(|s| s.is_human()).count();
        assert_eq!(humans, 1, "seed {} produced {} human seats", seed, humans);
    }
}

#[test]
fn all_stacks_start_at_the_configured_stack() {
    let game = Game::new(Some(9));
    assert!(game.seats().iter().all(|s| s.stack() == STARTING_STACK));
}

#[test]
fn no_seat_starts_folded() {
    let game = Game::new(Some(9));
    assert!(game.seats().iter().all(|s| !s.has_folded()));
    assert_eq!(game.active_count(), SEAT_COUNT);
}

#[test]
fn same_seed_places_the_human_at_the_same_seat() {
    for seed in [0u64, 7, 42, 9001] {
        let a = Game::new(Some(seed));
        let b = Game::new(Some(seed));
        let human_a = a.seats().iter().position(|s| s.is_human());
        let human_b = b.seats().iter().position(|s| s.is_human());
        assert_eq!(human_a, human_b);
    }
}

#[test]
fn omitted_seed_resolves_to_a_fixed_default() {
    let a = Game::new(None);
    let b = Game::new(None);
    assert_eq!(a.seed(), b.seed());
    assert!(a.seed().is_some());
    let human_a = a.seats().iter().position(|s| s.is_human());
    let human_b = b.seats().iter().position(|s| s.is_human());
    assert_eq!(human_a, human_b);
}

#[test]
fn fresh_game_has_no_moves_and_no_all_in() {
    let game = Game::new(Some(3));
    assert!(game.moves().is_empty());
    assert!(!game.has_all_in());
    assert_eq!(game.acting_index(), 0);
}
