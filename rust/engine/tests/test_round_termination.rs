use sixmax_engine::engine::{Engine, RoundStatus, Turn};
use sixmax_engine::errors::GameError;
use sixmax_engine::game::Game;
use sixmax_engine::player::{all_positions, Action, Position, Seat, SEAT_COUNT, STARTING_STACK};

fn table_with_human(human: usize) -> [Seat; SEAT_COUNT] {
    let positions = all_positions();
    std::array::from_fn(|i| Seat::new(positions[i], i == human, STARTING_STACK))
}

#[test]
fn human_fold_on_first_turn_ends_the_round() {
    // Human in the big blind: five automated calls, then an immediate fold.
    let mut engine = Engine::with_game(Game::from_seats(table_with_human(5)));
    assert_eq!(
        engine.game().seats()[5].position(),
        Position::BigBlind
    );
    for _ in 0..5 {
        assert!(matches!(engine.advance(), Turn::ToAct { .. }));
        engine.apply_action(Action::Call).unwrap();
    }
    assert!(matches!(engine.advance(), Turn::ToAct { seat: 5 }));
    let status = engine.apply_action(Action::Fold).unwrap();
    assert_eq!(status, RoundStatus::HumanFolded);
    assert_eq!(engine.game().moves().encoded(), "cccccf");

    // No further steps are taken.
    assert!(matches!(
        engine.advance(),
        Turn::Over(RoundStatus::HumanFolded)
    ));
    assert_eq!(engine.step_count(), 6);
}

#[test]
fn human_all_in_ends_the_round_and_sets_the_flag() {
    let mut engine = Engine::with_game(Game::from_seats(table_with_human(0)));
    assert!(matches!(engine.advance(), Turn::ToAct { seat: 0 }));
    let status = engine.apply_action(Action::AllIn).unwrap();
    assert_eq!(status, RoundStatus::HumanAllIn);
    assert!(engine.game().has_all_in());
    assert_eq!(engine.game().moves().encoded(), "a");
    assert!(matches!(
        engine.advance(),
        Turn::Over(RoundStatus::HumanAllIn)
    ));
}

#[test]
fn round_ends_exactly_when_one_active_seat_remains() {
    // Human at seat 0 calls; the five automated seats fold one by one. The
    // precondition trips on the step after the fifth fold, not before.
    let mut engine = Engine::with_game(Game::from_seats(table_with_human(0)));
    engine.advance();
    engine.apply_action(Action::Call).unwrap();
    for seat in 1..SEAT_COUNT {
        assert_eq!(engine.game().active_count(), SEAT_COUNT - seat + 1);
        assert!(matches!(engine.advance(), Turn::ToAct { .. }));
        engine.apply_action(Action::Fold).unwrap();
    }
    assert_eq!(engine.game().active_count(), 1);
    assert!(matches!(
        engine.advance(),
        Turn::Over(RoundStatus::LastSeatStanding)
    ));
    let folds: Vec<bool> = engine
        .game()
        .seats()
        .iter()
        .map(|s| s.has_folded())
        .collect();
    assert_eq!(folds, vec![false, true, true, true, true, true]);
    assert_eq!(engine.game().moves().encoded(), "cfffff");
    assert_eq!(engine.step_count(), 6);
}

#[test]
fn folds_spread_over_cycles_still_terminate_on_the_count() {
    // Human at seat 5 never gets to act a second time: folds accumulate
    // across two cycles and the precondition fires between steps.
    let mut engine = Engine::with_game(Game::from_seats(table_with_human(5)));
    let first_cycle = [
        Action::Fold,
        Action::Call,
        Action::Fold,
        Action::Call,
        Action::Fold,
        Action::Call, // human
    ];
    for action in first_cycle {
        assert!(matches!(engine.advance(), Turn::ToAct { .. }));
        engine.apply_action(action).unwrap();
    }
    assert_eq!(engine.game().active_count(), 3);

    // Second cycle: seats 0, 2, 4 are skipped; seats 1 and 3 fold.
    let mut live_actions = [Action::Fold, Action::Fold].into_iter();
    let outcome = loop {
        match engine.advance() {
            Turn::Over(status) => break status,
            Turn::Skipped { seat } => assert!(seat % 2 == 0),
            Turn::ToAct { .. } => {
                let action = live_actions.next().unwrap();
                engine.apply_action(action).unwrap();
            }
        }
    };
    assert_eq!(outcome, RoundStatus::LastSeatStanding);
    assert_eq!(engine.game().active_count(), 1);
    // Cycle one plus seat 0 skip, seat 1 fold, seat 2 skip, seat 3 fold.
    assert_eq!(engine.game().moves().encoded(), "fcfcfc0f0f");
}

#[test]
fn applying_after_termination_is_an_error() {
    let mut engine = Engine::with_game(Game::from_seats(table_with_human(0)));
    engine.advance();
    engine.apply_action(Action::Fold).unwrap();
    assert_eq!(engine.status(), RoundStatus::HumanFolded);
    assert_eq!(
        engine.apply_action(Action::Call),
        Err(GameError::RoundOver)
    );
    assert_eq!(engine.step_count(), 1);
}

#[test]
fn applying_to_a_folded_seat_is_an_error() {
    // Drive the round so seat 1 folds, then force its turn again without
    // the advance() skip and check the guard.
    let mut engine = Engine::with_game(Game::from_seats(table_with_human(0)));
    let script = [
        Action::Call,
        Action::Fold,
        Action::Call,
        Action::Call,
        Action::Call,
        Action::Call,
        Action::Call, // seat 0, second cycle
    ];
    for action in script {
        assert!(matches!(engine.advance(), Turn::ToAct { .. }));
        engine.apply_action(action).unwrap();
    }
    // Acting index is now seat 1, which has folded.
    let err = engine.apply_action(Action::Call).unwrap_err();
    assert_eq!(
        err,
        GameError::SeatAlreadyFolded {
            position: Position::Hijack
        }
    );
    assert_eq!(engine.step_count(), 7, "guard must not record a turn");
}

#[test]
fn terminal_statuses_describe_themselves() {
    assert!(RoundStatus::LastSeatStanding.is_terminal());
    assert!(RoundStatus::HumanFolded.is_terminal());
    assert!(RoundStatus::HumanAllIn.is_terminal());
    assert!(!RoundStatus::Active.is_terminal());
    assert_eq!(
        RoundStatus::LastSeatStanding.describe(),
        "only one active seat remains"
    );
}
