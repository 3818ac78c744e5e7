use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::game::Game;
use crate::player::Action;

/// Where the betting round stands. Every variant except `Active` is
/// terminal; once a terminal status is reached no further step is taken.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// The round is still in progress
    Active,
    /// Fewer than two active seats remained before a step began
    LastSeatStanding,
    /// The human player folded on their own turn
    HumanFolded,
    /// The human player went all-in on their own turn
    HumanAllIn,
}

impl RoundStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundStatus::Active)
    }

    pub fn describe(self) -> &'static str {
        match self {
            RoundStatus::Active => "betting round in progress",
            RoundStatus::LastSeatStanding => "only one active seat remains",
            RoundStatus::HumanFolded => "human player folded",
            RoundStatus::HumanAllIn => "human player went all-in",
        }
    }
}

/// What a single call to [`Engine::advance`] resolved to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Turn {
    /// The round is terminal; no step was taken.
    Over(RoundStatus),
    /// The acting seat had already folded; its skip placeholder was
    /// recorded and the turn passed on. One full step was taken.
    Skipped { seat: usize },
    /// A live seat must act. The caller obtains an action for it and feeds
    /// it to [`Engine::apply_action`].
    ToAct { seat: usize },
}

/// The betting-round state machine. Each step it derives the acting seat
/// from the move-history length, records exactly one symbol, and decides
/// whether the round continues. One seat acts per step and steps are
/// totally ordered by history length; nothing here is concurrent.
///
/// # Examples
///
/// ```
/// use sixmax_engine::engine::{Engine, Turn};
/// use sixmax_engine::player::Action;
///
/// let mut engine = Engine::new(Some(7));
/// if let Turn::ToAct { seat } = engine.advance() {
///     assert_eq!(seat, 0);
///     engine.apply_action(Action::Call).unwrap();
/// }
/// assert_eq!(engine.game().moves().encoded(), "c");
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    game: Game,
    status: RoundStatus,
}

impl Engine {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_game(Game::new(seed))
    }

    /// Run the round over an explicitly constructed hand.
    pub fn with_game(game: Game) -> Self {
        Self {
            game,
            status: RoundStatus::Active,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Number of steps taken so far, which is always the history length.
    pub fn step_count(&self) -> usize {
        self.game.moves().len()
    }

    /// Begin the next step. Checks the active-seat precondition, then
    /// either ends the round, auto-skips a folded seat (recording its
    /// placeholder symbol without consulting any decision source), or
    /// hands the turn to the caller to resolve via [`Engine::apply_action`].
    pub fn advance(&mut self) -> Turn {
        if self.status.is_terminal() {
            return Turn::Over(self.status);
        }
        if self.game.active_count() <= 1 {
            self.status = RoundStatus::LastSeatStanding;
            return Turn::Over(self.status);
        }
        let seat = self.game.acting_index();
        if self.game.seats()[seat].has_folded() {
            self.game.record_move(None);
            return Turn::Skipped { seat };
        }
        Turn::ToAct { seat }
    }

    /// Record the acting seat's action and apply its consequences: a human
    /// fold or all-in ends the round (the all-in also sets the hand's
    /// all-in flag), an automated fold marks the seat folded and the round
    /// goes on. Applying to a finished round or to a folded seat is a
    /// caller bug, reported as an error rather than recorded.
    pub fn apply_action(&mut self, action: Action) -> Result<RoundStatus, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::RoundOver);
        }
        let seat = self.game.acting_index();
        if self.game.seats()[seat].has_folded() {
            return Err(GameError::SeatAlreadyFolded {
                position: self.game.seats()[seat].position(),
            });
        }
        let is_human = self.game.seats()[seat].is_human();
        self.game.record_move(Some(action));
        match (is_human, action) {
            (true, Action::Fold) => self.status = RoundStatus::HumanFolded,
            (true, Action::AllIn) => {
                self.game.set_all_in();
                self.status = RoundStatus::HumanAllIn;
            }
            (false, Action::Fold) => self.game.fold_seat(seat),
            _ => {}
        }
        Ok(self.status)
    }
}
