use std::fmt;

use rand::Rng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

/// Number of seats at the table.
pub const SEAT_COUNT: usize = 6;

/// Starting stack for every seat, in chips. The betting round reads it but
/// never alters it.
pub const STARTING_STACK: u32 = 100;

/// One of the six fixed table positions, in seating order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Position {
    /// Under the gun, first to act
    UnderTheGun,
    /// Hijack
    Hijack,
    /// Cutoff
    Cutoff,
    /// Button
    Button,
    /// Small blind
    SmallBlind,
    /// Big blind
    BigBlind,
}

impl Position {
    pub fn abbrev(self) -> &'static str {
        match self {
            Position::UnderTheGun => "UTG",
            Position::Hijack => "HJ",
            Position::Cutoff => "CO",
            Position::Button => "BTN",
            Position::SmallBlind => "SB",
            Position::BigBlind => "BB",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

pub fn all_positions() -> [Position; SEAT_COUNT] {
    [
        Position::UnderTheGun,
        Position::Hijack,
        Position::Cutoff,
        Position::Button,
        Position::SmallBlind,
        Position::BigBlind,
    ]
}

/// An action a live seat can take on its turn. The set is closed; skipped
/// turns for already-folded seats are a history symbol, not an action.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Raise the current bet
    Raise,
    /// Call the current bet
    Call,
    /// Fold and forfeit the hand
    Fold,
    /// Bet all remaining chips
    AllIn,
}

impl Action {
    /// Canonical lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Raise => "raise",
            Action::Call => "call",
            Action::Fold => "fold",
            Action::AllIn => "allin",
        }
    }

    /// Parse one of the four canonical labels. Anything else is `None`;
    /// boundary input that still needs case or whitespace normalization is
    /// handled by the caller before it gets here.
    pub fn from_label(label: &str) -> Option<Action> {
        match label {
            "raise" => Some(Action::Raise),
            "call" => Some(Action::Call),
            "fold" => Some(Action::Fold),
            "allin" => Some(Action::AllIn),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-seat state: table position, whether a human controls it, the chip
/// stack, and the fold flag. Only the fold flag mutates during a round.
#[derive(Debug, Clone)]
pub struct Seat {
    position: Position,
    is_human: bool,
    stack: u32,
    has_folded: bool,
}

impl Seat {
    pub fn new(position: Position, is_human: bool, stack: u32) -> Self {
        Self {
            position,
            is_human,
            stack,
            has_folded: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }
    pub fn is_human(&self) -> bool {
        self.is_human
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn has_folded(&self) -> bool {
        self.has_folded
    }

    pub(crate) fn fold(&mut self) {
        self.has_folded = true;
    }
}

/// Build the six seats in fixed position order, with exactly one seat drawn
/// uniformly at random as the human-controlled one. Every stack starts at
/// [`STARTING_STACK`] and every fold flag starts clear.
pub fn generate_seats(rng: &mut ChaCha20Rng) -> [Seat; SEAT_COUNT] {
    let human = rng.random_range(0..SEAT_COUNT);
    let positions = all_positions();
    std::array::from_fn(|i| Seat::new(positions[i], i == human, STARTING_STACK))
}
