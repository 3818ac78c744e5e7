use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;
use crate::history::MoveHistory;
use crate::player::{generate_seats, Action, Seat, SEAT_COUNT};

/// Default seed used when none is supplied.
const DEFAULT_SEED: u64 = 0x5EA7_5EA7;

/// Everything one hand owns: the six seats, the generated deck, the move
/// history, and the all-in flag. Constructed once per hand, passed
/// explicitly into the betting-round engine, and discarded at hand end.
/// No cross-hand state is retained anywhere.
#[derive(Debug, Clone)]
pub struct Game {
    seats: [Seat; SEAT_COUNT],
    deck: Vec<Card>,
    moves: MoveHistory,
    has_all_in: bool,
    seed: Option<u64>,
}

impl Game {
    /// Create a hand with a seeded RNG. The seed drives the human-seat draw
    /// only; the deck is a fixed enumeration. Same seed, same table.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self {
            seats: generate_seats(&mut rng),
            deck: full_deck(),
            moves: MoveHistory::new(),
            has_all_in: false,
            seed: Some(seed),
        }
    }

    /// Create a hand from an explicit seat layout. Callers keep the
    /// one-human-seat invariant.
    pub fn from_seats(seats: [Seat; SEAT_COUNT]) -> Self {
        Self {
            seats,
            deck: full_deck(),
            moves: MoveHistory::new(),
            has_all_in: false,
            seed: None,
        }
    }

    pub fn seats(&self) -> &[Seat; SEAT_COUNT] {
        &self.seats
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn moves(&self) -> &MoveHistory {
        &self.moves
    }

    pub fn has_all_in(&self) -> bool {
        self.has_all_in
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of seats that have not folded.
    pub fn active_count(&self) -> usize {
        self.seats.iter().filter(|s| !s.has_folded()).count()
    }

    /// Index of the seat whose turn it is, derived from the history length.
    /// The history is the only turn counter there is.
    pub fn acting_index(&self) -> usize {
        self.moves.len() % SEAT_COUNT
    }

    /// Record one turn: `None` appends the skip placeholder for an
    /// already-folded seat, `Some` appends the action's symbol.
    pub fn record_move(&mut self, action: Option<Action>) {
        match action {
            None => self.moves.push_skip(),
            Some(a) => self.moves.push_action(a),
        }
    }

    /// String boundary for move recording. The empty label records a skip
    /// and the four canonical labels record their action; any other label
    /// is rejected without touching the history, since every append has to
    /// correspond to exactly one turn.
    pub fn record_move_label(&mut self, label: &str) -> Result<(), GameError> {
        if label.is_empty() {
            self.moves.push_skip();
            return Ok(());
        }
        match Action::from_label(label) {
            Some(a) => {
                self.moves.push_action(a);
                Ok(())
            }
            None => Err(GameError::UnrecognizedMove {
                label: label.to_string(),
            }),
        }
    }

    pub(crate) fn fold_seat(&mut self, idx: usize) {
        self.seats[idx].fold();
    }

    pub(crate) fn set_all_in(&mut self) {
        self.has_all_in = true;
    }
}
