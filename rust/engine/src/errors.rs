use thiserror::Error;

use crate::player::Position;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Unrecognized move label: {label:?}")]
    UnrecognizedMove { label: String },
    #[error("Betting round is already over")]
    RoundOver,
    #[error("Seat {position} has already folded")]
    SeatAlreadyFolded { position: Position },
}
