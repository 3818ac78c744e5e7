//! # sixmax-engine: Six-Seat Betting-Round Core
//!
//! Simulates a single hand of poker at a fixed six-seat table: one seat is
//! human-controlled, the other five are automated, and a sequential betting
//! round runs until only one active seat remains or the human folds or goes
//! all-in. The betting-round state machine derives whose turn it is from
//! the move-history length, so history and turn order are one invariant,
//! not two.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck enumeration
//! - [`player`] - Positions, actions, per-seat state, seat generation
//! - [`history`] - Single-character move encoding and the append-only log
//! - [`game`] - The per-hand aggregate owning seats, deck, and history
//! - [`engine`] - The betting-round state machine and termination rules
//! - [`logger`] - HandRecord JSONL export for finished hands
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use sixmax_engine::engine::{Engine, RoundStatus, Turn};
//! use sixmax_engine::player::Action;
//!
//! // Same seed, same table: the human seat draw is deterministic.
//! let mut engine = Engine::new(Some(42));
//!
//! // Drive the round by feeding an action whenever a live seat must act.
//! let outcome = loop {
//!     match engine.advance() {
//!         Turn::Over(status) => break status,
//!         Turn::Skipped { .. } => continue,
//!         Turn::ToAct { seat } => {
//!             let act = if engine.game().seats()[seat].is_human() {
//!                 Action::Fold
//!             } else {
//!                 Action::Call
//!             };
//!             engine.apply_action(act).unwrap();
//!         }
//!     }
//! };
//! assert_eq!(outcome, RoundStatus::HumanFolded);
//! ```

pub mod cards;
pub mod engine;
pub mod errors;
pub mod game;
pub mod history;
pub mod logger;
pub mod player;
