//! # sixmax-ai: Decision Providers for Automated Seats
//!
//! Supplies actions for the automated seats in a betting round behind a
//! common trait, so the engine's call sites never change when the decision
//! logic does.
//!
//! ## Core Components
//!
//! - [`Policy`] - Trait defining the decision-provider interface
//! - [`uniform`] - Uniform-random stub implementation
//! - [`create_policy`] - Factory function for creating providers by name
//!
//! ## Quick Start
//!
//! ```rust
//! use sixmax_ai::create_policy;
//! use sixmax_engine::game::Game;
//!
//! let mut policy = create_policy("uniform", 42);
//! assert_eq!(policy.name(), "UniformPolicy");
//!
//! let game = Game::new(Some(42));
//! let action = policy.choose_action(&game, 1);
//! println!("Seat 1 chose: {}", action);
//! ```

use sixmax_engine::game::Game;
use sixmax_engine::player::Action;

pub mod uniform;

/// A source of actions for automated seats.
///
/// Implementations receive the whole observable game state, move history
/// and seat states included, even when they ignore it. That keeps the
/// interface wide enough for a history-aware strategy to drop in without
/// touching the betting loop.
pub trait Policy: Send + Sync {
    /// Choose an action for the automated seat at index `seat`. Always
    /// returns a valid action; a provider has no failure mode.
    fn choose_action(&mut self, game: &Game, seat: usize) -> Action;

    /// Name of this provider implementation.
    fn name(&self) -> &str;
}

/// Create a decision provider by kind. The seed makes a whole session
/// reproducible when the caller wants it to be.
///
/// # Supported kinds
///
/// - `"uniform"` - uniform-random stub
///
/// # Panics
///
/// Panics on an unknown kind.
pub fn create_policy(kind: &str, seed: u64) -> Box<dyn Policy> {
    match kind {
        "uniform" => Box::new(uniform::UniformPolicy::seeded(seed)),
        _ => panic!("Unknown policy kind: {}", kind),
    }
}
