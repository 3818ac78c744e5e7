//! Deal command handler: table inspection without playing a hand.
//!
//! Prints the seat assignment and the full 52-card deck enumeration for a
//! seed, so a table can be inspected and reproduced.

use std::io::Write;

use sixmax_engine::game::Game;

use crate::error::CliError;
use crate::formatters::format_seat_line;

/// Handle the deal command.
///
/// Generates a table from the seed and prints the six seats followed by
/// the deck in generation order. The same seed always prints the same
/// table.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let game = Game::new(Some(seed));

    writeln!(out, "deal: seed={}", seed)?;
    writeln!(out, "Seats:")?;
    for seat in game.seats() {
        writeln!(out, "  {}", format_seat_line(seat))?;
    }
    writeln!(out, "Deck ({} cards):", game.deck().len())?;
    for card in game.deck() {
        writeln!(out, "  {}", card.describe())?;
    }
    Ok(())
}
