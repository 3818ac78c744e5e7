//! Seat and history formatters for terminal display.

use sixmax_engine::history::MoveHistory;
use sixmax_engine::player::Seat;

/// One status line per seat, e.g. `UTG  stack=100` with a `(you)` marker on
/// the human seat and `folded` once the seat is out.
pub fn format_seat_line(seat: &Seat) -> String {
    let mut line = format!("{:<4} stack={}", seat.position().abbrev(), seat.stack());
    if seat.is_human() {
        line.push_str("  (you)");
    }
    if seat.has_folded() {
        line.push_str("  folded");
    }
    line
}

/// Compact history rendering for the per-step status line.
pub fn format_history(history: &MoveHistory) -> String {
    if history.is_empty() {
        "(none)".to_string()
    } else {
        history.encoded()
    }
}
