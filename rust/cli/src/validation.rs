//! Input parsing for the interactive betting prompt.
//!
//! The prompt's contract is that invalid text never reaches the engine:
//! the play loop keeps re-prompting until this module yields a canonical
//! action or the user bails out.

use sixmax_engine::player::Action;

/// Result of parsing one line of prompt input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(Action),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into an action or the quit escape.
///
/// Accepts exactly the four canonical actions, compared case-insensitively
/// after whitespace trimming: `Raise`, `Call`, `Fold`, `Allin`. `q` and
/// `quit` abandon the hand.
///
/// # Example
///
/// ```rust
/// # use sixmax_cli::validation::{parse_action, ParseResult};
/// use sixmax_engine::player::Action;
///
/// assert_eq!(parse_action("Fold"), ParseResult::Action(Action::Fold));
/// assert_eq!(parse_action("  ALLIN "), ParseResult::Action(Action::AllIn));
/// assert_eq!(parse_action("q"), ParseResult::Quit);
///
/// match parse_action("check") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_action(input: &str) -> ParseResult {
    let normalized = input.trim().to_lowercase();

    if normalized.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    if normalized == "q" || normalized == "quit" {
        return ParseResult::Quit;
    }

    match Action::from_label(&normalized) {
        Some(action) => ParseResult::Action(action),
        None => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: Raise, Call, Fold, Allin (or q to quit)",
            normalized
        )),
    }
}
