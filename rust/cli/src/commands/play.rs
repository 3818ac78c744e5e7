//! # Play Command
//!
//! Interactive single-hand gameplay at the six-seat table.
//!
//! One seat is human-controlled and prompted on stdin; the other five
//! consult the configured decision provider after a pacing delay. The hand
//! runs until only one active seat remains or the human folds or goes
//! all-in, printing the move history after every step.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use sixmax_ai::{Policy, create_policy};
use sixmax_engine::engine::{Engine, Turn};
use sixmax_engine::logger::{HandLogger, HandRecord};
use sixmax_engine::player::Action;

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_history, format_seat_line};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_action};

/// Handle the play command: run one interactive hand.
///
/// # Arguments
///
/// * `seed` - RNG seed for a reproducible table (default: config, then random)
/// * `delay_ms` - Pause before each automated action (default: config)
/// * `record` - Append a JSONL record of the finished hand to this file
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for the human seat's actions
///
/// # Returns
///
/// * `Ok(())` when the hand finishes or is abandoned at the prompt
/// * `Err(CliError)` on configuration, engine, or I/O failures
pub fn handle_play_command(
    seed: Option<u64>,
    delay_ms: Option<u64>,
    record: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let delay = Duration::from_millis(delay_ms.unwrap_or(cfg.delay_ms));
    let record = record.or(cfg.record);
    let mut policy = create_policy(&cfg.policy, seed);

    execute_play_command(
        seed,
        delay,
        record.as_deref(),
        policy.as_mut(),
        out,
        err,
        stdin,
    )
}

/// Core play loop with the decision provider injected (module-private
/// helper, also the seam the scripted-provider tests drive).
fn execute_play_command(
    seed: u64,
    delay: Duration,
    record: Option<&str>,
    policy: &mut dyn Policy,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    ui::display_warning(
        err,
        "Automated seats act via a placeholder provider that picks uniformly at random.",
    )?;
    writeln!(out, "play: seed={}", seed)?;

    let mut eng = Engine::new(Some(seed));
    writeln!(out, "Seats:")?;
    for seat in eng.game().seats() {
        writeln!(out, "  {}", format_seat_line(seat))?;
    }

    let outcome = loop {
        match eng.advance() {
            Turn::Over(status) => break status,
            Turn::Skipped { seat } => {
                let position = eng.game().seats()[seat].position();
                writeln!(out, "{} has folded, turn skipped.", position)?;
            }
            Turn::ToAct { seat } => {
                let position = eng.game().seats()[seat].position();
                if eng.game().seats()[seat].is_human() {
                    writeln!(out, "Your position is {}.", position)?;
                    let Some(action) = prompt_action(out, err, stdin)? else {
                        writeln!(out, "Hand abandoned.")?;
                        return Ok(());
                    };
                    eng.apply_action(action)
                        .map_err(|e| CliError::Engine(e.to_string()))?;
                    writeln!(out, "You chose to {}.", action)?;
                } else {
                    writeln!(out, "{} is deciding...", position)?;
                    out.flush()?;
                    thread::sleep(delay);
                    let action = policy.choose_action(eng.game(), seat);
                    eng.apply_action(action)
                        .map_err(|e| CliError::Engine(e.to_string()))?;
                    writeln!(out, "{} decided to {}.", position, action)?;
                }
            }
        }
        writeln!(out, "History: {}", format_history(eng.game().moves()))?;
    };

    writeln!(out, "Hand over: {}.", outcome.describe())?;

    if let Some(path) = record {
        let mut logger = HandLogger::create(path)?;
        let id = logger.next_id();
        logger.write(&HandRecord::from_round(id, eng.game(), outcome))?;
        writeln!(out, "Recorded hand to {}", path)?;
    }
    Ok(())
}

/// Block on the prompt until a canonical action is read. Invalid input is
/// absorbed here with a re-prompt; the engine never sees it. `None` means
/// the user quit or stdin closed.
fn prompt_action(
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<Action>, CliError> {
    write!(out, "Choose an action (Raise, Call, Fold, Allin): ")?;
    out.flush()?;
    loop {
        match read_stdin_line(stdin) {
            None => return Ok(None),
            Some(line) => match parse_action(&line) {
                ParseResult::Action(action) => return Ok(Some(action)),
                ParseResult::Quit => return Ok(None),
                ParseResult::Invalid(msg) => {
                    ui::write_error(err, &msg)?;
                    write!(out, "Choose an action (Raise, Call, Fold, Allin): ")?;
                    out.flush()?;
                }
            },
        }
    }
}
