//! Configuration command handler.
//!
//! Displays the effective configuration with the source each value was
//! resolved from (default, file, or environment).

use std::io::Write;

use crate::config;
use crate::error::CliError;
use crate::ui;

/// Handle the cfg command: print the resolved configuration as JSON.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "delay_ms": {
            "value": config.delay_ms,
            "source": sources.delay_ms,
        },
        "record": {
            "value": config.record,
            "source": sources.record,
        },
        "policy": {
            "value": config.policy,
            "source": sources.policy,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
