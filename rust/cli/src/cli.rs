//! Clap argument definitions for the sixmax binary.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "sixmax",
    version,
    about = "Six-seat single-hand poker table simulator"
)]
pub struct SixmaxCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play one hand at the six-seat table
    Play {
        /// RNG seed for a reproducible table and automation
        #[arg(long)]
        seed: Option<u64>,
        /// Pause before each automated action, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Append a JSONL record of the finished hand to this file
        #[arg(long)]
        record: Option<String>,
    },
    /// Print the seat assignment and deck enumeration for a seed
    Deal {
        /// RNG seed for a reproducible table
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the effective configuration and where each value came from
    Cfg,
}
