//! Command line interface definition

use clap::{Parser, Subcommand};

/// sitegrab - fetch a fixed list of sites under four concurrency strategies
#[derive(Parser)]
#[command(name = "sitegrab")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fetch a fixed list of sites under four concurrency strategies")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable info-level logging to the terminal
    #[arg(long, global = true)]
    pub verbose: bool,
}

/// Available run modes
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch targets one at a time on the calling thread
    Sync,

    /// Fetch targets on a blocking worker pool
    ParallelSync,

    /// Fetch targets cooperatively, in order, with progress; Ctrl-C cancels
    Async,

    /// Fetch all targets at once
    ParallelAsync {
        /// Join all fetches without progress reporting
        #[arg(long)]
        no_progress: bool,
    },
}
