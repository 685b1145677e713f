//! CLI command definitions.

use clap::{Parser, Subcommand};

/// Mirage - shuffled gallery over a media bucket
#[derive(Parser, Debug)]
#[command(name = "mirage")]
#[command(about = "Shuffled, infinitely scrolling gallery for a media bucket", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the gallery API
    Serve {
        /// Address to listen on, overriding `server.bind`
        #[arg(long)]
        bind: Option<String>,
    },

    /// Walk a running gallery's feed and report what it serves
    CheckMedia {
        /// Base URL of the gallery
        #[arg(long, default_value = "http://localhost:3000")]
        url: String,

        /// Replay a known tour instead of starting a fresh one
        #[arg(long)]
        order: Option<u32>,

        /// Request timeout in seconds
        #[arg(long, default_value = "10")]
        timeout: u64,
    },

    /// Print the tour a seed produces for the given keys
    Shuffle {
        /// Order token to shuffle with
        #[arg(long)]
        seed: u32,

        /// Keys in listing order
        keys: Vec<String>,
    },
}
