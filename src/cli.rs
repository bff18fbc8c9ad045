//! Command-line interface for strictly_hangman.

use clap::{Parser, Subcommand};

/// Strictly Hangman - multiplayer hangman with topic word lists
#[derive(Parser, Debug)]
#[command(name = "strictly_hangman")]
#[command(about = "Multiplayer hangman with topic word lists and definitions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "hangman.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match in the terminal
    Play(PlayArgs),

    /// List the words available for a topic
    Words {
        /// Topic to look up
        topic: String,
    },

    /// Print the dictionary definition of a word
    Define {
        /// Word to define
        word: String,
    },
}

/// Options for a match; anything omitted is asked interactively.
#[derive(clap::Args, Debug, Default)]
pub struct PlayArgs {
    /// Number of rounds
    #[arg(short, long)]
    pub rounds: Option<u32>,

    /// Number of players
    #[arg(short, long)]
    pub players: Option<u32>,

    /// Topic for the word list
    #[arg(short, long)]
    pub topic: Option<String>,

    /// Seed for word selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Let the computer guess by letter frequency
    #[arg(long)]
    pub autoplay: bool,

    /// Keep previous boards on screen
    #[arg(long)]
    pub no_clear: bool,
}
