use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "A single-screen terminal to-do list", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Fade-out duration in milliseconds for removed tasks
    #[arg(long, value_name = "MS", env = "TODO_FADE_MS")]
    pub fade_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a script of actions to an empty list and print the result as JSON
    ///
    /// One action per line: `add <text>`, `toggle <n>`, `remove <n>`,
    /// `delete <n>`, `view active|archived`. `<n>` is a 1-based position in
    /// the active list (the archived list for `delete`).
    Replay {
        /// Script file to read (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
