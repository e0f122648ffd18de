//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "todo-tui",
    version,
    about = "In-memory todo list for the terminal"
)]
pub struct Cli {
    /// Path to a JSONC config file (defaults to the user config directory).
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the default configuration to PATH (or the default location) and exit.
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub init_config: Option<Option<PathBuf>>,
}
