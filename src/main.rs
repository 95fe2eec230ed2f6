//! tabtree - Shell completion registrar
//!
//! Discovers tree-based completer programs in a directory and registers
//! them with fish or bash, so each tool gets dynamic tab-completion driven
//! by its own completion tree.
//!
//! # Usage
//!
//! ```bash
//! # Register every completer under ~/completers with fish
//! tabtree register fish ~/completers
//! ```

use tracing::Level;

mod cli;
mod config;
mod discovery;
mod driver;
mod error;
mod hint;
mod install;
mod shell;
mod tree;

use cli::CliInterface;
use error::{Result, TabtreeError};

/// Application entry point
fn main() {
    if let Err(e) = run() {
        match e {
            // Usage errors carry clap's own message and usage block.
            TabtreeError::Usage(message) => eprintln!("{message}"),
            other => eprintln!("Error: {other}"),
        }
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Dispatch the selected subcommand
fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    cli.dispatch()
}

/// Initialize logging system based on verbosity level
///
/// # Arguments
/// * `cli` - CLI interface with verbosity settings
fn initialize_logging(cli: &CliInterface) {
    let level = if cli.args().very_verbose {
        Level::TRACE
    } else if cli.args().verbose {
        Level::DEBUG
    } else {
        cli.config().logging.level.to_tracing_level()
    };

    // Build subscriber with level filter
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    // Configure timestamps
    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
