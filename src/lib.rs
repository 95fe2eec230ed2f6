//! Tree-Based Shell Tab-Completion
//!
//! This library lets a command-line tool author declare a tree of commands,
//! sub-commands, and positional arguments with hint-producing callbacks, and
//! answers the shell's completion requests against that tree. The crate's
//! binary is the registration utility that discovers completer programs and
//! wires them into fish or bash.
//!
//! # Modules
//!
//! - `cli`: Command-line interface of the registration utility
//! - `config`: Configuration management
//! - `discovery`: Announce-mode discovery of completer programs
//! - `driver`: Entry-point driver for completer binaries
//! - `error`: Error types and handling
//! - `hint`: Completion hint type and prefix filtering
//! - `install`: Registration-file installation
//! - `shell`: Shell-specific rendering and registration snippets
//! - `tree`: Command tree and the matching algorithm
//!
//! # Example
//!
//! A completer binary declares its tree and hands control to the driver:
//!
//! ```no_run
//! use tabtree::{ArgumentSpec, Command, Hint};
//!
//! fn main() -> tabtree::Result<()> {
//!     let command = Command::new("notekit")
//!         .subcommand(Command::new("send"))
//!         .subcommand(
//!             Command::new("notes").arg(ArgumentSpec::argument("note", || {
//!                 vec![Hint::from("groceries"), Hint::described("ideas", "scratchpad")]
//!             })),
//!         );
//!
//!     command.run()
//! }
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod driver;
pub mod error;
pub mod hint;
pub mod install;
pub mod shell;
pub mod tree;

// Re-export commonly used types
pub use driver::Invocation;
pub use error::{Result, TabtreeError};
pub use hint::{Hint, filter_hints};
pub use install::Installer;
pub use shell::ShellKind;
pub use tree::{ArgumentSpec, Command, HintSource, SpecKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
