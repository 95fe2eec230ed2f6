//! Shell completion generation for the tabtree binary itself
//!
//! The registration utility gets its own static completion script through
//! clap_complete. This covers tabtree's flags and subcommands only; the
//! completer programs it registers bring their own dynamic trees.

use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io;

use crate::cli::CliArgs;
use crate::error::{ConfigError, Result, TabtreeError};

/// Generate shell completion script
///
/// # Arguments
/// * `shell_name` - Shell type (bash, fish)
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn generate_completion(shell_name: &str) -> Result<()> {
    let shell = parse_shell(shell_name)?;

    let mut cmd = CliArgs::command();
    generate(shell, &mut cmd, "tabtree", &mut io::stdout());
    Ok(())
}

/// Parse shell name string to Shell enum
fn parse_shell(shell_name: &str) -> Result<Shell> {
    match shell_name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "fish" => Ok(Shell::Fish),
        _ => Err(TabtreeError::Config(ConfigError::UnsupportedShell(
            shell_name.to_string(),
        ))),
    }
}
