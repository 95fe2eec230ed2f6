//! Discovery of completer programs.
//!
//! The registration utility scans a directory of completer binaries and
//! asks each one for its command name by running it in announce mode (the
//! sentinel variable set, nothing else). A candidate that fails to run is
//! logged with its captured output and skipped; the rest of the batch is
//! unaffected.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use tracing::{debug, warn};

use crate::driver::NAME_ENV;
use crate::error::{DiscoveryError, Result};

/// A discovered completer: the command name it announced and where it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    /// Command name the completer announced.
    pub name: String,

    /// Path to the completer program.
    pub path: PathBuf,
}

/// Scan `directory` for completer programs.
///
/// Every regular file is invoked in announce mode. Failures are non-fatal
/// to the batch: they are logged and the candidate is skipped. Entries are
/// returned in path order.
///
/// # Errors
/// * Discovery error when `directory` is not a directory
pub fn scan_directory(directory: &Path) -> Result<Vec<CommandEntry>> {
    if !directory.is_dir() {
        return Err(DiscoveryError::NotADirectory(directory.display().to_string()).into());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(directory)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    paths.sort();

    let mut commands = Vec::new();
    for path in paths {
        if !path.is_file() {
            continue;
        }
        match announce(&path) {
            Ok(name) => {
                debug!(script = %path.display(), name = %name, "discovered completer");
                commands.push(CommandEntry { name, path });
            }
            Err(e) => {
                warn!(script = %path.display(), "skipping completer: {e}");
            }
        }
    }

    Ok(commands)
}

/// Run one candidate in announce mode and return the name it reports.
///
/// The name is taken verbatim from stdout; announce mode prints without a
/// trailing newline, so a name containing one is an author bug surfaced
/// as-is.
pub fn announce(script: &Path) -> Result<String> {
    let output = process::Command::new(script)
        .env(NAME_ENV, "true")
        .output()
        .map_err(|e| DiscoveryError::SpawnFailed {
            script: script.display().to_string(),
            message: e.to_string(),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(DiscoveryError::ScriptFailed {
            script: script.display().to_string(),
            status: output.status.code(),
            stdout,
            stderr,
        }
        .into());
    }

    Ok(stdout)
}
