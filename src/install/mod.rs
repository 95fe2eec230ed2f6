//! Installation of registration files into shell configuration.
//!
//! For each discovered completer, one registration file is written into the
//! shell's completion directory:
//!
//! - fish sources everything in its completions directory natively, so one
//!   `<name>.fish` file per command is enough.
//! - bash has no such convention; files go into a private completions
//!   directory and a loader line in the user's `.bash_completion` sources
//!   them all. The line is appended at most once.
//!
//! All writes are idempotent: re-registering overwrites the same files and
//! never duplicates the loader line.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::InstallConfig;
use crate::discovery::CommandEntry;
use crate::error::{InstallError, Result};
use crate::shell::ShellKind;

/// Writes registration files for one shell.
#[derive(Debug)]
pub struct Installer {
    shell: ShellKind,
    completions_dir: PathBuf,
    loader_file: Option<PathBuf>,
}

impl Installer {
    /// Resolve target paths for `shell` from the configuration, falling
    /// back to the conventional per-user locations.
    pub fn from_config(shell: ShellKind, config: &InstallConfig) -> Result<Self> {
        match shell {
            ShellKind::Fish => {
                let completions_dir = match &config.fish_completions_dir {
                    Some(dir) => dir.clone(),
                    None => dirs::config_dir()
                        .ok_or(InstallError::ConfigDirUnavailable)?
                        .join("fish")
                        .join("completions"),
                };
                Ok(Installer {
                    shell,
                    completions_dir,
                    loader_file: None,
                })
            }
            ShellKind::Bash => {
                let completions_dir = match &config.bash_completions_dir {
                    Some(dir) => dir.clone(),
                    None => dirs::home_dir()
                        .ok_or(InstallError::HomeDirUnavailable)?
                        .join(".bash_completions"),
                };
                let loader_file = match &config.bash_loader_file {
                    Some(file) => file.clone(),
                    None => dirs::home_dir()
                        .ok_or(InstallError::HomeDirUnavailable)?
                        .join(".bash_completion"),
                };
                Ok(Installer {
                    shell,
                    completions_dir,
                    loader_file: Some(loader_file),
                })
            }
        }
    }

    /// Build an installer with explicit target paths.
    pub fn with_dirs(
        shell: ShellKind,
        completions_dir: PathBuf,
        loader_file: Option<PathBuf>,
    ) -> Self {
        Installer {
            shell,
            completions_dir,
            loader_file,
        }
    }

    /// Directory the registration files are written into.
    pub fn completions_dir(&self) -> &Path {
        &self.completions_dir
    }

    /// Write one registration file per entry.
    ///
    /// # Returns
    /// * `Vec<String>` - the installed command names, in input order
    pub fn install(&self, entries: &[CommandEntry]) -> Result<Vec<String>> {
        fs::create_dir_all(&self.completions_dir)?;

        if let Some(loader_file) = &self.loader_file {
            self.ensure_loader_line(loader_file)?;
        }

        let mut installed = Vec::with_capacity(entries.len());
        for entry in entries {
            let file = self
                .completions_dir
                .join(format!("{}.{}", entry.name, self.shell.as_str()));
            let snippet = self.shell.registration_snippet(&entry.name, &entry.path);
            fs::write(&file, snippet)?;
            info!(command = %entry.name, file = %file.display(), "wrote registration");
            installed.push(entry.name.clone());
        }

        Ok(installed)
    }

    /// Append the loader line to `loader_file` unless it is already there.
    fn ensure_loader_line(&self, loader_file: &Path) -> Result<()> {
        let line = loader_line(&self.completions_dir);

        let existing = if loader_file.exists() {
            fs::read_to_string(loader_file)?
        } else {
            String::new()
        };

        if existing.lines().any(|l| l == line) {
            return Ok(());
        }

        let mut updated = existing;
        if !updated.is_empty() && !updated.ends_with('\n') {
            updated.push('\n');
        }
        updated.push_str(&line);
        updated.push('\n');
        fs::write(loader_file, updated)?;

        info!(file = %loader_file.display(), "added completion loader line");
        Ok(())
    }
}

/// Loader line sourcing every registration file in `dir`.
fn loader_line(dir: &Path) -> String {
    format!("for f in {}/*; do source \"$f\"; done", dir.display())
}
