//! Shell-specific rendering and registration snippets.
//!
//! [`ShellKind`] is a closed tagged union over the supported shells. Each
//! variant knows two things:
//!
//! - how to serialize a hint list into the text its completion protocol
//!   expects (`render_hints`)
//! - the static registration snippet that wires a completer program into
//!   the shell (`registration_snippet`)
//!
//! Fish is line-oriented: one hint per line, token and description
//! separated by a tab. Bash is space-oriented: tokens separated by single
//! spaces, descriptions discarded.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::driver::{ARGS_ENV, SHELL_ENV};
use crate::error::{ConfigError, TabtreeError};
use crate::hint::Hint;

/// A supported shell.
///
/// The shell set is closed; no open extension point is required. Parsing
/// an unknown shell name is a configuration error and signals an author or
/// collaborator bug, not user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    /// Line-oriented rendering, descriptions shown by the shell.
    Fish,

    /// Space-oriented rendering via `COMPREPLY`.
    Bash,
}

impl ShellKind {
    /// All supported shells.
    pub const ALL: [ShellKind; 2] = [ShellKind::Fish, ShellKind::Bash];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShellKind::Fish => "fish",
            ShellKind::Bash => "bash",
        }
    }

    /// Serialize `hints` into the text this shell's completion protocol
    /// expects.
    ///
    /// Pure function; the caller prints the result verbatim with no
    /// trailing newline added.
    pub fn render_hints(&self, hints: &[Hint]) -> String {
        let mut rendered = String::new();

        match self {
            ShellKind::Fish => {
                for hint in hints {
                    match hint {
                        Hint::Token(token) => rendered.push_str(token),
                        Hint::Described(token, description) => {
                            rendered.push_str(token);
                            rendered.push('\t');
                            rendered.push_str(description);
                        }
                    }
                    rendered.push('\n');
                }
            }
            ShellKind::Bash => {
                for hint in hints {
                    rendered.push_str(hint.token());
                    rendered.push(' ');
                }
            }
        }

        rendered
    }

    /// Build the static registration snippet for `command_name`.
    ///
    /// Once installed, the snippet makes the shell invoke the completer at
    /// `completion_file` with the environment contract on every tab-press
    /// for `command_name`. The text is idempotent: re-registering
    /// overwrites cleanly.
    pub fn registration_snippet(&self, command_name: &str, completion_file: &Path) -> String {
        let file = completion_file.display();

        match self {
            ShellKind::Fish => {
                // Erase any previous registration first.
                format!(
                    "complete -c {command_name} -e\n\
                     complete --command {command_name} --no-files --arguments \
                     \"(env {SHELL_ENV}=fish {ARGS_ENV}=(commandline -cp) {file})\"\n"
                )
            }
            ShellKind::Bash => {
                let function = completion_function_name(command_name);
                format!(
                    "{function}() {{\n    \
                     COMPREPLY=( $( env {ARGS_ENV}=\"$COMP_LINE\" {SHELL_ENV}=bash {file} ) )\n    \
                     return 0\n\
                     }}\n\
                     complete -o default -F {function} {command_name}\n"
                )
            }
        }
    }
}

/// Per-command bash function name, sanitized to identifier characters.
fn completion_function_name(command_name: &str) -> String {
    let sanitized: String = command_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("_complete_{sanitized}")
}

impl fmt::Display for ShellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShellKind {
    type Err = TabtreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fish" => Ok(ShellKind::Fish),
            "bash" => Ok(ShellKind::Bash),
            _ => Err(ConfigError::UnsupportedShell(s.to_string()).into()),
        }
    }
}
