use std::{fmt, io};

/// Crate-wide `Result` type using [`TabtreeError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, TabtreeError>;

/// Top-level error type for tabtree operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum TabtreeError {
    /// Configuration errors (bad config file, unsupported shell kind).
    Config(ConfigError),

    /// Completion protocol errors between shell and completer.
    Protocol(ProtocolError),

    /// Errors while discovering completer programs.
    Discovery(DiscoveryError),

    /// Errors while installing registration files.
    Install(InstallError),

    /// I/O errors.
    Io(io::Error),

    /// Command-line usage errors; printed verbatim with exit code 1.
    Usage(String),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Configuration-specific errors.
///
/// These signal an author or collaborator bug, not user input; they are
/// never retried.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Shell kind outside the supported set.
    UnsupportedShell(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },
}

/// Completion protocol errors.
///
/// A protocol error means the registration script and the completer
/// disagree; the registration is stale or mismatched.
#[derive(Debug)]
pub enum ProtocolError {
    /// A required environment variable was absent in complete mode.
    MissingVariable(&'static str),

    /// The raw command line did not start with `"<name> "`.
    PrefixMismatch { command: String, line: String },
}

/// Discovery-specific errors.
#[derive(Debug)]
pub enum DiscoveryError {
    /// The scan target is not a directory.
    NotADirectory(String),

    /// A candidate completer could not be spawned.
    SpawnFailed { script: String, message: String },

    /// A candidate completer ran but exited unsuccessfully.
    ScriptFailed {
        script: String,
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

/// Installation-specific errors.
#[derive(Debug)]
pub enum InstallError {
    /// Home directory could not be determined.
    HomeDirUnavailable,

    /// User configuration directory could not be determined.
    ConfigDirUnavailable,
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for TabtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabtreeError::Config(e) => write!(f, "Configuration error: {e}"),
            TabtreeError::Protocol(e) => write!(f, "Protocol error: {e}"),
            TabtreeError::Discovery(e) => write!(f, "Discovery error: {e}"),
            TabtreeError::Install(e) => write!(f, "Install error: {e}"),
            TabtreeError::Io(e) => write!(f, "I/O error: {e}"),
            TabtreeError::Usage(msg) => write!(f, "{msg}"),
            TabtreeError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::UnsupportedShell(name) => {
                write!(f, "Unsupported shell: {name}. Supported shells: fish, bash")
            }
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
        }
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::MissingVariable(name) => {
                write!(f, "Missing environment variable: {name}")
            }
            ProtocolError::PrefixMismatch { command, line } => {
                write!(
                    f,
                    "Command line '{line}' does not start with '{command} '; the registration script may be stale"
                )
            }
        }
    }
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryError::NotADirectory(path) => write!(f, "Not a directory: {path}"),
            DiscoveryError::SpawnFailed { script, message } => {
                write!(f, "Failed to run completer '{script}': {message}")
            }
            DiscoveryError::ScriptFailed {
                script,
                status,
                stdout,
                stderr,
            } => {
                match status {
                    Some(code) => write!(f, "Completer '{script}' exited with status {code}")?,
                    None => write!(f, "Completer '{script}' was terminated by a signal")?,
                }
                if !stdout.is_empty() {
                    write!(f, "\nstdout:\n{stdout}")?;
                }
                if !stderr.is_empty() {
                    write!(f, "\nstderr:\n{stderr}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for InstallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallError::HomeDirUnavailable => {
                write!(f, "Could not determine home directory")
            }
            InstallError::ConfigDirUnavailable => {
                write!(f, "Could not determine user configuration directory")
            }
        }
    }
}

impl std::error::Error for TabtreeError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for ProtocolError {}
impl std::error::Error for DiscoveryError {}
impl std::error::Error for InstallError {}

/* ========================= Conversions to TabtreeError ========================= */

impl From<io::Error> for TabtreeError {
    fn from(err: io::Error) -> Self {
        TabtreeError::Io(err)
    }
}

impl From<ConfigError> for TabtreeError {
    fn from(err: ConfigError) -> Self {
        TabtreeError::Config(err)
    }
}

impl From<ProtocolError> for TabtreeError {
    fn from(err: ProtocolError) -> Self {
        TabtreeError::Protocol(err)
    }
}

impl From<DiscoveryError> for TabtreeError {
    fn from(err: DiscoveryError) -> Self {
        TabtreeError::Discovery(err)
    }
}

impl From<InstallError> for TabtreeError {
    fn from(err: InstallError) -> Self {
        TabtreeError::Install(err)
    }
}

impl From<String> for TabtreeError {
    fn from(msg: String) -> Self {
        TabtreeError::Generic(msg)
    }
}

impl From<&str> for TabtreeError {
    fn from(msg: &str) -> Self {
        TabtreeError::Generic(msg.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unsupported_shell() {
        let err = TabtreeError::Config(ConfigError::UnsupportedShell("zsh".to_string()));
        let msg = err.to_string();
        assert!(msg.contains("zsh"));
        assert!(msg.contains("fish, bash"));
    }

    #[test]
    fn test_display_prefix_mismatch() {
        let err = ProtocolError::PrefixMismatch {
            command: "gitx".to_string(),
            line: "other fetch".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'gitx '"));
        assert!(msg.contains("other fetch"));
        assert!(msg.contains("stale"));
    }

    #[test]
    fn test_display_script_failed_includes_captured_output() {
        let err = DiscoveryError::ScriptFailed {
            script: "/opt/completers/broken".to_string(),
            status: Some(3),
            stdout: "partial".to_string(),
            stderr: "boom".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("status 3"));
        assert!(msg.contains("stdout:\npartial"));
        assert!(msg.contains("stderr:\nboom"));
    }

    #[test]
    fn test_display_script_failed_omits_empty_streams() {
        let err = DiscoveryError::ScriptFailed {
            script: "x".to_string(),
            status: Some(1),
            stdout: String::new(),
            stderr: String::new(),
        };
        let msg = err.to_string();
        assert!(!msg.contains("stdout"));
        assert!(!msg.contains("stderr"));
    }

    #[test]
    fn test_usage_displays_verbatim() {
        let err = TabtreeError::Usage("usage: tabtree register <SHELL> <DIRECTORY>".to_string());
        assert_eq!(err.to_string(), "usage: tabtree register <SHELL> <DIRECTORY>");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err: TabtreeError = io_err.into();
        assert!(matches!(err, TabtreeError::Io(_)));
    }
}
