//! Command-line interface for tabtree
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - Subcommand dispatch (register, completion, config)

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::discovery;
use crate::error::{Result, TabtreeError};
use crate::install::Installer;
use crate::shell::ShellKind;

pub mod completion;

/// Shell completion registrar for tree-based completer programs
#[derive(Parser, Debug)]
#[command(
    name = "tabtree",
    version,
    about = "Register tree-based tab-completion programs with your shell",
    long_about = "Scans a directory of completer programs, asks each one for its command name,
and installs a registration snippet per command into the shell's completion
configuration."
)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Very verbose mode (debug logging)
    #[arg(long = "vv", global = true)]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands for tabtree
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover completer programs and register them with a shell
    Register {
        /// Shell to register with (fish, bash)
        #[arg(value_name = "SHELL")]
        shell: String,

        /// Directory containing completer programs
        #[arg(value_name = "DIRECTORY")]
        directory: PathBuf,
    },

    /// Generate a completion script for tabtree itself
    Completion {
        /// Shell type (bash, fish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show or validate configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface
    ///
    /// Help and version requests are printed here and exit with status 0;
    /// any other parse failure becomes a usage error, printed verbatim by
    /// `main` with exit status 1.
    pub fn new() -> Result<Self> {
        let args = match CliArgs::try_parse() {
            Ok(args) => args,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                let _ = e.print();
                std::process::exit(0);
            }
            Err(e) => return Err(TabtreeError::Usage(e.to_string())),
        };
        let config = Self::load_config(&args)?;

        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load_from_file(args.config_file.as_deref())?;

        if let Err(e) = config.validate() {
            eprintln!("Warning: configuration validation failed: {e}");
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        Self::apply_args_to_config(&mut config, args);

        Ok(config)
    }

    /// Apply CLI arguments to configuration
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        use crate::config::LogLevel;

        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Dispatch the selected subcommand
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    pub fn dispatch(&self) -> Result<()> {
        match &self.args.command {
            Commands::Register { shell, directory } => self.handle_register(shell, directory),
            Commands::Completion { shell } => completion::generate_completion(shell),
            Commands::Config { show, validate } => self.handle_config_command(*show, *validate),
        }
    }

    /// Discover completers in `directory` and register them for `shell`
    fn handle_register(&self, shell: &str, directory: &Path) -> Result<()> {
        let shell: ShellKind = shell.parse()?;
        let commands = discovery::scan_directory(directory)?;
        let installer = Installer::from_config(shell, &self.config.install)?;
        installer.install(&commands)?;

        println!("registered");
        Ok(())
    }

    /// Handle config subcommand
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file()?;
        }

        if show {
            self.show_config()?;
        }

        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self) -> Result<()> {
        let path = self.get_config_path();
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("❌ Configuration file does not exist");
            return Ok(());
        }

        match Config::load_from_file(self.args.config_file.as_deref()) {
            Ok(config) => match config.validate() {
                Ok(_) => println!("✅ Configuration is valid"),
                Err(e) => println!("❌ Configuration validation failed: {e}"),
            },
            Err(e) => println!("❌ Failed to load configuration: {e}"),
        }

        Ok(())
    }

    /// Show effective configuration
    fn show_config(&self) -> Result<()> {
        let path = self.get_config_path();
        println!("Configuration file: {}", path.display());
        println!();
        println!("=== Effective Configuration ===");
        println!();

        match self.config.to_toml() {
            Ok(toml_str) => println!("{toml_str}"),
            Err(e) => {
                eprintln!("Error formatting configuration: {e}");
                println!("{:#?}", self.config);
            }
        }

        Ok(())
    }

    /// Get configuration file path (from args or default)
    fn get_config_path(&self) -> PathBuf {
        self.args
            .config_file
            .as_ref()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Config::default_config_path)
    }
}
