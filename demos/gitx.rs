//! Demo completer for a git helper tool.
//!
//! Register it with `tabtree register fish <dir>` where `<dir>` contains
//! the built binary, then tab-complete `gitx <TAB>` in a new shell.

use tabtree::{ArgumentSpec, Command, Hint};

fn branches() -> Vec<Hint> {
    vec![
        Hint::from("main"),
        Hint::from("develop"),
        Hint::described("release/1.4", "next release branch"),
    ]
}

fn main() -> tabtree::Result<()> {
    let command = Command::new("gitx")
        .subcommand(Command::new("fastcommit"))
        .subcommand(Command::new("fetch"))
        .subcommand(Command::new("latest"))
        .subcommand(Command::new("stage"))
        .subcommand(Command::new("unstage"))
        .subcommand(Command::new("delete-branch").arg(ArgumentSpec::argument("branch", branches)))
        .subcommand(Command::new("rename-branch").arg(ArgumentSpec::argument("branch", branches)));

    command.run()
}
