//! Demo completer for a small notes tool.

use tabtree::{ArgumentSpec, Command, Hint};

fn note_names() -> Vec<Hint> {
    vec![
        Hint::described("groceries", "shopping list"),
        Hint::described("ideas", "scratchpad"),
        Hint::from("journal"),
    ]
}

fn main() -> tabtree::Result<()> {
    let command = Command::new("notekit")
        .subcommand(Command::new("hey"))
        .subcommand(Command::new("send"))
        .subcommand(
            Command::new("notes")
                .subcommand(
                    Command::new("show")
                        .arg(ArgumentSpec::argument("note", note_names))
                        // recorded for documentation; typed option input is not matched
                        .arg(ArgumentSpec::option("--sort", || {
                            vec![Hint::from("name"), Hint::from("date")]
                        })),
                )
                .subcommand(Command::new("remove").arg(ArgumentSpec::argument("note", note_names)))
                .subcommand(Command::new("create")),
        );

    command.run()
}
