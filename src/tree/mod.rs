//! Command tree and the completion matching algorithm.
//!
//! A completer author declares a tree of [`Command`] nodes, each holding an
//! ordered list of positional [`ArgumentSpec`]s and an ordered list of child
//! commands. At completion time the tree is walked against the tokenized
//! remainder of the command line:
//!
//! - With more than one token left, the first child whose name equals the
//!   leading token is descended into and the remainder is matched there.
//! - Otherwise the node offers its child names filtered by the current
//!   token, followed by the hints of the argument slot the current position
//!   binds to, filtered by the same token. Sub-commands always come first.
//!
//! The tree is built once at program startup and never mutated afterwards;
//! its lifetime spans the single completion invocation.

use std::fmt;

use crate::hint::{Hint, filter_hints};

/// Source of completion hints for one positional slot.
///
/// Implemented for any `Fn() -> Vec<Hint>` closure, so authors can pass a
/// closure or a plain function. Sources are invoked lazily at match time,
/// never precomputed; a source may perform blocking I/O (listing files,
/// querying a daemon) and simply delays the shell's response while it runs.
pub trait HintSource {
    /// Produce the full candidate set for this slot.
    fn hints(&self) -> Vec<Hint>;
}

impl<F> HintSource for F
where
    F: Fn() -> Vec<Hint>,
{
    fn hints(&self) -> Vec<Hint> {
        self()
    }
}

/// Kind of a positional slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecKind {
    /// Free-form positional value.
    Argument,

    /// `-`-prefixed option. Recorded in the tree for documentation, but the
    /// tokenizer strips `-`-prefixed input before matching, so option specs
    /// are never matched against typed option tokens.
    Option,
}

/// One positional slot: a name paired with a hint source.
///
/// Slots bind by index: the Nth token remaining after the command path has
/// been consumed binds to the Nth spec. There is no named-argument binding.
pub struct ArgumentSpec {
    name: String,
    kind: SpecKind,
    source: Box<dyn HintSource>,
}

impl ArgumentSpec {
    /// Create a positional argument slot.
    pub fn argument(name: impl Into<String>, source: impl HintSource + 'static) -> Self {
        ArgumentSpec {
            name: name.into(),
            kind: SpecKind::Argument,
            source: Box::new(source),
        }
    }

    /// Create an option slot.
    pub fn option(name: impl Into<String>, source: impl HintSource + 'static) -> Self {
        ArgumentSpec {
            name: name.into(),
            kind: SpecKind::Option,
            source: Box::new(source),
        }
    }

    /// Slot name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slot kind.
    pub fn kind(&self) -> SpecKind {
        self.kind
    }

    /// Invoke the hint source.
    pub fn produce_hints(&self) -> Vec<Hint> {
        self.source.hints()
    }
}

impl fmt::Debug for ArgumentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentSpec")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// A command or sub-command node in the completion tree.
///
/// Owns its argument specs and children exclusively. Sibling names need not
/// be unique; traversal picks the first declared match. Well-formed trees
/// should still use unique sibling names, since completion UX depends on it.
#[derive(Debug)]
pub struct Command {
    name: String,
    arguments: Vec<ArgumentSpec>,
    sub_commands: Vec<Command>,
}

impl Command {
    /// Create a command node with no arguments and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Command {
            name: name.into(),
            arguments: Vec::new(),
            sub_commands: Vec::new(),
        }
    }

    /// Append a positional slot. Order of calls defines the binding index.
    pub fn arg(mut self, spec: ArgumentSpec) -> Self {
        self.arguments.push(spec);
        self
    }

    /// Append a child command. Order of calls defines match precedence.
    pub fn subcommand(mut self, child: Command) -> Self {
        self.sub_commands.push(child);
        self
    }

    /// Command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Positional slots, in binding order.
    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }

    /// Child commands, in declaration order.
    pub fn sub_commands(&self) -> &[Command] {
        &self.sub_commands
    }

    /// Walk the tree against `tokens` and collect the valid next tokens.
    ///
    /// `tokens` is the tokenized remainder of the command line, the command
    /// path already stripped. The driver guarantees at least one element
    /// (an empty trailing input yields one empty-string token); an empty
    /// slice yields no hints.
    ///
    /// # Returns
    /// * `Vec<Hint>` - matching sub-command names first, then hints from
    ///   the argument slot the current position binds to
    pub fn complete(&self, tokens: &[String]) -> Vec<Hint> {
        if tokens.is_empty() {
            return Vec::new();
        }

        if tokens.len() > 1 {
            // Exactly one sub-tree is ever descended into; the first
            // declared child with a matching name wins.
            if let Some(child) = self.sub_commands.iter().find(|c| c.name == tokens[0]) {
                return child.complete(&tokens[1..]);
            }
        }

        let command_hints = self
            .sub_commands
            .iter()
            .map(|c| Hint::Token(c.name.clone()))
            .collect();
        let mut hints = filter_hints(command_hints, &tokens[0]);

        let position = tokens.len() - 1;
        if let Some(spec) = self.arguments.get(position) {
            hints.extend(filter_hints(spec.produce_hints(), &tokens[position]));
        }

        hints
    }

    /// Tokenize `line` and complete against it.
    pub fn complete_line(&self, line: &str) -> Vec<Hint> {
        self.complete(&tokenize(line))
    }

    /// Answer a completion request from the process environment.
    ///
    /// Convenience wrapper around [`crate::driver::run`]; a completer
    /// binary's `main` typically ends with this call.
    pub fn run(&self) -> crate::error::Result<()> {
        crate::driver::run(self)
    }
}

/// Split a raw command line into match tokens.
///
/// Splits on single spaces, so consecutive or trailing spaces produce empty
/// tokens ("about to type the next token"). Tokens starting with `-` are
/// dropped entirely before matching. If dropping leaves nothing, a single
/// empty token is returned so `complete`'s precondition holds.
pub fn tokenize(line: &str) -> Vec<String> {
    let tokens: Vec<String> = line
        .split(' ')
        .filter(|token| !token.starts_with('-'))
        .map(str::to_owned)
        .collect();

    if tokens.is_empty() {
        vec![String::new()]
    } else {
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn toks(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn plain(tokens: &[&str]) -> Vec<Hint> {
        tokens.iter().map(|t| Hint::from(*t)).collect()
    }

    fn numbers() -> Vec<Hint> {
        vec![Hint::from("one"), Hint::from("two"), Hint::from("onsite")]
    }

    #[test]
    fn test_argument_completion() {
        let completer = Command::new("ROOT").subcommand(
            Command::new("first").arg(ArgumentSpec::argument("arg1", numbers)),
        );

        assert_eq!(completer.complete_line("first on"), plain(&["one", "onsite"]));
    }

    #[test]
    fn test_command_completion() {
        let completer = Command::new("ROOT")
            .subcommand(Command::new("first").arg(ArgumentSpec::argument("arg1", numbers)))
            .subcommand(Command::new("second").arg(ArgumentSpec::argument("arg1", numbers)))
            .subcommand(Command::new("seventh").arg(ArgumentSpec::argument("arg1", numbers)));

        assert_eq!(completer.complete_line("se"), plain(&["second", "seventh"]));
    }

    fn nested_completer() -> Command {
        Command::new("ROOT")
            .subcommand(
                Command::new("first")
                    .arg(ArgumentSpec::argument("arg1", numbers))
                    .subcommand(Command::new("com1").arg(ArgumentSpec::argument("arg2", || {
                        vec![
                            Hint::described("one", "help"),
                            Hint::from("two"),
                            Hint::from("onsite"),
                        ]
                    }))),
            )
            .subcommand(Command::new("second").arg(ArgumentSpec::argument("arg1", numbers)))
            .subcommand(Command::new("seventh").arg(ArgumentSpec::argument("arg1", numbers)))
    }

    #[test]
    fn test_nested_command_name_match() {
        // Pure command-name match; no argument hints leak in because
        // position 1 exceeds `first`'s own argument count.
        assert_eq!(nested_completer().complete_line("first com1"), plain(&["com1"]));
    }

    #[test]
    fn test_nested_all_argument_hints_on_trailing_space() {
        assert_eq!(
            nested_completer().complete_line("first com1 "),
            vec![
                Hint::described("one", "help"),
                Hint::from("two"),
                Hint::from("onsite"),
            ]
        );
    }

    #[test]
    fn test_nested_argument_hints_filtered() {
        assert_eq!(
            nested_completer().complete_line("first com1 o"),
            vec![Hint::described("one", "help"), Hint::from("onsite")]
        );
    }

    #[test]
    fn test_commands_surface_before_argument_hints() {
        let completer = Command::new("ROOT")
            .subcommand(Command::new("settle"))
            .arg(ArgumentSpec::argument("arg0", || vec![Hint::from("setup")]));

        assert_eq!(
            completer.complete(&toks(&["se"])),
            plain(&["settle", "setup"])
        );
    }

    #[test]
    fn test_descent_consumes_exactly_one_token() {
        let completer = Command::new("ROOT").subcommand(
            Command::new("outer")
                .subcommand(Command::new("inner").arg(ArgumentSpec::argument("arg", numbers))),
        );

        assert_eq!(
            completer.complete(&toks(&["outer", "inner", "tw"])),
            plain(&["two"])
        );
    }

    #[test]
    fn test_first_declared_duplicate_wins() {
        let completer = Command::new("ROOT")
            .subcommand(Command::new("dup").subcommand(Command::new("from-first")))
            .subcommand(Command::new("dup").subcommand(Command::new("from-second")));

        assert_eq!(
            completer.complete(&toks(&["dup", ""])),
            plain(&["from-first"])
        );
    }

    #[test]
    fn test_duplicate_names_not_deduped_in_listing() {
        let completer = Command::new("ROOT")
            .subcommand(Command::new("dup"))
            .subcommand(Command::new("dup"));

        assert_eq!(completer.complete(&toks(&["du"])), plain(&["dup", "dup"]));
    }

    #[test]
    fn test_position_beyond_argument_count_contributes_nothing() {
        let completer = Command::new("ROOT").arg(ArgumentSpec::argument("only", numbers));

        assert!(completer.complete(&toks(&["x", "y"])).is_empty());
    }

    #[test]
    fn test_source_not_invoked_when_position_out_of_range() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let completer = Command::new("ROOT").arg(ArgumentSpec::argument(
            "only",
            move || -> Vec<Hint> {
                counter.set(counter.get() + 1);
                Vec::new()
            },
        ));

        completer.complete(&toks(&["x", "y"]));
        assert_eq!(calls.get(), 0);

        completer.complete(&toks(&["x"]));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_second_position_binds_to_second_spec() {
        let completer = Command::new("ROOT")
            .arg(ArgumentSpec::argument("arg0", || vec![Hint::from("zero")]))
            .arg(ArgumentSpec::argument("arg1", || vec![Hint::from("first")]));

        assert_eq!(completer.complete(&toks(&["zero", "f"])), plain(&["first"]));
    }

    #[test]
    fn test_option_spec_binds_positionally_like_argument() {
        let completer = Command::new("ROOT")
            .arg(ArgumentSpec::option("--mode", || vec![Hint::from("fast")]));

        assert_eq!(completer.complete(&toks(&["fa"])), plain(&["fast"]));
    }

    #[test]
    fn test_empty_token_offers_everything() {
        let completer = Command::new("ROOT")
            .subcommand(Command::new("alpha"))
            .arg(ArgumentSpec::argument("arg0", numbers));

        assert_eq!(
            completer.complete(&toks(&[""])),
            plain(&["alpha", "one", "two", "onsite"])
        );
    }

    #[test]
    fn test_empty_token_slice_yields_nothing() {
        let completer = Command::new("ROOT").subcommand(Command::new("alpha"));
        assert!(completer.complete(&[]).is_empty());
    }

    #[test]
    fn test_tokenize_single_spaces() {
        assert_eq!(tokenize("first com1"), toks(&["first", "com1"]));
        assert_eq!(tokenize("first com1 "), toks(&["first", "com1", ""]));
        assert_eq!(tokenize(""), toks(&[""]));
    }

    #[test]
    fn test_tokenize_keeps_empty_tokens_between_spaces() {
        assert_eq!(tokenize("a  b"), toks(&["a", "", "b"]));
    }

    #[test]
    fn test_tokenize_drops_option_tokens() {
        assert_eq!(tokenize("stage -v path"), toks(&["stage", "path"]));
        assert_eq!(tokenize("stage --force "), toks(&["stage", ""]));
    }

    #[test]
    fn test_tokenize_all_options_falls_back_to_empty_token() {
        assert_eq!(tokenize("-v"), toks(&[""]));
        assert_eq!(tokenize("--force --dry-run"), toks(&[""]));
    }

    #[test]
    fn test_spec_kind_accessors() {
        fn no_hints() -> Vec<Hint> {
            Vec::new()
        }

        let arg = ArgumentSpec::argument("path", no_hints);
        let opt = ArgumentSpec::option("--mode", no_hints);

        assert_eq!(arg.name(), "path");
        assert_eq!(arg.kind(), SpecKind::Argument);
        assert_eq!(opt.kind(), SpecKind::Option);
    }
}
