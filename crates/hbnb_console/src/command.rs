//! Parsed console commands.
//!
//! A line is either a plain command (`show State 1234`), a dotted call
//! (`State.show("1234")`), or nothing at all. Both spellings parse into the
//! same [`Command`], so they behave identically once dispatched.

use hbnb_foundation::{Error, Malformed, Result, Value};

use crate::dotted;
use crate::tokenizer::ShellTokenizer;

/// Every plain command name, in the order `help` lists them.
pub const COMMAND_NAMES: [&str; 10] = [
    "EOF", "all", "count", "create", "destroy", "help", "models", "quit", "show", "update",
];

/// A fully parsed command, ready to execute.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Construct and save a new entity, printing its id.
    Create {
        /// Kind name.
        kind: String,
        /// Initial field values.
        fields: Vec<(String, Value)>,
    },
    /// Print one entity's string form.
    Show {
        /// Kind name.
        kind: String,
        /// Entity id.
        id: String,
    },
    /// Remove one entity.
    Destroy {
        /// Kind name.
        kind: String,
        /// Entity id.
        id: String,
    },
    /// Print every entity, or every entity of one kind.
    All {
        /// Optional kind filter.
        kind: Option<String>,
    },
    /// Print the number of entities of a kind.
    Count {
        /// Kind name.
        kind: String,
    },
    /// Set one or more fields on an entity.
    Update {
        /// Kind name.
        kind: String,
        /// Entity id.
        id: String,
        /// Field assignments, applied together.
        changes: Vec<(String, Value)>,
    },
    /// Print the registered kind names.
    Models,
    /// Print the command list, or one command's description.
    Help(Option<String>),
    /// End the session.
    Quit,
    /// A blank line.
    Empty,
}

impl Command {
    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns a `MalformedInput` error describing the first problem found:
    /// a missing argument (checked left to right), too many arguments, bad
    /// quoting, or an unrecognized line. A dotted call on an unregistered
    /// kind returns `UnknownKind`.
    pub fn parse(line: &str) -> Result<Self> {
        let trimmed = line.trim();
        let Some(head) = trimmed.split_whitespace().next() else {
            return Ok(Self::Empty);
        };

        if COMMAND_NAMES.contains(&head) {
            let tokens = ShellTokenizer::tokenize(trimmed)?;
            return Self::from_tokens(&tokens);
        }
        if let Some(command) = dotted::parse(trimmed) {
            return command;
        }
        Err(Error::malformed(Malformed::UnknownCommand(trimmed.to_string())))
    }

    /// Builds a command from tokens whose first element is a command name.
    fn from_tokens(tokens: &[String]) -> Result<Self> {
        let (name, args) = match tokens.split_first() {
            Some((name, args)) => (name.as_str(), args),
            None => return Ok(Self::Empty),
        };
        let mut args = Args::new(name, args);

        let command = match name {
            "create" => Self::Create {
                kind: args.required(Malformed::ClassNameMissing)?,
                fields: Vec::new(),
            },
            "show" => Self::Show {
                kind: args.required(Malformed::ClassNameMissing)?,
                id: args.required(Malformed::InstanceIdMissing)?,
            },
            "destroy" => Self::Destroy {
                kind: args.required(Malformed::ClassNameMissing)?,
                id: args.required(Malformed::InstanceIdMissing)?,
            },
            "all" => Self::All {
                kind: args.optional(),
            },
            "count" => Self::Count {
                kind: args.required(Malformed::ClassNameMissing)?,
            },
            "update" => {
                let kind = args.required(Malformed::ClassNameMissing)?;
                let id = args.required(Malformed::InstanceIdMissing)?;
                let field = args.required(Malformed::AttributeNameMissing)?;
                let value = args.required(Malformed::ValueMissing)?;
                Self::Update {
                    kind,
                    id,
                    changes: vec![(field, Value::from(value))],
                }
            }
            "models" => Self::Models,
            "help" => Self::Help(args.optional()),
            "quit" | "EOF" => Self::Quit,
            other => {
                return Err(Error::malformed(Malformed::UnknownCommand(other.to_string())));
            }
        };

        args.finish()?;
        Ok(command)
    }
}

/// Positional argument cursor that enforces arity.
struct Args<'a> {
    command: &'a str,
    remaining: std::slice::Iter<'a, String>,
}

impl<'a> Args<'a> {
    fn new(command: &'a str, args: &'a [String]) -> Self {
        Self {
            command,
            remaining: args.iter(),
        }
    }

    fn required(&mut self, missing: Malformed) -> Result<String> {
        self.remaining
            .next()
            .cloned()
            .ok_or_else(|| Error::malformed(missing))
    }

    fn optional(&mut self) -> Option<String> {
        self.remaining.next().cloned()
    }

    fn finish(mut self) -> Result<()> {
        match self.remaining.next() {
            Some(_) => Err(Error::malformed(Malformed::TooManyArguments(
                self.command.to_string(),
            ))),
            None => Ok(()),
        }
    }
}
