//! Command dispatch: parse a line, run it against the store, render the result.
//!
//! This is the only place typed errors turn into user-facing text. Whatever
//! goes wrong, the caller gets a [`Response`], never an error.

use std::fmt;

use hbnb_foundation::{Error, ErrorKind, Malformed, Result, Type, Value};
use hbnb_storage::{Kind, ObjectStore, Registry};

use crate::command::Command;
use crate::help;
use crate::literal;

/// The outcome of one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// Success with nothing to print.
    Silent,
    /// Success with text to print.
    Output(String),
    /// A failure message, printed as `** <message> **`.
    Failure(String),
    /// The session should end.
    Quit,
}

impl Response {
    /// Renders an error as a failure response.
    #[must_use]
    pub fn failure(error: &Error) -> Self {
        Self::Failure(failure_message(error))
    }

    /// Returns true if the session should end.
    #[must_use]
    pub const fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns true if the response carries a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Silent | Self::Quit => Ok(()),
            Self::Output(text) => f.write_str(text),
            Self::Failure(message) => write!(f, "** {message} **"),
        }
    }
}

/// Maps an error onto the message users see.
#[must_use]
pub fn failure_message(error: &Error) -> String {
    match &error.kind {
        ErrorKind::UnknownKind(_) => "class doesn't exist".to_string(),
        ErrorKind::InstanceNotFound { .. } => "no instance found".to_string(),
        ErrorKind::UnknownField { .. } => "attribute doesn't exist".to_string(),
        ErrorKind::InvalidValue { field, .. } => format!("invalid value for {field}"),
        ErrorKind::Persistence(reason) | ErrorKind::Serialization(reason) => {
            format!("unable to save: {reason}")
        }
        ErrorKind::MalformedInput(reason) => reason.to_string(),
        ErrorKind::Internal(message) => message.clone(),
    }
}

/// Runs commands against a borrowed store.
pub struct Dispatcher<'s> {
    store: &'s mut ObjectStore,
}

impl<'s> Dispatcher<'s> {
    /// Creates a dispatcher over `store`.
    pub fn new(store: &'s mut ObjectStore) -> Self {
        Self { store }
    }

    /// Parses and executes one input line.
    pub fn dispatch(&mut self, line: &str) -> Response {
        match Command::parse(line).and_then(|command| self.execute(command)) {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("command failed: {e}");
                Response::failure(&e)
            }
        }
    }

    /// Executes a parsed command.
    ///
    /// # Errors
    ///
    /// Returns whatever the store raises, plus `NoHelp` for an undocumented
    /// help topic.
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        let response = match command {
            Command::Create { kind, fields } => {
                let entity = self.store.create(&kind, fields)?;
                Response::Output(entity.id().to_string())
            }
            Command::Show { kind, id } => {
                Response::Output(self.store.find_by_id(&kind, &id)?.to_string())
            }
            Command::Destroy { kind, id } => {
                self.store.delete_by_id(&kind, &id)?;
                Response::Silent
            }
            Command::All { kind } => {
                let entities = self.store.find_all(kind.as_deref())?;
                let forms: Vec<Value> = entities
                    .iter()
                    .map(|entity| Value::from(entity.to_string()))
                    .collect();
                Response::Output(Value::from(forms).repr())
            }
            Command::Count { kind } => Response::Output(self.store.count(&kind)?.to_string()),
            Command::Update { kind, id, changes } => {
                let changes = changes
                    .into_iter()
                    .map(|(field, value)| {
                        let value = read_list_text(&kind, &field, value);
                        (field, value)
                    })
                    .collect();
                self.store.update_fields(&kind, &id, changes)?;
                Response::Silent
            }
            Command::Models => Response::Output(Registry::names().collect::<Vec<_>>().join(" ")),
            Command::Help(None) => Response::Output(help::overview()),
            Command::Help(Some(topic)) => match help::describe(&topic) {
                Some(text) => Response::Output(text.to_string()),
                None => return Err(Error::malformed(Malformed::NoHelp(topic))),
            },
            Command::Quit => Response::Quit,
            Command::Empty => Response::Silent,
        };
        Ok(response)
    }
}

/// Reads text written as a list literal, such as `"['a', 'b']"`, as a list
/// when the field is declared as a list. Other text is left for the store to
/// coerce, so a string field can hold `[draft]`.
fn read_list_text(kind: &str, field: &str, value: Value) -> Value {
    let declared_list = Kind::from_name(kind)
        .and_then(|kind| kind.schema().field(field))
        .is_some_and(|schema| matches!(schema.ty, Type::List(_)));
    match value {
        Value::String(text) if declared_list => match literal::parse_value(&text) {
            Ok(list @ Value::List(_)) => list,
            _ => Value::String(text),
        },
        other => other,
    }
}
