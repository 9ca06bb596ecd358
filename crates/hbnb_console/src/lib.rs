//! Command parsing, dispatch, and the interactive console for hbnb.
//!
//! This crate provides:
//! - [`Command`] - Plain and dotted command parsing with arity checks
//! - [`Dispatcher`] - Runs commands against an [`ObjectStore`](hbnb_storage::ObjectStore)
//!   and renders results or `** message **` failures
//! - [`Repl`] - The read-dispatch-print loop over a swappable [`LineEditor`]
//! - Logging setup for the `hbnb` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod config;
pub mod dispatcher;
pub mod dotted;
pub mod editor;
pub mod help;
pub mod highlight;
pub mod literal;
pub mod logging;
pub mod repl;
pub mod tokenizer;

pub use command::{COMMAND_NAMES, Command};
pub use config::{ConsoleConfig, DEFAULT_PROMPT};
pub use dispatcher::{Dispatcher, Response, failure_message};
pub use editor::{LineEditor, ReadResult, ReaderEditor, RustylineEditor};
pub use literal::Arg;
pub use repl::Repl;
pub use tokenizer::ShellTokenizer;
