//! The console read-dispatch-print loop.

use std::io::{self, StdinLock, Write};

use hbnb_foundation::{Error, ErrorKind, Result};
use hbnb_storage::ObjectStore;

use crate::config::ConsoleConfig;
use crate::dispatcher::{Dispatcher, Response};
use crate::editor::{LineEditor, ReadResult, ReaderEditor, RustylineEditor};

/// The interactive console.
///
/// The console owns the store for the whole session and lends it to a
/// [`Dispatcher`] for each line.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The object store commands operate on.
    store: ObjectStore,

    /// Prompt, banner, and mode settings.
    config: ConsoleConfig,
}

impl Repl<RustylineEditor> {
    /// Creates an interactive console with the rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(store: ObjectStore) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, store))
    }
}

impl Repl<ReaderEditor<StdinLock<'static>>> {
    /// Creates a console that reads commands from standard input without
    /// line editing.
    #[must_use]
    pub fn batch(store: ObjectStore) -> Self {
        Self::with_editor(ReaderEditor::stdin(), store).with_config(ConsoleConfig::batch())
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a console with the given editor and default settings.
    pub fn with_editor(editor: E, store: ObjectStore) -> Self {
        Self {
            editor,
            store,
            config: ConsoleConfig::default(),
        }
    }

    /// Replaces the console settings.
    #[must_use]
    pub fn with_config(mut self, config: ConsoleConfig) -> Self {
        self.config = config;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.config.banner = false;
        self
    }

    /// Returns the console settings.
    #[must_use]
    pub const fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Returns a reference to the store.
    #[must_use]
    pub const fn store(&self) -> &ObjectStore {
        &self.store
    }

    /// Returns a mutable reference to the store.
    pub fn store_mut(&mut self) -> &mut ObjectStore {
        &mut self.store
    }

    /// Consumes the console, returning its store.
    #[must_use]
    pub fn into_store(self) -> ObjectStore {
        self.store
    }

    /// Dispatches one line against the store.
    pub fn handle_line(&mut self, line: &str) -> Response {
        Dispatcher::new(&mut self.store).dispatch(line)
    }

    /// Runs the loop, printing to stdout, until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    /// Runs the loop, printing to `out`, until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run_with_output<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.config.banner {
            print_banner(out)?;
        }

        while self.read_eval_print(out)? {}

        tracing::debug!("console session ended");
        Ok(())
    }

    /// Executes one read-dispatch-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print<W: Write>(&mut self, out: &mut W) -> Result<bool> {
        let line = match self.editor.read_line(&self.config.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                if !self.config.batch {
                    writeln!(out).map_err(output_error)?;
                }
                return Ok(true);
            }
            ReadResult::Eof => {
                if !self.config.batch {
                    writeln!(out).map_err(output_error)?;
                }
                return Ok(false);
            }
        };

        if line.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&line);

        let response = self.handle_line(&line);
        match response {
            Response::Quit => return Ok(false),
            Response::Silent => {}
            Response::Output(_) | Response::Failure(_) => {
                writeln!(out, "{response}").map_err(output_error)?;
            }
        }
        out.flush().map_err(output_error)?;
        Ok(true)
    }
}

fn print_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        "hbnb console v{}\nType help to list commands, quit or Ctrl+D to exit.\n",
        env!("CARGO_PKG_VERSION")
    )
    .and_then(|()| out.flush())
    .map_err(output_error)
}

fn output_error(e: io::Error) -> Error {
    Error::new(ErrorKind::Internal(format!("failed to write output: {e}")))
}
