//! Syntax highlighting for console input.

use std::borrow::Cow;

use hbnb_storage::Registry;

use crate::command::COMMAND_NAMES;

const RESET: &str = "\x1b[0m";
const COMMAND: &str = "\x1b[1;32m";
const KIND: &str = "\x1b[36m";
const STRING: &str = "\x1b[33m";
const NUMBER: &str = "\x1b[35m";
const DELIMITER: &str = "\x1b[1m";

/// Highlighter for console commands.
///
/// Command names are green, kind names cyan, quoted strings yellow, and
/// numbers magenta.
pub struct CommandHighlighter;

impl CommandHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let mut result = String::with_capacity(line.len() * 2);
        let mut chars = line.chars().peekable();
        let mut first_word = true;

        while let Some(c) = chars.next() {
            match c {
                quote @ ('"' | '\'') => {
                    result.push_str(STRING);
                    result.push(quote);
                    while let Some(next) = chars.next() {
                        result.push(next);
                        if next == '\\' {
                            if let Some(escaped) = chars.next() {
                                result.push(escaped);
                            }
                        } else if next == quote {
                            break;
                        }
                    }
                    result.push_str(RESET);
                    first_word = false;
                }

                '(' | ')' | '[' | ']' | '{' | '}' => {
                    result.push_str(DELIMITER);
                    result.push(c);
                    result.push_str(RESET);
                }

                c if c.is_ascii_digit()
                    || (c == '-' && chars.peek().is_some_and(char::is_ascii_digit)) =>
                {
                    let mut word = String::from(c);
                    while let Some(&next) = chars.peek() {
                        if next.is_alphanumeric() || matches!(next, '.' | '-' | '_') {
                            word.push(next);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    if word.parse::<f64>().is_ok() {
                        push_colored(&mut result, NUMBER, &word);
                    } else {
                        result.push_str(&word);
                    }
                    first_word = false;
                }

                c if c.is_alphabetic() || c == '_' => {
                    let mut word = String::from(c);
                    while let Some(&next) = chars.peek() {
                        if next.is_alphanumeric() || next == '_' {
                            word.push(next);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    let color = if first_word && COMMAND_NAMES.contains(&word.as_str()) {
                        COMMAND
                    } else if Registry::is_registered(&word) {
                        KIND
                    } else {
                        ""
                    };
                    push_colored(&mut result, color, &word);
                    first_word = false;
                }

                _ => result.push(c),
            }
        }

        Cow::Owned(result)
    }
}

impl Default for CommandHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_colored(out: &mut String, color: &str, text: &str) {
    if color.is_empty() {
        out.push_str(text);
    } else {
        out.push_str(color);
        out.push_str(text);
        out.push_str(RESET);
    }
}
