//! Shell-style tokenization of plain command lines.
//!
//! Whitespace separates tokens. Single quotes group text literally; double
//! quotes group text and honor `\"` and `\\`; outside quotes a backslash
//! escapes the next character. Quoted and unquoted pieces that touch are
//! joined into one token, so `name="New York"` is a single token.

use hbnb_foundation::{Error, Malformed, Result};

/// Splits command lines into tokens.
pub struct ShellTokenizer;

impl ShellTokenizer {
    /// Tokenizes a raw input line.
    ///
    /// # Errors
    ///
    /// Returns `invalid syntax` for an unterminated quote or a trailing
    /// backslash.
    pub fn tokenize(input: &str) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut in_token = false;
        let mut chars = input.chars();

        while let Some(ch) = chars.next() {
            match ch {
                c if c.is_whitespace() => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                '\'' => {
                    in_token = true;
                    loop {
                        match chars.next() {
                            Some('\'') => break,
                            Some(c) => current.push(c),
                            None => return Err(invalid_syntax()),
                        }
                    }
                }
                '"' => {
                    in_token = true;
                    loop {
                        match chars.next() {
                            Some('"') => break,
                            Some('\\') => match chars.next() {
                                Some(c @ ('"' | '\\')) => current.push(c),
                                Some(c) => {
                                    current.push('\\');
                                    current.push(c);
                                }
                                None => return Err(invalid_syntax()),
                            },
                            Some(c) => current.push(c),
                            None => return Err(invalid_syntax()),
                        }
                    }
                }
                '\\' => {
                    in_token = true;
                    current.push(chars.next().ok_or_else(invalid_syntax)?);
                }
                c => {
                    in_token = true;
                    current.push(c);
                }
            }
        }

        if in_token {
            tokens.push(current);
        }
        Ok(tokens)
    }
}

fn invalid_syntax() -> Error {
    Error::malformed(Malformed::InvalidSyntax)
}
