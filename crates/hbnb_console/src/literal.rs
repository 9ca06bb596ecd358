//! Literal parsing for dotted-form argument lists.
//!
//! Arguments are comma separated. Each one is a quoted string (either
//! quote), an integer, a float, `true`/`false`, `null`/`None`, a bare word,
//! or a `[...]` list of those. The last argument may instead be a `{...}`
//! object literal mapping field names to values, written JSON style or
//! Python-dict style.

use std::iter::Peekable;
use std::str::Chars;

use hbnb_foundation::{Error, Malformed, Result, Value};

/// One parsed argument.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    /// An unquoted word, kept as written.
    Word(String),
    /// A quoted string or a list.
    Value(Value),
    /// An object literal of field assignments, in source order.
    Object(Vec<(String, Value)>),
}

impl Arg {
    /// Returns the argument as an id or field name.
    ///
    /// Names are accepted unquoted and keep their source text, so
    /// `State.show(007)` names the id `"007"`.
    #[must_use]
    pub fn as_name(&self) -> Option<String> {
        match self {
            Self::Word(word) => Some(word.clone()),
            Self::Value(Value::String(s)) => Some(s.to_string()),
            _ => None,
        }
    }

    /// Returns the argument as a field value, reading bare words as
    /// booleans, nil, or numbers where they look like one.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Word(word) => Some(word_value(&word)),
            Self::Value(value) => Some(value),
            Self::Object(_) => None,
        }
    }
}

/// Parses a comma separated argument list.
///
/// # Errors
///
/// Returns `invalid syntax` if the text is not a well formed list of
/// literals, or if an object literal appears anywhere but last.
pub fn parse_args(text: &str) -> Result<Vec<Arg>> {
    let mut parser = LiteralParser::new(text);
    let mut args = Vec::new();

    parser.skip_whitespace();
    if parser.at_end() {
        return Ok(args);
    }
    loop {
        let arg = parser.parse_arg()?;
        let is_object = matches!(arg, Arg::Object(_));
        args.push(arg);

        parser.skip_whitespace();
        match parser.next() {
            None => return Ok(args),
            Some(',') if !is_object => parser.skip_whitespace(),
            Some(_) => return Err(invalid_syntax()),
        }
    }
}

/// Parses a single value literal, such as the value token of a plain
/// `update` command written as a list.
///
/// # Errors
///
/// Returns `invalid syntax` if the text is not exactly one value literal.
pub fn parse_value(text: &str) -> Result<Value> {
    let mut parser = LiteralParser::new(text);
    parser.skip_whitespace();
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.at_end() {
        Ok(value)
    } else {
        Err(invalid_syntax())
    }
}

fn invalid_syntax() -> Error {
    Error::malformed(Malformed::InvalidSyntax)
}

/// Characters that end a bare word.
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ':' | '[' | ']' | '{' | '}' | '(' | ')' | '"' | '\'')
}

/// Recursive-descent parser over the argument text.
struct LiteralParser<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> LiteralParser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn next(&mut self) -> Option<char> {
        self.chars.next()
    }

    fn at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.next();
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        self.skip_whitespace();
        match self.next() {
            Some(c) if c == expected => Ok(()),
            _ => Err(invalid_syntax()),
        }
    }

    fn parse_arg(&mut self) -> Result<Arg> {
        match self.peek() {
            Some('{') => self.parse_object().map(Arg::Object),
            Some(c) if !is_delimiter(c) => Ok(Arg::Word(self.parse_word())),
            _ => self.parse_value().map(Arg::Value),
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.next();
                self.parse_quoted(quote).map(Value::from)
            }
            Some('[') => self.parse_list(),
            Some(c) if !is_delimiter(c) => Ok(word_value(&self.parse_word())),
            _ => Err(invalid_syntax()),
        }
    }

    fn parse_quoted(&mut self, quote: char) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.next() {
                Some(c) if c == quote => return Ok(text),
                Some('\\') => match self.next() {
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    Some(c) => text.push(c),
                    None => return Err(invalid_syntax()),
                },
                Some(c) => text.push(c),
                None => return Err(invalid_syntax()),
            }
        }
    }

    fn parse_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if is_delimiter(c) {
                break;
            }
            word.push(c);
            self.next();
        }
        word
    }

    fn parse_list(&mut self) -> Result<Value> {
        self.expect('[')?;
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(']') {
            self.next();
            return Ok(Value::from(items));
        }
        loop {
            self.skip_whitespace();
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.next() {
                Some(',') => {
                    self.skip_whitespace();
                    if self.peek() == Some(']') {
                        self.next();
                        return Ok(Value::from(items));
                    }
                }
                Some(']') => return Ok(Value::from(items)),
                _ => return Err(invalid_syntax()),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Vec<(String, Value)>> {
        self.expect('{')?;
        let mut entries = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some('}') {
            self.next();
            return Ok(entries);
        }
        loop {
            self.skip_whitespace();
            let key = match self.peek() {
                Some(quote @ ('"' | '\'')) => {
                    self.next();
                    self.parse_quoted(quote)?
                }
                Some(c) if !is_delimiter(c) => self.parse_word(),
                _ => return Err(invalid_syntax()),
            };
            self.expect(':')?;
            self.skip_whitespace();
            let value = self.parse_value()?;
            entries.push((key, value));

            self.skip_whitespace();
            match self.next() {
                Some(',') => {
                    self.skip_whitespace();
                    if self.peek() == Some('}') {
                        self.next();
                        return Ok(entries);
                    }
                }
                Some('}') => return Ok(entries),
                _ => return Err(invalid_syntax()),
            }
        }
    }
}

/// Interprets an unquoted word.
fn word_value(word: &str) -> Value {
    match word {
        "true" | "True" => return Value::Bool(true),
        "false" | "False" => return Value::Bool(false),
        "null" | "None" => return Value::Nil,
        _ => {}
    }
    if looks_numeric(word) {
        if let Ok(i) = word.parse::<i64>() {
            return Value::Int(i);
        }
        if let Ok(f) = word.parse::<f64>() {
            if f.is_finite() {
                return Value::Float(f);
            }
        }
    }
    Value::from(word)
}

/// Only words shaped like numbers are parsed as numbers, so `inf` and `nan`
/// stay strings.
fn looks_numeric(word: &str) -> bool {
    let digits = word.trim_start_matches(['-', '+']);
    digits.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && digits.chars().any(|c| c.is_ascii_digit())
}
