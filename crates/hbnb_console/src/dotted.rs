//! The dotted calling form: `<Kind>.<method>(<args>)`.
//!
//! Method names resolve through a fixed table; each entry binds the parsed
//! argument list positionally onto a [`Command`].

use hbnb_foundation::{Error, Malformed, Result};
use hbnb_storage::Registry;

use crate::command::Command;
use crate::literal::{self, Arg};

type Binder = fn(String, Vec<Arg>) -> Result<Command>;

/// Methods callable on a kind.
static METHODS: &[(&str, Binder)] = &[
    ("all", bind_all),
    ("count", bind_count),
    ("show", bind_show),
    ("create", bind_create),
    ("update", bind_update),
    ("destroy", bind_destroy),
];

/// Returns the names of every dotted method.
pub fn method_names() -> impl Iterator<Item = &'static str> {
    METHODS.iter().map(|(name, _)| *name)
}

/// Parses a line written in the dotted form.
///
/// Returns `None` if the line does not have the dotted shape at all, so the
/// caller can report it as unknown syntax. The kind is checked before the
/// method, and the method before its arguments.
pub fn parse(line: &str) -> Option<Result<Command>> {
    let (kind, call) = line.split_once('.')?;
    let call = call.trim_end();
    if !call.ends_with(')') {
        return None;
    }
    Some(parse_call(kind.trim(), call))
}

fn parse_call(kind: &str, call: &str) -> Result<Command> {
    if !Registry::is_registered(kind) {
        return Err(Error::unknown_kind(kind));
    }
    let Some((method, rest)) = call.split_once('(') else {
        return Err(Error::malformed(Malformed::InvalidSyntax));
    };
    let Some(bind) = METHODS
        .iter()
        .find(|(name, _)| *name == method.trim())
        .map(|(_, bind)| *bind)
    else {
        return Err(Error::malformed(Malformed::InvalidMethod));
    };

    let inner = rest.strip_suffix(')').unwrap_or(rest);
    let args = literal::parse_args(inner)?;
    bind(kind.to_string(), args)
}

fn invalid_syntax() -> Error {
    Error::malformed(Malformed::InvalidSyntax)
}

fn bind_all(kind: String, args: Vec<Arg>) -> Result<Command> {
    if args.is_empty() {
        Ok(Command::All { kind: Some(kind) })
    } else {
        Err(invalid_syntax())
    }
}

fn bind_count(kind: String, args: Vec<Arg>) -> Result<Command> {
    if args.is_empty() {
        Ok(Command::Count { kind })
    } else {
        Err(invalid_syntax())
    }
}

fn bind_show(kind: String, args: Vec<Arg>) -> Result<Command> {
    let id = single_id(&args)?;
    Ok(Command::Show { kind, id })
}

fn bind_destroy(kind: String, args: Vec<Arg>) -> Result<Command> {
    let id = single_id(&args)?;
    Ok(Command::Destroy { kind, id })
}

fn bind_create(kind: String, args: Vec<Arg>) -> Result<Command> {
    let mut args = args.into_iter();
    let fields = match (args.next(), args.next()) {
        (None, _) => Vec::new(),
        (Some(Arg::Object(fields)), None) => fields,
        _ => return Err(invalid_syntax()),
    };
    Ok(Command::Create { kind, fields })
}

fn bind_update(kind: String, args: Vec<Arg>) -> Result<Command> {
    let mut args = args.into_iter();
    let id = args
        .next()
        .ok_or_else(|| Error::malformed(Malformed::InstanceIdMissing))?
        .as_name()
        .ok_or_else(invalid_syntax)?;

    let changes = match (args.next(), args.next(), args.next()) {
        (None, _, _) => return Err(Error::malformed(Malformed::AttributeNameMissing)),
        (Some(Arg::Object(changes)), None, _) => changes,
        (Some(field), None, _) => {
            field.as_name().ok_or_else(invalid_syntax)?;
            return Err(Error::malformed(Malformed::ValueMissing));
        }
        (Some(field), Some(value), None) => {
            let field = field.as_name().ok_or_else(invalid_syntax)?;
            vec![(field, value.into_value().ok_or_else(invalid_syntax)?)]
        }
        _ => return Err(invalid_syntax()),
    };
    Ok(Command::Update { kind, id, changes })
}

fn single_id(args: &[Arg]) -> Result<String> {
    match args {
        [] => Err(Error::malformed(Malformed::InstanceIdMissing)),
        [id] => id.as_name().ok_or_else(invalid_syntax),
        _ => Err(invalid_syntax()),
    }
}
