//! Integration tests for plain command parsing

use hbnb_console::{Command, ShellTokenizer};
use hbnb_foundation::{ErrorKind, Malformed, Value};

fn malformed(line: &str) -> Malformed {
    match Command::parse(line).unwrap_err().kind {
        ErrorKind::MalformedInput(reason) => reason,
        other => panic!("expected malformed input for {line:?}, got {other:?}"),
    }
}

// =============================================================================
// Tokenizing
// =============================================================================

#[test]
fn tokenizer_follows_shell_quoting() {
    assert_eq!(
        ShellTokenizer::tokenize(r#"update User 1 first_name "Betty Holberton""#).unwrap(),
        ["update", "User", "1", "first_name", "Betty Holberton"]
    );
    assert_eq!(
        ShellTokenizer::tokenize(r"show 'City' a\ b").unwrap(),
        ["show", "City", "a b"]
    );
    assert!(ShellTokenizer::tokenize("update User 1 name \"open").is_err());
}

// =============================================================================
// Commands
// =============================================================================

#[test]
fn parses_every_command() {
    assert_eq!(Command::parse("  ").unwrap(), Command::Empty);
    assert_eq!(Command::parse("models").unwrap(), Command::Models);
    assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
    assert_eq!(Command::parse("EOF").unwrap(), Command::Quit);
    assert_eq!(Command::parse("all").unwrap(), Command::All { kind: None });
    assert_eq!(
        Command::parse("count Place").unwrap(),
        Command::Count {
            kind: "Place".to_string()
        }
    );
    assert_eq!(
        Command::parse("help show").unwrap(),
        Command::Help(Some("show".to_string()))
    );
    assert_eq!(
        Command::parse("destroy \"Review\" 'r-1'").unwrap(),
        Command::Destroy {
            kind: "Review".to_string(),
            id: "r-1".to_string()
        }
    );
}

#[test]
fn update_keeps_value_text() {
    assert_eq!(
        Command::parse("update Place p1 max_guest \"4\"").unwrap(),
        Command::Update {
            kind: "Place".to_string(),
            id: "p1".to_string(),
            changes: vec![("max_guest".to_string(), Value::from("4"))],
        }
    );
}

#[test]
fn missing_arguments_reported_left_to_right() {
    assert_eq!(malformed("create"), Malformed::ClassNameMissing);
    assert_eq!(malformed("show User"), Malformed::InstanceIdMissing);
    assert_eq!(malformed("update"), Malformed::ClassNameMissing);
    assert_eq!(malformed("update \"City\""), Malformed::InstanceIdMissing);
    assert_eq!(malformed("update City c1"), Malformed::AttributeNameMissing);
    assert_eq!(malformed("update City c1 name"), Malformed::ValueMissing);
}

#[test]
fn extra_arguments_rejected() {
    assert_eq!(
        malformed("create State City"),
        Malformed::TooManyArguments("create".to_string())
    );
    assert_eq!(
        malformed("quit now"),
        Malformed::TooManyArguments("quit".to_string())
    );
}

#[test]
fn unknown_lines() {
    assert_eq!(
        malformed("launch rocket"),
        Malformed::UnknownCommand("launch rocket".to_string())
    );
    assert_eq!(malformed("Create State"), Malformed::UnknownCommand("Create State".to_string()));
}
