//! Integration tests for the `<Kind>.<method>(<args>)` form

use hbnb_console::Command;
use hbnb_foundation::{ErrorKind, Malformed, Value};

#[test]
fn dotted_calls_map_to_commands() {
    assert_eq!(
        Command::parse("City.all()").unwrap(),
        Command::All {
            kind: Some("City".to_string())
        }
    );
    assert_eq!(
        Command::parse("City.count()").unwrap(),
        Command::Count {
            kind: "City".to_string()
        }
    );
    assert_eq!(
        Command::parse("User.show(\"u1\")").unwrap(),
        Command::Show {
            kind: "User".to_string(),
            id: "u1".to_string()
        }
    );
    assert_eq!(
        Command::parse("User.destroy('u1')").unwrap(),
        Command::Destroy {
            kind: "User".to_string(),
            id: "u1".to_string()
        }
    );
}

#[test]
fn dotted_update_forms() {
    assert_eq!(
        Command::parse("Place.update(\"p1\", \"max_guest\", 4)").unwrap(),
        Command::Update {
            kind: "Place".to_string(),
            id: "p1".to_string(),
            changes: vec![("max_guest".to_string(), Value::Int(4))],
        }
    );
    assert_eq!(
        Command::parse("Place.update(\"p1\", {\"name\": \"Loft\", \"latitude\": 1.5})").unwrap(),
        Command::Update {
            kind: "Place".to_string(),
            id: "p1".to_string(),
            changes: vec![
                ("name".to_string(), Value::from("Loft")),
                ("latitude".to_string(), Value::Float(1.5)),
            ],
        }
    );
}

#[test]
fn dotted_errors() {
    let kind = |line: &str| Command::parse(line).unwrap_err().kind;

    assert!(matches!(kind("Spaceship.all()"), ErrorKind::UnknownKind(_)));
    assert!(matches!(
        kind("User.launch()"),
        ErrorKind::MalformedInput(Malformed::InvalidMethod)
    ));
    assert!(matches!(
        kind("User.update()"),
        ErrorKind::MalformedInput(Malformed::InstanceIdMissing)
    ));
    assert!(matches!(
        kind("User.update(\"u1\")"),
        ErrorKind::MalformedInput(Malformed::AttributeNameMissing)
    ));
    assert!(matches!(
        kind("User.update(\"u1\", \"email\")"),
        ErrorKind::MalformedInput(Malformed::ValueMissing)
    ));
    assert!(matches!(
        kind("User.show(\"unterminated)"),
        ErrorKind::MalformedInput(Malformed::InvalidSyntax)
    ));
}

#[test]
fn bare_ids_are_not_renumbered() {
    for id in ["007", "1e3", "12.50"] {
        assert_eq!(
            Command::parse(&format!("City.destroy({id})")).unwrap(),
            Command::parse(&format!("destroy City {id}")).unwrap(),
            "{id}"
        );
    }
}
