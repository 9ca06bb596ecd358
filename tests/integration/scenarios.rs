//! Command-by-command scenarios against one store

use hbnb::console::{Dispatcher, Response};
use hbnb::foundation::Value;
use hbnb::storage::{ObjectStore, StoreConfig};
use tempfile::TempDir;

struct Session {
    _dir: TempDir,
    store: ObjectStore,
}

impl Session {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::default().with_file_path(dir.path().join("file.json"));
        Self {
            store: ObjectStore::open(config),
            _dir: dir,
        }
    }

    fn run(&mut self, line: &str) -> String {
        Dispatcher::new(&mut self.store).dispatch(line).to_string()
    }
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn state_lifecycle() {
    let mut session = Session::new();

    let id = session.run("create State");
    let shown = session.run(&format!("show State {id}"));
    assert!(shown.starts_with(&format!("[State] ({id}) ")));
    let first_updated = session.store.find_by_id("State", &id).unwrap().updated_at();

    assert_eq!(session.run(&format!("update State {id} name \"Texas\"")), "");
    let shown = session.run(&format!("show State {id}"));
    assert!(shown.contains("'name': 'Texas'"));
    let state = session.store.find_by_id("State", &id).unwrap();
    assert!(state.updated_at() > first_updated);

    assert_eq!(session.run(&format!("destroy State {id}")), "");
    assert_eq!(session.run(&format!("show State {id}")), "** no instance found **");
}

#[test]
fn place_fields_take_schema_types() {
    let mut session = Session::new();
    let id = session.run("create Place");

    session.run(&format!("update Place {id} number_rooms \"3\""));
    session.run(&format!("update Place {id} latitude 48.85"));
    session.run(&format!("update Place {id} amenity_ids \"['a1', 'a2']\""));

    let place = session.store.find_by_id("Place", &id).unwrap();
    assert_eq!(place.get("number_rooms"), Some(&Value::Int(3)));
    assert_eq!(place.get("latitude"), Some(&Value::Float(48.85)));
    assert_eq!(
        place.get("amenity_ids"),
        Some(&Value::from(vec![Value::from("a1"), Value::from("a2")]))
    );
    assert!(session.run(&format!("show Place {id}")).contains("'number_rooms': 3"));
}

#[test]
fn string_fields_hold_bracketed_text() {
    let mut session = Session::new();
    let id = session.run("create State");

    assert_eq!(session.run(&format!("update State {id} name \"[draft]\"")), "");
    assert!(session.run(&format!("show State {id}")).ends_with("'name': '[draft]'}"));
}

// =============================================================================
// Listing
// =============================================================================

#[test]
fn all_and_count() {
    let mut session = Session::new();
    assert_eq!(session.run("all"), "[]");
    assert_eq!(session.run("all NoSuchKind"), "** class doesn't exist **");

    session.run("create User");
    session.run("create City");
    session.run("create User");

    assert_eq!(session.run("count User"), "2");
    assert_eq!(session.run("User.count()"), "2");
    assert_eq!(session.run("all Review"), "[]");

    let all_users = session.run("all User");
    assert_eq!(all_users.matches("[User]").count(), 2);
    assert_eq!(all_users, session.run("User.all()"));
    assert_eq!(session.run("all").matches("[City]").count(), 1);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn errors_render_in_envelope() {
    let mut session = Session::new();
    let cases = [
        ("create", "** class name missing **"),
        ("create Ghost", "** class doesn't exist **"),
        ("update \"City\"", "** instance id missing **"),
        ("destroy City", "** instance id missing **"),
        ("show City nope", "** no instance found **"),
        ("City.fly()", "** invalid method **"),
        ("Ghost.all()", "** class doesn't exist **"),
        ("jump", "** unknown syntax: jump **"),
    ];
    for (line, expected) in cases {
        assert_eq!(session.run(line), expected, "{line}");
    }
}

#[test]
fn protected_fields_cannot_be_updated() {
    let mut session = Session::new();
    let id = session.run("create Review");
    let before = session.store.find_by_id("Review", &id).unwrap().clone();

    for field in ["id", "created_at", "updated_at", "__class__"] {
        assert_eq!(
            session.run(&format!("update Review {id} {field} \"x\"")),
            "** attribute doesn't exist **"
        );
    }
    assert_eq!(session.store.find_by_id("Review", &id).unwrap(), &before);
}

#[test]
fn quit_is_reported() {
    let mut session = Session::new();
    assert_eq!(Dispatcher::new(&mut session.store).dispatch("quit"), Response::Quit);
}
