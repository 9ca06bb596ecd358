//! Whole sessions: scripted input, persistence across restarts

use std::fs;
use std::io::Cursor;

use hbnb::console::{ConsoleConfig, ReaderEditor, Repl};
use hbnb::storage::{ObjectStore, ReloadOutcome, StoreConfig};

fn run_script(config: &StoreConfig, script: &str) -> Vec<String> {
    let store = ObjectStore::open(config.clone());
    let editor = ReaderEditor::new(Cursor::new(script.to_string()));
    let mut repl = Repl::with_editor(editor, store).with_config(ConsoleConfig::batch());

    let mut out = Vec::new();
    repl.run_with_output(&mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn entities_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::default().with_file_path(dir.path().join("file.json"));

    let lines = run_script(&config, "create State\nquit\n");
    let id = lines[0].clone();

    let script = format!("update State {id} name \"Ohio\"\nshow State {id}\n");
    let lines = run_script(&config, &script);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("'name': 'Ohio'}"));

    let lines = run_script(&config, &format!("State.show(\"{id}\")\n"));
    assert!(lines[0].contains("'name': 'Ohio'"));
}

#[test]
fn session_ends_at_quit() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::default().with_file_path(dir.path().join("file.json"));

    let lines = run_script(&config, "create User\nquit\ncreate User\ncreate User\n");
    assert_eq!(lines.len(), 1);

    let mut store = ObjectStore::new(config);
    assert_eq!(store.reload(), ReloadOutcome::Loaded { count: 1 });
}

#[test]
fn corrupt_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("file.json");
    fs::write(&path, "[1, 2, 3]").unwrap();
    let config = StoreConfig::default().with_file_path(&path);

    assert_eq!(run_script(&config, "all\ncreate City\ncount City\n")[2], "1");
}

#[test]
fn unknown_class_in_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("file.json");
    fs::write(
        &path,
        r#"{"Dragon.d1": {"id": "d1", "created_at": "2017-09-28T21:05:54.119427",
            "updated_at": "2017-09-28T21:05:54.119427", "__class__": "Dragon"}}"#,
    )
    .unwrap();
    let config = StoreConfig::default().with_file_path(&path);

    assert_eq!(run_script(&config, "all\n"), ["[]"]);
}

#[test]
fn numeric_looking_ids_match_in_both_forms() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("file.json");
    fs::write(
        &path,
        r#"{"State.007": {"id": "007", "created_at": "2017-09-28T21:05:54.119427",
            "updated_at": "2017-09-28T21:05:54.119427", "name": "Bond",
            "__class__": "State"}}"#,
    )
    .unwrap();
    let config = StoreConfig::default().with_file_path(&path);

    let lines = run_script(&config, "show State 007\nState.show(007)\nState.show(\"007\")\n");
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("[State] (007) "));
    assert_eq!(lines[1], lines[0]);
    assert_eq!(lines[2], lines[0]);
}
