//! Integration tests for the console loop over scripted input

use std::io::Cursor;

use hbnb_console::{ConsoleConfig, ReaderEditor, Repl};
use hbnb_storage::{ObjectStore, StoreConfig};
use tempfile::TempDir;

fn scripted(script: &str) -> (TempDir, Repl<ReaderEditor<Cursor<String>>>) {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::default().with_file_path(dir.path().join("file.json"));
    let store = ObjectStore::new(config);
    let editor = ReaderEditor::new(Cursor::new(script.to_string()));
    let repl = Repl::with_editor(editor, store).with_config(ConsoleConfig::batch());
    (dir, repl)
}

fn run(repl: &mut Repl<ReaderEditor<Cursor<String>>>) -> Vec<String> {
    let mut out = Vec::new();
    repl.run_with_output(&mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn batch_prints_only_results() {
    let (_dir, mut repl) = scripted("count State\ncreate State\ncount State\n");
    let lines = run(&mut repl);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "0");
    assert_eq!(lines[1].len(), 36);
    assert_eq!(lines[2], "1");
}

#[test]
fn failures_use_envelope() {
    let (_dir, mut repl) = scripted("show\nshow Ghost 1\nshow User 1\n");
    assert_eq!(
        run(&mut repl),
        [
            "** class name missing **",
            "** class doesn't exist **",
            "** no instance found **"
        ]
    );
}

#[test]
fn stops_at_quit() {
    let (_dir, mut repl) = scripted("create City\nquit\ncreate City\n");
    assert_eq!(run(&mut repl).len(), 1);
    assert_eq!(repl.store().len(), 1);
}

#[test]
fn stops_at_end_of_input_without_newline() {
    let (_dir, mut repl) = scripted("create Amenity\ncount Amenity");
    let lines = run(&mut repl);
    assert_eq!(lines.last().map(String::as_str), Some("1"));
}

#[test]
fn windows_line_endings_are_accepted() {
    let (_dir, mut repl) = scripted("models\r\n");
    assert_eq!(
        run(&mut repl),
        ["BaseModel User State City Amenity Place Review"]
    );
}
