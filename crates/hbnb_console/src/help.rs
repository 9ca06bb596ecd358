//! Built-in command documentation.

use crate::command::COMMAND_NAMES;

/// Returns the one-line description of a command, if it has one.
#[must_use]
pub fn describe(command: &str) -> Option<&'static str> {
    let text = match command {
        "EOF" => "Exits the console at end of input",
        "all" => "Prints every instance, or every instance of one kind\nUsage: all [<kind>]",
        "count" => "Prints the number of instances of a kind\nUsage: count <kind>",
        "create" => {
            "Creates an instance of a kind, saves it, and prints its id\nUsage: create <kind>"
        }
        "destroy" => "Deletes an instance by kind and id\nUsage: destroy <kind> <id>",
        "help" => "Lists commands, or describes one\nUsage: help [<command>]",
        "models" => "Prints every registered kind",
        "quit" => "Quits the console",
        "show" => "Prints the string form of an instance\nUsage: show <kind> <id>",
        "update" => {
            "Sets one field of an instance and saves it\n\
             Usage: update <kind> <id> <field> \"<value>\""
        }
        _ => return None,
    };
    Some(text)
}

/// Returns the command overview printed by a bare `help`.
#[must_use]
pub fn overview() -> String {
    let header = "Documented commands (type help <topic>):";
    format!(
        "\n{header}\n{}\n{}\n\n\
         Commands can also be called on a kind: <kind>.all(), <kind>.count(),\n\
         <kind>.show(<id>), <kind>.create({{...}}), <kind>.destroy(<id>),\n\
         <kind>.update(<id>, <field>, <value>), <kind>.update(<id>, {{...}})\n",
        "=".repeat(header.len()),
        COMMAND_NAMES.join("  "),
    )
}
