//! hbnb CLI entry point.

use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use hbnb_console::{Repl, logging};
use hbnb_storage::{ObjectStore, StoreConfig};

/// CLI configuration parsed from arguments.
#[derive(Debug, Default, PartialEq, Eq)]
struct CliConfig {
    file: Option<PathBuf>,
    batch_mode: bool,
    verbosity: u8,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-f" | "--file" => {
                let path = args.next().ok_or("--file requires a path")?;
                config.file = Some(PathBuf::from(path));
            }
            flags
                if flags.starts_with('-')
                    && flags.len() > 1
                    && flags[1..].chars().all(|c| c == 'v') =>
            {
                config.verbosity = config.verbosity.saturating_add(u8::try_from(flags.len() - 1)?);
            }
            "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            arg => return Err(format!("unexpected argument: {arg}").into()),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("hbnb {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(config.verbosity)?;

    let mut store_config = StoreConfig::from_env();
    if let Some(file) = config.file {
        store_config = store_config.with_file_path(file);
    }
    let store = ObjectStore::open(store_config);

    if config.batch_mode || !io::stdin().is_terminal() {
        Repl::batch(store).run()?;
    } else {
        Repl::new(store)?.run()?;
    }
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mhbnb\x1b[0m - Command-driven object store

\x1b[1mUSAGE:\x1b[0m
    hbnb [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -f, --file <PATH>  Backing file (default: file.json, or $HBNB_FILE)
    -b, --batch        Read commands from stdin without line editing
    -v, --verbose      Raise log level (repeatable: -v info, -vv debug)
    -h, --help         Print help information
    -V, --version      Print version information

\x1b[1mCOMMANDS:\x1b[0m
    create <kind>                         Create an instance and print its id
    show <kind> <id>                      Print an instance
    destroy <kind> <id>                   Delete an instance
    all [<kind>]                          Print all instances
    update <kind> <id> <field> \"<value>\"  Set one field
    count <kind>                          Count instances of a kind
    models                                List kinds
    <kind>.<method>(<args>)               all, count, show, create, update, destroy
    quit                                  Exit (also Ctrl+D)

\x1b[1mEXAMPLES:\x1b[0m
    hbnb                                  Start the interactive console
    hbnb -f data.json                     Use data.json as the backing file
    echo 'create State' | hbnb            Run piped commands"
    );
}
