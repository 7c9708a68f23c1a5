//! `gurney session` - interactive result table
//!
//! Reads one command per line:
//!
//! ```text
//! add <alloy> <d_nm> <t_nm>   compute and store a result
//! del <id>                    delete a result
//! sel <id>                    toggle selection of a result
//! list                        show the results table
//! show                        show the selection visualizer
//! json                        dump the session as JSON
//! alloys                      list alloys
//! help                        show this list
//! quit                        leave
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Result;
use gurney_core::{Calculator, RecordId, ResultStore};
use tracing::warn;

use crate::render::{print_error, print_table, print_visual};

const HELP: &str = "\
Commands:
  add <alloy> <d_nm> <t_nm>   compute and store a result
  del <id>                    delete a result
  sel <id>                    toggle selection of a result
  list                        show the results table
  show                        show the selection visualizer
  json                        dump the session as JSON
  alloys                      list alloys
  help                        show this list
  quit                        leave";

/// One parsed session command
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Add {
        alloy: String,
        diameter: String,
        thickness: String,
    },
    Delete(RecordId),
    Select(RecordId),
    List,
    Show,
    Json,
    Alloys,
    Help,
    Quit,
    Empty,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Command::Empty);
    };
    let args: Vec<&str> = words.collect();

    match (verb.to_lowercase().as_str(), args.as_slice()) {
        ("add", [alloy, diameter, thickness]) => Ok(Command::Add {
            alloy: alloy.to_string(),
            diameter: diameter.to_string(),
            thickness: thickness.to_string(),
        }),
        ("add", _) => Err("Please fill all fields: add <alloy> <d_nm> <t_nm>".to_string()),
        ("del" | "delete", [id]) => parse_id(id).map(Command::Delete),
        ("sel" | "select", [id]) => parse_id(id).map(Command::Select),
        ("del" | "delete" | "sel" | "select", _) => Err(format!("Usage: {} <id>", verb)),
        ("list" | "ls", []) => Ok(Command::List),
        ("show" | "viz", []) => Ok(Command::Show),
        ("json", []) => Ok(Command::Json),
        ("alloys", []) => Ok(Command::Alloys),
        ("help" | "?", []) => Ok(Command::Help),
        ("quit" | "exit" | "q", []) => Ok(Command::Quit),
        _ => Err(format!("Unknown command '{}'. Type 'help' for commands.", line.trim())),
    }
}

fn parse_id(text: &str) -> Result<RecordId, String> {
    text.parse::<u64>()
        .map(RecordId)
        .map_err(|_| format!("'{}' is not a result id", text))
}

/// Apply a command to the session. Returns false when the session should end.
fn apply(calculator: &Calculator, store: &mut ResultStore, command: Command) -> Result<bool> {
    match command {
        Command::Add {
            alloy,
            diameter,
            thickness,
        } => {
            match calculator
                .parse_input(&alloy, &diameter, &thickness)
                .and_then(|input| calculator.compute(&input))
            {
                Ok(output) => {
                    let id = store.append(output);
                    println!("Added result {}.", id);
                }
                Err(e) => print_error(&e),
            }
        }
        Command::Delete(id) => {
            if store.delete(id) {
                println!("Deleted result {}.", id);
            } else {
                println!("No result {}.", id);
            }
        }
        Command::Select(id) => match store.toggle_select(id) {
            Ok(()) => {
                let state = if store.is_selected(id) { "selected" } else { "deselected" };
                println!("Result {} {}.", id, state);
            }
            Err(e) => print_error(&e),
        },
        Command::List => print_table(store),
        Command::Show => print_visual(store),
        Command::Json => println!("{}", serde_json::to_string_pretty(&store.snapshot())?),
        Command::Alloys => println!("Alloys: {}", calculator.list_ids().join(", ")),
        Command::Help => println!("{}", HELP),
        Command::Quit => return Ok(false),
        Command::Empty => {}
    }
    Ok(true)
}

pub fn execute(calculator: &Calculator) -> Result<()> {
    println!("Gurney Velocity & Fragment Efficiency Calculator");
    println!("================================================");
    println!("Alloys: {}", calculator.list_ids().join(", "));
    println!("Type 'help' for commands.");

    let mut store = ResultStore::new();
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("gurney> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                warn!(input = %line.trim(), "Rejected session command");
                println!("{}", message);
                continue;
            }
        };

        if !apply(calculator, &mut store, command)? {
            break;
        }
    }

    Ok(())
}
