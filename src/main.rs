use crate::roster::Roster;
use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::PathBuf;
use tabled::builder::Builder;
use tabled::settings::Style;

mod airline;
mod definition;
mod error;
mod roster;

#[derive(Parser)]
struct Args {
    /// Path to the JSON airline definitions
    #[arg(short, long, value_name = "FILE", default_value = "data/airlines.json")]
    airlines: PathBuf,

    /// Seed for flight number and aircraft type generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

fn print_table(table: &mut tabled::Table) {
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    println!("{}", table);
}

fn list_fleets(roster: &Roster, icao: &str) -> Result<(), error::AirlineError> {
    let airline = roster.airline(icao)?;
    if airline.fleets().is_empty() {
        println!("{} has no fleets.", airline.icao());
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["Fleet", "Type", "Weight"]);
    for (name, entries) in airline.fleets() {
        for entry in entries {
            builder.push_record([name.clone(), entry.aircraft_type.clone(), entry.weight.to_string()]);
        }
    }
    print_table(&mut builder.build());
    Ok(())
}

fn run_command(roster: &mut Roster, parts: &[&str]) -> Result<(), error::AirlineError> {
    match parts[0] {
        "ls" => {
            let summaries = roster.summaries();
            if summaries.is_empty() {
                println!("No airlines loaded.");
            } else {
                print_table(&mut tabled::Table::new(&summaries));
            }
        }
        "fleets" => match parts.get(1) {
            Some(icao) => list_fleets(roster, icao)?,
            None => println!("Usage: fleets <icao>"),
        },
        "types" => match parts.get(1) {
            Some(icao) => {
                let airline = roster.airline(icao)?;
                println!("{}", airline.aircraft_type_catalog().join(", "));
            }
            None => println!("Usage: types <icao>"),
        },
        "spawn" => match parts.get(1) {
            Some(icao) => {
                let assignment = roster.assign_flight_number(icao, parts.get(2).copied())?;
                println!(
                    "{} {} ({}){}",
                    "Spawned".green(),
                    assignment.flight_id.bold(),
                    assignment.radio_callsign,
                    assignment
                        .aircraft_type
                        .map(|t| format!(" flying {}", t))
                        .unwrap_or_default()
                );
            }
            None => println!("Usage: spawn <icao> [fleet]"),
        },
        "release" => match (parts.get(1), parts.get(2)) {
            (Some(icao), Some(number)) => {
                roster.release(icao, number)?;
                println!("Released {} {}.", icao.to_uppercase(), number);
            }
            _ => println!("Usage: release <icao> <flight_number>"),
        },
        "active" => match parts.get(1) {
            Some(icao) => {
                let airline = roster.airline(icao)?;
                if airline.flight_numbers().is_empty() {
                    println!("No active flights for {}.", airline.icao());
                } else {
                    println!("{}", airline.flight_numbers().join(" "));
                }
            }
            None => println!("Usage: active <icao>"),
        },
        "reset" => {
            roster.reset();
            println!("All active flight numbers cleared.");
        }
        "help" | "?" => {
            println!("\nAvailable Commands:");
            println!("  ls                     - List all airlines in a table");
            println!("  fleets <icao>          - Show the fleets of airline <icao>");
            println!("  types <icao>           - Show every aircraft type airline <icao> flies");
            println!("  spawn <icao> [fleet]   - Assign a free flight number, optionally picking a type from [fleet]");
            println!("  release <icao> <num>   - Release flight number <num> of airline <icao>");
            println!("  active <icao>          - Show the flight numbers airline <icao> has in use");
            println!("  reset                  - Clear active flight numbers of every airline");
            println!("  help / ?               - Show this help menu");
            println!("  exit / quit            - Exit\n");
        }
        other => println!("Unknown command: {}", other),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let mut roster = Roster::load_from_file(&args.airlines, args.seed)?;
    println!("Dispatch online. Loaded airlines from {}", args.airlines.display());

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: ["ls", "fleets", "types", "spawn", "release", "active", "reset", "help", "exit"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                if matches!(parts[0], "exit" | "quit") {
                    break;
                }
                if let Err(err) = run_command(&mut roster, &parts) {
                    println!("{} {}", "Error:".red(), err);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
