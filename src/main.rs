use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pokedex_roster::{
    calculate_average_hp, filter_by_type, get_pokemon_names, get_strongest_pokemon,
    load_roster, sample_roster, sort_by_name, Pokemon, VERSION,
};

/// Query a Pokemon roster loaded from JSON or CSV
#[derive(Parser, Debug)]
#[command(name = "pokedex-roster")]
#[command(about = "pokedex-roster - Filter, rank and summarize a Pokemon roster", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Roster file (.json or .csv); the starter roster is used when omitted
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
enum Command {
    /// Records whose type matches exactly
    Filter {
        /// Type tag to match (case-sensitive)
        #[arg(value_name = "TYPE")]
        pokemon_type: String,
    },

    /// Names in roster order
    Names,

    /// All records sharing the highest attack
    Strongest,

    /// Records sorted by name
    Sorted,

    /// Mean hp of the roster
    AverageHp,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    debug!(version = VERSION, ?cli, "pokedex-roster started");

    let roster = match &cli.file {
        Some(path) => load_roster(path)?,
        None => sample_roster(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli.command, &roster, &mut out)
}

/// Logs go to stderr so stdout carries only results; RUST_LOG overrides -v
fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: &Command, roster: &[Pokemon], out: &mut impl Write) -> Result<()> {
    match command {
        Command::Filter { pokemon_type } => {
            let matches = filter_by_type(roster, pokemon_type)?;
            eprintln!("🔎 {} of {} match type '{}'", matches.len(), roster.len(), pokemon_type);
            print_records(out, &matches)?;
        }
        Command::Names => {
            for name in get_pokemon_names(roster)? {
                writeln!(out, "{}", name)?;
            }
        }
        Command::Strongest => {
            let strongest = get_strongest_pokemon(roster)?;
            eprintln!("💪 {} record(s) share the highest attack", strongest.len());
            print_records(out, &strongest)?;
        }
        Command::Sorted => {
            print_records(out, &sort_by_name(roster)?)?;
        }
        Command::AverageHp => {
            writeln!(out, "{:.2}", calculate_average_hp(roster)?)?;
        }
    }

    Ok(())
}

fn print_records(out: &mut impl Write, records: &[Pokemon]) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(records)?)?;
    Ok(())
}
