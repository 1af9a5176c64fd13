// Pokedex Roster - Core Library
// Exposes all modules for use in the CLI and tests

pub mod error;
pub mod pokemon;
pub mod roster;   // filter / names / strongest / sort / average
pub mod loader;   // JSON + CSV roster files

// Re-export commonly used types
pub use error::RosterError;
pub use pokemon::{Pokemon, sample_roster};
pub use roster::{
    filter_by_type, get_pokemon_names, get_strongest_pokemon,
    sort_by_name, calculate_average_hp,
};
pub use loader::{RosterFormat, load_roster, parse_json, read_csv};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
