// 📂 Roster Loader - JSON / CSV → Vec<Pokemon>
// Column and key names match the record fields: id, name, type, hp, attack, defense

use crate::pokemon::Pokemon;
use anyhow::{bail, Context, Result};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tracing::debug;

// ============================================================================
// FORMAT DETECTION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Json,
    Csv,
}

impl RosterFormat {
    pub fn name(&self) -> &str {
        match self {
            RosterFormat::Json => "JSON",
            RosterFormat::Csv => "CSV",
        }
    }

    /// Detect format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(RosterFormat::Json),
            Some("csv") => Ok(RosterFormat::Csv),
            _ => bail!(
                "Unsupported roster file {:?}: expected a .json or .csv extension",
                path
            ),
        }
    }
}

// ============================================================================
// PARSERS
// ============================================================================

/// Parse a JSON array of records
pub fn parse_json(content: &str) -> Result<Vec<Pokemon>> {
    let roster: Vec<Pokemon> =
        serde_json::from_str(content).context("Failed to parse roster JSON")?;

    debug!(count = roster.len(), "parsed JSON roster");
    Ok(roster)
}

/// Read CSV records with a header row; empty cells become absent fields
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Pokemon>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut roster = Vec::new();

    for (row, result) in rdr.deserialize().enumerate() {
        let pokemon: Pokemon =
            result.with_context(|| format!("Failed to deserialize roster row {}", row + 1))?;
        roster.push(pokemon);
    }

    debug!(count = roster.len(), "parsed CSV roster");
    Ok(roster)
}

/// Load a roster file, choosing the parser by extension
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<Pokemon>> {
    let path = path.as_ref();
    let format = RosterFormat::from_path(path)?;

    debug!(path = %path.display(), format = format.name(), "loading roster");

    match format {
        RosterFormat::Json => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read roster file: {:?}", path))?;
            parse_json(&content).with_context(|| format!("Invalid roster file: {:?}", path))
        }
        RosterFormat::Csv => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open roster file: {:?}", path))?;
            read_csv(file).with_context(|| format!("Invalid roster file: {:?}", path))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::sample_roster;
    use std::io::Write;

    const STARTERS_CSV: &str = "\
id,name,type,hp,attack,defense
1,Bulbasaur,grass,45,49,49
4,Charmander,fire,39,52,43
7,Squirtle,water,44,48,65
25,Pikachu,electric,35,55,40
";

    #[test]
    fn test_detect_format() {
        assert_eq!(RosterFormat::from_path(Path::new("team.json")).unwrap(), RosterFormat::Json);
        assert_eq!(RosterFormat::from_path(Path::new("dex/TEAM.CSV")).unwrap(), RosterFormat::Csv);
        assert!(RosterFormat::from_path(Path::new("team.yaml")).is_err());
        assert!(RosterFormat::from_path(Path::new("team")).is_err());
    }

    #[test]
    fn test_parse_json_full_records() {
        let json = serde_json::to_string(&sample_roster()).unwrap();
        assert_eq!(parse_json(&json).unwrap(), sample_roster());
    }

    #[test]
    fn test_parse_json_partial_records() {
        let roster = parse_json(r#"[{ "name": "A", "attack": 70 }, { "hp": 100 }]"#).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0], Pokemon::named("A").with_attack(70.0));
        assert_eq!(roster[1], Pokemon::default().with_hp(100.0));
    }

    #[test]
    fn test_parse_json_rejects_non_array() {
        let err = parse_json(r#"{ "name": "A" }"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse roster JSON"));
    }

    #[test]
    fn test_read_csv_full_records() {
        let roster = read_csv(STARTERS_CSV.as_bytes()).unwrap();
        assert_eq!(roster, sample_roster());
    }

    #[test]
    fn test_read_csv_empty_cells_are_absent() {
        let csv = "name,type,hp,attack\nEevee,,55,\n";
        let roster = read_csv(csv.as_bytes()).unwrap();

        assert_eq!(roster, vec![Pokemon::named("Eevee").with_hp(55.0)]);
    }

    #[test]
    fn test_read_csv_reports_bad_row() {
        let csv = "name,hp\nPikachu,35\nOnix,lots\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();

        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_load_roster_from_files() {
        let dir = tempfile::tempdir().unwrap();

        let csv_path = dir.path().join("starters.csv");
        fs::write(&csv_path, STARTERS_CSV).unwrap();

        let json_path = dir.path().join("starters.json");
        let mut file = File::create(&json_path).unwrap();
        file.write_all(serde_json::to_string_pretty(&sample_roster()).unwrap().as_bytes())
            .unwrap();

        assert_eq!(load_roster(&csv_path).unwrap(), sample_roster());
        assert_eq!(load_roster(&json_path).unwrap(), sample_roster());
    }

    #[test]
    fn test_load_roster_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_roster(dir.path().join("nowhere.json")).unwrap_err();

        assert!(err.to_string().contains("Failed to read roster file"));
    }
}
