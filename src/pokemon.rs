// 🐾 Pokemon Record - One entry of a caller-owned catalog
//
// Every field is optional: callers often pass partial records (a name and an
// attack stat is enough to find the strongest entries). Operations ask for the
// fields they need through the `require_*` accessors, which fail fast with a
// RosterError instead of silently computing on missing data.

use crate::error::RosterError;
use serde::{Deserialize, Serialize};

// ============================================================================
// POKEMON RECORD
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Pokédex number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Type tag (e.g., "fire", "water"), matched case-sensitively
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub pokemon_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<f64>,
}

impl Pokemon {
    /// Create a fully populated record
    pub fn new(
        id: i64,
        name: impl Into<String>,
        pokemon_type: impl Into<String>,
        hp: f64,
        attack: f64,
        defense: f64,
    ) -> Self {
        Pokemon {
            id: Some(id),
            name: Some(name.into()),
            pokemon_type: Some(pokemon_type.into()),
            hp: Some(hp),
            attack: Some(attack),
            defense: Some(defense),
        }
    }

    /// Create a partial record carrying only a name
    pub fn named(name: impl Into<String>) -> Self {
        Pokemon {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_type(mut self, pokemon_type: impl Into<String>) -> Self {
        self.pokemon_type = Some(pokemon_type.into());
        self
    }

    pub fn with_hp(mut self, hp: f64) -> Self {
        self.hp = Some(hp);
        self
    }

    pub fn with_attack(mut self, attack: f64) -> Self {
        self.attack = Some(attack);
        self
    }

    pub fn with_defense(mut self, defense: f64) -> Self {
        self.defense = Some(defense);
        self
    }

    // ========================================================================
    // VALIDATED ACCESSORS
    // `index` is the record's position in the caller's input, used in errors
    // ========================================================================

    pub fn require_name(&self, index: usize) -> Result<&str, RosterError> {
        self.name.as_deref().ok_or_else(|| self.missing(index, "name"))
    }

    pub fn require_type(&self, index: usize) -> Result<&str, RosterError> {
        self.pokemon_type
            .as_deref()
            .ok_or_else(|| self.missing(index, "type"))
    }

    pub fn require_hp(&self, index: usize) -> Result<f64, RosterError> {
        self.require_stat(index, "hp", self.hp)
    }

    pub fn require_attack(&self, index: usize) -> Result<f64, RosterError> {
        self.require_stat(index, "attack", self.attack)
    }

    fn require_stat(
        &self,
        index: usize,
        field: &'static str,
        value: Option<f64>,
    ) -> Result<f64, RosterError> {
        match value {
            Some(v) if v.is_finite() => Ok(v),
            Some(v) => Err(RosterError::InvalidValue {
                index,
                field,
                value: v,
                name: self.name.clone(),
            }),
            None => Err(self.missing(index, field)),
        }
    }

    fn missing(&self, index: usize, field: &'static str) -> RosterError {
        RosterError::MissingField {
            index,
            field,
            name: self.name.clone(),
        }
    }
}

// ============================================================================
// SAMPLE DATA
// ============================================================================

/// The four starter records used by the CLI when no roster file is given
pub fn sample_roster() -> Vec<Pokemon> {
    vec![
        Pokemon::new(1, "Bulbasaur", "grass", 45.0, 49.0, 49.0),
        Pokemon::new(4, "Charmander", "fire", 39.0, 52.0, 43.0),
        Pokemon::new(7, "Squirtle", "water", 44.0, 48.0, 65.0),
        Pokemon::new(25, "Pikachu", "electric", 35.0, 55.0, 40.0),
    ]
}
