// ⚠️ Roster Errors - Contract violations on incoming records
// A record missing a field an operation needs is rejected, never guessed.

use std::fmt;

// ============================================================================
// ROSTER ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum RosterError {
    /// A required field is absent on the record at `index`
    MissingField {
        index: usize,
        field: &'static str,
        name: Option<String>,
    },

    /// A numeric stat is present but not a finite number (NaN or infinity)
    InvalidValue {
        index: usize,
        field: &'static str,
        value: f64,
        name: Option<String>,
    },
}

impl RosterError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            RosterError::MissingField { field, .. } => *field,
            RosterError::InvalidValue { field, .. } => *field,
        }
    }

    /// Position of the offending record in the input
    pub fn index(&self) -> usize {
        match self {
            RosterError::MissingField { index, .. } => *index,
            RosterError::InvalidValue { index, .. } => *index,
        }
    }
}

fn describe(index: usize, name: &Option<String>) -> String {
    match name {
        Some(name) => format!("record {} ({})", index, name),
        None => format!("record {}", index),
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::MissingField { index, field, name } => {
                write!(f, "{}: required field '{}' is missing", describe(*index, name), field)
            }
            RosterError::InvalidValue { index, field, value, name } => {
                write!(
                    f,
                    "{}: field '{}' must be a finite number, got {}",
                    describe(*index, name),
                    field,
                    value
                )
            }
        }
    }
}

impl std::error::Error for RosterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_includes_name() {
        let err = RosterError::MissingField {
            index: 2,
            field: "attack",
            name: Some("Squirtle".to_string()),
        };

        assert_eq!(
            err.to_string(),
            "record 2 (Squirtle): required field 'attack' is missing"
        );
        assert_eq!(err.field(), "attack");
        assert_eq!(err.index(), 2);
    }

    #[test]
    fn test_invalid_value_message_without_name() {
        let err = RosterError::InvalidValue {
            index: 0,
            field: "hp",
            value: f64::INFINITY,
            name: None,
        };

        assert_eq!(err.to_string(), "record 0: field 'hp' must be a finite number, got inf");
    }

    #[test]
    fn test_converts_into_anyhow() {
        let err = RosterError::MissingField {
            index: 1,
            field: "name",
            name: None,
        };

        let wrapped: anyhow::Error = err.clone().into();
        assert_eq!(wrapped.downcast_ref::<RosterError>(), Some(&err));
    }
}
