// 📋 Roster Utilities - Pure transformations over a list of Pokemon
//
// Every function borrows the caller's slice and returns owned results; the
// input is never mutated. Empty input degrades to an empty vector (or 0.0 for
// the average), never to an error. A record missing a field the operation
// reads is rejected with a RosterError naming that record.

use crate::error::RosterError;
use crate::pokemon::Pokemon;

// ============================================================================
// FILTERING & PROJECTION
// ============================================================================

/// Records whose type equals `target_type` exactly, in input order
pub fn filter_by_type(records: &[Pokemon], target_type: &str) -> Result<Vec<Pokemon>, RosterError> {
    let mut matches = Vec::new();

    for (index, pokemon) in records.iter().enumerate() {
        if pokemon.require_type(index)? == target_type {
            matches.push(pokemon.clone());
        }
    }

    Ok(matches)
}

/// Names of all records, in input order
pub fn get_pokemon_names(records: &[Pokemon]) -> Result<Vec<String>, RosterError> {
    records
        .iter()
        .enumerate()
        .map(|(index, pokemon)| pokemon.require_name(index).map(str::to_string))
        .collect()
}

// ============================================================================
// STRONGEST
// ============================================================================

/// All records sharing the highest attack, in input order
///
/// Ties are kept: two records at the maximum both come back. An empty roster
/// has no strongest member and yields an empty vector.
pub fn get_strongest_pokemon(records: &[Pokemon]) -> Result<Vec<Pokemon>, RosterError> {
    let attacks = records
        .iter()
        .enumerate()
        .map(|(index, pokemon)| pokemon.require_attack(index))
        .collect::<Result<Vec<f64>, _>>()?;

    let max_attack = match attacks.iter().copied().reduce(f64::max) {
        Some(max) => max,
        None => return Ok(Vec::new()),
    };

    Ok(records
        .iter()
        .zip(&attacks)
        .filter(|(_, attack)| **attack == max_attack)
        .map(|(pokemon, _)| pokemon.clone())
        .collect())
}

// ============================================================================
// SORTING
// ============================================================================

/// A sorted copy of the roster, ascending by name
///
/// Names compare by code point. The sort is stable, so records with equal
/// names keep their input order.
pub fn sort_by_name(records: &[Pokemon]) -> Result<Vec<Pokemon>, RosterError> {
    let mut keyed = records
        .iter()
        .enumerate()
        .map(|(index, pokemon)| Ok((pokemon.require_name(index)?, pokemon)))
        .collect::<Result<Vec<(&str, &Pokemon)>, RosterError>>()?;

    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

    Ok(keyed.into_iter().map(|(_, pokemon)| pokemon.clone()).collect())
}

// ============================================================================
// AGGREGATES
// ============================================================================

/// Arithmetic mean of hp; 0.0 for an empty roster
pub fn calculate_average_hp(records: &[Pokemon]) -> Result<f64, RosterError> {
    if records.is_empty() {
        return Ok(0.0);
    }

    let mut total = 0.0;
    for (index, pokemon) in records.iter().enumerate() {
        total += pokemon.require_hp(index)?;
    }

    Ok(total / records.len() as f64)
}

// ============================================================================
// TESTS
// ============================================================================
