//! Resistance - Per-type damage mitigation
//!
//! Each damage type maps to one resistance attribute on the target. The
//! captured resistance is clamped to [0, 100] and removes that percentage of
//! the type's damage:
//!
//! `damage_taken = damage * (100 - clamp(resistance, 0, 100)) / 100`

use super::constants::{MAX_RESISTANCE, MIN_RESISTANCE, PERCENT};
use crate::combat::ConfigurationError;
use crate::types::{Attribute, DamageType};
use std::collections::HashMap;

/// Fraction of damage that passes through a resistance value
pub fn resistance_multiplier(resistance: f64) -> f64 {
    let clamped = resistance.clamp(MIN_RESISTANCE, MAX_RESISTANCE);
    if clamped != resistance {
        tracing::warn!(
            "resistance {} outside [{}, {}], clamped to {}",
            resistance,
            MIN_RESISTANCE,
            MAX_RESISTANCE,
            clamped
        );
    }
    (PERCENT - clamped) / PERCENT
}

/// Damage type -> resistance attribute lookup
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct ResistanceTable {
    mappings: HashMap<DamageType, Attribute>,
}

impl ResistanceTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Every damage type mapped to its matching resistance
    pub fn standard() -> Self {
        DamageType::all()
            .iter()
            .map(|dt| (*dt, dt.default_resistance()))
            .collect()
    }

    /// Map a damage type to a resistance attribute, returning the previous mapping
    pub fn insert(&mut self, damage_type: DamageType, resistance: Attribute) -> Option<Attribute> {
        self.mappings.insert(damage_type, resistance)
    }

    /// Look up the resistance attribute for a damage type
    pub fn resistance_for(&self, damage_type: DamageType) -> Result<Attribute, ConfigurationError> {
        self.mappings
            .get(&damage_type)
            .copied()
            .ok_or(ConfigurationError::MissingResistance { damage_type })
    }

    /// All resistance attributes referenced by the table
    pub fn resistance_attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.mappings.values().copied()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl FromIterator<(DamageType, Attribute)> for ResistanceTable {
    fn from_iter<T: IntoIterator<Item = (DamageType, Attribute)>>(iter: T) -> Self {
        ResistanceTable {
            mappings: iter.into_iter().collect(),
        }
    }
}
