//! DamageTypeMagnitude - Raw per-type magnitudes attached by the triggering ability

use crate::combat::ConfigurationError;
use crate::types::DamageType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw damage per type, set by the ability that creates the effect
///
/// Unset types read as 0. A type that was explicitly set (even to 0) counts as
/// present and takes part in resistance aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DamageTypeMagnitude {
    magnitudes: BTreeMap<DamageType, f64>,
}

impl DamageTypeMagnitude {
    /// Create an empty magnitude set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(type, amount)` pairs; later pairs overwrite earlier ones
    pub fn from_pairs(pairs: impl IntoIterator<Item = (DamageType, f64)>) -> Self {
        DamageTypeMagnitude {
            magnitudes: pairs.into_iter().collect(),
        }
    }

    /// Builder form of [`set`](Self::set)
    pub fn with(mut self, damage_type: DamageType, amount: f64) -> Self {
        self.set(damage_type, amount);
        self
    }

    /// Set the magnitude for a damage type
    pub fn set(&mut self, damage_type: DamageType, amount: f64) {
        self.magnitudes.insert(damage_type, amount);
    }

    /// Set a magnitude by identifier (`Damage.Fire` or `Fire`)
    pub fn set_by_identifier(&mut self, identifier: &str, amount: f64) -> Result<(), ConfigurationError> {
        let damage_type = identifier
            .parse::<DamageType>()
            .map_err(|_| ConfigurationError::UnknownDamageType {
                identifier: identifier.to_string(),
            })?;
        self.set(damage_type, amount);
        Ok(())
    }

    /// Get the magnitude for a damage type (0 when unset)
    pub fn get(&self, damage_type: DamageType) -> f64 {
        self.magnitudes.get(&damage_type).copied().unwrap_or(0.0)
    }

    /// Check whether a type was set
    pub fn contains(&self, damage_type: DamageType) -> bool {
        self.magnitudes.contains_key(&damage_type)
    }

    /// Iterate over the set types in a stable order
    pub fn iter(&self) -> impl Iterator<Item = (DamageType, f64)> + '_ {
        self.magnitudes.iter().map(|(dt, amount)| (*dt, *amount))
    }

    /// Sum of all raw magnitudes
    pub fn total(&self) -> f64 {
        self.magnitudes.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }
}

impl FromIterator<(DamageType, f64)> for DamageTypeMagnitude {
    fn from_iter<T: IntoIterator<Item = (DamageType, f64)>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}
