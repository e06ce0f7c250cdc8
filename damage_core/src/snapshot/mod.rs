//! Attribute snapshot - Source/target values captured before resolution

mod capture;

pub use capture::AttributeSource;

use crate::types::{Attribute, DamageType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute values read from the source and target when an effect is applied
///
/// Captured once per resolution and never mutated during it. Values are stored
/// as captured; range clamping happens where each value is consumed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeSnapshot {
    // === Target ===
    pub target_armour: f64,
    pub target_block_chance: f64,
    pub target_critical_hit_resistance: f64,
    /// Resistance values keyed by resistance attribute
    #[serde(default)]
    pub target_resistances: BTreeMap<Attribute, f64>,

    // === Source ===
    pub source_armour_penetration: f64,
    pub source_critical_hit_chance: f64,
    /// Flat damage added on a critical hit
    pub source_critical_hit_damage: f64,
}

impl AttributeSnapshot {
    /// Create a snapshot with every value at 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a target resistance attribute (0 when not captured)
    pub fn resistance(&self, attribute: Attribute) -> f64 {
        self.target_resistances.get(&attribute).copied().unwrap_or(0.0)
    }

    /// Set a target resistance attribute
    pub fn set_resistance(&mut self, attribute: Attribute, value: f64) {
        self.target_resistances.insert(attribute, value);
    }

    /// Builder form of [`set_resistance`](Self::set_resistance) using the
    /// damage type's conventional resistance attribute
    pub fn with_resistance(mut self, damage_type: DamageType, value: f64) -> Self {
        self.set_resistance(damage_type.default_resistance(), value);
        self
    }

    pub fn with_target_armour(mut self, value: f64) -> Self {
        self.target_armour = value;
        self
    }

    pub fn with_target_block_chance(mut self, value: f64) -> Self {
        self.target_block_chance = value;
        self
    }

    pub fn with_target_critical_hit_resistance(mut self, value: f64) -> Self {
        self.target_critical_hit_resistance = value;
        self
    }

    pub fn with_source_armour_penetration(mut self, value: f64) -> Self {
        self.source_armour_penetration = value;
        self
    }

    pub fn with_source_critical_hit_chance(mut self, value: f64) -> Self {
        self.source_critical_hit_chance = value;
        self
    }

    pub fn with_source_critical_hit_damage(mut self, value: f64) -> Self {
        self.source_critical_hit_damage = value;
        self
    }
}
