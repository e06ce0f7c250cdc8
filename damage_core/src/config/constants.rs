//! Resolution tuning constants

use serde::{Deserialize, Serialize};

/// Multipliers applied by the block and critical hit stages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolutionConstants {
    /// Damage kept when a hit is blocked (0.5 = halved)
    #[serde(default = "default_block_damage_multiplier")]
    pub block_damage_multiplier: f64,
    /// Multiplier applied before flat crit damage is added
    #[serde(default = "default_critical_damage_multiplier")]
    pub critical_damage_multiplier: f64,
}

impl Default for ResolutionConstants {
    fn default() -> Self {
        ResolutionConstants {
            block_damage_multiplier: 0.5,
            critical_damage_multiplier: 2.0,
        }
    }
}

fn default_block_damage_multiplier() -> f64 {
    0.5
}
fn default_critical_damage_multiplier() -> f64 {
    2.0
}
