//! ResolutionResult - Outcome of damage resolution

use crate::types::DamageType;
use serde::{Deserialize, Serialize};

/// Result of resolving one hit
///
/// `final_damage`, `blocked` and `critical_hit` are the outputs the host
/// consumes; the rest is a breakdown of where damage went.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Damage to add to the target's incoming damage attribute
    pub final_damage: f64,
    /// Whether the target blocked the hit
    pub blocked: bool,
    /// Whether the hit was critical
    pub critical_hit: bool,

    // === Breakdown ===
    /// Damage per type after resistances
    pub damage_taken: Vec<DamageTaken>,
    /// Damage removed by resistances
    pub damage_reduced_by_resists: f64,
    /// Damage removed by blocking
    pub damage_reduced_by_block: f64,
    /// Damage removed by armour (negative when penetration amplified damage)
    pub damage_reduced_by_armour: f64,
    /// Damage added by the critical hit
    pub critical_bonus_damage: f64,
    /// Target armour after penetration
    pub effective_armour: f64,
    /// Crit chance after the target's crit resistance
    pub effective_crit_chance: f64,
}

impl ResolutionResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total raw damage (before mitigation)
    pub fn total_raw_damage(&self) -> f64 {
        self.damage_taken.iter().map(|d| d.raw_amount).sum()
    }

    /// Get damage taken for a specific type
    pub fn damage_of_type(&self, damage_type: DamageType) -> Option<&DamageTaken> {
        self.damage_taken.iter().find(|d| d.damage_type == damage_type)
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{:.0} damage", self.final_damage)];

        if self.damage_reduced_by_resists > 0.0 {
            parts.push(format!("{:.0} resisted", self.damage_reduced_by_resists));
        }

        if self.blocked {
            parts.push(format!("BLOCKED ({:.0})", self.damage_reduced_by_block));
        }

        if self.damage_reduced_by_armour > 0.0 {
            parts.push(format!("{:.0} reduced by armour", self.damage_reduced_by_armour));
        }

        if self.critical_hit {
            parts.push(format!("CRITICAL (+{:.0})", self.critical_bonus_damage));
        }

        parts.join(", ")
    }
}

/// Damage breakdown for a single damage type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageTaken {
    /// The damage type
    pub damage_type: DamageType,
    /// Raw set-by-caller magnitude
    pub raw_amount: f64,
    /// Resistance after clamping to [0, 100]
    pub resistance: f64,
    /// Damage after resistance
    pub final_amount: f64,
}

impl DamageTaken {
    /// Create a new damage taken entry
    pub fn new(damage_type: DamageType, raw: f64, resistance: f64, final_dmg: f64) -> Self {
        DamageTaken {
            damage_type,
            raw_amount: raw,
            resistance,
            final_amount: final_dmg,
        }
    }

    /// Amount removed by resistance
    pub fn resisted_amount(&self) -> f64 {
        self.raw_amount - self.final_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_total() {
        let mut result = ResolutionResult::new();
        result
            .damage_taken
            .push(DamageTaken::new(DamageType::Fire, 50.0, 50.0, 25.0));
        result
            .damage_taken
            .push(DamageTaken::new(DamageType::Arcane, 50.0, 0.0, 50.0));

        assert!((result.total_raw_damage() - 100.0).abs() < f64::EPSILON);
        let fire = result.damage_of_type(DamageType::Fire).unwrap();
        assert!((fire.resisted_amount() - 25.0).abs() < f64::EPSILON);
        assert!(result.damage_of_type(DamageType::Physical).is_none());
    }

    #[test]
    fn test_summary_mentions_block_and_crit() {
        let mut result = ResolutionResult::new();
        result.final_damage = 120.0;
        result.blocked = true;
        result.damage_reduced_by_block = 50.0;
        result.critical_hit = true;
        result.critical_bonus_damage = 70.0;

        let summary = result.summary();
        assert!(summary.contains("120 damage"));
        assert!(summary.contains("BLOCKED"));
        assert!(summary.contains("CRITICAL"));
    }

    #[test]
    fn test_plain_summary() {
        let mut result = ResolutionResult::new();
        result.final_damage = 75.0;
        assert_eq!(result.summary(), "75 damage");
    }
}
