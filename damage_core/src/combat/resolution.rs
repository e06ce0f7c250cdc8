//! Damage resolution - Magnitudes + snapshot + curves -> final damage

use super::error::ConfigurationError;
use super::result::{DamageTaken, ResolutionResult};
use super::roll::PercentRoll;
use crate::config::ResolutionConstants;
use crate::curve::{CoefficientCurve, CoefficientProvider};
use crate::damage::DamageTypeMagnitude;
use crate::defense::constants::{MAX_RESISTANCE, MIN_RESISTANCE};
use crate::defense::{
    armour_multiplier, effective_armour, effective_crit_chance, non_negative, resistance_multiplier,
    ResistanceTable,
};
use crate::snapshot::AttributeSnapshot;

/// Resolves hits against captured attributes
///
/// Holds the read-only data shared by every resolution: coefficient curves,
/// the resistance table and tuning constants. Safe to share across threads
/// when the curve provider is.
#[derive(Debug, Clone)]
pub struct DamageResolver<C> {
    curves: C,
    resistances: ResistanceTable,
    constants: ResolutionConstants,
}

impl<C: CoefficientProvider> DamageResolver<C> {
    /// Create a resolver with default constants
    pub fn new(curves: C, resistances: ResistanceTable) -> Self {
        DamageResolver {
            curves,
            resistances,
            constants: ResolutionConstants::default(),
        }
    }

    /// Replace the tuning constants
    pub fn with_constants(mut self, constants: ResolutionConstants) -> Self {
        self.constants = constants;
        self
    }

    pub fn curves(&self) -> &C {
        &self.curves
    }

    pub fn resistances(&self) -> &ResistanceTable {
        &self.resistances
    }

    pub fn constants(&self) -> &ResolutionConstants {
        &self.constants
    }

    /// Resolve a hit using the thread-local RNG
    pub fn resolve(
        &self,
        magnitudes: &DamageTypeMagnitude,
        snapshot: &AttributeSnapshot,
        source_level: i32,
        target_level: i32,
    ) -> Result<ResolutionResult, ConfigurationError> {
        let mut rng = rand::thread_rng();
        self.resolve_with_rolls(magnitudes, snapshot, source_level, target_level, &mut rng)
    }

    /// Resolve a hit with a provided random source (for deterministic testing)
    ///
    /// Stages run in a fixed order, each consuming the previous stage's damage:
    /// 1. Per-type resistances, summed
    /// 2. Block roll (first draw): blocked hits are scaled by the block multiplier
    /// 3. Armour, reduced by the source's armour penetration
    /// 4. Critical roll (second draw): crits are multiplied and gain flat bonus damage
    ///
    /// Both rolls are always drawn. A roll succeeds when the draw is strictly
    /// below the chance. Final damage is not floored.
    pub fn resolve_with_rolls(
        &self,
        magnitudes: &DamageTypeMagnitude,
        snapshot: &AttributeSnapshot,
        source_level: i32,
        target_level: i32,
        rolls: &mut impl PercentRoll,
    ) -> Result<ResolutionResult, ConfigurationError> {
        // Fail on missing data before any roll is consumed
        let penetration_coefficient =
            self.coefficient(CoefficientCurve::ArmourPenetration, source_level)?;
        let armour_coefficient = self.coefficient(CoefficientCurve::EffectiveArmour, target_level)?;
        let crit_resistance_coefficient =
            self.coefficient(CoefficientCurve::CriticalHitResistance, target_level)?;

        let mut result = ResolutionResult::new();

        // Step 1: Resistances per damage type
        let mut damage = 0.0;
        for (damage_type, raw) in magnitudes.iter() {
            let attribute = self.resistances.resistance_for(damage_type)?;
            let resistance = snapshot.resistance(attribute);
            let after_resist = raw * resistance_multiplier(resistance);

            result.damage_taken.push(DamageTaken::new(
                damage_type,
                raw,
                resistance.clamp(MIN_RESISTANCE, MAX_RESISTANCE),
                after_resist,
            ));
            damage += after_resist;
        }
        result.damage_reduced_by_resists = magnitudes.total() - damage;

        // Step 2: Block
        let block_chance = non_negative(snapshot.target_block_chance, "target block chance");
        result.blocked = f64::from(rolls.roll_percent()) < block_chance;
        if result.blocked {
            let before = damage;
            damage *= self.constants.block_damage_multiplier;
            result.damage_reduced_by_block = before - damage;
        }

        // Step 3: Armour
        result.effective_armour = effective_armour(
            snapshot.target_armour,
            snapshot.source_armour_penetration,
            penetration_coefficient,
        );
        let before = damage;
        damage *= armour_multiplier(result.effective_armour, armour_coefficient);
        result.damage_reduced_by_armour = before - damage;

        // Step 4: Critical hit
        result.effective_crit_chance = effective_crit_chance(
            snapshot.source_critical_hit_chance,
            snapshot.target_critical_hit_resistance,
            crit_resistance_coefficient,
        );
        result.critical_hit = f64::from(rolls.roll_percent()) < result.effective_crit_chance;
        if result.critical_hit {
            let bonus = non_negative(snapshot.source_critical_hit_damage, "source critical hit damage");
            let before = damage;
            damage = damage * self.constants.critical_damage_multiplier + bonus;
            result.critical_bonus_damage = damage - before;
        }

        if damage < 0.0 {
            tracing::warn!("resolved damage is negative ({}); leaving it to the host to floor", damage);
        }
        result.final_damage = damage;

        tracing::debug!(
            "resolved hit (source lvl {}, target lvl {}): {}",
            source_level,
            target_level,
            result.summary()
        );

        Ok(result)
    }

    fn coefficient(&self, curve: CoefficientCurve, level: i32) -> Result<f64, ConfigurationError> {
        self.curves
            .coefficient(curve.name(), level)
            .ok_or_else(|| ConfigurationError::MissingCurve {
                name: curve.name().to_string(),
            })
    }
}
