//! Hit simulation - Repeated resolutions and their statistics

use damage_core::{
    execute_damage, AttributeSource, CoefficientProvider, ConfigurationError, DamageEffectContext,
    DamageEffectSpec, DamageResolver,
};
use rand::Rng;
use serde::Serialize;

/// Statistics from resolving the same hit many times
#[derive(Debug, Clone, Serialize)]
pub struct HitSimulation {
    pub hit_count: u32,
    pub total_damage: f64,
    pub block_count: u32,
    pub crit_count: u32,
    pub min_damage: f64,
    pub max_damage: f64,
}

impl HitSimulation {
    /// Resolve `hits` applications of `spec` from `source` against `target`
    pub fn run<C: CoefficientProvider>(
        resolver: &DamageResolver<C>,
        spec: &DamageEffectSpec,
        source: &dyn AttributeSource,
        target: &dyn AttributeSource,
        hits: u32,
        rng: &mut impl Rng,
    ) -> Result<Self, ConfigurationError> {
        let mut result = HitSimulation {
            hit_count: 0,
            total_damage: 0.0,
            block_count: 0,
            crit_count: 0,
            min_damage: f64::INFINITY,
            max_damage: f64::NEG_INFINITY,
        };

        for _ in 0..hits {
            let mut context = DamageEffectContext::new();
            let (modifier, _) =
                execute_damage(resolver, spec, Some(source), Some(target), &mut context, rng)?;

            result.hit_count += 1;
            result.total_damage += modifier.magnitude;
            result.min_damage = result.min_damage.min(modifier.magnitude);
            result.max_damage = result.max_damage.max(modifier.magnitude);
            if context.is_blocked() {
                result.block_count += 1;
            }
            if context.is_critical_hit() {
                result.crit_count += 1;
            }
        }

        if result.hit_count == 0 {
            result.min_damage = 0.0;
            result.max_damage = 0.0;
        }

        Ok(result)
    }

    /// Calculate average damage per hit
    pub fn avg_damage(&self) -> f64 {
        if self.hit_count > 0 {
            self.total_damage / self.hit_count as f64
        } else {
            0.0
        }
    }

    /// Calculate block rate
    pub fn block_rate(&self) -> f64 {
        if self.hit_count > 0 {
            self.block_count as f64 / self.hit_count as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Calculate crit rate
    pub fn crit_rate(&self) -> f64 {
        if self.hit_count > 0 {
            self.crit_count as f64 / self.hit_count as f64 * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use damage_core::{default_resolver, Attribute, DamageType, DamageTypeMagnitude};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    #[test]
    fn test_hit_simulation() {
        let resolver = default_resolver();
        let spec = DamageEffectSpec::new(
            DamageTypeMagnitude::new().with(DamageType::Physical, 50.0),
            1,
            1,
        );
        let source: HashMap<Attribute, f64> =
            [(Attribute::CriticalHitChance, 30.0)].into_iter().collect();
        let target: HashMap<Attribute, f64> = [(Attribute::BlockChance, 30.0)].into_iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let result = HitSimulation::run(&resolver, &spec, &source, &target, 2000, &mut rng).unwrap();

        assert_eq!(result.hit_count, 2000);
        assert!(result.block_count > 0);
        assert!(result.crit_count > 0);
        // Blocked non-crit: 25, unblocked crit: 100
        assert!((result.min_damage - 25.0).abs() < 1e-9);
        assert!((result.max_damage - 100.0).abs() < 1e-9);
        assert!(result.avg_damage() > 25.0 && result.avg_damage() < 100.0);
        // Strict draws: 29% nominal for both
        assert!(result.block_rate() > 25.0 && result.block_rate() < 33.0);
        assert!(result.crit_rate() > 25.0 && result.crit_rate() < 33.0);
    }

    #[test]
    fn test_zero_hits() {
        let resolver = default_resolver();
        let spec = DamageEffectSpec::default();
        let actor: HashMap<Attribute, f64> = HashMap::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let result = HitSimulation::run(&resolver, &spec, &actor, &actor, 0, &mut rng).unwrap();
        assert_eq!(result.hit_count, 0);
        assert!((result.avg_damage() - 0.0).abs() < f64::EPSILON);
        assert!((result.min_damage - 0.0).abs() < f64::EPSILON);
    }
}
