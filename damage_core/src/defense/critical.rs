//! Critical hit resistance - Reduces the attacker's chance to crit

use super::non_negative;

/// Source crit chance left after the target's crit resistance
///
/// `crit_chance - crit_resistance * coefficient`, with both inputs clamped to
/// be non-negative. The result may be negative, which means no crit can land.
pub fn effective_crit_chance(crit_chance: f64, crit_resistance: f64, coefficient: f64) -> f64 {
    let crit_chance = non_negative(crit_chance, "source critical hit chance");
    let crit_resistance = non_negative(crit_resistance, "target critical hit resistance");
    crit_chance - crit_resistance * coefficient
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_resistance() {
        assert!((effective_crit_chance(30.0, 0.0, 0.25) - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resistance_scaled_by_coefficient() {
        // 40 resistance * 0.25 = 10 chance removed
        assert!((effective_crit_chance(30.0, 40.0, 0.25) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_can_go_negative() {
        assert!(effective_crit_chance(5.0, 100.0, 0.25) < 0.0);
    }

    #[test]
    fn test_negative_chance_clamped() {
        assert!((effective_crit_chance(-20.0, 0.0, 0.25) - 0.0).abs() < f64::EPSILON);
    }
}
