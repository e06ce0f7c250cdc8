//! Armour - Flat-percentage damage reduction scaled by level curves
//!
//! Formula:
//! - `effective_armour = armour * (100 - penetration * pen_coefficient) / 100`
//! - `damage_taken = damage * (100 - effective_armour * armour_coefficient) / 100`
//!
//! Neither step is floored: penetration beyond 100% of the coefficient turns
//! effective armour negative, which amplifies damage.

use super::constants::PERCENT;
use super::non_negative;

/// Target armour left after the source's armour penetration
///
/// # Arguments
/// * `armour` - The target's armour (negative is clamped to 0)
/// * `penetration` - The source's armour penetration (negative is clamped to 0)
/// * `penetration_coefficient` - Armour penetration curve value at the source's level
pub fn effective_armour(armour: f64, penetration: f64, penetration_coefficient: f64) -> f64 {
    let armour = non_negative(armour, "target armour");
    let penetration = non_negative(penetration, "source armour penetration");
    armour * (PERCENT - penetration * penetration_coefficient) / PERCENT
}

/// Fraction of damage that passes through effective armour
///
/// # Arguments
/// * `effective_armour` - Result of [`effective_armour`]
/// * `armour_coefficient` - Effective armour curve value at the target's level
pub fn armour_multiplier(effective_armour: f64, armour_coefficient: f64) -> f64 {
    (PERCENT - effective_armour * armour_coefficient) / PERCENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_armour() {
        let ea = effective_armour(0.0, 40.0, 0.25);
        assert!((ea - 0.0).abs() < f64::EPSILON);
        assert!((armour_multiplier(ea, 0.333) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_penetration() {
        let ea = effective_armour(60.0, 0.0, 0.25);
        assert!((ea - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_penetration_ignores_armour() {
        // 40 pen * 0.25 = 10% of armour ignored
        let ea = effective_armour(60.0, 40.0, 0.25);
        assert!((ea - 54.0).abs() < 1e-9);
    }

    #[test]
    fn test_armour_reduction() {
        // 60 effective armour * 0.5 = 30% reduction
        let mult = armour_multiplier(60.0, 0.5);
        assert!((mult - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_negative_inputs_clamped() {
        let ea = effective_armour(-30.0, 10.0, 0.25);
        assert!((ea - 0.0).abs() < f64::EPSILON);

        let ea = effective_armour(50.0, -10.0, 0.25);
        assert!((ea - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_more_armour_never_helps_attacker() {
        let low = armour_multiplier(effective_armour(20.0, 10.0, 0.25), 0.333);
        let high = armour_multiplier(effective_armour(80.0, 10.0, 0.25), 0.333);
        assert!(high <= low);
    }
}
