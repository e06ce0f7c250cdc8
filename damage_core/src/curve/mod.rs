//! Coefficient curves - level-indexed scalars that scale mitigation formulas

mod table;

pub use table::{Curve, CurveKey, CurveTable};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that can evaluate a named coefficient curve at a level
///
/// Implementations must be deterministic for a given `(name, level)`.
/// `None` means the curve does not exist.
pub trait CoefficientProvider {
    fn coefficient(&self, name: &str, level: i32) -> Option<f64>;
}

impl<T: CoefficientProvider + ?Sized> CoefficientProvider for &T {
    fn coefficient(&self, name: &str, level: i32) -> Option<f64> {
        (**self).coefficient(name, level)
    }
}

/// The curves read during damage resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoefficientCurve {
    /// How much of the source's armour penetration applies (source level)
    ArmourPenetration,
    /// How much of the target's effective armour mitigates damage (target level)
    EffectiveArmour,
    /// How much of the target's crit resistance offsets crit chance (target level)
    CriticalHitResistance,
}

impl CoefficientCurve {
    pub fn all() -> &'static [CoefficientCurve] {
        &[
            CoefficientCurve::ArmourPenetration,
            CoefficientCurve::EffectiveArmour,
            CoefficientCurve::CriticalHitResistance,
        ]
    }

    /// Row name in a curve table
    pub fn name(&self) -> &'static str {
        match self {
            CoefficientCurve::ArmourPenetration => "ArmourPenetration",
            CoefficientCurve::EffectiveArmour => "EffectiveArmour",
            CoefficientCurve::CriticalHitResistance => "CriticalHitResistance",
        }
    }
}

impl fmt::Display for CoefficientCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
