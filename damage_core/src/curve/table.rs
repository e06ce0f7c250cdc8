//! CurveTable - Keyed curves loaded from design data

use super::{CoefficientCurve, CoefficientProvider};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single `(level, value)` key on a curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    pub level: i32,
    pub value: f64,
}

impl CurveKey {
    pub fn new(level: i32, value: f64) -> Self {
        CurveKey { level, value }
    }
}

/// Piecewise-linear curve over integer levels
///
/// Levels before the first key read the first value, levels past the last key
/// read the last value. Keys are kept sorted by level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    keys: Vec<CurveKey>,
}

impl Curve {
    /// Create a curve from keys in strictly increasing level order
    ///
    /// Returns `None` if there are no keys or the levels are not strictly increasing.
    pub fn new(keys: Vec<CurveKey>) -> Option<Self> {
        if keys.is_empty() {
            return None;
        }
        if keys.windows(2).any(|w| w[0].level >= w[1].level) {
            return None;
        }
        Some(Curve { keys })
    }

    /// A curve with the same value at every level
    pub fn constant(value: f64) -> Self {
        Curve {
            keys: vec![CurveKey::new(1, value)],
        }
    }

    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    /// Evaluate the curve at a level
    pub fn eval(&self, level: i32) -> f64 {
        let first = self.keys[0];
        if level <= first.level {
            return first.value;
        }
        let last = self.keys[self.keys.len() - 1];
        if level >= last.level {
            return last.value;
        }

        // First key strictly above the level; guaranteed to exist and be > 0
        let upper_index = self.keys.partition_point(|k| k.level <= level);
        let lower = self.keys[upper_index - 1];
        let upper = self.keys[upper_index];

        let span = f64::from(upper.level) - f64::from(lower.level);
        let t = (f64::from(level) - f64::from(lower.level)) / span;
        lower.value + (upper.value - lower.value) * t
    }
}

/// Named curves, looked up by row name
#[derive(Debug, Clone, Default)]
pub struct CurveTable {
    curves: HashMap<String, Curve>,
}

impl CurveTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Level-independent coefficients used before curve data existed
    pub fn fixed() -> Self {
        let mut table = Self::new();
        table.insert(CoefficientCurve::ArmourPenetration.name(), Curve::constant(0.25));
        table.insert(CoefficientCurve::EffectiveArmour.name(), Curve::constant(0.333));
        table.insert(CoefficientCurve::CriticalHitResistance.name(), Curve::constant(0.25));
        table
    }

    /// Insert or replace a curve
    pub fn insert(&mut self, name: impl Into<String>, curve: Curve) {
        self.curves.insert(name.into(), curve);
    }

    /// Get a curve by name
    pub fn get(&self, name: &str) -> Option<&Curve> {
        self.curves.get(name)
    }

    /// Names of curves that damage resolution needs but this table lacks
    pub fn missing_coefficients(&self) -> Vec<CoefficientCurve> {
        CoefficientCurve::all()
            .iter()
            .copied()
            .filter(|c| !self.curves.contains_key(c.name()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

impl CoefficientProvider for CurveTable {
    fn coefficient(&self, name: &str, level: i32) -> Option<f64> {
        self.get(name).map(|curve| curve.eval(level))
    }
}
