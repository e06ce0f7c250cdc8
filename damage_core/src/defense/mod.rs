//! Defense system - Resistances, Armour, Critical hit resistance

mod armour;
mod critical;
mod resistance;

pub use armour::{armour_multiplier, effective_armour};
pub use critical::effective_crit_chance;
pub use resistance::{resistance_multiplier, ResistanceTable};

/// Defense calculation constants
pub mod constants {
    /// Maximum resistance (100% = immunity to that damage type)
    pub const MAX_RESISTANCE: f64 = 100.0;

    /// Minimum resistance (negative resistance is clamped away)
    pub const MIN_RESISTANCE: f64 = 0.0;

    /// Divisor turning percentage values into fractions
    pub const PERCENT: f64 = 100.0;
}

/// Clamp a value that must not be negative, logging when it was
pub(crate) fn non_negative(value: f64, what: &str) -> f64 {
    if value < 0.0 {
        tracing::warn!("{} was negative ({}), clamping to 0", what, value);
        0.0
    } else {
        value
    }
}
