//! Damage input - set-by-caller magnitudes per damage type

mod magnitude;

pub use magnitude::DamageTypeMagnitude;
