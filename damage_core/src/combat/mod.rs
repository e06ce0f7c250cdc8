//! Combat resolution - Turn raw magnitudes into a final damage value

mod context;
mod error;
mod execution;
mod resolution;
mod result;
mod roll;

pub use context::{DamageEffectContext, EffectContextSink};
pub use error::ConfigurationError;
pub use execution::{execute_damage, AttributeModifier, DamageEffectSpec};
pub use resolution::DamageResolver;
pub use result::{DamageTaken, ResolutionResult};
pub use roll::{FixedRolls, PercentRoll, ROLL_MAX, ROLL_MIN};
