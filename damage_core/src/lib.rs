//! damage_core - Damage resolution for gameplay effects
//!
//! This library provides:
//! - DamageTypeMagnitude: Raw per-type damage set by the triggering ability
//! - AttributeSnapshot: Source/target attributes captured at application time
//! - CurveTable: Level-indexed coefficients scaling armour and crit resistance
//! - DamageResolver: Resistances -> block -> armour -> critical hit
//! - execute_damage: Capture, resolve, and emit an incoming damage modifier

pub mod combat;
pub mod config;
pub mod curve;
pub mod damage;
pub mod defense;
pub mod prelude;
pub mod snapshot;
pub mod types;

// Re-export core types for convenience
pub use combat::{
    execute_damage, AttributeModifier, ConfigurationError, DamageEffectContext, DamageEffectSpec,
    DamageResolver, DamageTaken, EffectContextSink, FixedRolls, PercentRoll,
    ResolutionResult,
};
pub use config::{default_resolver, ConfigError, DamageConfig, ResolutionConstants};
pub use curve::{CoefficientCurve, CoefficientProvider, Curve, CurveKey, CurveTable};
pub use damage::DamageTypeMagnitude;
pub use defense::ResistanceTable;
pub use snapshot::{AttributeSnapshot, AttributeSource};
pub use types::{Attribute, CaptureSide, DamageType};
