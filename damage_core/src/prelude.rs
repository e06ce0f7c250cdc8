//! Prelude module for convenient imports
//!
//! ```rust
//! use damage_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Attribute, CaptureSide, DamageType};
pub use crate::damage::DamageTypeMagnitude;
pub use crate::snapshot::{AttributeSnapshot, AttributeSource};

// Curves and resistances
pub use crate::curve::{CoefficientCurve, CoefficientProvider, CurveTable};
pub use crate::defense::ResistanceTable;

// Resolution
pub use crate::combat::{
    execute_damage, AttributeModifier, ConfigurationError, DamageEffectContext, DamageEffectSpec,
    DamageResolver, EffectContextSink, FixedRolls, PercentRoll, ResolutionResult,
};

// Config
pub use crate::config::{default_resolver, DamageConfig, ResolutionConstants};
