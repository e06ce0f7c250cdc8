//! Configuration errors raised while resolving damage

use crate::types::{CaptureSide, DamageType};
use thiserror::Error;

/// A resolution could not run because its inputs or data are incomplete
///
/// These are fatal to the resolution they occur in and never default silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("No coefficient curve named '{name}'")]
    MissingCurve { name: String },
    #[error("No resistance attribute mapped for {damage_type}")]
    MissingResistance { damage_type: DamageType },
    #[error("No {side} attributes to capture")]
    MissingSnapshot { side: CaptureSide },
    #[error("Unknown damage type identifier '{identifier}'")]
    UnknownDamageType { identifier: String },
}
