//! Damage data loaded from TOML

mod constants;
mod damage;

pub use constants::ResolutionConstants;
pub use damage::{
    default_resolver, load_damage_config, parse_damage_config, CurveDefinition, DamageConfig,
    ResistanceMapping,
};

use thiserror::Error;

/// Damage data could not be loaded or failed validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read damage config: {0}")]
    IoError(#[from] std::io::Error),
    #[error("malformed damage config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid damage config: {0}")]
    ValidationError(String),
}
