//! Scenario files - What to simulate

use damage_core::{Attribute, DamageEffectSpec, DamageTypeMagnitude};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// A repeated hit from one source against one target
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_hits")]
    pub hits: u32,
    #[serde(default = "default_level")]
    pub source_level: i32,
    #[serde(default = "default_level")]
    pub target_level: i32,
    /// Damage identifier -> raw magnitude
    pub magnitudes: BTreeMap<String, f64>,
    /// Attribute identifier -> value
    #[serde(default)]
    pub source: BTreeMap<String, f64>,
    #[serde(default)]
    pub target: BTreeMap<String, f64>,
}

fn default_seed() -> u64 {
    42
}
fn default_hits() -> u32 {
    1000
}
fn default_level() -> i32 {
    1
}

impl Scenario {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Effect spec for one hit
    pub fn effect_spec(&self) -> anyhow::Result<DamageEffectSpec> {
        let mut magnitudes = DamageTypeMagnitude::new();
        for (identifier, amount) in &self.magnitudes {
            magnitudes.set_by_identifier(identifier, *amount)?;
        }
        Ok(DamageEffectSpec::new(magnitudes, self.source_level, self.target_level))
    }

    pub fn source_attributes(&self) -> anyhow::Result<HashMap<Attribute, f64>> {
        parse_attributes(&self.source)
    }

    pub fn target_attributes(&self) -> anyhow::Result<HashMap<Attribute, f64>> {
        parse_attributes(&self.target)
    }
}

fn parse_attributes(values: &BTreeMap<String, f64>) -> anyhow::Result<HashMap<Attribute, f64>> {
    values
        .iter()
        .map(|(identifier, value)| Ok((identifier.parse::<Attribute>()?, *value)))
        .collect()
}
