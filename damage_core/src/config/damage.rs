//! Damage data loading - constants, resistance mappings and coefficient curves

use super::{ConfigError, ResolutionConstants};
use crate::combat::DamageResolver;
use crate::curve::{Curve, CurveKey, CurveTable};
use crate::defense::ResistanceTable;
use crate::types::{Attribute, DamageType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Contents of a damage config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DamageConfig {
    #[serde(default)]
    pub constants: ResolutionConstants,
    #[serde(default)]
    pub resistances: Vec<ResistanceMapping>,
    #[serde(default)]
    pub curves: Vec<CurveDefinition>,
}

/// One damage type -> resistance attribute row
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResistanceMapping {
    pub damage_type: DamageType,
    pub attribute: Attribute,
}

/// A named curve as written in the config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveDefinition {
    pub name: String,
    pub keys: Vec<CurveKey>,
}

impl DamageConfig {
    /// Validate and build the resistance table
    pub fn resistance_table(&self) -> Result<ResistanceTable, ConfigError> {
        let mut table = ResistanceTable::new();
        for mapping in &self.resistances {
            if !mapping.attribute.is_resistance() {
                return Err(ConfigError::ValidationError(format!(
                    "{} is mapped to {}, which is not a resistance attribute",
                    mapping.damage_type, mapping.attribute
                )));
            }
            if table.insert(mapping.damage_type, mapping.attribute).is_some() {
                return Err(ConfigError::ValidationError(format!(
                    "{} is mapped more than once",
                    mapping.damage_type
                )));
            }
        }

        for damage_type in DamageType::all() {
            if table.resistance_for(*damage_type).is_err() {
                tracing::warn!("no resistance mapped for {}; hits of that type will fail", damage_type);
            }
        }

        Ok(table)
    }

    /// Validate and build the curve table
    pub fn curve_table(&self) -> Result<CurveTable, ConfigError> {
        let mut table = CurveTable::new();
        let mut seen = HashSet::new();

        for definition in &self.curves {
            if !seen.insert(definition.name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "curve '{}' is defined more than once",
                    definition.name
                )));
            }
            let curve = Curve::new(definition.keys.clone()).ok_or_else(|| {
                ConfigError::ValidationError(format!(
                    "curve '{}' needs at least one key, in strictly increasing level order",
                    definition.name
                ))
            })?;
            table.insert(definition.name.clone(), curve);
        }

        let missing = table.missing_coefficients();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|c| c.name()).collect();
            return Err(ConfigError::ValidationError(format!(
                "missing coefficient curves: {}",
                names.join(", ")
            )));
        }

        Ok(table)
    }

    /// Validate everything and build a resolver
    pub fn build(&self) -> Result<DamageResolver<CurveTable>, ConfigError> {
        let resolver = DamageResolver::new(self.curve_table()?, self.resistance_table()?)
            .with_constants(self.constants);
        Ok(resolver)
    }
}

/// Load a damage config from a TOML file
pub fn load_damage_config(path: &Path) -> Result<DamageConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_damage_config(&content)
}

/// Load a damage config from a TOML string
pub fn parse_damage_config(content: &str) -> Result<DamageConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Resolver built from the bundled damage data
pub fn default_resolver() -> DamageResolver<CurveTable> {
    resolver_or_fixed(include_str!("../../config/damage.toml"))
}

fn resolver_or_fixed(content: &str) -> DamageResolver<CurveTable> {
    parse_damage_config(content)
        .and_then(|config| config.build())
        .unwrap_or_else(|e| {
            tracing::error!("bundled damage config is invalid ({}), using fixed coefficients", e);
            DamageResolver::new(CurveTable::fixed(), ResistanceTable::standard())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CoefficientProvider;

    const CURVES: &str = r#"
[[curves]]
name = "ArmourPenetration"
keys = [{ level = 1, value = 0.25 }]

[[curves]]
name = "EffectiveArmour"
keys = [{ level = 1, value = 0.333 }, { level = 11, value = 0.233 }]

[[curves]]
name = "CriticalHitResistance"
keys = [{ level = 1, value = 0.25 }]
"#;

    #[test]
    fn test_parse_full_config() {
        let toml = format!(
            r#"
[constants]
block_damage_multiplier = 0.4

[[resistances]]
damage_type = "fire"
attribute = "fire_resistance"
{}"#,
            CURVES
        );

        let config = parse_damage_config(&toml).unwrap();
        let resolver = config.build().unwrap();

        assert!((resolver.constants().block_damage_multiplier - 0.4).abs() < f64::EPSILON);
        assert!((resolver.constants().critical_damage_multiplier - 2.0).abs() < f64::EPSILON);
        assert_eq!(
            resolver.resistances().resistance_for(DamageType::Fire).unwrap(),
            Attribute::FireResistance
        );
        assert!(resolver.resistances().resistance_for(DamageType::Arcane).is_err());

        let mid = resolver.curves().coefficient("EffectiveArmour", 6).unwrap();
        assert!((mid - 0.283).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_resistance_attribute() {
        let toml = format!(
            r#"
[[resistances]]
damage_type = "fire"
attribute = "armour"
{}"#,
            CURVES
        );
        let config = parse_damage_config(&toml).unwrap();
        assert!(matches!(config.build(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_duplicate_mapping() {
        let toml = r#"
[[resistances]]
damage_type = "fire"
attribute = "fire_resistance"

[[resistances]]
damage_type = "fire"
attribute = "arcane_resistance"
"#;
        let config = parse_damage_config(toml).unwrap();
        assert!(matches!(config.resistance_table(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_missing_coefficient_curve() {
        let toml = r#"
[[curves]]
name = "ArmourPenetration"
keys = [{ level = 1, value = 0.25 }]
"#;
        let config = parse_damage_config(toml).unwrap();
        let err = config.curve_table().unwrap_err();
        assert!(err.to_string().contains("EffectiveArmour"));
        assert!(err.to_string().contains("CriticalHitResistance"));
    }

    #[test]
    fn test_rejects_unsorted_keys() {
        let toml = r#"
[[curves]]
name = "ArmourPenetration"
keys = [{ level = 10, value = 0.2 }, { level = 1, value = 0.25 }]
"#;
        let config = parse_damage_config(toml).unwrap();
        assert!(matches!(config.curve_table(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_unknown_damage_type_is_parse_error() {
        let toml = r#"
[[resistances]]
damage_type = "cold"
attribute = "fire_resistance"
"#;
        assert!(matches!(parse_damage_config(toml), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_bundled_config_is_valid() {
        let toml = include_str!("../../config/damage.toml");
        let config = parse_damage_config(toml).unwrap();
        let resolver = config.build().unwrap();

        assert_eq!(resolver.resistances().len(), 4);
        assert!(resolver.curves().missing_coefficients().is_empty());
        assert_eq!(resolver.curves().coefficient("ArmourPenetration", 1), Some(0.25));
        assert_eq!(resolver.curves().coefficient("EffectiveArmour", 80), Some(0.085));
    }

    #[test]
    fn test_load_bundled_config_from_disk() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/damage.toml");
        let config = load_damage_config(&path).unwrap();
        assert_eq!(config.resistances.len(), 4);
        assert_eq!(config.curves.len(), 3);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/no_such_file.toml");
        let err = load_damage_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
        assert!(err.to_string().starts_with("cannot read damage config"));
    }

    #[test]
    fn test_invalid_bundled_data_falls_back_to_fixed() {
        let resolver = resolver_or_fixed(CURVES.replace("EffectiveArmour", "Armour").as_str());
        assert_eq!(resolver.curves().coefficient("EffectiveArmour", 40), Some(0.333));
        assert_eq!(resolver.resistances().len(), 4);
    }

    #[test]
    fn test_default_resolver_uses_bundled_curves() {
        let resolver = default_resolver();
        // Bundled curve is 0.20 at level 10; fixed fallback would be 0.25
        assert_eq!(resolver.curves().coefficient("ArmourPenetration", 10), Some(0.20));
    }
}
