//! Core identifiers: damage types and attributes
//!
//! Each identifier has a dotted name (e.g. `Damage.Fire`) matching the keys a
//! host attaches to effect instances, and parses back from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Damage type carried by a set-by-caller magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Fire,
    Lightning,
    Arcane,
    Physical,
}

impl DamageType {
    /// Get all damage types
    pub fn all() -> &'static [DamageType] {
        &[
            DamageType::Fire,
            DamageType::Lightning,
            DamageType::Arcane,
            DamageType::Physical,
        ]
    }

    /// Dotted identifier, e.g. `Damage.Fire`
    pub fn identifier(&self) -> &'static str {
        match self {
            DamageType::Fire => "Damage.Fire",
            DamageType::Lightning => "Damage.Lightning",
            DamageType::Arcane => "Damage.Arcane",
            DamageType::Physical => "Damage.Physical",
        }
    }

    /// The resistance attribute conventionally paired with this type
    pub fn default_resistance(&self) -> Attribute {
        match self {
            DamageType::Fire => Attribute::FireResistance,
            DamageType::Lightning => Attribute::LightningResistance,
            DamageType::Arcane => Attribute::ArcaneResistance,
            DamageType::Physical => Attribute::PhysicalResistance,
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for DamageType {
    type Err = UnknownIdentifier;

    /// Accepts the dotted identifier (`Damage.Fire`) or the bare name (`Fire`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DamageType::all()
            .iter()
            .copied()
            .find(|dt| {
                let id = dt.identifier();
                id == s || id.trim_start_matches("Damage.").eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| UnknownIdentifier(s.to_string()))
    }
}

/// Which side of an effect an attribute is captured from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureSide {
    Source,
    Target,
}

impl fmt::Display for CaptureSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureSide::Source => f.write_str("source"),
            CaptureSide::Target => f.write_str("target"),
        }
    }
}

/// Named numeric stat on an actor that the damage pipeline reads or writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    // Secondary
    Armour,
    ArmourPenetration,
    BlockChance,
    CriticalHitChance,
    CriticalHitDamage,
    CriticalHitResistance,
    // Resistances
    FireResistance,
    LightningResistance,
    ArcaneResistance,
    PhysicalResistance,
    // Meta
    IncomingDamage,
}

impl Attribute {
    /// Get all attributes
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Armour,
            Attribute::ArmourPenetration,
            Attribute::BlockChance,
            Attribute::CriticalHitChance,
            Attribute::CriticalHitDamage,
            Attribute::CriticalHitResistance,
            Attribute::FireResistance,
            Attribute::LightningResistance,
            Attribute::ArcaneResistance,
            Attribute::PhysicalResistance,
            Attribute::IncomingDamage,
        ]
    }

    /// Dotted identifier, e.g. `Attributes.Secondary.Armour`
    pub fn identifier(&self) -> &'static str {
        match self {
            Attribute::Armour => "Attributes.Secondary.Armour",
            Attribute::ArmourPenetration => "Attributes.Secondary.ArmourPenetration",
            Attribute::BlockChance => "Attributes.Secondary.BlockChance",
            Attribute::CriticalHitChance => "Attributes.Secondary.CriticalHitChance",
            Attribute::CriticalHitDamage => "Attributes.Secondary.CriticalHitDamage",
            Attribute::CriticalHitResistance => "Attributes.Secondary.CriticalHitResistance",
            Attribute::FireResistance => "Attributes.Resistances.Fire",
            Attribute::LightningResistance => "Attributes.Resistances.Lightning",
            Attribute::ArcaneResistance => "Attributes.Resistances.Arcane",
            Attribute::PhysicalResistance => "Attributes.Resistances.Physical",
            Attribute::IncomingDamage => "Attributes.Meta.IncomingDamage",
        }
    }

    /// Check if this is a per-type resistance attribute
    pub fn is_resistance(&self) -> bool {
        matches!(
            self,
            Attribute::FireResistance
                | Attribute::LightningResistance
                | Attribute::ArcaneResistance
                | Attribute::PhysicalResistance
        )
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Attribute {
    type Err = UnknownIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::all()
            .iter()
            .copied()
            .find(|a| a.identifier() == s)
            .ok_or_else(|| UnknownIdentifier(s.to_string()))
    }
}

/// An identifier that names no known damage type or attribute
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown identifier: {0}")]
pub struct UnknownIdentifier(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_type_parses_identifier_and_bare_name() {
        assert_eq!("Damage.Fire".parse::<DamageType>().unwrap(), DamageType::Fire);
        assert_eq!("arcane".parse::<DamageType>().unwrap(), DamageType::Arcane);
        assert_eq!("Physical".parse::<DamageType>().unwrap(), DamageType::Physical);
        assert!("Damage.Cold".parse::<DamageType>().is_err());
    }

    #[test]
    fn test_default_resistances_are_resistances() {
        for dt in DamageType::all() {
            assert!(dt.default_resistance().is_resistance());
        }
        assert!(!Attribute::Armour.is_resistance());
        assert!(!Attribute::IncomingDamage.is_resistance());
    }

    #[test]
    fn test_attribute_identifier_round_trip() {
        for attr in Attribute::all() {
            assert_eq!(attr.identifier().parse::<Attribute>().unwrap(), *attr);
        }
    }
}
