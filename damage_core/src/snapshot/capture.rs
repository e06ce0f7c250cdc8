//! Capture - Reading attribute values from the host at application time

use super::AttributeSnapshot;
use crate::combat::ConfigurationError;
use crate::defense::ResistanceTable;
use crate::types::{Attribute, CaptureSide};
use std::collections::{BTreeMap, HashMap};

/// Host-side reader for an actor's current attribute values
pub trait AttributeSource {
    /// Current value of an attribute, or `None` if the actor does not have it
    fn attribute(&self, attribute: Attribute) -> Option<f64>;
}

impl AttributeSource for HashMap<Attribute, f64> {
    fn attribute(&self, attribute: Attribute) -> Option<f64> {
        self.get(&attribute).copied()
    }
}

impl AttributeSource for BTreeMap<Attribute, f64> {
    fn attribute(&self, attribute: Attribute) -> Option<f64> {
        self.get(&attribute).copied()
    }
}

fn read(actor: &dyn AttributeSource, attribute: Attribute, side: CaptureSide) -> f64 {
    actor.attribute(attribute).unwrap_or_else(|| {
        tracing::debug!("{} has no {}, capturing 0", side, attribute);
        0.0
    })
}

impl AttributeSnapshot {
    /// Capture every attribute damage resolution reads
    ///
    /// An absent source or target is a configuration error. An attribute the
    /// actor does not carry is captured as 0. Resistances are captured for each
    /// attribute the table references.
    pub fn capture(
        source: Option<&dyn AttributeSource>,
        target: Option<&dyn AttributeSource>,
        resistances: &ResistanceTable,
    ) -> Result<Self, ConfigurationError> {
        let source = source.ok_or(ConfigurationError::MissingSnapshot {
            side: CaptureSide::Source,
        })?;
        let target = target.ok_or(ConfigurationError::MissingSnapshot {
            side: CaptureSide::Target,
        })?;

        let target_resistances = resistances
            .resistance_attributes()
            .map(|attr| (attr, read(target, attr, CaptureSide::Target)))
            .collect();

        Ok(AttributeSnapshot {
            target_armour: read(target, Attribute::Armour, CaptureSide::Target),
            target_block_chance: read(target, Attribute::BlockChance, CaptureSide::Target),
            target_critical_hit_resistance: read(
                target,
                Attribute::CriticalHitResistance,
                CaptureSide::Target,
            ),
            target_resistances,
            source_armour_penetration: read(source, Attribute::ArmourPenetration, CaptureSide::Source),
            source_critical_hit_chance: read(source, Attribute::CriticalHitChance, CaptureSide::Source),
            source_critical_hit_damage: read(source, Attribute::CriticalHitDamage, CaptureSide::Source),
        })
    }
}
