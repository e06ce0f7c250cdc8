//! Execution - Capture, resolve, and hand results back to the host
//!
//! This is the per-application entry point: it captures the snapshot, runs the
//! resolver, writes the hit flags into the effect context and returns the
//! additive modifier for the target's incoming damage attribute.

use super::context::EffectContextSink;
use super::error::ConfigurationError;
use super::resolution::DamageResolver;
use super::result::ResolutionResult;
use super::roll::PercentRoll;
use crate::curve::CoefficientProvider;
use crate::damage::DamageTypeMagnitude;
use crate::snapshot::{AttributeSnapshot, AttributeSource};
use crate::types::Attribute;
use serde::{Deserialize, Serialize};

/// A damage effect instance as created by the triggering ability
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageEffectSpec {
    /// Set-by-caller magnitudes
    pub magnitudes: DamageTypeMagnitude,
    /// Level of the actor applying the effect
    pub source_level: i32,
    /// Level of the actor receiving the effect
    pub target_level: i32,
}

impl DamageEffectSpec {
    pub fn new(magnitudes: DamageTypeMagnitude, source_level: i32, target_level: i32) -> Self {
        DamageEffectSpec {
            magnitudes,
            source_level,
            target_level,
        }
    }
}

/// Additive attribute change for the host's attribute pipeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeModifier {
    pub attribute: Attribute,
    pub magnitude: f64,
}

impl AttributeModifier {
    /// Additive change to the target's incoming damage
    pub fn incoming_damage(magnitude: f64) -> Self {
        AttributeModifier {
            attribute: Attribute::IncomingDamage,
            magnitude,
        }
    }

    /// Apply to a current value
    pub fn apply(&self, current: f64) -> f64 {
        current + self.magnitude
    }
}

/// Execute a damage effect against a target
///
/// Returns the incoming damage modifier and the full resolution result. On a
/// configuration error nothing is written to the context.
pub fn execute_damage<C: CoefficientProvider>(
    resolver: &DamageResolver<C>,
    spec: &DamageEffectSpec,
    source: Option<&dyn AttributeSource>,
    target: Option<&dyn AttributeSource>,
    context: &mut impl EffectContextSink,
    rolls: &mut impl PercentRoll,
) -> Result<(AttributeModifier, ResolutionResult), ConfigurationError> {
    let outcome = AttributeSnapshot::capture(source, target, resolver.resistances()).and_then(
        |snapshot| {
            resolver.resolve_with_rolls(
                &spec.magnitudes,
                &snapshot,
                spec.source_level,
                spec.target_level,
                rolls,
            )
        },
    );

    let result = match outcome {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("damage execution failed: {}", e);
            return Err(e);
        }
    };

    context.set_blocked(result.blocked);
    context.set_critical_hit(result.critical_hit);

    Ok((AttributeModifier::incoming_damage(result.final_damage), result))
}
