//! Effect context - Where hit flags go for VFX/UI consumers

use serde::{Deserialize, Serialize};

/// Receives the block/critical flags of a resolved hit
pub trait EffectContextSink {
    fn set_blocked(&mut self, blocked: bool);
    fn set_critical_hit(&mut self, critical_hit: bool);
}

/// Plain effect context carrying the hit flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageEffectContext {
    blocked: bool,
    critical_hit: bool,
}

impl DamageEffectContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn is_critical_hit(&self) -> bool {
        self.critical_hit
    }
}

impl EffectContextSink for DamageEffectContext {
    fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    fn set_critical_hit(&mut self, critical_hit: bool) {
        self.critical_hit = critical_hit;
    }
}
