//! Reputation stat - a base score plus a boost from recent events.

use serde::{Deserialize, Serialize};
use story_world::RelationshipConfig;

/// Inclusive clamp applied to reputation values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationBounds {
    pub min: i32,
    pub max: i32,
}

impl ReputationBounds {
    /// Build bounds from config. A missing side is open.
    pub fn from_config(config: &RelationshipConfig) -> Option<Self> {
        match (config.min_reputation, config.max_reputation) {
            (None, None) => None,
            (min, max) => Some(Self {
                min: min.unwrap_or(i32::MIN),
                max: max.unwrap_or(i32::MAX),
            }),
        }
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

/// A single reputation measure.
///
/// `value` is always `base + boost`, clamped to `bounds` when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ReputationStat {
    base: i32,
    boost: i32,
    value: i32,
    bounds: Option<ReputationBounds>,
}

impl ReputationStat {
    pub fn new(base: i32) -> Self {
        let mut stat = Self::default();
        stat.set_base(base);
        stat
    }

    pub fn with_bounds(mut self, bounds: Option<ReputationBounds>) -> Self {
        self.bounds = bounds;
        let base = self.base;
        self.set_base(base);
        self
    }

    /// The value without any boost.
    pub fn base(&self) -> i32 {
        self.base
    }

    /// The boost applied on top of the base.
    pub fn boost(&self) -> i32 {
        self.boost
    }

    /// The final value, base plus boost.
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn bounds(&self) -> Option<ReputationBounds> {
        self.bounds
    }

    pub fn set_base(&mut self, base: i32) {
        self.base = self.clamped(base, "base");
        self.recompute();
    }

    pub fn set_boost(&mut self, boost: i32) {
        self.boost = boost;
        self.recompute();
    }

    fn recompute(&mut self) {
        let raw = self.base.saturating_add(self.boost);
        self.value = self.clamped(raw, "value");
    }

    fn clamped(&self, raw: i32, field: &'static str) -> i32 {
        match self.bounds {
            Some(bounds) => {
                let clamped = bounds.clamp(raw);
                if clamped != raw {
                    tracing::warn!(field, raw, clamped, "reputation clamped to configured bounds");
                }
                clamped
            }
            None => raw,
        }
    }
}
