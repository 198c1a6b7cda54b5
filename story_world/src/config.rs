//! World configuration, loaded from TOML.
//!
//! ```toml
//! minutes_per_tick = 60
//!
//! [relationships]
//! self_relationships = "reject"
//! min_reputation = -100
//! max_reputation = 100
//! ```
//!
//! Every field is optional.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::WorldError;

/// What to do when an actor asks for a relationship with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelfRelationshipPolicy {
    #[default]
    Reject,
    Allow,
}

/// Policy knobs for the relationship graph.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RelationshipConfig {
    pub self_relationships: SelfRelationshipPolicy,
    /// Lower clamp for reputation values. None = unbounded.
    pub min_reputation: Option<i32>,
    /// Upper clamp for reputation values. None = unbounded.
    pub max_reputation: Option<i32>,
}

/// Top-level configuration of a world.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Game minutes that pass on each world tick.
    pub minutes_per_tick: u32,
    pub relationships: RelationshipConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            minutes_per_tick: 60,
            relationships: RelationshipConfig::default(),
        }
    }
}

impl WorldConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self, WorldError> {
        let config: WorldConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WorldError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded world config");
        Ok(config)
    }

    fn validate(&self) -> Result<(), WorldError> {
        if let (Some(min), Some(max)) = (
            self.relationships.min_reputation,
            self.relationships.max_reputation,
        ) {
            if min > max {
                return Err(WorldError::InvalidBounds { min, max });
            }
        }
        Ok(())
    }
}
