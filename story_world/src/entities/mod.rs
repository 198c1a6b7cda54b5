//! Entity definitions for the story world.

mod actor;
mod location;

pub use actor::*;
pub use location::*;

use serde::{Deserialize, Serialize};

/// Stable, writer-facing identifier of an actor (e.g. `"ximena"`).
///
/// This is the canonical key for everything that refers to an actor,
/// including relationship edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    /// Create an actor ID from any string-like value.
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }

    /// Borrow the raw uid.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An ID is usable as a key only if it carries visible characters.
    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

impl AsRef<ActorId> for ActorId {
    fn as_ref(&self) -> &ActorId {
        self
    }
}

impl From<&str> for ActorId {
    fn from(uid: &str) -> Self {
        Self::new(uid)
    }
}

impl From<String> for ActorId {
    fn from(uid: String) -> Self {
        Self(uid)
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
