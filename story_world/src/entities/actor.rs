//! Actor definitions.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::ActorId;
use crate::error::WorldError;

/// A character in the story world.
///
/// The ID never changes after construction; the display name may.
/// Equality and hashing only look at the ID, so two values built with the
/// same uid are the same character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    id: ActorId,
    name: String,
}

impl Actor {
    /// Create a new actor with a display name and a permanent uid.
    pub fn new(name: impl Into<String>, uid: impl Into<ActorId>) -> Self {
        Self {
            id: uid.into(),
            name: name.into(),
        }
    }

    /// Like [`Actor::new`], but rejects a blank uid.
    pub fn try_new(name: impl Into<String>, uid: impl Into<ActorId>) -> Result<Self, WorldError> {
        let actor = Self::new(name, uid);
        if !actor.id.is_valid() {
            return Err(WorldError::InvalidActorId);
        }
        Ok(actor)
    }

    pub fn id(&self) -> &ActorId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl AsRef<ActorId> for Actor {
    fn as_ref(&self) -> &ActorId {
        &self.id
    }
}

impl PartialEq for Actor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Actor {}

impl Hash for Actor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Actor({})", self.name)
    }
}
