//! Errors raised by relationship operations.

use story_world::ActorId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelationshipError {
    #[error("relationship endpoints must have a non-blank uid")]
    InvalidActor,

    #[error("actor `{0}` cannot hold a relationship with itself")]
    SelfRelationship(ActorId),
}
