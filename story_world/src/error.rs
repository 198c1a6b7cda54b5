//! Errors raised by world registration and configuration.

use thiserror::Error;

use crate::entities::{ActorId, LocationId};

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("actor uid must not be blank")]
    InvalidActorId,

    #[error("an actor with uid `{0}` is already registered")]
    DuplicateActor(ActorId),

    #[error("no actor with uid `{0}`")]
    UnknownActor(ActorId),

    #[error("no location with id {0}")]
    UnknownLocation(LocationId),

    #[error("reputation bounds are inverted: min {min} > max {max}")]
    InvalidBounds { min: i32, max: i32 },

    #[error("invalid world config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
