//! # Story World
//!
//! The value side of the story: who the actors are, where they stand, what
//! time it is, and how the world is configured. Relationship logic lives in
//! `social_core`, which reads this crate's [`WorldState`] on every tick.

pub mod config;
pub mod entities;
pub mod error;
pub mod world_state;

pub use config::*;
pub use entities::*;
pub use error::*;
pub use world_state::*;
