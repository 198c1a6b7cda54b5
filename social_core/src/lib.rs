//! # Social Core
//!
//! Directed relationships between the actors of a story world.
//!
//! ## Core Components
//!
//! - **relationship**: one actor's disposition toward another, with event history
//! - **manager**: the sparse owner -> target graph with get-or-create access
//! - **game_world**: owns the world state and its relationship graph, drives ticks
//!
//! ## Design Philosophy
//!
//! - **Directed**: how A feels about B says nothing about how B feels about A
//! - **Lazy**: an edge exists only once someone asks for it
//! - **Explicit context**: world state is passed into every update, never global

pub mod error;
pub mod game_world;
pub mod manager;
pub mod relationship;

pub use error::*;
pub use game_world::*;
pub use manager::*;
pub use relationship::*;
