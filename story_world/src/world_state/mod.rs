//! World state - the actor registry, locations and clock that world ticks read.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::entities::{Actor, ActorId, Location, LocationId};
use crate::error::WorldError;

/// Discrete world clock.
///
/// `tick` counts world updates; the calendar fields track game time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WorldTime {
    pub tick: u64,
    pub day: u32,
    pub hour: u8,
    pub minute: u8,
}

/// Coarse period of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl WorldTime {
    /// Create a new world time at tick zero.
    pub fn new(day: u32, hour: u8, minute: u8) -> Self {
        Self {
            tick: 0,
            day,
            hour,
            minute,
        }
    }

    /// Step one tick forward, letting `minutes` of game time pass.
    pub fn advance(&mut self, minutes: u32) {
        self.tick += 1;

        let total_minutes = self.minute as u64 + minutes as u64;
        self.minute = (total_minutes % 60) as u8;

        let total_hours = self.hour as u64 + total_minutes / 60;
        self.hour = (total_hours % 24) as u8;

        let days_passed = u32::try_from(total_hours / 24).unwrap_or(u32::MAX);
        self.day = self.day.saturating_add(days_passed);
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        match self.hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

impl std::fmt::Display for WorldTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Day {}, {:02}:{:02}", self.day, self.hour, self.minute)
    }
}

/// Everything a world tick may read: who exists, where they are, and when it is.
#[derive(Debug, Clone, Default)]
pub struct WorldState {
    /// Global time tracking.
    pub time: WorldTime,

    /// Registered actors in insertion order.
    actors: Vec<Actor>,

    /// Index into `actors` by uid.
    actor_index: HashMap<ActorId, usize>,

    locations: HashMap<LocationId, Location>,

    /// Current location of each placed actor.
    actor_locations: HashMap<ActorId, LocationId>,
}

impl WorldState {
    /// Create a new empty world state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an actor. Actors are never removed.
    pub fn add_actor(&mut self, actor: Actor) -> Result<ActorId, WorldError> {
        let id = actor.id().clone();
        if !id.is_valid() {
            return Err(WorldError::InvalidActorId);
        }
        if self.actor_index.contains_key(&id) {
            return Err(WorldError::DuplicateActor(id));
        }

        self.actor_index.insert(id.clone(), self.actors.len());
        self.actors.push(actor);
        Ok(id)
    }

    /// Get actor by uid.
    pub fn actor(&self, id: &ActorId) -> Option<&Actor> {
        self.actor_index.get(id).map(|&i| &self.actors[i])
    }

    /// Get mutable actor by uid.
    pub fn actor_mut(&mut self, id: &ActorId) -> Option<&mut Actor> {
        self.actor_index.get(id).map(|&i| &mut self.actors[i])
    }

    pub fn contains_actor(&self, id: &ActorId) -> bool {
        self.actor_index.contains_key(id)
    }

    /// All actors in registration order.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Add a location to the world.
    pub fn add_location(&mut self, location: Location) -> LocationId {
        let id = location.id;
        self.locations.insert(id, location);
        id
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    /// Move a registered actor to a known location.
    pub fn place_actor(&mut self, actor: &ActorId, location: LocationId) -> Result<(), WorldError> {
        if !self.contains_actor(actor) {
            return Err(WorldError::UnknownActor(actor.clone()));
        }
        if !self.locations.contains_key(&location) {
            return Err(WorldError::UnknownLocation(location));
        }
        self.actor_locations.insert(actor.clone(), location);
        Ok(())
    }

    pub fn location_of(&self, actor: &ActorId) -> Option<LocationId> {
        self.actor_locations.get(actor).copied()
    }

    /// Actors currently at a location, in registration order.
    pub fn actors_at(&self, location: LocationId) -> Vec<&Actor> {
        self.actors
            .iter()
            .filter(|actor| self.actor_locations.get(actor.id()) == Some(&location))
            .collect()
    }

    /// Advance time by one tick of the given length.
    pub fn advance_time(&mut self, minutes: u32) {
        self.time.advance(minutes);
    }
}
