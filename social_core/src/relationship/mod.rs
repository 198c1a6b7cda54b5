//! Relationship module - how one actor feels about another.
//!
//! A relationship consists of:
//! - **Owner / target**: the actor whose feelings are recorded, and about whom
//! - **Reputation**: a base score plus a boost from active events
//! - **History**: events between the two, some of which expire over time

mod event;
mod stat;

pub use event::*;
pub use stat::*;

use serde::Serialize;
use story_world::{ActorId, WorldState};

/// A directed measure of how `owner` feels toward `target`.
///
/// The reverse direction is a separate `Relationship`; nothing here touches it.
#[derive(Debug, Clone, Serialize)]
pub struct Relationship {
    owner: ActorId,
    target: ActorId,
    reputation: ReputationStat,
    history: Vec<RelationshipEvent>,
    /// World ticks this relationship has been updated through.
    age: u64,
}

impl Relationship {
    /// Create a neutral relationship (base reputation 0, no history).
    pub fn new(owner: ActorId, target: ActorId) -> Self {
        Self {
            owner,
            target,
            reputation: ReputationStat::default(),
            history: Vec::new(),
            age: 0,
        }
    }

    pub(crate) fn with_bounds(mut self, bounds: Option<ReputationBounds>) -> Self {
        self.reputation = self.reputation.with_bounds(bounds);
        self
    }

    pub fn owner(&self) -> &ActorId {
        &self.owner
    }

    pub fn target(&self) -> &ActorId {
        &self.target
    }

    pub fn base_reputation(&self) -> i32 {
        self.reputation.base()
    }

    /// Replace the base reputation.
    ///
    /// Unbounded unless the owning manager was configured with reputation
    /// bounds; see [`Relationship::bounds`].
    pub fn set_base_reputation(&mut self, value: i32) {
        self.reputation.set_base(value);
    }

    /// Current reputation: the base plus the change from every active event.
    pub fn reputation(&self) -> i32 {
        self.reputation.value()
    }

    pub fn bounds(&self) -> Option<ReputationBounds> {
        self.reputation.bounds()
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn history(&self) -> &[RelationshipEvent] {
        &self.history
    }

    /// Record an event; its change applies immediately.
    ///
    /// An event that has already expired is discarded.
    pub fn add_event(&mut self, event: RelationshipEvent) {
        if event.is_expired() {
            tracing::debug!(
                owner = %self.owner,
                target = %self.target,
                event = %event,
                "discarded expired relationship event"
            );
            return;
        }
        self.history.push(event);
        self.refresh_boost();
    }

    /// Remove the oldest event of the given type, returning it.
    pub fn remove_event(&mut self, event_type: &str) -> Option<RelationshipEvent> {
        let index = self
            .history
            .iter()
            .position(|event| event.event_type == event_type)?;
        let removed = self.history.remove(index);
        self.refresh_boost();
        Some(removed)
    }

    /// Per-tick hook, called by the manager once per world update.
    ///
    /// Ages the relationship, ticks every event, and drops expired ones.
    pub fn on_update(&mut self, world: &WorldState) {
        self.age += 1;

        if self.history.is_empty() {
            return;
        }

        for event in &mut self.history {
            event.on_update(world);
        }

        let (owner, target) = (&self.owner, &self.target);
        self.history.retain(|event| {
            let valid = event.is_valid(world);
            if !valid {
                tracing::debug!(%owner, %target, event = %event, "relationship event expired");
            }
            valid
        });

        self.refresh_boost();
    }

    fn refresh_boost(&mut self) {
        let boost = self
            .history
            .iter()
            .fold(0i32, |acc, event| acc.saturating_add(event.reputation_change));
        self.reputation.set_boost(boost);
    }
}

/// Shared rendering for a relationship, with whatever labels the caller
/// has for the two actors.
pub(crate) fn render_relationship(
    f: &mut impl std::fmt::Write,
    owner: impl std::fmt::Display,
    target: impl std::fmt::Display,
    reputation: i32,
) -> std::fmt::Result {
    write!(
        f,
        "Relationship(from: {}, to: {}, reputation: {})",
        owner, target, reputation
    )
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render_relationship(f, &self.owner, &self.target, self.reputation())
    }
}
