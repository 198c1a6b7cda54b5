//! Relationship events - things that happened between two actors.

use serde::{Deserialize, Serialize};
use story_world::WorldState;

/// Something that happened between two actors and shifted how the owner
/// feels about the target.
///
/// Events with a duration expire after that many world ticks; events
/// without one are permanent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipEvent {
    /// Short machine-friendly name, e.g. `"insult"`.
    pub event_type: String,

    /// Human-readable description. Falls back to `event_type` when empty.
    pub description: String,

    /// Amount the owner's reputation toward the target shifts while active.
    pub reputation_change: i32,

    /// None = permanent event.
    pub remaining_ticks: Option<u32>,
}

impl RelationshipEvent {
    pub fn new(event_type: impl Into<String>, reputation_change: i32) -> Self {
        Self {
            event_type: event_type.into(),
            description: String::new(),
            reputation_change,
            remaining_ticks: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Expire the event after `ticks` world updates.
    pub fn with_duration(mut self, ticks: u32) -> Self {
        self.remaining_ticks = Some(ticks);
        self
    }

    pub fn describe(&self) -> &str {
        if self.description.is_empty() {
            &self.event_type
        } else {
            &self.description
        }
    }

    /// Count down one world tick.
    pub fn on_update(&mut self, _world: &WorldState) {
        if let Some(remaining) = self.remaining_ticks.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
    }

    /// Whether the event still applies. Timed events expire at zero.
    pub fn is_valid(&self, _world: &WorldState) -> bool {
        !self.is_expired()
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_ticks == Some(0)
    }
}

impl std::fmt::Display for RelationshipEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.describe(), self.reputation_change)
    }
}
