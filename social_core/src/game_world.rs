//! Game World - composes the world state with its relationship graph.

use story_world::{Actor, ActorId, WorldConfig, WorldError, WorldState};

use crate::manager::RelationshipManager;
use crate::relationship::render_relationship;

/// Owns everything one story session needs: the actor registry, locations
/// and clock in [`WorldState`], and the session's only [`RelationshipManager`].
#[derive(Debug, Clone)]
pub struct GameWorld {
    config: WorldConfig,
    state: WorldState,
    relationships: RelationshipManager,
}

impl GameWorld {
    /// Create an empty world with the default configuration.
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    pub fn with_config(config: WorldConfig) -> Self {
        let relationships = RelationshipManager::with_config(&config);
        Self {
            config,
            state: WorldState::new(),
            relationships,
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut WorldState {
        &mut self.state
    }

    pub fn relationships(&self) -> &RelationshipManager {
        &self.relationships
    }

    pub fn relationships_mut(&mut self) -> &mut RelationshipManager {
        &mut self.relationships
    }

    /// Register an actor with the world.
    pub fn add_actor(&mut self, actor: Actor) -> Result<ActorId, WorldError> {
        self.state.add_actor(actor)
    }

    /// Advance the clock one tick and let every relationship update.
    ///
    /// Relationships see the world's state as it is after the clock moved.
    pub fn tick(&mut self) {
        self.state.advance_time(self.config.minutes_per_tick);
        self.relationships.on_update(&self.state);
    }

    /// Render an existing relationship using actor display names.
    ///
    /// Unregistered actors are shown by uid. Returns None if the two have
    /// never interacted.
    pub fn describe_relationship(
        &self,
        owner: &impl AsRef<ActorId>,
        target: &impl AsRef<ActorId>,
    ) -> Option<String> {
        let relationship = self.relationships.relationship(owner, target)?;
        let mut rendered = String::new();
        render_relationship(
            &mut rendered,
            self.display_name(relationship.owner()),
            self.display_name(relationship.target()),
            relationship.reputation(),
        )
        .ok()?;
        Some(rendered)
    }

    fn display_name<'a>(&'a self, id: &'a ActorId) -> &'a str {
        self.state
            .actor(id)
            .map(Actor::name)
            .unwrap_or_else(|| id.as_str())
    }
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new()
    }
}
