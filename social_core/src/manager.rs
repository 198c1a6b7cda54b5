//! Relationship Manager - the directed graph of who feels what about whom.

use std::collections::HashMap;

use story_world::{ActorId, SelfRelationshipPolicy, WorldConfig, WorldState};

use crate::error::RelationshipError;
use crate::relationship::{Relationship, ReputationBounds};

/// Tracks relationships between actors.
///
/// Edges are stored sparsely, owner first, then target, and keyed by actor
/// uid. An edge only exists once somebody asked for it; a missing edge means
/// the two actors have never interacted. Edges are never removed.
///
/// Both [`story_world::Actor`] and [`ActorId`] can be passed as endpoints.
#[derive(Debug, Clone, Default)]
pub struct RelationshipManager {
    /// Owner -> target -> relationship.
    relationships: HashMap<ActorId, HashMap<ActorId, Relationship>>,

    self_relationships: SelfRelationshipPolicy,

    /// Applied to every relationship this manager creates.
    bounds: Option<ReputationBounds>,
}

impl RelationshipManager {
    /// Create an empty manager with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty manager using the relationship policy from `config`.
    pub fn with_config(config: &WorldConfig) -> Self {
        Self {
            relationships: HashMap::new(),
            self_relationships: config.relationships.self_relationships,
            bounds: ReputationBounds::from_config(&config.relationships),
        }
    }

    /// Whether `owner` already has a relationship toward `target`.
    ///
    /// Never creates one.
    pub fn relationship_exists(
        &self,
        owner: &impl AsRef<ActorId>,
        target: &impl AsRef<ActorId>,
    ) -> bool {
        self.relationship(owner, target).is_some()
    }

    /// Get the relationship from `owner` to `target`, creating a neutral one
    /// on first access.
    ///
    /// Every later call for the same pair returns the same stored record.
    /// The reverse pair is never created or touched.
    pub fn get_relationship(
        &mut self,
        owner: &impl AsRef<ActorId>,
        target: &impl AsRef<ActorId>,
    ) -> Result<&mut Relationship, RelationshipError> {
        let (owner, target) = (owner.as_ref(), target.as_ref());
        self.check_endpoints(owner, target)?;

        let bounds = self.bounds;
        let outgoing = self.relationships.entry(owner.clone()).or_default();
        let relationship = outgoing.entry(target.clone()).or_insert_with(|| {
            tracing::debug!(%owner, %target, "created relationship");
            Relationship::new(owner.clone(), target.clone()).with_bounds(bounds)
        });

        Ok(relationship)
    }

    /// Look up an existing relationship without creating one.
    pub fn relationship(
        &self,
        owner: &impl AsRef<ActorId>,
        target: &impl AsRef<ActorId>,
    ) -> Option<&Relationship> {
        self.relationships
            .get(owner.as_ref())
            .and_then(|outgoing| outgoing.get(target.as_ref()))
    }

    /// All relationships held by `owner`, in no particular order.
    pub fn relationships_from(
        &self,
        owner: &impl AsRef<ActorId>,
    ) -> impl Iterator<Item = &Relationship> {
        self.relationships
            .get(owner.as_ref())
            .into_iter()
            .flat_map(|outgoing| outgoing.values())
    }

    /// Every stored relationship, in no particular order.
    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships
            .values()
            .flat_map(|outgoing| outgoing.values())
    }

    /// Number of stored relationships.
    pub fn len(&self) -> usize {
        self.relationships.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fan a world tick out to every stored relationship, once each.
    ///
    /// Edges update independently, so traversal order carries no meaning.
    pub fn on_update(&mut self, world: &WorldState) {
        let mut updated = 0usize;
        for outgoing in self.relationships.values_mut() {
            for relationship in outgoing.values_mut() {
                relationship.on_update(world);
                updated += 1;
            }
        }
        tracing::trace!(tick = world.time.tick, updated, "updated relationships");
    }

    fn check_endpoints(&self, owner: &ActorId, target: &ActorId) -> Result<(), RelationshipError> {
        if !owner.is_valid() || !target.is_valid() {
            return Err(RelationshipError::InvalidActor);
        }

        if owner == target {
            match self.self_relationships {
                SelfRelationshipPolicy::Reject => {
                    return Err(RelationshipError::SelfRelationship(owner.clone()));
                }
                SelfRelationshipPolicy::Allow => {
                    tracing::warn!(%owner, "allowing self-relationship");
                }
            }
        }

        Ok(())
    }
}
