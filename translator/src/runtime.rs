//! Runtime identifier resolution seam.

use std::collections::HashMap;

use records::EntityIdentifier;

use crate::value::ActorId;

/// Resolves ephemeral application object identifiers to and from
/// federation identities.
///
/// Mappings are owned and mutated by the surrounding system as entities
/// are published and discovered; the translator only reads them. Every
/// lookup may legitimately miss — an entity referenced by an attribute may
/// simply not have been registered yet — so all methods return `Option`.
pub trait RuntimeIdMap {
    /// Returns the federation entity identity of an application object.
    fn entity_id_for_actor(&self, actor: &ActorId) -> Option<EntityIdentifier>;

    /// Returns the application object mapped to a federation entity
    /// identity.
    fn actor_for_entity_id(&self, id: &EntityIdentifier) -> Option<ActorId>;

    /// Returns the free-text federation object id of an application object.
    fn federation_id_for_actor(&self, actor: &ActorId) -> Option<String>;

    /// Returns the application object mapped to a free-text federation
    /// object id.
    fn actor_for_federation_id(&self, federation_id: &str) -> Option<ActorId>;
}

/// A simple bidirectional in-memory identifier map.
///
/// Suitable for tests and for embedders without their own mapping store.
#[derive(Debug, Clone, Default)]
pub struct MemoryIdMap {
    actor_to_entity: HashMap<ActorId, EntityIdentifier>,
    entity_to_actor: HashMap<EntityIdentifier, ActorId>,
    actor_to_federation: HashMap<ActorId, String>,
    federation_to_actor: HashMap<String, ActorId>,
}

impl MemoryIdMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an actor ↔ entity identity pair.
    pub fn put_entity_id(&mut self, actor: ActorId, id: EntityIdentifier) {
        self.actor_to_entity.insert(actor.clone(), id);
        self.entity_to_actor.insert(id, actor);
    }

    /// Registers an actor ↔ federation object id pair.
    pub fn put_federation_id(&mut self, actor: ActorId, federation_id: impl Into<String>) {
        let federation_id = federation_id.into();
        self.actor_to_federation
            .insert(actor.clone(), federation_id.clone());
        self.federation_to_actor.insert(federation_id, actor);
    }

    /// Removes every mapping involving the actor.
    pub fn remove_actor(&mut self, actor: &ActorId) {
        if let Some(id) = self.actor_to_entity.remove(actor) {
            self.entity_to_actor.remove(&id);
        }
        if let Some(federation_id) = self.actor_to_federation.remove(actor) {
            self.federation_to_actor.remove(&federation_id);
        }
    }
}

impl RuntimeIdMap for MemoryIdMap {
    fn entity_id_for_actor(&self, actor: &ActorId) -> Option<EntityIdentifier> {
        self.actor_to_entity.get(actor).copied()
    }

    fn actor_for_entity_id(&self, id: &EntityIdentifier) -> Option<ActorId> {
        self.entity_to_actor.get(id).cloned()
    }

    fn federation_id_for_actor(&self, actor: &ActorId) -> Option<String> {
        self.actor_to_federation.get(actor).cloned()
    }

    fn actor_for_federation_id(&self, federation_id: &str) -> Option<ActorId> {
        self.federation_to_actor.get(federation_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_mapping_is_bidirectional() {
        let mut map = MemoryIdMap::new();
        let actor = ActorId::new("tank-1");
        let id = EntityIdentifier::new(3, 3, 2);
        map.put_entity_id(actor.clone(), id);

        assert_eq!(map.entity_id_for_actor(&actor), Some(id));
        assert_eq!(map.actor_for_entity_id(&id), Some(actor));
    }

    #[test]
    fn federation_id_mapping_is_bidirectional() {
        let mut map = MemoryIdMap::new();
        let actor = ActorId::new("tank-1");
        map.put_federation_id(actor.clone(), "Federate.Obj.7");

        assert_eq!(
            map.federation_id_for_actor(&actor).as_deref(),
            Some("Federate.Obj.7")
        );
        assert_eq!(map.actor_for_federation_id("Federate.Obj.7"), Some(actor));
    }

    #[test]
    fn unmapped_lookups_miss() {
        let map = MemoryIdMap::new();
        assert!(map.entity_id_for_actor(&ActorId::new("ghost")).is_none());
        assert!(map.actor_for_federation_id("nothing").is_none());
    }

    #[test]
    fn remove_actor_clears_both_directions() {
        let mut map = MemoryIdMap::new();
        let actor = ActorId::new("tank-1");
        map.put_entity_id(actor.clone(), EntityIdentifier::new(1, 2, 3));
        map.put_federation_id(actor.clone(), "Federate.Obj.7");

        map.remove_actor(&actor);
        assert!(map.entity_id_for_actor(&actor).is_none());
        assert!(map.actor_for_federation_id("Federate.Obj.7").is_none());
    }
}
