//! The [`Space`] world container.
//!
//! A space owns every entity of one world. Entities live in a generational
//! arena and are addressed by [`EntityId`] handles; the space additionally
//! keeps an insertion-ordered id sequence, which gives queries and working
//! sets a deterministic update/draw order.
//!
//! Working sets are **rebuilt**, not diffed: [`Space::populate_entities`]
//! recomputes the full match for a system's registered masks each time it is
//! called. The returned set is a snapshot — structural changes made to the
//! space afterwards never retroactively alter it.

use thiserror::Error;
use tracing::debug;

use ember_component::{Camera, ComponentMask, Entity, EntityId, Transform};

/// Errors reported by a [`Space`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpaceError {
    /// The handle refers to an entity that was removed (or never existed).
    /// Retaining an id past the owning entity's removal is legal; using it
    /// reports this error instead of touching reused storage.
    #[error("{0} is not alive in this space")]
    StaleEntity(EntityId),
}

/// One arena slot. The generation counts how many times the slot has been
/// freed; a handle is valid only while its generation matches.
#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    entity: Option<Entity>,
}

/// A world in which entities exist and interact.
#[derive(Debug, Default)]
pub struct Space {
    name: String,
    slots: Vec<Slot>,
    free: Vec<u32>,
    /// Entity ids in insertion order. Invariant: exactly the ids of the
    /// occupied slots.
    order: Vec<EntityId>,
    /// The designated camera. Invariant: `None`, or an id present in `order`.
    camera: Option<EntityId>,
}

impl Space {
    /// Create an empty space with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The space's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a fresh empty entity (alive bit set), append it to the
    /// sequence, and return its handle. Always succeeds.
    pub fn create_entity(&mut self, name: impl Into<String>) -> EntityId {
        self.add_entity(Entity::new(name))
    }

    /// Create an entity pre-populated with [`Transform`] and [`Camera`]
    /// components and designate it as this space's camera.
    ///
    /// Only one camera designation is tracked: calling this again replaces
    /// the designation, while the previous camera entity remains in the
    /// sequence until separately removed.
    pub fn create_camera(&mut self) -> EntityId {
        let mut entity = Entity::new("Camera");
        entity.attach(Transform::default());
        entity.attach(Camera::default());
        let id = self.add_entity(entity);
        self.camera = Some(id);
        debug!(space = self.name, %id, "camera designated");
        id
    }

    /// The designated camera, or `None` if no camera was created.
    #[must_use]
    pub fn camera(&self) -> Option<EntityId> {
        self.camera
    }

    /// Insert an externally built entity into the space, appending it to the
    /// insertion-order sequence. Returns its handle.
    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.entity = Some(entity);
                EntityId::new(index, slot.generation)
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    entity: Some(entity),
                });
                EntityId::new(index, 0)
            }
        };
        self.order.push(id);
        id
    }

    /// Remove an entity, dropping all of its components.
    ///
    /// The slot's generation is bumped so every retained handle to the
    /// removed entity becomes stale. Removing the designated camera clears
    /// the designation. Returns `true` if the entity existed.
    pub fn remove_entity(&mut self, id: EntityId) -> bool {
        let Some(slot) = self.slots.get_mut(id.index as usize) else {
            return false;
        };
        if slot.generation != id.generation || slot.entity.is_none() {
            return false;
        }

        slot.entity = None;
        slot.generation += 1;
        self.free.push(id.index);
        self.order.retain(|&ordered| ordered != id);
        if self.camera == Some(id) {
            self.camera = None;
        }
        debug!(space = self.name, %id, "entity removed");
        true
    }

    /// Returns `true` if the handle refers to a live entity.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.slots
            .get(id.index as usize)
            .is_some_and(|slot| slot.generation == id.generation && slot.entity.is_some())
    }

    /// Access the entity behind a handle.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::StaleEntity`] if the entity was removed or the
    /// handle never referred to a live entity.
    pub fn entity(&self, id: EntityId) -> Result<&Entity, SpaceError> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entity.as_ref())
            .ok_or(SpaceError::StaleEntity(id))
    }

    /// Mutable access to the entity behind a handle.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::StaleEntity`] if the entity was removed or the
    /// handle never referred to a live entity.
    pub fn entity_mut(&mut self, id: EntityId) -> Result<&mut Entity, SpaceError> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entity.as_mut())
            .ok_or(SpaceError::StaleEntity(id))
    }

    /// All live entity ids, in insertion order.
    pub fn entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.order.iter().copied()
    }

    /// The number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.order.len()
    }

    /// The ordered subsequence of entities whose live mask fully contains
    /// `mask`.
    ///
    /// Read-only. An impossible mask yields an empty result, not an error.
    #[must_use]
    pub fn get_entities(&self, mask: ComponentMask) -> Vec<EntityId> {
        self.order
            .iter()
            .copied()
            .filter(|&id| {
                self.entity(id)
                    .map(|entity| entity.mask().contains(mask))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Rebuild a working set for a system's registered masks.
    ///
    /// An entity qualifies if its live mask fully contains ANY of the
    /// registered masks (OR across masks, AND within a mask). If any
    /// registered mask is [`ComponentMask::NO_OBJECTS`] the system has opted
    /// out of population and the result is empty, whatever else it
    /// registered and whatever the space contains.
    #[must_use]
    pub fn populate_entities(&self, masks: &[ComponentMask]) -> Vec<EntityId> {
        if masks.is_empty() || masks.contains(&ComponentMask::NO_OBJECTS) {
            return Vec::new();
        }
        self.order
            .iter()
            .copied()
            .filter(|&id| {
                self.entity(id)
                    .map(|entity| masks.iter().any(|&mask| entity.mask().contains(mask)))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Remove all entities, dropping their components, and reset the camera
    /// designation. Every outstanding handle becomes stale.
    pub fn clear(&mut self) {
        let removed = self.order.len();
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.entity.take().is_some() {
                slot.generation += 1;
            }
            self.free.push(index as u32);
        }
        self.order.clear();
        self.camera = None;
        debug!(space = self.name, removed, "space cleared");
    }
}

#[cfg(test)]
mod tests {
    use ember_component::{ComponentKind, RigidBody};

    use super::*;

    fn transform_entity(name: &str) -> Entity {
        let mut entity = Entity::new(name);
        entity.attach(Transform::default());
        entity
    }

    #[test]
    fn test_create_entity_appends_in_order() {
        let mut space = Space::new("World1");
        let a = space.create_entity("a");
        let b = space.create_entity("b");
        let c = space.create_entity("c");

        let order: Vec<EntityId> = space.entities().collect();
        assert_eq!(order, vec![a, b, c]);
        assert_eq!(space.entity_count(), 3);
    }

    #[test]
    fn test_create_camera_populates_and_designates() {
        let mut space = Space::new("World1");
        let camera = space.create_camera();

        assert_eq!(space.camera(), Some(camera));
        let entity = space.entity(camera).unwrap();
        assert!(entity.transform().is_some());
        assert!(entity.camera().is_some());
    }

    #[test]
    fn test_second_camera_replaces_designation_only() {
        let mut space = Space::new("World1");
        let first = space.create_camera();
        let second = space.create_camera();

        assert_eq!(space.camera(), Some(second));
        // The previous camera entity stays in the sequence.
        assert!(space.contains(first));
        assert_eq!(space.entity_count(), 2);
    }

    #[test]
    fn test_remove_entity_makes_handle_stale() {
        let mut space = Space::new("World1");
        let id = space.create_entity("doomed");
        assert!(space.remove_entity(id));

        assert!(!space.contains(id));
        assert_eq!(space.entity(id), Err(SpaceError::StaleEntity(id)));
        // Removing again is a no-op.
        assert!(!space.remove_entity(id));
    }

    #[test]
    fn test_reused_slot_does_not_resurrect_old_handle() {
        let mut space = Space::new("World1");
        let old = space.create_entity("first");
        space.remove_entity(old);

        let new = space.create_entity("second");
        // Same slot, new generation.
        assert_eq!(new.index, old.index);
        assert_ne!(new.generation, old.generation);
        assert!(space.entity(old).is_err());
        assert_eq!(space.entity(new).unwrap().name(), "second");
    }

    #[test]
    fn test_removing_camera_clears_designation() {
        let mut space = Space::new("World1");
        let camera = space.create_camera();
        space.remove_entity(camera);
        assert_eq!(space.camera(), None);
    }

    #[test]
    fn test_get_entities_filters_and_preserves_order() {
        let mut space = Space::new("World1");
        let a = space.add_entity(transform_entity("a"));
        let b = space.create_entity("b");
        let c = space.add_entity(transform_entity("c"));

        let all = space.get_entities(ComponentMask::ALIVE);
        assert_eq!(all, vec![a, b, c]);

        let with_transform = space.get_entities(ComponentMask::ALIVE | ComponentKind::Transform.bit());
        assert_eq!(with_transform, vec![a, c]);
    }

    #[test]
    fn test_get_entities_impossible_mask_is_empty() {
        let mut space = Space::new("World1");
        space.create_entity("a");
        assert!(space.get_entities(ComponentMask::NO_OBJECTS).is_empty());
    }

    #[test]
    fn test_populate_matches_any_registered_mask() {
        let mut space = Space::new("World1");
        let with_transform = space.add_entity(transform_entity("t"));
        let with_body = {
            let mut entity = Entity::new("r");
            entity.attach(RigidBody::default());
            space.add_entity(entity)
        };
        space.create_entity("bare");

        let masks = [
            ComponentMask::ALIVE | ComponentKind::Transform.bit(),
            ComponentMask::ALIVE | ComponentKind::RigidBody.bit(),
        ];
        // OR across masks: either requirement qualifies.
        assert_eq!(space.populate_entities(&masks), vec![with_transform, with_body]);
    }

    #[test]
    fn test_populate_equals_get_entities_for_single_mask() {
        let mut space = Space::new("World1");
        space.add_entity(transform_entity("a"));
        space.create_entity("b");
        space.add_entity(transform_entity("c"));

        let mask = ComponentMask::ALIVE | ComponentKind::Transform.bit();
        assert_eq!(space.populate_entities(&[mask]), space.get_entities(mask));
    }

    #[test]
    fn test_populate_no_objects_sentinel_always_empty() {
        let mut space = Space::new("World1");
        space.add_entity(transform_entity("a"));
        space.create_entity("b");

        assert!(space.populate_entities(&[ComponentMask::NO_OBJECTS]).is_empty());
        // The sentinel wins even when other masks are registered alongside it.
        let masks = [ComponentMask::ALIVE, ComponentMask::NO_OBJECTS];
        assert!(space.populate_entities(&masks).is_empty());
    }

    #[test]
    fn test_populate_snapshot_is_not_retroactively_altered() {
        let mut space = Space::new("World1");
        let a = space.create_entity("a");
        let b = space.create_entity("b");

        let snapshot = space.populate_entities(&[ComponentMask::ALIVE]);
        assert_eq!(snapshot, vec![a, b]);

        space.remove_entity(b);
        space.create_entity("c");
        // The snapshot still holds the ids it was built with; the removed
        // entity simply reports as stale on access.
        assert_eq!(snapshot, vec![a, b]);
        assert!(space.entity(b).is_err());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut space = Space::new("World1");
        let camera = space.create_camera();
        let other = space.create_entity("other");

        space.clear();
        assert_eq!(space.entity_count(), 0);
        assert_eq!(space.camera(), None);
        assert!(space.entity(camera).is_err());
        assert!(space.entity(other).is_err());

        // A fresh sequence starts after clearing.
        let fresh = space.create_entity("fresh");
        assert_eq!(space.entities().collect::<Vec<_>>(), vec![fresh]);
    }

    #[test]
    fn test_world1_scenario() {
        // Space "World1": camera + two plain entities, then a rigid body on
        // the second plain entity.
        let mut space = Space::new("World1");
        let camera = space.create_camera();
        let first = space.create_entity("first");
        let second = space.create_entity("second");

        let all = space.get_entities(ComponentMask::ALIVE);
        assert_eq!(all, vec![camera, first, second]);

        space.entity_mut(second).unwrap().attach(RigidBody::default());
        let bodies =
            space.get_entities(ComponentMask::ALIVE | ComponentKind::RigidBody.bit());
        assert_eq!(bodies, vec![second]);
    }

    #[test]
    fn test_camera_system_population_scenario() {
        // A system requiring Transform|Camera sees only the camera entity,
        // not a transform-only entity.
        let mut space = Space::new("World1");
        let camera = space.create_camera();
        space.add_entity(transform_entity("plain"));

        let mask = ComponentMask::ALIVE
            | ComponentKind::Transform.bit()
            | ComponentKind::Camera.bit();
        assert_eq!(space.populate_entities(&[mask]), vec![camera]);
    }
}
