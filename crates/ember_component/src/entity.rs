//! Entity handles and per-entity component storage.
//!
//! An [`EntityId`] is a generational arena handle: the index addresses a slot
//! in the owning space, the generation detects reuse of that slot. Holding an
//! id never keeps an entity alive — dereferencing a stale id is a checked
//! condition reported by the space, not silent corruption.
//!
//! An [`Entity`] owns at most one component per kind. Its live mask is
//! maintained on every attach/detach and always equals
//! `ALIVE | OR(bit of each attached component)`.

use serde::{Deserialize, Serialize};

use crate::component::{
    Camera, Collider, Component, Drawable, RigidBody, Sprite, Transform,
};
use crate::mask::{ComponentKind, ComponentMask};

/// A stable handle to an entity owned by a space.
///
/// Ids are cheap to copy and safe to retain across frames: if the slot has
/// been freed or reused, the generation no longer matches and the space
/// reports the handle as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId {
    /// Slot index in the owning space's arena.
    pub index: u32,
    /// Generation of the slot at the time the entity was created.
    pub generation: u32,
}

impl EntityId {
    /// Create an id from raw slot coordinates.
    #[must_use]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({}v{})", self.index, self.generation)
    }
}

/// An entity: a named identity owning at most one component per kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    name: String,
    components: [Option<Component>; ComponentKind::COUNT],
    mask: ComponentMask,
}

impl Entity {
    /// Create an empty entity with the alive bit set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Default::default(),
            mask: ComponentMask::ALIVE,
        }
    }

    /// The entity's diagnostic name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The live mask: the alive bit plus the bit of every attached component.
    #[must_use]
    pub fn mask(&self) -> ComponentMask {
        self.mask
    }

    /// Attach a component, keyed by its kind.
    ///
    /// Attaching is always valid. If a component of the same kind is already
    /// attached it is replaced, and the replaced component is returned. The
    /// kind's bit is set in the live mask either way.
    pub fn attach(&mut self, component: impl Into<Component>) -> Option<Component> {
        let component = component.into();
        let kind = component.kind();
        self.mask.insert(kind.bit());
        self.components[kind.index()].replace(component)
    }

    /// Remove and return the component of the given kind, clearing its bit
    /// from the live mask. Returns `None` (and changes nothing) if absent.
    pub fn detach(&mut self, kind: ComponentKind) -> Option<Component> {
        let removed = self.components[kind.index()].take();
        if removed.is_some() {
            self.mask.remove(kind.bit());
        }
        removed
    }

    /// Returns the component of the given kind, if attached.
    ///
    /// Absence is a normal outcome, not a failure.
    #[must_use]
    pub fn get(&self, kind: ComponentKind) -> Option<&Component> {
        self.components[kind.index()].as_ref()
    }

    /// Mutable access to the component of the given kind, if attached.
    pub fn get_mut(&mut self, kind: ComponentKind) -> Option<&mut Component> {
        self.components[kind.index()].as_mut()
    }

    /// Returns `true` if a component of the given kind is attached.
    #[must_use]
    pub fn has(&self, kind: ComponentKind) -> bool {
        self.components[kind.index()].is_some()
    }

    /// The attached [`Transform`], if any.
    #[must_use]
    pub fn transform(&self) -> Option<&Transform> {
        match self.get(ComponentKind::Transform) {
            Some(Component::Transform(t)) => Some(t),
            _ => None,
        }
    }

    /// Mutable access to the attached [`Transform`], if any.
    pub fn transform_mut(&mut self) -> Option<&mut Transform> {
        match self.get_mut(ComponentKind::Transform) {
            Some(Component::Transform(t)) => Some(t),
            _ => None,
        }
    }

    /// The attached [`Drawable`], if any.
    #[must_use]
    pub fn drawable(&self) -> Option<&Drawable> {
        match self.get(ComponentKind::Drawable) {
            Some(Component::Drawable(d)) => Some(d),
            _ => None,
        }
    }

    /// Mutable access to the attached [`Drawable`], if any.
    pub fn drawable_mut(&mut self) -> Option<&mut Drawable> {
        match self.get_mut(ComponentKind::Drawable) {
            Some(Component::Drawable(d)) => Some(d),
            _ => None,
        }
    }

    /// The attached [`RigidBody`], if any.
    #[must_use]
    pub fn rigid_body(&self) -> Option<&RigidBody> {
        match self.get(ComponentKind::RigidBody) {
            Some(Component::RigidBody(r)) => Some(r),
            _ => None,
        }
    }

    /// Mutable access to the attached [`RigidBody`], if any.
    pub fn rigid_body_mut(&mut self) -> Option<&mut RigidBody> {
        match self.get_mut(ComponentKind::RigidBody) {
            Some(Component::RigidBody(r)) => Some(r),
            _ => None,
        }
    }

    /// The attached [`Sprite`], if any.
    #[must_use]
    pub fn sprite(&self) -> Option<&Sprite> {
        match self.get(ComponentKind::Sprite) {
            Some(Component::Sprite(s)) => Some(s),
            _ => None,
        }
    }

    /// Mutable access to the attached [`Sprite`], if any.
    pub fn sprite_mut(&mut self) -> Option<&mut Sprite> {
        match self.get_mut(ComponentKind::Sprite) {
            Some(Component::Sprite(s)) => Some(s),
            _ => None,
        }
    }

    /// The attached [`Collider`], if any.
    #[must_use]
    pub fn collider(&self) -> Option<&Collider> {
        match self.get(ComponentKind::Collider) {
            Some(Component::Collider(c)) => Some(c),
            _ => None,
        }
    }

    /// Mutable access to the attached [`Collider`], if any.
    pub fn collider_mut(&mut self) -> Option<&mut Collider> {
        match self.get_mut(ComponentKind::Collider) {
            Some(Component::Collider(c)) => Some(c),
            _ => None,
        }
    }

    /// The attached [`Camera`], if any.
    #[must_use]
    pub fn camera(&self) -> Option<&Camera> {
        match self.get(ComponentKind::Camera) {
            Some(Component::Camera(c)) => Some(c),
            _ => None,
        }
    }

    /// Mutable access to the attached [`Camera`], if any.
    pub fn camera_mut(&mut self) -> Option<&mut Camera> {
        match self.get_mut(ComponentKind::Camera) {
            Some(Component::Camera(c)) => Some(c),
            _ => None,
        }
    }
}
