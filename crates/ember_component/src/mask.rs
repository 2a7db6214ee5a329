//! Component kinds and their bitmask encoding.
//!
//! Every component kind owns exactly one bit in a [`ComponentMask`]. The bit
//! is derived from the kind's discriminant ([`ComponentKind::bit`]), so the
//! kind table and the bit table are a single mapping and cannot drift apart.
//!
//! Bit 0 is reserved: it marks an entity as alive and never belongs to any
//! component kind.

use serde::{Deserialize, Serialize};

/// The closed set of component kinds.
///
/// The enumeration is append-only: adding a kind appends a new variant, which
/// allocates the next unused bit without perturbing existing masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Position, rotation, and scale in world space.
    Transform,
    /// Marks an entity as renderable.
    Drawable,
    /// Linear velocity and acceleration.
    RigidBody,
    /// Tint colour for rendering.
    Sprite,
    /// Circular collision volume.
    Collider,
    /// View and projection state for a viewpoint entity.
    Camera,
}

impl ComponentKind {
    /// All kinds, in discriminant order.
    pub const ALL: [ComponentKind; Self::COUNT] = [
        ComponentKind::Transform,
        ComponentKind::Drawable,
        ComponentKind::RigidBody,
        ComponentKind::Sprite,
        ComponentKind::Collider,
        ComponentKind::Camera,
    ];

    /// The number of component kinds.
    pub const COUNT: usize = 6;

    /// Returns the single mask bit owned by this kind.
    ///
    /// Bit 0 is the alive bit, so kind `i` maps to bit `i + 1`.
    #[must_use]
    pub const fn bit(self) -> ComponentMask {
        ComponentMask(1 << (self as u32 + 1))
    }

    /// Returns the array index for this kind, used by per-entity storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A bitset over component kinds, plus the reserved alive bit.
///
/// An entity's live mask is always `ALIVE | OR(bit of each attached
/// component)`. Systems declare interest in entities via masks with the same
/// encoding; matching uses AND semantics ([`ComponentMask::contains`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ComponentMask(pub u32);

impl ComponentMask {
    /// The empty mask.
    pub const NONE: ComponentMask = ComponentMask(0);

    /// Reserved bit 0: the entity exists and is alive.
    pub const ALIVE: ComponentMask = ComponentMask(1);

    /// Sentinel registered by systems that opt out of automatic entity
    /// population (window/input style systems that act on global state).
    ///
    /// No live mask ever matches it, and population treats it specially:
    /// a system that registered `NO_OBJECTS` always receives an empty
    /// working set, regardless of any other mask it registered.
    pub const NO_OBJECTS: ComponentMask = ComponentMask(u32::MAX);

    /// Returns `true` if every bit of `required` is set in `self`.
    #[must_use]
    pub const fn contains(self, required: ComponentMask) -> bool {
        self.0 & required.0 == required.0
    }

    /// Sets all bits of `other` in `self`.
    pub fn insert(&mut self, other: ComponentMask) {
        self.0 |= other.0;
    }

    /// Clears all bits of `other` from `self`.
    pub fn remove(&mut self, other: ComponentMask) {
        self.0 &= !other.0;
    }

    /// Returns `true` if no bit is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for ComponentMask {
    type Output = ComponentMask;

    fn bitor(self, rhs: ComponentMask) -> ComponentMask {
        ComponentMask(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for ComponentMask {
    fn bitor_assign(&mut self, rhs: ComponentMask) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for ComponentMask {
    type Output = ComponentMask;

    fn bitand(self, rhs: ComponentMask) -> ComponentMask {
        ComponentMask(self.0 & rhs.0)
    }
}

impl std::fmt::Display for ComponentMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#010b}", self.0)
    }
}
