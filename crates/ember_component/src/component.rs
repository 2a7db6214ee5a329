//! Concrete component data types and the [`Component`] union.
//!
//! Components are plain data bags. Each concrete type maps to exactly one
//! [`ComponentKind`]; the kind (and therefore the mask bit) is fixed by the
//! enum variant at construction and can never change afterwards.

use glam::{Mat4, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::mask::{ComponentKind, ComponentMask};

/// Position, rotation, and scale in 2D world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// World-space position.
    pub position: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
    /// Per-axis scale factor.
    pub scale: Vec2,
}

impl Transform {
    /// Create a transform at the given position with default rotation/scale.
    #[must_use]
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
        }
    }
}

/// Marks an entity as renderable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drawable {
    /// Whether the renderer should draw this entity.
    pub visible: bool,
}

impl Default for Drawable {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// Linear motion state integrated by the physics system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RigidBody {
    /// Velocity in world units per second.
    pub velocity: Vec2,
    /// Acceleration in world units per second squared.
    pub acceleration: Vec2,
}

/// Tint colour for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    /// RGBA colour, each channel in `[0, 1]`.
    pub color: Vec4,
}

impl Default for Sprite {
    fn default() -> Self {
        Self { color: Vec4::ONE }
    }
}

/// Circular collision volume centred on the entity's transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    /// Radius in world units.
    pub radius: f32,
}

impl Default for Collider {
    fn default() -> Self {
        Self { radius: 0.5 }
    }
}

/// View and projection state for a viewpoint entity.
///
/// The matrices are recomputed every frame by the camera system from the
/// entity's [`Transform`]; rendering reads them directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Vertical field of view in radians.
    pub field_of_view: f32,
    /// Near clip plane distance.
    pub near_plane: f32,
    /// Far clip plane distance.
    pub far_plane: f32,
    /// Up direction for the view matrix.
    pub up: Vec3,
    /// View matrix looking along -Z from the entity's position.
    pub view: Mat4,
    /// Orthographic projection spanning the entity's scale.
    pub ortho: Mat4,
    /// Perspective projection.
    pub perspective: Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            field_of_view: std::f32::consts::FRAC_PI_4,
            near_plane: 0.1,
            far_plane: 100.0,
            up: Vec3::Y,
            view: Mat4::IDENTITY,
            ortho: Mat4::IDENTITY,
            perspective: Mat4::IDENTITY,
        }
    }
}

/// A component instance: one concrete data bag tagged by its kind.
///
/// The variant fixes the kind and the mask bit for the component's whole
/// lifetime. Dropping a `Component` drops the variant's data, whatever the
/// concrete type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Component {
    /// See [`Transform`].
    Transform(Transform),
    /// See [`Drawable`].
    Drawable(Drawable),
    /// See [`RigidBody`].
    RigidBody(RigidBody),
    /// See [`Sprite`].
    Sprite(Sprite),
    /// See [`Collider`].
    Collider(Collider),
    /// See [`Camera`].
    Camera(Camera),
}

impl Component {
    /// Returns the kind tag for this component.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Component::Transform(_) => ComponentKind::Transform,
            Component::Drawable(_) => ComponentKind::Drawable,
            Component::RigidBody(_) => ComponentKind::RigidBody,
            Component::Sprite(_) => ComponentKind::Sprite,
            Component::Collider(_) => ComponentKind::Collider,
            Component::Camera(_) => ComponentKind::Camera,
        }
    }

    /// Returns the single mask bit owned by this component's kind.
    #[must_use]
    pub const fn bit(&self) -> ComponentMask {
        self.kind().bit()
    }
}

impl From<Transform> for Component {
    fn from(value: Transform) -> Self {
        Component::Transform(value)
    }
}

impl From<Drawable> for Component {
    fn from(value: Drawable) -> Self {
        Component::Drawable(value)
    }
}

impl From<RigidBody> for Component {
    fn from(value: RigidBody) -> Self {
        Component::RigidBody(value)
    }
}

impl From<Sprite> for Component {
    fn from(value: Sprite) -> Self {
        Component::Sprite(value)
    }
}

impl From<Collider> for Component {
    fn from(value: Collider) -> Self {
        Component::Collider(value)
    }
}

impl From<Camera> for Component {
    fn from(value: Camera) -> Self {
        Component::Camera(value)
    }
}
