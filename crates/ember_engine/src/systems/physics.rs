//! Rigid-body motion integration.

use tracing::debug;

use ember_component::{ComponentKind, ComponentMask};
use ember_system::{System, SystemKind, SystemRegistrar, UpdateContext};

/// Integrates rigid-body velocity and position with semi-implicit Euler.
///
/// No fixed-step assumption: each update advances state by exactly the `dt`
/// it is given.
#[derive(Debug, Default)]
pub struct PhysicsSystem;

impl PhysicsSystem {
    /// Create the physics system.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl System for PhysicsSystem {
    fn name(&self) -> &str {
        "Physics System"
    }

    fn kind(&self) -> SystemKind {
        SystemKind::Physics
    }

    fn init(&mut self, registrar: &mut SystemRegistrar) {
        registrar.require(
            ComponentMask::ALIVE | ComponentKind::Transform.bit() | ComponentKind::RigidBody.bit(),
        );
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>, dt: f32) {
        for &id in ctx.entities {
            let Ok(entity) = ctx.space.entity_mut(id) else {
                debug!(%id, "physics entity went stale; skipping");
                continue;
            };
            let Some(body) = entity.rigid_body().copied() else {
                continue;
            };

            let velocity = body.velocity + body.acceleration * dt;
            if let Some(body) = entity.rigid_body_mut() {
                body.velocity = velocity;
            }
            if let Some(transform) = entity.transform_mut() {
                transform.position += velocity * dt;
            }
        }
    }
}
