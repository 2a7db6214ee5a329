//! Camera matrix maintenance.
//!
//! Recomputes each camera entity's view, orthographic, and perspective
//! matrices from its transform every frame. Rendering reads the matrices
//! straight off the [`Camera`](ember_component::Camera) component.

use glam::{Mat4, Vec3};
use tracing::debug;

use ember_component::{ComponentKind, ComponentMask};
use ember_system::{System, SystemKind, SystemRegistrar, UpdateContext};

/// Distance of the camera eye from the world plane.
const EYE_DISTANCE: f32 = 5.0;

/// Keeps camera matrices in sync with camera transforms.
#[derive(Debug, Default)]
pub struct CameraSystem;

impl CameraSystem {
    /// Create the camera system.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl System for CameraSystem {
    fn name(&self) -> &str {
        "Camera System"
    }

    fn kind(&self) -> SystemKind {
        SystemKind::Camera
    }

    fn init(&mut self, registrar: &mut SystemRegistrar) {
        registrar.require(
            ComponentMask::ALIVE | ComponentKind::Transform.bit() | ComponentKind::Camera.bit(),
        );
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>, _dt: f32) {
        for &id in ctx.entities {
            let Ok(entity) = ctx.space.entity_mut(id) else {
                debug!(%id, "camera entity went stale; skipping");
                continue;
            };
            let Some(transform) = entity.transform().copied() else {
                continue;
            };
            let Some(camera) = entity.camera_mut() else {
                continue;
            };

            // Degenerate scale would make the projections singular.
            if transform.scale.x == 0.0 || transform.scale.y == 0.0 {
                continue;
            }

            camera.perspective = Mat4::perspective_rh_gl(
                camera.field_of_view,
                transform.scale.x / transform.scale.y,
                camera.near_plane,
                camera.far_plane,
            );

            camera.ortho = Mat4::orthographic_rh_gl(
                transform.position.x - transform.scale.x * 0.5,
                transform.position.x + transform.scale.x * 0.5,
                transform.position.y - transform.scale.y * 0.5,
                transform.position.y + transform.scale.y * 0.5,
                camera.near_plane,
                camera.far_plane,
            );

            camera.view = Mat4::look_at_rh(
                Vec3::new(transform.position.x, transform.position.y, EYE_DISTANCE),
                Vec3::new(transform.position.x, transform.position.y, 0.0),
                camera.up,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use ember_space::Space;
    use ember_system::MessageQueue;

    use super::*;

    fn run_once(space: &mut Space) {
        let mut system = CameraSystem::new();
        let mut registrar = SystemRegistrar::new();
        system.init(&mut registrar);

        let working_set = space.populate_entities(registrar.masks());
        let mut messages = MessageQueue::new();
        let mut ctx = UpdateContext::new(space, &working_set, &mut messages);
        system.update(&mut ctx, 1.0 / 60.0);
    }

    #[test]
    fn test_matrices_follow_the_transform() {
        let mut space = Space::new("test");
        let id = space.create_camera();
        {
            let transform = space.entity_mut(id).unwrap().transform_mut().unwrap();
            transform.position = Vec2::new(10.0, -4.0);
            transform.scale = Vec2::new(16.0, 9.0);
        }

        run_once(&mut space);

        let camera = space.entity(id).unwrap().camera().unwrap();
        assert_ne!(camera.view, Mat4::IDENTITY);
        assert_ne!(camera.ortho, Mat4::IDENTITY);
        assert_ne!(camera.perspective, Mat4::IDENTITY);

        // The view matrix maps the eye point to the origin.
        let eye = Vec3::new(10.0, -4.0, EYE_DISTANCE);
        let mapped = camera.view.transform_point3(eye);
        assert!(mapped.length() < 1e-4);
    }

    #[test]
    fn test_ignores_entities_without_camera() {
        let mut space = Space::new("test");
        let plain = {
            let mut entity = ember_component::Entity::new("plain");
            entity.attach(ember_component::Transform::default());
            space.add_entity(entity)
        };

        run_once(&mut space);
        // The transform-only entity never entered the working set.
        assert!(space.entity(plain).unwrap().camera().is_none());
    }

    #[test]
    fn test_degenerate_scale_is_skipped() {
        let mut space = Space::new("test");
        let id = space.create_camera();
        space
            .entity_mut(id)
            .unwrap()
            .transform_mut()
            .unwrap()
            .scale = Vec2::ZERO;

        run_once(&mut space);
        let camera = space.entity(id).unwrap().camera().unwrap();
        assert_eq!(camera.perspective, Mat4::IDENTITY);
    }

    #[test]
    fn test_tolerates_empty_working_set() {
        let mut space = Space::new("test");
        run_once(&mut space);
    }
}
