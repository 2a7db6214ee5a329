//! Demo binary: a bouncing-points world driven for a bounded number of
//! frames, with structured logging enabled.

use anyhow::Result;
use glam::Vec2;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ember_component::{Entity, RigidBody, Sprite, Transform};
use ember_engine::{CameraSystem, Engine, FrameConfig, PhysicsSystem};
use ember_space::Space;

fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("ember_engine=info".parse()?))
        .init();

    info!("ember demo starting");

    let mut space = Space::new("Demo World");
    space.create_camera();
    for i in 0..4 {
        let mut entity = Entity::new(format!("mote {i}"));
        entity.attach(Transform::from_position(Vec2::new(i as f32, 0.0)));
        entity.attach(RigidBody {
            velocity: Vec2::new(0.0, 1.0 + i as f32),
            acceleration: Vec2::new(0.0, -9.8),
        });
        entity.attach(Sprite::default());
        space.add_entity(entity);
    }

    let config = FrameConfig {
        frame_rate: 60.0,
        max_frames: 120,
    };
    let mut engine = Engine::with_config(space, config);
    engine.add_system(Box::new(CameraSystem::new()));
    engine.add_system(Box::new(PhysicsSystem::new()));

    engine.run();

    let camera = engine.space().camera().expect("camera was created");
    let view = engine.space().entity(camera)?.camera().expect("camera component").view;
    info!(?view, "final camera view");

    engine.shutdown();
    info!("ember demo finished");
    Ok(())
}
