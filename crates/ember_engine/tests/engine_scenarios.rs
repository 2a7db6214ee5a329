//! End-to-end scenarios driving the engine with the built-in systems.

use glam::{Mat4, Vec2};

use ember_component::{ComponentKind, ComponentMask, Entity, RigidBody, Transform};
use ember_engine::{CameraSystem, Engine, PhysicsSystem};
use ember_space::Space;
use ember_system::Message;

fn mote(name: &str, velocity: Vec2) -> Entity {
    let mut entity = Entity::new(name);
    entity.attach(Transform::default());
    entity.attach(RigidBody {
        velocity,
        acceleration: Vec2::ZERO,
    });
    entity
}

#[test]
fn camera_and_physics_share_one_world() {
    let mut space = Space::new("World1");
    let camera = space.create_camera();
    let mover = space.add_entity(mote("mover", Vec2::new(1.0, 0.0)));
    let idle = space.create_entity("idle");

    let mut engine = Engine::new(space);
    engine.add_system(Box::new(CameraSystem::new()));
    engine.add_system(Box::new(PhysicsSystem::new()));

    engine.frame(0.5);
    engine.frame(0.5);

    let space = engine.space();
    // The camera system only touched the camera entity.
    let view = space.entity(camera).unwrap().camera().unwrap().view;
    assert_ne!(view, Mat4::IDENTITY);

    // The physics system only moved the rigid body.
    let position = space.entity(mover).unwrap().transform().unwrap().position;
    assert_eq!(position, Vec2::new(1.0, 0.0));
    assert!(space.entity(idle).unwrap().transform().is_none());
}

#[test]
fn population_matches_direct_queries() {
    let mut space = Space::new("World1");
    let camera = space.create_camera();
    space.create_entity("plain-1");
    let second = space.create_entity("plain-2");
    space
        .entity_mut(second)
        .unwrap()
        .attach(RigidBody::default());

    // Three entities alive, in creation order.
    assert_eq!(space.get_entities(ComponentMask::ALIVE).len(), 3);
    assert_eq!(
        space.get_entities(ComponentMask::ALIVE | ComponentKind::RigidBody.bit()),
        vec![second]
    );

    // A Transform|Camera system sees exactly the camera entity.
    let camera_mask =
        ComponentMask::ALIVE | ComponentKind::Transform.bit() | ComponentKind::Camera.bit();
    assert_eq!(space.populate_entities(&[camera_mask]), vec![camera]);
    assert_eq!(
        space.populate_entities(&[camera_mask]),
        space.get_entities(camera_mask)
    );
}

#[test]
fn removal_during_a_frame_is_reflected_next_frame() {
    let mut space = Space::new("World1");
    let doomed = space.add_entity(mote("doomed", Vec2::new(1.0, 0.0)));
    let survivor = space.add_entity(mote("survivor", Vec2::new(1.0, 0.0)));

    let mut engine = Engine::new(space);
    engine.add_system(Box::new(PhysicsSystem::new()));

    engine.frame(1.0);
    engine.space_mut().remove_entity(doomed);
    engine.frame(1.0);

    assert!(engine.space().entity(doomed).is_err());
    let position = engine
        .space()
        .entity(survivor)
        .unwrap()
        .transform()
        .unwrap()
        .position;
    assert_eq!(position, Vec2::new(2.0, 0.0));
}

#[test]
fn quit_message_ends_the_run() {
    let mut engine = Engine::new(Space::new("World1"));
    engine.add_system(Box::new(PhysicsSystem::new()));
    engine.send_message(None, None, Message::Quit);

    engine.run();
    assert_eq!(engine.frame_id(), 1);

    engine.shutdown();
    assert_eq!(engine.space().entity_count(), 0);
}
