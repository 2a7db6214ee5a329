//! Built-in systems shipped with the engine.

pub mod camera;
pub mod physics;

pub use camera::CameraSystem;
pub use physics::PhysicsSystem;
