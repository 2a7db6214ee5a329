//! # ember_engine
//!
//! The engine layer of Ember: owns the active space and the ordered system
//! list, drives the per-frame update loop, and routes messages between
//! entities and systems.
//!
//! This crate provides:
//!
//! - [`Engine`] — registration, frame dispatch, message routing, shutdown.
//! - [`FrameConfig`] — fixed-timestep loop settings.
//! - [`systems`] — the built-in camera and physics systems.

pub mod engine;
pub mod systems;

pub use engine::{Engine, FrameConfig};
pub use systems::{CameraSystem, PhysicsSystem};
