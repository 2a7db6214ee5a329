//! # ember_component
//!
//! The "C" in the Ember ECS — defines what a component is, which kinds
//! exist, and how entities own them.
//!
//! This crate provides:
//!
//! - [`ComponentKind`] — the closed enumeration of component kinds.
//! - [`ComponentMask`] — the bitset used for system interest matching, with
//!   one bit per kind plus the reserved alive bit.
//! - [`Component`] — the tagged union of concrete component data.
//! - [`Entity`] / [`EntityId`] — entity records and generational handles.

pub mod component;
pub mod entity;
pub mod mask;

pub use component::{Camera, Collider, Component, Drawable, RigidBody, Sprite, Transform};
pub use entity::{Entity, EntityId};
pub use mask::{ComponentKind, ComponentMask};
