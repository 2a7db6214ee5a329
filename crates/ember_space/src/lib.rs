//! # ember_space
//!
//! The [`Space`] world container for the Ember engine: entity lifetime,
//! camera designation, ordered queries, and working-set population.
//!
//! Entities are arena-allocated and addressed by generational
//! [`EntityId`](ember_component::EntityId) handles, so a handle retained past
//! its entity's removal is detected ([`SpaceError::StaleEntity`]) rather than
//! dereferencing reused storage.

pub mod space;

pub use space::{Space, SpaceError};
