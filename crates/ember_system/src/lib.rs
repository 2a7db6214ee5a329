//! # ember_system
//!
//! The "S" in the Ember ECS — the behaviour contract systems implement and
//! the plumbing the engine uses to drive them.
//!
//! This crate provides:
//!
//! - [`System`] — the lifecycle trait (`init` / `update` / `shutdown` /
//!   `handle_message`).
//! - [`SystemRegistrar`] — collects the component masks a system requires.
//! - [`UpdateContext`] — per-frame context injected into every dispatch,
//!   replacing any global engine state.
//! - [`Message`] / [`Envelope`] / [`MessageQueue`] — the routed message set.

pub mod context;
pub mod message;
pub mod system;

pub use context::UpdateContext;
pub use message::{Envelope, Message, MessageQueue};
pub use system::{System, SystemKind, SystemRegistrar};
