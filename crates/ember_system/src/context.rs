//! Per-frame execution context handed to systems.
//!
//! Systems receive everything they act on through [`UpdateContext`] instead
//! of reaching for global engine state: the active space, their own working
//! set snapshot, and the outgoing message sink.

use ember_component::EntityId;
use ember_space::Space;

use crate::message::{Message, MessageQueue};

/// Context provided to a system for one `update` or `handle_message` call.
///
/// The working set in `entities` is the snapshot produced by the last
/// population rebuild. Entities removed from the space since that rebuild
/// report as stale on access; systems treat that as "skip", not as a fault.
#[derive(Debug)]
pub struct UpdateContext<'a> {
    /// The active space.
    pub space: &'a mut Space,
    /// The system's current working set, in space insertion order.
    pub entities: &'a [EntityId],
    /// Sink for messages to deliver next frame.
    pub messages: &'a mut MessageQueue,
}

impl<'a> UpdateContext<'a> {
    /// Assemble a context for one dispatch.
    #[must_use]
    pub fn new(
        space: &'a mut Space,
        entities: &'a [EntityId],
        messages: &'a mut MessageQueue,
    ) -> Self {
        Self {
            space,
            entities,
            messages,
        }
    }

    /// Queue a broadcast message (no sender, no recipient).
    pub fn broadcast(&mut self, message: Message) {
        self.messages.send(None, None, message);
    }
}
