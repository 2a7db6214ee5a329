//! Messages routed between entities and systems.
//!
//! Systems never talk to each other directly. Input and control intents are
//! queued as [`Envelope`]s on the engine's [`MessageQueue`] and delivered to
//! every system's `handle_message` hook at the start of the next frame.

use serde::{Deserialize, Serialize};

use ember_component::EntityId;

/// The closed message set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Directional input: up.
    Up,
    /// Directional input: down.
    Down,
    /// Directional input: left.
    Left,
    /// Directional input: right.
    Right,
    /// Back / escape.
    Back,
    /// Space bar / confirm.
    Space,
    /// Toggle windowed/fullscreen presentation.
    ToggleFullscreen,
    /// Stop the engine after the current frame.
    Quit,
}

/// A message together with its routing endpoints.
///
/// `None` for either endpoint means broadcast/global: input systems send with
/// no sender, and most recipients are "whoever is interested".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// The entity that originated the message, if any.
    pub sender: Option<EntityId>,
    /// The target entity, or `None` for broadcast.
    pub recipient: Option<EntityId>,
    /// The message itself.
    pub message: Message,
}

/// An ordered queue of pending envelopes.
///
/// Systems write into the queue through their update context; the engine
/// drains it once per frame, before any system updates.
#[derive(Debug, Default)]
pub struct MessageQueue {
    pending: Vec<Envelope>,
}

impl MessageQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a message for delivery on the next frame.
    pub fn send(
        &mut self,
        sender: Option<EntityId>,
        recipient: Option<EntityId>,
        message: Message,
    ) {
        self.pending.push(Envelope {
            sender,
            recipient,
            message,
        });
    }

    /// Take all pending envelopes, in send order, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Envelope> {
        std::mem::take(&mut self.pending)
    }

    /// The number of pending envelopes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
