//! The engine: frame loop, system dispatch, and message routing.
//!
//! The engine owns the active [`Space`], the ordered system list, and the
//! message queue. One frame is: route queued messages, then for each system
//! in registration order rebuild its working set and call `update`. Working
//! sets are rebuilt only between updates, never during one, so a system
//! always iterates the snapshot it was handed.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use ember_component::{ComponentMask, EntityId};
use ember_space::Space;
use ember_system::{Message, MessageQueue, System, SystemKind, SystemRegistrar, UpdateContext};

/// Configuration for the blocking frame loop.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Target frames per second.
    pub frame_rate: f64,
    /// Maximum number of frames to run (0 = until stopped).
    pub max_frames: u64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60.0,
            max_frames: 0,
        }
    }
}

/// Engine-owned record for one registered system: the system itself, the
/// masks it declared during `init`, and its current working-set snapshot.
struct SystemEntry {
    system: Box<dyn System>,
    masks: Vec<ComponentMask>,
    working_set: Vec<EntityId>,
}

/// The engine drives every registered system over the active space.
pub struct Engine {
    space: Space,
    systems: Vec<SystemEntry>,
    messages: MessageQueue,
    config: FrameConfig,
    frame_id: u64,
    running: bool,
    terminated: bool,
}

impl Engine {
    /// Create an engine over the given space with default frame settings.
    #[must_use]
    pub fn new(space: Space) -> Self {
        Self::with_config(space, FrameConfig::default())
    }

    /// Create an engine with an explicit [`FrameConfig`].
    #[must_use]
    pub fn with_config(space: Space, config: FrameConfig) -> Self {
        Self {
            space,
            systems: Vec::new(),
            messages: MessageQueue::new(),
            config,
            frame_id: 0,
            running: false,
            terminated: false,
        }
    }

    /// The active space.
    #[must_use]
    pub fn space(&self) -> &Space {
        &self.space
    }

    /// Mutable access to the active space.
    pub fn space_mut(&mut self) -> &mut Space {
        &mut self.space
    }

    /// The current frame counter.
    #[must_use]
    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }

    /// Register a system, appending it to the update order.
    ///
    /// The system's `init` runs immediately and exactly once; the masks it
    /// registers are captured into the engine-owned entry.
    pub fn add_system(&mut self, mut system: Box<dyn System>) {
        let mut registrar = SystemRegistrar::new();
        system.init(&mut registrar);
        let masks = registrar.into_masks();
        info!(
            system = system.name(),
            masks = masks.len(),
            "system registered"
        );
        self.systems.push(SystemEntry {
            system,
            masks,
            working_set: Vec::new(),
        });
    }

    /// Look up a registered system by its kind tag.
    #[must_use]
    pub fn system(&self, kind: SystemKind) -> Option<&dyn System> {
        self.systems
            .iter()
            .find(|entry| entry.system.kind() == kind)
            .map(|entry| entry.system.as_ref())
    }

    /// Queue a message for delivery at the start of the next frame.
    pub fn send_message(
        &mut self,
        sender: Option<EntityId>,
        recipient: Option<EntityId>,
        message: Message,
    ) {
        self.messages.send(sender, recipient, message);
    }

    /// Request the frame loop to exit after the current frame.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Run one frame: route messages, then populate and update every system
    /// in registration order.
    ///
    /// `dt` is the elapsed time in seconds since the previous frame. Calls
    /// after [`Engine::shutdown`] are ignored.
    pub fn frame(&mut self, dt: f32) {
        if self.terminated {
            warn!("frame called after shutdown; ignoring");
            return;
        }
        self.frame_id += 1;
        debug!(frame = self.frame_id, dt, "frame start");

        self.route_messages();

        for entry in &mut self.systems {
            entry.working_set = self.space.populate_entities(&entry.masks);
            let SystemEntry {
                system,
                working_set,
                ..
            } = entry;
            let mut ctx = UpdateContext::new(&mut self.space, working_set, &mut self.messages);
            system.update(&mut ctx, dt);
        }
    }

    /// Deliver every queued envelope to every system's `handle_message`.
    ///
    /// Recipient filtering is the receiving system's business. Messages sent
    /// during delivery land in the next frame's queue. A [`Message::Quit`]
    /// envelope also requests the frame loop to exit.
    fn route_messages(&mut self) {
        let envelopes = self.messages.drain();
        for envelope in &envelopes {
            debug!(message = ?envelope.message, "routing message");
            if envelope.message == Message::Quit {
                self.running = false;
            }
            for entry in &mut self.systems {
                let SystemEntry {
                    system,
                    working_set,
                    ..
                } = entry;
                let mut ctx =
                    UpdateContext::new(&mut self.space, working_set, &mut self.messages);
                system.handle_message(&mut ctx, envelope);
            }
        }
    }

    /// Run the blocking fixed-timestep frame loop.
    ///
    /// Exits when [`Engine::stop`] is called (directly or via a
    /// [`Message::Quit`] envelope) or after `max_frames` frames.
    pub fn run(&mut self) {
        let frame_budget = Duration::from_secs_f64(1.0 / self.config.frame_rate);
        let mut frames = 0u64;
        self.running = true;

        info!(
            frame_rate = self.config.frame_rate,
            max_frames = self.config.max_frames,
            "starting frame loop"
        );

        while self.running {
            let start = Instant::now();

            self.frame(frame_budget.as_secs_f32());

            frames += 1;
            if self.config.max_frames > 0 && frames >= self.config.max_frames {
                info!(frames, "frame loop complete");
                break;
            }

            let elapsed = start.elapsed();
            if elapsed < frame_budget {
                std::thread::sleep(frame_budget - elapsed);
            } else {
                warn!(
                    frame = self.frame_id,
                    elapsed_ms = elapsed.as_millis() as u64,
                    budget_ms = frame_budget.as_millis() as u64,
                    "frame exceeded time budget"
                );
            }
        }
        self.running = false;
    }

    /// Tear the engine down: run each system's `shutdown` exactly once, in
    /// registration order, then clear the space.
    ///
    /// Idempotent; no further frames are serviced afterwards.
    pub fn shutdown(&mut self) {
        if self.terminated {
            return;
        }
        self.terminated = true;
        self.running = false;
        for entry in &mut self.systems {
            entry.system.shutdown();
        }
        self.space.clear();
        info!(frames = self.frame_id, "engine shut down");
    }
}
