//! The [`System`] trait and mask registration.
//!
//! A system's lifecycle is `init` (exactly once, registers required masks)
//! → `update` (once per frame, engine-defined order) → `shutdown` (exactly
//! once, after the last update). The engine owns the registered masks and
//! the working set; the system only declares interest and consumes the
//! snapshot it is handed each frame.

use ember_component::ComponentMask;

use crate::context::UpdateContext;
use crate::message::Envelope;

/// Tags identifying each system for engine lookup.
///
/// Like the component kind table, this enumeration is append-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemKind {
    /// Recomputes camera matrices from transforms.
    Camera,
    /// Integrates rigid-body motion.
    Physics,
    /// Window/input frontend (acts on global state, takes no entities).
    Window,
    /// Test scaffolding.
    Test,
}

/// Collects the masks a system declares during `init`.
///
/// The registered-mask list belongs to the engine's per-system record, not
/// to each concrete system: systems declare, the engine remembers.
#[derive(Debug, Default)]
pub struct SystemRegistrar {
    masks: Vec<ComponentMask>,
}

impl SystemRegistrar {
    /// Create an empty registrar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare one required mask.
    ///
    /// A system may register several masks; an entity matching ANY of them
    /// joins the working set. Registering
    /// [`ComponentMask::NO_OBJECTS`] opts the system out of population
    /// entirely, regardless of other registered masks.
    pub fn require(&mut self, mask: ComponentMask) {
        self.masks.push(mask);
    }

    /// The masks registered so far.
    #[must_use]
    pub fn masks(&self) -> &[ComponentMask] {
        &self.masks
    }

    /// Consume the registrar, yielding the registered masks.
    #[must_use]
    pub fn into_masks(self) -> Vec<ComponentMask> {
        self.masks
    }
}

/// A behaviour unit driven once per frame over its working set.
pub trait System {
    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// The lookup tag for this system.
    fn kind(&self) -> SystemKind;

    /// Called exactly once, before the first `update`. Registers the
    /// component masks this system requires.
    fn init(&mut self, registrar: &mut SystemRegistrar);

    /// Called once per frame with the current working-set snapshot.
    ///
    /// `dt` is the non-negative elapsed time in seconds since the previous
    /// frame. Implementations must tolerate an empty working set.
    fn update(&mut self, ctx: &mut UpdateContext<'_>, dt: f32);

    /// Called exactly once at engine teardown, after the last `update`.
    fn shutdown(&mut self) {}

    /// Optional hook invoked for each routed message.
    ///
    /// An envelope with a `None` recipient is a broadcast; recipients decide
    /// for themselves which messages concern them.
    fn handle_message(&mut self, ctx: &mut UpdateContext<'_>, envelope: &Envelope) {
        let _ = (ctx, envelope);
    }
}
