//! # Glitter Component
//!
//! One click effect bound to one surface.
//!
//! ## Lifecycle
//!
//! ```text
//! new ──► activate ──► handle(event)* / frame() ──► deactivate
//!             │                                        │
//!        timer task spawned                 timer cancelled, field cleared
//! ```
//!
//! The pointer binding is chosen once from [`DeviceCapabilities`] when the
//! component is built.

use glitter_core::{Clock, FieldStats, GlitterConfig, ParticleField, SystemClock};
use glitter_ui::{
    pointer_for, DeviceCapabilities, GlyphBatch, GlyphSurface, PointerEvent, PointerInput,
    PointerKind, SchedulerResult, TickScheduler, TickStats,
};

/// Snapshot of component counters.
#[derive(Clone, Copy, Debug)]
pub struct GlitterStats {
    /// Particles currently in the field.
    pub population: usize,
    /// Field counters.
    pub field: FieldStats,
    /// Scheduler timing.
    pub ticks: TickStats,
}

/// The glitter click effect.
pub struct Glitter<C: Clock + 'static = SystemClock> {
    /// Platform binding picked at construction.
    pointer: Box<dyn PointerInput>,
    /// Particle field and its timer.
    scheduler: TickScheduler<ParticleField<C>>,
}

impl Glitter<SystemClock> {
    /// Creates an inactive component colored by wall-clock time.
    #[must_use]
    pub fn new(config: GlitterConfig, capabilities: DeviceCapabilities) -> Self {
        Self::with_clock(config, capabilities, SystemClock)
    }
}

impl<C: Clock + 'static> Glitter<C> {
    /// Creates an inactive component with a custom clock.
    #[must_use]
    pub fn with_clock(config: GlitterConfig, capabilities: DeviceCapabilities, clock: C) -> Self {
        let kind = PointerKind::detect(capabilities);
        let period = config.tick_interval();
        tracing::info!(?kind, period_ms = config.tick_interval_ms, "glitter created");

        Self {
            pointer: pointer_for(kind),
            scheduler: TickScheduler::new(ParticleField::with_clock(config, clock), period),
        }
    }

    /// Starts the tick timer.
    ///
    /// # Errors
    ///
    /// Fails when called outside a Tokio runtime.
    pub fn activate(&mut self) -> SchedulerResult<()> {
        self.scheduler.start()
    }

    /// Stops the tick timer and drops every particle.
    pub fn deactivate(&mut self) {
        self.scheduler.stop();
        self.scheduler.update(ParticleField::clear);
    }

    /// Feeds a raw pointer event.
    ///
    /// Returns true if the event was a press this component's binding
    /// accepts. Events are ignored while the component is inactive.
    pub fn handle(&self, event: &PointerEvent) -> bool {
        if !self.scheduler.is_active() {
            return false;
        }

        match self.pointer.locate(event) {
            Some(point) => {
                self.scheduler.update(|field| field.on_input(point));
                true
            }
            None => false,
        }
    }

    /// Glyphs for the current state of the field.
    #[must_use]
    pub fn frame(&self) -> GlyphBatch {
        self.scheduler
            .inspect(|field| GlyphBatch::from_particles(field.particles()))
    }

    /// Draws the current frame on `surface`.
    pub fn draw(&self, surface: &mut impl GlyphSurface) {
        surface.draw(&self.frame());
    }

    /// The pointer kind picked for this device.
    #[must_use]
    pub fn pointer_kind(&self) -> PointerKind {
        self.pointer.kind()
    }

    /// True while the component is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.scheduler.is_active()
    }

    /// True while a tick is scheduled (something to animate).
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.scheduler.is_scheduled()
    }

    /// Counter snapshot.
    #[must_use]
    pub fn stats(&self) -> GlitterStats {
        let (population, field) = self
            .scheduler
            .inspect(|field| (field.len(), field.stats()));

        GlitterStats {
            population,
            field,
            ticks: self.scheduler.stats(),
        }
    }
}
