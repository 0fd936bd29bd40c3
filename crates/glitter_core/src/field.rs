//! # Particle Field
//!
//! The accumulate/update/cull loop.
//!
//! ## Tick Order
//!
//! 1. Cull: drop particles whose *current* radius is below zero
//! 2. Update: drift, fall and shrink every survivor
//! 3. Spawn: if an input is pending, append one burst and clear the slot
//!
//! Culling looks at the radius before the update, so a particle that reaches
//! exactly `0` is still kept, and one that goes negative stays in the list for
//! one more tick. Renderers should draw [`ParticleField::visible`].
//!
//! Only [`ParticleField::tick`] mutates particles. [`ParticleField::on_input`]
//! just records where the next burst goes; several inputs between two ticks
//! collapse into the last one.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::{Clock, SystemClock};
use crate::color::{burst_color, Rgb};
use crate::config::GlitterConfig;
use crate::particle::{Particle, Point};

/// What a single tick did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Particles carried into the next collection.
    pub survived: u32,
    /// Particles dropped because their radius was below zero.
    pub expired: u32,
    /// Particles spawned by a pending input.
    pub spawned: u32,
}

impl TickReport {
    /// Size of the collection after the tick.
    #[must_use]
    pub const fn population(&self) -> u32 {
        self.survived + self.spawned
    }
}

/// Lifetime counters of a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldStats {
    /// Ticks executed.
    pub ticks: u64,
    /// Bursts spawned (inputs consumed).
    pub bursts: u64,
    /// Particles spawned.
    pub spawned: u64,
    /// Particles culled.
    pub expired: u64,
    /// Largest collection seen after a tick.
    pub peak_population: u32,
}

/// A collection of transient glitter particles.
pub struct ParticleField<C = SystemClock> {
    /// Effect parameters.
    config: GlitterConfig,
    /// Current collection, exposed to renderers.
    particles: Vec<Particle>,
    /// Scratch buffer for the next collection (swapped in each tick).
    next: Vec<Particle>,
    /// Where the next burst spawns.
    pending: Option<Point>,
    /// Jitter and drift source.
    rng: StdRng,
    /// Time source for burst colors.
    clock: C,
    /// Lifetime counters.
    stats: FieldStats,
}

impl ParticleField<SystemClock> {
    /// Creates a field that colors bursts by wall-clock time.
    #[must_use]
    pub fn new(config: GlitterConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> ParticleField<C> {
    /// Creates a field with a custom clock.
    #[must_use]
    pub fn with_clock(config: GlitterConfig, clock: C) -> Self {
        let seed = config.seed.unwrap_or_else(time_seed);
        tracing::debug!(seed, count = config.count, "particle field created");

        Self {
            config,
            particles: Vec::new(),
            next: Vec::new(),
            pending: None,
            rng: StdRng::seed_from_u64(seed),
            clock,
            stats: FieldStats::default(),
        }
    }

    /// Records where the next burst should spawn.
    ///
    /// Overwrites any input the field has not consumed yet.
    pub fn on_input(&mut self, point: Point) {
        if let Some(previous) = self.pending.replace(point) {
            tracing::trace!(?previous, ?point, "unconsumed input overwritten");
        }
    }

    /// Advances the field by one step.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        let decay = self.config.decay;
        let gravity = self.config.gravity;
        // Half the decay keeps the shrinking glyph centred on its spot.
        let shift = decay / 2.0 + 1.0;

        self.next.clear();
        self.next.reserve(self.particles.len());

        for particle in &self.particles {
            if !particle.is_alive() {
                report.expired += 1;
                continue;
            }

            let drift = Point::new(
                shift - self.rng.gen::<f32>() * 2.0,
                shift - self.rng.gen::<f32>() * 2.0 + gravity,
            );
            self.next.push(Particle {
                position: particle.position + drift,
                radius: particle.radius - decay,
                color: particle.color,
            });
            report.survived += 1;
        }

        if let Some(origin) = self.pending.take() {
            let color = burst_color(self.clock.now_secs());
            report.spawned = self.spawn_burst(origin, color);
            self.stats.bursts += 1;
            tracing::debug!(
                x = origin.x,
                y = origin.y,
                %color,
                spawned = report.spawned,
                "glitter burst"
            );
        }

        std::mem::swap(&mut self.particles, &mut self.next);

        self.stats.ticks += 1;
        self.stats.spawned += u64::from(report.spawned);
        self.stats.expired += u64::from(report.expired);
        self.stats.peak_population = self.stats.peak_population.max(report.population());

        tracing::trace!(
            survived = report.survived,
            expired = report.expired,
            spawned = report.spawned,
            "tick"
        );
        report
    }

    /// Appends `count` particles jittered around `origin`.
    fn spawn_burst(&mut self, origin: Point, color: Rgb) -> u32 {
        let count = self.config.count;
        let spread = self.config.spread;
        let half = spread / 2.0;

        self.next.reserve(count as usize);
        for _ in 0..count {
            let jitter = Point::new(
                self.rng.gen::<f32>() * spread - half,
                self.rng.gen::<f32>() * spread - half,
            );
            self.next
                .push(Particle::new(origin + jitter, self.config.size, color));
        }
        count
    }

    /// Drops every particle and any pending input.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.next.clear();
        self.pending = None;
    }

    /// The current collection, including particles waiting to be culled.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Particles a renderer should draw (radius not negative).
    pub fn visible(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.particles.iter().filter(|p| p.is_alive())
    }

    /// Input waiting for the next tick.
    #[must_use]
    pub fn pending_input(&self) -> Option<Point> {
        self.pending
    }

    /// True when there is nothing to animate and nothing to spawn.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.particles.is_empty() && self.pending.is_none()
    }

    /// Number of particles in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Effect parameters.
    #[must_use]
    pub fn config(&self) -> &GlitterConfig {
        &self.config
    }

    /// Lifetime counters.
    #[must_use]
    pub fn stats(&self) -> FieldStats {
        self.stats
    }

    /// The clock used for burst colors.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

/// Seed derived from the system time when none is configured.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn field(config: GlitterConfig) -> ParticleField<ManualClock> {
        ParticleField::with_clock(
            GlitterConfig {
                seed: Some(1),
                ..config
            },
            ManualClock::new(12.0),
        )
    }

    #[test]
    fn test_input_spawns_on_next_tick_only() {
        let mut field = field(GlitterConfig::default());

        field.on_input(Point::new(10.0, 10.0));
        assert!(field.is_empty());
        assert_eq!(field.pending_input(), Some(Point::new(10.0, 10.0)));
        assert!(!field.is_idle());

        let report = field.tick();
        assert_eq!(report.spawned, 8);
        assert_eq!(field.len(), 8);
        assert_eq!(field.pending_input(), None);
    }

    #[test]
    fn test_new_field_is_idle() {
        let mut field = field(GlitterConfig::default());
        assert!(field.is_idle());

        let report = field.tick();
        assert_eq!(report, TickReport::default());
        assert!(field.is_idle());
    }

    #[test]
    fn test_radius_decreases_by_decay() {
        let mut field = field(GlitterConfig {
            decay: 0.5,
            ..GlitterConfig::default()
        });
        field.on_input(Point::ZERO);
        field.tick();

        for step in 1..=10 {
            field.tick();
            for p in field.particles() {
                let expected = 16.0 - 0.5 * step as f32;
                assert!((p.radius - expected).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_survives_at_exact_zero_then_culled() {
        // 16 / 0.5 = 32 updates to reach exactly zero.
        let mut field = field(GlitterConfig {
            decay: 0.5,
            count: 3,
            ..GlitterConfig::default()
        });
        field.on_input(Point::ZERO);
        field.tick();

        for _ in 0..32 {
            field.tick();
        }
        assert_eq!(field.len(), 3);
        assert!(field.particles().iter().all(|p| p.radius == 0.0));
        assert_eq!(field.visible().count(), 3);

        // Zero passes the cull, goes negative, is hidden.
        let report = field.tick();
        assert_eq!(report.survived, 3);
        assert_eq!(field.len(), 3);
        assert_eq!(field.visible().count(), 0);

        // Negative is culled.
        let report = field.tick();
        assert_eq!(report.expired, 3);
        assert!(field.is_empty());
        assert!(field.is_idle());
    }

    #[test]
    fn test_gravity_pulls_down_on_average() {
        let mut field = field(GlitterConfig {
            count: 200,
            spread: 0.0,
            gravity: 2.5,
            decay: 0.0,
            ..GlitterConfig::default()
        });
        field.on_input(Point::new(0.0, 0.0));
        field.tick();
        field.tick();

        let n = field.len() as f32;
        let mean_x: f32 = field.particles().iter().map(|p| p.position.x).sum::<f32>() / n;
        let mean_y: f32 = field.particles().iter().map(|p| p.position.y).sum::<f32>() / n;

        // Jitter is zero-mean in [-1, 1); gravity adds 2.5 on y.
        assert!(mean_x.abs() < 0.3, "mean x drift {mean_x}");
        assert!((mean_y - 2.5).abs() < 0.3, "mean y drift {mean_y}");
        for p in field.particles() {
            assert!(p.position.x >= -1.0 && p.position.x <= 1.0);
            assert!(p.position.y >= 1.5 && p.position.y <= 3.5);
        }
    }

    #[test]
    fn test_zero_decay_never_expires() {
        let mut field = field(GlitterConfig {
            decay: 0.0,
            ..GlitterConfig::default()
        });
        field.on_input(Point::ZERO);
        for _ in 0..500 {
            field.tick();
        }
        assert_eq!(field.len(), 8);
        assert!(field.particles().iter().all(|p| (p.radius - 16.0).abs() < f32::EPSILON));
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut field = field(GlitterConfig::default());
        field.on_input(Point::ZERO);
        field.tick();
        field.on_input(Point::new(5.0, 5.0));

        field.clear();
        assert!(field.is_idle());
        assert_eq!(field.tick(), TickReport::default());
    }

    #[test]
    fn test_stats_accumulate() {
        let mut field = field(GlitterConfig {
            count: 4,
            decay: 8.0,
            ..GlitterConfig::default()
        });
        field.on_input(Point::ZERO);
        field.tick(); // spawn at 16
        field.on_input(Point::ZERO);
        field.tick(); // 8, spawn 4 more
        field.tick(); // 0, 8
        field.tick(); // -8, 0
        field.tick(); // culled 4, -8
        field.tick(); // culled 4

        let stats = field.stats();
        assert_eq!(stats.ticks, 6);
        assert_eq!(stats.bursts, 2);
        assert_eq!(stats.spawned, 8);
        assert_eq!(stats.expired, 8);
        assert_eq!(stats.peak_population, 8);
        assert!(field.is_empty());
    }

    #[test]
    fn test_same_seed_same_burst() {
        let mut a = field(GlitterConfig::default());
        let mut b = field(GlitterConfig::default());
        a.on_input(Point::new(50.0, 60.0));
        b.on_input(Point::new(50.0, 60.0));
        a.tick();
        b.tick();
        assert_eq!(a.particles(), b.particles());
    }
}
