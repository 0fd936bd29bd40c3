//! # Tick Scheduler
//!
//! Drives a [`TickTarget`] on a fixed period with a single Tokio timer task.
//!
//! ## Design
//!
//! The scheduler must:
//! - Run at most one periodic task per target
//! - Sleep without a timer while the target is idle
//! - Resume on the next [`TickScheduler::update`], ticking one period later
//! - Leave no timer behind after [`TickScheduler::stop`] or drop
//!
//! ```text
//!            update() ──► notify
//!                            │
//!  ┌──────────┐  idle   ┌────▼─────┐  not idle  ┌───────────┐
//!  │ Running  ├────────►│  Parked  ├───────────►│ Scheduled │──► tick()
//!  └────▲─────┘         └──────────┘            └─────┬─────┘
//!       └─────────────────────────────────────────────┘
//! ```
//!
//! The target sits behind a mutex that is never held across an await point,
//! so a current-thread runtime is enough.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use glitter_core::{Clock, ParticleField};
use parking_lot::Mutex;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::error::{SchedulerError, SchedulerResult};

/// Something that advances one step at a time and can report it has no work.
pub trait TickTarget: Send + 'static {
    /// Advances one step.
    fn tick(&mut self);

    /// True when ticking would do nothing until new input arrives.
    fn is_idle(&self) -> bool;
}

impl<C: Clock + 'static> TickTarget for ParticleField<C> {
    fn tick(&mut self) {
        ParticleField::tick(self);
    }

    fn is_idle(&self) -> bool {
        ParticleField::is_idle(self)
    }
}

/// Tick timing statistics.
#[derive(Clone, Copy, Debug)]
pub struct TickStats {
    /// Minimum tick duration observed.
    pub min_tick_us: u64,
    /// Maximum tick duration observed.
    pub max_tick_us: u64,
    /// Average tick duration (rolling).
    pub avg_tick_us: u64,
    /// Number of late ticks (took longer than the period).
    pub late_ticks: u64,
    /// Total ticks measured.
    pub total_ticks: u64,
}

impl TickStats {
    /// Records one tick. Returns true if it overran `period`.
    pub fn record(&mut self, duration: Duration, period: Duration) -> bool {
        let duration_us = duration.as_micros() as u64;

        self.min_tick_us = self.min_tick_us.min(duration_us);
        self.max_tick_us = self.max_tick_us.max(duration_us);
        self.avg_tick_us = if self.total_ticks == 0 {
            duration_us
        } else {
            (self.avg_tick_us * 15 + duration_us) / 16
        };
        self.total_ticks += 1;

        let late = duration > period;
        if late {
            self.late_ticks += 1;
        }
        late
    }
}

impl Default for TickStats {
    fn default() -> Self {
        Self {
            min_tick_us: u64::MAX,
            max_tick_us: 0,
            avg_tick_us: 0,
            late_ticks: 0,
            total_ticks: 0,
        }
    }
}

/// State shared between the scheduler handle and its timer task.
struct Shared<T> {
    target: Mutex<T>,
    wake: Notify,
    scheduled: AtomicBool,
    ticks: AtomicU64,
    stats: Mutex<TickStats>,
}

/// Fixed-period driver for a [`TickTarget`].
pub struct TickScheduler<T: TickTarget> {
    /// Target and counters, shared with the task.
    shared: Arc<Shared<T>>,
    /// Time between ticks.
    period: Duration,
    /// The running timer task, if active.
    task: Option<JoinHandle<()>>,
}

impl<T: TickTarget> TickScheduler<T> {
    /// Shortest period accepted. Tokio rejects a zero interval.
    pub const MIN_PERIOD: Duration = Duration::from_millis(1);

    /// Creates an inactive scheduler.
    #[must_use]
    pub fn new(target: T, period: Duration) -> Self {
        Self {
            shared: Arc::new(Shared {
                target: Mutex::new(target),
                wake: Notify::new(),
                scheduled: AtomicBool::new(false),
                ticks: AtomicU64::new(0),
                stats: Mutex::new(TickStats::default()),
            }),
            period: period.max(Self::MIN_PERIOD),
            task: None,
        }
    }

    /// Spawns the timer task on the current Tokio runtime.
    ///
    /// Does nothing if the scheduler is already active.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::NoRuntime`] when called outside a runtime.
    pub fn start(&mut self) -> SchedulerResult<()> {
        if self.is_active() {
            return Ok(());
        }

        let runtime = tokio::runtime::Handle::try_current().map_err(|_| SchedulerError::NoRuntime)?;
        let shared = Arc::clone(&self.shared);
        self.task = Some(runtime.spawn(run(shared, self.period)));

        tracing::info!(period_ms = self.period.as_millis() as u64, "tick scheduler started");
        Ok(())
    }

    /// Cancels the timer task.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            self.shared.scheduled.store(false, Ordering::Release);
            tracing::info!(ticks = self.tick_count(), "tick scheduler stopped");
        }
    }

    /// True between [`start`](Self::start) and [`stop`](Self::stop).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// True while a timer is armed for the next tick.
    ///
    /// False when stopped or parked on an idle target.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.is_active() && self.shared.scheduled.load(Ordering::Acquire)
    }

    /// Mutates the target and wakes the task if it is parked.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.shared.target.lock());
        self.shared.wake.notify_one();
        result
    }

    /// Reads the target.
    pub fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.shared.target.lock())
    }

    /// Ticks executed since creation.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.shared.ticks.load(Ordering::Acquire)
    }

    /// Tick timing statistics.
    #[must_use]
    pub fn stats(&self) -> TickStats {
        *self.shared.stats.lock()
    }

    /// Time between ticks.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }
}

impl<T: TickTarget> Drop for TickScheduler<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Timer task body.
async fn run<T: TickTarget>(shared: Arc<Shared<T>>, period: Duration) {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        let idle = shared.target.lock().is_idle();
        if idle {
            shared.scheduled.store(false, Ordering::Release);
            tracing::debug!("tick scheduler parked");

            shared.wake.notified().await;

            interval.reset();
            tracing::debug!("tick scheduler resumed");
            continue;
        }

        shared.scheduled.store(true, Ordering::Release);
        interval.tick().await;

        let started = std::time::Instant::now();
        shared.target.lock().tick();
        let elapsed = started.elapsed();

        let tick = shared.ticks.fetch_add(1, Ordering::AcqRel) + 1;
        let late = shared.stats.lock().record(elapsed, period);
        if late {
            tracing::warn!(tick, elapsed_us = elapsed.as_micros() as u64, "late tick");
        }
    }
}
