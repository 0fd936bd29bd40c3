//! # GLITTER Core
//!
//! The particle loop behind the glitter click effect:
//! - Spawn a burst of "+" glyphs where the pointer lands
//! - Drift, fall and shrink them on every tick
//! - Cull them once their radius drops below zero
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      TICK PIPELINE                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  on_input ─► pending slot ─► tick ─► particles()         │
//! │                                │                          │
//! │                cull (r < 0) ─► update ─► spawn burst      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use glitter_core::{GlitterConfig, ManualClock, ParticleField, Point};
//!
//! let config = GlitterConfig { seed: Some(7), ..GlitterConfig::default() };
//! let mut field = ParticleField::with_clock(config, ManualClock::new(0.0));
//!
//! field.on_input(Point::new(100.0, 100.0));
//! field.tick();
//! assert_eq!(field.len(), 8);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod clock;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod particle;

pub use clock::{Clock, ManualClock, SystemClock};
pub use color::{burst_color, channel, phase, Rgb, CHANNEL_HIGH, CHANNEL_LOW, PHASE_OFFSETS};
pub use config::GlitterConfig;
pub use error::{GlitterError, GlitterResult};
pub use field::{FieldStats, ParticleField, TickReport};
pub use particle::{Particle, Point};
