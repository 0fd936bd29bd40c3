//! # GLITTER UI
//!
//! Everything between the particle loop and the screen:
//! - Pointer events normalized to a single press coordinate
//! - A fixed-period scheduler that parks when there is nothing to animate
//! - Glyph commands for the rendering surface
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                     UI PIPELINE                         │
//! ├────────────────────────────────────────────────────────┤
//! │  PointerEvent → PointerInput → TickScheduler → Glyphs  │
//! │       ↓              ↓              ↓            ↓     │
//! │  touch/mouse      (x, y)       field.tick()   surface  │
//! └────────────────────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod input;
pub mod render;
pub mod scheduler;

pub use error::{SchedulerError, SchedulerResult};
pub use input::{
    pointer_for, DeviceCapabilities, MouseButton, MouseInput, PointerEvent, PointerInput,
    PointerKind, TouchInput,
};
pub use render::{GlyphBatch, GlyphCommand, GlyphSurface, GLYPH};
pub use scheduler::{TickScheduler, TickStats, TickTarget};
