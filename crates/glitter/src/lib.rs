//! # GLITTER
//!
//! Bursts of colored "+" glyphs wherever the user clicks or taps. They drift,
//! fall and shrink for a couple of seconds, then vanish.
//!
//! ## Example
//!
//! ```rust,ignore
//! use glitter::{DeviceCapabilities, Glitter, GlitterConfig, MouseButton, PointerEvent};
//!
//! let mut glitter = Glitter::new(GlitterConfig::default(), DeviceCapabilities::MOUSE_ONLY);
//! glitter.activate()?; // inside a tokio runtime
//!
//! glitter.handle(&PointerEvent::MouseDown { x: 100.0, y: 100.0, button: MouseButton::Left });
//! surface.draw(&glitter.frame());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod component;

pub use component::{Glitter, GlitterStats};
pub use glitter_core::{GlitterConfig, GlitterError, ManualClock, Point, Rgb};
pub use glitter_ui::{
    DeviceCapabilities, GlyphBatch, GlyphCommand, GlyphSurface, MouseButton, PointerEvent,
    PointerKind, SchedulerError,
};
