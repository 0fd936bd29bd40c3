//! Time-based color cycling.
//!
//! Every burst takes one color from a slow sine cycle:
//!
//! ```text
//! x       = |sin(t / 10 + t * offset)|
//! channel = floor(LOW + (HIGH - LOW) * x)
//! ```
//!
//! R, G and B use the offsets in [`PHASE_OFFSETS`], so bursts spawned close in
//! time look alike while the hue keeps drifting.

use std::fmt;

/// Lowest value a channel can take.
pub const CHANNEL_LOW: u8 = 75;
/// Highest value a channel can take.
pub const CHANNEL_HIGH: u8 = 230;
/// Phase offsets for the R, G and B channels.
pub const PHASE_OFFSETS: [f64; 3] = [0.0, 1.0 / 3.0, 2.0 / 3.0];

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Position in the cycle for one channel, in `[0, 1]`.
///
/// Non-finite inputs yield `0`.
#[must_use]
pub fn phase(time_secs: f64, offset: f64) -> f64 {
    let x = (time_secs / 10.0 + time_secs * offset).sin().abs();
    if x.is_finite() {
        x.min(1.0)
    } else {
        0.0
    }
}

/// Channel value at `time_secs` for the given phase offset.
#[must_use]
pub fn channel(time_secs: f64, offset: f64) -> u8 {
    let low = f64::from(CHANNEL_LOW);
    let high = f64::from(CHANNEL_HIGH);
    let value = (low + (high - low) * phase(time_secs, offset)).floor();
    value.clamp(low, high) as u8
}

/// The color shared by every particle of a burst spawned at `time_secs`.
#[must_use]
pub fn burst_color(time_secs: f64) -> Rgb {
    let [r, g, b] = PHASE_OFFSETS.map(|offset| channel(time_secs, offset));
    Rgb::new(r, g, b)
}
