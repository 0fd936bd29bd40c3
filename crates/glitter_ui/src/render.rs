//! Glyph render commands.
//!
//! Turns the particle list into draw commands. The surface that draws them
//! (DOM, canvas, terminal) lives outside this crate.

use glitter_core::{Particle, Rgb};

/// The glyph every particle is drawn as.
pub const GLYPH: char = '+';

/// One glyph to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphCommand {
    /// Character to draw.
    pub glyph: char,
    /// X position.
    pub x: f32,
    /// Y position.
    pub y: f32,
    /// Font size (the particle radius).
    pub font_size: f32,
    /// Text color.
    pub color: Rgb,
}

impl GlyphCommand {
    /// Command for a particle, or `None` if its radius is negative.
    #[must_use]
    pub fn from_particle(particle: &Particle) -> Option<Self> {
        particle.is_alive().then(|| Self {
            glyph: GLYPH,
            x: particle.position.x,
            y: particle.position.y,
            font_size: particle.radius,
            color: particle.color,
        })
    }
}

/// All glyphs for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphBatch {
    /// Commands in draw order.
    pub commands: Vec<GlyphCommand>,
}

impl GlyphBatch {
    /// Builds a batch from the current particle list.
    #[must_use]
    pub fn from_particles(particles: &[Particle]) -> Self {
        Self {
            commands: particles.iter().filter_map(GlyphCommand::from_particle).collect(),
        }
    }

    /// Number of glyphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if nothing will be drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// A surface that can draw glyph batches.
pub trait GlyphSurface {
    /// Draws one frame, replacing the previous one.
    fn draw(&mut self, batch: &GlyphBatch);
}
