//! Drawing-surface abstraction.
//!
//! Widgets paint through the [`DrawSurface`] trait so their animation and
//! interaction logic can be exercised headlessly. The production surface
//! ([`vector::VectorSurface`]) tessellates primitives into a flat vertex
//! buffer the host renders; tests use [`recording::RecordingSurface`].

pub mod recording;
pub mod vector;

use glam::Vec2;
use serde::Serialize;

/// RGBA color for drawing operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGB u8 values (0-255) with full opacity.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create a color with the given alpha value.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// A deferred text draw the host paints with canvas 2D.
///
/// Vector tessellation covers shapes only; glyphs cross the bridge as a
/// JSON side channel read once per frame.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TextCommand {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: [f32; 4],
    pub text: String,
}

/// Draw-primitive interface every widget renders through.
///
/// No return values, no error conditions: inputs are assumed to be
/// well-formed world coordinates, and the side effect is pixels.
pub trait DrawSurface {
    /// Wipe the surface for a new frame.
    fn clear(&mut self);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color);
    fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, color: Color);
    fn stroke_rect(&mut self, pos: Vec2, width: f32, height: f32, line_width: f32, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
    fn text(&mut self, pos: Vec2, size: f32, color: Color, text: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_helpers() {
        let c = Color::rgb8(255, 128, 0);
        assert!((c.r - 1.0).abs() < 0.01);
        assert!((c.g - 0.5).abs() < 0.01);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);

        let faded = c.with_alpha(0.25);
        assert_eq!(faded.a, 0.25);
    }
}
