//! Recording surface for headless tests.
//!
//! Captures draw calls as data instead of tessellating, so tests can assert
//! on what a widget painted (shell counts, electron positions, colors)
//! without a canvas or GPU.

use glam::Vec2;

use crate::surface::{Color, DrawSurface};

/// One captured draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillCircle { center: Vec2, radius: f32, color: Color },
    StrokeCircle { center: Vec2, radius: f32, width: f32, color: Color },
    FillRect { pos: Vec2, width: f32, height: f32, color: Color },
    StrokeRect { pos: Vec2, width: f32, height: f32, line_width: f32, color: Color },
    Line { from: Vec2, to: Vec2, width: f32, color: Color },
    Text { pos: Vec2, size: f32, color: Color, text: String },
}

/// [`DrawSurface`] that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All fill-circle commands, in draw order.
    pub fn filled_circles(&self) -> Vec<(Vec2, f32, Color)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillCircle { center, radius, color } => {
                    Some((*center, *radius, *color))
                }
                _ => None,
            })
            .collect()
    }

    /// All stroke-circle commands, in draw order.
    pub fn stroked_circles(&self) -> Vec<(Vec2, f32)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokeCircle { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    /// All text commands, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, width, color });
    }

    fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::FillRect { pos, width, height, color });
    }

    fn stroke_rect(&mut self, pos: Vec2, width: f32, height: f32, line_width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeRect { pos, width, height, line_width, color });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }

    fn text(&mut self, pos: Vec2, size: f32, color: Color, text: &str) {
        self.commands.push(DrawCommand::Text {
            pos,
            size,
            color,
            text: text.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut surface = RecordingSurface::new();
        surface.clear();
        surface.fill_circle(Vec2::new(250.0, 250.0), 20.0, Color::WHITE);
        surface.text(Vec2::ZERO, 16.0, Color::BLACK, "O");

        assert_eq!(surface.commands.len(), 3);
        assert_eq!(surface.filled_circles().len(), 1);
        assert_eq!(surface.texts(), vec!["O"]);
    }

    #[test]
    fn clear_drops_previous_frame() {
        let mut surface = RecordingSurface::new();
        surface.fill_circle(Vec2::ZERO, 5.0, Color::WHITE);
        surface.clear();
        assert_eq!(surface.commands, vec![DrawCommand::Clear]);
    }
}
