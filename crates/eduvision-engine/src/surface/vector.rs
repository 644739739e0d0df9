//! Lyon-based production drawing surface.
//!
//! Tessellates filled and stroked shapes into a flat f32 vertex buffer
//! (x, y, r, g, b, a per vertex) that the host copies out of wasm memory
//! and renders as a triangle list. Text commands are recorded into a side
//! list serialized to JSON once per frame.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

use crate::surface::{Color, DrawSurface, TextCommand};

/// Per-vertex data for vector rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
}

struct FillVertexCtor {
    color: Color,
}

impl FillVertexConstructor<VectorVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        VectorVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

struct StrokeVertexCtor {
    color: Color,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        VectorVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// Production [`DrawSurface`] backed by lyon tessellators.
///
/// Cleared at the start of each frame and repopulated by the widget's
/// render pass.
pub struct VectorSurface {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
    texts: Vec<TextCommand>,
}

impl VectorSurface {
    pub fn new() -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(16384 * VectorVertex::FLOATS),
            texts: Vec::new(),
        }
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    /// Raw pointer to the flat float buffer (for host-side copy).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Text commands recorded this frame.
    pub fn text_commands(&self) -> &[TextCommand] {
        &self.texts
    }

    /// Text commands as a JSON array string for the bridge.
    pub fn text_commands_json(&self) -> String {
        serde_json::to_string(&self.texts).unwrap_or_else(|_| "[]".to_owned())
    }

    /// Flush indexed geometry to the flat buffer as a triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(0.5),
            &mut BuffersBuilder::new(&mut self.geometry, FillVertexCtor { color }),
        );
        match result {
            Ok(_) => self.flush_geometry(),
            Err(e) => log::warn!("fill tessellation failed: {e:?}"),
        }
    }

    fn stroke_path(&mut self, path: &Path, width: f32, color: Color) {
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(0.5).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { color }),
        );
        match result {
            Ok(_) => self.flush_geometry(),
            Err(e) => log::warn!("stroke tessellation failed: {e:?}"),
        }
    }

    fn rect_points(pos: Vec2, width: f32, height: f32) -> [Vec2; 4] {
        [
            pos,
            Vec2::new(pos.x + width, pos.y),
            Vec2::new(pos.x + width, pos.y + height),
            Vec2::new(pos.x, pos.y + height),
        ]
    }

    fn closed_path(points: &[Vec2]) -> Path {
        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.close();
        builder.build()
    }
}

impl DrawSurface for VectorSurface {
    fn clear(&mut self) {
        self.buffer.clear();
        self.texts.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, lyon::path::Winding::Positive);
        let path = builder.build();
        self.fill_path(&path, color);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, lyon::path::Winding::Positive);
        let path = builder.build();
        self.stroke_path(&path, width, color);
    }

    fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, color: Color) {
        let path = Self::closed_path(&Self::rect_points(pos, width, height));
        self.fill_path(&path, color);
    }

    fn stroke_rect(&mut self, pos: Vec2, width: f32, height: f32, line_width: f32, color: Color) {
        let path = Self::closed_path(&Self::rect_points(pos, width, height));
        self.stroke_path(&path, line_width, color);
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let mut builder = Path::builder();
        builder.begin(point(from.x, from.y));
        builder.line_to(point(to.x, to.y));
        builder.end(false); // open path
        let path = builder.build();
        self.stroke_path(&path, width, color);
    }

    fn text(&mut self, pos: Vec2, size: f32, color: Color, text: &str) {
        self.texts.push(TextCommand {
            x: pos.x,
            y: pos.y,
            size,
            color: [color.r, color.g, color.b, color.a],
            text: text.to_owned(),
        });
    }
}

impl Default for VectorSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn vertex_is_24_bytes() {
        assert_eq!(size_of::<VectorVertex>(), 24);
        assert_eq!(VectorVertex::FLOATS, 6);
    }

    #[test]
    fn fill_rect_produces_two_triangles() {
        let mut surface = VectorSurface::new();
        surface.fill_rect(Vec2::ZERO, 100.0, 50.0, Color::rgb(0.0, 0.0, 1.0));
        assert_eq!(surface.vertex_count(), 6);
    }

    #[test]
    fn fill_circle_produces_vertices() {
        let mut surface = VectorSurface::new();
        surface.fill_circle(Vec2::new(50.0, 50.0), 25.0, Color::WHITE);
        assert!(surface.vertex_count() > 0);
    }

    #[test]
    fn zero_radius_circle_produces_nothing() {
        let mut surface = VectorSurface::new();
        surface.fill_circle(Vec2::ZERO, 0.0, Color::WHITE);
        surface.stroke_circle(Vec2::ZERO, -1.0, 2.0, Color::WHITE);
        assert_eq!(surface.vertex_count(), 0);
    }

    #[test]
    fn line_produces_vertices() {
        let mut surface = VectorSurface::new();
        surface.line(Vec2::ZERO, Vec2::new(100.0, 100.0), 4.0, Color::WHITE);
        assert!(surface.vertex_count() > 0);
    }

    #[test]
    fn clear_resets_buffer_and_texts() {
        let mut surface = VectorSurface::new();
        surface.fill_rect(Vec2::ZERO, 10.0, 10.0, Color::WHITE);
        surface.text(Vec2::new(5.0, 5.0), 20.0, Color::BLACK, "Na");
        assert!(surface.vertex_count() > 0);
        assert_eq!(surface.text_commands().len(), 1);

        surface.clear();
        assert_eq!(surface.vertex_count(), 0);
        assert!(surface.text_commands().is_empty());
    }

    #[test]
    fn text_commands_serialize() {
        let mut surface = VectorSurface::new();
        surface.text(Vec2::new(1.0, 2.0), 16.0, Color::WHITE, "H");
        let json = surface.text_commands_json();
        assert!(json.contains("\"text\":\"H\""));
    }
}
