/// Shared buffer layout.
/// Must stay in sync with the host-side `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 12 floats]
/// [Vector vertices: max_vector_vertices × 6 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Text commands travel as a JSON string accessor, not through this buffer.
/// Capacities are written once into the header at init; the host reads them
/// to compute section offsets dynamically.

use crate::api::widget::WidgetConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 12;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_VERTICES: usize = 2;
pub const HEADER_VERTEX_COUNT: usize = 3;
pub const HEADER_WORLD_WIDTH: usize = 4;
pub const HEADER_WORLD_HEIGHT: usize = 5;
pub const HEADER_MAX_EVENTS: usize = 6;
pub const HEADER_EVENT_COUNT: usize = 7;
pub const HEADER_MAX_TEXTS: usize = 8;
pub const HEADER_TEXT_COUNT: usize = 9;
pub const HEADER_PROTOCOL_VERSION: usize = 10;
pub const HEADER_RESERVED: usize = 11;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per vector vertex: x, y, r, g, b, a (wire format — never changes).
pub const VERTEX_FLOATS: usize = 6;

/// Floats per widget event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferLayout {
    /// Maximum vector vertices.
    pub max_vector_vertices: usize,
    /// Maximum widget events per frame.
    pub max_events: usize,
    /// Maximum text commands per frame.
    pub max_text_commands: usize,

    /// Size of the vertex data section in floats.
    pub vertex_data_floats: usize,
    /// Size of the event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where vertex data begins.
    pub vertex_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl BufferLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_vector_vertices: usize, max_events: usize, max_text_commands: usize) -> Self {
        let vertex_data_floats = max_vector_vertices * VERTEX_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let vertex_data_offset = HEADER_FLOATS;
        let event_data_offset = vertex_data_offset + vertex_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_vector_vertices,
            max_events,
            max_text_commands,
            vertex_data_floats,
            event_data_floats,
            vertex_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a WidgetConfig.
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(
            config.max_vector_vertices,
            config.max_events,
            config.max_text_commands,
        )
    }
}
