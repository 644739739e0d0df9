use crate::api::types::WidgetEvent;
use crate::core::rng::Rng;
use crate::input::queue::InputQueue;
use crate::surface::DrawSurface;

/// Configuration for the runner, provided by the widget.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Canvas width in world units.
    pub world_width: f32,
    /// Canvas height in world units.
    pub world_height: f32,
    /// Maximum number of vector vertices per frame (default: 16384).
    pub max_vector_vertices: usize,
    /// Maximum number of widget events per frame (default: 32).
    pub max_events: usize,
    /// Maximum number of text commands per frame (default: 64).
    pub max_text_commands: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 500.0,
            world_height: 500.0,
            max_vector_vertices: 16384,
            max_events: 32,
            max_text_commands: 64,
        }
    }
}

/// The core contract every widget must fulfill.
///
/// A widget is one self-contained interactive demo. The host drives it:
/// input events are queued by the host, `update` runs on a fixed timestep,
/// and `render` paints the current state onto a drawing surface once per
/// host frame.
pub trait Widget {
    /// Return runner configuration. Called once before init.
    fn config(&self) -> WidgetConfig {
        WidgetConfig::default()
    }

    /// Setup initial state.
    fn init(&mut self, ctx: &mut WidgetContext);

    /// One fixed-timestep tick: advance animation state, apply input.
    fn update(&mut self, ctx: &mut WidgetContext, input: &InputQueue);

    /// Read-only paint pass. Must draw the full frame; the surface is
    /// cleared by the runner beforehand.
    fn render(&self, surface: &mut dyn DrawSurface);
}

/// Mutable access to shared widget state, passed to init and update.
pub struct WidgetContext {
    /// Events to forward to the host UI layer this frame.
    pub events: Vec<WidgetEvent>,
    /// Deterministic RNG (xorshift64), seeded per widget instance.
    pub rng: Rng,
}

impl WidgetContext {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            rng: Rng::new(42),
        }
    }

    /// Emit an event to be forwarded to the host UI.
    pub fn emit(&mut self, event: WidgetEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for WidgetContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_and_clear() {
        let mut ctx = WidgetContext::new();
        ctx.emit(WidgetEvent::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn default_config() {
        let config = WidgetConfig::default();
        assert!((config.fixed_dt - 1.0 / 60.0).abs() < 1e-6);
        assert_eq!(config.max_events, 32);
    }
}
