use eduvision_engine::{
    BufferLayout, FixedTimestep, InputEvent, InputQueue, VectorSurface, Widget, WidgetConfig,
    WidgetContext,
};
use eduvision_engine::surface::DrawSurface;

/// Generic widget runner that wires up the frame loop.
///
/// Each concrete widget crate creates a `thread_local!` WidgetRunner and
/// exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly. The host owns the
/// `requestAnimationFrame` loop and calls `tick` with the frame delta.
pub struct WidgetRunner<W: Widget> {
    widget: W,
    ctx: WidgetContext,
    input: InputQueue,
    surface: VectorSurface,
    timestep: FixedTimestep,
    config: WidgetConfig,
    layout: BufferLayout,
    initialized: bool,
}

impl<W: Widget> WidgetRunner<W> {
    pub fn new(widget: W) -> Self {
        let config = widget.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = BufferLayout::from_config(&config);

        Self {
            widget,
            ctx: WidgetContext::new(),
            input: InputQueue::new(),
            surface: VectorSurface::new(),
            timestep,
            layout,
            config,
            initialized: false,
        }
    }

    /// Initialize the widget. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.widget.config();
        self.layout = BufferLayout::from_config(&self.config);
        self.widget.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: fixed-step updates, then a single render pass.
    ///
    /// UI events are edge-triggered (a click toggles a mode, checks an
    /// answer), so each queued event reaches `update` exactly once: the
    /// first step of the frame sees the queue, later steps see an empty
    /// one. On a frame too short to produce a step the queue is kept for
    /// the next frame rather than dropped.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        // Fixed timestep accumulation
        let steps = self.timestep.accumulate(dt);
        if steps > 0 {
            self.widget.update(&mut self.ctx, &self.input);
            self.input.drain();
            let settled = InputQueue::new();
            for _ in 1..steps {
                self.widget.update(&mut self.ctx, &settled);
            }
        }

        // Repaint from scratch
        self.surface.clear();
        self.widget.render(&mut self.surface);
    }

    // ---- Pointer accessors for host-side buffer reads ----

    pub fn vertices_ptr(&self) -> *const f32 {
        self.surface.buffer_ptr()
    }

    pub fn vertex_count(&self) -> u32 {
        self.surface.vertex_count() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    /// Text commands for the current frame, serialized for the host.
    pub fn text_commands_json(&self) -> String {
        self.surface.text_commands_json()
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors (read by the host once at init) ----

    pub fn max_vector_vertices(&self) -> u32 {
        self.layout.max_vector_vertices as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eduvision_engine::{Color, WidgetEvent};
    use glam::Vec2;

    struct Blinker {
        ticks: u32,
    }

    impl Widget for Blinker {
        fn init(&mut self, _ctx: &mut WidgetContext) {}

        fn update(&mut self, ctx: &mut WidgetContext, _input: &InputQueue) {
            self.ticks += 1;
            ctx.emit(WidgetEvent::new(1.0, self.ticks as f32, 0.0, 0.0));
        }

        fn render(&self, surface: &mut dyn eduvision_engine::DrawSurface) {
            surface.fill_circle(Vec2::new(10.0, 10.0), 5.0, Color::WHITE);
        }
    }

    #[test]
    fn tick_before_init_is_inert() {
        let mut runner = WidgetRunner::new(Blinker { ticks: 0 });
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.vertex_count(), 0);
    }

    #[test]
    fn tick_runs_fixed_steps_and_renders() {
        let mut runner = WidgetRunner::new(Blinker { ticks: 0 });
        runner.init();

        // Two frames worth of time: two update steps, one render.
        runner.tick(2.0 / 60.0);
        assert_eq!(runner.events_len(), 2);
        assert!(runner.vertex_count() > 0);
    }

    struct ClickCounter {
        clicks: u32,
    }

    impl Widget for ClickCounter {
        fn init(&mut self, _ctx: &mut WidgetContext) {}

        fn update(&mut self, _ctx: &mut WidgetContext, input: &InputQueue) {
            for event in input.iter() {
                if matches!(event, InputEvent::Custom { .. }) {
                    self.clicks += 1;
                }
            }
        }

        fn render(&self, _surface: &mut dyn eduvision_engine::DrawSurface) {}
    }

    fn click() -> InputEvent {
        InputEvent::Custom {
            kind: 1,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        }
    }

    #[test]
    fn event_reaches_update_once_on_a_multi_step_frame() {
        let mut runner = WidgetRunner::new(ClickCounter { clicks: 0 });
        runner.init();

        runner.push_input(click());
        // A slow frame that accumulates two fixed steps must not apply
        // the click twice.
        runner.tick(2.0 / 60.0);
        assert_eq!(runner.widget.clicks, 1);
    }

    #[test]
    fn event_survives_a_zero_step_frame() {
        let mut runner = WidgetRunner::new(ClickCounter { clicks: 0 });
        runner.init();

        runner.push_input(click());
        // Sub-fixed_dt frame, as on a 120 Hz display: no step yet, the
        // click waits in the queue.
        runner.tick(0.008);
        assert_eq!(runner.widget.clicks, 0);

        runner.tick(0.010);
        assert_eq!(runner.widget.clicks, 1);
    }

    #[test]
    fn event_is_consumed_after_delivery() {
        let mut runner = WidgetRunner::new(ClickCounter { clicks: 0 });
        runner.init();

        runner.push_input(click());
        runner.tick(1.0 / 60.0);
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.widget.clicks, 1);
    }
}
