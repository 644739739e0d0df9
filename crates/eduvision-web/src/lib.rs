pub mod runner;

pub use runner::WidgetRunner;

// Re-exported so the macro below can name engine types from the caller's crate.
pub use eduvision_engine as engine;

/// Generate all `#[wasm_bindgen]` exports for a widget.
///
/// Generates the `thread_local!` runner storage, a `with_runner()` helper,
/// and the full wasm-bindgen surface (init, tick, input handlers, data
/// accessors). The invoking crate must have `use wasm_bindgen::prelude::*;`
/// in scope and depend on `console_log`, `console_error_panic_hook` and
/// `log`.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod widget;
/// use widget::AtomicModel;
///
/// eduvision_web::export_widget!(AtomicModel, "atomic-model");
/// ```
#[macro_export]
macro_rules! export_widget {
    ($widget_type:ty, $widget_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::WidgetRunner<$widget_type>>> =
                RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::WidgetRunner<$widget_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Widget not initialized. Call widget_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn widget_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let widget = <$widget_type>::new();
            let runner = $crate::WidgetRunner::new(widget);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $widget_name);
        }

        #[wasm_bindgen]
        pub fn widget_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn widget_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::engine::InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn widget_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::engine::InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn widget_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::engine::InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn widget_key_down(key_code: u32) {
            with_runner(|r| r.push_input($crate::engine::InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn widget_key_up(key_code: u32) {
            with_runner(|r| r.push_input($crate::engine::InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn widget_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input($crate::engine::InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn widget_text_event(kind: u32, text: String) {
            with_runner(|r| r.push_input($crate::engine::InputEvent::Text { kind, text }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_vertices_ptr() -> *const f32 {
            with_runner(|r| r.vertices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_vertex_count() -> u32 {
            with_runner(|r| r.vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_events_len() -> u32 {
            with_runner(|r| r.events_len())
        }

        #[wasm_bindgen]
        pub fn get_text_commands() -> String {
            with_runner(|r| r.text_commands_json())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_vector_vertices() -> u32 {
            with_runner(|r| r.max_vector_vertices())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
