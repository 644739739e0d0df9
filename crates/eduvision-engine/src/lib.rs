pub mod api;
pub mod core;
pub mod input;
pub mod surface;
pub mod ui;
pub mod bridge;

// Re-export key types at crate root for convenience
pub use api::widget::{Widget, WidgetConfig, WidgetContext};
pub use api::types::WidgetEvent;
pub use core::time::FixedTimestep;
pub use core::rng::Rng;
pub use input::queue::{InputEvent, InputQueue};
pub use input::drag::DragTracker;
pub use surface::{Color, DrawSurface, TextCommand};
pub use surface::vector::{VectorSurface, VectorVertex};
pub use surface::recording::{DrawCommand, RecordingSurface};
pub use ui::quiz::{QuizBank, QuizOutcome, QuizQuestion};
pub use ui::modal::{CloseReason, FocusTrap, ModalState};
pub use bridge::layout::BufferLayout;
