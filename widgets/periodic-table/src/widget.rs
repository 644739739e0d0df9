//! Periodic table controller: a clickable element grid with an info modal.

use std::collections::HashMap;

use glam::Vec2;
use serde::Deserialize;
use eduvision_engine::{
    CloseReason, Color, DrawSurface, InputEvent, InputQueue, ModalState, Widget, WidgetConfig,
    WidgetContext, WidgetEvent,
};

use crate::layout::{cell_pos, hit_test, CELL_INSET, CELL_SIZE, LAYOUT};

const WORLD_W: f32 = 740.0;
const WORLD_H: f32 = 320.0;

const CELL_COLOR: Color = Color::rgb(0.1, 0.2, 0.33);
const SYMBOL_COLOR: Color = Color::rgb(0.0, 1.0, 0.667); // #00ffaa

const MODAL_POS: Vec2 = Vec2::new(170.0, 80.0);
const MODAL_W: f32 = 400.0;
const MODAL_H: f32 = 160.0;

const FALLBACK_INFO: &str = "No details available.";

/// Custom event kinds from the host UI.
mod events {
    pub const CLOSE_MODAL: u32 = 1;
}

/// Widget event kinds to the host UI.
mod host_events {
    pub const ELEMENT_OPENED: f32 = 1.0; // a = layout index
}

const KEY_TAB: u32 = 9;
const KEY_ESCAPE: u32 = 27;

#[derive(Debug, Deserialize)]
struct ElementInfo {
    name: String,
    info: String,
}

pub struct PeriodicTable {
    data: HashMap<String, ElementInfo>,
    modal: ModalState,
}

impl PeriodicTable {
    pub fn new() -> Self {
        let data: HashMap<String, ElementInfo> =
            serde_json::from_str(include_str!("../data/elements.json")).unwrap_or_else(|e| {
                log::error!("element data failed to parse: {e}");
                HashMap::new()
            });

        Self {
            data,
            modal: ModalState::new(1),
        }
    }

    fn open_element(&mut self, ctx: &mut WidgetContext, symbol: &str) {
        let content = match self.data.get(symbol) {
            Some(element) => format!("{}\n{}", element.name, element.info),
            None => format!("{symbol}\n{FALLBACK_INFO}"),
        };
        self.modal.show(content);
        if let Some(index) = LAYOUT.iter().position(|s| *s == symbol) {
            ctx.emit(WidgetEvent::new(
                host_events::ELEMENT_OPENED,
                index as f32,
                0.0,
                0.0,
            ));
        }
    }

    fn handle_pointer_down(&mut self, ctx: &mut WidgetContext, pos: Vec2) {
        if self.modal.is_visible() {
            let inside = pos.x >= MODAL_POS.x
                && pos.x <= MODAL_POS.x + MODAL_W
                && pos.y >= MODAL_POS.y
                && pos.y <= MODAL_POS.y + MODAL_H;
            if !inside {
                self.modal.close(CloseReason::ClickOutside);
            }
            return;
        }
        if let Some(symbol) = hit_test(pos) {
            self.open_element(ctx, symbol);
        }
    }
}

impl Default for PeriodicTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for PeriodicTable {
    fn config(&self) -> WidgetConfig {
        WidgetConfig {
            world_width: WORLD_W,
            world_height: WORLD_H,
            max_text_commands: 160,
            ..WidgetConfig::default()
        }
    }

    fn init(&mut self, _ctx: &mut WidgetContext) {
        log::info!("periodic table ready, {} elements with details", self.data.len());
    }

    fn update(&mut self, ctx: &mut WidgetContext, input: &InputQueue) {
        for event in input.iter() {
            match event {
                InputEvent::PointerDown { x, y } => {
                    self.handle_pointer_down(ctx, Vec2::new(*x, *y))
                }
                InputEvent::Custom { kind, .. } if *kind == events::CLOSE_MODAL => {
                    self.modal.close(CloseReason::CloseButton)
                }
                InputEvent::KeyDown { key_code } => match *key_code {
                    KEY_ESCAPE => self.modal.close(CloseReason::Escape),
                    KEY_TAB => self.modal.focus_next(),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    fn render(&self, surface: &mut dyn DrawSurface) {
        for (index, symbol) in LAYOUT.iter().enumerate() {
            if symbol.is_empty() {
                continue;
            }
            let pos = cell_pos(index) + Vec2::splat(CELL_INSET);
            let size = CELL_SIZE - 2.0 * CELL_INSET;
            surface.fill_rect(pos, size, size, CELL_COLOR);
            surface.text(pos + Vec2::new(8.0, 24.0), 14.0, SYMBOL_COLOR, symbol);
        }

        if self.modal.is_visible() {
            surface.fill_rect(Vec2::ZERO, WORLD_W, WORLD_H, Color::BLACK.with_alpha(0.6));
            surface.fill_rect(MODAL_POS, MODAL_W, MODAL_H, Color::rgb8(20, 30, 48));
            surface.text(
                MODAL_POS + Vec2::new(20.0, 50.0),
                18.0,
                Color::WHITE,
                self.modal.content(),
            );
        }
    }
}
