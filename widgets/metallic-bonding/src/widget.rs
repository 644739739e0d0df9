//! Metallic bonding controller: fixed ion lattice, draggable electron sea,
//! heat/cool/flow controls and a facts modal.

use std::collections::HashMap;

use glam::Vec2;
use serde::Deserialize;
use eduvision_engine::{
    CloseReason, Color, DragTracker, DrawSurface, InputEvent, InputQueue, ModalState, Widget,
    WidgetConfig, WidgetContext, WidgetEvent,
};

use crate::lattice::{ion_positions, ION_RADIUS};
use crate::sea::ElectronSea;

const WORLD_W: f32 = 650.0;
const WORLD_H: f32 = 450.0;
const ELECTRON_RADIUS: f32 = 6.0;
const DRAG_THRESHOLD: f32 = 10.0;

const ION_COLOR: Color = Color::rgb(0.0, 0.749, 1.0); // #00bfff
const ION_LABEL_COLOR: Color = Color::rgb(0.0, 0.102, 0.2); // #001a33
const ELECTRON_COLOR: Color = Color::rgb(1.0, 0.816, 0.0); // #ffd000
const FLOW_COLOR: Color = Color::rgb(0.0, 1.0, 0.667); // #00ffaa

/// Metals the selector offers. Indices double as the payload of the
/// select-metal custom event.
const METALS: [&str; 5] = ["Na", "Mg", "Al", "Fe", "Cu"];

const FACTS: [&str; 4] = [
    "Metal atoms lose electrons and become positive ions.",
    "Free electrons form a 'sea' around metal ions.",
    "This sea of electrons allows metals to conduct electricity.",
    "Heating increases electron movement, cooling slows it.",
];

/// Custom event kinds from the host UI.
mod events {
    pub const SELECT_METAL: u32 = 1; // a = index into METALS
    pub const HEAT: u32 = 2;
    pub const COOL: u32 = 3;
    pub const FLOW: u32 = 4;
    pub const SHOW_FACT: u32 = 5;
    pub const CLOSE_MODAL: u32 = 6;
}

/// Widget event kinds to the host UI.
mod host_events {
    pub const SPEED_CHANGED: f32 = 1.0; // a = speed factor
    pub const METAL_CHANGED: f32 = 2.0; // a = metal index
}

const KEY_TAB: u32 = 9;
const KEY_ESCAPE: u32 = 27;

#[derive(Debug, Deserialize)]
struct MetalInfo {
    name: String,
    electrons: u32,
}

pub struct MetallicBonding {
    metals: HashMap<String, MetalInfo>,
    selected: usize,
    ions: Vec<Vec2>,
    sea: ElectronSea,
    drag: DragTracker,
    modal: ModalState,
}

impl MetallicBonding {
    pub fn new() -> Self {
        let metals: HashMap<String, MetalInfo> =
            serde_json::from_str(include_str!("../data/metals.json")).unwrap_or_else(|e| {
                log::error!("metals data failed to parse: {e}");
                HashMap::new()
            });

        Self {
            metals,
            selected: 0,
            ions: ion_positions(),
            sea: ElectronSea::new(),
            drag: DragTracker::new(DRAG_THRESHOLD),
            modal: ModalState::new(1),
        }
    }

    fn select_metal(&mut self, ctx: &mut WidgetContext, index: usize) {
        let Some(symbol) = METALS.get(index) else {
            log::warn!("ignoring out-of-range metal index {index}");
            return;
        };
        let Some(info) = self.metals.get(*symbol) else {
            log::warn!("no data for metal {symbol}");
            return;
        };
        self.selected = index;
        self.sea
            .spawn(info.electrons, WORLD_W, WORLD_H, &mut ctx.rng);
        self.drag.reset();
        ctx.emit(WidgetEvent::new(
            host_events::METAL_CHANGED,
            index as f32,
            0.0,
            0.0,
        ));
    }

    fn handle_custom_event(&mut self, ctx: &mut WidgetContext, kind: u32, a: f32) {
        match kind {
            events::SELECT_METAL => self.select_metal(ctx, a as usize),
            events::HEAT => {
                self.sea.heat();
                ctx.emit(WidgetEvent::new(
                    host_events::SPEED_CHANGED,
                    self.sea.speed(),
                    0.0,
                    0.0,
                ));
            }
            events::COOL => {
                self.sea.cool();
                ctx.emit(WidgetEvent::new(
                    host_events::SPEED_CHANGED,
                    self.sea.speed(),
                    0.0,
                    0.0,
                ));
            }
            events::FLOW => self.sea.toggle_flow(),
            events::SHOW_FACT => {
                let index = ctx.rng.range(0.0, FACTS.len() as f32) as usize;
                self.modal.show(FACTS[index.min(FACTS.len() - 1)]);
            }
            events::CLOSE_MODAL => self.modal.close(CloseReason::CloseButton),
            _ => {}
        }
    }

    fn handle_pointer(&mut self, event: &InputEvent) {
        let mut positions: Vec<Vec2> = self.sea.electrons.iter().map(|e| e.pos).collect();
        match event {
            InputEvent::PointerDown { x, y } => {
                self.drag.on_pointer_down(Vec2::new(*x, *y), &positions);
            }
            InputEvent::PointerMove { x, y } => {
                if self.drag.on_pointer_move(Vec2::new(*x, *y), &mut positions) {
                    for (e, pos) in self.sea.electrons.iter_mut().zip(positions) {
                        e.pos = pos;
                    }
                }
            }
            InputEvent::PointerUp { .. } => self.drag.on_pointer_up(),
            _ => {}
        }
    }
}

impl Default for MetallicBonding {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for MetallicBonding {
    fn config(&self) -> WidgetConfig {
        WidgetConfig {
            world_width: WORLD_W,
            world_height: WORLD_H,
            ..WidgetConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut WidgetContext) {
        self.select_metal(ctx, 0);
        log::info!("metallic bonding ready, {} electrons", self.sea.electrons.len());
    }

    fn update(&mut self, ctx: &mut WidgetContext, input: &InputQueue) {
        for event in input.iter() {
            match event {
                InputEvent::Custom { kind, a, .. } => self.handle_custom_event(ctx, *kind, *a),
                InputEvent::KeyDown { key_code } => match *key_code {
                    KEY_ESCAPE => self.modal.close(CloseReason::Escape),
                    KEY_TAB => self.modal.focus_next(),
                    _ => {}
                },
                pointer => self.handle_pointer(pointer),
            }
        }

        // A grabbed electron stays pinned under the pointer; everything else
        // keeps drifting.
        let pinned = self
            .drag
            .active()
            .and_then(|i| self.sea.electrons.get(i).map(|e| (i, e.pos)));
        self.sea.update(WORLD_W, WORLD_H);
        if let Some((i, pos)) = pinned {
            if let Some(e) = self.sea.electrons.get_mut(i) {
                e.pos = pos;
            }
        }
    }

    fn render(&self, surface: &mut dyn DrawSurface) {
        for ion in &self.ions {
            surface.fill_circle(*ion, ION_RADIUS, ION_COLOR);
            surface.text(*ion + Vec2::new(-5.0, 5.0), 16.0, ION_LABEL_COLOR, "+");
        }

        for e in &self.sea.electrons {
            surface.fill_circle(e.pos, ELECTRON_RADIUS, ELECTRON_COLOR);
        }

        if self.sea.is_flowing() {
            surface.text(Vec2::new(300.0, 420.0), 20.0, FLOW_COLOR, "→");
        }

        surface.text(
            Vec2::new(20.0, 30.0),
            18.0,
            Color::WHITE,
            METALS[self.selected],
        );

        if self.modal.is_visible() {
            surface.fill_rect(Vec2::ZERO, WORLD_W, WORLD_H, Color::BLACK.with_alpha(0.6));
            surface.fill_rect(Vec2::new(150.0, 150.0), 350.0, 150.0, Color::rgb8(20, 30, 48));
            surface.text(
                Vec2::new(170.0, 210.0),
                18.0,
                Color::WHITE,
                self.modal.content(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(kind: u32, a: f32) -> InputEvent {
        InputEvent::Custom {
            kind,
            a,
            b: 0.0,
            c: 0.0,
        }
    }

    fn tick(widget: &mut MetallicBonding, ctx: &mut WidgetContext, events: Vec<InputEvent>) {
        let mut input = InputQueue::new();
        for event in events {
            input.push(event);
        }
        widget.update(ctx, &input);
    }

    fn ready() -> (MetallicBonding, WidgetContext) {
        let mut widget = MetallicBonding::new();
        let mut ctx = WidgetContext::new();
        widget.init(&mut ctx);
        ctx.clear_frame_data();
        (widget, ctx)
    }

    #[test]
    fn init_spawns_the_default_metal_sea() {
        let (widget, _ctx) = ready();
        assert_eq!(widget.sea.electrons.len(), 24); // Na
        assert_eq!(widget.ions.len(), 24);
    }

    #[test]
    fn selecting_a_metal_resizes_the_sea() {
        let (mut widget, mut ctx) = ready();
        tick(&mut widget, &mut ctx, vec![custom(events::SELECT_METAL, 2.0)]);
        assert_eq!(widget.sea.electrons.len(), 72); // Al
    }

    #[test]
    fn repeated_heating_clamps_the_speed() {
        let (mut widget, mut ctx) = ready();
        for _ in 0..3 {
            tick(&mut widget, &mut ctx, vec![custom(events::HEAT, 0.0)]);
        }
        assert_eq!(widget.sea.speed(), 2.5);

        for _ in 0..20 {
            tick(&mut widget, &mut ctx, vec![custom(events::HEAT, 0.0)]);
        }
        assert_eq!(widget.sea.speed(), crate::sea::MAX_SPEED);
    }

    #[test]
    fn show_fact_opens_the_modal_with_a_known_fact() {
        let (mut widget, mut ctx) = ready();
        tick(&mut widget, &mut ctx, vec![custom(events::SHOW_FACT, 0.0)]);
        assert!(widget.modal.is_visible());
        assert!(FACTS.contains(&widget.modal.content()));
    }

    #[test]
    fn flow_mode_is_rendered_as_an_arrow() {
        use eduvision_engine::RecordingSurface;

        let (mut widget, mut ctx) = ready();
        tick(&mut widget, &mut ctx, vec![custom(events::FLOW, 0.0)]);

        let mut surface = RecordingSurface::new();
        widget.render(&mut surface);
        assert!(surface.texts().contains(&"→"));
    }

    #[test]
    fn dragged_electron_tracks_the_pointer() {
        let (mut widget, mut ctx) = ready();
        let start = widget.sea.electrons[0].pos;

        tick(
            &mut widget,
            &mut ctx,
            vec![
                InputEvent::PointerDown {
                    x: start.x,
                    y: start.y,
                },
                InputEvent::PointerMove { x: 325.0, y: 200.0 },
            ],
        );
        // The sea drifts after input, but the grabbed electron stays pinned.
        assert_eq!(widget.sea.electrons[0].pos, Vec2::new(325.0, 200.0));
    }
}
