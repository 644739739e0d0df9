//! Atomic model controller: rotating Bohr shells with excite/reset, a
//! display-mode toggle, and an electron-configuration quiz.

use glam::Vec2;
use eduvision_engine::{
    CloseReason, Color, DrawSurface, InputEvent, InputQueue, ModalState, QuizBank, QuizOutcome,
    QuizQuestion, Widget, WidgetConfig, WidgetContext, WidgetEvent,
};

use crate::modes::DisplayMode;
use crate::shells::{electron_config, electron_position, ELEMENTS};

const WORLD_W: f32 = 500.0;
const WORLD_H: f32 = 500.0;
const CENTER: Vec2 = Vec2::new(250.0, 250.0);

const NUCLEUS_RADIUS: f32 = 22.0;
const ELECTRON_RADIUS: f32 = 8.0;
const SHELL_BASE_RADIUS: f32 = 60.0;
const SHELL_SPACING: f32 = 50.0;

const BASE_SPEED: f32 = 0.02;
const EXCITED_SPEED: f32 = 0.05;

const NUCLEUS_COLOR: Color = Color::rgb(1.0, 0.231, 0.231); // #ff3b3b
const SHELL_COLOR: Color = Color::rgb(0.0, 1.0, 0.667); // #00ffaa
const ELECTRON_COLOR: Color = Color::rgb(0.0, 0.8, 1.0); // #00ccff
const EXCITED_COLOR: Color = Color::rgb(1.0, 0.667, 0.0); // #ffaa00

/// Custom event kinds from the host UI.
mod events {
    pub const SELECT_ELEMENT: u32 = 1; // a = index into ELEMENTS
    pub const EXCITE: u32 = 2;
    pub const RESET: u32 = 3;
    pub const TOGGLE_MODE: u32 = 4;
    pub const RANDOM_ELEMENT: u32 = 5;
    pub const START_QUIZ: u32 = 6;
    pub const CLOSE_MODAL: u32 = 7;
}

/// Text event kinds from the host UI.
mod text_events {
    pub const QUIZ_ANSWER: u32 = 1;
}

/// Widget event kinds to the host UI.
mod host_events {
    pub const ELEMENT_CHANGED: f32 = 1.0; // a = element index
    pub const MODE_CHANGED: f32 = 2.0; // a = mode ordinal
    pub const QUIZ_RESULT: f32 = 3.0; // a = 1 correct / 0 incorrect
}

const KEY_TAB: u32 = 9;
const KEY_ESCAPE: u32 = 27;

pub struct AtomicModel {
    element: &'static str,
    angle: f32,
    excited: bool,
    mode: DisplayMode,
    quiz: QuizBank,
    modal: ModalState,
}

impl AtomicModel {
    pub fn new() -> Self {
        let questions = ELEMENTS
            .iter()
            .filter_map(|symbol| {
                let config = electron_config(symbol)?;
                let answer = config
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                Some(QuizQuestion::new(
                    format!("What is the electron configuration of {symbol}?"),
                    answer,
                ))
            })
            .collect();

        Self {
            element: "H",
            angle: 0.0,
            excited: false,
            mode: DisplayMode::Bohr,
            quiz: QuizBank::new(questions),
            modal: ModalState::new(1),
        }
    }

    fn select_element(&mut self, ctx: &mut WidgetContext, index: usize) {
        if let Some(symbol) = ELEMENTS.get(index) {
            self.element = *symbol;
            self.excited = false;
            ctx.emit(WidgetEvent::new(
                host_events::ELEMENT_CHANGED,
                index as f32,
                0.0,
                0.0,
            ));
        } else {
            log::warn!("ignoring out-of-range element index {index}");
        }
    }

    fn handle_custom_event(&mut self, ctx: &mut WidgetContext, kind: u32, a: f32) {
        match kind {
            events::SELECT_ELEMENT => self.select_element(ctx, a as usize),
            events::EXCITE => self.excited = true,
            events::RESET => self.excited = false,
            events::TOGGLE_MODE => {
                self.mode = self.mode.next();
                ctx.emit(WidgetEvent::new(
                    host_events::MODE_CHANGED,
                    self.mode as u32 as f32,
                    0.0,
                    0.0,
                ));
            }
            events::RANDOM_ELEMENT => {
                let index = ctx.rng.range(0.0, ELEMENTS.len() as f32) as usize;
                let index = index.min(ELEMENTS.len() - 1);
                self.select_element(ctx, index);
            }
            events::START_QUIZ => {
                if let Some(question) = self.quiz.current() {
                    self.modal.show(question.prompt.clone());
                }
            }
            events::CLOSE_MODAL => self.modal.close(CloseReason::CloseButton),
            _ => {}
        }
    }

    fn handle_quiz_answer(&mut self, ctx: &mut WidgetContext, answer: &str) {
        match self.quiz.check(answer) {
            Some(QuizOutcome::Correct { expected }) => {
                self.modal.show(format!("Correct! {expected}"));
                ctx.emit(WidgetEvent::new(host_events::QUIZ_RESULT, 1.0, 0.0, 0.0));
            }
            Some(QuizOutcome::Incorrect { expected }) => {
                self.modal
                    .show(format!("Incorrect. Correct answer: {expected}"));
                ctx.emit(WidgetEvent::new(host_events::QUIZ_RESULT, 0.0, 0.0, 0.0));
            }
            None => {}
        }
    }

    fn draw_modal(&self, surface: &mut dyn DrawSurface) {
        surface.fill_rect(
            Vec2::ZERO,
            WORLD_W,
            WORLD_H,
            Color::BLACK.with_alpha(0.6),
        );
        surface.fill_rect(
            Vec2::new(75.0, 175.0),
            350.0,
            150.0,
            Color::rgb8(20, 30, 48),
        );
        surface.text(
            Vec2::new(95.0, 235.0),
            18.0,
            Color::WHITE,
            self.modal.content(),
        );
        surface.text(Vec2::new(395.0, 200.0), 18.0, Color::WHITE, "x");
    }
}

impl Default for AtomicModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for AtomicModel {
    fn config(&self) -> WidgetConfig {
        WidgetConfig {
            world_width: WORLD_W,
            world_height: WORLD_H,
            ..WidgetConfig::default()
        }
    }

    fn init(&mut self, _ctx: &mut WidgetContext) {
        log::info!("atomic model ready, element {}", self.element);
    }

    fn update(&mut self, ctx: &mut WidgetContext, input: &InputQueue) {
        for event in input.iter() {
            match event {
                InputEvent::Custom { kind, a, .. } => self.handle_custom_event(ctx, *kind, *a),
                InputEvent::Text { kind, text } if *kind == text_events::QUIZ_ANSWER => {
                    let answer = text.clone();
                    self.handle_quiz_answer(ctx, &answer);
                }
                InputEvent::KeyDown { key_code } => match *key_code {
                    KEY_ESCAPE => self.modal.close(CloseReason::Escape),
                    KEY_TAB => self.modal.focus_next(),
                    _ => {}
                },
                _ => {}
            }
        }

        self.angle += if self.excited { EXCITED_SPEED } else { BASE_SPEED };
    }

    fn render(&self, surface: &mut dyn DrawSurface) {
        surface.fill_circle(CENTER, NUCLEUS_RADIUS, NUCLEUS_COLOR);

        if let Some(config) = electron_config(self.element) {
            for (i, &count) in config.iter().enumerate() {
                let radius = SHELL_BASE_RADIUS + i as f32 * SHELL_SPACING;
                surface.stroke_circle(CENTER, radius, 2.0, SHELL_COLOR);

                let color = if self.excited { EXCITED_COLOR } else { ELECTRON_COLOR };
                for j in 0..count {
                    let pos = electron_position(CENTER, radius, self.angle, j, count);
                    surface.fill_circle(pos, ELECTRON_RADIUS, color);
                }
            }
        }

        surface.text(Vec2::new(20.0, 30.0), 22.0, Color::WHITE, self.element);
        surface.text(
            Vec2::new(20.0, WORLD_H - 20.0),
            14.0,
            SHELL_COLOR,
            self.mode.label(),
        );

        if self.modal.is_visible() {
            self.draw_modal(surface);
        }
    }
}
