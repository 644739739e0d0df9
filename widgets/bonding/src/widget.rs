//! Bonding sandbox controller: two selectable atoms, draggable valence
//! electrons, bond classification and guided challenges.

use glam::Vec2;
use eduvision_engine::{
    CloseReason, Color, DragTracker, DrawSurface, InputEvent, InputQueue, ModalState, Widget,
    WidgetConfig, WidgetContext, WidgetEvent,
};

use crate::bond::{determine_bond, BondKind};
use crate::builder::{align_covalent, align_ionic, snap_to_midpoint, BondAnimation};
use crate::molecule::{spawn_electrons, Atom, Electron, ATOM_RADIUS, ELECTRON_RADIUS, ELEMENTS};

const WORLD_W: f32 = 600.0;
const WORLD_H: f32 = 450.0;
const ATOM_A_POS: Vec2 = Vec2::new(200.0, 225.0);
const ATOM_B_POS: Vec2 = Vec2::new(400.0, 225.0);
const DRAG_THRESHOLD: f32 = 12.0;

const ATOM_COLOR: Color = Color::rgb(0.0, 0.749, 1.0); // #00bfff
const SHARED_COLOR: Color = Color::rgb(1.0, 0.867, 0.0); // #ffdd00
const BOND_COLOR: Color = Color::rgb(1.0, 0.667, 0.0); // #ffaa00

/// Custom event kinds from the host UI.
mod events {
    pub const SET_ELEMENTS: u32 = 1; // a, b = indices into ELEMENTS
    pub const RESET: u32 = 2;
    pub const AUTO_BOND: u32 = 3;
    pub const CHECK_BOND: u32 = 4;
    pub const NEXT_CHALLENGE: u32 = 5;
    pub const ALIGN_COVALENT: u32 = 6;
    pub const ALIGN_IONIC: u32 = 7;
    pub const CLOSE_MODAL: u32 = 8;
}

/// Widget event kinds to the host UI.
mod host_events {
    pub const BOND_CLASSIFIED: f32 = 1.0; // a = 0 ionic / 1 covalent / 2 none
    pub const CHALLENGE_CHANGED: f32 = 2.0; // a = challenge index
}

const KEY_TAB: u32 = 9;
const KEY_ESCAPE: u32 = 27;

struct Challenge {
    a: &'static str,
    b: &'static str,
    kind: BondKind,
    explanation: &'static str,
}

static CHALLENGES: [Challenge; 3] = [
    Challenge {
        a: "Na",
        b: "Cl",
        kind: BondKind::Ionic,
        explanation: "Na loses 1 electron, Cl gains 1.",
    },
    Challenge {
        a: "H",
        b: "O",
        kind: BondKind::Covalent,
        explanation: "Share electrons to form H2O.",
    },
    Challenge {
        a: "C",
        b: "H",
        kind: BondKind::Covalent,
        explanation: "Share electrons to form CH4.",
    },
];

pub struct BondingSandbox {
    atoms: [Atom; 2],
    electrons: Vec<Electron>,
    drag: DragTracker,
    /// Whole-atom dragging, tried only when no electron is hit.
    atom_drag: DragTracker,
    animation: BondAnimation,
    challenge: usize,
    modal: ModalState,
    /// Classification shown after an explicit bond action; cleared on reset
    /// or element change so the line never lingers over a rebuilt pair.
    bond_display: Option<BondKind>,
}

impl BondingSandbox {
    pub fn new() -> Self {
        let mut sandbox = Self {
            atoms: [
                Atom {
                    symbol: "H",
                    pos: ATOM_A_POS,
                    radius: ATOM_RADIUS,
                    valence: 1,
                },
                Atom {
                    symbol: "O",
                    pos: ATOM_B_POS,
                    radius: ATOM_RADIUS,
                    valence: 6,
                },
            ],
            electrons: Vec::new(),
            drag: DragTracker::new(DRAG_THRESHOLD),
            atom_drag: DragTracker::new(ATOM_RADIUS),
            animation: BondAnimation::new(),
            challenge: 0,
            modal: ModalState::new(1),
            bond_display: None,
        };
        sandbox.respawn_electrons();
        sandbox
    }

    fn set_elements(&mut self, a: &'static str, b: &'static str) {
        match (Atom::spawn(a, ATOM_A_POS), Atom::spawn(b, ATOM_B_POS)) {
            (Some(atom_a), Some(atom_b)) => {
                self.atoms = [atom_a, atom_b];
                self.respawn_electrons();
            }
            _ => log::warn!("unknown element pair {a}/{b}"),
        }
    }

    fn respawn_electrons(&mut self) {
        self.electrons = spawn_electrons(&self.atoms[0]);
        self.electrons.extend(spawn_electrons(&self.atoms[1]));
        self.drag.reset();
        self.atom_drag.reset();
        self.bond_display = None;
    }

    fn classify(&self) -> BondKind {
        determine_bond(&self.atoms[0], &self.atoms[1], &self.electrons)
    }

    fn handle_custom_event(&mut self, ctx: &mut WidgetContext, kind: u32, a: f32, b: f32) {
        match kind {
            events::SET_ELEMENTS => {
                let (ia, ib) = (a as usize, b as usize);
                if let (Some(&sym_a), Some(&sym_b)) = (ELEMENTS.get(ia), ELEMENTS.get(ib)) {
                    self.set_elements(sym_a, sym_b);
                } else {
                    log::warn!("ignoring out-of-range element pair {ia}/{ib}");
                }
            }
            events::RESET => self.respawn_electrons(),
            events::AUTO_BOND => {
                snap_to_midpoint(&self.atoms[0], &self.atoms[1], &mut self.electrons);
                self.bond_display = Some(self.classify());
            }
            events::CHECK_BOND => {
                let kind = self.classify();
                self.bond_display = Some(kind);
                let ordinal = match kind {
                    BondKind::Ionic => 0.0,
                    BondKind::Covalent => 1.0,
                    BondKind::None => 2.0,
                };
                ctx.emit(WidgetEvent::new(
                    host_events::BOND_CLASSIFIED,
                    ordinal,
                    0.0,
                    0.0,
                ));
                let challenge = &CHALLENGES[self.challenge];
                self.modal.show(format!(
                    "Bond type: {}\n{}",
                    kind.label(),
                    challenge.explanation
                ));
                self.challenge = (self.challenge + 1) % CHALLENGES.len();
            }
            events::NEXT_CHALLENGE => {
                let challenge = &CHALLENGES[self.challenge];
                self.set_elements(challenge.a, challenge.b);
                self.modal.show(format!(
                    "Build a bond between {} and {}.\nBond type: {}",
                    challenge.a,
                    challenge.b,
                    challenge.kind.label()
                ));
                ctx.emit(WidgetEvent::new(
                    host_events::CHALLENGE_CHANGED,
                    self.challenge as f32,
                    0.0,
                    0.0,
                ));
            }
            events::ALIGN_COVALENT => {
                align_covalent(
                    &self.atoms[0],
                    &self.atoms[1],
                    &mut self.electrons,
                    &mut ctx.rng,
                );
                self.bond_display = Some(BondKind::Covalent);
            }
            events::ALIGN_IONIC => {
                align_ionic(
                    &self.atoms[0],
                    &self.atoms[1],
                    &mut self.electrons,
                    &mut ctx.rng,
                );
                self.animation.start();
                self.bond_display = Some(BondKind::Ionic);
            }
            events::CLOSE_MODAL => self.modal.close(CloseReason::CloseButton),
            _ => {}
        }
    }

    fn handle_pointer(&mut self, event: &InputEvent) {
        let mut positions: Vec<Vec2> = self.electrons.iter().map(|e| e.pos).collect();
        match event {
            InputEvent::PointerDown { x, y } => {
                let pos = Vec2::new(*x, *y);
                if self.drag.on_pointer_down(pos, &positions).is_none() {
                    let atom_positions: Vec<Vec2> =
                        self.atoms.iter().map(|a| a.pos).collect();
                    self.atom_drag.on_pointer_down(pos, &atom_positions);
                }
            }
            InputEvent::PointerMove { x, y } => {
                let pos = Vec2::new(*x, *y);
                if self.drag.on_pointer_move(pos, &mut positions) {
                    for (e, p) in self.electrons.iter_mut().zip(positions) {
                        e.pos = p;
                    }
                } else {
                    let mut atom_positions: Vec<Vec2> =
                        self.atoms.iter().map(|a| a.pos).collect();
                    if self.atom_drag.on_pointer_move(pos, &mut atom_positions) {
                        for (atom, p) in self.atoms.iter_mut().zip(atom_positions) {
                            atom.pos = p;
                        }
                    }
                }
            }
            InputEvent::PointerUp { .. } => {
                self.drag.on_pointer_up();
                self.atom_drag.on_pointer_up();
            }
            _ => {}
        }
    }
}

impl Default for BondingSandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for BondingSandbox {
    fn config(&self) -> WidgetConfig {
        WidgetConfig {
            world_width: WORLD_W,
            world_height: WORLD_H,
            ..WidgetConfig::default()
        }
    }

    fn init(&mut self, _ctx: &mut WidgetContext) {
        log::info!(
            "bonding sandbox ready: {} / {}",
            self.atoms[0].symbol,
            self.atoms[1].symbol
        );
    }

    fn update(&mut self, ctx: &mut WidgetContext, input: &InputQueue) {
        for event in input.iter() {
            match event {
                InputEvent::Custom { kind, a, b, .. } => {
                    self.handle_custom_event(ctx, *kind, *a, *b)
                }
                InputEvent::KeyDown { key_code } => match *key_code {
                    KEY_ESCAPE => self.modal.close(CloseReason::Escape),
                    KEY_TAB => self.modal.focus_next(),
                    _ => {}
                },
                pointer => self.handle_pointer(pointer),
            }
        }

        let target = self.atoms[1].clone();
        self.animation.animate(&target, &mut self.electrons);
    }

    fn render(&self, surface: &mut dyn DrawSurface) {
        if matches!(self.bond_display, Some(kind) if kind != BondKind::None) {
            surface.line(self.atoms[0].pos, self.atoms[1].pos, 4.0, BOND_COLOR);
        }

        for atom in &self.atoms {
            surface.fill_circle(atom.pos, atom.radius, ATOM_COLOR);
            surface.text(
                atom.pos + Vec2::new(-10.0, 7.0),
                20.0,
                Color::BLACK,
                atom.symbol,
            );
        }

        for e in &self.electrons {
            let color = if e.shared { SHARED_COLOR } else { Color::WHITE };
            surface.fill_circle(e.pos, ELECTRON_RADIUS, color);
        }

        if self.modal.is_visible() {
            surface.fill_rect(Vec2::ZERO, WORLD_W, WORLD_H, Color::BLACK.with_alpha(0.6));
            surface.fill_rect(Vec2::new(125.0, 150.0), 350.0, 150.0, Color::rgb8(20, 30, 48));
            surface.text(
                Vec2::new(145.0, 210.0),
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
    use eduvision_engine::RecordingSurface;

    fn custom(kind: u32, a: f32, b: f32) -> InputEvent {
        InputEvent::Custom {
            kind,
            a,
            b,
            c: 0.0,
        }
    }

    fn tick(widget: &mut BondingSandbox, ctx: &mut WidgetContext, events: Vec<InputEvent>) {
        let mut input = InputQueue::new();
        for event in events {
            input.push(event);
        }
        widget.update(ctx, &input);
    }

    #[test]
    fn spawns_electrons_for_both_atoms() {
        let sandbox = BondingSandbox::new();
        // Default pair H/O: 1 + 6 valence electrons.
        assert_eq!(sandbox.electrons.len(), 7);
    }

    #[test]
    fn dragging_an_electron_follows_the_pointer() {
        let mut sandbox = BondingSandbox::new();
        let mut ctx = WidgetContext::new();
        let start = sandbox.electrons[0].pos;

        tick(
            &mut sandbox,
            &mut ctx,
            vec![
                InputEvent::PointerDown {
                    x: start.x + 5.0,
                    y: start.y,
                },
                InputEvent::PointerMove { x: 300.0, y: 225.0 },
            ],
        );
        assert_eq!(sandbox.electrons[0].pos, Vec2::new(300.0, 225.0));

        tick(
            &mut sandbox,
            &mut ctx,
            vec![
                InputEvent::PointerUp { x: 300.0, y: 225.0 },
                InputEvent::PointerMove { x: 10.0, y: 10.0 },
            ],
        );
        // Released: further moves do nothing.
        assert_eq!(sandbox.electrons[0].pos, Vec2::new(300.0, 225.0));
    }

    #[test]
    fn clicking_an_atom_body_drags_the_atom() {
        let mut sandbox = BondingSandbox::new();
        let mut ctx = WidgetContext::new();
        // Atom A's center is 70 away from its nearest electron, so the
        // electron hit test misses and the atom is grabbed instead.
        tick(
            &mut sandbox,
            &mut ctx,
            vec![
                InputEvent::PointerDown { x: 200.0, y: 225.0 },
                InputEvent::PointerMove { x: 180.0, y: 300.0 },
            ],
        );
        assert_eq!(sandbox.atoms[0].pos, Vec2::new(180.0, 300.0));
        assert_eq!(sandbox.atoms[1].pos, ATOM_B_POS);
    }

    #[test]
    fn auto_bond_snaps_electrons_to_the_midpoint() {
        let mut sandbox = BondingSandbox::new();
        let mut ctx = WidgetContext::new();
        tick(&mut sandbox, &mut ctx, vec![custom(events::AUTO_BOND, 0.0, 0.0)]);

        let mid = Vec2::new(300.0, 225.0);
        assert!(sandbox.electrons.iter().all(|e| e.pos == mid));
        assert_eq!(sandbox.classify(), BondKind::Covalent);
    }

    #[test]
    fn bond_line_appears_only_when_bonded() {
        let sandbox = BondingSandbox::new();
        let mut surface = RecordingSurface::new();
        sandbox.render(&mut surface);
        let lines_before = surface
            .commands
            .iter()
            .filter(|c| matches!(c, eduvision_engine::DrawCommand::Line { .. }))
            .count();
        assert_eq!(lines_before, 0);

        let mut sandbox = sandbox;
        let mut ctx = WidgetContext::new();
        tick(&mut sandbox, &mut ctx, vec![custom(events::AUTO_BOND, 0.0, 0.0)]);
        let mut surface = RecordingSurface::new();
        sandbox.render(&mut surface);
        let lines_after = surface
            .commands
            .iter()
            .filter(|c| matches!(c, eduvision_engine::DrawCommand::Line { .. }))
            .count();
        assert_eq!(lines_after, 1);
    }

    #[test]
    fn check_bond_reports_and_advances_the_challenge() {
        let mut sandbox = BondingSandbox::new();
        let mut ctx = WidgetContext::new();
        tick(&mut sandbox, &mut ctx, vec![custom(events::CHECK_BOND, 0.0, 0.0)]);

        assert!(sandbox.modal.is_visible());
        assert_eq!(sandbox.challenge, 1);
        assert!(ctx
            .events
            .iter()
            .any(|e| e.kind == host_events::BOND_CLASSIFIED));
    }

    #[test]
    fn next_challenge_rebuilds_the_atom_pair() {
        let mut sandbox = BondingSandbox::new();
        let mut ctx = WidgetContext::new();
        tick(
            &mut sandbox,
            &mut ctx,
            vec![custom(events::NEXT_CHALLENGE, 0.0, 0.0)],
        );
        assert_eq!(sandbox.atoms[0].symbol, "Na");
        assert_eq!(sandbox.atoms[1].symbol, "Cl");
        assert_eq!(sandbox.electrons.len(), 8); // 1 + 7 valence electrons
    }

    #[test]
    fn covalent_alignment_marks_electrons_shared() {
        let mut sandbox = BondingSandbox::new();
        let mut ctx = WidgetContext::new();
        tick(
            &mut sandbox,
            &mut ctx,
            vec![custom(events::ALIGN_COVALENT, 0.0, 0.0)],
        );
        assert!(sandbox.electrons.iter().all(|e| e.shared));

        let mut surface = RecordingSurface::new();
        sandbox.render(&mut surface);
        assert!(surface
            .filled_circles()
            .iter()
            .any(|(_, r, color)| *r == ELECTRON_RADIUS && *color == SHARED_COLOR));
    }
}
