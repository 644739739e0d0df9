//! Electron repositioning for bond visualization.

use glam::Vec2;

use eduvision_engine::Rng;

use crate::molecule::{Atom, Electron};

/// Covalent: scatter all electrons near the midpoint and mark them shared.
pub fn align_covalent(a: &Atom, b: &Atom, electrons: &mut [Electron], rng: &mut Rng) {
    let mid = (a.pos + b.pos) * 0.5;
    for e in electrons {
        e.pos = mid + Vec2::new(rng.jitter(10.0), rng.jitter(10.0));
        e.shared = true;
    }
}

/// Ionic: transfer all electrons to the receiving atom.
pub fn align_ionic(_a: &Atom, b: &Atom, electrons: &mut [Electron], rng: &mut Rng) {
    for e in electrons {
        e.pos = b.pos + Vec2::new(rng.jitter(20.0), rng.jitter(20.0));
    }
}

/// Snap every electron exactly to the midpoint. Used by the auto-bond
/// button as the crudest possible bond representation.
pub fn snap_to_midpoint(a: &Atom, b: &Atom, electrons: &mut [Electron]) {
    let mid = (a.pos + b.pos) * 0.5;
    for e in electrons {
        e.pos = mid;
    }
}

/// Eased electron transfer toward the receiving atom. Progress advances a
/// fixed amount per tick; positions close 5% of the remaining distance each
/// tick, so the motion decelerates as it lands.
#[derive(Debug, Default)]
pub struct BondAnimation {
    progress: f32,
    active: bool,
}

impl BondAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.progress = 0.0;
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn animate(&mut self, target: &Atom, electrons: &mut [Electron]) {
        if !self.active {
            return;
        }
        self.progress += 0.02;
        if self.progress >= 1.0 {
            self.active = false;
        }
        for e in electrons {
            e.pos += (target.pos - e.pos) * 0.05;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::molecule::spawn_electrons;

    fn pair() -> (Atom, Atom) {
        (
            Atom::spawn("H", Vec2::new(200.0, 225.0)).unwrap(),
            Atom::spawn("O", Vec2::new(400.0, 225.0)).unwrap(),
        )
    }

    #[test]
    fn covalent_alignment_clusters_and_shares() {
        let (h, o) = pair();
        let mut electrons = spawn_electrons(&h);
        let mut rng = Rng::new(7);
        align_covalent(&h, &o, &mut electrons, &mut rng);

        let mid = Vec2::new(300.0, 225.0);
        for e in &electrons {
            assert!(e.pos.distance(mid) <= 10.0 * std::f32::consts::SQRT_2 + 1e-3);
            assert!(e.shared);
        }
    }

    #[test]
    fn ionic_alignment_moves_electrons_to_the_receiver() {
        let (h, o) = pair();
        let mut electrons = spawn_electrons(&h);
        let mut rng = Rng::new(7);
        align_ionic(&h, &o, &mut electrons, &mut rng);

        for e in &electrons {
            assert!((e.pos.x - o.pos.x).abs() <= 20.0);
            assert!((e.pos.y - o.pos.y).abs() <= 20.0);
        }
    }

    #[test]
    fn animation_converges_and_stops() {
        let (h, o) = pair();
        let mut electrons = spawn_electrons(&h);
        let mut anim = BondAnimation::new();
        anim.start();

        for _ in 0..60 {
            anim.animate(&o, &mut electrons);
        }
        assert!(!anim.is_active());
        // 5% per tick over 50 ticks closes most of the gap.
        for e in &electrons {
            assert!(e.pos.distance(o.pos) < 70.0);
        }
    }

    #[test]
    fn inactive_animation_moves_nothing() {
        let (h, o) = pair();
        let mut electrons = spawn_electrons(&h);
        let before: Vec<_> = electrons.iter().map(|e| e.pos).collect();
        let mut anim = BondAnimation::new();
        anim.animate(&o, &mut electrons);
        let after: Vec<_> = electrons.iter().map(|e| e.pos).collect();
        assert_eq!(before, after);
    }
}
