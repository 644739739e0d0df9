//! Bond classification.
//!
//! A toy heuristic, not a chemical model: two checks in fixed priority
//! order, deliberately approximate and purely illustrative.

use glam::Vec2;

use crate::molecule::{Atom, Electron};

/// Distance from the atom midpoint within which an electron counts as
/// shared for the covalent check.
pub const COVALENT_RANGE: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondKind {
    Ionic,
    Covalent,
    None,
}

impl BondKind {
    pub fn label(self) -> &'static str {
        match self {
            BondKind::Ionic => "ionic",
            BondKind::Covalent => "covalent",
            BondKind::None => "none",
        }
    }
}

fn check_ionic(a: &Atom, b: &Atom, electrons: &[Electron]) -> bool {
    a.valence.abs_diff(b.valence) == 1 && electrons.len() as u32 <= a.valence + b.valence
}

fn check_covalent(a: &Atom, b: &Atom, electrons: &[Electron]) -> bool {
    let mid = (a.pos + b.pos) * 0.5;
    electrons.iter().any(|e| e.pos.distance(mid) < COVALENT_RANGE)
}

/// Ionic wins over covalent; covalent over none. The order is part of the
/// contract.
pub fn determine_bond(a: &Atom, b: &Atom, electrons: &[Electron]) -> BondKind {
    if check_ionic(a, b, electrons) {
        BondKind::Ionic
    } else if check_covalent(a, b, electrons) {
        BondKind::Covalent
    } else {
        BondKind::None
    }
}
