//! Atoms and valence electrons.

use glam::Vec2;

pub const ATOM_RADIUS: f32 = 40.0;
pub const ELECTRON_RING_RADIUS: f32 = 70.0;
pub const ELECTRON_RADIUS: f32 = 8.0;

/// Elements the selector offers. Indices double as the payload of the
/// set-elements custom event.
pub const ELEMENTS: [&str; 5] = ["H", "O", "C", "Na", "Cl"];

/// Valence electron counts, deliberately simplified for the demo.
pub fn valence(symbol: &str) -> Option<u32> {
    match symbol {
        "H" => Some(1),
        "O" => Some(6),
        "C" => Some(4),
        "Na" => Some(1),
        "Cl" => Some(7),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct Atom {
    pub symbol: &'static str,
    pub pos: Vec2,
    pub radius: f32,
    pub valence: u32,
}

impl Atom {
    pub fn spawn(symbol: &'static str, pos: Vec2) -> Option<Self> {
        Some(Self {
            symbol,
            pos,
            radius: ATOM_RADIUS,
            valence: valence(symbol)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Electron {
    pub pos: Vec2,
    pub owner: &'static str,
    pub shared: bool,
}

/// Spawn an atom's valence electrons evenly spaced on a ring around it.
pub fn spawn_electrons(atom: &Atom) -> Vec<Electron> {
    (0..atom.valence)
        .map(|i| {
            let theta = std::f32::consts::TAU * i as f32 / atom.valence as f32;
            Electron {
                pos: atom.pos
                    + Vec2::new(
                        ELECTRON_RING_RADIUS * theta.cos(),
                        ELECTRON_RING_RADIUS * theta.sin(),
                    ),
                owner: atom.symbol,
                shared: false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_symbol_has_no_valence() {
        assert_eq!(valence("Xx"), None);
        assert!(Atom::spawn("Xx", Vec2::ZERO).is_none());
    }

    #[test]
    fn electrons_ring_the_atom() {
        let atom = Atom::spawn("O", Vec2::new(200.0, 225.0)).unwrap();
        let electrons = spawn_electrons(&atom);
        assert_eq!(electrons.len(), 6);
        for e in &electrons {
            assert!((e.pos.distance(atom.pos) - ELECTRON_RING_RADIUS).abs() < 1e-3);
            assert_eq!(e.owner, "O");
            assert!(!e.shared);
        }
    }
}
