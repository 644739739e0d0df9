//! Main-group periodic table layout and cell geometry.

use glam::Vec2;

pub const COLS: usize = 18;
pub const ROWS: usize = 7;

pub const GRID_ORIGIN: Vec2 = Vec2::new(10.0, 10.0);
pub const CELL_SIZE: f32 = 40.0;
pub const CELL_INSET: f32 = 2.0;

/// Row-major 18-column grid; empty strings are gaps (the d-block void in
/// periods 1-3 and the lanthanide/actinide slots, which are not shown).
#[rustfmt::skip]
pub const LAYOUT: [&str; COLS * ROWS] = [
    "H",  "",   "",   "",   "",   "",   "",   "",   "",   "",   "",   "",   "",   "",   "",   "",   "",   "He",
    "Li", "Be", "",   "",   "",   "",   "",   "",   "",   "",   "",   "",   "B",  "C",  "N",  "O",  "F",  "Ne",
    "Na", "Mg", "",   "",   "",   "",   "",   "",   "",   "",   "",   "",   "Al", "Si", "P",  "S",  "Cl", "Ar",
    "K",  "Ca", "Sc", "Ti", "V",  "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr",
    "Rb", "Sr", "Y",  "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", "Sb", "Te", "I",  "Xe",
    "Cs", "Ba", "",   "Hf", "Ta", "W",  "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At", "Rn",
    "Fr", "Ra", "",   "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Top-left corner of the cell at `index`.
pub fn cell_pos(index: usize) -> Vec2 {
    let row = index / COLS;
    let col = index % COLS;
    GRID_ORIGIN + Vec2::new(col as f32 * CELL_SIZE, row as f32 * CELL_SIZE)
}

/// The element symbol under a pointer position, if the position lands on a
/// non-empty cell.
pub fn hit_test(pos: Vec2) -> Option<&'static str> {
    let local = pos - GRID_ORIGIN;
    if local.x < 0.0 || local.y < 0.0 {
        return None;
    }
    let col = (local.x / CELL_SIZE) as usize;
    let row = (local.y / CELL_SIZE) as usize;
    if col >= COLS || row >= ROWS {
        return None;
    }
    let symbol = LAYOUT[row * COLS + col];
    (!symbol.is_empty()).then_some(symbol)
}
