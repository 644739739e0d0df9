//! Fixed positive-ion lattice.

use glam::Vec2;

pub const ION_RADIUS: f32 = 20.0;
pub const ROWS: usize = 4;
pub const COLS: usize = 6;

/// Grid of ion centers, row-major. The lattice never moves; only the
/// electron sea around it does.
pub fn ion_positions() -> Vec<Vec2> {
    let mut ions = Vec::with_capacity(ROWS * COLS);
    for i in 0..ROWS {
        for j in 0..COLS {
            ions.push(Vec2::new(100.0 + j as f32 * 80.0, 100.0 + i as f32 * 60.0));
        }
    }
    ions
}
