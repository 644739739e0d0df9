//! Electron shell configurations for the supported elements.

use glam::Vec2;

/// Elements the selector offers, in display order. Indices double as the
/// payload of the select-element custom event.
pub const ELEMENTS: [&str; 6] = ["H", "He", "Li", "C", "O", "Ne"];

/// Shell occupancy for one element, innermost shell first.
pub fn electron_config(symbol: &str) -> Option<&'static [u32]> {
    let config: &'static [u32] = match symbol {
        "H" => &[1],
        "He" => &[2],
        "Li" => &[2, 1],
        "C" => &[2, 4],
        "O" => &[2, 6],
        "Ne" => &[2, 8],
        _ => return None,
    };
    Some(config)
}

/// Position of electron `index` of `count` on a shell of `radius` around
/// `center`, with the whole shell rotated by `angle` radians.
pub fn electron_position(center: Vec2, radius: f32, angle: f32, index: u32, count: u32) -> Vec2 {
    let step = std::f32::consts::TAU / count as f32;
    let theta = angle + index as f32 * step;
    center + Vec2::new(radius * theta.cos(), radius * theta.sin())
}
