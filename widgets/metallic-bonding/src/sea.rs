//! The delocalized electron sea.
//!
//! Electrons drift with individual random velocities scaled by a shared
//! speed factor. Heating and cooling step the factor by 0.5, clamped to
//! [0.5, 6]. Flow mode overrides the drift with a uniform rightward
//! current to illustrate conduction.

use glam::Vec2;

use eduvision_engine::Rng;

pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 6.0;
pub const SPEED_STEP: f32 = 0.5;

#[derive(Debug, Clone)]
pub struct SeaElectron {
    pub pos: Vec2,
    pub vel: Vec2,
}

pub struct ElectronSea {
    pub electrons: Vec<SeaElectron>,
    speed: f32,
    flowing: bool,
}

impl ElectronSea {
    pub fn new() -> Self {
        Self {
            electrons: Vec::new(),
            speed: 1.0,
            flowing: false,
        }
    }

    /// Replace the sea with `count` electrons at random positions, each
    /// with velocity components in [-1, 1).
    pub fn spawn(&mut self, count: u32, width: f32, height: f32, rng: &mut Rng) {
        self.electrons = (0..count)
            .map(|_| SeaElectron {
                pos: Vec2::new(rng.range(0.0, width), rng.range(0.0, height)),
                vel: Vec2::new(rng.range(-1.0, 1.0), rng.range(-1.0, 1.0)),
            })
            .collect();
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_flowing(&self) -> bool {
        self.flowing
    }

    pub fn heat(&mut self) {
        self.speed = (self.speed + SPEED_STEP).min(MAX_SPEED);
    }

    pub fn cool(&mut self) {
        self.speed = (self.speed - SPEED_STEP).max(MIN_SPEED);
    }

    pub fn toggle_flow(&mut self) {
        self.flowing = !self.flowing;
    }

    /// One tick of drift. Drifting electrons bounce off the world bounds;
    /// flowing electrons move uniformly right and wrap to the left edge.
    pub fn update(&mut self, width: f32, height: f32) {
        for e in &mut self.electrons {
            if self.flowing {
                e.pos.x += self.speed * 2.0;
                if e.pos.x > width {
                    e.pos.x = 0.0;
                }
            } else {
                e.pos += e.vel * self.speed;
                if e.pos.x < 0.0 || e.pos.x > width {
                    e.vel.x = -e.vel.x;
                }
                if e.pos.y < 0.0 || e.pos.y > height {
                    e.vel.y = -e.vel.y;
                }
            }
        }
    }
}

impl Default for ElectronSea {
    fn default() -> Self {
        Self::new()
    }
}
