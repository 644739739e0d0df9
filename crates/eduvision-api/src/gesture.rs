//! Maps gesture-recognition responses onto simulator parameters.
//!
//! Raw hand distances jitter frame to frame, so they pass through an
//! exponential moving average before being scaled into parameter ranges.
//! The pinch gesture acts as a trigger (launch, restart) and must fire
//! once per pinch, not once per frame while held.

use crate::endpoints::GestureResponse;

/// EMA weight for new samples. Placeholder tuning pending calibration
/// against the camera pipeline.
const SMOOTHING: f64 = 0.3;

/// Parameters for the projectile simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileParams {
    /// Launch angle in degrees, 0..=90.
    pub angle: f64,
    /// Launch velocity in m/s, 0..=100.
    pub velocity: f64,
}

/// Parameters for the wave simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    /// Hz, 0.2..=6.0.
    pub frequency: f64,
    /// Display units, 0.1..=1.5.
    pub amplitude: f64,
}

/// Smooths hand distances and converts them into simulator parameters.
#[derive(Debug, Default)]
pub struct GestureMapper {
    left: Option<f64>,
    right: Option<f64>,
    pinch_held: bool,
}

impl GestureMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one recognition result into the smoothed state. Returns true
    /// when a pinch started this frame (rising edge only).
    pub fn observe(&mut self, resp: &GestureResponse) -> bool {
        if !resp.hands_detected {
            // No hands: keep the last smoothed values and release the pinch
            // latch so the next pinch fires again.
            self.pinch_held = false;
            return false;
        }
        if let Some(dist) = resp.left_dist {
            self.left = Some(Self::smooth(self.left, dist));
        }
        if let Some(dist) = resp.right_dist {
            self.right = Some(Self::smooth(self.right, dist));
        }
        let pinch_now = resp.pinch.unwrap_or(false);
        let fired = pinch_now && !self.pinch_held;
        self.pinch_held = pinch_now;
        fired
    }

    fn smooth(previous: Option<f64>, sample: f64) -> f64 {
        match previous {
            Some(prev) => prev + SMOOTHING * (sample - prev),
            None => sample,
        }
    }

    pub fn smoothed_left(&self) -> Option<f64> {
        self.left
    }

    pub fn smoothed_right(&self) -> Option<f64> {
        self.right
    }

    /// Left hand drives angle, right hand drives velocity. None until both
    /// hands have been seen at least once.
    pub fn projectile_params(&self) -> Option<ProjectileParams> {
        let (left, right) = (self.left?, self.right?);
        Some(ProjectileParams {
            angle: (left * 90.0).clamp(0.0, 90.0),
            velocity: (right * 100.0).clamp(0.0, 100.0),
        })
    }

    /// Left hand drives frequency, right hand drives amplitude.
    pub fn wave_params(&self) -> Option<WaveParams> {
        let (left, right) = (self.left?, self.right?);
        Some(WaveParams {
            frequency: (left * 6.0).clamp(0.2, 6.0),
            amplitude: (right * 1.5).clamp(0.1, 1.5),
        })
    }
}
