//! Pointer-drag tracking with distance hit testing.
//!
//! Shared by every widget that lets the user grab electrons or atoms:
//! pointer-down hit-tests a set of tracked points, pointer-move overwrites
//! the grabbed point's position verbatim, pointer-up releases it.

use glam::Vec2;

/// Tracks which point (if any) is currently being dragged.
///
/// Hit testing is Euclidean distance against a fixed threshold. The first
/// point in iteration order within the threshold wins; there is no z-order
/// or nearest-match tie-break. Single pointer only.
pub struct DragTracker {
    threshold: f32,
    active: Option<usize>,
}

impl DragTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            active: None,
        }
    }

    /// Index of the point currently being dragged, if any.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Hit-test `points` against the pointer position. The first point
    /// within the threshold becomes the drag target and is returned.
    pub fn on_pointer_down(&mut self, pos: Vec2, points: &[Vec2]) -> Option<usize> {
        self.active = points
            .iter()
            .position(|p| p.distance(pos) < self.threshold);
        self.active
    }

    /// Move the dragged point to the pointer position. No bounds clamp.
    /// Returns true if a point was moved.
    pub fn on_pointer_move(&mut self, pos: Vec2, points: &mut [Vec2]) -> bool {
        match self.active {
            Some(idx) if idx < points.len() => {
                points[idx] = pos;
                true
            }
            _ => false,
        }
    }

    /// Release the drag target.
    pub fn on_pointer_up(&mut self) {
        self.active = None;
    }

    /// Forget the drag target, e.g. when the tracked set is rebuilt.
    pub fn reset(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<Vec2> {
        vec![
            Vec2::new(100.0, 100.0),
            Vec2::new(200.0, 100.0),
            Vec2::new(205.0, 100.0), // overlaps the hit area of the previous point
        ]
    }

    #[test]
    fn hit_inside_radius_selects() {
        let mut drag = DragTracker::new(12.0);
        let hit = drag.on_pointer_down(Vec2::new(105.0, 103.0), &points());
        assert_eq!(hit, Some(0));
    }

    #[test]
    fn miss_outside_all_radii() {
        let mut drag = DragTracker::new(12.0);
        let hit = drag.on_pointer_down(Vec2::new(300.0, 300.0), &points());
        assert_eq!(hit, None);
        assert_eq!(drag.active(), None);
    }

    #[test]
    fn first_match_wins_on_overlap() {
        let mut drag = DragTracker::new(12.0);
        // (202, 100) is within threshold of both index 1 and index 2.
        let hit = drag.on_pointer_down(Vec2::new(202.0, 100.0), &points());
        assert_eq!(hit, Some(1));
    }

    #[test]
    fn move_overwrites_position_verbatim() {
        let mut drag = DragTracker::new(12.0);
        let mut pts = points();
        drag.on_pointer_down(Vec2::new(100.0, 100.0), &pts);
        // Way out of bounds on purpose: no clamping.
        assert!(drag.on_pointer_move(Vec2::new(-50.0, 9999.0), &mut pts));
        assert_eq!(pts[0], Vec2::new(-50.0, 9999.0));
    }

    #[test]
    fn up_clears_target() {
        let mut drag = DragTracker::new(12.0);
        let mut pts = points();
        drag.on_pointer_down(Vec2::new(100.0, 100.0), &pts);
        drag.on_pointer_up();
        assert_eq!(drag.active(), None);
        assert!(!drag.on_pointer_move(Vec2::new(0.0, 0.0), &mut pts));
    }

    #[test]
    fn stale_index_after_rebuild_is_ignored() {
        let mut drag = DragTracker::new(12.0);
        let mut pts = points();
        drag.on_pointer_down(Vec2::new(205.0, 100.0), &pts);
        pts.truncate(1);
        // Active index may now be out of range; move must not panic.
        let _ = drag.on_pointer_move(Vec2::new(0.0, 0.0), &mut pts);
    }
}
