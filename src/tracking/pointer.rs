//! Pointer state behind the tilt cards.
//!
//! The tracker owns a smoothed pointer position normalized to the card's
//! bounding box and derives the card rotation and the glow centre from it.
//! It knows nothing about the DOM: the component feeds it bounds and client
//! coordinates and reads the derived values back once per frame.

use crate::motion::remap::remap;
use crate::motion::spring::{Spring, SpringConfig};

pub const TILT_SPRING: SpringConfig = SpringConfig::new(200.0, 20.0, 1.0);
pub const MAX_TILT_DEG: f64 = 8.0;
pub const PERSPECTIVE_PX: f64 = 1200.0;
pub const DEFAULT_GLOW_COLOR: &str = "rgba(168, 85, 247, 0.4)";

/// Pointer position as a fraction of the card's width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub const CENTER: PointerSample = PointerSample { x: 0.5, y: 0.5 };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// False for boxes that have not been laid out yet.
    pub fn has_area(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Values slightly outside [0, 1] near the edges are passed through.
    pub fn normalize(&self, client_x: f64, client_y: f64) -> Option<PointerSample> {
        if !self.has_area() || !client_x.is_finite() || !client_y.is_finite() {
            return None;
        }
        Some(PointerSample {
            x: (client_x - self.left) / self.width,
            y: (client_y - self.top) / self.height,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovering,
}

/// Card rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
}

impl Rotation {
    /// Top edge tilts away from the viewer, bottom edge towards.
    pub fn for_sample(sample: PointerSample) -> Self {
        Self {
            x: remap(sample.y, (0.0, 1.0), (MAX_TILT_DEG, -MAX_TILT_DEG)),
            y: remap(sample.x, (0.0, 1.0), (-MAX_TILT_DEG, MAX_TILT_DEG)),
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({:.3}deg) rotateY({:.3}deg)",
            PERSPECTIVE_PX, self.x, self.y
        )
    }
}

/// Centre of the radial glow, in percent of the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub x: f64,
    pub y: f64,
}

impl Highlight {
    pub fn for_sample(sample: PointerSample) -> Self {
        Self {
            x: remap(sample.x, (0.0, 1.0), (0.0, 100.0)),
            y: remap(sample.y, (0.0, 1.0), (0.0, 100.0)),
        }
    }

    pub fn glow_gradient(&self, color: &str) -> String {
        format!(
            "radial-gradient(circle at {:.2}% {:.2}%, {}, transparent 60%)",
            self.x, self.y, color
        )
    }

    pub fn shine_gradient(&self) -> String {
        format!(
            "radial-gradient(circle at {:.2}% {:.2}%, rgba(255,255,255,0.06) 0%, transparent 50%)",
            self.x, self.y
        )
    }
}

#[derive(Debug, Clone)]
pub struct PointerTracker {
    state: InteractionState,
    bounds: Option<Bounds>,
    x: Spring,
    y: Spring,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            state: InteractionState::Idle,
            bounds: None,
            x: Spring::new(TILT_SPRING, PointerSample::CENTER.x),
            y: Spring::new(TILT_SPRING, PointerSample::CENTER.y),
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    #[cfg(test)]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn pointer_enter(&mut self, bounds: Bounds) {
        self.state = InteractionState::Hovering;
        self.bounds = Some(bounds);
    }

    /// Retargets the springs. Returns false, leaving the state untouched,
    /// when there are no usable bounds to normalize against.
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) -> bool {
        let Some(sample) = self.bounds.and_then(|bounds| bounds.normalize(client_x, client_y))
        else {
            return false;
        };
        self.x.set_target(sample.x);
        self.y.set_target(sample.y);
        true
    }

    pub fn pointer_leave(&mut self) {
        self.state = InteractionState::Idle;
        self.bounds = None;
        self.x.set_target(PointerSample::CENTER.x);
        self.y.set_target(PointerSample::CENTER.y);
    }

    #[cfg(test)]
    pub fn target(&self) -> PointerSample {
        PointerSample {
            x: self.x.target(),
            y: self.y.target(),
        }
    }

    pub fn smoothed(&self) -> PointerSample {
        PointerSample {
            x: self.x.position(),
            y: self.y.position(),
        }
    }

    /// Advances both springs; returns whether they are still moving.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.x.tick(dt);
        self.y.tick(dt);
        !self.is_settled()
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }

    pub fn rotation(&self) -> Rotation {
        Rotation::for_sample(self.smoothed())
    }

    pub fn highlight(&self) -> Highlight {
        Highlight::for_sample(self.smoothed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn card() -> Bounds {
        Bounds::new(100.0, 200.0, 400.0, 300.0)
    }

    fn settle(tracker: &mut PointerTracker) {
        for _ in 0..600 {
            tracker.tick(FRAME);
        }
    }

    fn assert_finite(tracker: &PointerTracker) {
        let rotation = tracker.rotation();
        let highlight = tracker.highlight();
        assert!(rotation.x.is_finite() && rotation.y.is_finite());
        assert!(highlight.x.is_finite() && highlight.y.is_finite());
    }

    #[test]
    fn test_samples_inside_bounds_are_normalized() {
        let bounds = card();
        for &(x, y) in &[(101.0, 201.0), (300.0, 350.0), (499.0, 499.0), (250.5, 420.25)] {
            let sample = bounds.normalize(x, y).unwrap();
            assert!((0.0..=1.0).contains(&sample.x), "x = {}", sample.x);
            assert!((0.0..=1.0).contains(&sample.y), "y = {}", sample.y);
        }
    }

    #[test]
    fn test_overflow_near_edges_is_not_clamped() {
        let sample = card().normalize(510.0, 190.0).unwrap();
        assert!(sample.x > 1.0);
        assert!(sample.y < 0.0);
    }

    #[test]
    fn test_rotation_mapping() {
        let top = Rotation::for_sample(PointerSample { x: 0.5, y: 0.0 });
        let bottom = Rotation::for_sample(PointerSample { x: 0.5, y: 1.0 });
        let center = Rotation::for_sample(PointerSample::CENTER);
        assert_eq!(top.x, 8.0);
        assert_eq!(bottom.x, -8.0);
        assert_eq!(center.x, 0.0);

        let left = Rotation::for_sample(PointerSample { x: 0.0, y: 0.5 });
        let right = Rotation::for_sample(PointerSample { x: 1.0, y: 0.5 });
        assert_eq!(left.y, -8.0);
        assert_eq!(right.y, 8.0);
        assert_eq!(center.y, 0.0);
    }

    #[test]
    fn test_rotation_mapping_is_monotonic() {
        let mut previous = f64::INFINITY;
        for step in 0..=20 {
            let y = step as f64 / 20.0;
            let rotation = Rotation::for_sample(PointerSample { x: 0.5, y });
            assert!(rotation.x < previous);
            previous = rotation.x;
        }
    }

    #[test]
    fn test_highlight_mapping() {
        let highlight = Highlight::for_sample(PointerSample { x: 0.25, y: 1.0 });
        assert_eq!(highlight.x, 25.0);
        assert_eq!(highlight.y, 100.0);
        assert_eq!(
            highlight.glow_gradient(DEFAULT_GLOW_COLOR),
            "radial-gradient(circle at 25.00% 100.00%, rgba(168, 85, 247, 0.4), transparent 60%)"
        );
    }

    #[test]
    fn test_enter_move_tilts_towards_pointer() {
        let mut tracker = PointerTracker::new();
        tracker.pointer_enter(card());
        assert_eq!(tracker.state(), InteractionState::Hovering);

        // Top-left corner.
        assert!(tracker.pointer_move(100.0, 200.0));
        assert_eq!(tracker.target(), PointerSample { x: 0.0, y: 0.0 });
        settle(&mut tracker);

        let rotation = tracker.rotation();
        assert!((rotation.x - 8.0).abs() < 1e-2);
        assert!((rotation.y + 8.0).abs() < 1e-2);
    }

    #[test]
    fn test_rotation_eases_instead_of_snapping() {
        let mut tracker = PointerTracker::new();
        tracker.pointer_enter(card());
        tracker.pointer_move(500.0, 500.0);
        tracker.tick(FRAME);

        let rotation = tracker.rotation();
        assert!(rotation.x < 0.0 && rotation.x > -8.0);
        assert!(rotation.y > 0.0 && rotation.y < 8.0);
    }

    #[test]
    fn test_leave_resets_and_converges_to_neutral() {
        let mut tracker = PointerTracker::new();
        tracker.pointer_enter(card());
        tracker.pointer_move(480.0, 220.0);
        settle(&mut tracker);
        assert!(tracker.rotation().x.abs() > 1.0);

        tracker.pointer_leave();
        assert_eq!(tracker.state(), InteractionState::Idle);
        assert_eq!(tracker.target(), PointerSample::CENTER);
        assert!(tracker.bounds().is_none());

        settle(&mut tracker);
        let rotation = tracker.rotation();
        assert!(rotation.x.abs() < 1e-2);
        assert!(rotation.y.abs() < 1e-2);
        assert!(tracker.is_settled());
    }

    #[test]
    fn test_zero_area_bounds_produce_no_change() {
        for bounds in [
            Bounds::new(10.0, 10.0, 0.0, 120.0),
            Bounds::new(10.0, 10.0, 120.0, 0.0),
            Bounds::new(10.0, 10.0, 0.0, 0.0),
            Bounds::new(f64::NAN, 10.0, 120.0, 120.0),
        ] {
            let mut tracker = PointerTracker::new();
            tracker.pointer_enter(bounds);
            assert!(!tracker.pointer_move(40.0, 40.0));
            assert_eq!(tracker.target(), PointerSample::CENTER);

            tracker.tick(FRAME);
            assert_finite(&tracker);
            assert_eq!(tracker.rotation(), Rotation { x: 0.0, y: 0.0 });
        }
    }

    #[test]
    fn test_move_without_enter_is_ignored() {
        let mut tracker = PointerTracker::new();
        assert!(!tracker.pointer_move(300.0, 300.0));
        assert_eq!(tracker.target(), PointerSample::CENTER);
    }

    #[test]
    fn test_non_finite_pointer_is_ignored() {
        let mut tracker = PointerTracker::new();
        tracker.pointer_enter(card());
        assert!(!tracker.pointer_move(f64::NAN, 300.0));
        assert!(!tracker.pointer_move(300.0, f64::INFINITY));
        tracker.tick(FRAME);
        assert_finite(&tracker);
    }

    #[test]
    fn test_transform_string() {
        let rotation = Rotation { x: 8.0, y: -2.5 };
        assert_eq!(
            rotation.transform(),
            "perspective(1200px) rotateX(8.000deg) rotateY(-2.500deg)"
        );
    }
}
