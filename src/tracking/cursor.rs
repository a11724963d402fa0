use crate::motion::spring::{Point, Spring2, SpringConfig};

/// Elements that magnify the cursor while hovered.
pub const INTERACTIVE_SELECTOR: &str =
    "a, button, [role='button'], input, textarea, select, .cursor-hover";

pub const DOT_SPRING: SpringConfig = SpringConfig::new(200.0, 25.0, 0.5);
pub const HALO_SPRING: SpringConfig = SpringConfig::new(120.0, 30.0, 1.0);

/// Where the glyphs wait before the first pointer move.
pub const OFFSCREEN: Point = Point::new(-100.0, -100.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Small dot tracking the pointer closely.
    Dot,
    /// Ring trailing behind the dot.
    Halo,
    /// Blurred disc riding the halo spring.
    Aura,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphStyle {
    pub opacity: f64,
    pub scale: f64,
    pub transition_secs: f64,
}

impl Glyph {
    #[cfg(test)]
    pub const ALL: [Glyph; 3] = [Glyph::Dot, Glyph::Halo, Glyph::Aura];

    pub fn style(self, visible: bool, hovering: bool) -> GlyphStyle {
        let (shown_opacity, hover_scale, transition_secs) = match self {
            Glyph::Dot => (1.0, 1.8, 0.15),
            Glyph::Halo => (0.6, 2.0, 0.3),
            Glyph::Aura => (0.15, 2.5, 0.5),
        };
        GlyphStyle {
            opacity: if visible { shown_opacity } else { 0.0 },
            scale: if hovering { hover_scale } else { 1.0 },
            transition_secs,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Glyph::Dot => "cursor-dot",
            Glyph::Halo => "cursor-halo",
            Glyph::Aura => "cursor-aura",
        }
    }
}

impl GlyphStyle {
    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: scale({}); transition: opacity {secs}s ease, transform {secs}s ease;",
            self.opacity,
            self.scale,
            secs = self.transition_secs
        )
    }
}

/// Centres a glyph on `position`.
pub fn glyph_transform(position: Point) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%)",
        position.x, position.y
    )
}

/// State behind the custom cursor: one raw pointer position followed by a
/// fast and a slow spring.
#[derive(Debug, Clone)]
pub struct CursorFollower {
    visible: bool,
    hovering: bool,
    raw: Point,
    dot: Spring2,
    halo: Spring2,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorFollower {
    pub fn new() -> Self {
        Self {
            visible: false,
            hovering: false,
            raw: OFFSCREEN,
            dot: Spring2::new(DOT_SPRING, OFFSCREEN),
            halo: Spring2::new(HALO_SPRING, OFFSCREEN),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn raw_position(&self) -> Point {
        self.raw
    }

    pub fn dot_position(&self) -> Point {
        self.dot.position()
    }

    pub fn halo_position(&self) -> Point {
        self.halo.position()
    }

    pub fn position_of(&self, glyph: Glyph) -> Point {
        match glyph {
            Glyph::Dot => self.dot_position(),
            Glyph::Halo | Glyph::Aura => self.halo_position(),
        }
    }

    /// Returns true when this move made the cursor visible.
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) -> bool {
        let position = Point::new(client_x, client_y);
        if !position.is_finite() {
            return false;
        }
        self.raw = position;
        self.dot.set_target(position);
        self.halo.set_target(position);

        let became_visible = !self.visible;
        self.visible = true;
        became_visible
    }

    /// Pointer moved onto a new element; `interactive` says whether it (or an
    /// ancestor) is interactive. Returns true when the hover state changed.
    pub fn pointer_over(&mut self, interactive: bool) -> bool {
        let changed = self.hovering != interactive;
        self.hovering = interactive;
        changed
    }

    /// Pointer left the window. Visibility is kept.
    pub fn pointer_left_window(&mut self) -> bool {
        self.pointer_over(false)
    }

    /// Advances both springs; returns whether either is still moving.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.dot.tick(dt);
        self.halo.tick(dt);
        !(self.dot.is_settled() && self.halo.is_settled())
    }

    #[cfg(test)]
    pub fn style_of(&self, glyph: Glyph) -> GlyphStyle {
        glyph.style(self.visible, self.hovering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn test_hidden_until_first_move() {
        let mut follower = CursorFollower::new();
        assert!(!follower.is_visible());
        assert_eq!(follower.raw_position(), OFFSCREEN);
        assert_eq!(follower.dot_position(), OFFSCREEN);

        assert!(follower.pointer_move(320.0, 240.0));
        assert!(follower.is_visible());
        assert_eq!(follower.raw_position(), Point::new(320.0, 240.0));
    }

    #[test]
    fn test_visibility_never_reverts() {
        let mut follower = CursorFollower::new();
        follower.pointer_move(10.0, 10.0);
        assert!(!follower.pointer_move(20.0, 20.0));

        follower.pointer_over(true);
        follower.pointer_left_window();
        for _ in 0..120 {
            follower.tick(FRAME);
        }
        assert!(follower.is_visible());
    }

    #[test]
    fn test_non_finite_move_is_ignored() {
        let mut follower = CursorFollower::new();
        assert!(!follower.pointer_move(f64::NAN, 10.0));
        assert!(!follower.is_visible());
        assert_eq!(follower.raw_position(), OFFSCREEN);
    }

    #[test]
    fn test_hover_toggles() {
        let mut follower = CursorFollower::new();
        assert!(!follower.is_hovering());

        assert!(follower.pointer_over(true));
        assert!(follower.is_hovering());
        // Moving between two interactive elements changes nothing.
        assert!(!follower.pointer_over(true));

        assert!(follower.pointer_over(false));
        assert!(!follower.is_hovering());

        follower.pointer_over(true);
        assert!(follower.pointer_left_window());
        assert!(!follower.is_hovering());
    }

    #[test]
    fn test_halo_trails_dot() {
        let mut follower = CursorFollower::new();
        follower.pointer_move(600.0, 400.0);
        for _ in 0..6 {
            follower.tick(FRAME);
        }
        let target = follower.raw_position();
        let dot = follower.dot_position();
        let halo = follower.halo_position();
        assert!((target.x - dot.x).abs() < (target.x - halo.x).abs());
        assert!((target.y - dot.y).abs() < (target.y - halo.y).abs());
        assert_eq!(follower.position_of(Glyph::Aura), halo);
    }

    #[test]
    fn test_springs_settle_on_pointer() {
        let mut follower = CursorFollower::new();
        follower.pointer_move(600.0, 400.0);
        let mut frames = 0;
        while follower.tick(FRAME) {
            frames += 1;
            assert!(frames < 2_000, "cursor never settled");
        }
        assert!((follower.dot_position().x - 600.0).abs() < 1e-2);
        assert!((follower.halo_position().y - 400.0).abs() < 1e-2);
    }

    #[test]
    fn test_glyph_styles() {
        let hidden = Glyph::Dot.style(false, false);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.scale, 1.0);

        let mut follower = CursorFollower::new();
        follower.pointer_move(1.0, 1.0);
        follower.pointer_over(true);
        assert_eq!(follower.style_of(Glyph::Dot).scale, 1.8);
        assert_eq!(follower.style_of(Glyph::Halo).scale, 2.0);
        assert_eq!(follower.style_of(Glyph::Aura).scale, 2.5);
        assert_eq!(follower.style_of(Glyph::Halo).opacity, 0.6);

        for glyph in Glyph::ALL {
            let idle = glyph.style(true, false);
            let hovered = glyph.style(true, true);
            assert!(hovered.scale > idle.scale);
        }
    }

    #[test]
    fn test_glyph_transform() {
        assert_eq!(
            glyph_transform(Point::new(12.0, -3.5)),
            "translate3d(12.00px, -3.50px, 0) translate(-50%, -50%)"
        );
    }
}
