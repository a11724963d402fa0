use crate::motion::remap::remap;

pub const HERO_PARALLAX_PX: f64 = 150.0;

/// How far a section has scrolled past the top of the viewport, 0 while its
/// top edge is still below the viewport top, 1 once its bottom edge has
/// passed it.
pub fn scroll_progress(section_top: f64, section_height: f64) -> f64 {
    if !(section_height > 0.0) || !section_top.is_finite() {
        return 0.0;
    }
    (-section_top / section_height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub offset_y: f64,
    pub opacity: f64,
}

impl Parallax {
    #[cfg(test)]
    pub const REST: Parallax = Parallax { offset_y: 0.0, opacity: 1.0 };

    /// Hero text drifts down while fading out over the first half of the scroll.
    pub fn for_hero(progress: f64) -> Self {
        Self {
            offset_y: remap(progress, (0.0, 1.0), (0.0, HERO_PARALLAX_PX)),
            opacity: remap(progress, (0.0, 0.5), (1.0, 0.0)),
        }
    }

    pub fn transform(&self) -> String {
        format!("translate3d(0, {:.2}px, 0)", self.offset_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(120.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-400.0, 800.0), 0.5);
        assert_eq!(scroll_progress(-2000.0, 800.0), 1.0);
    }

    #[test]
    fn test_scroll_progress_without_layout() {
        assert_eq!(scroll_progress(-50.0, 0.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 800.0), 0.0);
    }

    #[test]
    fn test_hero_parallax() {
        assert_eq!(Parallax::for_hero(0.0), Parallax::REST);

        let quarter = Parallax::for_hero(0.25);
        assert_eq!(quarter.offset_y, 37.5);
        assert_eq!(quarter.opacity, 0.5);

        let half = Parallax::for_hero(0.5);
        assert_eq!(half.opacity, 0.0);

        let done = Parallax::for_hero(1.0);
        assert_eq!(done.offset_y, HERO_PARALLAX_PX);
        assert_eq!(done.opacity, 0.0);
    }
}
