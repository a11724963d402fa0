use yew::prelude::*;

use crate::dom;

pub const FINE_POINTER_QUERY: &str = "(pointer: fine)";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Input and motion capabilities of the device, read once at start-up and
/// handed down the component tree through a context. Never re-evaluated.
///
/// The default is the conservative touch profile, so a component rendered
/// outside the provider attaches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub fine_pointer: bool,
    pub reduced_motion: bool,
}

impl Capabilities {
    pub fn detect() -> Self {
        Self {
            fine_pointer: dom::media_matches(FINE_POINTER_QUERY),
            reduced_motion: dom::media_matches(REDUCED_MOTION_QUERY),
        }
    }

    /// Pointer-driven effects (custom cursor, tilt) need a mouse.
    pub fn tracks_pointer(&self) -> bool {
        self.fine_pointer
    }

    /// Looping decorative motion (drifting orbs, parallax).
    pub fn animates_ambient(&self) -> bool {
        self.fine_pointer && !self.reduced_motion
    }

    /// One-shot entrance animations are skipped under reduced motion.
    pub fn animates_entrances(&self) -> bool {
        !self.reduced_motion
    }
}

#[hook]
pub fn use_capabilities() -> Capabilities {
    use_context::<Capabilities>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_touch_profile() {
        let capabilities = Capabilities::default();
        assert!(!capabilities.tracks_pointer());
        assert!(!capabilities.animates_ambient());
        assert!(capabilities.animates_entrances());
    }

    #[test]
    fn test_reduced_motion_disables_ambient_motion() {
        let capabilities = Capabilities {
            fine_pointer: true,
            reduced_motion: true,
        };
        assert!(capabilities.tracks_pointer());
        assert!(!capabilities.animates_ambient());
        assert!(!capabilities.animates_entrances());
    }

    #[test]
    fn test_desktop_profile() {
        let capabilities = Capabilities {
            fine_pointer: true,
            reduced_motion: false,
        };
        assert!(capabilities.tracks_pointer());
        assert!(capabilities.animates_ambient());
    }
}
