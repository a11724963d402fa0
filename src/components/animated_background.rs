use yew::prelude::*;

use crate::capabilities::use_capabilities;

struct Orb {
    color: &'static str,
    /// Diameter in px on small and on wide screens.
    size: (u32, u32),
    position: &'static str,
    duration_secs: u32,
    delay_secs: u32,
}

const ORBS: [Orb; 5] = [
    Orb {
        color: "rgba(147, 51, 234, 0.15)",
        size: (400, 700),
        position: "top: -15%; left: -10%;",
        duration_secs: 25,
        delay_secs: 0,
    },
    Orb {
        color: "rgba(37, 99, 235, 0.12)",
        size: (350, 600),
        position: "bottom: -10%; right: -8%;",
        duration_secs: 30,
        delay_secs: 5,
    },
    Orb {
        color: "rgba(219, 39, 119, 0.10)",
        size: (300, 500),
        position: "top: 40%; right: -15%;",
        duration_secs: 35,
        delay_secs: 10,
    },
    Orb {
        color: "rgba(20, 184, 166, 0.08)",
        size: (250, 450),
        position: "bottom: 20%; left: -12%;",
        duration_secs: 28,
        delay_secs: 8,
    },
    Orb {
        color: "rgba(99, 102, 241, 0.10)",
        size: (200, 350),
        position: "top: 15%; left: 50%;",
        duration_secs: 22,
        delay_secs: 3,
    },
];

// Touch devices only get the two largest orbs.
const TOUCH_ORB_COUNT: usize = 2;

fn orb_style(orb: &Orb, animated: bool) -> String {
    let motion = if animated {
        format!(
            "animation: orb-drift {}s ease-in-out {}s infinite;",
            orb.duration_secs, orb.delay_secs
        )
    } else {
        "opacity: 0.3;".to_string()
    };
    format!(
        "{} --orb-size: {}px; --orb-size-wide: {}px; background: {}; {}",
        orb.position, orb.size.0, orb.size.1, orb.color, motion
    )
}

/// Fixed backdrop of slowly drifting colour orbs. Static when the device
/// has no fine pointer or the user prefers reduced motion.
#[function_component(AnimatedBackground)]
pub fn animated_background() -> Html {
    let capabilities = use_capabilities();
    let animated = capabilities.animates_ambient();
    let orbs = if capabilities.tracks_pointer() {
        &ORBS[..]
    } else {
        &ORBS[..TOUCH_ORB_COUNT]
    };

    html! {
        <div class="animated-background">
            <style>
                {r#"
                    .animated-background {
                        position: fixed;
                        inset: 0;
                        z-index: 0;
                        pointer-events: none;
                        overflow: hidden;
                    }
                    .background-grid {
                        position: absolute;
                        inset: 0;
                        background-image:
                            linear-gradient(to right, #8080800a 1px, transparent 1px),
                            linear-gradient(to bottom, #8080800a 1px, transparent 1px);
                        background-size: 4rem 4rem;
                        mask-image: radial-gradient(ellipse 60% 50% at 50% 0%, #000 70%, transparent 100%);
                    }
                    .background-orb {
                        position: absolute;
                        width: var(--orb-size);
                        height: var(--orb-size);
                        border-radius: 50%;
                        filter: blur(120px);
                        mix-blend-mode: screen;
                        will-change: transform;
                    }
                    .background-vignette {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(ellipse at center, transparent 0%, #050505 75%);
                    }
                    @keyframes orb-drift {
                        0%   { transform: translate(0, 0) scale(1); opacity: 0.5; }
                        25%  { transform: translate(80px, -60px) scale(1.15); opacity: 0.8; }
                        50%  { transform: translate(-40px, 40px) scale(0.9); opacity: 0.6; }
                        75%  { transform: translate(60px, -30px) scale(1.1); opacity: 0.9; }
                        100% { transform: translate(0, 0) scale(1); opacity: 0.5; }
                    }
                    @media (min-width: 768px) {
                        .background-orb {
                            width: var(--orb-size-wide);
                            height: var(--orb-size-wide);
                        }
                    }
                    @media (max-width: 767px) {
                        .background-grid { display: none; }
                    }
                "#}
            </style>
            <div class="background-grid"></div>
            {
                orbs.iter().map(|orb| html! {
                    <div class="background-orb" style={orb_style(orb, animated)}></div>
                }).collect::<Html>()
            }
            <div class="background-vignette"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orb_style_animated() {
        let style = orb_style(&ORBS[1], true);
        assert!(style.contains("animation: orb-drift 30s ease-in-out 5s infinite;"));
        assert!(style.contains("--orb-size: 350px;"));
    }

    #[test]
    fn test_orb_style_static() {
        let style = orb_style(&ORBS[0], false);
        assert!(!style.contains("animation"));
        assert!(style.contains("opacity: 0.3;"));
    }
}
