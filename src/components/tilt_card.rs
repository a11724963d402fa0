use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::capabilities::use_capabilities;
use crate::dom;
use crate::hooks::{stagger_delay, use_reveal_once};
use crate::motion::frame::FrameLoop;
use crate::tracking::pointer::{InteractionState, PointerTracker, DEFAULT_GLOW_COLOR};

const REVEAL_STAGGER_SECS: f64 = 0.15;

/// Rendered once by the page, not per card.
pub const STYLES: &str = r#"
    .tilt-reveal {
        height: 100%;
        opacity: 0;
        transform: translateY(50px);
        transition-property: opacity, transform;
        transition-duration: 0.7s;
        transition-timing-function: ease-out;
    }
    .tilt-reveal.revealed {
        opacity: 1;
        transform: none;
    }
    .tilt-link {
        display: block;
        height: 100%;
        color: inherit;
        text-decoration: none;
    }
    .tilt-card {
        position: relative;
        height: 100%;
        transform-style: preserve-3d;
    }
    .tilt-glow {
        position: absolute;
        inset: -1px;
        border-radius: 2rem;
        z-index: 0;
        opacity: 0;
        transition: opacity 0.5s;
    }
    .tilt-shine {
        position: absolute;
        inset: 0;
        border-radius: 2rem;
        z-index: 1;
        overflow: hidden;
        pointer-events: none;
        opacity: 0;
        transition: opacity 0.3s;
    }
    .tilt-glow.active, .tilt-shine.active {
        opacity: 1;
    }
    .tilt-shine-layer {
        position: absolute;
        width: 200%;
        height: 200%;
        top: -50%;
        left: -50%;
    }
    .tilt-content {
        position: relative;
        z-index: 2;
        height: 100%;
        transform: translateZ(0);
    }
"#;

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static(DEFAULT_GLOW_COLOR))]
    pub glow_color: AttrValue,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub target: Option<AttrValue>,
    #[prop_or_default]
    pub rel: Option<AttrValue>,
    /// Position in the surrounding list; staggers the entrance.
    #[prop_or_default]
    pub index: usize,
}

/// Card that tilts towards the pointer and lights up under it. On touch
/// devices it is a plain card that only fades in.
#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let capabilities = use_capabilities();
    let interactive = capabilities.tracks_pointer();

    let reveal_ref = use_node_ref();
    let revealed = use_reveal_once(reveal_ref.clone(), "-50px", !capabilities.animates_entrances());

    let card_ref = use_node_ref();
    let glow_ref = use_node_ref();
    let shine_ref = use_node_ref();
    let tracker = use_mut_ref(PointerTracker::new);
    let hovered = use_state_eq(|| false);
    let frame_loop: Rc<RefCell<Option<FrameLoop>>> = use_mut_ref(|| None);

    {
        let tracker = tracker.clone();
        let frame_loop = frame_loop.clone();
        let card_ref = card_ref.clone();
        let glow_ref = glow_ref.clone();
        let shine_ref = shine_ref.clone();
        use_effect_with_deps(
            move |(interactive, glow_color)| {
                if *interactive {
                    let glow_color = glow_color.clone();
                    let step = FrameLoop::new(move |dt| {
                        let mut tracker = tracker.borrow_mut();
                        let moving = tracker.tick(dt);
                        let highlight = tracker.highlight();
                        dom::set_style(&card_ref, "transform", &tracker.rotation().transform());
                        dom::set_style(&glow_ref, "background", &highlight.glow_gradient(&glow_color));
                        dom::set_style(&shine_ref, "background", &highlight.shine_gradient());
                        moving
                    });
                    // Paint once so a new glow colour shows without waiting for input.
                    step.start();
                    *frame_loop.borrow_mut() = Some(step);
                }
                move || {
                    frame_loop.borrow_mut().take();
                }
            },
            (interactive, props.glow_color.clone()),
        );
    }

    let content = if interactive {
        let onmouseenter = {
            let tracker = tracker.clone();
            let card_ref = card_ref.clone();
            let hovered = hovered.clone();
            let frame_loop = frame_loop.clone();
            Callback::from(move |_: MouseEvent| {
                let Some(bounds) = dom::bounds_of(&card_ref) else {
                    return;
                };
                let mut tracker = tracker.borrow_mut();
                tracker.pointer_enter(bounds);
                hovered.set(tracker.state() == InteractionState::Hovering);
                if let Some(frame_loop) = frame_loop.borrow().as_ref() {
                    frame_loop.start();
                }
            })
        };
        let onmousemove = {
            let tracker = tracker.clone();
            let frame_loop = frame_loop.clone();
            Callback::from(move |event: MouseEvent| {
                let updated = tracker
                    .borrow_mut()
                    .pointer_move(event.client_x() as f64, event.client_y() as f64);
                if updated {
                    if let Some(frame_loop) = frame_loop.borrow().as_ref() {
                        frame_loop.start();
                    }
                }
            })
        };
        let onmouseleave = {
            let tracker = tracker.clone();
            let hovered = hovered.clone();
            let frame_loop = frame_loop.clone();
            Callback::from(move |_: MouseEvent| {
                debug!("Tilt card released");
                let mut tracker = tracker.borrow_mut();
                tracker.pointer_leave();
                hovered.set(tracker.state() == InteractionState::Hovering);
                if let Some(frame_loop) = frame_loop.borrow().as_ref() {
                    frame_loop.start();
                }
            })
        };
        let active = (*hovered).then(|| "active");

        html! {
            <div
                ref={card_ref}
                class={classes!("tilt-card", "cursor-hover", props.class.clone())}
                {onmouseenter}
                {onmousemove}
                {onmouseleave}
            >
                <div ref={glow_ref} class={classes!("tilt-glow", active)}></div>
                <div class={classes!("tilt-shine", active)}>
                    <div ref={shine_ref} class="tilt-shine-layer"></div>
                </div>
                <div class="tilt-content">{ for props.children.iter() }</div>
            </div>
        }
    } else {
        html! {
            <div class={classes!("tilt-card", props.class.clone())}>
                <div class="tilt-content">{ for props.children.iter() }</div>
            </div>
        }
    };

    let content = match &props.href {
        Some(href) => html! {
            <a href={href.clone()} target={props.target.clone()} rel={props.rel.clone()} class="tilt-link">
                { content }
            </a>
        },
        None => content,
    };

    let delay = stagger_delay(props.index, REVEAL_STAGGER_SECS);

    html! {
        <div
            ref={reveal_ref}
            class={classes!("tilt-reveal", revealed.then(|| "revealed"))}
            style={format!("transition-delay: {:.2}s;", delay)}
        >
            { content }
        </div>
    }
}
