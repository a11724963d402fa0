use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;

use crate::capabilities::use_capabilities;
use crate::dom::{self, Listeners};
use crate::motion::frame::FrameLoop;
use crate::tracking::cursor::{glyph_transform, CursorFollower, Glyph, INTERACTIVE_SELECTOR};

/// Replaces the platform cursor with a dot and two trailing rings on
/// devices with a fine pointer. Renders nothing on touch devices.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let capabilities = use_capabilities();
    let follower = use_mut_ref(CursorFollower::new);
    let visible = use_state_eq(|| false);
    let hovering = use_state_eq(|| false);
    let dot_ref = use_node_ref();
    let halo_ref = use_node_ref();
    let aura_ref = use_node_ref();

    {
        let follower = follower.clone();
        let visible = visible.clone();
        let hovering = hovering.clone();
        let glyph_refs = [
            (Glyph::Dot, dot_ref.clone()),
            (Glyph::Halo, halo_ref.clone()),
            (Glyph::Aura, aura_ref.clone()),
        ];
        use_effect_with_deps(
            move |fine_pointer| {
                let mut listeners = Listeners::default();
                let enabled = *fine_pointer;

                if enabled {
                    dom::set_platform_cursor_hidden(true);

                    let frame_loop = {
                        let follower = follower.clone();
                        FrameLoop::new(move |dt| {
                            let mut follower = follower.borrow_mut();
                            let moving = follower.tick(dt);
                            for (glyph, node) in &glyph_refs {
                                let transform = glyph_transform(follower.position_of(*glyph));
                                dom::set_style(node, "transform", &transform);
                            }
                            moving
                        })
                    };

                    if let Some(window) = web_sys::window() {
                        let follower = follower.clone();
                        let frame_loop = frame_loop.clone();
                        listeners.attach(&window, "mousemove", move |event: &Event| {
                            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                                return;
                            };
                            let mut follower = follower.borrow_mut();
                            if follower.pointer_move(event.client_x() as f64, event.client_y() as f64) {
                                debug!("Cursor shown at {:?}", follower.raw_position());
                                visible.set(follower.is_visible());
                            }
                            frame_loop.start();
                        });
                    }

                    // Delegated at the document so elements inserted later are
                    // covered without re-scanning.
                    if let Some(document) = dom::document() {
                        {
                            let follower = follower.clone();
                            let hovering = hovering.clone();
                            listeners.attach(&document, "mouseover", move |event: &Event| {
                                let interactive = dom::target_matches(event, INTERACTIVE_SELECTOR);
                                let mut follower = follower.borrow_mut();
                                if follower.pointer_over(interactive) {
                                    hovering.set(follower.is_hovering());
                                }
                            });
                        }
                        {
                            let follower = follower.clone();
                            listeners.attach(&document, "mouseout", move |event: &Event| {
                                let left_window = event
                                    .dyn_ref::<MouseEvent>()
                                    .map(|event| event.related_target().is_none())
                                    .unwrap_or(false);
                                let mut follower = follower.borrow_mut();
                                if left_window && follower.pointer_left_window() {
                                    hovering.set(follower.is_hovering());
                                }
                            });
                        }
                    }
                    debug!("Custom cursor mounted with {} listeners", listeners.len());
                }

                move || {
                    // Dropping the listeners also drops the last frame loop handle.
                    listeners.clear();
                    if enabled {
                        dom::set_platform_cursor_hidden(false);
                        debug!("Custom cursor unmounted");
                    }
                }
            },
            capabilities.fine_pointer,
        );
    }

    if !capabilities.tracks_pointer() {
        return html! {};
    }

    let glyph = |glyph: Glyph, node: &NodeRef| {
        let style = glyph.style(*visible, *hovering).css();
        html! {
            <div ref={node.clone()} class={classes!("cursor-glyph", format!("{}-anchor", glyph.class()))}>
                <div class={glyph.class()} style={style}></div>
            </div>
        }
    };

    html! {
        <>
            <style>
                {r#"
                    .cursor-glyph {
                        position: fixed;
                        top: 0;
                        left: 0;
                        pointer-events: none;
                        will-change: transform;
                        transform: translate3d(-100px, -100px, 0) translate(-50%, -50%);
                    }
                    .cursor-dot-anchor { z-index: 9999; mix-blend-mode: difference; }
                    .cursor-halo-anchor { z-index: 9998; }
                    .cursor-aura-anchor { z-index: 9997; }
                    .cursor-dot {
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                        background: #fff;
                    }
                    .cursor-halo {
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        border: 1px solid rgba(192, 132, 252, 0.5);
                        background: rgba(168, 85, 247, 0.1);
                        backdrop-filter: blur(4px);
                        box-shadow: 0 0 20px rgba(168, 85, 247, 0.3);
                    }
                    .cursor-aura {
                        width: 96px;
                        height: 96px;
                        border-radius: 50%;
                        background: linear-gradient(to right, #a855f7, #ec4899);
                        filter: blur(40px);
                    }
                "#}
            </style>
            { glyph(Glyph::Aura, &aura_ref) }
            { glyph(Glyph::Halo, &halo_ref) }
            { glyph(Glyph::Dot, &dot_ref) }
        </>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::{Element, MouseEventInit};

    use super::*;
    use crate::capabilities::Capabilities;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        fine_pointer: bool,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let capabilities = Capabilities {
            fine_pointer: props.fine_pointer,
            reduced_motion: false,
        };
        html! {
            <ContextProvider<Capabilities> context={capabilities}>
                <CustomCursor />
            </ContextProvider<Capabilities>>
        }
    }

    // Lets the scheduler render, run effects and paint a frame.
    async fn settle() {
        TimeoutFuture::new(50).await;
    }

    fn mount(fine_pointer: bool) -> (Element, yew::AppHandle<Harness>) {
        let document = dom::document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let handle =
            yew::Renderer::<Harness>::with_root_and_props(root.clone(), HarnessProps { fine_pointer })
                .render();
        (root, handle)
    }

    fn mouse(kind: &str, x: i32, y: i32) -> MouseEvent {
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_client_x(x);
        init.set_client_y(y);
        MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
    }

    fn body_cursor() -> String {
        dom::document().unwrap().body().unwrap().style().get_property_value("cursor").unwrap()
    }

    fn glyph_count(root: &Element) -> u32 {
        root.query_selector_all(".cursor-glyph").unwrap().length()
    }

    fn dot_style(root: &Element) -> String {
        root.query_selector(".cursor-dot")
            .unwrap()
            .and_then(|dot| dot.get_attribute("style"))
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    async fn test_tracks_pointer_and_cleans_up_on_unmount() {
        let window = web_sys::window().unwrap();
        let document = dom::document().unwrap();
        let (root, handle) = mount(true);
        settle().await;

        assert_eq!(body_cursor(), "none");
        assert_eq!(glyph_count(&root), 3);
        assert!(dot_style(&root).contains("opacity: 0;"));

        window.dispatch_event(&mouse("mousemove", 200, 150)).unwrap();
        settle().await;
        assert!(dot_style(&root).contains("opacity: 1;"));
        assert!(dot_style(&root).contains("scale(1)"));

        // Inserted after the cursor mounted.
        let button = document.create_element("button").unwrap();
        document.body().unwrap().append_child(&button).unwrap();
        button.dispatch_event(&mouse("mouseover", 200, 150)).unwrap();
        settle().await;
        assert!(dot_style(&root).contains("scale(1.8)"));

        handle.destroy();
        settle().await;
        assert_eq!(body_cursor(), "");
        assert_eq!(glyph_count(&root), 0);

        // Nothing reacts once unmounted.
        window.dispatch_event(&mouse("mousemove", 10, 10)).unwrap();
        button.dispatch_event(&mouse("mouseover", 10, 10)).unwrap();
        settle().await;
        assert_eq!(body_cursor(), "");
        assert_eq!(glyph_count(&root), 0);

        button.remove();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_coarse_pointer_renders_and_attaches_nothing() {
        let window = web_sys::window().unwrap();
        let (root, handle) = mount(false);
        settle().await;

        assert_eq!(glyph_count(&root), 0);
        assert_eq!(body_cursor(), "");

        window.dispatch_event(&mouse("mousemove", 120, 80)).unwrap();
        settle().await;
        assert_eq!(glyph_count(&root), 0);
        assert_eq!(body_cursor(), "");

        handle.destroy();
        root.remove();
    }
}
