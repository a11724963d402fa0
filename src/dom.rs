use gloo_events::EventListener;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use js_sys::Array;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::NodeRef;

use crate::tracking::pointer::Bounds;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// Evaluates a media query once. Anything that goes wrong reads as "no match".
pub fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

pub fn set_style(node: &NodeRef, property: &str, value: &str) {
    if let Some(element) = node.cast::<HtmlElement>() {
        if let Err(err) = element.style().set_property(property, value) {
            warn!("failed to set {}: {:?}", property, err);
        }
    }
}

pub fn bounds_of(node: &NodeRef) -> Option<Bounds> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some(Bounds::new(rect.left(), rect.top(), rect.width(), rect.height()))
}

/// Whether the event target, or one of its ancestors, matches `selector`.
pub fn target_matches(event: &Event, selector: &str) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
        .is_some()
}

/// Hides or restores the platform cursor on `<html>` and `<body>`.
pub fn set_platform_cursor_hidden(hidden: bool) {
    let Some(document) = document() else {
        return;
    };
    let value = if hidden { "none" } else { "" };
    let elements = [
        document.document_element().and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        document.body(),
    ];
    for element in elements.into_iter().flatten() {
        let style = element.style();
        let result = if hidden {
            style.set_property("cursor", value)
        } else {
            style.remove_property("cursor").map(|_| ())
        };
        if let Err(err) = result {
            warn!("failed to update platform cursor: {:?}", err);
        }
    }
}

/// Listeners owned by one component. Clearing or dropping the set detaches
/// every one of them.
#[derive(Default)]
pub struct Listeners {
    attached: Vec<EventListener>,
}

impl Listeners {
    pub fn attach<F>(&mut self, target: &EventTarget, event: &'static str, handler: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.attached.push(EventListener::new(target, event, handler));
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn clear(&mut self) {
        if !self.attached.is_empty() {
            debug!("detaching {} listeners", self.attached.len());
        }
        self.attached.clear();
    }
}

/// Fires a callback the first time an element scrolls into view, then stops
/// observing.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe<F>(node: &NodeRef, root_margin: &str, on_reveal: F) -> Option<Self>
    where
        F: FnOnce() + 'static,
    {
        let element = node.cast::<Element>()?;
        let mut on_reveal = Some(on_reveal);
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if intersecting {
                observer.disconnect();
                if let Some(on_reveal) = on_reveal.take() {
                    on_reveal();
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("IntersectionObserver unavailable: {:?}", err);
                return None;
            }
        };
        observer.observe(&element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::*;
    use web_sys::EventInit;

    use super::*;
    use crate::tracking::cursor::INTERACTIVE_SELECTOR;

    wasm_bindgen_test_configure!(run_in_browser);

    fn bubbling(kind: &str) -> Event {
        let init = EventInit::new();
        init.set_bubbles(true);
        Event::new_with_event_init_dict(kind, &init).unwrap()
    }

    fn element(tag: &str) -> Element {
        document().unwrap().create_element(tag).unwrap()
    }

    fn body_cursor() -> String {
        document().unwrap().body().unwrap().style().get_property_value("cursor").unwrap()
    }

    #[wasm_bindgen_test]
    fn test_clearing_listeners_detaches_them() {
        let target = element("div");
        let hits = Rc::new(Cell::new(0));
        let mut listeners = Listeners::default();
        {
            let hits = hits.clone();
            listeners.attach(&target, "ping", move |_| hits.set(hits.get() + 1));
        }
        assert_eq!(listeners.len(), 1);

        target.dispatch_event(&bubbling("ping")).unwrap();
        assert_eq!(hits.get(), 1);

        listeners.clear();
        assert_eq!(listeners.len(), 0);
        target.dispatch_event(&bubbling("ping")).unwrap();
        assert_eq!(hits.get(), 1);
    }

    #[wasm_bindgen_test]
    fn test_dropping_listeners_detaches_them() {
        let target = element("div");
        let hits = Rc::new(Cell::new(0));
        {
            let mut listeners = Listeners::default();
            let counter = hits.clone();
            listeners.attach(&target, "ping", move |_| counter.set(counter.get() + 1));
            target.dispatch_event(&bubbling("ping")).unwrap();
        }
        target.dispatch_event(&bubbling("ping")).unwrap();
        assert_eq!(hits.get(), 1);
    }

    #[wasm_bindgen_test]
    fn test_delegated_match_covers_elements_inserted_later() {
        let document = document().unwrap();
        let body = document.body().unwrap();
        let seen = Rc::new(Cell::new(None));
        let mut listeners = Listeners::default();
        {
            let seen = seen.clone();
            listeners.attach(&document, "mouseover", move |event| {
                seen.set(Some(target_matches(event, INTERACTIVE_SELECTOR)));
            });
        }

        // Created after the listener; the event starts on a child of the button.
        let button = element("button");
        let label = element("span");
        button.append_child(&label).unwrap();
        body.append_child(&button).unwrap();
        label.dispatch_event(&bubbling("mouseover")).unwrap();
        assert_eq!(seen.get(), Some(true));

        let plain = element("p");
        body.append_child(&plain).unwrap();
        plain.dispatch_event(&bubbling("mouseover")).unwrap();
        assert_eq!(seen.get(), Some(false));

        let tagged = element("div");
        tagged.set_class_name("cursor-hover");
        body.append_child(&tagged).unwrap();
        tagged.dispatch_event(&bubbling("mouseover")).unwrap();
        assert_eq!(seen.get(), Some(true));

        button.remove();
        plain.remove();
        tagged.remove();
    }

    #[wasm_bindgen_test]
    fn test_platform_cursor_is_restored() {
        set_platform_cursor_hidden(true);
        assert_eq!(body_cursor(), "none");
        set_platform_cursor_hidden(false);
        assert_eq!(body_cursor(), "");
    }
}
