use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};

// Assumed length of the first frame after a (re)start, when there is no
// previous timestamp to diff against.
const FIRST_FRAME_SECS: f64 = 1.0 / 60.0;

type Step = Box<dyn FnMut(f64) -> bool>;

struct Inner {
    // Dropping the handle cancels the pending frame.
    frame: Option<AnimationFrame>,
    last_timestamp: Option<f64>,
    step: Step,
}

/// Drives a step function once per animation frame until it reports that
/// it has come to rest. Calling [`FrameLoop::start`] again wakes it up.
///
/// Clones share the same loop. The pending frame is cancelled when the last
/// clone is dropped.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<RefCell<Inner>>,
}

impl FrameLoop {
    /// `step` receives the elapsed time in seconds and returns whether
    /// another frame is needed.
    pub fn new<F>(step: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                frame: None,
                last_timestamp: None,
                step: Box::new(step),
            })),
        }
    }

    pub fn start(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.frame.is_some() {
                return;
            }
            inner.last_timestamp = None;
        }
        Self::schedule(&self.inner);
    }

    fn schedule(inner: &Rc<RefCell<Inner>>) {
        let weak: Weak<RefCell<Inner>> = Rc::downgrade(inner);
        let frame = request_animation_frame(move |timestamp| {
            if let Some(inner) = weak.upgrade() {
                Self::on_frame(&inner, timestamp);
            }
        });
        inner.borrow_mut().frame = Some(frame);
    }

    fn on_frame(inner: &Rc<RefCell<Inner>>, timestamp: f64) {
        let again = {
            let mut inner = inner.borrow_mut();
            inner.frame.take();

            let dt = match inner.last_timestamp {
                Some(last) => (timestamp - last) / 1000.0,
                None => FIRST_FRAME_SECS,
            };
            inner.last_timestamp = Some(timestamp);
            (inner.step)(dt)
        };

        if again {
            Self::schedule(inner);
        }
    }
}
