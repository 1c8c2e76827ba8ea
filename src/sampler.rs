//! DOM scroll sampler: owns the scroll/resize subscriptions and keeps
//! the published `ScrollProgress` snapshot current, at most once per
//! animation frame.
//!
//! One sampler is created per page view. It is not a process-wide
//! singleton; independent instances own their listeners exclusively and
//! tear down without touching each other.

use crate::progress::{Coalescer, ScrollProgress, Subscribers};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Inner {
    total_scenes: usize,
    state: ScrollProgress,
    coalescer: Coalescer,
    raf_id: Option<i32>,
}

pub struct ScrollSampler {
    inner: Rc<RefCell<Inner>>,
    subscribers: Rc<Subscribers>,
    // Kept alive (not forgotten) so teardown can deregister them.
    signal: Option<Closure<dyn FnMut()>>,
    frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

/// Current (scroll_y, viewport_height, total_document_height) in px.
/// A headless context with no window reads as all zeros, which the
/// progress math resolves to the zero-progress state.
fn read_geometry() -> (f64, f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0, 0.0);
    };
    let scroll_y = w.scroll_y().unwrap_or(0.0);
    let viewport = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let total = w
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);
    (scroll_y, viewport, total)
}

impl ScrollSampler {
    /// Begin observing the viewport. Performs one synchronous
    /// computation so `current_state` is valid before any event fires.
    pub fn initialize(total_scenes: usize) -> ScrollSampler {
        let (y, vh, th) = read_geometry();
        let initial = ScrollProgress::compute(y, vh, th, total_scenes);
        let mut coalescer = Coalescer::new();
        coalescer.accept(initial.scroll_y);

        let inner = Rc::new(RefCell::new(Inner {
            total_scenes,
            state: initial,
            coalescer,
            raf_id: None,
        }));
        let subscribers = Rc::new(Subscribers::new());
        let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        // Per-frame recomputation; runs at most once per scheduled frame.
        {
            let inner_f = inner.clone();
            let subs_f = subscribers.clone();
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let snapshot = {
                    let mut g = inner_f.borrow_mut();
                    g.raf_id = None;
                    g.coalescer.begin_frame();
                    let (y, vh, th) = read_geometry();
                    let next = ScrollProgress::compute(y, vh, th, g.total_scenes);
                    // Rejects both duplicate offsets and post-shutdown frames
                    if !g.coalescer.accept(next.scroll_y) {
                        return;
                    }
                    g.state = next;
                    next
                };
                subs_f.notify(&snapshot);
            }) as Box<dyn FnMut()>));
        }

        // Raw scroll/resize signal: schedule one frame, or nothing if
        // one is already pending.
        let signal = {
            let inner_s = inner.clone();
            let frame_s = frame.clone();
            Closure::wrap(Box::new(move || {
                {
                    let mut g = inner_s.borrow_mut();
                    if !g.coalescer.request() {
                        return;
                    }
                }
                let scheduled = web::window().and_then(|w| {
                    frame_s.borrow().as_ref().and_then(|cb| {
                        w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
                    })
                });
                let mut g = inner_s.borrow_mut();
                match scheduled {
                    Some(id) => g.raf_id = Some(id),
                    None => g.coalescer.cancel(),
                }
            }) as Box<dyn FnMut()>)
        };

        if let Some(w) = web::window() {
            let opts = web::AddEventListenerOptions::new();
            opts.set_passive(true);
            for kind in ["scroll", "resize"] {
                let _ = w.add_event_listener_with_callback_and_add_event_listener_options(
                    kind,
                    signal.as_ref().unchecked_ref(),
                    &opts,
                );
            }
        }

        ScrollSampler {
            inner,
            subscribers,
            signal: Some(signal),
            frame,
        }
    }

    /// Latest published snapshot, for imperative callers.
    pub fn current_state(&self) -> ScrollProgress {
        self.inner.borrow().state
    }

    /// Register a consumer notified on every accepted recomputation.
    pub fn subscribe(&self, f: impl FnMut(&ScrollProgress) + 'static) {
        self.subscribers.add(f);
    }

    /// Release listeners and cancel any pending recomputation. Safe to
    /// call more than once; later calls are no-ops.
    pub fn teardown(&mut self) {
        {
            let mut g = self.inner.borrow_mut();
            if !g.coalescer.shutdown() {
                return;
            }
            if let (Some(w), Some(id)) = (web::window(), g.raf_id.take()) {
                let _ = w.cancel_animation_frame(id);
            }
        }
        if let (Some(w), Some(signal)) = (web::window(), self.signal.take()) {
            for kind in ["scroll", "resize"] {
                let _ = w.remove_event_listener_with_callback(
                    kind,
                    signal.as_ref().unchecked_ref(),
                );
            }
        }
        // Any scheduled frame was cancelled above, so the closure can go.
        self.frame.borrow_mut().take();
        self.subscribers.clear();
    }
}
