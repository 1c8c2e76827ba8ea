// Scroll progress model: the one piece of real state in the page.
//
// `ScrollProgress::compute` turns raw viewport geometry into the
// normalized snapshot every scene consumes. `Coalescer` holds the
// pending-frame, last-offset, and shutdown bookkeeping for the DOM
// sampler, and `Subscribers` the callback list it publishes to, so the
// animation-frame coupling stays out of the math and host tests can
// drive both with a manual trigger.

use std::cell::{Cell, RefCell};

/// Snapshot of where the reader is in the narrative.
///
/// Published by value on every accepted recomputation; consumers treat
/// it as immutable.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollProgress {
    /// Fraction of the total scrollable distance consumed, in [0, 1].
    pub progress: f64,
    /// Fraction of the active scene's segment consumed, in [0, 1].
    pub scene_progress: f64,
    /// Index of the active scene, in [0, total_scenes - 1].
    pub current_scene: usize,
    /// Raw scroll offset from the top, device pixels.
    pub scroll_y: f64,
    /// Visible viewport height, device pixels.
    pub viewport_height: f64,
    /// Total scrollable distance (document height minus viewport).
    pub document_height: f64,
}

impl ScrollProgress {
    /// Derive a snapshot from raw geometry.
    ///
    /// `total_height` is the full document height; the scrollable
    /// distance is that minus the viewport. A document shorter than the
    /// viewport (or an empty one, as in headless contexts) resolves to
    /// zero progress rather than NaN.
    pub fn compute(
        scroll_y: f64,
        viewport_height: f64,
        total_height: f64,
        total_scenes: usize,
    ) -> ScrollProgress {
        let document_height = (total_height - viewport_height).max(0.0);
        if document_height <= 0.0 || total_scenes == 0 {
            return ScrollProgress {
                viewport_height,
                scroll_y,
                ..ScrollProgress::default()
            };
        }

        let progress = (scroll_y / document_height).clamp(0.0, 1.0);

        let scene_height = document_height / total_scenes as f64;
        let current_scene = ((scroll_y / scene_height).floor().max(0.0) as usize)
            .min(total_scenes - 1);
        let scene_start = current_scene as f64 * scene_height;
        let scene_progress = ((scroll_y - scene_start) / scene_height).clamp(0.0, 1.0);

        ScrollProgress {
            progress,
            scene_progress,
            current_scene,
            scroll_y,
            viewport_height,
            document_height,
        }
    }

    /// Scene progress to hand to scene `index` under the composition
    /// rule: already-passed scenes hold at 1, not-yet-reached ones at 0,
    /// and the final scene floors at 0 instead of holding.
    pub fn progress_for_scene(&self, index: usize, total_scenes: usize) -> f64 {
        if index == self.current_scene {
            self.scene_progress
        } else if self.current_scene > index && index + 1 < total_scenes {
            1.0
        } else {
            0.0
        }
    }

    /// Whether scene `index` is the active one.
    #[inline]
    pub fn is_active(&self, index: usize) -> bool {
        self.current_scene == index
    }
}

/// Frame-coalescing, duplicate-suppression, and shutdown state for the
/// sampler.
///
/// At most one recomputation is scheduled per animation frame no matter
/// how many raw scroll/resize signals arrive, and a recomputation whose
/// offset is bit-identical to the last published one publishes nothing.
/// After `shutdown` both gates stay closed for good.
#[derive(Debug, Default)]
pub struct Coalescer {
    pending: bool,
    last_published_y: Option<f64>,
    shut_down: bool,
}

impl Coalescer {
    pub fn new() -> Coalescer {
        Coalescer::default()
    }

    /// Record a raw signal. Returns true when the caller should
    /// schedule a frame callback; false when one is already pending or
    /// the coalescer has been shut down.
    pub fn request(&mut self) -> bool {
        if self.pending || self.shut_down {
            return false;
        }
        self.pending = true;
        true
    }

    /// The scheduled frame is running; clear the pending flag so the
    /// next raw signal schedules again.
    pub fn begin_frame(&mut self) {
        self.pending = false;
    }

    /// Decide whether a freshly computed offset should be published.
    /// The first sample always publishes. Uses bit equality so a
    /// resize that leaves the offset untouched stays silent. Nothing
    /// publishes once shut down.
    pub fn accept(&mut self, scroll_y: f64) -> bool {
        if self.shut_down {
            return false;
        }
        if self.last_published_y.map(f64::to_bits) == Some(scroll_y.to_bits()) {
            return false;
        }
        self.last_published_y = Some(scroll_y);
        true
    }

    /// Drop any pending schedule without shutting down.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    /// Close both gates permanently. Returns true on the call that
    /// performed the shutdown; repeated calls return false and change
    /// nothing, so teardown can run any number of times.
    pub fn shutdown(&mut self) -> bool {
        if self.shut_down {
            return false;
        }
        self.shut_down = true;
        self.pending = false;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }
}

/// Callback list the sampler publishes snapshots to.
///
/// `notify` detaches the list while callbacks run, so a callback may
/// register further subscribers without hitting a double borrow; late
/// registrations see the next snapshot, not the current one. A `clear`
/// issued from inside a callback drops the running callbacks too.
#[derive(Default)]
pub struct Subscribers {
    list: RefCell<Vec<Box<dyn FnMut(&ScrollProgress)>>>,
    cleared: Cell<bool>,
}

impl Subscribers {
    pub fn new() -> Subscribers {
        Subscribers::default()
    }

    pub fn add(&self, f: impl FnMut(&ScrollProgress) + 'static) {
        self.list.borrow_mut().push(Box::new(f));
    }

    pub fn notify(&self, snapshot: &ScrollProgress) {
        self.cleared.set(false);
        let mut active = std::mem::take(&mut *self.list.borrow_mut());
        for f in active.iter_mut() {
            f(snapshot);
        }
        if self.cleared.get() {
            return;
        }
        let mut list = self.list.borrow_mut();
        let added = std::mem::replace(&mut *list, active);
        list.extend(added);
    }

    pub fn clear(&self) {
        self.list.borrow_mut().clear();
        self.cleared.set(true);
    }

    pub fn len(&self) -> usize {
        self.list.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.borrow().is_empty()
    }
}
