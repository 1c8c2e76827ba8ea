// Host-side tests for the scroll progress model and the frame
// coalescing bookkeeping. The main crate is wasm-only, so we include
// the pure-Rust module directly.

#![allow(dead_code)]
mod progress {
    include!("../src/progress.rs");
}

use progress::{Coalescer, ScrollProgress, Subscribers};
use std::cell::Cell;
use std::rc::Rc;

const SCENES: usize = 6;

fn snap(scroll_y: f64) -> ScrollProgress {
    // 1000 px viewport over a 7000 px document: 6000 px scrollable
    ScrollProgress::compute(scroll_y, 1000.0, 7000.0, SCENES)
}

#[test]
fn progress_spans_zero_to_one() {
    assert_eq!(snap(0.0).progress, 0.0);
    assert_eq!(snap(3000.0).progress, 0.5);
    assert_eq!(snap(6000.0).progress, 1.0);
}

#[test]
fn progress_is_clamped_beyond_the_ends() {
    // Rubber-band overscroll on touch devices produces offsets outside
    // the scrollable range
    assert_eq!(snap(-50.0).progress, 0.0);
    assert_eq!(snap(9000.0).progress, 1.0);
    assert_eq!(snap(9000.0).current_scene, SCENES - 1);
}

#[test]
fn progress_is_monotonic_in_scroll_offset() {
    let mut prev = snap(0.0);
    for step in 1..=600 {
        let s = snap(step as f64 * 10.0);
        assert!(s.progress >= prev.progress, "progress dipped at {step}");
        assert!(
            s.current_scene >= prev.current_scene,
            "scene index dipped at {step}"
        );
        prev = s;
    }
}

#[test]
fn zero_height_document_resolves_to_zero_progress() {
    // Content shorter than the viewport: no NaN, no panic
    let s = ScrollProgress::compute(0.0, 1000.0, 1000.0, SCENES);
    assert_eq!(s.progress, 0.0);
    assert_eq!(s.scene_progress, 0.0);
    assert_eq!(s.current_scene, 0);
    assert!(s.progress.is_finite());
}

#[test]
fn headless_geometry_resolves_to_zero_progress() {
    let s = ScrollProgress::compute(0.0, 0.0, 0.0, SCENES);
    assert_eq!(s.progress, 0.0);
    assert_eq!(s.current_scene, 0);
}

#[test]
fn scenes_partition_the_document_evenly() {
    // 6000 px over 6 scenes: 1000 px per scene
    assert_eq!(snap(0.0).current_scene, 0);
    assert_eq!(snap(999.0).current_scene, 0);
    assert_eq!(snap(1000.0).current_scene, 1);
    assert_eq!(snap(2500.0).current_scene, 2);
    assert_eq!(snap(5999.0).current_scene, 5);
    assert_eq!(snap(6000.0).current_scene, 5);
}

#[test]
fn scene_progress_resets_at_each_boundary() {
    let end_of_first = snap(999.0);
    assert!(end_of_first.scene_progress > 0.99);
    let start_of_second = snap(1000.0);
    assert_eq!(start_of_second.scene_progress, 0.0);
    assert!((snap(1500.0).scene_progress - 0.5).abs() < 1e-12);
}

#[test]
fn last_scene_progress_saturates_at_one() {
    assert_eq!(snap(6000.0).scene_progress, 1.0);
    assert_eq!(snap(7500.0).scene_progress, 1.0);
}

#[test]
fn single_scene_total_is_valid() {
    let s = ScrollProgress::compute(500.0, 1000.0, 2000.0, 1);
    assert_eq!(s.current_scene, 0);
    assert_eq!(s.scene_progress, 0.5);
}

#[test]
fn composition_rule_holds_passed_scenes_at_full() {
    let s = snap(2500.0); // active scene 2
    assert_eq!(s.progress_for_scene(0, SCENES), 1.0);
    assert_eq!(s.progress_for_scene(1, SCENES), 1.0);
    assert_eq!(s.progress_for_scene(2, SCENES), s.scene_progress);
    assert_eq!(s.progress_for_scene(3, SCENES), 0.0);
    assert_eq!(s.progress_for_scene(5, SCENES), 0.0);
    assert!(s.is_active(2));
    assert!(!s.is_active(3));
}

#[test]
fn final_scene_floors_at_zero_when_inactive() {
    let s = snap(500.0);
    assert_eq!(s.progress_for_scene(5, SCENES), 0.0);
}

#[test]
fn coalescer_schedules_once_per_frame() {
    let mut c = Coalescer::new();
    // N raw signals inside one frame interval: one schedule
    assert!(c.request());
    assert!(!c.request());
    assert!(!c.request());
    c.begin_frame();
    // Next signal after the frame ran schedules again
    assert!(c.request());
}

#[test]
fn coalescer_publishes_first_sample_then_deduplicates() {
    let mut c = Coalescer::new();
    assert!(c.accept(0.0));
    assert!(!c.accept(0.0), "identical offset must not republish");
    assert!(c.accept(120.0));
    assert!(!c.accept(120.0));
    assert!(c.accept(0.0), "returning to an older offset publishes");
}

#[test]
fn coalescer_dedup_is_bitwise() {
    let mut c = Coalescer::new();
    assert!(c.accept(0.0));
    // -0.0 == 0.0 numerically but has different bits; it publishes
    assert!(c.accept(-0.0));
}

#[test]
fn coalescer_cancel_clears_pending() {
    let mut c = Coalescer::new();
    assert!(c.request());
    assert!(c.is_pending());
    c.cancel();
    assert!(!c.is_pending());
    assert!(c.request());
}

#[test]
fn coalescer_shutdown_closes_both_gates() {
    let mut c = Coalescer::new();
    assert!(c.accept(100.0));
    assert!(c.request());
    assert!(c.shutdown());
    assert!(!c.is_pending(), "shutdown drops the pending schedule");
    assert!(!c.request(), "no new schedules after shutdown");
    assert!(!c.accept(200.0), "no publishes after shutdown");
    assert!(c.is_shut_down());
}

#[test]
fn coalescer_shutdown_twice_changes_nothing() {
    let mut c = Coalescer::new();
    assert!(c.shutdown());
    assert!(!c.shutdown(), "only the first call performs work");
    assert!(!c.shutdown());
    assert!(c.is_shut_down());
    assert!(!c.is_pending());
}

#[test]
fn subscribers_receive_each_snapshot() {
    let subs = Subscribers::new();
    let hits = Rc::new(Cell::new(0usize));
    let h = hits.clone();
    subs.add(move |s| {
        assert_eq!(s.current_scene, 2);
        h.set(h.get() + 1);
    });
    let snap = snap(2500.0);
    subs.notify(&snap);
    subs.notify(&snap);
    assert_eq!(hits.get(), 2);
}

#[test]
fn subscribing_from_inside_a_callback_waits_one_snapshot() {
    let subs = Rc::new(Subscribers::new());
    let late_hits = Rc::new(Cell::new(0usize));
    let subs_inner = subs.clone();
    let late = late_hits.clone();
    subs.add(move |_| {
        let late = late.clone();
        subs_inner.add(move |_| late.set(late.get() + 1));
    });
    let snap = snap(0.0);
    subs.notify(&snap);
    // The callback registered during notification missed this snapshot
    assert_eq!(late_hits.get(), 0);
    assert_eq!(subs.len(), 2);
    subs.notify(&snap);
    assert_eq!(late_hits.get(), 1);
}

#[test]
fn clearing_from_inside_a_callback_drops_everyone() {
    let subs = Rc::new(Subscribers::new());
    let hits = Rc::new(Cell::new(0usize));
    let subs_inner = subs.clone();
    subs.add(move |_| subs_inner.clear());
    let h = hits.clone();
    subs.add(move |_| h.set(h.get() + 1));
    let snap = snap(0.0);
    subs.notify(&snap);
    assert!(subs.is_empty(), "a teardown issued mid-notify sticks");
    subs.notify(&snap);
    assert_eq!(hits.get(), 1, "only the notification in flight ran");
}
