// Host-side tests for the particle field generators.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod particles {
    include!("../src/particles.rs");
}

use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn ember_field_respects_documented_ranges() {
    let embers = ember_field(200, &mut rng());
    assert_eq!(embers.len(), 200);
    for e in &embers {
        assert!((0.0..100.0).contains(&e.left_pct));
        assert!((2.0..8.0).contains(&e.size_px));
        assert!((0.0..4.0).contains(&e.delay_s));
        assert!((3.0..6.0).contains(&e.duration_s));
        assert!((0.5..1.0).contains(&e.opacity));
    }
}

#[test]
fn star_field_stays_in_the_upper_half() {
    for s in &star_field(100, &mut rng()) {
        assert!(s.top_pct < 50.0);
        assert!((1.0..3.0).contains(&s.size_px));
        assert!((2.0..4.0).contains(&s.period_s));
    }
}

#[test]
fn mote_field_stays_in_the_lower_band() {
    for m in &mote_field(100, &mut rng()) {
        assert!((10.0..30.0).contains(&m.bottom_pct));
        assert!((10.0..90.0).contains(&m.left_pct));
        assert!((4.0..8.0).contains(&m.size_px));
    }
}

#[test]
fn fields_are_deterministic_for_a_fixed_seed() {
    let a = ember_field(10, &mut rng());
    let b = ember_field(10, &mut rng());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.left_pct, y.left_pct);
        assert_eq!(x.size_px, y.size_px);
    }
}

#[test]
fn empty_fields_are_fine() {
    assert!(ember_field(0, &mut rng()).is_empty());
    assert!(star_field(0, &mut rng()).is_empty());
    assert!(mote_field(0, &mut rng()).is_empty());
}
