// Particle field generation for the ember, star, and mote layers.
//
// Fields are generated once at startup from a fixed seed; per-frame
// scroll state only drives their container's opacity and how many are
// shown. Keeping generation pure (rng in, plain structs out) lets the
// host-side tests pin down the ranges without a DOM.

use rand::Rng;

/// One rising ember in the Lohri bonfire scene.
#[derive(Clone, Copy, Debug)]
pub struct Ember {
    pub left_pct: f64,
    pub size_px: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub opacity: f64,
}

/// One pulsing star in the nightfall transition.
#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub top_pct: f64,
    pub left_pct: f64,
    pub size_px: f64,
    pub period_s: f64,
    pub delay_s: f64,
}

/// One slow-rising mote in the closing scene.
#[derive(Clone, Copy, Debug)]
pub struct Mote {
    pub bottom_pct: f64,
    pub left_pct: f64,
    pub size_px: f64,
    pub period_s: f64,
    pub delay_s: f64,
}

pub fn ember_field<R: Rng>(count: usize, rng: &mut R) -> Vec<Ember> {
    (0..count)
        .map(|_| Ember {
            left_pct: rng.gen::<f64>() * 100.0,
            size_px: rng.gen::<f64>() * 6.0 + 2.0,
            delay_s: rng.gen::<f64>() * 4.0,
            duration_s: rng.gen::<f64>() * 3.0 + 3.0,
            opacity: rng.gen::<f64>() * 0.5 + 0.5,
        })
        .collect()
}

// Stars sit in the upper half of the viewport only
pub fn star_field<R: Rng>(count: usize, rng: &mut R) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            top_pct: rng.gen::<f64>() * 50.0,
            left_pct: rng.gen::<f64>() * 100.0,
            size_px: rng.gen::<f64>() * 2.0 + 1.0,
            period_s: 2.0 + rng.gen::<f64>() * 2.0,
            delay_s: rng.gen::<f64>() * 2.0,
        })
        .collect()
}

// Motes start in a band just above the bottom edge
pub fn mote_field<R: Rng>(count: usize, rng: &mut R) -> Vec<Mote> {
    (0..count)
        .map(|_| Mote {
            bottom_pct: 10.0 + rng.gen::<f64>() * 20.0,
            left_pct: 10.0 + rng.gen::<f64>() * 80.0,
            size_px: 4.0 + rng.gen::<f64>() * 4.0,
            period_s: 4.0 + rng.gen::<f64>() * 3.0,
            delay_s: rng.gen::<f64>() * 2.0,
        })
        .collect()
}
