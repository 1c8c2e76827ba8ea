// Closing scene: a brightening sky, five staggered reveals, and a
// drift of motes once the final statement has landed.

use crate::constants::{END_MARKER_CUTOFF, MOTE_COUNT, PARTICLE_SEED};
use crate::css;
use crate::dom;
use crate::ease::{clamp, map_range};
use crate::particles::{mote_field, Mote};
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

// Title, three themes, final statement
const REVEAL_WINDOWS: [(f64, f64); 5] = [
    (0.05, 0.2),
    (0.15, 0.3),
    (0.3, 0.45),
    (0.45, 0.6),
    (0.65, 0.85),
];

#[derive(Clone, Debug)]
pub struct FutureParams {
    pub sky: String,
    pub sun_glow: String,
    pub reveal_opacity: [f64; 5],
    pub motes_opacity: f64,
    pub end_marker: f64,
}

pub fn params(t: f64) -> FutureParams {
    let sky = css::vertical_gradient(
        &css::hsl(35.0 + t * 5.0, 60.0 + t * 20.0, 92.0 + t * 3.0),
        &css::hsl(30.0 + t * 10.0, 70.0 + t * 15.0, 88.0 + t * 5.0),
        &css::hsl(35.0 + t * 15.0, 80.0 + t * 10.0, 85.0 + t * 8.0),
    );
    let sun_glow = format!(
        "radial-gradient(circle, {} 0%, {} 40%, transparent 70%)",
        css::hsla(40.0, 100.0, 70.0, t * 0.2),
        css::hsla(35.0, 90.0, 60.0, t * 0.1),
    );
    let mut reveal_opacity = [0.0; 5];
    for (i, (lo, hi)) in REVEAL_WINDOWS.iter().enumerate() {
        reveal_opacity[i] = clamp(map_range(t, *lo, *hi, 0.0, 1.0), 0.0, 1.0);
    }
    FutureParams {
        sky,
        sun_glow,
        reveal_opacity,
        motes_opacity: reveal_opacity[4] * 0.3,
        end_marker: if t > END_MARKER_CUTOFF { 1.0 } else { 0.0 },
    }
}

fn mote_style(m: &Mote) -> String {
    format!(
        "bottom:{};left:{};width:{};height:{};animation:float {:.2}s ease-in-out infinite;animation-delay:{:.2}s;",
        css::pct(m.bottom_pct),
        css::pct(m.left_pct),
        css::px(m.size_px),
        css::px(m.size_px),
        m.period_s,
        m.delay_s
    )
}

pub fn build(document: &web::Document) {
    let Some(parent) = dom::element_by_id(document, "future-motes") else {
        return;
    };
    let mut rng = StdRng::seed_from_u64(PARTICLE_SEED);
    for mote in mote_field(MOTE_COUNT, &mut rng) {
        dom::append_div(document, &parent, "mote", &mote_style(&mote));
    }
}

pub fn apply(document: &web::Document, t: f64, active: bool) {
    let p = params(t);
    let gate = |v: f64| if active { v } else { 0.0 };

    if let Some(el) = dom::element_by_id(document, "future-sky") {
        dom::set_style(&el, "background", &p.sky);
        dom::set_opacity(&el, gate(1.0));
        dom::set_style(&el, "pointer-events", if active { "auto" } else { "none" });
    }
    if let Some(el) = dom::element_by_id(document, "future-glow") {
        dom::set_opacity(&el, gate(1.0));
        dom::set_style(&el, "background", &p.sun_glow);
    }
    if let Some(el) = dom::element_by_id(document, "future-text") {
        dom::set_opacity(&el, gate(1.0));
    }
    let ids = [
        "future-title",
        "future-theme-1",
        "future-theme-2",
        "future-theme-3",
        "future-final",
    ];
    for (i, id) in ids.iter().enumerate() {
        if let Some(el) = dom::element_by_id(document, id) {
            let o = p.reveal_opacity[i];
            dom::set_opacity(&el, o);
            // Title stays put; the body lines rise into place
            if i > 0 {
                let rise = (1.0 - o) * if i == 4 { 20.0 } else { 15.0 };
                dom::set_style(&el, "transform", &format!("translateY({})", css::px(rise)));
            }
        }
    }
    if let Some(el) = dom::element_by_id(document, "future-motes") {
        dom::set_opacity(&el, gate(p.motes_opacity));
    }
    if let Some(el) = dom::element_by_id(document, "future-end") {
        dom::set_opacity(&el, gate(p.end_marker));
    }
}
