// Nightfall between the kites and the fire. Darkness pools from the
// edges while a warm glow gathers below; stars fade in with the dark.

use crate::constants::{DARKNESS_MAX, PARTICLE_SEED, STAR_COUNT};
use crate::css;
use crate::dom;
use crate::ease::{clamp, map_range};
use crate::particles::{star_field, Star};
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

#[derive(Clone, Debug)]
pub struct TransitionParams {
    pub sky: String,
    pub darkness: f64,
    pub glow_opacity: f64,
    pub glow_scale: f64,
    pub text_opacity: f64,
    pub stars_opacity: f64,
}

pub fn params(t: f64) -> TransitionParams {
    let sky = css::vertical_gradient2(
        &css::hsl(220.0, 50.0, 15.0 - t * 5.0),
        &css::hsl(220.0 - t * 190.0, 50.0 - t * 20.0, 15.0 + t * 5.0),
    );
    let darkness = map_range(t, 0.0, 0.7, 0.0, DARKNESS_MAX);
    let text_opacity = clamp(map_range(t, 0.4, 0.6, 0.0, 1.0), 0.0, 1.0)
        * clamp(map_range(t, 0.85, 1.0, 1.0, 0.0), 0.0, 1.0);
    TransitionParams {
        sky,
        darkness,
        glow_opacity: map_range(t, 0.3, 0.8, 0.0, 0.6),
        glow_scale: map_range(t, 0.3, 1.0, 0.5, 1.5),
        text_opacity,
        stars_opacity: darkness * 0.5,
    }
}

fn star_style(s: &Star) -> String {
    format!(
        "top:{};left:{};width:{};height:{};animation:pulse {:.2}s ease-in-out infinite;animation-delay:{:.2}s;",
        css::pct(s.top_pct),
        css::pct(s.left_pct),
        css::px(s.size_px),
        css::px(s.size_px),
        s.period_s,
        s.delay_s
    )
}

pub fn build(document: &web::Document) {
    let Some(parent) = dom::element_by_id(document, "transition-stars") else {
        return;
    };
    let mut rng = StdRng::seed_from_u64(PARTICLE_SEED);
    for star in star_field(STAR_COUNT, &mut rng) {
        dom::append_div(document, &parent, "star", &star_style(&star));
    }
}

pub fn apply(document: &web::Document, t: f64, active: bool) {
    let p = params(t);
    let gate = |v: f64| if active { v } else { 0.0 };

    if let Some(el) = dom::element_by_id(document, "transition-sky") {
        dom::set_style(&el, "background", &p.sky);
        dom::set_opacity(&el, gate(1.0));
        dom::set_style(&el, "pointer-events", if active { "auto" } else { "none" });
    }
    if let Some(el) = dom::element_by_id(document, "transition-night") {
        dom::set_opacity(&el, gate(p.darkness));
    }
    if let Some(el) = dom::element_by_id(document, "transition-glow") {
        dom::set_opacity(&el, gate(p.glow_opacity));
        dom::set_style(
            &el,
            "transform",
            &format!("translateX(-50%) scale({:.4})", p.glow_scale),
        );
    }
    if let Some(el) = dom::element_by_id(document, "transition-text") {
        dom::set_opacity(&el, gate(p.text_opacity));
    }
    if let Some(el) = dom::element_by_id(document, "transition-stars") {
        dom::set_opacity(&el, gate(p.stars_opacity));
    }
}
