// Lohri: the bonfire scene. Fire intensity ramps with scroll and
// drives the glow, the ember count, and the image grade together.

use crate::constants::{EMBER_MAX, FIRE_RAMP_RATE, GLOW_PULSE_CYCLES, PARTICLE_SEED};
use crate::css;
use crate::dom;
use crate::ease::{clamp, ease_out_cubic, map_range};
use crate::particles::{ember_field, Ember};
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

#[derive(Clone, Debug)]
pub struct LohriParams {
    pub sky: String,
    pub fire_intensity: f64,
    pub ember_count: usize,
    pub glow_scale: f64,
    pub glow: String,
    pub warm: String,
    pub image_scale: f64,
    pub image_filter: String,
    pub text_opacity: f64,
}

pub fn params(t: f64) -> LohriParams {
    let fire = ease_out_cubic((t * FIRE_RAMP_RATE).min(1.0));
    let glow_opacity = 0.4 + fire * 0.4;
    let sky = css::vertical_gradient2(
        &css::hsl(220.0, 60.0, 8.0 + fire * 5.0),
        &css::hsl(220.0 - fire * 190.0, 40.0 + fire * 40.0, 12.0 + fire * 8.0),
    );
    let glow = format!(
        "radial-gradient(ellipse at center bottom, {} 0%, {} 30%, transparent 70%)",
        css::hsla(25.0, 100.0, 55.0, glow_opacity),
        css::hsla(15.0, 95.0, 45.0, glow_opacity * 0.6),
    );
    let warm = format!(
        "radial-gradient(ellipse at 50% 80%, {} 0%, transparent 50%)",
        css::hsla(30.0 + fire * 10.0, 100.0, 50.0, fire * 0.15),
    );
    let text_opacity = clamp(map_range(t, 0.2, 0.4, 0.0, 1.0), 0.0, 1.0)
        * clamp(map_range(t, 0.8, 1.0, 1.0, 0.0), 0.0, 1.0);
    LohriParams {
        sky,
        fire_intensity: fire,
        ember_count: (fire * EMBER_MAX as f64).floor() as usize,
        glow_scale: 1.0 + (t * std::f64::consts::PI * GLOW_PULSE_CYCLES).sin() * 0.1,
        glow,
        warm,
        image_scale: 1.0 + t * 0.1,
        image_filter: format!(
            "brightness({:.3}) saturate({:.3}) contrast({:.3})",
            0.8 + fire * 0.4,
            1.0 + fire * 0.3,
            1.0 + fire * 0.1
        ),
        text_opacity,
    }
}

fn ember_style(e: &Ember) -> String {
    format!(
        "left:{};bottom:-10px;width:{};height:{};opacity:{};animation:ember-rise {:.2}s ease-out infinite;animation-delay:{:.2}s;",
        css::pct(e.left_pct),
        css::px(e.size_px),
        css::px(e.size_px),
        css::alpha(e.opacity),
        e.duration_s,
        e.delay_s
    )
}

/// The full ember field is built up front; `apply` shows a prefix of it
/// sized by the current fire intensity.
pub fn build(document: &web::Document) {
    let Some(parent) = dom::element_by_id(document, "lohri-embers") else {
        return;
    };
    let mut rng = StdRng::seed_from_u64(PARTICLE_SEED);
    for (i, ember) in ember_field(EMBER_MAX, &mut rng).iter().enumerate() {
        if let Some(el) = dom::append_div(document, &parent, "ember", &ember_style(ember)) {
            el.set_id(&format!("lohri-ember-{}", i));
        }
    }
}

pub fn apply(document: &web::Document, t: f64, active: bool) {
    let p = params(t);
    let gate = |v: f64| if active { v } else { 0.0 };

    if let Some(el) = dom::element_by_id(document, "lohri-sky") {
        dom::set_style(&el, "background", &p.sky);
        dom::set_opacity(&el, gate(1.0));
        dom::set_style(&el, "pointer-events", if active { "auto" } else { "none" });
    }
    if let Some(el) = dom::element_by_id(document, "lohri-bonfire") {
        dom::set_opacity(&el, gate(1.0));
        dom::set_style(&el, "transform", &format!("scale({:.4})", p.image_scale));
        dom::set_style(&el, "filter", &p.image_filter);
    }
    if let Some(el) = dom::element_by_id(document, "lohri-glow") {
        dom::set_opacity(&el, gate(1.0));
        dom::set_style(&el, "background", &p.glow);
        dom::set_style(
            &el,
            "transform",
            &format!("translateX(-50%) scale({:.4})", p.glow_scale),
        );
    }
    if let Some(el) = dom::element_by_id(document, "lohri-warm") {
        dom::set_opacity(&el, gate(1.0));
        dom::set_style(&el, "background", &p.warm);
    }
    if let Some(el) = dom::element_by_id(document, "lohri-embers") {
        dom::set_opacity(&el, gate(p.fire_intensity));
    }
    for i in 0..EMBER_MAX {
        if let Some(el) = dom::element_by_id(document, &format!("lohri-ember-{}", i)) {
            dom::set_style(&el, "display", if i < p.ember_count { "block" } else { "none" });
        }
    }
    if let Some(el) = dom::element_by_id(document, "lohri-text") {
        dom::set_opacity(&el, gate(p.text_opacity));
    }
    if let Some(el) = dom::element_by_id(document, "lohri-vignette") {
        dom::set_opacity(&el, gate(0.7));
    }
}
