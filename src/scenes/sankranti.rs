// Makar Sankranti: the sun climbs and the kite rises with it. The sky
// shifts from morning blue to saffron across the scene.

use crate::constants::{
    SUN_RAY_COUNT, SUN_ROTATE_SPAN_DEG, SUN_SCALE_BASE, SUN_SCALE_SPAN, SUN_TRAVEL_FROM_PX,
    SUN_TRAVEL_TO_PX,
};
use crate::css;
use crate::dom;
use crate::ease::{clamp, ease_out_cubic, map_range};
use web_sys as web;

#[derive(Clone, Debug)]
pub struct SankrantiParams {
    pub sky: String,
    pub sun_rotate_deg: f64,
    pub sun_scale: f64,
    pub sun_y_px: f64,
    pub kite_y_px: f64,
    pub kite_rotate_deg: f64,
    pub kite_tail_deg: f64,
    pub kite_opacity: f64,
    pub text_opacity: f64,
    pub rays_opacity: f64,
}

pub fn params(t: f64) -> SankrantiParams {
    let sky_hue = map_range(t, 0.0, 1.0, 200.0, 35.0);
    let sky_sat = map_range(t, 0.0, 1.0, 70.0, 90.0);
    let sky = css::vertical_gradient(
        &css::hsl(sky_hue, sky_sat, 75.0),
        &css::hsl(35.0 + t * 10.0, 95.0, 65.0),
        &css::hsl(30.0, 100.0, 55.0),
    );

    // Kite climbs over the first half, then fades late
    let kite_opacity = if t > 0.7 { 1.0 - (t - 0.7) * 3.0 } else { 1.0 };

    // Reveal window [0.3, 0.5], fade-out window [0.8, 1.0]
    let text_in = clamp(map_range(t, 0.3, 0.5, 0.0, 1.0), 0.0, 1.0);
    let text_out = clamp(map_range(t, 0.8, 1.0, 1.0, 0.0), 0.0, 1.0);

    SankrantiParams {
        sky,
        sun_rotate_deg: t * SUN_ROTATE_SPAN_DEG,
        sun_scale: SUN_SCALE_BASE + ease_out_cubic(t) * SUN_SCALE_SPAN,
        sun_y_px: map_range(t, 0.0, 1.0, SUN_TRAVEL_FROM_PX, SUN_TRAVEL_TO_PX),
        kite_y_px: map_range(t, 0.0, 0.5, -100.0, -200.0),
        kite_rotate_deg: t * 10.0 + 15.0,
        kite_tail_deg: (t * std::f64::consts::PI * 4.0).sin() * 10.0,
        kite_opacity,
        text_opacity: text_in * text_out,
        rays_opacity: t * 0.3,
    }
}

/// Eight light shafts fanned around the sun, built once.
pub fn build(document: &web::Document) {
    let Some(parent) = dom::element_by_id(document, "sankranti-rays") else {
        return;
    };
    for i in 0..SUN_RAY_COUNT {
        if let Some(el) = dom::append_div(document, &parent, "sun-ray", "") {
            el.set_id(&format!("sankranti-ray-{}", i));
        }
    }
}

pub fn apply(document: &web::Document, t: f64, active: bool) {
    let p = params(t);
    let gate = |v: f64| if active { v } else { 0.0 };

    if let Some(el) = dom::element_by_id(document, "sankranti-sky") {
        dom::set_style(&el, "background", &p.sky);
        dom::set_opacity(&el, gate(1.0));
        dom::set_style(&el, "pointer-events", if active { "auto" } else { "none" });
    }
    if let Some(el) = dom::element_by_id(document, "sankranti-sun") {
        dom::set_style(
            &el,
            "transform",
            &format!(
                "translateX(-50%) translateY({}) rotate({:.2}deg) scale({:.4})",
                css::px(p.sun_y_px),
                p.sun_rotate_deg,
                p.sun_scale
            ),
        );
        dom::set_opacity(&el, gate(0.9));
    }
    if let Some(el) = dom::element_by_id(document, "sankranti-kite") {
        dom::set_style(
            &el,
            "transform",
            &format!("translateY({}) rotate({:.2}deg)", css::px(p.kite_y_px), p.kite_rotate_deg),
        );
        dom::set_opacity(&el, gate(p.kite_opacity * 0.7));
    }
    if let Some(el) = dom::element_by_id(document, "sankranti-kite-tail") {
        dom::set_style(&el, "transform", &format!("rotate({:.2}deg)", p.kite_tail_deg));
    }
    if let Some(el) = dom::element_by_id(document, "sankranti-text") {
        dom::set_opacity(&el, gate(p.text_opacity));
    }
    if let Some(el) = dom::element_by_id(document, "sankranti-rays") {
        dom::set_opacity(&el, gate(p.rays_opacity));
    }
    for i in 0..SUN_RAY_COUNT {
        if let Some(el) = dom::element_by_id(document, &format!("sankranti-ray-{}", i)) {
            dom::set_style(
                &el,
                "transform",
                &format!("rotate({:.2}deg)", i as f64 * 45.0 + p.sun_rotate_deg),
            );
        }
    }
}
