// Reflection: the fire cools into a pale morning and three lines of
// text surface one after another, each rising as it fades in.

use crate::css;
use crate::dom;
use crate::ease::{clamp, map_range};
use web_sys as web;

/// Reveal windows for the three lines, in scene-progress units.
const LINE_WINDOWS: [(f64, f64); 3] = [(0.1, 0.3), (0.3, 0.5), (0.5, 0.7)];

#[derive(Clone, Debug)]
pub struct ReflectionParams {
    pub sky: String,
    pub warmth: f64,
    pub glow: String,
    pub line_opacity: [f64; 3],
    pub line_rise_px: [f64; 3],
    pub ornaments_opacity: f64,
    pub circle_scales: [f64; 2],
}

pub fn params(t: f64) -> ReflectionParams {
    let warmth = 1.0 - t * 0.5;
    let sky = css::vertical_gradient2(
        &css::hsl(38.0 - t * 8.0, 90.0 - t * 40.0, 95.0 - t * 5.0),
        &css::hsl(35.0 - t * 5.0, 80.0 - t * 30.0, 90.0 - t * 5.0),
    );
    let glow = format!(
        "radial-gradient(ellipse at center bottom, {} 0%, transparent 60%)",
        css::hsla(30.0, 80.0, 60.0, warmth * 0.15),
    );
    let mut line_opacity = [0.0; 3];
    let mut line_rise_px = [0.0; 3];
    for (i, (lo, hi)) in LINE_WINDOWS.iter().enumerate() {
        let o = clamp(map_range(t, *lo, *hi, 0.0, 1.0), 0.0, 1.0);
        line_opacity[i] = o;
        line_rise_px[i] = (1.0 - o) * 20.0;
    }
    ReflectionParams {
        sky,
        warmth,
        glow,
        line_opacity,
        line_rise_px,
        ornaments_opacity: t * 0.1,
        circle_scales: [1.0 + t * 0.5, 1.0 + t * 0.3],
    }
}

pub fn apply(document: &web::Document, t: f64, active: bool) {
    let p = params(t);
    let gate = |v: f64| if active { v } else { 0.0 };

    if let Some(el) = dom::element_by_id(document, "reflection-sky") {
        dom::set_style(&el, "background", &p.sky);
        dom::set_opacity(&el, gate(1.0));
        dom::set_style(&el, "pointer-events", if active { "auto" } else { "none" });
    }
    if let Some(el) = dom::element_by_id(document, "reflection-glow") {
        dom::set_opacity(&el, gate(1.0));
        dom::set_style(&el, "background", &p.glow);
    }
    if let Some(el) = dom::element_by_id(document, "reflection-text") {
        dom::set_opacity(&el, gate(1.0));
    }
    // Heading shares the first line's reveal
    if let Some(el) = dom::element_by_id(document, "reflection-heading") {
        dom::set_opacity(&el, p.line_opacity[0]);
    }
    for i in 0..3 {
        if let Some(el) = dom::element_by_id(document, &format!("reflection-line-{}", i + 1)) {
            dom::set_opacity(&el, p.line_opacity[i]);
            dom::set_style(
                &el,
                "transform",
                &format!("translateY({})", css::px(p.line_rise_px[i])),
            );
        }
    }
    if let Some(el) = dom::element_by_id(document, "reflection-ornaments") {
        dom::set_opacity(&el, gate(p.ornaments_opacity));
    }
    for (i, scale) in p.circle_scales.iter().enumerate() {
        if let Some(el) = dom::element_by_id(document, &format!("reflection-circle-{}", i + 1)) {
            dom::set_style(&el, "transform", &format!("scale({:.4})", scale));
        }
    }
}
