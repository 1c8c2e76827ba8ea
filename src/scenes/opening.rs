// Opening: dawn sky over the kite field. Text fades out as soon as the
// reader starts to scroll; clouds and the hero art drift in parallax.

use crate::constants::{
    CLOUD_DRIFT_BACK, CLOUD_DRIFT_FRONT, CLOUD_DRIFT_MID, OPENING_BG_PARALLAX_PX,
    OPENING_BG_SCALE_SPAN, OPENING_HINT_CUTOFF, OPENING_TEXT_FADE_RATE,
};
use crate::css;
use crate::dom;
use crate::ease::clamp;
use web_sys as web;

#[derive(Clone, Debug)]
pub struct OpeningParams {
    pub sky: String,
    pub text_opacity: f64,
    pub bg_y_px: f64,
    pub bg_scale: f64,
    pub bg_filter: String,
    pub cloud_opacity: f64,
    /// Drift of the back/mid/front cloud layers, percent of viewport.
    pub cloud_offsets: [f64; 3],
    pub hint_visible: f64,
}

pub fn params(t: f64) -> OpeningParams {
    let sky = css::vertical_gradient(
        &css::hsl(200.0, 70.0, 80.0 - t * 15.0),
        &css::hsl(200.0 - t * 170.0, 70.0 + t * 20.0, 75.0 - t * 10.0),
        &css::hsl(35.0 + t * 10.0, 100.0, 70.0 - t * 5.0),
    );
    OpeningParams {
        sky,
        text_opacity: clamp(1.0 - t * OPENING_TEXT_FADE_RATE, 0.0, 1.0),
        bg_y_px: t * OPENING_BG_PARALLAX_PX,
        bg_scale: 1.0 + t * OPENING_BG_SCALE_SPAN,
        bg_filter: format!(
            "brightness({:.3}) saturate({:.3})",
            1.0 + t * 0.1,
            1.0 + t * 0.2
        ),
        cloud_opacity: 1.0 - t * 0.5,
        cloud_offsets: [t * CLOUD_DRIFT_BACK, t * CLOUD_DRIFT_MID, t * CLOUD_DRIFT_FRONT],
        hint_visible: if t < OPENING_HINT_CUTOFF { 1.0 } else { 0.0 },
    }
}

pub fn apply(document: &web::Document, t: f64, active: bool) {
    let p = params(t);
    let gate = |v: f64| if active { v } else { 0.0 };

    if let Some(el) = dom::element_by_id(document, "opening-sky") {
        dom::set_style(&el, "background", &p.sky);
        dom::set_opacity(&el, gate(1.0));
        dom::set_style(&el, "pointer-events", if active { "auto" } else { "none" });
    }
    if let Some(el) = dom::element_by_id(document, "opening-clouds") {
        dom::set_opacity(&el, gate(p.cloud_opacity));
    }
    let [back, mid, front] = p.cloud_offsets;
    if let Some(el) = dom::element_by_id(document, "opening-cloud-1") {
        dom::set_style(&el, "left", &css::pct(-20.0 + back));
    }
    if let Some(el) = dom::element_by_id(document, "opening-cloud-2") {
        dom::set_style(&el, "right", &css::pct(-10.0 + mid));
    }
    if let Some(el) = dom::element_by_id(document, "opening-cloud-3") {
        dom::set_style(&el, "left", &css::pct(10.0 + front));
    }
    // Wispy fourth cloud tracks the back layer at half speed
    if let Some(el) = dom::element_by_id(document, "opening-cloud-4") {
        dom::set_style(&el, "left", &css::pct(50.0 + back * 0.5));
    }
    if let Some(el) = dom::element_by_id(document, "opening-hero") {
        dom::set_opacity(&el, gate(1.0));
        dom::set_style(
            &el,
            "transform",
            &format!("translateY({}) scale({:.4})", css::px(p.bg_y_px), p.bg_scale),
        );
        dom::set_style(&el, "filter", &p.bg_filter);
    }
    if let Some(el) = dom::element_by_id(document, "opening-text") {
        dom::set_opacity(&el, gate(p.text_opacity));
    }
    if let Some(el) = dom::element_by_id(document, "opening-hint") {
        dom::set_opacity(&el, gate(p.hint_visible));
    }
}
