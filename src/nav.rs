// Page chrome: the top progress bar and the scene navigation dots.

use crate::constants::TOTAL_SCENES;
use crate::css;
use crate::dom;
use crate::progress::ScrollProgress;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const SCENE_NAMES: [&str; TOTAL_SCENES] = [
    "Opening",
    "Sankranti",
    "Transition",
    "Lohri",
    "Reflection",
    "Future",
];

/// Fraction of the bar filled, counting whole scenes plus the active
/// scene's partial progress.
#[inline]
pub fn bar_fraction(current_scene: usize, scene_progress: f64) -> f64 {
    (current_scene as f64 + scene_progress) / TOTAL_SCENES as f64
}

/// The bar and dots switch to the fire palette once the narrative
/// reaches the Lohri half.
#[inline]
pub fn fire_palette(current_scene: usize) -> bool {
    current_scene >= 3
}

pub fn bar_gradient(current_scene: usize) -> &'static str {
    if fire_palette(current_scene) {
        "linear-gradient(90deg, hsl(30, 100%, 50%), hsl(15, 90%, 50%))"
    } else {
        "linear-gradient(90deg, hsl(200, 70%, 60%), hsl(35, 100%, 60%))"
    }
}

/// Build one labeled dot per scene; clicking scrolls to that scene's
/// segment start, measured at click time so resizes stay correct.
pub fn build(document: &web::Document) {
    let Some(parent) = dom::element_by_id(document, "scene-nav") else {
        return;
    };
    for (i, name) in SCENE_NAMES.iter().enumerate() {
        let Some(button) = document
            .create_element("button")
            .ok()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        button.set_class_name("nav-item");
        let _ = button.set_attribute("aria-label", &format!("Go to {}", name));

        if let Some(label) = dom::append_div(document, &button, "nav-label", "") {
            label.set_id(&format!("nav-label-{}", i));
            label.set_text_content(Some(name));
        }
        if let Some(dot) = dom::append_div(document, &button, "nav-dot", "") {
            dot.set_id(&format!("nav-dot-{}", i));
        }
        let _ = parent.append_child(&button);

        let index = i;
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            if let Some(w) = web::window() {
                let viewport = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                let total = w
                    .document()
                    .and_then(|d| d.document_element())
                    .map(|e| e.scroll_height() as f64)
                    .unwrap_or(0.0);
                let segment = ((total - viewport) / TOTAL_SCENES as f64).max(0.0);
                dom::scroll_to(segment * index as f64);
            }
        }) as Box<dyn FnMut()>);
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn update(document: &web::Document, s: &ScrollProgress) {
    let fire = fire_palette(s.current_scene);

    if let Some(el) = dom::element_by_id(document, "progress-bar") {
        dom::set_style(
            &el,
            "width",
            &css::pct(bar_fraction(s.current_scene, s.scene_progress) * 100.0),
        );
        dom::set_style(&el, "background", bar_gradient(s.current_scene));
    }

    for i in 0..TOTAL_SCENES {
        let active = s.current_scene == i;
        if let Some(el) = dom::element_by_id(document, &format!("nav-dot-{}", i)) {
            let background = if active {
                if fire {
                    "hsl(30, 100%, 55%)"
                } else {
                    "hsl(30, 100%, 50%)"
                }
            } else if fire {
                "hsla(35, 40%, 70%, 0.5)"
            } else {
                "hsla(35, 30%, 50%, 0.4)"
            };
            dom::set_style(&el, "background", background);
            dom::set_style(&el, "transform", if active { "scale(1.5)" } else { "scale(1)" });
            dom::set_style(
                &el,
                "box-shadow",
                if active {
                    "0 0 10px hsla(30, 100%, 50%, 0.5)"
                } else {
                    "none"
                },
            );
        }
        if let Some(el) = dom::element_by_id(document, &format!("nav-label-{}", i)) {
            dom::set_style(
                &el,
                "color",
                if fire {
                    "hsl(35, 80%, 85%)"
                } else {
                    "hsl(25, 40%, 40%)"
                },
            );
        }
    }
}
