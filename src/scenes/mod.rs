//! The six vignettes of the narrative. Each scene module is a pure
//! `params` function (scene progress in, style values out) plus a thin
//! `apply` that writes those values onto its fixed layers.

pub mod future;
pub mod lohri;
pub mod opening;
pub mod reflection;
pub mod sankranti;
pub mod transition;

use crate::constants::TOTAL_SCENES;
use crate::progress::ScrollProgress;
use web_sys as web;

/// Build the dynamic layers (rays, stars, embers, motes) once.
pub fn build_all(document: &web::Document) {
    sankranti::build(document);
    transition::build(document);
    lohri::build(document);
    future::build(document);
}

/// Push one snapshot into every scene, applying the composition rule
/// for inactive scenes (passed scenes hold at full progress).
pub fn render_all(document: &web::Document, s: &ScrollProgress) {
    opening::apply(document, s.progress_for_scene(0, TOTAL_SCENES), s.is_active(0));
    sankranti::apply(document, s.progress_for_scene(1, TOTAL_SCENES), s.is_active(1));
    transition::apply(document, s.progress_for_scene(2, TOTAL_SCENES), s.is_active(2));
    lohri::apply(document, s.progress_for_scene(3, TOTAL_SCENES), s.is_active(3));
    reflection::apply(document, s.progress_for_scene(4, TOTAL_SCENES), s.is_active(4));
    future::apply(document, s.progress_for_scene(5, TOTAL_SCENES), s.is_active(5));
}
