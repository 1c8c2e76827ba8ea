#![cfg(target_arch = "wasm32")]
//! Scroll-driven harvest festival narrative.
//!
//! The page is six full-viewport scenes partitioned over the document's
//! scrollable distance. A single `ScrollSampler` watches the viewport
//! and publishes normalized progress snapshots; every scene renderer is
//! a pure consumer of those snapshots.

use wasm_bindgen::prelude::*;

mod constants;
mod css;
mod dom;
mod ease;
mod nav;
mod particles;
mod progress;
mod sampler;
mod scenes;

use constants::TOTAL_SCENES;
use sampler::ScrollSampler;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("festival-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    if document.get_element_by_id("opening-sky").is_none() {
        return Err(anyhow::anyhow!("missing scene markup"));
    }

    // One-time DOM construction: particle fields, sun rays, nav dots
    scenes::build_all(&document);
    nav::build(&document);

    let sampler = ScrollSampler::initialize(TOTAL_SCENES);

    let doc_render = document.clone();
    sampler.subscribe(move |state| {
        scenes::render_all(&doc_render, state);
        nav::update(&doc_render, state);
    });

    // First paint from the synchronous initial sample
    let initial = sampler.current_state();
    scenes::render_all(&document, &initial);
    nav::update(&document, &initial);
    log::info!(
        "[scroll] scene {} progress {:.3}",
        initial.current_scene,
        initial.progress
    );

    // The sampler lives for the page lifetime; leak it so its listeners
    // stay registered after init returns.
    let _ = Box::leak(Box::new(sampler));
    Ok(())
}
