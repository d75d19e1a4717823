#![cfg(target_arch = "wasm32")]
use backdrop_core::{Scene, SceneConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;

use constants::{CONTAINER_ID, LOADED_CLASS};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    dom::wire_loaded_class(&document, LOADED_CLASS);
    dom::when_ready(&document, || {
        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let viewport = dom::initial_viewport(&window);
    let canvas = dom::mount_canvas(&document, CONTAINER_ID)?;
    dom::size_canvas(&canvas, &viewport);

    let scene = Scene::build(viewport, &SceneConfig::default(), &mut rand::thread_rng())?;

    // Build GPU resources before any listener can borrow the scene
    let gpu = frame::init_gpu(&canvas, &scene).await;

    let scene = Rc::new(RefCell::new(scene));
    let wiring = events::EventWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
    };
    events::wire_scene_events(wiring.clone());
    // the window may have changed size while the adapter was requested
    events::sync_viewport(&window, &wiring);

    frame::start_loop(frame::FrameContext {
        scene,
        canvas,
        gpu,
        epoch: Instant::now(),
    });
    Ok(())
}
