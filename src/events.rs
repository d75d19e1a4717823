use crate::dom;
use backdrop_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct EventWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
}

pub fn wire_scene_events(w: EventWiring) {
    wire_mousemove(&w);
    wire_resize(&w);
    wire_scroll(&w);
}

/// Re-read the window size, resize the canvas and update the camera aspect.
pub fn sync_viewport(window: &web::Window, w: &EventWiring) {
    match dom::viewport_from_window(window) {
        Ok(viewport) => {
            dom::size_canvas(&w.canvas, &viewport);
            w.scene.borrow_mut().on_resize(viewport);
            log::info!(
                "[resize] {}x{} dpr={}",
                viewport.width,
                viewport.height,
                viewport.pixel_ratio
            );
        }
        Err(e) => log::warn!("[resize] skipped: {:?}", e),
    }
}

fn wire_mousemove(w: &EventWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        w.scene
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);

    if let Some(doc) = dom::window_document() {
        _ = doc.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_resize(w: &EventWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            sync_viewport(&window, &w);
        }
    }) as Box<dyn FnMut()>);

    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_scroll(w: &EventWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            w.scene.borrow_mut().on_scroll(dom::scroll_offset(&window));
        }
    }) as Box<dyn FnMut()>);

    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
