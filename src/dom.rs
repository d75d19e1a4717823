use backdrop_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current window size in CSS pixels together with the device pixel ratio.
pub fn viewport_from_window(window: &web::Window) -> anyhow::Result<Viewport> {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or_else(|| anyhow::anyhow!("window.innerWidth unavailable"))?;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or_else(|| anyhow::anyhow!("window.innerHeight unavailable"))?;
    Ok(Viewport::new(
        width as f32,
        height as f32,
        window.device_pixel_ratio() as f32,
    )?)
}

/// Startup viewport. Zero or unreadable sizes clamp to 1 CSS px so init can
/// finish; the resize listener picks up the real size later.
pub fn initial_viewport(window: &web::Window) -> Viewport {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    let width = read(window.inner_width());
    let height = read(window.inner_height());
    let viewport = Viewport::clamped(width, height, window.device_pixel_ratio() as f32);
    if viewport.width != width || viewport.height != height {
        log::warn!(
            "[resize] window reports {}x{}, starting at {}x{}",
            width,
            height,
            viewport.width,
            viewport.height
        );
    }
    viewport
}

#[inline]
pub fn scroll_offset(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Create the render canvas and append it to the element with `container_id`.
pub fn mount_canvas(
    document: &web::Document,
    container_id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", container_id))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Match the canvas CSS size to the viewport and its backing store to
/// CSS size * devicePixelRatio.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    _ = canvas.set_attribute(
        "style",
        &format!(
            "display:block;width:{}px;height:{}px",
            viewport.width, viewport.height
        ),
    );
}

/// Run `init` now, or on `DOMContentLoaded` while the document is still loading.
pub fn when_ready(document: &web::Document, init: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        init();
        return;
    }
    let closure: Closure<dyn FnMut()> = Closure::once(init);
    _ = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Add `class_name` to `<body>` once the window has fired `load`.
pub fn wire_loaded_class(document: &web::Document, class_name: &'static str) {
    let mark = move |doc: &web::Document| {
        if let Some(body) = doc.body() {
            _ = body.class_list().add_1(class_name);
        }
    };
    if document.ready_state() == "complete" {
        mark(document);
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    let closure: Closure<dyn FnMut()> = Closure::once(move || mark(&doc));
    _ = window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
    closure.forget();
}
