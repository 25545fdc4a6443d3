#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod audio;
mod constants;
pub mod core;
mod dom;
mod error;
mod events;
mod frame;
mod hud;
mod view;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("spatial-audio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("scene-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #scene-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Backing store follows the container width; the view reads it every frame.
    wire_canvas_resize(&canvas);

    let app = Rc::new(RefCell::new(app::App::new()));
    events::wire_keyboard(app.clone(), document.clone());
    events::wire_controls(app.clone(), document.clone());

    let view = match view::SceneView::new(canvas) {
        Ok(v) => Some(v),
        Err(e) => {
            log::error!("[view] canvas unavailable: {:?}", e);
            None
        }
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(app, view, document)));
    frame::start_loop(frame_ctx);
    Ok(())
}
