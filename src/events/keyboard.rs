use crate::app::App;
use crate::core::{action_for_key, control_for_key, KeyAction};
use crate::hud;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, app: &Rc<RefCell<App>>, document: &web::Document) {
    let key = ev.key();
    if let Some(action) = action_for_key(&key) {
        let mut app = app.borrow_mut();
        match action {
            KeyAction::TogglePlayback => {
                ev.prevent_default();
                app.toggle_playback();
                hud::set_status(document, app.status());
                log::info!("[keys] playing={}", app.scene.playing());
            }
            KeyAction::ResetPosition => {
                let snapshot = app.reset_position();
                hud::update(document, &snapshot);
                log::info!("[keys] position reset");
            }
        }
        return;
    }
    if let Some(control) = control_for_key(&key, &ev.code()) {
        if app.borrow_mut().keys.press(control) {
            hud::highlight_key(document, control, true);
        }
    }
}

pub fn handle_keyup(ev: &web::KeyboardEvent, app: &Rc<RefCell<App>>, document: &web::Document) {
    if let Some(control) = control_for_key(&ev.key(), &ev.code()) {
        if app.borrow_mut().keys.release(control) {
            hud::highlight_key(document, control, false);
        }
    }
}

pub fn wire_keyboard(app: Rc<RefCell<App>>, document: web::Document) {
    let app_down = app.clone();
    let doc_down = document.clone();
    let keydown = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &app_down, &doc_down);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    let doc_up = document.clone();
    let keyup = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keyup(&ev, &app, &doc_up);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());
    keyup.forget();
}
