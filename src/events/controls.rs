use crate::app::App;
use crate::audio;
use crate::constants::DECODE_FAILED_MESSAGE;
use crate::core::{DistanceModel, PanningModel, RoomPreset, SoundType};
use crate::dom;
use crate::hud::{self, AudioStatus};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Wire the start button and every control-surface input to `app`.
pub fn wire_controls(app: Rc<RefCell<App>>, document: web::Document) {
    wire_start_button(&app, &document);
    wire_source_controls(&app, &document);
    wire_spatial_controls(&app, &document);
    wire_realism_controls(&app, &document);
    wire_file_input(&app, &document);
}

fn wire_start_button(app: &Rc<RefCell<App>>, document: &web::Document) {
    let app = app.clone();
    let doc = document.clone();
    dom::add_click_listener(document, "start-btn", move || {
        let result = app.borrow_mut().ensure_audio();
        match result {
            Ok(()) => hud::set_status(&doc, AudioStatus::Off),
            Err(e) => {
                log::error!("[audio] {}", e);
                hud::set_status(&doc, AudioStatus::Unavailable);
            }
        }
        hud::show_main_content(&doc);
    });
}

fn wire_source_controls(app: &Rc<RefCell<App>>, document: &web::Document) {
    {
        let app = app.clone();
        let doc = document.clone();
        dom::add_event_listener(document, "volume", "input", move || {
            if let Some(v) = dom::input_number(&doc, "volume") {
                app.borrow_mut().set_volume(v);
                dom::set_text(&doc, "volume-value", &format!("{:.0}%", v * 100.0));
            }
        });
    }
    {
        let app = app.clone();
        let doc = document.clone();
        dom::add_event_listener(document, "frequency", "input", move || {
            if let Some(hz) = dom::input_number(&doc, "frequency") {
                app.borrow_mut().set_frequency(hz);
                dom::set_text(&doc, "frequency-value", &format!("{:.0} Hz", hz));
            }
        });
    }
    {
        let app = app.clone();
        let doc = document.clone();
        dom::add_event_listener(document, "sound-select", "change", move || {
            let Some(name) = dom::input_value(&doc, "sound-select") else {
                return;
            };
            match SoundType::from_name(&name) {
                Some(sound) => {
                    let mut app = app.borrow_mut();
                    app.set_sound_type(sound);
                    hud::set_status(&doc, app.status());
                }
                None => log::warn!("[controls] unknown sound type '{}'", name),
            }
        });
    }
}

fn wire_spatial_controls(app: &Rc<RefCell<App>>, document: &web::Document) {
    {
        let app = app.clone();
        let doc = document.clone();
        dom::add_event_listener(document, "panning-model", "change", move || {
            if let Some(model) =
                dom::input_value(&doc, "panning-model").and_then(|n| PanningModel::from_name(&n))
            {
                app.borrow_mut().set_panning_model(model);
            }
        });
    }
    {
        let app = app.clone();
        let doc = document.clone();
        dom::add_event_listener(document, "distance-model", "change", move || {
            if let Some(model) =
                dom::input_value(&doc, "distance-model").and_then(|n| DistanceModel::from_name(&n))
            {
                app.borrow_mut().set_distance_model(model);
            }
        });
    }
}

fn wire_realism_controls(app: &Rc<RefCell<App>>, document: &web::Document) {
    {
        let app = app.clone();
        let doc = document.clone();
        dom::add_event_listener(document, "reverb-enabled", "change", move || {
            if let Some(enabled) = dom::input_checked(&doc, "reverb-enabled") {
                app.borrow_mut().set_reverb_enabled(enabled);
            }
        });
    }
    {
        let app = app.clone();
        let doc = document.clone();
        dom::add_event_listener(document, "reverb-amount", "input", move || {
            if let Some(amount) = dom::input_number(&doc, "reverb-amount") {
                app.borrow_mut().set_reverb_amount(amount);
                dom::set_text(&doc, "reverb-value", &format!("{:.0}%", amount * 100.0));
            }
        });
    }
    {
        let app = app.clone();
        let doc = document.clone();
        dom::add_event_listener(document, "room-type", "change", move || {
            let name = dom::input_value(&doc, "room-type").unwrap_or_default();
            let room = RoomPreset::from_name(&name);
            if let Err(e) = app.borrow_mut().set_room(room) {
                log::error!("[controls] room '{}': {}", room.name(), e);
            }
        });
    }
    {
        let app = app.clone();
        let doc = document.clone();
        dom::add_event_listener(document, "air-absorption", "change", move || {
            if let Some(enabled) = dom::input_checked(&doc, "air-absorption") {
                app.borrow_mut().set_air_absorption_enabled(enabled);
            }
        });
    }
}

fn wire_file_input(app: &Rc<RefCell<App>>, document: &web::Document) {
    let app = app.clone();
    let doc = document.clone();
    dom::add_event_listener(document, "audio-file", "change", move || {
        let Some(file) = dom::input_file(&doc, "audio-file") else {
            return;
        };
        let Some(audio_ctx) = app.borrow().audio_context() else {
            log::warn!("[controls] audio not started; ignoring '{}'", file.name());
            return;
        };
        let app = app.clone();
        let doc = doc.clone();
        spawn_local(async move {
            match audio::decode_sample(&audio_ctx, &file).await {
                Ok(buffer) => {
                    let name = file.name();
                    {
                        let mut app = app.borrow_mut();
                        app.install_custom_sample(buffer);
                        hud::set_status(&doc, app.status());
                    }
                    hud::select_custom_option(&doc, &name);
                    log::info!("[controls] loaded sample '{}'", name);
                }
                Err(e) => {
                    log::error!("[controls] {}", e);
                    dom::alert(DECODE_FAILED_MESSAGE);
                }
            }
        });
    });
}
