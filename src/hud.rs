use crate::constants::{STATUS_OFF, STATUS_ON, STATUS_UNAVAILABLE};
use crate::core::{cutoff_label, Control, SceneSnapshot};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioStatus {
    Off,
    On,
    Unavailable,
}

impl AudioStatus {
    fn text(self) -> &'static str {
        match self {
            AudioStatus::Off => STATUS_OFF,
            AudioStatus::On => STATUS_ON,
            AudioStatus::Unavailable => STATUS_UNAVAILABLE,
        }
    }

    fn class_name(self) -> &'static str {
        match self {
            AudioStatus::On => "status-on",
            AudioStatus::Off | AudioStatus::Unavailable => "status-off",
        }
    }
}

/// Refresh the coordinate read-outs from a frame snapshot.
pub fn update(document: &web::Document, snapshot: &SceneSnapshot) {
    let sp = snapshot.cartesian;
    let lp = snapshot.listener.position;
    dom::set_text(
        document,
        "sound-coords",
        &format!("({:.1}, {:.1}, {:.1})", sp.x, sp.y, sp.z),
    );
    dom::set_text(
        document,
        "listener-coords",
        &format!("({:.1}, {:.1}, {:.1})", lp.x, lp.y, lp.z),
    );
    dom::set_text(
        document,
        "distance-value",
        &format!("{:.1}", snapshot.spherical.radius),
    );
    dom::set_text(
        document,
        "spherical-coords",
        &format!(
            "Azimuth: {:.0}° | Elevation: {:.0}°",
            snapshot.spherical.azimuth_deg(),
            snapshot.spherical.elevation_deg()
        ),
    );
    dom::set_text(document, "filter-freq", &cutoff_label(snapshot.cutoff_hz));
}

pub fn set_status(document: &web::Document, status: AudioStatus) {
    if let Some(el) = document.get_element_by_id("audio-status") {
        el.set_text_content(Some(status.text()));
        el.set_class_name(status.class_name());
    }
}

/// Light up (or dim) the legend key cap whose text matches `control`.
pub fn highlight_key(document: &web::Document, control: Control, active: bool) {
    let label = control.legend_label();
    let Ok(nodes) = document.query_selector_all(".key") else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let text = el.text_content().unwrap_or_default();
        if text.trim().eq_ignore_ascii_case(label) {
            let cl = el.class_list();
            _ = if active {
                cl.add_1("active")
            } else {
                cl.remove_1("active")
            };
        }
    }
}

/// Add (or relabel) the "custom" entry of the sound selector and select it.
pub fn select_custom_option(document: &web::Document, file_name: &str) {
    let Some(select) = document
        .get_element_by_id("sound-select")
        .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok())
    else {
        return;
    };
    let label = format!("File: {}", file_name);
    let existing = select
        .query_selector("option[value=\"custom\"]")
        .ok()
        .flatten();
    match existing {
        Some(option) => option.set_text_content(Some(&label)),
        None => {
            if let Ok(option) = web::HtmlOptionElement::new_with_text_and_value(&label, "custom") {
                _ = select.append_child(&option);
            }
        }
    }
    select.set_value("custom");
}

/// Swap the start screen for the main controls.
pub fn show_main_content(document: &web::Document) {
    dom::set_hidden(document, "start-screen", true);
    dom::set_hidden(document, "main-content", false);
}
