use gloo_console::debug;
use serde_json::{json, Value};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect, JSON};

// Everything here is fire-and-forget: the sink is whatever tag manager the
// page carries, and a missing or broken sink must never be visible to the
// user. No function in this module returns anything or panics.

pub fn track_impression(payload: Value) {
    emit("promo_impression", payload);
}

pub fn track_click(payload: Value) {
    emit("promo_click", payload);
}

pub fn track_copy(payload: Value) {
    emit("promo_code_copy", payload);
}

pub fn track_expired(payload: Value) {
    emit("promo_expired", payload);
}

/// Generic event path used by the rest of the site (chatbot, calculator,
/// booking grid, lead form, call buttons).
pub fn track_event(name: &str, params: Value) {
    emit(name, params);
}

fn emit(name: &str, mut params: Value) {
    if let Some(fields) = params.as_object_mut() {
        fields.insert("event".into(), json!(name));
    }
    debug!("analytics:", name.to_string());

    if let Some(window) = web_sys::window() {
        let layer = match Reflect::get(&window, &JsValue::from_str("dataLayer")) {
            Ok(existing) if !existing.is_undefined() && !existing.is_null() => existing,
            _ => {
                // same bootstrap the gtag snippet does: dataLayer = dataLayer || []
                let fresh = Array::new();
                let _ = Reflect::set(&window, &JsValue::from_str("dataLayer"), &fresh);
                fresh.into()
            }
        };
        if let Ok(layer) = layer.dyn_into::<Array>() {
            if let Ok(entry) = JSON::parse(&params.to_string()) {
                layer.push(&entry);
            }
        }
    }
}
