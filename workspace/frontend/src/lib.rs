use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

pub mod api_client;
pub mod charts;
pub mod components;
pub mod forms;
pub mod settings;

/// Settings, logging and form binding, once the page body is available.
fn start(document: &web_sys::Document) {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Farm Analytics Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base: {:?}", settings.api_base);

    forms::bind_all(document);
    log::info!("Dashboard forms bound");
}

#[wasm_bindgen(start)]
pub fn run_app() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    if document.ready_state() != "loading" {
        start(&document);
        return Ok(());
    }

    let target = document.clone();
    let on_ready = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_event: Event| {
        start(&target);
    }));
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

/// Point the dashboard at another analytics API and remember the choice.
///
/// Callable from the browser console as `setApiBase("http://host:5000")`.
#[wasm_bindgen(js_name = setApiBase)]
pub fn set_api_base(api_base: String) -> Result<(), JsValue> {
    let api_base = api_base.trim_end_matches('/').to_string();
    log::info!("API base changed to {:?}", api_base);
    settings::update_settings(|s| s.api_base = api_base);
    settings::get_settings().save_to_storage()
}
