//! Browser client for the greeting widget
//!
//! Binds the headless `widget_core` scene to a real document: listeners
//! come from the dispatch table, one browser timeout drives the
//! scheduler, and scene events become DOM mutations.

pub mod style;

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&format!($($t)*))))
}

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
mod bindings {
    use wasm_bindgen::prelude::*;
    use widget_core::{Config, WidgetError};

    fn to_js(e: WidgetError) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    /// Attach to the page. `config_json` may be a partial config object.
    #[wasm_bindgen]
    pub fn init_widget(config_json: Option<String>) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(json) => Config::from_json(&json),
            None => Ok(Config::default()),
        };
        config.and_then(crate::app::install).map_err(|e| {
            console_log!("widget: init failed: {}", e);
            to_js(e)
        })
    }

    /// Stop all effects and remove their elements. False if not running.
    #[wasm_bindgen]
    pub fn teardown_widget() -> bool {
        crate::app::uninstall()
    }

    /// Widget counters as JSON
    #[wasm_bindgen]
    pub fn widget_stats() -> Result<String, JsValue> {
        let stats = crate::app::stats()
            .ok_or_else(|| JsValue::from_str("Widget not initialized"))?;
        serde_json::to_string(&stats).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
