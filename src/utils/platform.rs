//! Browser-only hooks into the host page. Native builds get no-ops.

#[cfg(target_arch = "wasm32")]
mod web {
    use tracing::warn;
    use wasm_bindgen::JsValue;

    pub fn set_document_title(title: &str) {
        match web_sys::window().and_then(|w| w.document()) {
            Some(document) => document.set_title(title),
            None => warn!("No document available; page title not set"),
        }
    }

    /// True once the Leaflet script has defined the global `L`.
    pub fn leaflet_available() -> bool {
        web_sys::window()
            .map(|window| js_sys::Reflect::has(&window, &JsValue::from_str("L")).unwrap_or(false))
            .unwrap_or(false)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{leaflet_available, set_document_title};

/// The desktop webview sets its title from the window config.
#[cfg(not(target_arch = "wasm32"))]
pub fn set_document_title(_title: &str) {}

/// Natively Leaflet comes from the custom head, which loads before the body.
#[cfg(not(target_arch = "wasm32"))]
pub fn leaflet_available() -> bool {
    true
}
