//! Runtime configuration from the host page.
//!
//! `index.html` may carry
//! `<script id="now-later-config" type="application/json">{...}</script>`.

use now_later_core::AppConfig;

const CONFIG_ELEMENT_ID: &str = "now-later-config";

/// Reads the page's config block; a missing or broken block yields defaults.
pub fn load_config() -> AppConfig {
    let Some(raw) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return AppConfig::default();
    };

    if raw.trim().is_empty() {
        return AppConfig::default();
    }
    match AppConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            // logger is not installed yet
            web_sys::console::warn_1(&format!("[CONFIG] using defaults: {err}").into());
            AppConfig::default()
        }
    }
}
