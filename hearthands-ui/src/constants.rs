// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;

pub const DEFAULT_CONTACT_EMAIL: &str = "hearthand@gmail.com";
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const NEWS_API_PATH: &str = "/api/v1/public/news";

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "apiBaseUrl")]
    pub api_base_url: String,
    #[serde(rename = "contactEmail")]
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(rename = "itemsPerPage")]
    #[serde(default)]
    pub items_per_page: Option<usize>,
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = web_sys::window().ok_or_else(|| "No global window available".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

pub fn api_base_url() -> Result<String, String> {
    app_config().map(|c| c.api_base_url.trim_end_matches('/').to_string())
}

pub fn news_url() -> Result<String, String> {
    api_base_url().map(|base| format!("{base}{NEWS_API_PATH}"))
}

pub fn contact_email() -> String {
    app_config()
        .ok()
        .and_then(|c| c.contact_email)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_CONTACT_EMAIL.to_string())
}

pub fn items_per_page() -> usize {
    app_config()
        .ok()
        .and_then(|c| c.items_per_page)
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_ITEMS_PER_PAGE)
}
