// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for hearthands-ui browser tests.
//
// Provides mount/cleanup helpers, runtime config injection, URL and
// storage setup, and fetch/alert mocks so that individual test files
// stay focused on assertions rather than boilerplate.
#![allow(dead_code)]

use dioxus::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Text of the whole mount point.
pub fn text_of(mount: &web_sys::Element) -> String {
    mount.text_content().unwrap_or_default()
}

/// Click the first element matching `selector`.
pub fn click(mount: &web_sys::Element, selector: &str) {
    use wasm_bindgen::JsCast;
    let el = mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} not found"));
    el.unchecked_into::<web_sys::HtmlElement>().click();
}

// ---------------------------------------------------------------------------
// Dioxus rendering helper
// ---------------------------------------------------------------------------

/// Render a Dioxus component into the given mount element.
///
/// ```ignore
/// let mount = create_mount_point();
/// render_into(&mount, signed_out_app);
/// yield_now().await;
/// // assert on mount.query_selector(...)
/// cleanup(&mount);
/// ```
pub fn render_into(mount: &web_sys::Element, root: fn() -> Element) {
    let cfg = dioxus::web::Config::new().rootelement(mount.clone());
    dioxus::web::launch::launch_virtual_dom(VirtualDom::new(root), cfg);
}

async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        gloo_utils::window()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Yield two animation frames so Dioxus can apply its pending mutations.
pub async fn yield_now() {
    next_frame().await;
    next_frame().await;
}

/// Yield frames until `selector` matches inside `mount`, up to a bound.
/// Needed when the render depends on a fetch or a redirect effect.
pub async fn wait_for(mount: &web_sys::Element, selector: &str) -> bool {
    for _ in 0..60 {
        if mount.query_selector(selector).unwrap().is_some() {
            return true;
        }
        next_frame().await;
    }
    false
}

// ---------------------------------------------------------------------------
// URL helpers
// ---------------------------------------------------------------------------

/// Push `path` onto the history stack so the next Router mounts there.
pub fn push_url(path: &str) {
    gloo_utils::window()
        .history()
        .unwrap()
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .unwrap();
}

pub fn current_path() -> String {
    gloo_utils::window().location().pathname().unwrap()
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` with the given page size.
pub fn inject_app_config_with(items_per_page: u32) {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("apiBaseUrl", &"http://test:8080/".into());
    set("contactEmail", &"help@hearthands.test".into());
    set("itemsPerPage", &JsValue::from(items_per_page));

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

pub fn inject_app_config() {
    inject_app_config_with(10);
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}

// ---------------------------------------------------------------------------
// Storage helpers
// ---------------------------------------------------------------------------

fn storage() -> web_sys::Storage {
    gloo_utils::window().local_storage().unwrap().unwrap()
}

pub fn set_item(key: &str, value: &str) {
    storage().set_item(key, value).unwrap();
}

pub fn get_item(key: &str) -> Option<String> {
    storage().get_item(key).unwrap()
}

pub fn remove_item(key: &str) {
    storage().remove_item(key).unwrap();
}

pub fn set_token(token: &str) {
    set_item("authToken", token);
}

pub fn clear_token() {
    remove_item("authToken");
}

// ---------------------------------------------------------------------------
// Fetch mocking
// ---------------------------------------------------------------------------

/// Answer every fetch with a news envelope holding `count` items.
pub fn mock_fetch_news(count: u32) {
    js_sys::eval(&format!(
        r#"
        window.__original_fetch = window.__original_fetch || window.fetch;
        window.__fetched_urls = [];
        window.fetch = function(input) {{
            var url = typeof input === 'string' ? input : input.url;
            window.__fetched_urls.push(url);
            var data = [];
            for (var i = 1; i <= {count}; i++) {{
                data.push({{
                    id: i,
                    title: 'Story ' + i,
                    content: 'Body of story ' + i,
                    createdAt: 1700000000000,
                    featuredImage: null,
                    additionalImages: []
                }});
            }}
            var resp = new Response(JSON.stringify({{
                timestamp: '2024-01-01T00:00:00',
                success: true,
                message: null,
                data: data
            }}), {{
                status: 200,
                headers: {{ 'Content-Type': 'application/json' }}
            }});
            Object.defineProperty(resp, 'url', {{ value: url }});
            return Promise.resolve(resp);
        }};
        "#
    ))
    .expect("failed to mock fetch with news");
}

/// Answer every fetch with a plain-text body and the given status.
pub fn mock_fetch_status(status: u16) {
    js_sys::eval(&format!(
        r#"
        window.__original_fetch = window.__original_fetch || window.fetch;
        window.__fetched_urls = [];
        window.fetch = function(input) {{
            var url = typeof input === 'string' ? input : input.url;
            window.__fetched_urls.push(url);
            var resp = new Response('request failed', {{
                status: {status},
                headers: {{ 'Content-Type': 'text/plain' }}
            }});
            Object.defineProperty(resp, 'url', {{ value: url }});
            return Promise.resolve(resp);
        }};
        "#
    ))
    .expect("failed to mock fetch status");
}

pub fn restore_fetch() {
    js_sys::eval(
        r#"
        if (window.__original_fetch) {
            window.fetch = window.__original_fetch;
            delete window.__original_fetch;
        }
        "#,
    )
    .expect("failed to restore fetch");
}

/// URLs requested since the last fetch mock was installed.
pub fn fetched_urls() -> Vec<String> {
    let urls = js_sys::eval("window.__fetched_urls || []").unwrap();
    js_sys::Array::from(&urls)
        .iter()
        .filter_map(|v| v.as_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Alert mocking
// ---------------------------------------------------------------------------

/// Replace `window.alert` with a recorder so tests don't block.
pub fn mock_alert() {
    js_sys::eval(
        r#"
        window.__original_alert = window.__original_alert || window.alert;
        window.__alerts = [];
        window.alert = function(msg) { window.__alerts.push(String(msg)); };
        "#,
    )
    .expect("failed to mock alert");
}

pub fn alerts() -> Vec<String> {
    let recorded = js_sys::eval("window.__alerts || []").unwrap();
    js_sys::Array::from(&recorded)
        .iter()
        .filter_map(|v| v.as_string())
        .collect()
}

pub fn restore_alert() {
    js_sys::eval(
        r#"
        if (window.__original_alert) {
            window.alert = window.__original_alert;
            delete window.__original_alert;
        }
        "#,
    )
    .expect("failed to restore alert");
}
