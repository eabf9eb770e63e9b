// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Integration tests for the news list: fetch, pagination and the error path.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{
    alerts, cleanup, click, create_mount_point, fetched_urls, inject_app_config,
    inject_app_config_with, mock_alert, mock_fetch_news, mock_fetch_status, push_url,
    remove_app_config, render_into, restore_alert, restore_fetch, text_of, wait_for, yield_now,
};
use wasm_bindgen_test::*;

use dioxus::prelude::*;
use hearthands_ui::AppRouter;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn news_app() -> Element {
    rsx! {
        AppRouter { is_authenticated: true }
    }
}

fn item_count(mount: &web_sys::Element) -> u32 {
    mount.query_selector_all(".news-item").unwrap().length()
}

#[wasm_bindgen_test]
async fn news_list_fetches_from_configured_base_url() {
    push_url("/news");
    inject_app_config();
    mock_fetch_news(3);

    let mount = create_mount_point();
    render_into(&mount, news_app);
    assert!(wait_for(&mount, ".news-list").await, "news list never rendered");

    assert_eq!(item_count(&mount), 3);
    assert!(text_of(&mount).contains("Story 1"));
    // Trailing slash on apiBaseUrl is dropped before joining.
    assert_eq!(
        fetched_urls(),
        vec!["http://test:8080/api/v1/public/news".to_string()]
    );
    // Three items fit on one page.
    assert!(mount.query_selector(".pagination").unwrap().is_none());

    cleanup(&mount);
    restore_fetch();
    remove_app_config();
}

#[wasm_bindgen_test]
async fn news_list_paginates_client_side() {
    push_url("/news");
    inject_app_config_with(2);
    mock_fetch_news(3);

    let mount = create_mount_point();
    render_into(&mount, news_app);
    assert!(wait_for(&mount, ".pagination").await, "pagination never rendered");

    assert_eq!(item_count(&mount), 2);
    assert!(text_of(&mount).contains("Page 1 of 2"));

    click(&mount, ".pagination-next");
    yield_now().await;
    assert_eq!(item_count(&mount), 1);
    assert!(text_of(&mount).contains("Page 2 of 2"));
    assert!(text_of(&mount).contains("Story 3"));

    // Already on the last page.
    click(&mount, ".pagination-next");
    yield_now().await;
    assert!(text_of(&mount).contains("Page 2 of 2"));

    click(&mount, ".pagination-prev");
    yield_now().await;
    assert!(text_of(&mount).contains("Page 1 of 2"));

    cleanup(&mount);
    restore_fetch();
    remove_app_config();
}

#[wasm_bindgen_test]
async fn news_list_shows_empty_state() {
    push_url("/news");
    inject_app_config();
    mock_fetch_news(0);

    let mount = create_mount_point();
    render_into(&mount, news_app);
    assert!(wait_for(&mount, ".news-empty").await);
    assert!(text_of(&mount).contains("No news yet"));

    cleanup(&mount);
    restore_fetch();
    remove_app_config();
}

async fn assert_failure_shown_inline(status: u16) {
    push_url("/news");
    inject_app_config();
    mock_fetch_status(status);
    mock_alert();

    let mount = create_mount_point();
    render_into(&mount, news_app);
    assert!(
        wait_for(&mount, ".news-error").await,
        "error state never rendered for {status}"
    );
    yield_now().await;

    assert!(text_of(&mount)
        .contains("Something went wrong with the server. Please try again later."));
    assert!(alerts().is_empty(), "failed fetch must not raise an alert");
    assert_eq!(item_count(&mount), 0);

    cleanup(&mount);
    restore_alert();
    restore_fetch();
    remove_app_config();
}

#[wasm_bindgen_test]
async fn server_error_is_shown_inline_without_alert() {
    assert_failure_shown_inline(500).await;
}

#[wasm_bindgen_test]
async fn missing_list_endpoint_is_shown_inline_without_alert() {
    // A backend with no GET mapping on the list path answers 405.
    assert_failure_shown_inline(405).await;
}
