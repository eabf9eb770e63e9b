/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use dioxus::prelude::*;
use wasm_bindgen::JsValue;

use crate::constants::{items_per_page, news_url};
use crate::error::report_error;
use crate::hooks::{use_fetch, use_pagination, FetchState};
use crate::route_table::RouteName;
use crate::routing::route_for;
use crate::types::{NewsItem, RestResponse};

const EXCERPT_CHARS: usize = 160;

fn format_date(created_at_ms: i64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(created_at_ms as f64));
    String::from(date.to_locale_date_string("en-US", &JsValue::UNDEFINED))
}

#[component]
pub fn NewsListPage() -> Element {
    let news = use_fetch::<RestResponse<Vec<NewsItem>>>(news_url().unwrap_or_default());
    let mut reported = use_signal(|| false);

    // Shown inline and logged once.
    use_effect(move || {
        if let FetchState::Failed(e) = &*news.read() {
            if !*reported.peek() {
                reported.set(true);
                report_error(e);
            }
        }
    });

    let items: Vec<NewsItem> = match &*news.read() {
        FetchState::Success(body) => body.data.clone().unwrap_or_default(),
        _ => Vec::new(),
    };
    let mut pager = use_pagination(items.len(), items_per_page());
    let page_items = items[pager.item_range(items.len())].to_vec();

    rsx! {
        section { class: "news-page",
            h1 { class: "page-title", "News" }

            match &*news.read() {
                FetchState::Loading => rsx! {
                    div { class: "news-loading",
                        span { class: "loading-spinner" }
                        "Loading news..."
                    }
                },
                FetchState::Failed(e) => rsx! {
                    div { class: "news-error", role: "alert", "{e.user_message()}" }
                },
                FetchState::Success(_) if items.is_empty() => rsx! {
                    div { class: "news-empty", "No news yet" }
                },
                FetchState::Success(_) => rsx! {
                    ul { class: "news-list",
                        for item in page_items {
                            li { key: "{item.id}", class: "news-item",
                                if let Some(src) = item.featured_image.clone() {
                                    img { class: "news-item-image", src: "{src}", alt: "{item.title}" }
                                }
                                h3 { class: "news-item-title", "{item.title}" }
                                p { class: "news-item-date", "{format_date(item.created_at)}" }
                                p { class: "news-item-excerpt", "{item.excerpt(EXCERPT_CHARS)}" }
                                Link { class: "news-item-more", to: route_for(RouteName::NewsDetails), "Read more" }
                            }
                        }
                    }
                    if pager.total_pages() > 1 {
                        div { class: "pagination",
                            button {
                                class: "pagination-prev",
                                r#type: "button",
                                disabled: !pager.has_prev(),
                                onclick: move |_| pager.prev_page(),
                                "Previous"
                            }
                            span { class: "pagination-status",
                                "Page {pager.current_page()} of {pager.total_pages()}"
                            }
                            button {
                                class: "pagination-next",
                                r#type: "button",
                                disabled: !pager.has_next(),
                                onclick: move |_| pager.next_page(),
                                "Next"
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
pub fn NewsDetailsPage() -> Element {
    rsx! {
        section { class: "news-details-page",
            h1 { class: "page-title", "News details" }
            p { class: "page-placeholder", "The full story will appear here." }
            Link { to: route_for(RouteName::News), "Back to news" }
        }
    }
}
