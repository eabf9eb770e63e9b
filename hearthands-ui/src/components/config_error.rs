/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

use dioxus::prelude::*;

#[component]
pub fn ConfigError(message: String) -> Element {
    rsx! {
        div { class: "error-container",
            p { class: "error-message", "{message}" }
            p {
                "The page expects a "
                code { "window.__APP_CONFIG" }
                " object with at least "
                code { "apiBaseUrl" }
                " set before the app bundle loads."
            }
        }
    }
}
