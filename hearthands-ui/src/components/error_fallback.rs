// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

/// Shown in place of the page tree when a component fails to render.
#[component]
pub fn ErrorFallback(message: String) -> Element {
    rsx! {
        div { class: "error-fallback",
            h1 { "Something went wrong." }
            p { "{message}" }
        }
    }
}
