// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use crate::route_table::RouteName;
use crate::routing::route_for;

#[component]
pub fn NotFoundPage() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "not-found-container",
            div { class: "not-found-content",
                h1 { class: "not-found-title", "404" }
                h4 { class: "not-found-subtitle", "Oops! Page Not Found" }
                p { class: "not-found-text",
                    "The page you are looking for doesn't exist or has been moved."
                }
                button {
                    class: "not-found-button",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(route_for(RouteName::Home));
                    },
                    "Take Me Home"
                }
            }
        }
    }
}
