// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use crate::route_table::RouteName;
use crate::routing::route_for;

#[component]
pub fn Logo() -> Element {
    rsx! {
        Link { class: "navbar-logo", to: route_for(RouteName::Home),
            img { src: "/assets/small-logo.png", alt: "Logo", class: "navbar-logo-icon" }
            span { class: "navbar-logo-text", "HeartHands" }
        }
    }
}
