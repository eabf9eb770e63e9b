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

use crate::context::use_auth_flag;
use crate::route_table::RouteName;
use crate::routing::route_for;

const CALLS_TO_ACTION: [(&str, &str, RouteName); 3] = [
    (
        "Latest news",
        "Reports from the field and upcoming drives.",
        RouteName::News,
    ),
    (
        "Volunteer",
        "Find people nearby and offer a few hours of your week.",
        RouteName::Volunteers,
    ),
    (
        "Deliveries",
        "Track food and supply deliveries to families in need.",
        RouteName::Deliveries,
    ),
];

#[component]
pub fn HomePage() -> Element {
    let is_authenticated = use_auth_flag();

    rsx! {
        div { class: "hero-container",
            div { class: "hero-content",
                h1 { class: "hero-title", "HeartHands" }
                p { class: "hero-tagline",
                    "Connecting people who are willing to help with those in need."
                }

                if !is_authenticated {
                    div { class: "hero-auth",
                        Link { class: "btn-primary", to: route_for(RouteName::Login), "Sign in" }
                        Link { class: "btn-secondary", to: route_for(RouteName::Register), "Join as a volunteer" }
                    }
                }

                div { class: "content-separator" }

                div { class: "hero-cards",
                    for (title, blurb, name) in CALLS_TO_ACTION {
                        Link { key: "{name}", class: "hero-card", to: route_for(name),
                            h3 { class: "hero-card-title", "{title}" }
                            p { class: "hero-card-text", "{blurb}" }
                        }
                    }
                }
            }
        }
    }
}
