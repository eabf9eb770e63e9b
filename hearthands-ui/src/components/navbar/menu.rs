// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use crate::route_table::RouteName;
use crate::routing::route_for;

pub const MENU_ITEMS: [(&str, RouteName); 4] = [
    ("Home", RouteName::Home),
    ("News", RouteName::News),
    ("Volunteers", RouteName::Volunteers),
    ("Deliveries", RouteName::Deliveries),
];

/// Section links, collapsed behind a toggle on narrow screens.
#[component]
pub fn Menu() -> Element {
    let mut is_open = use_signal(|| false);

    rsx! {
        div { class: "menu-container",
            button {
                class: "menu-toggle",
                r#type: "button",
                aria_label: "Toggle navigation",
                aria_expanded: "{is_open}",
                onclick: move |_| {
                    let open = !*is_open.read();
                    is_open.set(open);
                },
                svg {
                    width: "24",
                    height: "24",
                    view_box: "0 0 24 24",
                    fill: "currentColor",
                    path { d: "M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z" }
                }
            }
            ul { class: if *is_open.read() { "menu open" } else { "menu" },
                for (label, name) in MENU_ITEMS {
                    li { key: "{name}", class: "menu-item",
                        Link {
                            to: route_for(name),
                            onclick: move |_| is_open.set(false),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
