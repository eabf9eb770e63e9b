// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use crate::route_table::RouteName;
use crate::routing::route_for;

#[component]
pub fn DeliveryListPage() -> Element {
    rsx! {
        section { class: "deliveries-page",
            h1 { class: "page-title", "Deliveries" }
            p { class: "page-placeholder", "Upcoming deliveries will be listed here." }
            Link { to: route_for(RouteName::DeliveryDetails), "View a delivery" }
        }
    }
}

#[component]
pub fn DeliveryDetailsPage() -> Element {
    rsx! {
        section { class: "delivery-details-page",
            h1 { class: "page-title", "Delivery details" }
            p { class: "page-placeholder", "Route, recipients and status for a single delivery." }
            Link { to: route_for(RouteName::Deliveries), "Back to deliveries" }
        }
    }
}
