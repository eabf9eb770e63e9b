// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use crate::route_table::RouteName;
use crate::routing::route_for;

#[component]
pub fn VolunteerListPage() -> Element {
    rsx! {
        section { class: "volunteers-page",
            h1 { class: "page-title", "Volunteers" }
            p { class: "page-placeholder", "People offering their time will be listed here." }
            Link { to: route_for(RouteName::VolunteerDetails), "View a volunteer" }
        }
    }
}

#[component]
pub fn VolunteerDetailsPage() -> Element {
    rsx! {
        section { class: "volunteer-details-page",
            h1 { class: "page-title", "Volunteer details" }
            p { class: "page-placeholder", "Availability and contact details for one volunteer." }
            Link { to: route_for(RouteName::Volunteers), "Back to volunteers" }
        }
    }
}
