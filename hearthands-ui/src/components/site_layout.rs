// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::routing::Route;

/// Navbar and footer around every routed page except the 404 screen.
#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        div { class: "site",
            Navbar {}
            main { class: "site-content",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
