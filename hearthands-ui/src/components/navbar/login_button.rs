// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use crate::context::use_auth_flag;
use crate::route_table::RouteName;
use crate::routing::route_for;

#[component]
pub fn LoginButton() -> Element {
    if use_auth_flag() {
        return rsx! {
            span { class: "navbar-user", "Signed in" }
        };
    }

    rsx! {
        Link { class: "navbar-login-button", to: route_for(RouteName::Login), "Sign in" }
    }
}
