// SPDX-License-Identifier: MIT OR Apache-2.0

//! Top navigation bar: brand, section menu and the sign-in entry point.

mod login_button;
mod logo;
mod menu;

pub use login_button::LoginButton;
pub use logo::Logo;
pub use menu::{Menu, MENU_ITEMS};

use dioxus::prelude::*;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            div { class: "navbar-left",
                Logo {}
            }
            Menu {}
            div { class: "navbar-right",
                LoginButton {}
            }
        }
    }
}
