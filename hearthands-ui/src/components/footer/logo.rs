// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use crate::constants::contact_email;

#[component]
pub fn Logo() -> Element {
    let email = contact_email();

    rsx! {
        div { class: "footer-section footer-about",
            img { src: "/assets/big-logo.png", alt: "Logo", class: "footer-logo" }
            p { class: "footer-description",
                "Our mission is to connect people who are willing to help with those in need. "
                "We provide opportunities to volunteer, help communities and make the world a better place "
                a { href: "mailto:{email}", "{email}" }
                "."
            }
        }
    }
}
