// SPDX-License-Identifier: MIT OR Apache-2.0

mod links;
mod logo;

pub use links::{FooterLink, LinkTarget, Links};
pub use logo::Logo;

use dioxus::prelude::*;

use crate::route_table::RouteName;

pub const NAVIGATION_LINKS: [FooterLink; 4] = [
    FooterLink::page("Home", RouteName::Home),
    FooterLink::page("News", RouteName::News),
    FooterLink::page("Volunteers", RouteName::Volunteers),
    FooterLink::page("Deliveries", RouteName::Deliveries),
];

pub const SUPPORT_LINKS: [FooterLink; 2] = [
    FooterLink::external("Buymeacoffee", "https://www.buymeacoffee.com"),
    FooterLink::external("Monobank", "https://send.monobank.ua"),
];

pub const SOCIAL_LINKS: [FooterLink; 3] = [
    FooterLink::external("Telegram", "https://t.me"),
    FooterLink::external("YouTube", "https://www.youtube.com"),
    FooterLink::external("Instagram", "https://www.instagram.com"),
];

pub const ACCOUNT_LINKS: [FooterLink; 2] = [
    FooterLink::page("Sign in", RouteName::Login),
    FooterLink::page("Sign up", RouteName::Register),
];

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            Logo {}
            Links { heading: "Navigation", links: NAVIGATION_LINKS.to_vec() }
            Links { heading: "Support", links: SUPPORT_LINKS.to_vec() }
            Links { heading: "Social media", links: SOCIAL_LINKS.to_vec() }
            Links { heading: "Account", links: ACCOUNT_LINKS.to_vec() }
        }
    }
}
