// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use crate::route_table::RouteName;
use crate::routing::route_for;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LinkTarget {
    /// A page of this site, routed client-side.
    Page(RouteName),
    External(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterLink {
    pub text: &'static str,
    pub target: LinkTarget,
}

impl FooterLink {
    pub const fn page(text: &'static str, name: RouteName) -> Self {
        Self {
            text,
            target: LinkTarget::Page(name),
        }
    }

    pub const fn external(text: &'static str, href: &'static str) -> Self {
        Self {
            text,
            target: LinkTarget::External(href),
        }
    }
}

#[component]
pub fn Links(heading: String, links: Vec<FooterLink>) -> Element {
    rsx! {
        div { class: "footer-section",
            h2 { class: "footer-heading", "{heading}" }
            ul { class: "footer-links",
                for link in links {
                    li { key: "{link.text}",
                        match link.target {
                            LinkTarget::Page(name) => rsx! {
                                Link { to: route_for(name), "{link.text}" }
                            },
                            LinkTarget::External(href) => rsx! {
                                a { href: "{href}", target: "_blank", rel: "noopener noreferrer", "{link.text}" }
                            },
                        }
                    }
                }
            }
        }
    }
}
