// SPDX-License-Identifier: MIT OR Apache-2.0

//! Access gates wrapping the auth-only and protected route subtrees.
//!
//! The decision itself ([`GateKind::decide`]) is a pure function of the
//! authentication flag. The layout components below only turn that decision
//! into either the nested [`Outlet`] or a `replace` navigation.

use std::fmt;

use dioxus::prelude::*;

use crate::context::use_auth_flag;
use crate::route_table::RouteName;
use crate::routing::{route_for, Route};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateKind {
    /// Only reachable while signed out (login, register, reset password).
    AuthOnly,
    /// Only reachable while signed in.
    Protected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Render whatever nested route the router selected.
    Outlet,
    Redirect(RouteName),
}

impl GateKind {
    pub fn decide(self, is_authenticated: bool) -> GateDecision {
        match (self, is_authenticated) {
            (GateKind::AuthOnly, true) => GateDecision::Redirect(RouteName::Home),
            (GateKind::AuthOnly, false) => GateDecision::Outlet,
            (GateKind::Protected, true) => GateDecision::Outlet,
            (GateKind::Protected, false) => GateDecision::Redirect(RouteName::Login),
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateKind::AuthOnly => f.write_str("auth-only"),
            GateKind::Protected => f.write_str("protected"),
        }
    }
}

/// The router has no synchronous redirect, so the redirect runs from an
/// effect right after the first render, which shows nothing.
fn render_gate(kind: GateKind) -> Element {
    let is_authenticated = use_auth_flag();
    let navigator = use_navigator();
    let decision = kind.decide(is_authenticated);

    use_effect(move || {
        if let GateDecision::Redirect(target) = decision {
            log::info!("{kind} gate redirecting to {}", target.path());
            navigator.replace(route_for(target));
        }
    });

    match decision {
        GateDecision::Outlet => rsx! { Outlet::<Route> {} },
        GateDecision::Redirect(_) => rsx! {},
    }
}

/// Layout for pages a signed-in user has no business seeing.
#[component]
pub fn AuthOnlyGate() -> Element {
    render_gate(GateKind::AuthOnly)
}

/// Layout for pages that require a session token.
#[component]
pub fn ProtectedGate() -> Element {
    render_gate(GateKind::Protected)
}
