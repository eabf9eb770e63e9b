// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application route definitions.
//!
//! The `Route` enum is the route tree: one public leaf, an auth-only subtree,
//! a protected subtree and a catch-all. Paths in the `#[route]` attributes
//! mirror [`RouteName::path`]; the tests below keep the two in lockstep.

use dioxus::prelude::*;

use crate::components::site_layout::SiteLayout;
use crate::gates::{AuthOnlyGate, GateDecision, GateKind, ProtectedGate};
use crate::pages::auth::{LoginPage, RegisterPage, ResetPasswordPage};
use crate::pages::deliveries::{DeliveryDetailsPage, DeliveryListPage};
use crate::pages::home::HomePage;
use crate::pages::news::{NewsDetailsPage, NewsListPage};
use crate::pages::not_found::NotFoundPage;
use crate::pages::volunteers::{VolunteerDetailsPage, VolunteerListPage};
use crate::route_table::RouteName;

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        HomePage {},

        #[layout(AuthOnlyGate)]
            #[route("/login")]
            LoginPage {},
            #[route("/register")]
            RegisterPage {},
            #[route("/resetPassword")]
            ResetPasswordPage {},
        #[end_layout]

        #[layout(ProtectedGate)]
            #[route("/news")]
            NewsListPage {},
            #[route("/newsDetails")]
            NewsDetailsPage {},
            #[route("/deliveries")]
            DeliveryListPage {},
            #[route("/deliveryDetails")]
            DeliveryDetailsPage {},
            #[route("/volunteers")]
            VolunteerListPage {},
            #[route("/volunteerDetails")]
            VolunteerDetailsPage {},
        #[end_layout]
    #[end_layout]

    #[route("/404", NotFoundPage)]
    Error404 {},
    #[route("/:..segments", UnknownPath)]
    NotFound { segments: Vec<String> },
}

/// Catch-all wrapper that drops the unmatched segments and shows the 404 page.
#[component]
fn UnknownPath(segments: Vec<String>) -> Element {
    log::debug!("no route for /{}", segments.join("/"));
    rsx! { NotFoundPage {} }
}

impl Route {
    /// The gate guarding this route, if any.
    pub fn gate(&self) -> Option<GateKind> {
        match self {
            Route::LoginPage {} | Route::RegisterPage {} | Route::ResetPasswordPage {} => {
                Some(GateKind::AuthOnly)
            }
            Route::NewsListPage {}
            | Route::NewsDetailsPage {}
            | Route::DeliveryListPage {}
            | Route::DeliveryDetailsPage {}
            | Route::VolunteerListPage {}
            | Route::VolunteerDetailsPage {} => Some(GateKind::Protected),
            Route::HomePage {} | Route::Error404 {} | Route::NotFound { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::Error404 {} | Route::NotFound { .. })
    }
}

/// Build the typed route for a named path.
///
/// Names without a page of their own (such as `admin`) land on the
/// catch-all, so the result always renders something.
pub fn route_for(name: RouteName) -> Route {
    name.path()
        .parse()
        .unwrap_or_else(|_| Route::NotFound { segments: Vec::new() })
}

/// Outcome of matching a path against the route tree, before any gate runs.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteMatch {
    Public(Route),
    Gated(GateKind, Route),
    Unmatched(Route),
}

pub fn match_path(path: &str) -> RouteMatch {
    let route = path.parse::<Route>().unwrap_or_else(|_| Route::NotFound {
        segments: path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    });

    match route.gate() {
        Some(kind) => RouteMatch::Gated(kind, route),
        None if matches!(route, Route::NotFound { .. }) => RouteMatch::Unmatched(route),
        None => RouteMatch::Public(route),
    }
}

/// What a navigation to a path ends up doing.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    Render(Route),
    Redirect(RouteName),
}

/// Resolve a path the same way the mounted router does.
pub fn resolve(path: &str, is_authenticated: bool) -> Resolution {
    match match_path(path) {
        RouteMatch::Public(route) | RouteMatch::Unmatched(route) => Resolution::Render(route),
        RouteMatch::Gated(kind, route) => match kind.decide(is_authenticated) {
            GateDecision::Outlet => Resolution::Render(route),
            GateDecision::Redirect(target) => Resolution::Redirect(target),
        },
    }
}
