// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named application paths.
//!
//! Every link, redirect and route definition looks its path up here by
//! [`RouteName`]. Changing where a page lives is a one-line edit.

use std::fmt;

/// Symbolic name of every path the site knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Login,
    Register,
    ResetPassword,
    News,
    NewsDetails,
    Deliveries,
    DeliveryDetails,
    Volunteers,
    VolunteerDetails,
    Error404,
    Admin,
}

impl RouteName {
    pub const ALL: [RouteName; 12] = [
        RouteName::Home,
        RouteName::Login,
        RouteName::Register,
        RouteName::ResetPassword,
        RouteName::News,
        RouteName::NewsDetails,
        RouteName::Deliveries,
        RouteName::DeliveryDetails,
        RouteName::Volunteers,
        RouteName::VolunteerDetails,
        RouteName::Error404,
        RouteName::Admin,
    ];

    /// Absolute path bound to this name.
    pub const fn path(self) -> &'static str {
        match self {
            RouteName::Home => "/",
            RouteName::Login => "/login",
            RouteName::Register => "/register",
            RouteName::ResetPassword => "/resetPassword",
            RouteName::News => "/news",
            RouteName::NewsDetails => "/newsDetails",
            RouteName::Deliveries => "/deliveries",
            RouteName::DeliveryDetails => "/deliveryDetails",
            RouteName::Volunteers => "/volunteers",
            RouteName::VolunteerDetails => "/volunteerDetails",
            RouteName::Error404 => "/404",
            RouteName::Admin => "/admin",
        }
    }

    /// The camelCase key this route is known by in links and configs.
    pub const fn key(self) -> &'static str {
        match self {
            RouteName::Home => "home",
            RouteName::Login => "login",
            RouteName::Register => "register",
            RouteName::ResetPassword => "resetPassword",
            RouteName::News => "news",
            RouteName::NewsDetails => "newsDetails",
            RouteName::Deliveries => "deliveries",
            RouteName::DeliveryDetails => "deliveryDetails",
            RouteName::Volunteers => "volunteers",
            RouteName::VolunteerDetails => "volunteerDetails",
            RouteName::Error404 => "error404",
            RouteName::Admin => "admin",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
