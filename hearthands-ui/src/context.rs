// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context providers for the application
//!
//! This module centralises shared state that needs to be accessed across
//! the component tree through Dioxus's context system, plus the
//! `localStorage` helpers that seed it.

use dioxus::prelude::*;

/// Whether a session token was present when the router mounted.
///
/// Provided once by [`AppRouter`](crate::AppRouter) and never updated: a
/// sign-in or sign-out only takes effect after the app is mounted again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AuthFlag(pub bool);

/// Read the flag from context. Missing context reads as signed out.
pub fn use_auth_flag() -> bool {
    try_use_context::<AuthFlag>()
        .map(|flag| flag.0)
        .unwrap_or_default()
}

// -----------------------------------------------------------------------------
// Local-storage helpers
// -----------------------------------------------------------------------------

pub const AUTH_TOKEN_KEY: &str = "authToken";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Raw string stored under `key`, if any.
pub fn read_item(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

pub fn write_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("failed to persist {key}: {e:?}");
        }
    }
}

pub fn is_token_present(token: Option<&str>) -> bool {
    token.is_some_and(|t| !t.is_empty())
}

/// `true` iff a non-empty session token is stored under [`AUTH_TOKEN_KEY`].
pub fn load_auth_flag() -> bool {
    is_token_present(read_item(AUTH_TOKEN_KEY).as_deref())
}
