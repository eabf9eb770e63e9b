// SPDX-License-Identifier: MIT OR Apache-2.0

//! hearthands-ui library root.
//!
//! Re-exports public modules so that integration tests (under `tests/`) can
//! mount the router and pages. The binary entry-point lives in `main.rs`.

pub mod components;
pub mod constants;
pub mod context;
pub mod error;
pub mod gates;
pub mod hooks;
pub mod pages;
pub mod route_table;
pub mod routing;
pub mod types;
pub mod validation;

use dioxus::prelude::*;

use crate::components::config_error::ConfigError;
use crate::components::error_fallback::ErrorFallback;
use crate::constants::app_config;
use crate::context::{load_auth_flag, AuthFlag};
use crate::error::{report_error, AppError};
use crate::routing::Route;

/// Router with the authentication flag fixed for its lifetime.
#[component]
pub fn AppRouter(is_authenticated: bool) -> Element {
    use_context_provider(|| AuthFlag(is_authenticated));

    rsx! {
        ErrorBoundary {
            handle_error: |errors: ErrorContext| {
                let message = errors
                    .error()
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                report_error(&AppError::Generic(message.clone()));
                rsx! {
                    ErrorFallback { message }
                }
            },
            Router::<Route> {}
        }
    }
}

/// App root component
#[component]
pub fn App() -> Element {
    // Sampled once; later storage changes need a remount.
    let is_authenticated = use_hook(load_auth_flag);

    if let Err(e) = app_config() {
        return rsx! {
            ConfigError { message: e }
        };
    }

    rsx! {
        AppRouter { is_authenticated }
    }
}
