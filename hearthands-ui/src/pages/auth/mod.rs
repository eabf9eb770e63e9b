// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sign-in, registration and password reset forms.
//!
//! All three live under the auth-only gate: a visitor who already holds a
//! session token is sent home before any of them renders.

mod login;
mod register;
mod reset_password;

pub use login::{LoginPage, REMEMBER_ME_KEY};
pub use register::RegisterPage;
pub use reset_password::ResetPasswordPage;

use dioxus::prelude::*;

use crate::validation::FormError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Accepted,
    Rejected(FormError),
}

/// Inline outcome of the last submit.
#[component]
pub fn FormFeedback(status: FormStatus, accepted: String) -> Element {
    match status {
        FormStatus::Editing => rsx! {},
        FormStatus::Accepted => rsx! {
            p { class: "form-success", role: "status", "{accepted}" }
        },
        FormStatus::Rejected(e) => rsx! {
            p { class: "form-error", role: "alert", "{e}" }
        },
    }
}
