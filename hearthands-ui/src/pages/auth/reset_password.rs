// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use crate::pages::auth::{FormFeedback, FormStatus};
use crate::route_table::RouteName;
use crate::routing::route_for;
use crate::validation::validate_reset;

#[component]
pub fn ResetPasswordPage() -> Element {
    let mut email = use_signal(String::new);
    let mut status = use_signal(|| FormStatus::Editing);

    let onsubmit = move |evt: Event<FormData>| {
        evt.prevent_default();
        match validate_reset(&email.read()) {
            Ok(()) => status.set(FormStatus::Accepted),
            Err(e) => status.set(FormStatus::Rejected(e)),
        }
    };

    rsx! {
        div { class: "reset-page",
            h1 { class: "login-title", "Forgot your password?" }
            p { class: "login-subtitle",
                "Enter the email you registered with and we will send you a reset link."
            }
            form { class: "login-form", onsubmit: onsubmit,
                input {
                    id: "reset-email",
                    class: "login-input",
                    r#type: "email",
                    placeholder: "Email*",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value())
                }

                FormFeedback {
                    status: *status.read(),
                    accepted: "That address looks good."
                }

                button { r#type: "submit", class: "login-button", "Send reset link" }
            }
            p { class: "login-register",
                Link { to: route_for(RouteName::Login), "Back to sign in" }
            }
        }
    }
}
