// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use crate::pages::auth::{FormFeedback, FormStatus};
use crate::route_table::RouteName;
use crate::routing::route_for;
use crate::validation::validate_registration;

#[component]
pub fn RegisterPage() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut status = use_signal(|| FormStatus::Editing);

    let onsubmit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let result =
            validate_registration(&name.read(), &email.read(), &password.read(), &confirm.read());
        match result {
            Ok(()) => {
                log::info!("registration form accepted for {}", email.read().trim());
                status.set(FormStatus::Accepted);
            }
            Err(e) => status.set(FormStatus::Rejected(e)),
        }
    };

    rsx! {
        div { class: "register-page",
            h1 { class: "login-title", "Create an account." }
            p { class: "login-subtitle",
                "Join HeartHands to coordinate deliveries and volunteer shifts."
            }
            form { class: "login-form", onsubmit: onsubmit,
                input {
                    id: "register-name",
                    class: "login-input",
                    r#type: "text",
                    placeholder: "Full name*",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value())
                }
                input {
                    id: "register-email",
                    class: "login-input",
                    r#type: "email",
                    placeholder: "Email*",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value())
                }
                input {
                    id: "register-password",
                    class: "login-input",
                    r#type: "password",
                    placeholder: "Password*",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value())
                }
                input {
                    id: "register-confirm",
                    class: "login-input",
                    r#type: "password",
                    placeholder: "Repeat password*",
                    value: "{confirm}",
                    oninput: move |evt| confirm.set(evt.value())
                }

                FormFeedback {
                    status: *status.read(),
                    accepted: "Your details look good."
                }

                button { r#type: "submit", class: "login-button", "Sign up" }
            }
            p { class: "login-register",
                "Already have an account? "
                Link { to: route_for(RouteName::Login), "Sign in" }
            }
        }
    }
}
