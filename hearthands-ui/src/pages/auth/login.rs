/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Sign-in page.
//!
//! Collects credentials and validates them client-side. Exchanging them for a
//! session token is the job of the auth service; this page never writes the
//! token itself.

use dioxus::prelude::*;

use crate::hooks::use_local_storage;
use crate::pages::auth::{FormFeedback, FormStatus};
use crate::route_table::RouteName;
use crate::routing::route_for;
use crate::validation::validate_login;

pub const REMEMBER_ME_KEY: &str = "rememberMe";

#[component]
pub fn LoginPage() -> Element {
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember_me = use_local_storage(REMEMBER_ME_KEY, || false);
    let mut status = use_signal(|| FormStatus::Editing);

    let onsubmit = move |evt: Event<FormData>| {
        evt.prevent_default();
        match validate_login(&email.read(), &phone.read(), &password.read()) {
            Ok(()) => {
                log::info!("sign-in form accepted for {}", email.read().trim());
                status.set(FormStatus::Accepted);
            }
            Err(e) => status.set(FormStatus::Rejected(e)),
        }
    };

    rsx! {
        div { class: "login-page",
            div { class: "login",
                div { class: "login-left",
                    h1 { class: "login-title", "Welcome back." }
                    p { class: "login-subtitle",
                        "We are happy to see you again! Please enter your login details to access "
                        "your account and pick up where you left off so that there are fewer hungry "
                        "people in the world!"
                    }
                }
                div { class: "login-right",
                    h1 { class: "login-title", "Sign in." }
                    form { class: "login-form", onsubmit: onsubmit,
                        input {
                            id: "login-email",
                            class: "login-input",
                            r#type: "email",
                            placeholder: "Email*",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value())
                        }
                        input {
                            id: "login-phone",
                            class: "login-input",
                            r#type: "tel",
                            placeholder: "Phone number*",
                            value: "{phone}",
                            oninput: move |evt| phone.set(evt.value())
                        }
                        input {
                            id: "login-password",
                            class: "login-input",
                            r#type: "password",
                            placeholder: "Password*",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value())
                        }

                        div { class: "login-options",
                            label { class: "checkbox-label",
                                input {
                                    id: "login-remember",
                                    class: "checkbox",
                                    r#type: "checkbox",
                                    checked: remember_me.get(),
                                    onchange: move |evt| remember_me.set(evt.checked())
                                }
                                span { class: "checkbox-text", "Remember me" }
                            }
                            Link { class: "reset-pass", to: route_for(RouteName::ResetPassword),
                                span { "Forgot password?" }
                            }
                        }

                        FormFeedback {
                            status: *status.read(),
                            accepted: "Your details look good."
                        }

                        button { r#type: "submit", class: "login-button", "Sign in now" }
                    }

                    p { class: "login-register",
                        "Don't have an account? "
                        Link { to: route_for(RouteName::Register), "Register" }
                    }
                    p { class: "login-desc",
                        "By clicking on \"Sign in now\" you agree to "
                        br {}
                        a { href: "#", "Terms of Service" }
                        " | "
                        a { href: "#", "Privacy Policy" }
                    }
                }
            }
        }
    }
}
