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
 */

//! Application-wide error type.
//!
//! Every failure a page can surface is one of three kinds. Pages show
//! [`AppError::user_message`] inline and hand the error to [`report_error`].

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// The server answered with a non-success status.
    #[error("API error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        details: Option<String>,
    },

    /// A failure with a readable message (network, decoding, JS `Error`).
    #[error("{0}")]
    Generic(String),

    /// Something was thrown that carries no usable message.
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl AppError {
    /// Build an [`AppError::Api`] from a failed response.
    pub fn from_status(status: u16, reason: Option<&str>, details: Option<String>) -> Self {
        AppError::Api {
            status,
            message: reason.unwrap_or("Unknown status").to_string(),
            details: details.filter(|d| !d.is_empty()),
        }
    }

    /// Classify a value thrown from JS land.
    pub fn from_js(value: JsValue) -> Self {
        match value.dyn_into::<js_sys::Error>() {
            Ok(err) => AppError::Generic(String::from(err.message())),
            Err(other) => AppError::Unknown(
                other
                    .as_string()
                    .unwrap_or_else(|| format!("{other:?}")),
            ),
        }
    }

    /// Text shown to the user for this kind of failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Api { .. } => "Something went wrong with the server. Please try again later.",
            AppError::Generic(_) => "An unexpected error occurred. Please try again.",
            AppError::Unknown(_) => "An unknown error occurred. Please contact support.",
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Generic(e.to_string())
    }
}

/// Log the error at `error` level with its kind-specific detail.
pub fn report_error(error: &AppError) {
    match error {
        AppError::Api {
            status,
            message,
            details,
        } => {
            log::error!("API Error: {status} - {message}");
            if let Some(details) = details {
                log::error!("Details: {details}");
            }
        }
        AppError::Generic(message) => log::error!("General Error: {message}"),
        AppError::Unknown(value) => log::error!("Unknown error: {value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_per_kind() {
        let api = AppError::from_status(503, Some("Service Unavailable"), None);
        assert_eq!(
            api.user_message(),
            "Something went wrong with the server. Please try again later."
        );
        assert_eq!(
            AppError::Generic("boom".into()).user_message(),
            "An unexpected error occurred. Please try again."
        );
        assert_eq!(
            AppError::Unknown("42".into()).user_message(),
            "An unknown error occurred. Please contact support."
        );
    }

    #[test]
    fn from_status_keeps_payload() {
        let err = AppError::from_status(404, None, Some(String::new()));
        assert_eq!(
            err,
            AppError::Api {
                status: 404,
                message: "Unknown status".to_string(),
                details: None,
            }
        );
        assert_eq!(err.to_string(), "API error 404: Unknown status");
    }
}
