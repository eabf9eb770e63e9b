// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot JSON fetch bound to a component's lifetime.

use dioxus::prelude::*;
use serde::de::DeserializeOwned;

use crate::error::AppError;

#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Failed(AppError),
}

/// GET `url` and decode the body as `T`. Non-2xx statuses become
/// [`AppError::Api`] carrying the response text as details.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, AppError> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        let details = response.text().await.ok();
        return Err(AppError::from_status(
            status.as_u16(),
            status.canonical_reason(),
            details,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Fetch `url` once on mount. Failures are kept in the state for the caller
/// to surface.
pub fn use_fetch<T>(url: String) -> Signal<FetchState<T>>
where
    T: DeserializeOwned + 'static,
{
    let mut state = use_signal(|| FetchState::Loading);

    use_effect(move || {
        let url = url.clone();
        spawn(async move {
            log::debug!("fetching {url}");
            match fetch_json::<T>(&url).await {
                Ok(data) => state.set(FetchState::Success(data)),
                Err(e) => state.set(FetchState::Failed(e)),
            }
        });
    });

    state
}
