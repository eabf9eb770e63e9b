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

use serde::{Deserialize, Serialize};

/// Envelope every backend endpoint wraps its payload in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestResponse<T> {
    #[serde(default)]
    pub timestamp: i64,
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

/// A single news article as served by the public news API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub additional_images: Vec<String>,
}

impl NewsItem {
    /// First paragraph of the content, capped for list previews.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let first = self.content.lines().next().unwrap_or_default().trim();
        if first.chars().count() <= max_chars {
            first.to_string()
        } else {
            let cut: String = first.chars().take(max_chars).collect();
            format!("{}…", cut.trim_end())
        }
    }
}
