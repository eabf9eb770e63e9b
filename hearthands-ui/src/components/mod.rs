// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod config_error;
pub mod error_fallback;
pub mod footer;
pub mod navbar;
pub mod site_layout;
