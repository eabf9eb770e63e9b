// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod auth;
pub mod deliveries;
pub mod home;
pub mod news;
pub mod not_found;
pub mod volunteers;
