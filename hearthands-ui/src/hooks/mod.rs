// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod use_fetch;
pub mod use_local_storage;
pub mod use_pagination;

pub use use_fetch::{use_fetch, FetchState};
pub use use_local_storage::{use_local_storage, StoredValue};
pub use use_pagination::{use_pagination, Pagination, PaginationHandle};
