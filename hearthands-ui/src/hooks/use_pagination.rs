// SPDX-License-Identifier: MIT OR Apache-2.0

//! Page bookkeeping for client-side lists.

use std::ops::Range;

use dioxus::prelude::*;

pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

/// 1-based page cursor over `total_pages` pages.
///
/// With zero pages the cursor stays on page 1 so the UI always has something
/// sensible to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    total_pages: usize,
}

impl Pagination {
    pub fn new(total_items: usize, items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            total_pages: total_pages(total_items, items_per_page),
        }
    }

    fn at(current_page: usize, total_pages: usize) -> Self {
        let mut p = Self {
            current_page: 1,
            total_pages,
        };
        p.go_to_page(current_page);
        p
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages.max(1));
    }

    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages {
            self.current_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Index range of the current page within a list of `len` items.
    pub fn item_range(&self, items_per_page: usize, len: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * items_per_page).min(len);
        let end = (start + items_per_page).min(len);
        start..end
    }
}

/// Signal-backed [`Pagination`] for use inside components.
#[derive(Clone, Copy, PartialEq)]
pub struct PaginationHandle {
    current: Signal<usize>,
    total_pages: usize,
    items_per_page: usize,
}

impl PaginationHandle {
    fn state(&self) -> Pagination {
        Pagination::at(*self.current.read(), self.total_pages)
    }

    fn update(&mut self, f: impl FnOnce(&mut Pagination)) {
        let mut state = self.state();
        f(&mut state);
        self.current.set(state.current_page());
    }

    pub fn current_page(&self) -> usize {
        self.state().current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.state().has_next()
    }

    pub fn has_prev(&self) -> bool {
        self.state().has_prev()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.update(|p| p.go_to_page(page));
    }

    pub fn next_page(&mut self) {
        self.update(Pagination::next_page);
    }

    pub fn prev_page(&mut self) {
        self.update(Pagination::prev_page);
    }

    pub fn item_range(&self, len: usize) -> Range<usize> {
        self.state().item_range(self.items_per_page, len)
    }
}

pub fn use_pagination(total_items: usize, items_per_page: usize) -> PaginationHandle {
    let current = use_signal(|| 1usize);
    PaginationHandle {
        current,
        total_pages: total_pages(total_items, items_per_page),
        items_per_page,
    }
}
