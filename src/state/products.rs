//! Product-list paging and status presentation.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::api::ProductQuery;

/// Search term and zero-based page of the product list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductListState {
    pub search: String,
    pub page: u32,
    pub total_pages: u32,
}

impl ProductListState {
    /// A new term always starts from the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 0;
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.page > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    pub fn prev(&mut self) {
        if self.can_go_prev() {
            self.page -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.can_go_next() {
            self.page += 1;
        }
    }

    #[must_use]
    pub fn query(&self, size: u32) -> ProductQuery {
        ProductQuery { search: self.search.clone(), page: self.page, size }
    }

    /// `"Page 2 of 5"`, one-based.
    #[must_use]
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page + 1, self.total_pages)
    }
}

/// Badge class for a product status; unknown statuses are neutral.
#[must_use]
pub fn status_badge(status: &str) -> &'static str {
    match status {
        "CREATED" => "badge badge--created",
        "IN_TRANSIT" => "badge badge--in-transit",
        "AT_RETAILER" => "badge badge--at-retailer",
        "SOLD" => "badge badge--sold",
        _ => "badge badge--neutral",
    }
}

/// Status as displayed: the first `_` becomes a space.
#[must_use]
pub fn status_label(status: &str) -> String {
    status.replacen('_', " ", 1)
}
