//! Response envelopes of the system of record.
//!
//! Every endpoint wraps its payload in a `result` envelope; list endpoints
//! additionally page their items. Failures are signalled by the HTTP status,
//! not by the envelope, so `errors` is only ever logged.

use serde::Deserialize;

/// The `{ result, errors, timeGenerated }` wrapper around every response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Envelope<T> {
    pub result: T,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload, logging any stray envelope errors.
    pub(crate) fn into_result(self) -> T {
        if !self.errors.is_empty() {
            tracing::warn!(errors = ?self.errors, "gateway envelope carried errors");
        }
        self.result
    }
}

/// One page of a paged list endpoint.
///
/// The back office always asks for one oversized page; `has_next_page`
/// should therefore never be set, and is logged when it is.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub has_next_page: bool,
}

impl<T> Page<T> {
    /// Unwrap the items, logging a truncated listing.
    pub(crate) fn into_items(self, what: &str) -> Vec<T> {
        if self.has_next_page {
            tracing::warn!(
                total = self.total_count,
                fetched = self.items.len(),
                "{what} listing truncated at one page"
            );
        }
        self.items
    }
}
