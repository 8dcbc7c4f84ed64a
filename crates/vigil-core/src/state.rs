//! Cached view state for paginated collections.

use crate::Result;
use crate::types::{PaginatedResponse, Pagination};

/// The last fetched page of a collection, with loading and error flags.
///
/// A view drives it as `begin()` → fetch → `finish(result)`. On failure the
/// cached items are dropped and the error message is kept for display.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch as started.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record the outcome of a fetch.
    ///
    /// The result is handed back so the caller can still react to the error.
    pub fn finish(&mut self, result: Result<PaginatedResponse<T>>) -> Result<()> {
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.data;
                self.pagination = page.pagination;
                Ok(())
            }
            Err(e) => {
                self.error = Some(match &e {
                    crate::Error::Api(api) => api.message.clone().unwrap_or_else(|| e.to_string()),
                    _ => e.to_string(),
                });
                self.items.clear();
                Err(e)
            }
        }
    }

    /// Total rows reported by the server, or 0 before the first fetch.
    pub fn total(&self) -> u64 {
        self.pagination.map(|p| p.total_rows).unwrap_or(0)
    }

    /// True if a later page exists.
    pub fn has_more(&self) -> bool {
        self.pagination.is_some_and(|p| p.has_more())
    }

    /// Replace the first cached item matching `pred`. Returns true if one was replaced.
    pub fn replace(&mut self, pred: impl Fn(&T) -> bool, item: T) -> bool {
        match self.items.iter_mut().find(|i| pred(i)) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Drop every cached item matching `pred`.
    pub fn remove(&mut self, pred: impl Fn(&T) -> bool) {
        self.items.retain(|i| !pred(i));
    }
}
