//! Pagination types and traits
//!
//! Defines the core pagination abstractions shared by both strategies.

use crate::types::{JsonValue, StringMap};

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available with these query parameters
    Continue {
        /// Query parameters to add/replace for the next request
        query_params: StringMap,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with a single parameter
    pub fn with_param(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut params = StringMap::new();
        params.insert(key.into(), value.into());
        Self::Continue {
            query_params: params,
        }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Tracks pagination state during one collection loop
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Current page number (for page-numbered pagination)
    pub page: u32,
    /// Current cursor value (for cursor pagination)
    pub cursor: Option<String>,
    /// Total items fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Increment page number
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Set cursor
    pub fn set_cursor(&mut self, cursor: String) {
        self.cursor = Some(cursor);
    }

    /// Add to total fetched
    pub fn add_fetched(&mut self, count: u64) {
        self.total_fetched += count;
    }
}

/// Core trait for pagination strategies
pub trait Paginator: Send + Sync {
    /// Get the query parameters for the next request
    fn initial_params(&self, state: &PaginationState) -> StringMap;

    /// Process a response body and determine if there's a next page
    fn process_response(
        &self,
        body: &JsonValue,
        records_count: usize,
        state: &mut PaginationState,
    ) -> NextPage;
}

/// Extract a string continuation value from a top-level response field
///
/// Returns None for null/absent fields and for anything that doesn't carry a
/// usable value. Numbers are accepted because some endpoints return numeric
/// cursors.
pub(crate) fn extract_continuation(body: &JsonValue, field: &str) -> Option<String> {
    match body.get(field)? {
        JsonValue::String(s) if !s.is_empty() => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
