//! Pagination strategy implementations
//!
//! The Readwise APIs paginate two ways: the export/list (v3) endpoints hand
//! back an opaque `nextPageCursor` echoed as `pageCursor`, and the v2
//! highlights/books listings use an incrementing `page` number with a
//! nullable `next` URL signaling whether another page exists.

use super::types::{extract_continuation, NextPage, PaginationState, Paginator};
use crate::types::{JsonValue, StringMap};

// ============================================================================
// Cursor Pagination
// ============================================================================

/// Cursor-based pagination (`/v2/export/`, `/v3/list/`)
///
/// Echoes the cursor from the previous response; an absent, null, or empty
/// cursor means the collection is complete.
#[derive(Debug, Clone)]
pub struct CursorPaginator {
    /// Query parameter name for the cursor (e.g. "pageCursor")
    pub cursor_param: &'static str,
    /// Response field holding the next cursor (e.g. "nextPageCursor")
    pub cursor_field: &'static str,
}

impl CursorPaginator {
    /// Create a new cursor paginator
    pub fn new(cursor_param: &'static str, cursor_field: &'static str) -> Self {
        Self {
            cursor_param,
            cursor_field,
        }
    }
}

impl Paginator for CursorPaginator {
    fn initial_params(&self, state: &PaginationState) -> StringMap {
        let mut params = StringMap::new();
        if let Some(cursor) = &state.cursor {
            params.insert(self.cursor_param.to_string(), cursor.clone());
        }
        params
    }

    fn process_response(
        &self,
        body: &JsonValue,
        records_count: usize,
        state: &mut PaginationState,
    ) -> NextPage {
        state.add_fetched(records_count as u64);

        match extract_continuation(body, self.cursor_field) {
            Some(cursor) => {
                state.set_cursor(cursor.clone());
                NextPage::with_param(self.cursor_param, cursor)
            }
            None => {
                state.mark_done();
                NextPage::Done
            }
        }
    }
}

// ============================================================================
// Page Number Pagination
// ============================================================================

/// Page number pagination (`/v2/highlights/`, `/v2/books/`)
///
/// Sends an incrementing `page` parameter starting at 1 and continues while
/// the response's `next` field is non-null.
#[derive(Debug, Clone)]
pub struct PageNumberPaginator {
    /// Query parameter name for the page number
    pub page_param: &'static str,
    /// First page number
    pub start_page: u32,
    /// Response field signaling a further page (nullable URL)
    pub next_field: &'static str,
}

impl PageNumberPaginator {
    /// Create a new page number paginator starting at page 1
    pub fn new(page_param: &'static str, next_field: &'static str) -> Self {
        Self {
            page_param,
            start_page: 1,
            next_field,
        }
    }
}

impl Paginator for PageNumberPaginator {
    fn initial_params(&self, state: &PaginationState) -> StringMap {
        let mut params = StringMap::new();
        let page = if state.page == 0 {
            self.start_page
        } else {
            state.page
        };
        params.insert(self.page_param.to_string(), page.to_string());
        params
    }

    fn process_response(
        &self,
        body: &JsonValue,
        records_count: usize,
        state: &mut PaginationState,
    ) -> NextPage {
        state.add_fetched(records_count as u64);

        if extract_continuation(body, self.next_field).is_none() {
            state.mark_done();
            return NextPage::Done;
        }

        // First response covers start_page; the counter trails by one
        if state.page == 0 {
            state.page = self.start_page;
        }
        state.next_page();
        NextPage::with_param(self.page_param, state.page.to_string())
    }
}

// ============================================================================
// No Pagination
// ============================================================================

/// No pagination - single request (`/v2/review/`, `/v2/books/{id}/`)
#[derive(Debug, Clone, Default)]
pub struct NoPaginator;

impl Paginator for NoPaginator {
    fn initial_params(&self, _state: &PaginationState) -> StringMap {
        StringMap::new()
    }

    fn process_response(
        &self,
        _body: &JsonValue,
        records_count: usize,
        state: &mut PaginationState,
    ) -> NextPage {
        state.add_fetched(records_count as u64);
        state.mark_done();
        NextPage::Done
    }
}
