//! Declarative endpoint catalog
//!
//! One static descriptor per remote operation: HTTP method, path, accepted
//! parameter names, and the pagination shape of the response. Pure data —
//! adding an endpoint never touches the transport or the pagination engine.

use crate::pagination::{CursorPaginator, NoPaginator, PageNumberPaginator, Paginator};
use crate::types::Method;

/// Pagination shape of an endpoint's response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationShape {
    /// Single response, no continuation
    None,
    /// Opaque cursor echoed as a query parameter
    Cursor {
        /// Query parameter carrying the cursor
        cursor_param: &'static str,
        /// Response field holding the next cursor
        cursor_field: &'static str,
    },
    /// Incrementing page number gated on a nullable `next` field
    PageNumber {
        /// Query parameter carrying the page number
        page_param: &'static str,
        /// Response field signaling a further page
        next_field: &'static str,
    },
}

impl PaginationShape {
    /// Build the paginator implementing this shape
    pub fn paginator(&self) -> Box<dyn Paginator> {
        match *self {
            Self::None => Box::new(NoPaginator),
            Self::Cursor {
                cursor_param,
                cursor_field,
            } => Box::new(CursorPaginator::new(cursor_param, cursor_field)),
            Self::PageNumber {
                page_param,
                next_field,
            } => Box::new(PageNumberPaginator::new(page_param, next_field)),
        }
    }
}

/// Static description of one remote operation
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    /// Logical operation name, used in errors and logs
    pub name: &'static str,
    /// HTTP method
    pub method: Method,
    /// Path template appended to the base URL
    pub path: &'static str,
    /// Accepted query parameter names
    pub query_params: &'static [&'static str],
    /// Accepted JSON body field names (write operations only)
    pub body_fields: &'static [&'static str],
    /// Pagination shape of the response
    pub pagination: PaginationShape,
}

impl Endpoint {
    /// Check whether a query parameter name is part of this operation
    pub fn allows_param(&self, name: &str) -> bool {
        self.query_params.contains(&name)
    }
}

const CURSOR: PaginationShape = PaginationShape::Cursor {
    cursor_param: "pageCursor",
    cursor_field: "nextPageCursor",
};

const PAGE_NUMBER: PaginationShape = PaginationShape::PageNumber {
    page_param: "page",
    next_field: "next",
};

// ============================================================================
// Readwise v2
// ============================================================================

/// GET `/v2/export/` — highlights grouped by book, cursor paginated
pub const EXPORT_HIGHLIGHTS: Endpoint = Endpoint {
    name: "export_highlights",
    method: Method::GET,
    path: "/v2/export/",
    query_params: &["updatedAfter", "ids", "pageCursor"],
    body_fields: &[],
    pagination: CURSOR,
};

/// GET `/v2/highlights/` — flat highlight listing, page numbered
pub const LIST_HIGHLIGHTS: Endpoint = Endpoint {
    name: "list_highlights",
    method: Method::GET,
    path: "/v2/highlights/",
    query_params: &[
        "page_size",
        "page",
        "book_id",
        "updated__lt",
        "updated__gt",
        "highlighted_at__lt",
        "highlighted_at__gt",
    ],
    body_fields: &[],
    pagination: PAGE_NUMBER,
};

/// POST `/v2/highlights/` — create highlights
pub const CREATE_HIGHLIGHTS: Endpoint = Endpoint {
    name: "create_highlights",
    method: Method::POST,
    path: "/v2/highlights/",
    query_params: &[],
    body_fields: &["highlights"],
    pagination: PaginationShape::None,
};

/// GET `/v2/books/` — book listing, page numbered
pub const LIST_BOOKS: Endpoint = Endpoint {
    name: "list_books",
    method: Method::GET,
    path: "/v2/books/",
    query_params: &[
        "page_size",
        "page",
        "category",
        "source",
        "num_highlights",
        "num_highlights__lt",
        "num_highlights__gt",
        "updated__lt",
        "updated__gt",
        "last_highlight_at__lt",
        "last_highlight_at__gt",
    ],
    body_fields: &[],
    pagination: PAGE_NUMBER,
};

/// GET `/v2/books/{id}/` — single book details
pub const BOOK_DETAILS: Endpoint = Endpoint {
    name: "book_details",
    method: Method::GET,
    path: "/v2/books/",
    query_params: &[],
    body_fields: &[],
    pagination: PaginationShape::None,
};

/// GET `/v2/review/` — today's daily review
pub const DAILY_REVIEW: Endpoint = Endpoint {
    name: "daily_review",
    method: Method::GET,
    path: "/v2/review/",
    query_params: &[],
    body_fields: &[],
    pagination: PaginationShape::None,
};

// ============================================================================
// Reader v3
// ============================================================================

/// GET `/v3/list/` — Reader documents, cursor paginated
pub const LIST_DOCUMENTS: Endpoint = Endpoint {
    name: "list_documents",
    method: Method::GET,
    path: "/v3/list/",
    query_params: &["id", "location", "category", "updatedAfter", "pageCursor"],
    body_fields: &[],
    pagination: CURSOR,
};

/// POST `/v3/save/` — save a document to Reader
pub const SAVE_DOCUMENT: Endpoint = Endpoint {
    name: "save_document",
    method: Method::POST,
    path: "/v3/save/",
    query_params: &[],
    body_fields: &[
        "url",
        "html",
        "shouldCleanHtml",
        "title",
        "author",
        "summary",
        "publishedDate",
        "imageUrl",
        "location",
        "category",
        "savedUsing",
        "tags",
    ],
    pagination: PaginationShape::None,
};
