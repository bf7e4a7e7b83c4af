//! Pagination module
//!
//! Supports the two continuation shapes the Readwise APIs use: opaque
//! cursors (`nextPageCursor` → `pageCursor`) and incrementing page numbers
//! gated on a nullable `next` field. Each strategy computes the query
//! parameters for the next request and tracks when the collection is
//! complete.

mod strategies;
mod types;

pub use strategies::{CursorPaginator, NoPaginator, PageNumberPaginator};
pub use types::{NextPage, PaginationState, Paginator};

#[cfg(test)]
mod tests;
