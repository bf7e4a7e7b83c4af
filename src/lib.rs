//! # Readwise client
//!
//! Async Rust client for the Readwise v2 API (highlights, books, daily
//! review) and the Readwise Reader v3 API (documents).
//!
//! ## Features
//!
//! - **Typed Surfaces**: [`Readwise`] for v2, [`Reader`] for v3
//! - **Unified Pagination**: cursor and page-number endpoints share one
//!   collection engine with a configurable page cap
//! - **Rate-Limit Aware**: honors `Retry-After` on 429 with a bounded retry
//!   chain, plus an optional local token-bucket limiter
//! - **Declarative Endpoints**: one static descriptor per remote operation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use readwise_client::{ExportHighlightsParams, Readwise, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Token from READWISE_TOKEN
//!     let readwise = Readwise::from_env()?;
//!
//!     // Everything updated this year, across all pages
//!     let params = ExportHighlightsParams {
//!         updated_after: Some("2024-01-01T00:00:00Z".parse().unwrap()),
//!         ..Default::default()
//!     };
//!     let books = readwise.export_highlights(params).await?;
//!
//!     for book in books {
//!         println!("{}: {} highlights", book.title, book.highlights.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │               Readwise (v2)  /  Reader (v3)             │
//! │        typed params in → typed records out              │
//! └────────────────────────────┬────────────────────────────┘
//! ┌────────────────────────────┴────────────────────────────┐
//! │                 ApiClient  {send, collect}              │
//! ├───────────┬──────────────────┬──────────────────────────┤
//! │ Endpoints │    Pagination    │        Transport         │
//! ├───────────┼──────────────────┼──────────────────────────┤
//! │ method    │ Cursor           │ Token auth               │
//! │ path      │ Page Number      │ 429 Retry-After          │
//! │ params    │ page cap         │ Backoff / Rate Limit     │
//! └───────────┴──────────────────┴──────────────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Token authentication
pub mod auth;

/// Client configuration
pub mod config;

/// HTTP transport with retry and rate limiting
pub mod http;

/// Pagination strategies
pub mod pagination;

/// Declarative endpoint catalog
pub mod endpoints;

/// Shared low-level API client
pub mod client;

/// Wire types for both APIs
pub mod models;

/// Typed Readwise v2 surface
pub mod readwise;

/// Typed Reader v3 surface
pub mod reader;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::ApiClient;
pub use config::ClientOptions;
pub use error::{Error, Result};
pub use models::*;
pub use reader::{ListDocumentsParams, Reader, SaveDocumentParams};
pub use readwise::{
    CreateHighlight, ExportHighlightsParams, ListBooksParams, ListHighlightsParams, Readwise,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
