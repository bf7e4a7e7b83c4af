//! Wire types for the Readwise v2 and Reader v3 APIs
//!
//! Deserialized records are handed to callers as-is and never mutated by the
//! client. v2 resources use snake_case field names on the wire; Reader v3
//! uses camelCase. Fields the server is known to null out are Options even
//! where the upstream docs call them required.

use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Page Envelopes
// ============================================================================

/// Cursor-paginated response shape (`/v2/export/`, `/v3/list/`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursorPage<T> {
    /// Total item count reported by the server
    pub count: u64,
    /// Continuation token; absence means no more pages
    #[serde(rename = "nextPageCursor")]
    pub next_page_cursor: Option<String>,
    /// Items in server order
    pub results: Vec<T>,
}

/// Page-numbered response shape (`/v2/highlights/`, `/v2/books/`)
///
/// The collection loop walks these pages on raw JSON; this envelope is for
/// callers issuing single-page requests through [`crate::ApiClient::send`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberedPage<T> {
    /// Total item count reported by the server
    pub count: u64,
    /// URL of the next page; null on the last page
    pub next: Option<String>,
    /// URL of the previous page
    pub previous: Option<String>,
    /// Items in server order
    pub results: Vec<T>,
}

// ============================================================================
// Readwise v2 Resources
// ============================================================================

/// Tag attached to a highlight or book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// A single highlight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub id: i64,
    pub text: String,
    pub location: Option<i64>,
    pub location_type: Option<String>,
    pub note: Option<String>,
    pub color: Option<String>,
    pub highlighted_at: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub external_id: Option<String>,
    pub end_location: Option<i64>,
    pub url: Option<String>,
    #[serde(default)]
    pub book_id: i64,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub is_favorite: Option<bool>,
    pub is_discard: Option<bool>,
    pub readwise_url: Option<String>,
}

/// A book (or article, tweet thread, podcast) in the Readwise library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub category: Option<String>,
    pub source: Option<String>,
    #[serde(default)]
    pub num_highlights: i64,
    pub last_highlight_at: Option<String>,
    pub updated: Option<String>,
    pub cover_image_url: Option<String>,
    pub highlights_url: Option<String>,
    pub source_url: Option<String>,
    pub asin: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub document_note: Option<String>,
}

/// One book together with all of its highlights, as served by `/v2/export/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookHighlights {
    pub user_book_id: i64,
    pub title: String,
    pub author: Option<String>,
    pub readable_title: Option<String>,
    pub source: Option<String>,
    pub cover_image_url: Option<String>,
    pub unique_url: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub book_tags: Vec<Tag>,
    pub category: Option<String>,
    pub document_note: Option<String>,
    pub readwise_url: Option<String>,
    pub source_url: Option<String>,
    pub asin: Option<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

/// A highlight as it appears in the daily review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewHighlight {
    pub id: i64,
    pub text: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub source_url: Option<String>,
    pub source_type: Option<String>,
    pub category: Option<String>,
    pub location_type: Option<String>,
    pub location: Option<i64>,
    pub note: Option<String>,
    pub highlighted_at: Option<String>,
    pub highlight_url: Option<String>,
    pub image_url: Option<String>,
    pub api_source: Option<String>,
}

/// Response from `/v2/review/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReview {
    pub review_id: i64,
    pub review_url: String,
    pub review_completed: bool,
    #[serde(default)]
    pub highlights: Vec<ReviewHighlight>,
}

/// A book touched by a create-highlights call, with the highlight ids that
/// were added or updated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifiedBook {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub category: Option<String>,
    pub source: Option<String>,
    #[serde(default)]
    pub num_highlights: i64,
    pub last_highlight_at: Option<String>,
    pub updated: Option<String>,
    pub cover_image_url: Option<String>,
    pub highlights_url: Option<String>,
    pub source_url: Option<String>,
    #[serde(default)]
    pub modified_highlights: Vec<i64>,
}

// ============================================================================
// Reader v3 Resources
// ============================================================================

/// Tag attached to a Reader document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentTag {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub created: i64,
}

/// A document saved in Readwise Reader
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub url: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub source: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub tags: Option<HashMap<String, DocumentTag>>,
    pub site_name: Option<String>,
    pub word_count: Option<u64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub published_date: Option<JsonValue>,
    pub summary: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub content: Option<JsonValue>,
    pub source_url: Option<String>,
}

/// Body of a successful `/v3/save/` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveDocumentData {
    pub id: String,
    pub url: String,
}

/// Outcome of a save-document call
///
/// `document_already_exists` is true iff the server answered 200 instead of
/// 201, meaning the URL had been saved before.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedDocument {
    pub document_already_exists: bool,
    pub data: SaveDocumentData,
}

// ============================================================================
// Enumerations
// ============================================================================

/// Reader document location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentLocation {
    New,
    Later,
    Shortlist,
    Archive,
    Feed,
}

impl DocumentLocation {
    /// Locations a document may be saved into; `shortlist` is list-only
    pub fn valid_for_save(self) -> bool {
        !matches!(self, Self::Shortlist)
    }
}

/// Reader document category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentCategory {
    Article,
    Email,
    Rss,
    Highlight,
    Note,
    Pdf,
    Epub,
    Tweet,
    Video,
}

/// Readwise library category for book listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookCategory {
    Books,
    Articles,
    Tweets,
    Supplementals,
    Podcasts,
}
