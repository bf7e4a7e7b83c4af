//! Typed surface for the Readwise v2 API
//!
//! Highlights, books, and the daily review. Listing operations drive the
//! shared pagination engine and return fully materialized vectors in server
//! order.

use crate::client::{to_query_map, ApiClient};
use crate::config::ClientOptions;
use crate::endpoints;
use crate::error::{Error, Result};
use crate::models::{Book, BookCategory, BookHighlights, DailyReview, Highlight, ModifiedBook};
use crate::types::StringMap;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Filters for `/v2/export/`
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportHighlightsParams {
    /// Only include books updated after this instant
    #[serde(rename = "updatedAfter", skip_serializing_if = "Option::is_none")]
    pub updated_after: Option<DateTime<Utc>>,
    /// Restrict the export to these book ids (sent comma-joined)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<i64>>,
}

/// Filters for `/v2/highlights/`
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListHighlightsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated__lt: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated__gt: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_at__lt: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_at__gt: Option<DateTime<Utc>>,
}

/// Filters for `/v2/books/`
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListBooksParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<BookCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_highlights: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_highlights__lt: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_highlights__gt: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated__lt: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated__gt: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_highlight_at__lt: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_highlight_at__gt: Option<DateTime<Utc>>,
}

/// One highlight to create via `/v2/highlights/`
#[derive(Debug, Clone, Serialize)]
pub struct CreateHighlight {
    /// Highlight text (required, non-empty)
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_url: Option<String>,
}

impl CreateHighlight {
    /// Create a highlight payload from its text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
            author: None,
            image_url: None,
            source_url: None,
            source_type: None,
            category: None,
            note: None,
            location: None,
            location_type: None,
            highlighted_at: None,
            highlight_url: None,
        }
    }
}

/// Client for the Readwise v2 API
#[derive(Debug)]
pub struct Readwise {
    api: ApiClient,
}

impl Readwise {
    /// Build a client from options
    pub fn new(options: ClientOptions) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(options)?,
        })
    }

    /// Build a client from the `READWISE_TOKEN` environment variable
    pub fn from_env() -> Result<Self> {
        Self::new(ClientOptions::default())
    }

    /// Export highlights grouped by book, following cursors until exhausted
    pub async fn export_highlights(
        &self,
        params: ExportHighlightsParams,
    ) -> Result<Vec<BookHighlights>> {
        let query = to_query_map(&params)?;
        self.api.collect(&endpoints::EXPORT_HIGHLIGHTS, query).await
    }

    /// List highlights, walking every page
    pub async fn list_highlights(&self, params: ListHighlightsParams) -> Result<Vec<Highlight>> {
        let query = to_query_map(&params)?;
        self.api.collect(&endpoints::LIST_HIGHLIGHTS, query).await
    }

    /// Create highlights
    ///
    /// Not idempotent: a retried POST after a 429 can create duplicates if
    /// the first attempt was partially accepted server-side.
    pub async fn create_highlights(
        &self,
        highlights: Vec<CreateHighlight>,
    ) -> Result<Vec<ModifiedBook>> {
        if highlights.is_empty() {
            return Err(Error::validation("no highlights to create"));
        }
        if highlights.iter().any(|h| h.text.is_empty()) {
            return Err(Error::validation("highlight text must not be empty"));
        }

        let body = serde_json::json!({ "highlights": highlights });
        self.api
            .send(&endpoints::CREATE_HIGHLIGHTS, StringMap::new(), Some(body))
            .await
    }

    /// List books, walking every page
    pub async fn list_books(&self, params: ListBooksParams) -> Result<Vec<Book>> {
        let query = to_query_map(&params)?;
        self.api.collect(&endpoints::LIST_BOOKS, query).await
    }

    /// Fetch a single book by id
    pub async fn book_details(&self, book_id: i64) -> Result<Book> {
        let path = format!("{}{book_id}/", endpoints::BOOK_DETAILS.path);
        let (_, value) = self
            .api
            .send_to_path(&endpoints::BOOK_DETAILS, path, StringMap::new(), None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch today's daily review
    pub async fn daily_review(&self) -> Result<DailyReview> {
        self.api
            .send(&endpoints::DAILY_REVIEW, StringMap::new(), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_export_params_serialize_ids_and_timestamp() {
        let params = ExportHighlightsParams {
            updated_after: Some("2024-01-01T00:00:00Z".parse().unwrap()),
            ids: Some(vec![1, 2, 3]),
        };
        let query = to_query_map(&params).unwrap();

        assert_eq!(query.get("ids"), Some(&"1,2,3".to_string()));
        assert!(query
            .get("updatedAfter")
            .unwrap()
            .starts_with("2024-01-01T00:00:00"));
    }

    #[test]
    fn test_list_params_skip_unset_filters() {
        let query = to_query_map(&ListHighlightsParams::default()).unwrap();
        assert!(query.is_empty());

        let query = to_query_map(&ListHighlightsParams {
            book_id: Some(42),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(query.get("book_id"), Some(&"42".to_string()));
        assert_eq!(query.len(), 1);
    }

    #[test]
    fn test_book_params_category_lowercase() {
        let query = to_query_map(&ListBooksParams {
            category: Some(BookCategory::Articles),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(query.get("category"), Some(&"articles".to_string()));
    }

    #[tokio::test]
    async fn test_create_highlights_rejects_empty_list() {
        let readwise = Readwise::new(ClientOptions::new().token("t")).unwrap();
        let result = readwise.create_highlights(vec![]).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_highlights_rejects_empty_text() {
        let readwise = Readwise::new(ClientOptions::new().token("t")).unwrap();
        let highlights = vec![CreateHighlight::new("fine"), CreateHighlight::new("")];
        let result = readwise.create_highlights(highlights).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));
    }

    #[test]
    fn test_create_highlight_payload_shape() {
        let highlight = CreateHighlight {
            note: Some("why it matters".to_string()),
            ..CreateHighlight::new("quoted text")
        };
        let value = serde_json::to_value(&highlight).unwrap();

        assert_eq!(value["text"], "quoted text");
        assert_eq!(value["note"], "why it matters");
        assert!(value.get("title").is_none());
    }
}
