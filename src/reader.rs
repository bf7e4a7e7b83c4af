//! Typed surface for the Readwise Reader v3 API
//!
//! Documents: list (cursor paginated), fetch by id, and save. Save-location
//! validation happens before any network call.

use crate::client::{to_query_map, ApiClient};
use crate::config::ClientOptions;
use crate::endpoints;
use crate::error::{Error, Result};
use crate::models::{
    Document, DocumentCategory, DocumentLocation, SaveDocumentData, SavedDocument,
};
use crate::types::StringMap;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Filters for `/v3/list/`
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListDocumentsParams {
    /// Fetch a single document by id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<DocumentLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<DocumentCategory>,
    /// Only include documents updated after this instant
    #[serde(rename = "updatedAfter", skip_serializing_if = "Option::is_none")]
    pub updated_after: Option<DateTime<Utc>>,
}

/// Payload for `/v3/save/`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDocumentParams {
    /// URL of the document to save (required)
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_clean_html: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Target location; `shortlist` is not a valid save target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<DocumentLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<DocumentCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_using: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl SaveDocumentParams {
    /// Create a save payload from a URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: None,
            should_clean_html: None,
            title: None,
            author: None,
            summary: None,
            published_date: None,
            image_url: None,
            location: None,
            category: None,
            saved_using: None,
            tags: None,
        }
    }
}

/// Client for the Readwise Reader v3 API
#[derive(Debug)]
pub struct Reader {
    api: ApiClient,
}

impl Reader {
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

    /// List documents, following cursors until exhausted
    pub async fn list_documents(&self, params: ListDocumentsParams) -> Result<Vec<Document>> {
        let query = to_query_map(&params)?;
        self.api.collect(&endpoints::LIST_DOCUMENTS, query).await
    }

    /// Fetch a document by id; None when the server doesn't know it
    pub async fn document_by_id(&self, id: impl Into<String>) -> Result<Option<Document>> {
        let mut query = StringMap::new();
        query.insert("id".to_string(), id.into());

        let page: crate::models::CursorPage<Document> = self
            .api
            .send(&endpoints::LIST_DOCUMENTS, query, None)
            .await?;

        if page.count == 1 {
            Ok(page.results.into_iter().next())
        } else {
            Ok(None)
        }
    }

    /// Save a document to Reader
    ///
    /// Returns whether the URL already existed (HTTP 200) or was newly
    /// created (HTTP 201). Not idempotent across rate-limit retries.
    pub async fn save_document(&self, params: SaveDocumentParams) -> Result<SavedDocument> {
        if params.url.is_empty() {
            return Err(Error::validation("document url must not be empty"));
        }
        if let Some(location) = params.location {
            if !location.valid_for_save() {
                return Err(Error::validation(format!(
                    "invalid save location: {}",
                    serde_json::to_string(&location).unwrap_or_default()
                )));
            }
        }

        let body = serde_json::to_value(&params)?;
        let (status, value) = self
            .api
            .send_with_status(&endpoints::SAVE_DOCUMENT, StringMap::new(), Some(body))
            .await?;

        let data: SaveDocumentData = serde_json::from_value(value)?;
        Ok(SavedDocument {
            document_already_exists: status == 200,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_params_serialize() {
        let query = to_query_map(&ListDocumentsParams {
            location: Some(DocumentLocation::Archive),
            category: Some(DocumentCategory::Article),
            updated_after: Some("2024-06-01T12:00:00Z".parse().unwrap()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(query.get("location"), Some(&"archive".to_string()));
        assert_eq!(query.get("category"), Some(&"article".to_string()));
        assert!(query.contains_key("updatedAfter"));
        assert!(!query.contains_key("id"));
    }

    #[test]
    fn test_save_params_camel_case_wire_names() {
        let params = SaveDocumentParams {
            should_clean_html: Some(true),
            saved_using: Some("readwise-client".to_string()),
            ..SaveDocumentParams::new("https://example.com")
        };
        let value = serde_json::to_value(&params).unwrap();

        assert_eq!(value["url"], "https://example.com");
        assert_eq!(value["shouldCleanHtml"], true);
        assert_eq!(value["savedUsing"], "readwise-client");
        assert!(value.get("publishedDate").is_none());
    }
}
