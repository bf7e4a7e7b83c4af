//! Shared API client
//!
//! `ApiClient` is the single capability set both typed surfaces sit on:
//! `send` for one-shot operations and `collect` for paginated listings. The
//! pagination loop is parameterized by the endpoint descriptor's shape, so
//! cursor and page-number endpoints share one implementation.

use crate::config::ClientOptions;
use crate::endpoints::Endpoint;
use crate::error::{Error, Result};
use crate::http::{Request, Transport};
use crate::pagination::{NextPage, PaginationState};
use crate::types::{JsonValue, StringMap};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Low-level client shared by the Readwise and Reader surfaces
#[derive(Debug)]
pub struct ApiClient {
    transport: Transport,
    max_pages: u32,
}

impl ApiClient {
    /// Build a client from options, resolving the token eagerly
    pub fn new(options: ClientOptions) -> Result<Self> {
        let (auth, transport_config, max_pages) = options.resolve()?;
        Ok(Self {
            transport: Transport::new(auth, transport_config)?,
            max_pages,
        })
    }

    /// Perform one call against an endpoint and deserialize the body
    pub async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        query: StringMap,
        body: Option<JsonValue>,
    ) -> Result<T> {
        let (_, value) = self.send_with_status(endpoint, query, body).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Perform one call and return the HTTP status alongside the body
    ///
    /// The save-document operation distinguishes "already existed" (200)
    /// from "created" (201) purely by status code.
    pub async fn send_with_status(
        &self,
        endpoint: &Endpoint,
        query: StringMap,
        body: Option<JsonValue>,
    ) -> Result<(u16, JsonValue)> {
        self.send_to_path(endpoint, endpoint.path.to_string(), query, body)
            .await
    }

    /// Perform one call against an explicit path (for `{id}`-style templates)
    pub async fn send_to_path(
        &self,
        endpoint: &Endpoint,
        path: String,
        query: StringMap,
        body: Option<JsonValue>,
    ) -> Result<(u16, JsonValue)> {
        self.check_params(endpoint, &query);

        let mut request = Request {
            method: endpoint.method,
            path,
            query,
            body: None,
        };
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = self.transport.send(&request).await?;
        let status = response.status().as_u16();
        let value: JsonValue = response.json().await.map_err(Error::Http)?;
        Ok((status, value))
    }

    /// Drive an endpoint across all pages, flattening `results` in arrival
    /// order
    ///
    /// Any error aborts the loop and discards pages already fetched; callers
    /// get everything or nothing.
    pub async fn collect<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        base_query: StringMap,
    ) -> Result<Vec<T>> {
        self.check_params(endpoint, &base_query);

        let paginator = endpoint.pagination.paginator();
        let mut state = PaginationState::new();
        let mut items: Vec<T> = Vec::new();
        let mut pages = 0u32;

        loop {
            if pages >= self.max_pages {
                return Err(Error::PageLimitExceeded {
                    endpoint: endpoint.name.to_string(),
                    max_pages: self.max_pages,
                });
            }

            let mut query = base_query.clone();
            query.extend(paginator.initial_params(&state));

            let request = Request {
                method: endpoint.method,
                path: endpoint.path.to_string(),
                query,
                body: None,
            };
            let response = self.transport.send(&request).await?;
            let body: JsonValue = response.json().await.map_err(Error::Http)?;

            let results = body
                .get("results")
                .and_then(JsonValue::as_array)
                .ok_or_else(|| Error::missing_results(endpoint.name))?;
            let count = results.len();

            let page_items: Vec<T> =
                serde_json::from_value(JsonValue::Array(results.clone()))?;
            items.extend(page_items);
            pages += 1;

            debug!(
                "{}: page {pages} fetched {count} items ({} total)",
                endpoint.name,
                items.len()
            );

            match paginator.process_response(&body, count, &mut state) {
                NextPage::Continue { .. } => {}
                NextPage::Done => break,
            }
        }

        Ok(items)
    }

    /// Warn on parameters the catalog doesn't list for this operation
    ///
    /// The typed surfaces can't produce these; the check guards direct
    /// catalog users. The request still goes out — the server ignores
    /// unknown parameters.
    fn check_params(&self, endpoint: &Endpoint, query: &StringMap) {
        for key in query.keys() {
            if !endpoint.allows_param(key) {
                warn!("{}: unknown query parameter '{key}'", endpoint.name);
            }
        }
    }
}

/// Encode a params struct as a flat query map
///
/// Nulls are skipped, scalars stringified, and arrays comma-joined — so an
/// `ids` list of `[1, 2, 3]` goes over the wire as `"1,2,3"`.
pub(crate) fn to_query_map(params: &impl Serialize) -> Result<StringMap> {
    let value = serde_json::to_value(params)?;
    let JsonValue::Object(fields) = value else {
        return Err(Error::validation("query parameters must be an object"));
    };

    let mut map = StringMap::new();
    for (key, value) in fields {
        match value {
            JsonValue::Null => {}
            JsonValue::Array(items) => {
                let joined = items
                    .iter()
                    .map(scalar_to_string)
                    .collect::<Result<Vec<_>>>()?
                    .join(",");
                map.insert(key, joined);
            }
            other => {
                map.insert(key, scalar_to_string(&other)?);
            }
        }
    }
    Ok(map)
}

fn scalar_to_string(value: &JsonValue) -> Result<String> {
    match value {
        JsonValue::String(s) => Ok(s.clone()),
        JsonValue::Number(n) => Ok(n.to_string()),
        JsonValue::Bool(b) => Ok(b.to_string()),
        other => Err(Error::validation(format!(
            "unsupported query parameter value: {other}"
        ))),
    }
}
