//! Notion REST API client
//!
//! This module provides the reqwest-backed implementation of
//! [`ContentSource`]. Every request carries the bearer token, the
//! `Notion-Version` header and the configured User-Agent.

use super::models::{ApiErrorBody, ListResponse, QueryDatabaseRequest, RawBlock, RawPage};
use super::source::ContentSource;
use crate::config::NotionConfig;
use crate::domain::{
    Block, BlockId, CursorPage, DatabaseId, Entry, ExportError, RequestError, Result,
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, RequestBuilder};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Header carrying the API version
pub const NOTION_VERSION_HEADER: &str = "notion-version";

/// Notion API client
///
/// # Example
///
/// ```no_run
/// use notion_export::adapters::notion::NotionClient;
/// use notion_export::config::{secret_string, NotionConfig};
///
/// # fn example() -> notion_export::domain::Result<()> {
/// let config = NotionConfig {
///     api_key: Some(secret_string("secret_abc".to_string())),
///     ..Default::default()
/// };
/// let client = NotionClient::new(&config)?;
/// # Ok(())
/// # }
/// ```
pub struct NotionClient {
    /// API host, always ending in `/`
    base_url: Url,

    /// HTTP client with default headers installed
    client: Client,

    /// Results requested per page
    page_size: u32,
}

impl NotionClient {
    /// Create a new client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no API key is configured, the base
    /// URL is invalid, or a header value cannot be encoded.
    pub fn new(config: &NotionConfig) -> Result<Self> {
        let api_key = config.api_key.as_ref().ok_or_else(|| {
            ExportError::Configuration(
                "No API key provided. Pass KEY or set NOTION_API_KEY".to_string(),
            )
        })?;

        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).map_err(|e| {
            ExportError::Configuration(format!("Invalid base URL '{}': {e}", config.base_url))
        })?;

        let mut auth = HeaderValue::from_str(&api_key.expose_secret().bearer())
            .map_err(|_| ExportError::Configuration("API key contains invalid characters".to_string()))?;
        auth.set_sensitive(true);

        let version = HeaderValue::from_str(&config.api_version).map_err(|_| {
            ExportError::Configuration(format!("Invalid API version '{}'", config.api_version))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(HeaderName::from_static(NOTION_VERSION_HEADER), version);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = ClientBuilder::new()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(|e| ExportError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        tracing::debug!(
            base_url = %base_url,
            api_version = %config.api_version,
            page_size = config.page_size,
            "Notion client created"
        );

        Ok(Self {
            base_url,
            client,
            page_size: config.page_size,
        })
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ExportError::Configuration(format!("Invalid endpoint path '{path}': {e}")))
    }

    /// Send a request and decode a JSON body, mapping every non-2xx status
    /// to a [`RequestError`]
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, url: &Url) -> Result<T> {
        let resp = request.send().await.map_err(|e| {
            if e.is_timeout() {
                RequestError::Timeout(format!("{url}: {e}"))
            } else {
                RequestError::ConnectionFailed(format!("{url}: {e}"))
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let detail = match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(api_error) if !api_error.message.is_empty() => {
                    format!("{} ({})", api_error.message, api_error.code)
                }
                _ => body,
            };

            tracing::error!(
                url = %url,
                status = status.as_u16(),
                detail = %detail,
                "Notion API request failed"
            );

            return Err(RequestError::from_status(status.as_u16(), format!("{url}: {detail}")).into());
        }

        resp.json::<T>()
            .await
            .map_err(|e| RequestError::InvalidResponse(format!("{url}: {e}")).into())
    }
}

#[async_trait]
impl ContentSource for NotionClient {
    async fn query_database(
        &self,
        database: &DatabaseId,
        cursor: Option<String>,
    ) -> Result<CursorPage<Entry>> {
        let url = self.endpoint(&format!("v1/databases/{database}/query"))?;
        let body = QueryDatabaseRequest {
            page_size: self.page_size,
            start_cursor: cursor.as_deref(),
        };

        tracing::debug!(
            database = %database,
            cursor = ?cursor,
            "Querying database"
        );

        let request = self.client.post(url.clone()).json(&body);
        let response: ListResponse<RawPage> = self.send(request, &url).await?;

        response.into_cursor_page(RawPage::to_domain)
    }

    async fn list_children(
        &self,
        parent: &BlockId,
        cursor: Option<String>,
    ) -> Result<CursorPage<Block>> {
        let url = self.endpoint(&format!("v1/blocks/{parent}/children"))?;
        let mut query = vec![("page_size", self.page_size.to_string())];
        if let Some(cursor) = &cursor {
            query.push(("start_cursor", cursor.clone()));
        }

        tracing::debug!(
            parent = %parent,
            cursor = ?cursor,
            "Listing block children"
        );

        let request = self.client.get(url.clone()).query(&query);
        let response: ListResponse<RawBlock> = self.send(request, &url).await?;

        response.into_cursor_page(RawBlock::to_domain)
    }
}
