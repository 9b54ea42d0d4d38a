use std::sync::Arc;

use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    Error, Result,
    conversations::ConversationsHandler,
    error::{ApiError, StatusCode},
    members::MembersHandler,
    page::{Collection, Page, WirePage},
};

/// Client for the Wave conversation service.
///
/// Cheap to clone; all clones share one connection pool. Each call performs
/// a single bounded round trip with no internal fan-out; errors propagate
/// unmodified and are never retried here.
#[derive(Clone)]
pub struct ChatClient {
    pub(crate) inner: Arc<Inner>,
}

pub(crate) struct Inner {
    pub(crate) client: Client,
    pub(crate) api_base: String,
}

pub struct ChatClientBuilder {
    token: Option<String>,
    api_base: String,
}

impl ChatClient {
    #[must_use]
    pub fn builder() -> ChatClientBuilder {
        ChatClientBuilder {
            token: None,
            api_base: "https://api.wavecomm.dev".to_owned(),
        }
    }

    #[must_use]
    pub fn conversations(&self) -> ConversationsHandler {
        ConversationsHandler {
            client: self.clone(),
        }
    }

    #[must_use]
    pub fn members(&self, conversation_id: impl Into<String>) -> MembersHandler {
        MembersHandler {
            client: self.clone(),
            conversation_id: conversation_id.into(),
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        let request = self
            .inner
            .client
            .get(format!("{}{}", self.inner.api_base, path))
            .query(query);

        self.send_json(request).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self
            .inner
            .client
            .post(format!("{}{}", self.inner.api_base, path))
            .json(body);

        self.send_json(request).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self
            .inner
            .client
            .put(format!("{}{}", self.inner.api_base, path))
            .json(body);

        self.send_json(request).await
    }

    pub(crate) async fn patch_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self
            .inner
            .client
            .patch(format!("{}{}", self.inner.api_base, path))
            .json(body);

        self.send_json(request).await
    }

    /// Expects an empty success response and performs no body parsing.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let request = self
            .inner
            .client
            .delete(format!("{}{}", self.inner.api_base, path));

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await?;
        warn!(status = status.as_u16(), "chat API request failed");
        Err(api_error(status, body))
    }

    /// One bounded fetch against a collection endpoint: a single round
    /// trip, no retries, no follow-up pagination.
    pub(crate) async fn fetch_page<T: Collection>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Page<T>> {
        let wire: WirePage = self.get_json(path, query).await?;
        let page = wire.into_page()?;
        debug!(%path, items = page.items.len(), "fetched collection page");
        Ok(page)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "chat API request failed");
            return Err(api_error(status, body));
        }

        serde_json::from_str(&body).map_err(Into::into)
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(base_url: &str, token: Option<&str>) -> Self {
        let client = build_http_client(token).expect("test client to build");

        Self {
            inner: Arc::new(Inner {
                client,
                api_base: base_url.to_owned(),
            }),
        }
    }
}

impl ChatClientBuilder {
    /// Bearer token for the `Authorization` header. Token issuance and
    /// signing happen outside this client.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn build(self) -> Result<ChatClient> {
        let client = build_http_client(self.token.as_deref())?;

        Ok(ChatClient {
            inner: Arc::new(Inner {
                client,
                api_base: self.api_base,
            }),
        })
    }
}

fn build_http_client(token: Option<&str>) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(token) = token {
        let token = format!("Bearer {token}");
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&token)?);
    }

    Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|error| Error::Build(format!("{error:#}")))
}

fn api_error(status: reqwest::StatusCode, body: String) -> Error {
    let value = serde_json::from_str::<Value>(&body).ok();
    let title = value
        .as_ref()
        .and_then(|value| {
            value
                .get("title")
                .or_else(|| value.get("description"))
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));
    let detail = value
        .as_ref()
        .and_then(|value| value.get("detail").and_then(Value::as_str).map(str::to_owned));

    Error::Api {
        source: ApiError {
            status_code: StatusCode::new(status.as_u16()),
            title,
            detail,
        },
        body: Some(body),
    }
}
