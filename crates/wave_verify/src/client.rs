use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};

/// Client for the Wave verification endpoint: start a code delivery, then
/// check the code the user supplies.
#[derive(Debug, Clone)]
pub struct VerifyClient {
    http_client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StartVerification {
    pub number: String,
    pub brand: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_length: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Verification {
    pub request_id: String,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckResult {
    pub request_id: String,
    pub status: String,
}

impl VerifyClient {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            format!("Bearer {}", token.into())
                .parse()
                .map_err(|e| Error::Config(format!("invalid token header: {e}")))?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: "https://api.wavecomm.dev".to_owned(),
        })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub async fn start(&self, request: &StartVerification) -> Result<Verification> {
        self.post_json(&format!("{}/v1/verify", self.base_url), request)
            .await
    }

    pub async fn check(&self, request_id: &str, code: &str) -> Result<CheckResult> {
        #[derive(Serialize)]
        struct CheckBody<'a> {
            code: &'a str,
        }

        self.post_json(
            &format!("{}/v1/verify/{request_id}/check", self.base_url),
            &CheckBody { code },
        )
        .await
    }

    async fn post_json<T, B>(&self, url: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: Serialize,
    {
        let response = self.http_client.post(url).json(body).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "verification request failed");
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|value| {
                    value
                        .get("title")
                        .and_then(Value::as_str)
                        .map(str::to_owned)
                })
                .unwrap_or(body);

            return Err(Error::Api {
                code: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(Into::into)
    }
}
