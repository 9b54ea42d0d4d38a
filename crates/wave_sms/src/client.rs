use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};

/// Client for the Wave outbound SMS endpoint: one request, one receipt.
#[derive(Debug, Clone)]
pub struct SmsClient {
    http_client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendSms {
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ref: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendReceipt {
    pub message_id: String,
    pub to: String,
    pub status: String,
    pub remaining_balance: Option<String>,
}

impl SmsClient {
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

    pub async fn send(&self, sms: &SendSms) -> Result<SendReceipt> {
        let response = self
            .http_client
            .post(format!("{}/v1/sms", self.base_url))
            .json(sms)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "SMS send failed");
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
