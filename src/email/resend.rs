use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use super::{
  provider::{EmailProvider, ProviderError},
  types::{OutboundEmail, ResendConfig},
};

/// Delivers messages through the Resend HTTP API.
pub struct ResendProvider {
  client: Client,
  api_url: Url,
  api_key: String,
}

impl ResendProvider {
  pub fn new(config: ResendConfig, timeout: Duration) -> Result<Self> {
    let api_url = Url::parse(&config.api_url).with_context(|| format!("invalid Resend API url: {}", config.api_url))?;
    let client = Client::builder()
      .timeout(timeout)
      .build()
      .context("build reqwest client")?;

    Ok(ResendProvider {
      client,
      api_url,
      api_key: config.api_key,
    })
  }
}

#[async_trait]
impl EmailProvider for ResendProvider {
  async fn send(&self, email: &OutboundEmail) -> Result<Value, ProviderError> {
    let response = self
      .client
      .post(self.api_url.clone())
      .bearer_auth(&self.api_key)
      .json(email)
      .send()
      .await
      .map_err(|e| ProviderError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      let body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("<unreadable provider response: {}>", e));
      return Err(ProviderError::Rejected {
        status: status.as_u16(),
        body,
      });
    }

    let bytes = response
      .bytes()
      .await
      .map_err(|e| ProviderError::Transport(e.to_string()))?;
    if bytes.is_empty() {
      return Ok(Value::Null);
    }

    serde_json::from_slice(&bytes)
      .map_err(|e| ProviderError::Internal(format!("Failed to decode provider response: {}", e)))
  }
}
