use async_trait::async_trait;
use serde_json::Value;
use std::error::Error;

use super::model::{ContactRequest, ContactSubmission};
use crate::{
  config::EnvelopeConfig,
  email::{EmailProvider, ProviderError},
};

#[derive(Debug)]
pub enum ContactServiceError {
  ValidationError(String),
  /// The email provider answered with a failure; carries its raw response body.
  ProviderError(String),
  InternalServerError(String),
}

impl Error for ContactServiceError {}

impl std::fmt::Display for ContactServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ContactServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      ContactServiceError::ProviderError(msg) => write!(f, "Provider Error: {}", msg),
      ContactServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
    }
  }
}

impl From<ProviderError> for ContactServiceError {
  fn from(err: ProviderError) -> Self {
    match err {
      ProviderError::Rejected { body, .. } => ContactServiceError::ProviderError(body),
      ProviderError::Transport(msg) => ContactServiceError::InternalServerError(msg),
      ProviderError::Internal(msg) => ContactServiceError::InternalServerError(msg),
    }
  }
}

/// Outcome of one relay attempt: the provider payload, or why nothing was sent.
pub type RelayResult = Result<Value, ContactServiceError>;

#[async_trait]
pub trait ContactService: Send + Sync {
  async fn submit(&self, req: ContactRequest) -> RelayResult;
}

pub struct ContactServiceImpl<P> {
  provider: P,
  envelope: EnvelopeConfig,
}

impl<P> ContactServiceImpl<P>
where
  P: EmailProvider,
{
  pub fn new(provider: P, envelope: EnvelopeConfig) -> Self {
    Self { provider, envelope }
  }
}

#[async_trait]
impl<P> ContactService for ContactServiceImpl<P>
where
  P: EmailProvider,
{
  async fn submit(&self, req: ContactRequest) -> RelayResult {
    let submission = ContactSubmission::from(req);
    submission
      .check()
      .map_err(|msg| ContactServiceError::ValidationError(msg.to_string()))?;

    let email = submission.to_outbound(&self.envelope);

    match self.provider.send(&email).await {
      Ok(data) => {
        tracing::info!("Contact email relayed to {} recipient(s)", email.to.len());
        Ok(data)
      }
      Err(e) => {
        tracing::error!("Email provider error: {}", e);
        Err(e.into())
      }
    }
  }
}
