use std::{error::Error, fmt, sync::Arc};

use async_trait::async_trait;
use serde_json::Value;

use super::types::OutboundEmail;

#[derive(Debug)]
pub enum ProviderError {
  /// The provider answered with a non-2xx status.
  Rejected { status: u16, body: String },
  /// The provider could not be reached or did not answer in time.
  Transport(String),
  Internal(String),
}

impl Error for ProviderError {}

impl fmt::Display for ProviderError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ProviderError::Rejected { status, body } => write!(f, "Provider rejected message ({}): {}", status, body),
      ProviderError::Transport(msg) => write!(f, "Provider transport error: {}", msg),
      ProviderError::Internal(msg) => write!(f, "Provider internal error: {}", msg),
    }
  }
}

/// A backend able to deliver one [`OutboundEmail`].
///
/// Implementations make exactly one delivery attempt per call and return the
/// provider's response payload on success.
#[async_trait]
pub trait EmailProvider: Send + Sync {
  async fn send(&self, email: &OutboundEmail) -> Result<Value, ProviderError>;
}

#[async_trait]
impl<T> EmailProvider for Arc<T>
where
  T: EmailProvider + ?Sized,
{
  async fn send(&self, email: &OutboundEmail) -> Result<Value, ProviderError> {
    (**self).send(email).await
  }
}
