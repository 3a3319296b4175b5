use std::sync::Arc;

use crate::{
  config::{ProviderConfig, RelayConfig},
  email::{EmailProvider, ResendProvider, SmtpProvider},
};

pub mod error;

pub fn init_email_provider(config: &RelayConfig) -> anyhow::Result<Arc<dyn EmailProvider>> {
  let provider: Arc<dyn EmailProvider> = match &config.provider {
    ProviderConfig::Resend(resend) => {
      tracing::info!("Using Resend email provider at {}", resend.api_url);
      Arc::new(ResendProvider::new(resend.clone(), config.provider_timeout)?)
    }
    ProviderConfig::Smtp(smtp) => {
      tracing::info!("Using SMTP email provider at {}:{}", smtp.host, smtp.port);
      Arc::new(SmtpProvider::new(smtp.clone(), config.provider_timeout)?)
    }
  };

  Ok(provider)
}
