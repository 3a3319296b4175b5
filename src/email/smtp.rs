use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, Mailbox},
  transport::smtp::authentication::Credentials,
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use serde_json::{json, Value};

use super::{
  provider::{EmailProvider, ProviderError},
  types::{OutboundEmail, SmtpConfig},
};

/// Delivers messages over SMTP.
pub struct SmtpProvider {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpProvider {
  pub fn new(smtp_config: SmtpConfig, timeout: Duration) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .timeout(Some(timeout))
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .timeout(Some(timeout))
        .build()
    };

    Ok(SmtpProvider {
      smtp_config,
      transporter,
    })
  }

  pub fn build_message(email: &OutboundEmail) -> Result<Message, ProviderError> {
    let mut builder = Message::builder()
      .from(parse_mailbox(&email.from)?)
      .reply_to(parse_mailbox(&email.reply_to)?)
      .subject(&email.subject)
      .header(ContentType::TEXT_PLAIN);

    for recipient in &email.to {
      builder = builder.to(parse_mailbox(recipient)?);
    }

    builder
      .body(email.text.clone())
      .map_err(|e| ProviderError::Internal(format!("Failed to build message: {}", e)))
  }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, ProviderError> {
  address
    .parse()
    .map_err(|e| ProviderError::Internal(format!("Invalid mailbox '{}': {}", address, e)))
}

#[async_trait]
impl EmailProvider for SmtpProvider {
  async fn send(&self, email: &OutboundEmail) -> Result<Value, ProviderError> {
    let message = Self::build_message(email)?;

    let response = self.transporter.send(message).await.map_err(|e| {
      if e.is_permanent() || e.is_transient() {
        ProviderError::Rejected {
          status: e.status().and_then(|code| code.to_string().parse().ok()).unwrap_or(0),
          body: e.to_string(),
        }
      } else {
        ProviderError::Transport(format!("{} ({})", e, self.smtp_config.host))
      }
    })?;

    Ok(json!({
      "code": response.code().to_string(),
      "message": response.first_line().unwrap_or_default(),
    }))
  }
}
