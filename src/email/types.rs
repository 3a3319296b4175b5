use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
    }
  }
}

impl fmt::Debug for SmtpConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SmtpConfig")
      .field("host", &self.host)
      .field("port", &self.port)
      .field("username", &self.username)
      .field("password", &"[redacted]")
      .finish()
  }
}

pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com/emails";

#[derive(Clone, Deserialize)]
pub struct ResendConfig {
  pub api_key: String,
  pub api_url: String,
}

impl fmt::Debug for ResendConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ResendConfig")
      .field("api_key", &"[redacted]")
      .field("api_url", &self.api_url)
      .finish()
  }
}

/// Outbound message handed to an [`EmailProvider`](super::EmailProvider).
///
/// Serializes with the field names the Resend `/emails` endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
  pub from: String,
  pub to: Vec<String>,
  pub subject: String,
  pub text: String,
  pub reply_to: String,
}

impl OutboundEmail {
  pub fn new(from: String, to: Vec<String>, subject: String, text: String, reply_to: String) -> Self {
    OutboundEmail {
      from,
      to,
      subject,
      text,
      reply_to,
    }
  }
}
