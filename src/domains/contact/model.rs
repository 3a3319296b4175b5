use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::{config::EnvelopeConfig, email::OutboundEmail};

pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";
pub const SUBJECT_PREFIX: &str = "Portfolio Contact: ";

static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Contact form payload as it arrives over the wire. Every field may be
/// missing or `null`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContactRequest {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub subject: Option<String>,
  #[serde(default)]
  pub message: Option<String>,
}

impl ContactRequest {
  pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
    ContactRequest {
      name: Some(name.to_string()),
      email: Some(email.to_string()),
      subject: Some(subject.to_string()),
      message: Some(message.to_string()),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ContactSubmission {
  #[validate(length(min = 1, message = "All fields are required"))]
  pub name: String,
  #[validate(
    length(min = 1, message = "All fields are required"),
    regex(path = *RE_EMAIL, message = "Invalid email address")
  )]
  pub email: String,
  #[validate(length(min = 1, message = "All fields are required"))]
  pub subject: String,
  #[validate(length(min = 1, message = "All fields are required"))]
  pub message: String,
}

impl From<ContactRequest> for ContactSubmission {
  fn from(req: ContactRequest) -> Self {
    let clean = |field: Option<String>| field.map(|v| v.trim().to_string()).unwrap_or_default();

    ContactSubmission {
      name: clean(req.name),
      email: clean(req.email),
      subject: clean(req.subject),
      message: clean(req.message),
    }
  }
}

impl ContactSubmission {
  /// Validates the submission, reporting a missing field ahead of a malformed
  /// email address.
  pub fn check(&self) -> Result<(), &'static str> {
    let errors = match self.validate() {
      Ok(()) => return Ok(()),
      Err(errors) => errors,
    };

    let missing = errors
      .field_errors()
      .values()
      .flat_map(|errs| errs.iter())
      .any(|err| err.code == "length");

    if missing {
      Err(REQUIRED_FIELDS_MESSAGE)
    } else {
      Err(INVALID_EMAIL_MESSAGE)
    }
  }

  pub fn email_subject(&self) -> String {
    format!("{}{}", SUBJECT_PREFIX, self.subject)
  }

  pub fn email_body(&self) -> String {
    format!(
      "New contact form submission from your portfolio:\n\n\
       Name: {name}\n\
       Email: {email}\n\
       Subject: {subject}\n\n\
       Message:\n\
       {message}\n\n\
       ---\n\
       This message was sent from your portfolio contact form.\n\
       You can reply directly to this email to respond to {name}.",
      name = self.name,
      email = self.email,
      subject = self.subject,
      message = self.message,
    )
  }

  pub fn to_outbound(&self, envelope: &EnvelopeConfig) -> OutboundEmail {
    OutboundEmail::new(
      envelope.from.clone(),
      envelope.recipients.clone(),
      self.email_subject(),
      self.email_body(),
      self.email.clone(),
    )
  }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactResponse {
  pub success: bool,
  pub message: String,
  pub data: Value,
}

impl ContactResponse {
  pub fn sent(data: Value) -> Self {
    ContactResponse {
      success: true,
      message: "Email sent successfully".to_string(),
      data,
    }
  }
}
