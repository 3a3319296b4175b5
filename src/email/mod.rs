//! Outbound email delivery.
//!
//! [`EmailProvider`] is the seam the contact relay depends on. Two backends
//! are available: the Resend HTTP API and a plain SMTP relay built on lettre.

mod provider;
mod resend;
mod smtp;
mod types;

pub use provider::{EmailProvider, ProviderError};
pub use resend::ResendProvider;
pub use smtp::SmtpProvider;
pub use types::{OutboundEmail, ResendConfig, SmtpConfig, DEFAULT_RESEND_API_URL};
