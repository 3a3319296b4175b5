use std::{env, net::SocketAddr, time::Duration};

use anyhow::{anyhow, bail, Context, Result};

use crate::email::{ResendConfig, SmtpConfig, DEFAULT_RESEND_API_URL};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_CONTACT_FROM: &str = "Portfolio Contact Form <onboarding@resend.dev>";
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub enum ProviderConfig {
  Resend(ResendConfig),
  Smtp(SmtpConfig),
}

/// Sender and recipients of every relayed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeConfig {
  pub from: String,
  pub recipients: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
  pub bind_address: SocketAddr,
  pub provider: ProviderConfig,
  pub envelope: EnvelopeConfig,
  pub provider_timeout: Duration,
  pub expose_error_details: bool,
}

impl RelayConfig {
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Builds the configuration from an arbitrary key lookup. Empty values are
  /// treated as unset.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let require = |key: &str| get(key).ok_or_else(|| anyhow!("{} environment variable must be set.", key));

    let bind_address = get("BIND_ADDRESS")
      .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
      .parse()
      .context("BIND_ADDRESS must be a socket address")?;

    let provider = match get("EMAIL_PROVIDER").as_deref().unwrap_or("resend") {
      "resend" => ProviderConfig::Resend(ResendConfig {
        api_key: require("RESEND_API_KEY")?,
        api_url: get("RESEND_API_URL").unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string()),
      }),
      "smtp" => {
        let defaults = SmtpConfig::default();
        ProviderConfig::Smtp(SmtpConfig {
          host: get("SMTP_HOST").unwrap_or(defaults.host),
          port: match get("SMTP_PORT") {
            Some(port) => port.parse().context("SMTP_PORT must be a port number")?,
            None => defaults.port,
          },
          username: require("SMTP_USERNAME")?,
          password: require("SMTP_PASSWORD")?,
        })
      }
      other => bail!("EMAIL_PROVIDER must be 'resend' or 'smtp', got '{}'", other),
    };

    let recipients: Vec<String> = require("CONTACT_RECIPIENT")?
      .split(',')
      .map(|r| r.trim().to_string())
      .filter(|r| !r.is_empty())
      .collect();
    if recipients.is_empty() {
      bail!("CONTACT_RECIPIENT must name at least one address");
    }

    let envelope = EnvelopeConfig {
      from: get("CONTACT_FROM").unwrap_or_else(|| DEFAULT_CONTACT_FROM.to_string()),
      recipients,
    };

    let provider_timeout = match get("PROVIDER_TIMEOUT_SECS") {
      Some(secs) => Duration::from_secs(secs.parse().context("PROVIDER_TIMEOUT_SECS must be a whole number")?),
      None => Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
    };

    let expose_error_details = match get("EXPOSE_ERROR_DETAILS") {
      Some(flag) => parse_flag(&flag).context("EXPOSE_ERROR_DETAILS must be true or false")?,
      None => true,
    };

    Ok(RelayConfig {
      bind_address,
      provider,
      envelope,
      provider_timeout,
      expose_error_details,
    })
  }
}

fn parse_flag(value: &str) -> Result<bool> {
  match value.to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" => Ok(false),
    other => bail!("unrecognized flag value '{}'", other),
  }
}
