//! Contact workflow configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Credentials for the email service and the fixed recipient identity are
//! resolved once at startup and handed to the workflow constructor. Nothing
//! downstream reads the process environment.

use std::time::Duration;

use crate::contact::validate::is_valid_email;

pub const DEFAULT_EMAILJS_BASE_URL: &str = "https://api.emailjs.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing config: env var {var} not set")]
    Missing { var: &'static str },
    #[error("invalid config for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Credentials for the EmailJS REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Sent as `accessToken` when the account requires private-key auth.
    pub private_key: Option<String>,
    pub base_url: String,
}

/// Who receives every contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request: Duration,
    pub connect: Duration,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub emailjs: EmailJsConfig,
    pub recipient: Recipient,
    pub timeouts: HttpTimeouts,
}

impl ContactConfig {
    /// Build typed contact config from environment variables.
    ///
    /// Required:
    /// - `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`, `EMAILJS_PUBLIC_KEY`
    /// - `CONTACT_TO_NAME`, `CONTACT_TO_EMAIL`
    ///
    /// Optional:
    /// - `EMAILJS_PRIVATE_KEY`
    /// - `EMAILJS_BASE_URL`: default `https://api.emailjs.com`
    /// - `EMAILJS_REQUEST_TIMEOUT_SECS`: default 30
    /// - `EMAILJS_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is unset or blank,
    /// or when a value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ContactConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`ContactConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &'static str| lookup(var).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let require = |var: &'static str| get(var).ok_or(ConfigError::Missing { var });

        let emailjs = EmailJsConfig {
            service_id: require("EMAILJS_SERVICE_ID")?,
            template_id: require("EMAILJS_TEMPLATE_ID")?,
            public_key: require("EMAILJS_PUBLIC_KEY")?,
            private_key: get("EMAILJS_PRIVATE_KEY"),
            base_url: get("EMAILJS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_EMAILJS_BASE_URL.to_owned())
                .trim_end_matches('/')
                .to_owned(),
        };

        let recipient = Recipient { name: require("CONTACT_TO_NAME")?, email: require("CONTACT_TO_EMAIL")? };
        if !is_valid_email(&recipient.email) {
            return Err(ConfigError::Invalid {
                var: "CONTACT_TO_EMAIL",
                reason: format!("'{}' is not an email address", recipient.email),
            });
        }

        let timeouts = HttpTimeouts {
            request: parse_secs(
                "EMAILJS_REQUEST_TIMEOUT_SECS",
                get("EMAILJS_REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
            connect: parse_secs(
                "EMAILJS_CONNECT_TIMEOUT_SECS",
                get("EMAILJS_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        };

        Ok(Self { emailjs, recipient, timeouts })
    }
}

fn parse_secs(var: &'static str, raw: Option<String>, default: u64) -> Result<Duration, ConfigError> {
    let Some(raw) = raw else {
        return Ok(Duration::from_secs(default));
    };
    raw.parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::Invalid { var, reason: format!("'{raw}': {e}") })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
