//! Outbound email (SendGrid) configuration

use serde::{Deserialize, Serialize};

/// SendGrid mail delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// SendGrid API key
    pub api_key: String,

    /// Sender address
    pub from_address: String,

    /// Sender display name
    pub from_name: String,

    /// SendGrid API base URL (overridable for testing)
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            from_address: String::from("no-reply@authify.dev"),
            from_name: String::from("Authify"),
            base_url: default_base_url(),
        }
    }
}

impl MailConfig {
    /// Load from `SENDGRID_API_KEY`, `MAIL_FROM` and `MAIL_FROM_NAME`
    pub fn from_env() -> Self {
        let api_key = std::env::var("SENDGRID_API_KEY").unwrap_or_default();
        let from_address =
            std::env::var("MAIL_FROM").unwrap_or_else(|_| "no-reply@authify.dev".to_string());
        let from_name = std::env::var("MAIL_FROM_NAME").unwrap_or_else(|_| "Authify".to_string());

        Self {
            api_key,
            from_address,
            from_name,
            base_url: default_base_url(),
        }
    }

    /// True when no API key is configured; delivery will be skipped and logged
    pub fn is_unconfigured(&self) -> bool {
        self.api_key.is_empty()
    }
}

fn default_base_url() -> String {
    String::from("https://api.sendgrid.com")
}
