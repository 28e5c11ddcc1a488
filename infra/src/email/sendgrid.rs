//! SendGrid Email Delivery
//!
//! Sends the verification, password-reset and welcome mails through the
//! SendGrid v3 Mail Send API. Implements the core notification boundary,
//! so delivery failures surface as domain errors that the calling flow
//! logs and swallows.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use authify_core::errors::{DomainError, DomainResult};
use authify_core::services::NotificationDispatcher;
use authify_shared::config::MailConfig;

use super::mask_email;

/// Application display name used in subjects and bodies
const APP_NAME: &str = "Authify";

/// SendGrid mail dispatcher
pub struct SendGridMailer {
    /// Shared HTTP client
    http: reqwest::Client,
    /// Delivery configuration
    config: MailConfig,
}

impl SendGridMailer {
    /// Create a new SendGrid mailer
    ///
    /// When no API key is configured the mailer still constructs; sends
    /// are then logged and dropped so development setups work without a
    /// SendGrid account.
    pub fn new(config: MailConfig) -> Self {
        if config.is_unconfigured() {
            warn!("SENDGRID_API_KEY not set, outbound mail will be logged and dropped");
        }
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::new(MailConfig::from_env())
    }

    /// Send a single HTML mail through the v3 Mail Send API
    async fn send_html(&self, to: &str, subject: &str, html_body: &str) -> DomainResult<()> {
        if self.config.is_unconfigured() {
            info!(
                "Mail delivery skipped (no API key): \"{}\" to {}",
                subject,
                mask_email(to)
            );
            return Ok(());
        }

        let payload = json!({
            "personalizations": [{ "to": [{ "email": to }] }],
            "from": { "email": self.config.from_address, "name": self.config.from_name },
            "subject": subject,
            "content": [{ "type": "text/html", "value": html_body }],
        });

        let url = format!("{}/v3/mail/send", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .timeout(Duration::from_secs(30))
            .send()
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to reach SendGrid: {}", e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Internal {
                message: format!("SendGrid rejected the mail ({}): {}", status, body),
            });
        }

        info!("Mail sent: \"{}\" to {}", subject, mask_email(to));
        Ok(())
    }
}

#[async_trait]
impl NotificationDispatcher for SendGridMailer {
    async fn send_verification_otp(&self, to: &str, name: &str, otp: &str) -> DomainResult<()> {
        let subject = format!("Verify your email - {}", APP_NAME);
        let html_body = format!(
            "<h3>Hello {},</h3>\
             <p>Your verification OTP is: <b>{}</b></p>\
             <p>This OTP will expire in 10 minutes.</p>\
             <p>Thank you for registering with {}!</p>",
            name, otp, APP_NAME
        );

        self.send_html(to, &subject, &html_body).await
    }

    async fn send_password_reset_otp(&self, to: &str, _name: &str, otp: &str) -> DomainResult<()> {
        let subject = format!("Reset your Password - {}", APP_NAME);
        let html_body = format!(
            "<p>Your password reset OTP is: <b>{}</b></p>\
             <p>This OTP will expire in 10 minutes.</p>\
             <p>If you did not request this, please ignore this email.</p>",
            otp
        );

        self.send_html(to, &subject, &html_body).await
    }

    async fn send_welcome(&self, to: &str, name: &str) -> DomainResult<()> {
        let subject = format!("Welcome to {}! 🎉", APP_NAME);
        let html_body = format!(
            "<h3>Hello {},</h3>\
             <p>Your email has been successfully verified.</p>\
             <h1>Welcome to {} ❤️</h1>\
             <p>You can now log in and start using your account.</p>\
             <p>Regards,<br/>{} Team</p>",
            name, APP_NAME, APP_NAME
        );

        self.send_html(to, &subject, &html_body).await
    }
}
