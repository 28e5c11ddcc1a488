//! Email Module
//!
//! Transactional mail for the signup, reset and welcome flows. Production
//! delivery goes through SendGrid; the notification boundary lives in the
//! core crate so handlers and services never see the provider.
//!
//! ## Features
//!
//! - **SendGrid Support**: HTML mail via the v3 Mail Send API
//! - **Unconfigured Mode**: Logs and drops mail when no API key is set
//! - **Security**: Email address masking in logs

pub mod sendgrid;

pub use sendgrid::SendGridMailer;

/// Helper function to mask email addresses for logging
///
/// Shows the first character of the local part and the full domain.
///
/// # Example
///
/// ```
/// use authify_infra::email::mask_email;
///
/// assert_eq!(mask_email("alice@example.com"), "a****@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let visible: String = local.chars().take(1).collect();
            let masked = local.chars().count().saturating_sub(1);
            format!("{}{}@{}", visible, "*".repeat(masked), domain)
        }
        None => "*".repeat(email.chars().count()),
    }
}
