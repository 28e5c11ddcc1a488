//! Outbound notification boundary.
//!
//! The auth service fires mail off the request path; a failed send is
//! logged by the caller and never surfaces into the originating flow.

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Boundary trait for transactional mail
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Send the signup verification code
    async fn send_verification_otp(&self, to: &str, name: &str, otp: &str) -> DomainResult<()>;

    /// Send the password reset code
    async fn send_password_reset_otp(&self, to: &str, name: &str, otp: &str) -> DomainResult<()>;

    /// Send the post-verification welcome mail
    async fn send_welcome(&self, to: &str, name: &str) -> DomainResult<()>;
}

#[cfg(any(test, feature = "mocks"))]
pub mod mock {
    //! Mock dispatcher that records every send for assertions.

    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use crate::errors::DomainResult;

    use super::NotificationDispatcher;

    /// A recorded outbound mail
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SentMail {
        VerificationOtp { to: String, otp: String },
        PasswordResetOtp { to: String, otp: String },
        Welcome { to: String },
    }

    /// Mock dispatcher backed by an in-memory log of sends
    #[derive(Default)]
    pub struct MockNotificationDispatcher {
        sent: Arc<RwLock<Vec<SentMail>>>,
    }

    impl MockNotificationDispatcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn sent(&self) -> Vec<SentMail> {
            self.sent.read().await.clone()
        }
    }

    #[async_trait]
    impl NotificationDispatcher for MockNotificationDispatcher {
        async fn send_verification_otp(
            &self,
            to: &str,
            _name: &str,
            otp: &str,
        ) -> DomainResult<()> {
            self.sent.write().await.push(SentMail::VerificationOtp {
                to: to.to_string(),
                otp: otp.to_string(),
            });
            Ok(())
        }

        async fn send_password_reset_otp(
            &self,
            to: &str,
            _name: &str,
            otp: &str,
        ) -> DomainResult<()> {
            self.sent.write().await.push(SentMail::PasswordResetOtp {
                to: to.to_string(),
                otp: otp.to_string(),
            });
            Ok(())
        }

        async fn send_welcome(&self, to: &str, _name: &str) -> DomainResult<()> {
            self.sent
                .write()
                .await
                .push(SentMail::Welcome { to: to.to_string() });
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "mocks"))]
pub use mock::{MockNotificationDispatcher, SentMail};
