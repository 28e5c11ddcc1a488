//! Pending registration entity: a signup that has not proven its email yet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A not-yet-verified signup, keyed by email
///
/// Lives only between `register` and a successful `verify_otp`, which
/// deletes it. Re-registering the same email refreshes the code in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingRegistration {
    /// Email address being claimed (unique key)
    pub email: String,

    /// Display name for the eventual account
    pub name: String,

    /// bcrypt digest of the chosen password
    pub password_hash: String,

    /// Verification OTP sent to the email
    pub otp: String,

    /// When the OTP was generated
    pub otp_generated_at: DateTime<Utc>,

    /// When the OTP stops being accepted
    pub otp_expiry: DateTime<Utc>,
}

impl PendingRegistration {
    /// Creates a pending registration with a freshly issued OTP
    pub fn new(
        email: String,
        name: String,
        password_hash: String,
        otp: String,
        otp_expiry: DateTime<Utc>,
    ) -> Self {
        Self {
            email,
            name,
            password_hash,
            otp,
            otp_generated_at: Utc::now(),
            otp_expiry,
        }
    }

    /// Replaces the OTP and its validity window (retried registration)
    pub fn refresh_otp(&mut self, otp: String, expiry: DateTime<Utc>) {
        self.otp = otp;
        self.otp_generated_at = Utc::now();
        self.otp_expiry = expiry;
    }

    /// Exact-match check against the stored OTP
    pub fn otp_matches(&self, code: &str) -> bool {
        self.otp == code
    }

    /// Whether the OTP is past its validity window
    pub fn is_otp_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.otp_expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn pending(expiry: DateTime<Utc>) -> PendingRegistration {
        PendingRegistration::new(
            "alice@example.com".to_string(),
            "Alice".to_string(),
            "hash".to_string(),
            "123456".to_string(),
            expiry,
        )
    }

    #[test]
    fn test_otp_exact_match_only() {
        let p = pending(Utc::now() + Duration::minutes(10));
        assert!(p.otp_matches("123456"));
        assert!(!p.otp_matches("12345"));
        assert!(!p.otp_matches("1234567"));
        assert!(!p.otp_matches("654321"));
    }

    #[test]
    fn test_otp_expiry_boundary() {
        let now = Utc::now();
        let p = pending(now + Duration::minutes(10));
        assert!(!p.is_otp_expired(now));
        assert!(!p.is_otp_expired(now + Duration::minutes(10)));
        assert!(p.is_otp_expired(now + Duration::minutes(10) + Duration::seconds(1)));
    }

    #[test]
    fn test_refresh_otp_replaces_code_and_window() {
        let now = Utc::now();
        let mut p = pending(now + Duration::minutes(10));
        p.refresh_otp("999999".to_string(), now + Duration::minutes(20));

        assert!(p.otp_matches("999999"));
        assert!(!p.otp_matches("123456"));
        assert!(!p.is_otp_expired(now + Duration::minutes(15)));
    }
}
