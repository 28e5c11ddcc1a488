//! Token claim set and the access/refresh pair value object.

use serde::{Deserialize, Serialize};

/// Claims embedded in every issued JWT
///
/// Access tokens carry the subject's role; refresh tokens leave it out.
/// Validity is fully determined by the signature and `exp`; nothing is
/// persisted server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account's email address
    pub sub: String,

    /// Role label, present on access tokens only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Issued-at, seconds since the epoch
    pub iat: i64,

    /// Expiry, seconds since the epoch
    pub exp: i64,

    /// Issuing service
    pub iss: String,
}

impl Claims {
    /// Whether the token is past its expiry at `now` (epoch seconds)
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.exp
    }
}

/// The (access, refresh) pair returned by every token-issuing operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived credential for API calls
    pub access_token: String,

    /// Long-lived credential exchanged for new access tokens
    pub refresh_token: String,
}
