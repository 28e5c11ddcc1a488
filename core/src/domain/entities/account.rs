//! Account entity representing a verified user in the Authify system.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Authorization role carried on issued tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Regular user
    User,
    /// Administrator
    Admin,
}

impl Role {
    /// Wire/storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// How an account proved its identity at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthProvider {
    /// Email + password signup verified by OTP
    Local,
    /// Federated login through Google
    Google,
}

impl AuthProvider {
    /// Wire/storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "LOCAL",
            AuthProvider::Google => "GOOGLE",
        }
    }
}

impl std::str::FromStr for AuthProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOCAL" => Ok(AuthProvider::Local),
            "GOOGLE" => Ok(AuthProvider::Google),
            other => Err(format!("unknown auth provider: {}", other)),
        }
    }
}

/// A verified user account
///
/// Accounts only come into existence already email-verified: either the
/// OTP confirmation promoted a pending registration, or a federated login
/// vouched for the email. The OTP fields live here for the resend and
/// password-reset channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Store-assigned identifier (0 until persisted)
    pub id: i64,

    /// Display name
    pub name: String,

    /// Globally unique email address
    pub email: String,

    /// bcrypt digest; `None` for federated-only accounts
    pub password_hash: Option<String>,

    /// Authorization role
    pub role: Role,

    /// Whether the email address was proven
    pub email_verified: bool,

    /// False while the account is locked out of password login
    pub account_non_locked: bool,

    /// Consecutive failed password attempts since the last success
    pub failed_login_attempts: i32,

    /// When a lockout ends; `None` when not locked
    pub locked_until: Option<DateTime<Utc>>,

    /// Identity provider that created the account
    pub provider: AuthProvider,

    /// Current verification OTP (resend channel)
    pub otp: Option<String>,

    /// When the verification OTP was generated
    pub otp_generated_at: Option<DateTime<Utc>>,

    /// When the verification OTP stops being accepted
    pub otp_expiry: Option<DateTime<Utc>>,

    /// Current password-reset OTP
    pub reset_otp: Option<String>,

    /// When the password-reset OTP stops being accepted
    pub reset_otp_expiry: Option<DateTime<Utc>>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a verified local account from a confirmed registration
    pub fn new_local(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            email,
            password_hash: Some(password_hash),
            role: Role::User,
            email_verified: true,
            account_non_locked: true,
            failed_login_attempts: 0,
            locked_until: None,
            provider: AuthProvider::Local,
            otp: None,
            otp_generated_at: None,
            otp_expiry: None,
            reset_otp: None,
            reset_otp_expiry: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a verified account from a federated identity (no password)
    pub fn new_federated(name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            email,
            password_hash: None,
            role: Role::User,
            email_verified: true,
            account_non_locked: true,
            failed_login_attempts: 0,
            locked_until: None,
            provider: AuthProvider::Google,
            otp: None,
            otp_generated_at: None,
            otp_expiry: None,
            reset_otp: None,
            reset_otp_expiry: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether password login is currently refused
    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        if self.account_non_locked {
            return false;
        }
        // A lock without an end time never expires on its own
        self.locked_until.map_or(true, |until| now < until)
    }

    /// Whether a past lockout has run out and can be cleared
    pub fn lock_has_elapsed(&self, now: DateTime<Utc>) -> bool {
        !self.account_non_locked && self.locked_until.map_or(false, |until| now >= until)
    }

    /// Records a failed password attempt; locks the account when the
    /// threshold is reached. Returns true if this attempt locked it.
    pub fn record_failed_login(
        &mut self,
        max_attempts: u32,
        lock_duration_seconds: i64,
        now: DateTime<Utc>,
    ) -> bool {
        self.failed_login_attempts += 1;
        self.updated_at = now;
        if self.failed_login_attempts >= max_attempts as i32 {
            self.account_non_locked = false;
            self.locked_until = Some(now + Duration::seconds(lock_duration_seconds));
            return true;
        }
        false
    }

    /// Clears the failed-attempt counter and any active lock
    pub fn clear_lockout(&mut self) {
        self.failed_login_attempts = 0;
        self.account_non_locked = true;
        self.locked_until = None;
        self.updated_at = Utc::now();
    }

    /// Stores a fresh verification OTP for the resend channel
    pub fn set_verification_otp(&mut self, code: String, expiry: DateTime<Utc>) {
        let now = Utc::now();
        self.otp = Some(code);
        self.otp_generated_at = Some(now);
        self.otp_expiry = Some(expiry);
        self.updated_at = now;
    }

    /// Stores a fresh password-reset OTP
    pub fn set_reset_otp(&mut self, code: String, expiry: DateTime<Utc>) {
        self.reset_otp = Some(code);
        self.reset_otp_expiry = Some(expiry);
        self.updated_at = Utc::now();
    }

    /// Exact-match check against the stored reset OTP
    pub fn reset_otp_matches(&self, code: &str) -> bool {
        self.reset_otp.as_deref() == Some(code)
    }

    /// Whether the stored reset OTP is past its validity window
    pub fn is_reset_otp_expired(&self, now: DateTime<Utc>) -> bool {
        self.reset_otp_expiry.map_or(true, |expiry| now > expiry)
    }

    /// Replaces the password and consumes the reset OTP
    pub fn apply_password_reset(&mut self, new_password_hash: String) {
        self.password_hash = Some(new_password_hash);
        self.reset_otp = None;
        self.reset_otp_expiry = None;
        self.updated_at = Utc::now();
    }
}
