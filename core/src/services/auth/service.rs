//! Main authentication service implementation

use std::sync::Arc;

use chrono::Utc;

use authify_shared::config::LockoutConfig;

use crate::domain::entities::account::Account;
use crate::domain::entities::pending_registration::PendingRegistration;
use crate::domain::entities::token::TokenPair;
use crate::domain::otp;
use crate::domain::value_objects::AuthenticatedSession;
use crate::errors::{AuthError, DomainResult, TokenError};
use crate::repositories::{AccountRepository, PendingRegistrationRepository};
use crate::services::notification::NotificationDispatcher;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

/// Outcome of a registration request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// A fresh signup was staged and a verification code sent
    Created,
    /// A signup was already staged; its code was refreshed and re-sent
    CodeResent,
}

/// Authentication service for managing the complete authentication flow
pub struct AuthService<A, P, N>
where
    A: AccountRepository,
    P: PendingRegistrationRepository,
    N: NotificationDispatcher + 'static,
{
    /// Account repository for database operations
    accounts: Arc<A>,
    /// Staging store for signups awaiting verification
    pending: Arc<P>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Outbound mail boundary
    mailer: Arc<N>,
    /// Password hashing
    hasher: PasswordHasher,
    /// Failed-login lockout policy
    lockout: LockoutConfig,
}

impl<A, P, N> AuthService<A, P, N>
where
    A: AccountRepository,
    P: PendingRegistrationRepository,
    N: NotificationDispatcher + 'static,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `accounts` - Repository for account persistence
    /// * `pending` - Staging store for unverified signups
    /// * `token_service` - Service for JWT management
    /// * `mailer` - Outbound notification boundary
    /// * `hasher` - Password hasher
    /// * `lockout` - Failed-login lockout policy
    pub fn new(
        accounts: Arc<A>,
        pending: Arc<P>,
        token_service: Arc<TokenService>,
        mailer: Arc<N>,
        hasher: PasswordHasher,
        lockout: LockoutConfig,
    ) -> Self {
        Self {
            accounts,
            pending,
            token_service,
            mailer,
            hasher,
            lockout,
        }
    }

    /// Stage a new registration and send its verification code
    ///
    /// A retry for an email that is already staged refreshes the code in
    /// place instead of duplicating the signup.
    ///
    /// # Returns
    ///
    /// * `Ok(RegisterOutcome)` - Whether this staged a new signup or re-sent
    /// * `Err(DomainError)` - Email already owned by an account, or storage failed
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<RegisterOutcome> {
        // Step 1: the account namespace owns verified emails
        if self.accounts.exists_by_email(email).await? {
            return Err(AuthError::AlreadyRegistered.into());
        }

        // Step 2: fresh code and validity window
        let now = Utc::now();
        let code = otp::generate();
        let expiry = otp::expiry_from(now);

        // Step 3: stage the signup, or refresh the one already staged
        let (outcome, mail_name) = match self.pending.find_by_email(email).await? {
            Some(mut staged) => {
                staged.refresh_otp(code.clone(), expiry);
                let mail_name = staged.name.clone();
                self.pending.upsert(staged).await?;
                (RegisterOutcome::CodeResent, mail_name)
            }
            None => {
                let password_hash = self.hasher.hash(password)?;
                let staged = PendingRegistration::new(
                    email.to_string(),
                    name.to_string(),
                    password_hash,
                    code.clone(),
                    expiry,
                );
                self.pending.upsert(staged).await?;
                (RegisterOutcome::Created, name.to_string())
            }
        };

        // Step 4: dispatch off the request path
        self.dispatch_verification(email.to_string(), mail_name, code);

        Ok(outcome)
    }

    /// Confirm a staged registration with its verification code
    ///
    /// On success the pending record is claimed, a verified account is
    /// created and a token pair is issued.
    pub async fn verify_otp(&self, email: &str, code: &str) -> DomainResult<AuthenticatedSession> {
        // Step 1: nothing staged, nothing to verify
        let staged = self
            .pending
            .find_by_email(email)
            .await?
            .ok_or(AuthError::NotFound)?;

        // Step 2: exact string match only
        if !staged.otp_matches(code) {
            return Err(AuthError::InvalidOtp.into());
        }

        // Step 3: validity window
        if staged.is_otp_expired(Utc::now()) {
            return Err(AuthError::OtpExpired.into());
        }

        // Step 4: an account may have appeared since registration, e.g.
        // through a federated login with the same email
        if self.accounts.exists_by_email(email).await? {
            return Err(AuthError::AlreadyRegistered.into());
        }

        // Step 5: claim the staged record; the loser of a concurrent
        // verification sees it already gone
        if !self.pending.delete(email).await? {
            return Err(AuthError::NotFound.into());
        }

        // Step 6: promote to a verified account
        let account = Account::new_local(staged.name, staged.email, staged.password_hash);
        let account = self.accounts.create(&account).await?;

        // Step 7: welcome mail off the request path
        self.dispatch_welcome(account.email.clone(), account.name.clone());

        // Step 8: the caller is now authenticated
        self.issue_session(account)
    }

    /// Re-send a verification code for an existing account
    ///
    /// Looks up the account store; a signup that is still pending re-sends
    /// its code by registering again.
    pub async fn resend_otp(&self, email: &str) -> DomainResult<()> {
        let mut account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or(AuthError::NotFound)?;

        let code = otp::generate();
        account.set_verification_otp(code.clone(), otp::expiry_from(Utc::now()));
        self.accounts.update(&account).await?;

        self.dispatch_verification(account.email, account.name, code);

        Ok(())
    }

    /// Authenticate with email and password
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthenticatedSession> {
        // Step 1: resolve the account
        let mut account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or(AuthError::NotFound)?;

        let now = Utc::now();

        // Step 2: lock gate; an elapsed lock clears itself on this attempt
        if account.is_locked(now) {
            return Err(AuthError::AccountLocked.into());
        }
        if account.lock_has_elapsed(now) {
            account.clear_lockout();
            self.accounts.update(&account).await?;
        }

        // Step 3: password check, counting toward the lockout policy
        let password_ok = account
            .password_hash
            .as_deref()
            .map(|digest| self.hasher.verify(password, digest))
            .unwrap_or(false);
        if !password_ok {
            let locked_now = account.record_failed_login(
                self.lockout.max_failed_attempts,
                self.lockout.lock_duration_seconds,
                now,
            );
            self.accounts.update(&account).await?;
            if locked_now {
                tracing::warn!(
                    "account {} locked after {} failed login attempts",
                    account.email,
                    account.failed_login_attempts
                );
            }
            return Err(AuthError::InvalidCredentials.into());
        }

        // Step 4: only verified emails may log in
        if !account.email_verified {
            return Err(AuthError::EmailNotVerified.into());
        }

        // Step 5: success clears any accumulated failures
        if account.failed_login_attempts > 0 || !account.account_non_locked {
            account.clear_lockout();
            self.accounts.update(&account).await?;
        }

        self.issue_session(account)
    }

    /// Reconcile a federated identity with the account store
    ///
    /// Missing accounts are created verified, without a password.
    pub async fn federated_login(
        &self,
        email: &str,
        name: &str,
    ) -> DomainResult<AuthenticatedSession> {
        let account = match self.accounts.find_by_email(email).await? {
            Some(account) => account,
            None => {
                let account = Account::new_federated(name.to_string(), email.to_string());
                self.accounts.create(&account).await?
            }
        };

        self.issue_session(account)
    }

    /// Start a password reset by sending a code to the account's email
    pub async fn forgot_password(&self, email: &str) -> DomainResult<()> {
        let mut account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or(AuthError::NotFound)?;

        let code = otp::generate();
        account.set_reset_otp(code.clone(), otp::expiry_from(Utc::now()));
        self.accounts.update(&account).await?;

        self.dispatch_password_reset(account.email, account.name, code);

        Ok(())
    }

    /// Complete a password reset with the emailed code
    ///
    /// The code is single-use; a completed reset also clears any login
    /// lockout.
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        let mut account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or(AuthError::NotFound)?;

        // A reset that was never requested counts as a mismatch
        if !account.reset_otp_matches(code) {
            return Err(AuthError::InvalidOtp.into());
        }
        if account.is_reset_otp_expired(Utc::now()) {
            return Err(AuthError::OtpExpired.into());
        }

        let new_hash = self.hasher.hash(new_password)?;
        account.apply_password_reset(new_hash);
        account.clear_lockout();
        self.accounts.update(&account).await?;

        Ok(())
    }

    /// Exchange a refresh token for a fresh access token
    ///
    /// The refresh token is re-verified against the account it names and
    /// echoed back unchanged; refresh tokens are not rotated.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<AuthenticatedSession> {
        // Step 1: route on the embedded subject before any verification
        let subject = self.token_service.extract_subject(refresh_token)?;

        // Step 2: the subject must still have an account
        let account = self
            .accounts
            .find_by_email(&subject)
            .await?
            .ok_or(AuthError::NotFound)?;

        // Step 3: full verification against the resolved account
        if !self.token_service.verify(refresh_token, &account.email) {
            return Err(TokenError::Invalid.into());
        }

        // Step 4: fresh access token, same refresh token
        let access_token = self
            .token_service
            .issue_access(&account.email, account.role.as_str())?;
        let tokens = TokenPair {
            access_token,
            refresh_token: refresh_token.to_string(),
        };

        Ok(AuthenticatedSession::new(tokens, account))
    }

    fn issue_session(&self, account: Account) -> DomainResult<AuthenticatedSession> {
        let tokens = self
            .token_service
            .issue_pair(&account.email, account.role.as_str())?;
        Ok(AuthenticatedSession::new(tokens, account))
    }

    fn dispatch_verification(&self, to: String, name: String, code: String) {
        let mailer = Arc::clone(&self.mailer);
        tokio::spawn(async move {
            if let Err(e) = mailer.send_verification_otp(&to, &name, &code).await {
                tracing::warn!("failed to send verification mail to {}: {}", to, e);
            }
        });
    }

    fn dispatch_password_reset(&self, to: String, name: String, code: String) {
        let mailer = Arc::clone(&self.mailer);
        tokio::spawn(async move {
            if let Err(e) = mailer.send_password_reset_otp(&to, &name, &code).await {
                tracing::warn!("failed to send password reset mail to {}: {}", to, e);
            }
        });
    }

    fn dispatch_welcome(&self, to: String, name: String) {
        let mailer = Arc::clone(&self.mailer);
        tokio::spawn(async move {
            if let Err(e) = mailer.send_welcome(&to, &name).await {
                tracing::warn!("failed to send welcome mail to {}: {}", to, e);
            }
        });
    }
}
