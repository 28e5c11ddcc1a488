//! Main token service implementation.
//!
//! Access tokens carry the subject's role; refresh tokens carry the subject
//! only. Both are HS256-signed with the configured secret. A refresh token
//! presented back to the service is re-verified, never rotated.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use authify_shared::config::JwtConfig;

use crate::domain::entities::token::{Claims, TokenPair};
use crate::errors::TokenError;

/// Service for issuing and verifying JWTs
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from JWT configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issue an access token carrying the subject's role
    ///
    /// # Arguments
    /// * `subject` - The account's email address
    /// * `role` - Role label to embed in the claims
    ///
    /// # Returns
    /// * `Ok(String)` - The signed token
    /// * `Err(TokenError)` - Signing failed
    pub fn issue_access(&self, subject: &str, role: &str) -> Result<String, TokenError> {
        let claims = self.build_claims(
            subject,
            Some(role.to_string()),
            self.config.access_token_expiry,
        );
        self.encode_jwt(&claims)
    }

    /// Issue a refresh token carrying the subject only
    pub fn issue_refresh(&self, subject: &str) -> Result<String, TokenError> {
        let claims = self.build_claims(subject, None, self.config.refresh_token_expiry);
        self.encode_jwt(&claims)
    }

    /// Issue an access and refresh token pair for a subject
    pub fn issue_pair(&self, subject: &str, role: &str) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access_token: self.issue_access(subject, role)?,
            refresh_token: self.issue_refresh(subject)?,
        })
    }

    /// Decode and validate a token, returning its claims
    ///
    /// # Returns
    /// * `Ok(Claims)` - The decoded claims if the token is valid
    /// * `Err(TokenError::Expired)` - Signature checks out but the token has expired
    /// * `Err(TokenError::Invalid)` - Anything else wrong with the token
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            }
        })?;
        Ok(data.claims)
    }

    /// Check that a token is valid and was issued to the expected subject
    pub fn verify(&self, token: &str, expected_subject: &str) -> bool {
        match self.decode(token) {
            Ok(claims) => claims.sub == expected_subject,
            Err(_) => false,
        }
    }

    /// Pull the subject out of a token without checking signature or expiry
    ///
    /// Used to look up the account a refresh token claims to belong to; the
    /// token is then fully verified against that account.
    pub fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::Invalid)?;
        Ok(data.claims.sub)
    }

    fn build_claims(&self, subject: &str, role: Option<String>, ttl_seconds: i64) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            sub: subject.to_string(),
            role,
            iat: now,
            exp: now + ttl_seconds,
            iss: self.config.issuer.clone(),
        }
    }

    fn encode_jwt(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| TokenError::CreationFailed)
    }
}
