//! Google OAuth 2.0 authorization-code client.

use serde::Deserialize;

use authify_shared::config::OAuthConfig;

use crate::InfrastructureError;

const AUTHORIZATION_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const USERINFO_ENDPOINT: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Scopes requested on every authorization
const SCOPES: &str = "openid email profile";

/// Client for the Google authorization-code flow
///
/// # Example
///
/// ```no_run
/// use authify_infra::oauth::GoogleOAuthClient;
/// use authify_shared::config::OAuthConfig;
///
/// let client = GoogleOAuthClient::new(OAuthConfig::from_env());
/// let url = client.authorize_url("random-state-nonce").unwrap();
/// ```
#[derive(Clone)]
pub struct GoogleOAuthClient {
    /// HTTP client for provider requests
    http: reqwest::Client,
    /// Client credentials and redirect targets
    config: OAuthConfig,
}

impl GoogleOAuthClient {
    /// Create a new Google OAuth client
    pub fn new(config: OAuthConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Build the consent-screen URL the browser is redirected to
    ///
    /// # Arguments
    ///
    /// * `state` - Random nonce echoed back on the callback
    pub fn authorize_url(&self, state: &str) -> Result<String, InfrastructureError> {
        let redirect_uri = self.config.google_callback_url();
        let params = [
            ("client_id", self.config.google_client_id.as_str()),
            ("redirect_uri", redirect_uri.as_str()),
            ("response_type", "code"),
            ("scope", SCOPES),
            ("state", state),
        ];

        let query = serde_urlencoded::to_string(params)
            .map_err(|e| InfrastructureError::OAuth(format!("Failed to build URL: {}", e)))?;

        Ok(format!("{}?{}", AUTHORIZATION_ENDPOINT, query))
    }

    /// Exchange the callback code for an access token
    pub async fn exchange_code(&self, code: &str) -> Result<String, InfrastructureError> {
        let redirect_uri = self.config.google_callback_url();
        let params = [
            ("code", code),
            ("client_id", self.config.google_client_id.as_str()),
            ("client_secret", self.config.google_client_secret.as_str()),
            ("redirect_uri", redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http
            .post(TOKEN_ENDPOINT)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::error!("Google token exchange failed: {}", error_body);
            return Err(InfrastructureError::OAuth(
                "Token exchange failed".to_string(),
            ));
        }

        let token_response: GoogleTokenResponse = response.json().await?;

        Ok(token_response.access_token)
    }

    /// Fetch the authenticated identity from the UserInfo endpoint
    ///
    /// Rejects identities whose email Google has not verified; federated
    /// accounts are created already email-verified on our side.
    pub async fn fetch_user_info(
        &self,
        access_token: &str,
    ) -> Result<GoogleUserInfo, InfrastructureError> {
        let response = self
            .http
            .get(USERINFO_ENDPOINT)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::error!("Google UserInfo request failed: {}", error_body);
            return Err(InfrastructureError::OAuth(
                "UserInfo fetch failed".to_string(),
            ));
        }

        let user: GoogleUserInfo = response.json().await?;

        if !user.email_verified {
            tracing::warn!("Google user email not verified: {}", user.email);
            return Err(InfrastructureError::OAuth(
                "Google account email is not verified".to_string(),
            ));
        }

        Ok(user)
    }
}

/// Google's token endpoint response format
#[derive(Debug, Deserialize)]
struct GoogleTokenResponse {
    /// Access token for the UserInfo request
    access_token: String,
}

/// Identity claims from Google's UserInfo endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    /// Email address
    pub email: String,

    /// Whether Google has verified the email
    #[serde(default)]
    pub email_verified: bool,

    /// Full display name
    pub name: Option<String>,
}
