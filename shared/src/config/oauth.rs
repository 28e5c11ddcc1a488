//! OAuth provider and front-end redirect configuration

use serde::{Deserialize, Serialize};

/// Google OAuth client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OAuthConfig {
    /// OAuth 2.0 client ID from Google Cloud Console
    pub google_client_id: String,

    /// OAuth 2.0 client secret
    pub google_client_secret: String,

    /// Public base URL of this server, used to build the provider callback
    pub redirect_base: String,

    /// Front-end URL that receives tokens after a federated login
    pub frontend_redirect_url: String,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            google_client_id: String::new(),
            google_client_secret: String::new(),
            redirect_base: String::from("http://localhost:8080"),
            frontend_redirect_url: String::from("http://localhost:5173/oauth2/redirect"),
        }
    }
}

impl OAuthConfig {
    /// Load from `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`,
    /// `OAUTH_REDIRECT_BASE` and `FRONTEND_REDIRECT_URL`
    pub fn from_env() -> Self {
        let google_client_id = std::env::var("GOOGLE_CLIENT_ID").unwrap_or_default();
        let google_client_secret = std::env::var("GOOGLE_CLIENT_SECRET").unwrap_or_default();
        let redirect_base = std::env::var("OAUTH_REDIRECT_BASE")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let frontend_redirect_url = std::env::var("FRONTEND_REDIRECT_URL")
            .unwrap_or_else(|_| "http://localhost:5173/oauth2/redirect".to_string());

        Self {
            google_client_id,
            google_client_secret,
            redirect_base,
            frontend_redirect_url,
        }
    }

    /// The callback URL registered with the provider
    pub fn google_callback_url(&self) -> String {
        format!("{}/login/oauth2/code/google", self.redirect_base)
    }
}
