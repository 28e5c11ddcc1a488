//! Google OAuth code flow
//!
//! `GET /oauth2/authorization/google` sends the browser to the Google
//! consent page with a state nonce pinned in a short-lived cookie.
//! `GET /login/oauth2/code/google` is the registered callback: it checks
//! the state, trades the authorization code for an access token, fetches
//! the user's profile, reconciles the account, and bounces the browser
//! back to the front-end with tokens in the query string. Failures never
//! render a server error page; they redirect with an `error` code the
//! front-end can display.

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use authify_core::{AccountRepository, NotificationDispatcher, PendingRegistrationRepository};
use authify_infra::oauth::generate_state_nonce;
use authify_shared::OAuthConfig;

use crate::routes::auth::AppState;

/// Cookie carrying the state nonce between redirect and callback
const STATE_COOKIE: &str = "oauth_state";

/// How long the consent round-trip may take
const STATE_TTL_MINUTES: i64 = 10;

/// Handler for GET /oauth2/authorization/google
pub async fn authorize<A, P, N>(state: web::Data<AppState<A, P, N>>) -> HttpResponse
where
    A: AccountRepository + 'static,
    P: PendingRegistrationRepository + 'static,
    N: NotificationDispatcher + 'static,
{
    let nonce = generate_state_nonce();
    let url = match state.oauth_client.authorize_url(&nonce) {
        Ok(url) => url,
        Err(error) => {
            log::error!("Failed to build Google consent URL: {}", error);
            return redirect_error(&state.oauth_config, "provider_unavailable");
        }
    };

    let cookie = Cookie::build(STATE_COOKIE, nonce)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::minutes(STATE_TTL_MINUTES))
        .finish();

    HttpResponse::Found()
        .cookie(cookie)
        .insert_header((header::LOCATION, url))
        .finish()
}

/// Query parameters Google appends to the callback redirect
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Handler for GET /login/oauth2/code/google
pub async fn callback<A, P, N>(
    req: HttpRequest,
    state: web::Data<AppState<A, P, N>>,
    query: web::Query<CallbackQuery>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    P: PendingRegistrationRepository + 'static,
    N: NotificationDispatcher + 'static,
{
    if let Some(error) = &query.error {
        log::warn!("Google consent refused: {}", error);
        return redirect_error(&state.oauth_config, "access_denied");
    }

    let expected_state = req.cookie(STATE_COOKIE).map(|c| c.value().to_string());
    match (&query.state, expected_state) {
        (Some(received), Some(expected)) if *received == expected => {}
        _ => {
            log::warn!("State mismatch on Google callback");
            return redirect_error(&state.oauth_config, "invalid_state");
        }
    }

    let code = match &query.code {
        Some(code) => code,
        None => return redirect_error(&state.oauth_config, "missing_code"),
    };

    let access_token = match state.oauth_client.exchange_code(code).await {
        Ok(token) => token,
        Err(error) => {
            log::error!("Google code exchange failed: {}", error);
            return redirect_error(&state.oauth_config, "exchange_failed");
        }
    };

    let user = match state.oauth_client.fetch_user_info(&access_token).await {
        Ok(user) => user,
        Err(error) => {
            log::error!("Google userinfo fetch failed: {}", error);
            return redirect_error(&state.oauth_config, "userinfo_failed");
        }
    };

    let display_name = user.name.clone().unwrap_or_else(|| user.email.clone());
    let session = match state
        .auth_service
        .federated_login(&user.email, &display_name)
        .await
    {
        Ok(session) => session,
        Err(error) => {
            log::error!("Federated login failed: {}", error);
            return redirect_error(&state.oauth_config, "login_failed");
        }
    };

    let params = [
        ("token", session.tokens.access_token.as_str()),
        ("refreshToken", session.tokens.refresh_token.as_str()),
        ("name", session.account.name.as_str()),
        ("email", session.account.email.as_str()),
        ("role", session.account.role.as_str()),
    ];
    let query_string = match serde_urlencoded::to_string(params) {
        Ok(query_string) => query_string,
        Err(error) => {
            log::error!("Failed to build front-end redirect: {}", error);
            return redirect_error(&state.oauth_config, "redirect_failed");
        }
    };

    HttpResponse::Found()
        .insert_header((
            header::LOCATION,
            format!(
                "{}?{}",
                state.oauth_config.frontend_redirect_url, query_string
            ),
        ))
        .finish()
}

/// Bounce back to the front-end callback with an error code
fn redirect_error(config: &OAuthConfig, code: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((
            header::LOCATION,
            format!("{}?error={}", config.frontend_redirect_url, code),
        ))
        .finish()
}
