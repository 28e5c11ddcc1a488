use actix_web::{web, HttpRequest, HttpResponse};

use authify_core::{AccountRepository, NotificationDispatcher, PendingRegistrationRepository};

use crate::dto::{AuthResponse, RefreshTokenQuery};
use crate::handlers::domain_error_response;

use super::AppState;

/// Handler for POST /auth/refresh-token?refreshToken=
///
/// Exchanges a valid refresh token for a new access token. The refresh
/// token itself is echoed back unchanged; clients keep using it until it
/// expires.
pub async fn refresh_token<A, P, N>(
    req: HttpRequest,
    state: web::Data<AppState<A, P, N>>,
    query: web::Query<RefreshTokenQuery>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    P: PendingRegistrationRepository + 'static,
    N: NotificationDispatcher + 'static,
{
    match state.auth_service.refresh(&query.refresh_token).await {
        Ok(session) => {
            HttpResponse::Ok().json(AuthResponse::with_session("Token refreshed!", &session))
        }
        Err(error) => domain_error_response(&error, &req),
    }
}
