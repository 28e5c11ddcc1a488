use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use authify_core::{AccountRepository, NotificationDispatcher, PendingRegistrationRepository};
use authify_infra::email::mask_email;

use crate::dto::{AuthResponse, LoginRequest};
use crate::handlers::{domain_error_response, validation_error_response};

use super::AppState;

/// Handler for POST /auth/login
///
/// Verifies the password and returns a token pair with the account
/// summary. Failed attempts count toward the lockout policy; a locked
/// account is refused without evaluating the password.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Login successful!",
///     "token": "eyJ...",
///     "success": true,
///     "refreshToken": "eyJ...",
///     "role": "USER",
///     "user": { "id": 1, "name": "...", "email": "...", "role": "USER" }
/// }
/// ```
///
/// ## Domain failures (200 OK, success: false)
/// Unknown user, wrong password, unverified email, locked account.
pub async fn login<A, P, N>(
    req: HttpRequest,
    state: web::Data<AppState<A, P, N>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    P: PendingRegistrationRepository + 'static,
    N: NotificationDispatcher + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, &req);
    }

    log::info!("Login attempt for {}", mask_email(&request.email));

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(session) => HttpResponse::Ok().json(AuthResponse::with_session(
            "Login successful!",
            &session,
        )),
        Err(error) => domain_error_response(&error, &req),
    }
}
