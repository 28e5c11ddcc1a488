use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use authify_core::{
    AccountRepository, NotificationDispatcher, PendingRegistrationRepository, RegisterOutcome,
};
use authify_infra::email::mask_email;

use crate::dto::{AuthResponse, RegisterRequest};
use crate::handlers::{domain_error_response, validation_error_response};

use super::AppState;

/// Handler for POST /auth/register
///
/// Stages a signup and emails a verification OTP. Registering again before
/// verification refreshes the code instead of duplicating the signup, and
/// the response message tells the two cases apart.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "string (1-100 chars)",
///     "email": "string (valid email)",
///     "password": "string (min 6 chars)"
/// }
/// ```
///
/// # Response
///
/// Always the uniform auth body. An already-registered email comes back
/// with HTTP 200 and `success: false`.
pub async fn register<A, P, N>(
    req: HttpRequest,
    state: web::Data<AppState<A, P, N>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    P: PendingRegistrationRepository + 'static,
    N: NotificationDispatcher + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, &req);
    }

    log::info!("Registration request for {}", mask_email(&request.email));

    match state
        .auth_service
        .register(&request.name, &request.email, &request.password)
        .await
    {
        Ok(RegisterOutcome::Created) => HttpResponse::Ok().json(AuthResponse::message_only(
            "User registered! Please verify your email.",
        )),
        Ok(RegisterOutcome::CodeResent) => HttpResponse::Ok().json(AuthResponse::message_only(
            "OTP sent again! Please verify your email.",
        )),
        Err(error) => domain_error_response(&error, &req),
    }
}
