use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use authify_core::{AccountRepository, NotificationDispatcher, PendingRegistrationRepository};

use crate::dto::{AuthResponse, ForgotPasswordRequest};
use crate::handlers::{domain_error_response, validation_error_response};

use super::AppState;

/// Handler for POST /auth/forgot-password
///
/// Emails a password-reset code to the account's address.
pub async fn forgot_password<A, P, N>(
    req: HttpRequest,
    state: web::Data<AppState<A, P, N>>,
    request: web::Json<ForgotPasswordRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    P: PendingRegistrationRepository + 'static,
    N: NotificationDispatcher + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, &req);
    }

    match state.auth_service.forgot_password(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(AuthResponse::message_only(
            "Password reset OTP sent to your email",
        )),
        Err(error) => domain_error_response(&error, &req),
    }
}
