use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use authify_core::{AccountRepository, NotificationDispatcher, PendingRegistrationRepository};

use crate::dto::{AuthResponse, ResetPasswordRequest};
use crate::handlers::{domain_error_response, validation_error_response};

use super::AppState;

/// Handler for POST /auth/reset-password
///
/// Consumes the emailed reset code and installs the new password. The
/// code is single-use; a successful reset also clears any login lockout.
pub async fn reset_password<A, P, N>(
    req: HttpRequest,
    state: web::Data<AppState<A, P, N>>,
    request: web::Json<ResetPasswordRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    P: PendingRegistrationRepository + 'static,
    N: NotificationDispatcher + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, &req);
    }

    match state
        .auth_service
        .reset_password(&request.email, &request.otp, &request.new_password)
        .await
    {
        Ok(()) => {
            HttpResponse::Ok().json(AuthResponse::message_only("Password reset successfully"))
        }
        Err(error) => domain_error_response(&error, &req),
    }
}
