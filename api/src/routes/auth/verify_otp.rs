use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use authify_core::{AccountRepository, NotificationDispatcher, PendingRegistrationRepository};
use authify_infra::email::mask_email;

use crate::dto::{AuthResponse, VerifyOtpRequest};
use crate::handlers::{domain_error_response, validation_error_response};

use super::AppState;

/// Handler for POST /auth/verify-otp
///
/// Confirms the emailed code, promotes the pending signup to a verified
/// account, and returns a full token pair with the account summary.
pub async fn verify_otp<A, P, N>(
    req: HttpRequest,
    state: web::Data<AppState<A, P, N>>,
    request: web::Json<VerifyOtpRequest>,
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
        .verify_otp(&request.email, &request.otp)
        .await
    {
        Ok(session) => {
            log::info!("Email verified for {}", mask_email(&session.account.email));
            HttpResponse::Ok().json(AuthResponse::with_session(
                "Email verified successfully",
                &session,
            ))
        }
        Err(error) => domain_error_response(&error, &req),
    }
}
