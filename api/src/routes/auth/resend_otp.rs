use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use authify_core::{AccountRepository, NotificationDispatcher, PendingRegistrationRepository};

use crate::dto::{AuthResponse, ResendOtpQuery};
use crate::handlers::{domain_error_response, validation_error_response};

use super::AppState;

/// Handler for POST /auth/resend-otp?email=
///
/// Issues a fresh verification code for an existing account. A signup that
/// is still pending re-sends its code by registering again instead.
pub async fn resend_otp<A, P, N>(
    req: HttpRequest,
    state: web::Data<AppState<A, P, N>>,
    query: web::Query<ResendOtpQuery>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    P: PendingRegistrationRepository + 'static,
    N: NotificationDispatcher + 'static,
{
    if let Err(errors) = query.validate() {
        return validation_error_response(&errors, &req);
    }

    match state.auth_service.resend_otp(&query.email).await {
        Ok(()) => HttpResponse::Ok().json(AuthResponse::message_only("OTP resent successfully")),
        Err(error) => domain_error_response(&error, &req),
    }
}
