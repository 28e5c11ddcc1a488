//! Application factory
//!
//! Builds the Actix application with all middleware and routes, so the
//! binary and the integration tests assemble the exact same app.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::middleware::Logger;
use actix_web::{web, App, Error, HttpRequest, HttpResponse};

use authify_core::{AccountRepository, NotificationDispatcher, PendingRegistrationRepository};

use crate::dto::ApiError;
use crate::middleware::{create_cors, IdentityGate};
use crate::routes::auth::{
    self, forgot_password::forgot_password, login::login, refresh_token::refresh_token,
    register::register, resend_otp::resend_otp, reset_password::reset_password,
    verify_otp::verify_otp, AppState,
};
use crate::routes::{me::me, oauth};

/// Create and configure the application with all dependencies
pub fn create_app<A, P, N>(
    app_state: web::Data<AppState<A, P, N>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    P: PendingRegistrationRepository + 'static,
    N: NotificationDispatcher + 'static,
{
    let cors = create_cors(&app_state.frontend_origin);
    let gate = IdentityGate::new(
        Arc::clone(&app_state.accounts),
        Arc::clone(&app_state.token_service),
    );

    App::new()
        // Application state and payload error shaping
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        // Middleware (order matters: the gate first, then CORS, then logging)
        .wrap(Logger::default())
        .wrap(cors)
        .wrap(gate)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Authentication routes
        .service(
            web::scope("/auth")
                .route("/register", web::post().to(register::<A, P, N>))
                .route("/verify-otp", web::post().to(verify_otp::<A, P, N>))
                .route("/resend-otp", web::post().to(resend_otp::<A, P, N>))
                .route("/login", web::post().to(login::<A, P, N>))
                .route(
                    "/forgot-password",
                    web::post().to(forgot_password::<A, P, N>),
                )
                .route("/reset-password", web::post().to(reset_password::<A, P, N>))
                .route("/refresh-token", web::post().to(refresh_token::<A, P, N>))
                .route("/test", web::get().to(auth::ping)),
        )
        // Protected profile endpoint
        .route("/api/me", web::get().to(me))
        // Federated login
        .route(
            "/oauth2/authorization/google",
            web::get().to(oauth::authorize::<A, P, N>),
        )
        .route(
            "/login/oauth2/code/google",
            web::get().to(oauth::callback::<A, P, N>),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "authify-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Default handler for unmatched routes
async fn not_found(request: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ApiError::new(
        "Resource not found",
        "NOT_FOUND",
        request.path(),
    ))
}

/// Reject undeserializable JSON bodies with the uniform envelope
fn json_error_handler(error: JsonPayloadError, request: &HttpRequest) -> Error {
    let body = ApiError::new(error.to_string(), "BAD_REQUEST", request.path());
    InternalError::from_response(error, HttpResponse::BadRequest().json(body)).into()
}

/// Reject undeserializable query strings with the uniform envelope
fn query_error_handler(error: QueryPayloadError, request: &HttpRequest) -> Error {
    let body = ApiError::new(error.to_string(), "BAD_REQUEST", request.path());
    InternalError::from_response(error, HttpResponse::BadRequest().json(body)).into()
}
