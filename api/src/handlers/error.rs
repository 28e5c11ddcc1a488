//! Mapping from domain errors to HTTP responses
//!
//! The front-end treats authentication outcomes as data, not transport
//! failures: a wrong OTP or a locked account comes back as HTTP 200 with
//! `success: false` and the variant's message. Only validation, storage,
//! and unexpected failures surface as real HTTP error codes, wrapped in
//! the uniform [`ApiError`] envelope.

use actix_web::{HttpRequest, HttpResponse};
use validator::ValidationErrors;

use authify_core::{DomainError, TokenError};

use crate::dto::{ApiError, AuthResponse};

/// Translate a domain failure into the response the caller expects
///
/// # Arguments
/// * `error` - The failure returned by the auth or token service
/// * `request` - The request being answered, used for the envelope path
pub fn domain_error_response(error: &DomainError, request: &HttpRequest) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => {
            HttpResponse::Ok().json(AuthResponse::failure(auth_error.to_string()))
        }
        DomainError::Token(TokenError::CreationFailed) => {
            log::error!("Token creation failed on {}", request.path());
            server_error(request)
        }
        DomainError::Token(token_error) => {
            HttpResponse::Ok().json(AuthResponse::failure(token_error.to_string()))
        }
        DomainError::Validation { message } => HttpResponse::BadRequest().json(ApiError::new(
            message.clone(),
            "VALIDATION_ERROR",
            request.path(),
        )),
        DomainError::Database { message } => {
            log::error!("Database failure on {}: {}", request.path(), message);
            HttpResponse::InternalServerError().json(ApiError::new(
                message.clone(),
                "DATABASE_ERROR",
                request.path(),
            ))
        }
        DomainError::Internal { message } => {
            log::error!("Internal failure on {}: {}", request.path(), message);
            server_error(request)
        }
    }
}

/// Reject a request whose body failed `validator` rules
///
/// Reports the first field message, matching what the front-end displays.
pub fn validation_error_response(errors: &ValidationErrors, request: &HttpRequest) -> HttpResponse {
    let message = errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .filter_map(|error| error.message.as_ref())
        .map(|message| message.to_string())
        .next()
        .unwrap_or_else(|| "Validation failed".to_string());

    HttpResponse::BadRequest().json(ApiError::new(message, "VALIDATION_ERROR", request.path()))
}

fn server_error(request: &HttpRequest) -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiError::new(
        "Something went wrong!",
        "SERVER_ERROR",
        request.path(),
    ))
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use actix_web::test::TestRequest;
    use validator::Validate;

    use authify_core::AuthError;

    use super::*;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_auth_error_is_http_ok_with_failure_body() {
        let request = TestRequest::default().to_http_request();
        let response = domain_error_response(&AuthError::InvalidOtp.into(), &request);

        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid OTP!");
        assert!(json["token"].is_null());
    }

    #[actix_web::test]
    async fn test_database_error_passes_message_through_envelope() {
        let request = TestRequest::with_uri("/auth/login").to_http_request();
        let error = DomainError::Database {
            message: "Failed to find account by email: timeout".to_string(),
        };
        let response = domain_error_response(&error, &request);

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
        let json = body_json(response).await;
        assert_eq!(json["errorCode"], "DATABASE_ERROR");
        assert_eq!(json["message"], "Failed to find account by email: timeout");
        assert_eq!(json["path"], "/auth/login");
    }

    #[actix_web::test]
    async fn test_internal_error_is_masked() {
        let request = TestRequest::default().to_http_request();
        let error = DomainError::Internal {
            message: "bcrypt blew up".to_string(),
        };
        let json = body_json(domain_error_response(&error, &request)).await;

        assert_eq!(json["errorCode"], "SERVER_ERROR");
        assert_eq!(json["message"], "Something went wrong!");
    }

    #[actix_web::test]
    async fn test_validation_response_reports_field_message() {
        #[derive(Validate)]
        struct Probe {
            #[validate(email(message = "Invalid email format"))]
            email: String,
        }

        let errors = Probe {
            email: "nope".to_string(),
        }
        .validate()
        .unwrap_err();

        let request = TestRequest::with_uri("/auth/register").to_http_request();
        let response = validation_error_response(&errors, &request);
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["errorCode"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "Invalid email format");
    }
}
