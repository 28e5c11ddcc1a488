//! CORS policy for the configured front-end origin

use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Build the CORS layer allowing the single configured front-end origin
///
/// Credentials are allowed so the browser can send the bearer header and
/// the OAuth state cookie across origins.
pub fn create_cors(frontend_origin: &str) -> Cors {
    log::info!("CORS allows origin {}", frontend_origin);

    Cors::default()
        .allowed_origin(frontend_origin)
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .supports_credentials()
        .max_age(3600)
}
