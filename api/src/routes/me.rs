//! Authenticated caller profile

use actix_web::HttpResponse;

use crate::dto::UserSummary;
use crate::middleware::Identity;

/// Handler for GET /api/me
///
/// The [`Identity`] extractor answers 401 before this body runs when the
/// gate attached no identity to the request.
pub async fn me(identity: Identity) -> HttpResponse {
    HttpResponse::Ok().json(UserSummary {
        id: identity.id,
        name: identity.name,
        email: identity.email,
        role: identity.role.as_str().to_string(),
    })
}
