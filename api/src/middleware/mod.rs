//! Request middleware: authentication gate and CORS

pub mod auth;
pub mod cors;

pub use auth::{extract_bearer_token, Identity, IdentityGate, MaybeIdentity};
pub use cors::create_cors;
