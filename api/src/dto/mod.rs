//! Data transfer objects for the HTTP surface
//!
//! Request bodies carry `validator` rules so handlers can reject bad input
//! before touching the domain layer. Response shapes mirror what the
//! front-end already consumes, camelCase field names included.

pub mod auth;
pub mod error;

pub use auth::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, RefreshTokenQuery, RegisterRequest,
    ResendOtpQuery, ResetPasswordRequest, UserSummary, VerifyOtpRequest,
};
pub use error::ApiError;
