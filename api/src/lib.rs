//! # Authify API
//!
//! HTTP boundary for the Authify backend: request/response DTOs, the
//! authentication-gate middleware, route handlers, and the application
//! factory shared by the binary and the integration tests.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
