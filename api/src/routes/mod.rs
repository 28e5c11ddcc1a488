//! HTTP route handlers

pub mod auth;
pub mod me;
pub mod oauth;
