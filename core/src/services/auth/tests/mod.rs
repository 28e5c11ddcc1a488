//! Tests for authentication service

#[cfg(test)]
mod login_tests;
#[cfg(test)]
mod refresh_tests;
