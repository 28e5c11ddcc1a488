//! OAuth Module
//!
//! Google authorization-code flow for federated login. The client builds
//! the consent URL, exchanges the returned code for an access token, and
//! fetches the verified identity from the UserInfo endpoint. Account
//! creation stays in the core auth service.

pub mod google;

pub use google::{GoogleOAuthClient, GoogleUserInfo};

use rand::{distributions::Alphanumeric, Rng};

/// Length of the random `state` parameter carried through the flow
pub const STATE_NONCE_LENGTH: usize = 32;

/// Generates a random alphanumeric nonce for the OAuth `state` parameter
pub fn generate_state_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_NONCE_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_nonces_are_long_and_distinct() {
        let a = generate_state_nonce();
        let b = generate_state_nonce();

        assert_eq!(a.len(), STATE_NONCE_LENGTH);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }
}
