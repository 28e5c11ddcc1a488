//! Result of a successful authentication: the tokens plus who they belong to.

use crate::domain::entities::{Account, TokenPair};

/// Tokens issued for an account, with the account they describe
///
/// Returned by verification, login, federated login, and refresh. The API
/// layer projects the account into its wire summary; the password hash
/// never leaves the process.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    /// The issued access/refresh pair
    pub tokens: TokenPair,

    /// The authenticated account
    pub account: Account,
}

impl AuthenticatedSession {
    /// Bundles freshly issued tokens with their account
    pub fn new(tokens: TokenPair, account: Account) -> Self {
        Self { tokens, account }
    }
}
