//! Bearer-token acquisition seam.
//!
//! Session management lives in the embedding application; this crate only
//! needs a token at the moment a signed request goes out.

use crate::error::Result;

/// Supplies bearer access tokens for signed requests.
pub trait TokenProvider {
    /// Return a token valid for the management API.
    fn access_token(&self) -> Result<String>;
}

/// Token provider backed by a single pre-acquired token.
///
/// Useful for tests and for callers that manage token refresh themselves.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    /// Wrap an already-acquired access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn access_token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}
