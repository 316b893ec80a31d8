//! Service contract invoked by the transport layer

use async_trait::async_trait;

use crate::domain::value_objects::TokenReply;
use crate::errors::SessionError;

/// The two session operations exposed to callers
///
/// Implementations hold no per-call state and may be invoked concurrently
/// from any number of tasks.
#[async_trait]
pub trait SessionApi: Send + Sync {
    /// Issue a signed token for `user_id`
    ///
    /// # Errors
    /// * `InvalidIdentifier` - `user_id` does not conform to the configured format
    /// * `SigningFailure` - the token could not be signed
    async fn issue_token(&self, user_id: &str) -> Result<TokenReply, SessionError>;

    /// Verify `token` and check its validity window
    ///
    /// # Errors
    /// * `MalformedToken` - undecodable, tampered, or signed for another issuer
    /// * `TokenExpired` / `TokenNotYetValid` - authentic but outside its window
    async fn validate_token(&self, token: &str) -> Result<TokenReply, SessionError>;
}
