//! Session route handlers
//!
//! - `create` issues a signed token for a user id
//! - `validate` checks a previously issued token

pub mod create;
pub mod validate;

use std::sync::Arc;

use sess_core::services::token::SessionApi;

/// Application state that holds the shared session service
pub struct AppState<S>
where
    S: SessionApi,
{
    pub session_service: Arc<S>,
}

impl<S> AppState<S>
where
    S: SessionApi,
{
    pub fn new(session_service: Arc<S>) -> Self {
        Self { session_service }
    }
}
