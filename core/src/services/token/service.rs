//! Main token service implementation

use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{error, info, warn};

use crate::domain::entities::token::{Claims, TimeWindow, JWT_AUDIENCE, JWT_ISSUER};
use crate::domain::value_objects::TokenReply;
use crate::errors::SessionError;

use super::config::TokenServiceConfig;
use super::contract::SessionApi;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Stateless service issuing and validating HS256 session tokens
///
/// Keys and validation rules are derived once from the configuration; every
/// call only reads them, so a single instance can be shared behind an `Arc`.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        // The window is checked by `Claims::window_at` so that authentic but
        // expired tokens still yield their claims.
        let mut validation = Validation::new(ALGORITHM);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.set_required_spec_claims(&["exp", "nbf", "sub", "iss", "aud"]);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed token for a user
    ///
    /// # Arguments
    ///
    /// * `user_id` - Identifier in the configured identifier format
    ///
    /// # Returns
    ///
    /// * `Ok(TokenReply)` - The signed token with its issue and expiry times
    /// * `Err(SessionError)` - `InvalidIdentifier` or `SigningFailure`
    pub fn issue(&self, user_id: &str) -> Result<TokenReply, SessionError> {
        let started = Instant::now();

        if !self.config.identifier_format.validate(user_id) {
            warn!(
                operation = "create",
                identifier_format = %self.config.identifier_format,
                identifier_len = user_id.len(),
                duration_ns = elapsed_ns(started),
                "unable to parse user id"
            );
            return Err(SessionError::InvalidIdentifier {
                identifier: user_id.to_string(),
            });
        }

        let claims = Claims::new(user_id, Utc::now(), self.config.token_lifetime);

        let token = encode(&Header::new(ALGORITHM), &claims, &self.encoding_key).map_err(|source| {
            error!(
                operation = "create",
                jwt_id = claims.token_id(),
                duration_ns = elapsed_ns(started),
                error = %source,
                "unable to sign json web token"
            );
            SessionError::SigningFailure { source }
        })?;

        info!(
            operation = "create",
            jwt_id = claims.token_id(),
            duration_ns = elapsed_ns(started),
            "created json web token"
        );

        Ok(TokenReply::issued(token, &claims))
    }

    /// Validates a token against the current time
    pub fn validate(&self, token: &str) -> Result<TokenReply, SessionError> {
        self.validate_at(token, Utc::now())
    }

    /// Validates a token against an explicit clock reading
    ///
    /// For a fixed secret and `now` the result only depends on `token`.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenReply)` - Authentic and inside `[nbf, exp)`
    /// * `Err(SessionError::MalformedToken)` - Not decodable or not authentic, no claim times
    /// * `Err(SessionError::TokenExpired | TokenNotYetValid)` - Authentic, claim times echoed
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenReply, SessionError> {
        let started = Instant::now();

        let claims = match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(source) => {
                warn!(
                    operation = "validate",
                    jwt_valid = false,
                    outcome = "malformed",
                    duration_ns = elapsed_ns(started),
                    error = %source,
                    "unable to parse json web token"
                );
                return Err(SessionError::MalformedToken {
                    reply: TokenReply::unparsed(token),
                    source,
                });
            }
        };

        let window = claims.window_at(now.timestamp());
        let reply = TokenReply::recovered(token, &claims, window.is_valid());

        match window {
            TimeWindow::Valid => {
                info!(
                    operation = "validate",
                    jwt_id = claims.token_id(),
                    jwt_valid = true,
                    duration_ns = elapsed_ns(started),
                    "validate json web token"
                );
                Ok(reply)
            }
            TimeWindow::Expired => {
                warn!(
                    operation = "validate",
                    jwt_id = claims.token_id(),
                    jwt_valid = false,
                    outcome = "expired",
                    duration_ns = elapsed_ns(started),
                    "json web token expired"
                );
                Err(SessionError::TokenExpired { reply })
            }
            TimeWindow::NotYetValid => {
                warn!(
                    operation = "validate",
                    jwt_id = claims.token_id(),
                    jwt_valid = false,
                    outcome = "not_yet_valid",
                    duration_ns = elapsed_ns(started),
                    "json web token not yet valid"
                );
                Err(SessionError::TokenNotYetValid { reply })
            }
        }
    }
}

#[async_trait]
impl SessionApi for TokenService {
    async fn issue_token(&self, user_id: &str) -> Result<TokenReply, SessionError> {
        self.issue(user_id)
    }

    async fn validate_token(&self, token: &str) -> Result<TokenReply, SessionError> {
        self.validate(token)
    }
}

fn elapsed_ns(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX)
}
