//! Tests for the `SessionApi` contract and concurrent use

use std::sync::Arc;
use std::time::Duration;

use sess_shared::IdentifierFormat;

use crate::errors::ErrorKind;
use crate::services::token::{SessionApi, TokenService, TokenServiceConfig};

fn shared_service() -> Arc<dyn SessionApi> {
    let config = TokenServiceConfig::new("hello world", Duration::from_secs(60))
        .with_identifier_format(IdentifierFormat::Opaque);
    Arc::new(TokenService::new(config))
}

#[tokio::test]
async fn test_contract_round_trip() {
    let service = shared_service();

    let issued = service.issue_token("123").await.unwrap();
    let validated = service.validate_token(&issued.token).await.unwrap();

    assert!(validated.valid);
    assert_eq!(validated.issued_at, issued.issued_at);
    assert_eq!(validated.expires_at, issued.expires_at);
}

#[tokio::test]
async fn test_contract_errors() {
    let service = shared_service();

    let err = service.issue_token("").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidIdentifier);

    let err = service.validate_token("lalala.lalala.lalala").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedToken);
    assert!(!err.reply().unwrap().has_claims());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_do_not_interfere() {
    let service = shared_service();

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                let user_id = format!("user-{}", i % 8);
                let issued = service.issue_token(&user_id).await.unwrap();
                let validated = service.validate_token(&issued.token).await.unwrap();
                assert!(validated.valid);
                assert_eq!(validated.token, issued.token);
                issued.token
            })
        })
        .collect();

    let mut tokens = Vec::new();
    for handle in handles {
        tokens.push(handle.await.unwrap());
    }

    tokens.sort();
    tokens.dedup();
    assert_eq!(tokens.len(), 64);
}
