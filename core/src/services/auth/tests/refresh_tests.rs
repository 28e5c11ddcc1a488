//! Unit tests for the token refresh flow

use crate::errors::{AuthError, DomainError, TokenError};

use super::harness::{harness, seed_verified_account};

#[tokio::test]
async fn test_refresh_issues_new_access_and_echoes_refresh() {
    let h = harness();
    seed_verified_account(&h, "a@x.com", "Alice", "pw1").await;

    let login = h
        .service
        .login("a@x.com", "pw1")
        .await
        .expect("Failed to login");
    let refresh_token = login.tokens.refresh_token.clone();

    let refreshed = h
        .service
        .refresh(&refresh_token)
        .await
        .expect("Failed to refresh");

    // Same refresh token back, fresh access token for the same subject
    assert_eq!(refreshed.tokens.refresh_token, refresh_token);
    assert!(h.tokens.verify(&refreshed.tokens.access_token, "a@x.com"));
    assert_eq!(
        h.tokens
            .extract_subject(&refreshed.tokens.access_token)
            .unwrap(),
        "a@x.com"
    );
}

#[tokio::test]
async fn test_refresh_with_garbage_token() {
    let h = harness();

    match h.service.refresh("not-a-jwt").await.unwrap_err() {
        DomainError::Token(TokenError::Invalid) => {}
        other => panic!("Expected Invalid token error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_refresh_for_missing_account() {
    let h = harness();

    // Structurally valid token naming a subject with no account
    let token = h.tokens.issue_refresh("ghost@x.com").unwrap();

    match h.service.refresh(&token).await.unwrap_err() {
        DomainError::Auth(AuthError::NotFound) => {}
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_refresh_with_tampered_signature() {
    let h = harness();
    seed_verified_account(&h, "a@x.com", "Alice", "pw1").await;

    let login = h
        .service
        .login("a@x.com", "pw1")
        .await
        .expect("Failed to login");

    // The subject still decodes, but full verification must fail
    let mut tampered = login.tokens.refresh_token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    match h.service.refresh(&tampered).await.unwrap_err() {
        DomainError::Token(TokenError::Invalid) => {}
        other => panic!("Expected Invalid token error, got {:?}", other),
    }
}
