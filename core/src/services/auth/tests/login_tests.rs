//! Unit tests for credential and federated login, including the lockout policy

use chrono::{Duration, Utc};

use crate::domain::entities::account::{Account, AuthProvider};
use crate::errors::{AuthError, DomainError};
use crate::repositories::AccountRepository;
use crate::services::password::PasswordHasher;

use super::harness::{harness, seed_verified_account};

#[tokio::test]
async fn test_login_success() {
    let h = harness();
    seed_verified_account(&h, "a@x.com", "Alice", "pw1").await;

    let session = h
        .service
        .login("a@x.com", "pw1")
        .await
        .expect("Failed to login");

    assert_eq!(session.account.email, "a@x.com");
    assert!(h.tokens.verify(&session.tokens.access_token, "a@x.com"));
    assert!(h.tokens.verify(&session.tokens.refresh_token, "a@x.com"));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let h = harness();
    seed_verified_account(&h, "a@x.com", "Alice", "pw1").await;

    match h.service.login("a@x.com", "nope").await.unwrap_err() {
        DomainError::Auth(AuthError::InvalidCredentials) => {}
        other => panic!("Expected InvalidCredentials, got {:?}", other),
    }

    let account = h.accounts.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(account.failed_login_attempts, 1);
}

#[tokio::test]
async fn test_login_unknown_email() {
    let h = harness();

    match h.service.login("ghost@x.com", "pw").await.unwrap_err() {
        DomainError::Auth(AuthError::NotFound) => {}
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_unverified_email() {
    let h = harness();
    let hash = PasswordHasher::new(4).hash("pw1").unwrap();
    let mut account = Account::new_local("Alice".to_string(), "a@x.com".to_string(), hash);
    account.email_verified = false;
    h.accounts.seed(account).await;

    // Correct password, but the email was never verified
    match h.service.login("a@x.com", "pw1").await.unwrap_err() {
        DomainError::Auth(AuthError::EmailNotVerified) => {}
        other => panic!("Expected EmailNotVerified, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_locks_after_repeated_failures() {
    let h = harness();
    seed_verified_account(&h, "a@x.com", "Alice", "pw1").await;

    for _ in 0..5 {
        match h.service.login("a@x.com", "nope").await.unwrap_err() {
            DomainError::Auth(AuthError::InvalidCredentials) => {}
            other => panic!("Expected InvalidCredentials, got {:?}", other),
        }
    }

    let account = h.accounts.find_by_email("a@x.com").await.unwrap().unwrap();
    assert!(!account.account_non_locked);
    assert!(account.locked_until.is_some());

    // Even the correct password is refused while locked
    match h.service.login("a@x.com", "pw1").await.unwrap_err() {
        DomainError::Auth(AuthError::AccountLocked) => {}
        other => panic!("Expected AccountLocked, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_elapsed_lock_clears_itself() {
    let h = harness();
    let seeded = seed_verified_account(&h, "a@x.com", "Alice", "pw1").await;

    let mut account = seeded.clone();
    account.account_non_locked = false;
    account.failed_login_attempts = 5;
    account.locked_until = Some(Utc::now() - Duration::minutes(1));
    h.accounts.seed(account).await;

    let session = h
        .service
        .login("a@x.com", "pw1")
        .await
        .expect("Failed to login after lock elapsed");
    assert_eq!(session.account.email, "a@x.com");

    let account = h.accounts.find_by_email("a@x.com").await.unwrap().unwrap();
    assert!(account.account_non_locked);
    assert_eq!(account.failed_login_attempts, 0);
    assert!(account.locked_until.is_none());
}

#[tokio::test]
async fn test_login_success_resets_failure_count() {
    let h = harness();
    seed_verified_account(&h, "a@x.com", "Alice", "pw1").await;

    for _ in 0..2 {
        let _ = h.service.login("a@x.com", "nope").await;
    }
    h.service
        .login("a@x.com", "pw1")
        .await
        .expect("Failed to login");

    let account = h.accounts.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(account.failed_login_attempts, 0);
}

#[tokio::test]
async fn test_federated_login_creates_account_once() {
    let h = harness();

    let first = h
        .service
        .federated_login("g@x.com", "Grace")
        .await
        .expect("Failed federated login");
    assert_eq!(first.account.provider, AuthProvider::Google);
    assert!(first.account.email_verified);
    assert!(first.account.password_hash.is_none());

    let second = h
        .service
        .federated_login("g@x.com", "Grace")
        .await
        .expect("Failed repeat federated login");
    assert_eq!(second.account.id, first.account.id);
    assert_eq!(h.accounts.count().await, 1);

    assert!(h.tokens.verify(&second.tokens.access_token, "g@x.com"));
}

#[tokio::test]
async fn test_federated_login_reuses_local_account() {
    let h = harness();
    let seeded = seed_verified_account(&h, "a@x.com", "Alice", "pw1").await;

    let session = h
        .service
        .federated_login("a@x.com", "Alice From Google")
        .await
        .expect("Failed federated login");

    // The existing local account is reused untouched
    assert_eq!(session.account.id, seeded.id);
    assert_eq!(session.account.provider, AuthProvider::Local);
    assert_eq!(session.account.name, "Alice");
    assert_eq!(h.accounts.count().await, 1);
}
