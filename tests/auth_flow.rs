use std::sync::Arc;

use spendbook::auth::{AuthError, AuthSession};
use spendbook::storage::{JsonStore, StorageBackend};
use tempfile::tempdir;

#[test]
fn register_then_failed_login_keeps_the_session_open() {
    let temp = tempdir().unwrap();
    let storage = Arc::new(JsonStore::new(Some(temp.path().to_path_buf())).unwrap());
    let mut session = AuthSession::open(storage);

    let user = session
        .register("Ann", "ann@x.com", "secret1")
        .expect("registration succeeds");
    assert_eq!(user.name, "Ann");
    assert!(session.is_authenticated());

    let err = session
        .login("ann@x.com", "wrong")
        .expect_err("wrong password fails");
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert!(session.is_authenticated(), "failed login must not deauthenticate");
    assert_eq!(session.current_user().unwrap().name, "Ann");
}

#[test]
fn session_survives_a_process_restart() {
    let temp = tempdir().unwrap();
    let storage = Arc::new(JsonStore::new(Some(temp.path().to_path_buf())).unwrap());

    {
        let mut session = AuthSession::open(storage.clone());
        session
            .register("Bob", "bob@x.com", "hunter2")
            .expect("registration succeeds");
    }

    let session = AuthSession::open(storage);
    assert!(session.is_authenticated());
    assert_eq!(session.current_user().unwrap().email, "bob@x.com");
}

#[test]
fn logout_clears_the_persisted_session() {
    let temp = tempdir().unwrap();
    let storage = Arc::new(JsonStore::new(Some(temp.path().to_path_buf())).unwrap());

    let mut session = AuthSession::open(storage.clone());
    session
        .register("Cara", "cara@x.com", "pw")
        .expect("registration succeeds");
    session.logout().expect("logout succeeds");

    assert!(!storage.key_path("user").exists());
    let reopened = AuthSession::open(storage);
    assert!(!reopened.is_authenticated());
}

#[test]
fn persisted_user_list_keeps_credentials_and_session_stays_sanitized() {
    let temp = tempdir().unwrap();
    let storage = Arc::new(JsonStore::new(Some(temp.path().to_path_buf())).unwrap());

    let mut session = AuthSession::open(storage.clone());
    session
        .register("Dee", "dee@x.com", "topsecret")
        .expect("registration succeeds");

    let users_raw = std::fs::read_to_string(storage.key_path("users")).unwrap();
    assert!(users_raw.contains("topsecret"), "credential table keeps the password");

    let session_raw = std::fs::read_to_string(storage.key_path("user")).unwrap();
    assert!(!session_raw.contains("topsecret"), "session record is sanitized");
}

#[test]
fn users_registered_in_one_session_can_login_in_the_next() {
    let temp = tempdir().unwrap();
    let storage = Arc::new(JsonStore::new(Some(temp.path().to_path_buf())).unwrap());

    {
        let mut session = AuthSession::open(storage.clone());
        session
            .register("Eve", "eve@x.com", "letmein")
            .expect("registration succeeds");
        session.logout().expect("logout succeeds");
    }

    let mut session = AuthSession::open(storage.clone());
    assert!(!session.is_authenticated());
    let user = session.login("eve@x.com", "letmein").expect("login succeeds");
    assert_eq!(user.name, "Eve");

    let users = storage.load_users().expect("load users").unwrap();
    assert_eq!(users.len(), 1);
}
