use std::sync::Arc;

use super::*;
use crate::constants::{AUTH_TOKEN_KEY, AUTH_USER_KEY};

fn sample_session() -> Session {
    Session {
        token: "jwt.token".to_string(),
        user: SessionUser {
            id: 42,
            email: "ana@tucash.pe".to_string(),
            display_name: "Ana".to_string(),
        },
    }
}

#[test]
fn test_establish_persists_both_keys() {
    let storage = Arc::new(InMemorySessionStorage::new());
    let session = AuthSession::new(storage.clone());

    session.establish(sample_session()).unwrap();

    assert!(session.is_logged_in());
    assert_eq!(session.token().as_deref(), Some("jwt.token"));
    assert_eq!(session.current_user_id(), Some(42));
    assert_eq!(storage.get(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("jwt.token"));
    let user: SessionUser =
        serde_json::from_str(&storage.get(AUTH_USER_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(user.display_name, "Ana");
}

#[test]
fn test_restore_from_storage() {
    let storage = Arc::new(InMemorySessionStorage::new());
    AuthSession::new(storage.clone())
        .establish(sample_session())
        .unwrap();

    let fresh = AuthSession::new(storage);
    assert!(!fresh.is_logged_in());
    let restored = fresh.restore().unwrap();
    assert_eq!(restored, Some(sample_session()));
    assert_eq!(fresh.current_user().map(|u| u.email), Some("ana@tucash.pe".into()));
}

#[test]
fn test_restore_accepts_mock_user_shape() {
    let storage = Arc::new(InMemorySessionStorage::new());
    storage.set(AUTH_TOKEN_KEY, "abc").unwrap();
    storage
        .set(AUTH_USER_KEY, r#"{"id":1,"name":"Bo","email":"bo@x.io"}"#)
        .unwrap();

    let session = AuthSession::new(storage);
    let restored = session.restore().unwrap().unwrap();
    assert_eq!(restored.user.display_name, "Bo");
}

#[test]
fn test_restore_discards_incomplete_record() {
    let storage = Arc::new(InMemorySessionStorage::new());
    storage.set(AUTH_TOKEN_KEY, "orphan").unwrap();

    let session = AuthSession::new(storage.clone());
    assert_eq!(session.restore().unwrap(), None);
    assert_eq!(storage.get(AUTH_TOKEN_KEY).unwrap(), None);
}

#[test]
fn test_restore_discards_corrupt_user() {
    let storage = Arc::new(InMemorySessionStorage::new());
    storage.set(AUTH_TOKEN_KEY, "t").unwrap();
    storage.set(AUTH_USER_KEY, "{not json").unwrap();

    let session = AuthSession::new(storage.clone());
    assert_eq!(session.restore().unwrap(), None);
    assert_eq!(storage.get(AUTH_USER_KEY).unwrap(), None);
}

#[test]
fn test_clear_and_guard() {
    let storage = Arc::new(InMemorySessionStorage::new());
    let session = AuthSession::new(storage.clone());
    session.establish(sample_session()).unwrap();
    assert!(session.require_authenticated().is_ok());

    session.clear().unwrap();

    assert!(!session.is_logged_in());
    assert_eq!(session.token(), None);
    assert_eq!(storage.get(AUTH_TOKEN_KEY).unwrap(), None);
    assert_eq!(storage.get(AUTH_USER_KEY).unwrap(), None);
    assert!(matches!(
        session.require_authenticated(),
        Err(crate::Error::Unauthenticated)
    ));
}
