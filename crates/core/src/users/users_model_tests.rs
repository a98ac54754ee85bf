use super::*;
use crate::session::Session;

#[test]
fn test_flat_login_response_normalises() {
    let json = r#"{"id":7,"email":"ana@tucash.pe","displayName":"Ana","token":"jwt.abc"}"#;
    let session: Session = serde_json::from_str::<AuthResponse>(json).unwrap().into();
    assert_eq!(session.token, "jwt.abc");
    assert_eq!(session.user.id, 7);
    assert_eq!(session.user.display_name, "Ana");
}

#[test]
fn test_wrapped_login_response_normalises() {
    let json = r#"{"token":"Nzphbm5AdHVjYXNoLnBl","user":{"id":7,"name":"Ana","email":"ana@tucash.pe"}}"#;
    let response = serde_json::from_str::<AuthResponse>(json).unwrap();
    assert!(matches!(response, AuthResponse::Wrapped(_)));
    let session = Session::from(response);
    assert_eq!(session.user.display_name, "Ana");
    assert_eq!(session.user.email, "ana@tucash.pe");
}

#[test]
fn test_register_response_shapes() {
    let wrapped = r#"{"token":"t","user":{"id":1,"name":"Bo","email":"bo@x.io"}}"#;
    let created = r#"{"id":2,"email":"cy@x.io","displayName":"Cy","currency":"USD","theme":"dark","locale":"en"}"#;

    let session = serde_json::from_str::<RegisterResponse>(wrapped)
        .unwrap()
        .into_session();
    assert_eq!(session.map(|s| s.user.id), Some(1));

    let response = serde_json::from_str::<RegisterResponse>(created).unwrap();
    match response {
        RegisterResponse::Created(user) => {
            assert_eq!(user.display_name, "Cy");
            assert_eq!(user.currency, "USD");
        }
        other => panic!("expected a created user, got {:?}", other),
    }
}

#[test]
fn test_user_defaults() {
    let user: User = serde_json::from_str(r#"{"id":3,"email":"d@x.io","name":"Di"}"#).unwrap();
    assert_eq!(user.display_name, "Di");
    assert_eq!(user.currency, "PEN");
    assert!(!user.notifications_enabled);
}

#[test]
fn test_update_payloads_skip_absent_fields() {
    let update = UpdatePreferences {
        theme: Some("dark".into()),
        push_notifications: Some(false),
        ..Default::default()
    };
    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json, serde_json::json!({"theme": "dark", "pushNotifications": false}));
    assert_eq!(serde_json::to_value(UpdateUser::default()).unwrap(), serde_json::json!({}));
}

#[test]
fn test_login_and_register_validation() {
    assert!(LoginRequest::new("ana@tucash.pe", "secret").validate().is_ok());
    assert!(LoginRequest::new("not-an-email", "secret").validate().is_err());
    assert!(LoginRequest::new("ana@tucash.pe", "").validate().is_err());

    let request = RegisterRequest {
        email: "ana@tucash.pe".into(),
        password: "123".into(),
        display_name: "Ana".into(),
    };
    assert!(request.validate().unwrap_err().is_validation());
}
