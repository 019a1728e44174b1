use archetype_core::errors::SessionError;
use archetype_core::models::UserId;
use archetype_session::{new_session_id, validate_session_id, validate_user_id};

#[test]
fn minted_ids_are_valid_and_unique() {
    let a = new_session_id();
    let b = new_session_id();
    assert_ne!(a, b);
    assert_eq!(a.len(), 36);
    validate_session_id(&a).unwrap();
    validate_session_id(&b).unwrap();
}

#[test]
fn session_id_bounds() {
    validate_session_id("abcd_EF-").unwrap();
    validate_session_id(&"a".repeat(128)).unwrap();
    assert!(validate_session_id("abcdefg").is_err());
    assert!(validate_session_id(&"a".repeat(129)).is_err());
    assert_eq!(
        validate_session_id("abc.defgh"),
        Err(SessionError::InvalidSessionId {
            session_id: "abc.defgh".to_string()
        })
    );
}

#[test]
fn user_id_checks() {
    validate_user_id(&UserId::new("auth0|1234")).unwrap();
    assert_eq!(
        validate_user_id(&UserId::new("   ")),
        Err(SessionError::InvalidUserId)
    );
    assert!(validate_user_id(&UserId::new("bad\nid")).is_err());
    assert!(validate_user_id(&UserId::new("u".repeat(300))).is_err());
}
