//! Input validation tests: raw names and e-mail addresses from callers

use rolegate::*;

// ============================================================================
// Role / Action names
// ============================================================================

#[test]
fn check_access_known_names() {
    assert_eq!(check_access("admin", "delete"), Ok(true));
    assert_eq!(check_access("anonymous", "delete"), Ok(false));
    assert_eq!(check_access("user", "update-self"), Ok(true));
    assert_eq!(check_access("anonymous", "view"), Ok(true));
}

#[test]
fn unknown_role_rejected() {
    let e = check_access("superuser", "view").unwrap_err();
    assert_eq!(e, GateError::UnknownRole("superuser".into()));
    assert!(e.to_string().contains("superuser"));
}

#[test]
fn unknown_action_rejected() {
    assert_eq!(check_access("admin", "update"), Err(GateError::UnknownAction("update".into())));
}

#[test]
fn names_are_case_sensitive() {
    assert!(check_access("Admin", "delete").is_err());
    assert!(check_access("admin", "DELETE").is_err());
    assert!(check_access("admin", "update_self").is_err());
}

#[test]
fn empty_names_rejected() {
    assert!(matches!(check_access("", "view"), Err(GateError::UnknownRole(_))));
    assert!(matches!(check_access("user", ""), Err(GateError::UnknownAction(_))));
}

#[test]
fn serde_uses_canonical_names() {
    assert_eq!(serde_json::to_string(&Action::UpdateAny).unwrap(), r#""update-any""#);
    assert_eq!(serde_json::from_str::<Role>(r#""anonymous""#).unwrap(), Role::Anonymous);
    assert!(serde_json::from_str::<Role>(r#""root""#).is_err());
    assert!(serde_json::from_str::<Action>(r#""UpdateAny""#).is_err());
}

// ============================================================================
// E-mail addresses
// ============================================================================

#[test]
fn email_predicate_and_assertion_agree() {
    for s in ["alice@example.com", "bob", "carol@", "dave@host", "eve@host.io"] {
        assert_eq!(is_valid_email(s), assert_valid_email(s).is_ok(), "{s}");
        assert_eq!(is_valid_email(s), Email::parse(s).is_ok(), "{s}");
    }
}

#[test]
fn email_deserialize_validates() {
    let e: Email = serde_json::from_str(r#""alice@example.com""#).unwrap();
    assert_eq!(e.as_str(), "alice@example.com");
    assert!(serde_json::from_str::<Email>(r#""alice""#).is_err());
    assert_eq!(serde_json::to_string(&e).unwrap(), r#""alice@example.com""#);
}

#[test]
fn new_user_with_bad_email_rejected_at_decode() {
    let r = serde_json::from_str::<NewUser>(r#"{"name": "Alice", "email": "not-an-email"}"#);
    assert!(r.is_err());
}
