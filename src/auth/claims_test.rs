use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn token_for(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{body}.firma")
}

#[test]
fn decodes_subject_username_role_and_timestamps() {
    let token = token_for(&serde_json::json!({
        "sub": 42,
        "username": "maria",
        "role": "ADMIN",
        "iat": 1_700_000_000,
        "exp": 1_700_003_600,
    }));

    let claims = decode(&token).expect("well-formed token");
    assert_eq!(claims.subject, 42);
    assert_eq!(claims.username.as_deref(), Some("maria"));
    assert_eq!(claims.role.as_deref(), Some("admin"), "role must be lowercased");
    assert_eq!(claims.issued_at, Some(1_700_000_000.0));
    assert_eq!(claims.expires_at, 1_700_003_600.0);
}

#[test]
fn accepts_id_alias_for_subject() {
    let token = token_for(&serde_json::json!({ "id": 7, "exp": 2_000_000_000 }));
    assert_eq!(decode(&token).expect("id alias").subject, 7);
}

#[test]
fn missing_role_stays_absent() {
    let token = token_for(&serde_json::json!({ "sub": 1, "exp": 2_000_000_000 }));
    assert_eq!(decode(&token).expect("roleless token").role, None);
}

#[test]
fn fewer_than_two_segments_is_malformed() {
    assert_eq!(decode("no-dots-here"), Err(DecodeError::Malformed));
    assert_eq!(decode(""), Err(DecodeError::Malformed));
}

#[test]
fn invalid_base64_is_malformed() {
    assert_eq!(decode("hdr.!!not-base64!!.sig"), Err(DecodeError::Malformed));
}

#[test]
fn invalid_json_is_malformed() {
    let body = URL_SAFE_NO_PAD.encode(b"not json at all");
    assert_eq!(decode(&format!("hdr.{body}.sig")), Err(DecodeError::Malformed));
}

#[test]
fn missing_required_claims_is_malformed() {
    let token = token_for(&serde_json::json!({ "username": "maria" }));
    assert_eq!(decode(&token), Err(DecodeError::Malformed));
}

#[test]
fn tolerates_padded_base64url_payloads() {
    let body = base64::engine::general_purpose::URL_SAFE
        .encode(br#"{"sub":1,"exp":2000000000}"#);
    let claims = decode(&format!("hdr.{body}.sig")).expect("padded payload");
    assert_eq!(claims.subject, 1);
}

#[test]
fn expiry_boundary_is_strict() {
    let claims = SessionClaims {
        subject: 1,
        username: None,
        role: None,
        issued_at: None,
        expires_at: 1_000.0,
    };
    assert!(claims.is_expired(1_000.0), "exp == now counts as expired");
    assert!(claims.is_expired(1_000.5));
    assert!(!claims.is_expired(999.9));
}
