use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::auth::guard::{self, GateDecision};
use crate::auth::role;
use crate::state::session::{MemorySession, SessionStore as _};

const NOW: f64 = 1_700_000_000.0;

fn issued_token() -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(
        serde_json::json!({
            "sub": 9,
            "username": "rector1",
            "role": "ADMIN",
            "iat": NOW,
            "exp": NOW + 3_600.0,
        })
        .to_string()
        .as_bytes(),
    );
    format!("{header}.{body}.firma")
}

#[test]
fn login_establishes_normalized_session_and_gates_admin_views() {
    // Backend response: { access_token, role: "ADMIN" }.
    let mut store = MemorySession::default();
    let token = issued_token();
    establish_session(&mut store, &token, "ADMIN").expect("valid token");

    let snapshot = store.current().expect("session established");
    assert_eq!(snapshot.role, "admin", "role normalized at write time");
    assert_eq!(snapshot.username, "rector1");

    // Admin-only view: allowed end to end.
    assert!(guard::evaluate_auth(&mut store, NOW, "/estudiantes").is_allowed());
    let session = store.current();
    assert!(role::evaluate_role(&["admin"], session.as_ref()).is_allowed());

    // Student-only view: denied, back to the dashboard (still logged in).
    let denied = role::evaluate_role(&["estudiante"], session.as_ref());
    assert_eq!(denied.decision, GateDecision::InsufficientRole);
    assert_eq!(denied.redirect_to.as_deref(), Some("/dashboard"));
    assert!(store.is_authenticated(), "insufficient role never clears the session");
}

#[test]
fn malformed_token_is_rejected_before_anything_is_stored() {
    let mut store = MemorySession::default();
    let result = establish_session(&mut store, "not-a-token", "admin");
    assert!(result.is_err());
    assert_eq!(store.current(), None);
}

#[test]
fn logout_leaves_no_residual_fields() {
    let mut store = MemorySession::default();
    establish_session(&mut store, &issued_token(), "admin").expect("valid token");

    logout(&mut store);
    assert_eq!(store.current(), None);
    assert!(!store.is_authenticated());
}

#[test]
fn username_defaults_to_empty_when_claims_omit_it() {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(
        serde_json::json!({ "sub": 3, "exp": NOW + 60.0 }).to_string().as_bytes(),
    );
    let token = format!("{header}.{body}.sig");

    let mut store = MemorySession::default();
    establish_session(&mut store, &token, "estudiante").expect("valid token");
    assert_eq!(store.current().expect("saved").username, "");
}
