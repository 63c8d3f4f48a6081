use super::*;

use crate::state::session::SessionSnapshot;

fn session_with_role(role: &str) -> SessionSnapshot {
    SessionSnapshot {
        token: "hdr.payload.sig".to_owned(),
        role: role.to_owned(),
        username: "maria".to_owned(),
    }
}

#[test]
fn empty_requirement_admits_any_authenticated_role() {
    let session = session_with_role("estudiante");
    assert!(evaluate_role(&[], Some(&session)).is_allowed());
}

#[test]
fn matching_role_allows() {
    let session = session_with_role("admin");
    assert!(evaluate_role(&["admin"], Some(&session)).is_allowed());
}

#[test]
fn role_comparison_is_case_insensitive() {
    // A mixed-case role persisted by an older client must still match.
    let session = session_with_role("Admin");
    assert!(evaluate_role(&["admin"], Some(&session)).is_allowed());

    let session = session_with_role("admin");
    assert!(evaluate_role(&["ADMIN"], Some(&session)).is_allowed());
}

#[test]
fn insufficient_role_with_token_redirects_to_dashboard() {
    let session = session_with_role("estudiante");
    let result = evaluate_role(&["admin"], Some(&session));
    assert_eq!(result.decision, GateDecision::InsufficientRole);
    assert_eq!(result.redirect_to.as_deref(), Some("/dashboard"));
}

#[test]
fn insufficient_role_without_session_redirects_to_login() {
    let result = evaluate_role(&["admin"], None);
    assert_eq!(result.decision, GateDecision::InsufficientRole);
    assert_eq!(result.redirect_to.as_deref(), Some("/login"));
}

#[test]
fn multiple_required_roles_any_match_allows() {
    let session = session_with_role("estudiante");
    assert!(evaluate_role(&["admin", "estudiante"], Some(&session)).is_allowed());
}
