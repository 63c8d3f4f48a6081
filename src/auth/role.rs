//! Role gate: matches the session role against a route's declared roles.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use crate::auth::guard::{GateDecision, GateResult};
use crate::state::session::SessionSnapshot;

/// Evaluate the declared role requirement for a navigation.
///
/// Runs only after the auth gate allows, so it never re-checks expiry. An
/// empty requirement admits any authenticated role. Comparison is
/// case-insensitive on both sides: the store lowercases at write time, but a
/// value persisted by an older client may still carry mixed case.
///
/// A deny never clears the session. An authenticated-but-unauthorized user
/// is sent to the dashboard; without a token the redirect falls back to
/// login.
#[must_use]
pub fn evaluate_role(required: &[&str], session: Option<&SessionSnapshot>) -> GateResult {
    if required.is_empty() {
        return GateResult::allowed();
    }

    let permitted = session
        .map(|s| s.role.as_str())
        .is_some_and(|held| required.iter().any(|r| r.eq_ignore_ascii_case(held)));
    if permitted {
        return GateResult::allowed();
    }

    let redirect = if session.is_some() { "/dashboard" } else { "/login" };
    GateResult {
        decision: GateDecision::InsufficientRole,
        redirect_to: Some(redirect.to_owned()),
    }
}
