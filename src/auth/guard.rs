//! Authentication gate evaluated before every protected navigation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::auth::claims;
use crate::state::session::SessionStore;

/// Outcome category of a gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allowed,
    NoSession,
    MalformedToken,
    ExpiredSession,
    InsufficientRole,
}

/// A gate decision plus the redirect to apply when the navigation is denied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateResult {
    pub decision: GateDecision,
    pub redirect_to: Option<String>,
}

impl GateResult {
    #[must_use]
    pub fn allowed() -> Self {
        Self { decision: GateDecision::Allowed, redirect_to: None }
    }

    #[must_use]
    pub fn is_allowed(&self) -> bool {
        self.decision == GateDecision::Allowed
    }
}

/// Login redirect carrying the denied target as a return destination.
#[must_use]
pub fn login_redirect(target: &str) -> String {
    if target.is_empty() || target == "/" || target == "/login" {
        "/login".to_owned()
    } else {
        format!("/login?next={target}")
    }
}

/// Evaluate the current session for a navigation to `target`.
///
/// Re-runs on every protected navigation attempt; a prior allow is never
/// cached because expiry is time-dependent. Malformed and expired sessions
/// are cleared in full so they cannot be replayed on the next attempt.
pub fn evaluate_auth(store: &mut dyn SessionStore, now_secs: f64, target: &str) -> GateResult {
    let Some(session) = store.current() else {
        return GateResult {
            decision: GateDecision::NoSession,
            redirect_to: Some(login_redirect(target)),
        };
    };

    let Ok(claims) = claims::decode(&session.token) else {
        store.clear();
        return GateResult {
            decision: GateDecision::MalformedToken,
            redirect_to: Some(login_redirect(target)),
        };
    };

    if claims.is_expired(now_secs) {
        store.clear();
        return GateResult {
            decision: GateDecision::ExpiredSession,
            redirect_to: Some(login_redirect(target)),
        };
    }

    GateResult::allowed()
}
