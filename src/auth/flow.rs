//! Login/logout session lifecycle.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use crate::auth::claims::{self, DecodeError, SessionClaims};
use crate::state::session::SessionStore;

/// Persist a freshly issued token.
///
/// The role comes from the login response (the store lowercases it), the
/// username from the decoded claims. A token whose payload cannot be decoded
/// is rejected before anything is written, so a bad login never leaves a
/// partial session behind.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] when the token payload cannot be
/// decoded.
pub fn establish_session(
    store: &mut dyn SessionStore,
    access_token: &str,
    role: &str,
) -> Result<SessionClaims, DecodeError> {
    let decoded = claims::decode(access_token)?;
    let username = decoded.username.clone().unwrap_or_default();
    store.save(access_token, role, &username);
    Ok(decoded)
}

/// Clear the full session: token plus denormalized role/username.
pub fn logout(store: &mut dyn SessionStore) {
    store.clear();
}
