//! Bearer-token payload decoding.
//!
//! The backend issues a dot-separated token whose middle segment is a
//! base64url JSON object. The client never verifies the signature (it has no
//! key material); it only reads the claims to drive expiry checks and
//! role-scoped navigation.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use thiserror::Error;

/// Decoded token claims.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionClaims {
    /// Numeric identifier of the authenticated principal.
    pub subject: i64,
    /// Display name, when the backend embeds one.
    pub username: Option<String>,
    /// Lowercased role tag. Absent when the token carries no role claim.
    pub role: Option<String>,
    /// Seconds since the Unix epoch.
    pub issued_at: Option<f64>,
    /// Seconds since the Unix epoch.
    pub expires_at: f64,
}

impl SessionClaims {
    /// A session is valid only while `expires_at` is strictly in the future.
    #[must_use]
    pub fn is_expired(&self, now_secs: f64) -> bool {
        self.expires_at <= now_secs
    }
}

/// Any structural failure collapses to `Malformed`: the caller's reaction is
/// the same (clear the session, redirect to login) regardless of which
/// segment was bad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("malformed bearer token")]
    Malformed,
}

/// Raw wire shape of the payload segment. `sub` and `exp` are required;
/// everything else degrades to absent.
#[derive(Debug, Deserialize)]
struct RawClaims {
    #[serde(alias = "id")]
    sub: i64,
    username: Option<String>,
    role: Option<String>,
    exp: f64,
    iat: Option<f64>,
}

/// Decode the payload segment of `token` into [`SessionClaims`].
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] when the token has fewer than two
/// dot-separated segments, the payload is not valid base64url, or the JSON
/// lacks the required claims.
pub fn decode(token: &str) -> Result<SessionClaims, DecodeError> {
    let payload = token.split('.').nth(1).ok_or(DecodeError::Malformed)?;
    // Some issuers pad base64url payloads even though the JWT wire format
    // forbids it; tolerate both.
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| DecodeError::Malformed)?;
    let raw: RawClaims = serde_json::from_slice(&bytes).map_err(|_| DecodeError::Malformed)?;
    Ok(SessionClaims {
        subject: raw.sub,
        username: raw.username,
        role: raw.role.map(|r| r.to_lowercase()),
        issued_at: raw.iat,
        expires_at: raw.exp,
    })
}
