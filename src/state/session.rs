//! Browser-persisted session state: token plus denormalized role/username.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth and role gates consult this store on every protected navigation,
//! and the sidebar reads it to scope the visible menu. Storage is
//! `localStorage` in the browser; SSR paths read as empty and write as
//! no-ops so server rendering stays deterministic.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// `localStorage` keys. `role` and `username` are denormalized copies of the
/// token claims so the menu can render without re-decoding the token.
const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "role";
const USERNAME_KEY: &str = "username";

/// Snapshot of the persisted session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub token: String,
    pub role: String,
    pub username: String,
}

/// Key/value session persistence.
///
/// Gates take `&mut dyn SessionStore` so tests can substitute
/// [`MemorySession`] for the browser-backed store.
pub trait SessionStore {
    /// Persist token, role, and username together. The role is lowercased at
    /// write time; comparison sites lowercase again so a value written by an
    /// older client is still matched.
    fn save(&mut self, token: &str, role: &str, username: &str);

    /// Current session, or `None` when no token is stored.
    fn current(&self) -> Option<SessionSnapshot>;

    /// Remove all three keys together. Clearing only the token would leave
    /// orphaned role/username values behind.
    fn clear(&mut self);

    /// Presence check only. Expiry is the auth gate's job.
    fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }
}

/// `localStorage`-backed store.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserSession {
    fn save(&mut self, token: &str, role: &str, username: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
                let _ = storage.set_item(ROLE_KEY, &role.to_lowercase());
                let _ = storage.set_item(USERNAME_KEY, username);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, role, username);
        }
    }

    fn current(&self) -> Option<SessionSnapshot> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
            let role = storage.get_item(ROLE_KEY).ok().flatten().unwrap_or_default();
            let username = storage.get_item(USERNAME_KEY).ok().flatten().unwrap_or_default();
            Some(SessionSnapshot { token, role, username })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn clear(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(ROLE_KEY);
                let _ = storage.remove_item(USERNAME_KEY);
            }
        }
    }
}

/// In-memory store used by tests and server-side evaluation.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    entry: Option<SessionSnapshot>,
}

impl SessionStore for MemorySession {
    fn save(&mut self, token: &str, role: &str, username: &str) {
        self.entry = Some(SessionSnapshot {
            token: token.to_owned(),
            role: role.to_lowercase(),
            username: username.to_owned(),
        });
    }

    fn current(&self) -> Option<SessionSnapshot> {
        self.entry.clone()
    }

    fn clear(&mut self) {
        self.entry = None;
    }
}

/// Wall-clock seconds since the Unix epoch, the unit of the `exp`/`iat`
/// claims.
#[must_use]
pub fn now_secs() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() / 1000.0
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64())
    }
}
