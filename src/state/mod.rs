//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only process-wide state this client keeps is the browser-persisted
//! session (token plus denormalized role/username). Everything else lives in
//! per-page signals.

pub mod session;
