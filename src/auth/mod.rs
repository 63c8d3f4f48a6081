//! Session and authorization gates for protected navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route evaluates the auth gate (token present, decodable,
//! unexpired) and then the role gate (declared roles for the target view).
//! Both are synchronous, never await I/O, and consult only the session
//! store; denied navigations resolve to redirect targets, never to panics.

pub mod claims;
pub mod flow;
pub mod guard;
pub mod role;
