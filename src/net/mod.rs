//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` covers the auth endpoints (login, register);
//! `crud` is the generic list/create/update/delete client every entity
//! screen shares.

pub mod api;
pub mod crud;
