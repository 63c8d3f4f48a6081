//! Shared UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `sidebar` owns the role-scoped menu; `crud_page` is the single
//! parameterized entity screen every admin/student list view instantiates.

pub mod crud_page;
pub mod sidebar;
