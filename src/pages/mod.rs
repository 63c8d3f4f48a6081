//! Route components.

pub mod admin;
pub mod dashboard;
pub mod estudiante;
pub mod login;
pub mod register;
