//! HTTP request handlers.
//!
//! Controllers resolve the request's authorization context through
//! `AuthGuard`, convert between DTOs and domain parameters, and delegate the
//! actual work to the service layer.

pub mod auth;
pub mod discord;
pub mod settings;
