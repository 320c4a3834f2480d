//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `shutterdesk_db`
//! (and to the collaborator traits on [`AppState`](crate::state::AppState)
//! for media, documents and payments) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod album;
pub mod auth;
pub mod camera;
pub mod checkout;
pub mod client;
pub mod dashboard;
pub mod event;
pub mod event_cost;
pub mod finance;
pub mod invoice;
pub mod lens;
pub mod transaction;
