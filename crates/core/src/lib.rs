//! Pure domain logic for the shutterdesk platform.
//!
//! Everything in this crate is side-effect free: no database access, no I/O,
//! no clocks. The api crate feeds it values pulled from the store and maps
//! its results onto HTTP responses.

pub mod equipment;
pub mod error;
pub mod finance;
pub mod money;
pub mod pricing;
pub mod roles;
pub mod types;
