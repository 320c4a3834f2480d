//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod album;
pub mod camera;
pub mod client;
pub mod event;
pub mod event_cost;
pub mod invoice;
pub mod lens;
pub mod photo;
pub mod pricing_tier;
pub mod report;
pub mod transaction;
pub mod user;
