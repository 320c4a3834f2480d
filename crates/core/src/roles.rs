//! Well-known role name constants.
//!
//! These must match the values accepted by registration and stored in
//! `users.role`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_PHOTOGRAPHER: &str = "photographer";

/// Roles a user may register with.
pub const ASSIGNABLE_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_PHOTOGRAPHER];
