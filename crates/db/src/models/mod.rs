//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` DTOs for inserts and updates where the API accepts input

pub mod charge;
pub mod session;
pub mod user;
pub mod wiki;
