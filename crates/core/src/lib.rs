//! Domain rules shared by the database and API layers.
//!
//! This crate has zero internal dependencies so its validation helpers and
//! constants can be used by the repository layer, the API handlers, and any
//! future CLI tooling alike.

pub mod account;
pub mod billing;
pub mod error;
pub mod pagination;
pub mod types;
pub mod wiki;
