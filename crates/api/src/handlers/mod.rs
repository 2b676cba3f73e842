//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `wikiforge_db` and
//! map errors via [`crate::error::AppError`].

pub mod auth;
pub mod charges;
pub mod users;
pub mod wikis;
