//! Domain types, errors, and input schemas for the fitness center API.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates build on it.

pub mod error;
pub mod schema;
pub mod types;
