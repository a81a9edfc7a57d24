//! Request handlers.
//!
//! Each submodule provides async handler functions (create, list, get,
//! update, delete) for a single entity type. Write handlers run the body
//! through the matching `fitcenter_core::schema` loader before delegating to
//! the repository in `fitcenter_db`; errors map via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod member;
pub mod workout_session;
