//! Entity structs matching database rows.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct. Write inputs are
//! the validated structs from `fitcenter_core::schema`.

pub mod member;
pub mod workout_session;
