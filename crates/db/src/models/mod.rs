//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! database row.

pub mod event;
pub mod viking;
