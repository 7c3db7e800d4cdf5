//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Wire fields are camelCase; columns are snake_case.

pub mod article;
pub mod fichier;
pub mod library;
pub mod notification;
pub mod plan;
pub mod project;
pub mod statut;
pub mod tag;
pub mod user;
