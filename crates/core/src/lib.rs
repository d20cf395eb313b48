//! `greenscape-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the record crates
//! (no storage, no HTTP).

pub mod entity;
pub mod error;
pub mod id;
pub mod patch;
pub mod text;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;

#[doc(hidden)]
pub use uuid as __uuid;
