//! Common types and traits for all entities

pub mod entity;

// Re-exports
pub use entity::{has_text, normalize_optional, Entity, EntityId};
