//! Board fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::board;

use super::default_timestamp;

/// Default test board name.
pub const DEFAULT_NAME: &str = "Test Board";

/// Creates a board entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Board"`
/// - created_at / updated_at: `2026-01-01T00:00:00Z`
/// - deleted_at: `None`
pub fn entity() -> board::Model {
    entity_builder().build()
}

/// Creates a builder for customizing a board entity model.
pub fn entity_builder() -> BoardEntityBuilder {
    BoardEntityBuilder {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        created_at: default_timestamp(),
        deleted_at: None,
    }
}

/// Builder for board entity models with customizable fields.
pub struct BoardEntityBuilder {
    id: i32,
    name: String,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl BoardEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn deleted_at(mut self, deleted_at: Option<DateTime<Utc>>) -> Self {
        self.deleted_at = deleted_at;
        self
    }

    /// Builds the board model; `updated_at` mirrors `created_at`.
    pub fn build(self) -> board::Model {
        board::Model {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.created_at,
            deleted_at: self.deleted_at,
        }
    }
}
