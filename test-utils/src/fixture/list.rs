//! List fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::list;

use super::default_timestamp;

/// Default test list name.
pub const DEFAULT_NAME: &str = "Test List";

/// Default owning board ID.
pub const DEFAULT_BOARD_ID: i32 = 1;

/// Creates a list entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test List"`
/// - id_board: `1`
/// - created_at / updated_at: `2026-01-01T00:00:00Z`
/// - deleted_at: `None`
pub fn entity() -> list::Model {
    entity_builder().build()
}

/// Creates a builder for customizing a list entity model.
pub fn entity_builder() -> ListEntityBuilder {
    ListEntityBuilder {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        id_board: DEFAULT_BOARD_ID,
        created_at: default_timestamp(),
    }
}

/// Builder for list entity models with customizable fields.
pub struct ListEntityBuilder {
    id: i32,
    name: String,
    id_board: i32,
    created_at: DateTime<Utc>,
}

impl ListEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn id_board(mut self, id_board: i32) -> Self {
        self.id_board = id_board;
        self
    }

    pub fn build(self) -> list::Model {
        list::Model {
            id: self.id,
            name: self.name,
            id_board: self.id_board,
            created_at: self.created_at,
            updated_at: self.created_at,
            deleted_at: None,
        }
    }
}
