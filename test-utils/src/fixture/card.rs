//! Card fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::card;

use super::default_timestamp;

/// Default test card name.
pub const DEFAULT_NAME: &str = "Test Card";

/// Default test card description.
pub const DEFAULT_DESCRIPTION: &str = "A card for tests.";

/// Default test card status.
pub const DEFAULT_STATUS: &str = "todo";

/// Default owning list ID.
pub const DEFAULT_LIST_ID: i32 = 1;

/// Creates a card entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Card"`
/// - description: `"A card for tests."`
/// - status: `"todo"`
/// - id_list: `1`
pub fn entity() -> card::Model {
    entity_builder().build()
}

/// Creates a builder for customizing a card entity model.
pub fn entity_builder() -> CardEntityBuilder {
    CardEntityBuilder {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
        status: DEFAULT_STATUS.to_string(),
        id_list: DEFAULT_LIST_ID,
        created_at: default_timestamp(),
    }
}

/// Builder for card entity models with customizable fields.
pub struct CardEntityBuilder {
    id: i32,
    name: String,
    description: String,
    status: String,
    id_list: i32,
    created_at: DateTime<Utc>,
}

impl CardEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn id_list(mut self, id_list: i32) -> Self {
        self.id_list = id_list;
        self
    }

    pub fn build(self) -> card::Model {
        card::Model {
            id: self.id,
            name: self.name,
            description: self.description,
            status: self.status,
            id_list: self.id_list,
            created_at: self.created_at,
            updated_at: self.created_at,
            deleted_at: None,
        }
    }
}
