//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and serve as the default values
//! for factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let board = fixture::board::entity();
//! let card = fixture::card::entity_builder().status("done").build();
//! ```

use chrono::{DateTime, Utc};

pub mod board;
pub mod card;
pub mod list;

pub use board::{entity as board_entity, entity_builder as board_entity_builder};
pub use card::{entity as card_entity, entity_builder as card_entity_builder};
pub use list::{entity as list_entity, entity_builder as list_entity_builder};

/// Fixed creation timestamp shared by all fixtures (2026-01-01T00:00:00Z).
pub fn default_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(1_767_225_600, 0).unwrap_or_default()
}
