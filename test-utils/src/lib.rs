//! Kanban Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the kanban
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, fixtures and factories for boards, lists and cards, and an in-process
//! HTTP client for driving an axum `Router` without binding a port.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestApp**: In-process HTTP client wrapping a `Router`
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_board_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_kanban_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
