//! Factory methods for creating test data.
//!
//! Factories insert entities into the test database with sensible defaults, reducing
//! boilerplate in tests. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let board = factory::board::create_board(&db).await?;
//! let list = factory::list::create_list(&db, board.id).await?;
//!
//! // Or the whole hierarchy at once
//! let (board, list, card) = factory::helpers::create_card_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let card = factory::card::CardFactory::new(&db, list.id)
//!     .name("Write docs")
//!     .status("doing")
//!     .build()
//!     .await?;
//! ```

pub mod board;
pub mod card;
pub mod helpers;
pub mod list;

pub use board::create_board;
pub use card::create_card;
pub use list::create_list;
