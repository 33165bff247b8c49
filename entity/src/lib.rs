//! SeaORM entity definitions for the kanban store.
//!
//! Boards own lists and lists own cards. Each entity module exposes the usual
//! `Model`, `ActiveModel`, `Column` and `Relation` types generated by SeaORM.

pub mod prelude;

pub mod board;
pub mod card;
pub mod list;
