//! Request and response DTOs shared by the HTTP layer and the OpenAPI document.

pub mod api;
pub mod board;
pub mod card;
pub mod list;
