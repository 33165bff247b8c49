//! HTTP request handlers.
//!
//! One module per resource. Every handler delegates to a service and returns its
//! `ServiceResponse` unchanged, and carries `#[utoipa::path]` metadata collected into the
//! OpenAPI document by the router.

pub mod board;
pub mod card;
pub mod health_check;
pub mod list;

#[cfg(test)]
mod test;
