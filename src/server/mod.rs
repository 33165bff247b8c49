//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations, and utoipa
//! for the OpenAPI document.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and OpenAPI metadata
//! - **Service Layer** (`service/`) - Shared CRUD rules producing response envelopes
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and envelope mapping
//! - **Middleware** (`middleware/`) - Extractors validating path IDs and JSON bodies
//!
//! Supporting modules: `config` (environment configuration), `state` (shared database
//! pool), `startup` (tracing, database, CORS, shutdown signal), `router` (routes and API
//! documentation), and `util` (identifier parsing).
//!
//! # Request Flow
//!
//! 1. **Router** matches the request to a controller
//! 2. **Middleware** extractors reject malformed IDs and payloads with a 400 envelope
//! 3. **Controller** converts DTOs to params and calls the service
//! 4. **Service** checks existence where needed, calls the repository, and wraps every
//!    outcome in a `ServiceResponse`
//! 5. **Data** runs one SQL statement and converts entities to domain models
//! 6. **Controller** writes the envelope as the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
