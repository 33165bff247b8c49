//! Request extractors that reject malformed input before a handler runs.
//!
//! Rejections are `AppError` values, so they render as the same 400 envelope the services
//! produce.

pub mod validation;
