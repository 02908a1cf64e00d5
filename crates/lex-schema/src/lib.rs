//! # lex-schema
//!
//! JSON Schemas for the menu document, sync reports, and admin API bodies.
//!
//! Types are defined in `lex-core` with `#[derive(JsonSchema)]`. This crate
//! builds the registry from them and validates raw JSON before it is
//! deserialized, so malformed documents are reported with field-level detail.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
