//! ibscreen-bedrock
//!
//! Builds the screening request from an intake record, sends it to a
//! Bedrock model, and turns the structured reply into a validated,
//! normalized result.

pub mod config;
pub mod converse;
pub mod document;
pub mod error;
pub mod prompt;
pub mod request;
pub mod schema;
pub mod screening;
pub mod tokens;
pub mod transport;
