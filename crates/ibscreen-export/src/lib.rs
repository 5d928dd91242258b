//! ibscreen-export
//!
//! Plain-text patient and clinical reports rendered from a screening result.

pub mod error;
pub mod render;
