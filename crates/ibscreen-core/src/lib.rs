//! ibscreen-core
//!
//! Pure domain types for IBS pattern screening: the intake record, imaging
//! attachments, the structured inference result, the weight normalization
//! rule, and the preset clinical scenarios. No AWS SDK dependency.

pub mod error;
pub mod models;
pub mod normalize;
pub mod scenarios;
