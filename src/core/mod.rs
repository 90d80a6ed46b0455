//! Core types shared across the crate

pub mod error;
pub mod field;
pub mod record;

pub use error::{ApiError, ConfigError, ListwiseError, ListwiseResult};
pub use field::FieldValue;
pub use record::{DynRecord, Record};
