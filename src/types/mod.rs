//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: the parsed transaction record
//! - `error`: error types for the converter

pub mod error;
pub mod record;

pub use error::ConvertError;
pub use record::TransactionRecord;
