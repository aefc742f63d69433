//! Core parsing logic
//!
//! This module contains the line-level and file-level parsing components:
//! - `classifier` - Ordered pattern matchers deciding what a line is
//! - `context` - Carried-forward year/date state
//! - `builder` - Turns matched transaction parts into records
//! - `parser` - Sequential state machine over input lines

pub mod builder;
pub mod classifier;
pub mod context;
pub mod parser;

pub use classifier::{classify, LineKind};
pub use context::ParseContext;
pub use parser::NotesParser;
