//! notes2homebank Library
//! # Overview
//!
//! This library converts loosely structured plain-text transaction notes
//! into semicolon-delimited CSV ready for import into HomeBank.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (TransactionRecord, ConvertError)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Parsing logic:
//!   - [`core::classifier`] - Ordered pattern matchers deciding what a line is
//!   - [`core::context`] - Carried-forward year/date state
//!   - [`core::builder`] - Amount/sign normalization and record assembly
//!   - [`core::parser`] - Sequential state machine over input lines
//! - [`io`] - Line input and CSV output
//! - [`convert`] - End-to-end pipeline
//!
//! # Notes Format
//!
//! An input file is a flat list of lines of three kinds:
//!
//! - **Year marker** (`2023:`): sets the year for everything below it
//! - **Date marker** (`5.12:`): sets day and month for the transactions
//!   below it, day first
//! - **Transaction** (`50 Groceries`): one amount and a payee, dated by
//!   the markers above it
//!
//! Blank lines are ignored. Amounts are booked as expenses unless they
//! carry a leading `+`; decimal commas and periods both work.

// Module declarations
pub mod cli;
pub mod convert;
pub mod core;
pub mod io;
pub mod types;

pub use convert::convert;
pub use crate::core::{classify, LineKind, NotesParser, ParseContext};
pub use io::{write_transactions_csv, LineReader, NumberedLine};
pub use types::{ConvertError, TransactionRecord};
