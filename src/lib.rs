//! MT Import - Parse Movable Type blog export files
//!
//! This library parses the Movable Type plain-text import/export format
//! into structured [`Entry`](models::Entry) records. It supports:
//!
//! - Single-pass, line-oriented parsing of metadata fields and delimiters
//! - Multi-line content blocks (`BODY:`, `EXTENDED BODY:`, `EXCERPT:`)
//! - Strict validation of status literals, 0/1 permission flags, and the
//!   two accepted date layouts (12-hour with AM/PM, 24-hour without)
//!
//! # Example
//!
//! ```
//! use mt_import::parse_str;
//!
//! let entries = parse_str("AUTHOR: alice\nSTATUS: Publish\n--------\n")?;
//! println!("Parsed {} entries", entries.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod models;
pub mod parser;
pub mod utils;

// Re-export commonly used types
pub use models::{Entry, Status};
pub use parser::{parse, parse_import_file, parse_str};
