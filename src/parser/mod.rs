//! Line-oriented parser for the Movable Type import format
//!
//! # Error Handling Strategy
//!
//! This module follows a **fail-fast** approach, the opposite of graceful
//! degradation:
//!
//! - **Recognized fields are strict**: a bad `STATUS` literal, a permission
//!   flag outside {0, 1} or a `DATE` matching neither accepted layout aborts
//!   the parse immediately. The error names the column and carries the
//!   offending text, and no partial result is returned. Malformed input is
//!   deterministic and non-transient, so there is nothing to retry.
//!
//! - **Unrecognized input is lenient**: unknown keys and unknown bare lines
//!   are skipped silently, so exports from newer engine versions with extra
//!   metadata still parse.
//!
//! - **Error propagation**: uses `anyhow::Result` with context. Consumers
//!   match on messages, not error types.

pub mod fields;
pub mod import;

pub use import::{parse, parse_import_file, parse_str};
