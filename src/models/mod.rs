//! Data model for Movable Type export records.
//!
//! - [`Entry`] - one blog post with metadata and content blocks
//! - [`Status`] - the three-literal publication status
//!
//! Both derive serde traits so the CLI can emit JSON without any extra
//! mapping layer. Field conversions from the raw export text live in the
//! `parser::fields` module, not here.

pub mod entry;

pub use entry::{DEFAULT_ALLOW_COMMENTS, DEFAULT_ALLOW_PINGS, Entry, Status};
