use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Sentinel for an `ALLOW COMMENTS` line that never appeared in the input.
pub const DEFAULT_ALLOW_COMMENTS: i32 = -1;

/// Sentinel for an `ALLOW PINGS` line that never appeared in the input.
pub const DEFAULT_ALLOW_PINGS: i32 = -1;

/// Publication status of an entry.
///
/// The import format only permits these three exact literals on a
/// `STATUS:` line; anything else is a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Draft,
    Publish,
    Future,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Draft => write!(f, "Draft"),
            Status::Publish => write!(f, "Publish"),
            Status::Future => write!(f, "Future"),
        }
    }
}

/// One blog post record from a Movable Type export.
///
/// String fields default to empty when the corresponding key never appears.
/// The comment/ping flags keep the -1 sentinel so callers can tell "unset"
/// apart from an explicit 0, and `status`/`date` stay `None` until their
/// lines are seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub author: String,
    pub title: String,
    pub basename: String,
    pub status: Option<Status>,

    /// 0 or 1 when set explicitly, otherwise [`DEFAULT_ALLOW_COMMENTS`].
    pub allow_comments: i32,

    /// 0 or 1 when set explicitly, otherwise [`DEFAULT_ALLOW_PINGS`].
    pub allow_pings: i32,

    pub convert_breaks: String,

    /// Post timestamp. The format carries no zone, so this stays naive.
    pub date: Option<NaiveDateTime>,

    pub primary_category: String,

    /// One element per `CATEGORY:` line, in input order, duplicates kept.
    pub category: Vec<String>,

    /// Lines of the `BODY:` block, each with its newline re-appended.
    pub body: String,

    /// Lines of the `EXTENDED BODY:` block, same accumulation as `body`.
    pub extended_body: String,

    /// Lines of the `EXCERPT:` block, same accumulation as `body`.
    pub excerpt: String,
}

impl Entry {
    /// Create an entry with sentinel defaults, ready to accumulate fields.
    pub fn new() -> Self {
        Self {
            author: String::new(),
            title: String::new(),
            basename: String::new(),
            status: None,
            allow_comments: DEFAULT_ALLOW_COMMENTS,
            allow_pings: DEFAULT_ALLOW_PINGS,
            convert_breaks: String::new(),
            date: None,
            primary_category: String::new(),
            category: Vec::new(),
            body: String::new(),
            extended_body: String::new(),
            excerpt: String::new(),
        }
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}
