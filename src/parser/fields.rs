use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;

use crate::models::Status;

// The two textual date layouts the export format emits. Which one applies
// is decided by the AM/PM suffix alone, never by trying both.
const LAYOUT_12_HOUR: &str = "%m/%d/%Y %I:%M:%S %p";
const LAYOUT_24_HOUR: &str = "%m/%d/%Y %H:%M:%S";

/// Parse a `STATUS:` value. Only the three exact literals are accepted.
pub fn parse_status(value: &str) -> Result<Status> {
    match value {
        "Draft" => Ok(Status::Draft),
        "Publish" => Ok(Status::Publish),
        "Future" => Ok(Status::Future),
        _ => bail!("STATUS column allows only Draft, Publish or Future, got '{}'", value),
    }
}

/// Parse a 0/1 permission flag (`ALLOW COMMENTS` / `ALLOW PINGS`).
///
/// Non-numeric text is a conversion error naming the column; a numeric
/// value outside {0, 1} is a validation error carrying the parsed value.
pub fn parse_flag(field: &str, value: &str) -> Result<i32> {
    let flag: i32 = value
        .parse()
        .with_context(|| format!("{} column allows only 0 or 1, got '{}'", field, value))?;

    if flag != 0 && flag != 1 {
        bail!("{} column allows only 0 or 1, got {}", field, flag);
    }

    Ok(flag)
}

/// Parse a `DATE:` value in one of the two accepted layouts.
///
/// Values ending in the literal `AM`/`PM` use the 12-hour layout; anything
/// else is expected to already be 24-hour.
pub fn parse_date(value: &str) -> Result<NaiveDateTime> {
    let layout = if value.ends_with("AM") || value.ends_with("PM") {
        LAYOUT_12_HOUR
    } else {
        LAYOUT_24_HOUR
    };

    NaiveDateTime::parse_from_str(value, layout)
        .with_context(|| format!("failed to parse DATE column: '{}'", value))
}
