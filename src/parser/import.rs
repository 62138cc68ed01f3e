use std::io::{self, BufRead, BufReader};
use std::mem;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Entry;
use crate::parser::fields::{parse_date, parse_flag, parse_status};
use crate::utils::open_validated;

/// Ends one record; the next line (if any) belongs to a fresh entry.
const RECORD_TERMINATOR: &str = "--------";

/// Separates sections within a record and closes content blocks.
const FIELD_TERMINATOR: &str = "-----";

/// The two-byte key/value separator. A bare `:` without the trailing space
/// does not split a line, which is what keeps block headers like `BODY:`
/// out of the key-value path.
const KEY_VALUE_SEPARATOR: &str = ": ";

/// Parse a Movable Type export from any line source.
///
/// Returns the entries in input order. Parsing stops at the first invalid
/// field value and returns the error with no partial result. A record still
/// open when the input ends is dropped, matching the behavior of every MT
/// importer in the wild.
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    let mut entry = Entry::new();
    let mut lines = reader.lines();

    while let Some(line) = lines.next() {
        let line = line.context("failed to read line from import text")?;

        let Some((key, value)) = line.split_once(KEY_VALUE_SEPARATOR) else {
            match line.as_str() {
                RECORD_TERMINATOR => {
                    entries.push(mem::replace(&mut entry, Entry::new()));
                }
                FIELD_TERMINATOR => {}
                "BODY:" => read_block(&mut lines, &mut entry.body)?,
                "EXTENDED BODY:" => read_block(&mut lines, &mut entry.extended_body)?,
                "EXCERPT:" => read_block(&mut lines, &mut entry.excerpt)?,
                // Unknown bare lines (and unknown block headers) are skipped.
                _ => {}
            }
            continue;
        };

        match key {
            "AUTHOR" => entry.author = value.to_string(),
            "TITLE" => entry.title = value.to_string(),
            "BASENAME" => entry.basename = value.to_string(),
            "STATUS" => entry.status = Some(parse_status(value)?),
            "ALLOW COMMENTS" => entry.allow_comments = parse_flag("ALLOW COMMENTS", value)?,
            "ALLOW PINGS" => entry.allow_pings = parse_flag("ALLOW PINGS", value)?,
            "CONVERT BREAKS" => entry.convert_breaks = value.to_string(),
            "DATE" => entry.date = Some(parse_date(value)?),
            "PRIMARY CATEGORY" => entry.primary_category = value.to_string(),
            "CATEGORY" => entry.category.push(value.to_string()),
            // Unrecognized keys are skipped for forward compatibility.
            _ => {}
        }
    }

    Ok(entries)
}

/// Parse an export held in memory.
pub fn parse_str(input: &str) -> Result<Vec<Entry>> {
    parse(input.as_bytes())
}

/// Open, size-check and parse an export file.
pub fn parse_import_file(path: &Path) -> Result<Vec<Entry>> {
    let file = open_validated(path)?;
    parse(BufReader::new(file))
        .with_context(|| format!("failed to parse import file: {}", path.display()))
}

/// Consume content lines verbatim into `target`, one newline re-appended per
/// line, until the field terminator. The terminator is swallowed, never
/// re-examined by the main loop. EOF inside a block just ends the block.
fn read_block<I>(lines: &mut I, target: &mut String) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    for line in lines {
        let line = line.context("failed to read line from import text")?;
        if line == FIELD_TERMINATOR {
            break;
        }
        target.push_str(&line);
        target.push('\n');
    }
    Ok(())
}
