use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum accepted export size: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Opens an export file and validates its size on the open handle.
///
/// The size check runs against the handle rather than the path to avoid
/// TOCTOU (time-of-check-time-of-use) races where the file changes between
/// the check and the read.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or its metadata cannot be read
/// - The file is larger than 10MB
pub fn open_validated(path: &Path) -> Result<File> {
    let file = File::open(path)
        .with_context(|| format!("failed to open import file: {}", path.display()))?;

    let metadata = file
        .metadata()
        .with_context(|| format!("failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "file too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(file)
}
