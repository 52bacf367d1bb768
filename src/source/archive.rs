//! Packaged workbook (`.twbx`) support.
//!
//! A `.twbx` is a ZIP archive holding the workbook XML next to extracts
//! and images:
//!
//! ```text
//! Sales.twbx (ZIP archive)
//! ├── Sales.twb              # workbook XML
//! ├── Data/
//! │   └── Extracts/orders.hyper
//! └── Image/
//!     └── logo.png
//! ```

use crate::WorkbookError;

/// File extension of the workbook XML inside a packaged workbook.
pub const WORKBOOK_ENTRY_SUFFIX: &str = ".twb";

/// Return the workbook XML bytes from a packaged workbook.
pub fn read_packaged_workbook(input: &[u8]) -> Result<Vec<u8>, WorkbookError> {
    validate(input)?;

    #[cfg(feature = "archive")]
    {
        reader::read(input)
    }
    #[cfg(not(feature = "archive"))]
    {
        Err(WorkbookError::Unsupported(
            "packaged workbooks require the 'archive' feature".to_string(),
        ))
    }
}

/// Quick check for the ZIP magic number.
pub fn validate(input: &[u8]) -> Result<(), WorkbookError> {
    if input.len() < 4 {
        return Err(WorkbookError::archive("File too small"));
    }

    // ZIP files start with PK\x03\x04
    if &input[0..4] != b"PK\x03\x04" {
        return Err(WorkbookError::archive("Not a valid ZIP archive"));
    }

    Ok(())
}

/// Pick the workbook entry: the first root-level `.twb`, else the first anywhere.
pub fn select_workbook_entry<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut nested = None;
    for name in names {
        if !name.to_ascii_lowercase().ends_with(WORKBOOK_ENTRY_SUFFIX) {
            continue;
        }
        if !name.contains('/') {
            return Some(name);
        }
        nested.get_or_insert(name);
    }
    nested
}

#[cfg(feature = "archive")]
mod reader {
    use std::io::{Cursor, Read};

    use zip::ZipArchive;

    use super::*;

    pub fn read(input: &[u8]) -> Result<Vec<u8>, WorkbookError> {
        let mut archive = ZipArchive::new(Cursor::new(input))
            .map_err(|e| WorkbookError::archive(format!("Failed to open archive: {e}")))?;

        let entry_name = select_workbook_entry(archive.file_names())
            .map(str::to_string)
            .ok_or_else(|| WorkbookError::missing_entry(format!("*{WORKBOOK_ENTRY_SUFFIX}")))?;
        tracing::debug!(entry = %entry_name, "reading packaged workbook entry");

        let mut file = archive.by_name(&entry_name).map_err(|e| {
            WorkbookError::archive(format!("Failed to read {entry_name}: {e}"))
        })?;

        let mut content = Vec::new();
        file.read_to_end(&mut content).map_err(|e| {
            WorkbookError::archive(format!("Failed to read {entry_name}: {e}"))
        })?;
        Ok(content)
    }
}
