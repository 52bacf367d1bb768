//! Workbook input formats.
//!
//! - **TWB** - plain workbook XML
//! - **TWBX** - packaged workbook (ZIP with the `.twb` inside)

pub mod archive;

use std::path::Path;

use crate::WorkbookError;

/// On-disk workbook format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Twb,
    Twbx,
}

impl SourceFormat {
    /// Turn raw file content into workbook XML bytes.
    pub fn workbook_xml(self, content: Vec<u8>) -> Result<Vec<u8>, WorkbookError> {
        match self {
            SourceFormat::Twb => Ok(content),
            SourceFormat::Twbx => archive::read_packaged_workbook(&content),
        }
    }
}

/// Supported file extensions.
pub fn supported_extensions() -> &'static [&'static str] {
    &["twb", "twbx"]
}

/// Detect format from file extension.
pub fn detect_format(path: &Path) -> Option<SourceFormat> {
    let ext = path.extension()?.to_str()?;
    match ext.to_lowercase().as_str() {
        "twb" => Some(SourceFormat::Twb),
        "twbx" => Some(SourceFormat::Twbx),
        _ => None,
    }
}

/// Read the workbook XML behind `path`, unpacking `.twbx` archives.
pub fn read_workbook_xml(path: &Path) -> Result<Vec<u8>, WorkbookError> {
    let format = detect_format(path).ok_or_else(|| {
        WorkbookError::Unsupported(format!(
            "{} is not a workbook (expected one of: {})",
            path.display(),
            supported_extensions().join(", ")
        ))
    })?;
    let content = std::fs::read(path).map_err(|e| WorkbookError::io(path, e))?;
    format.workbook_xml(content).map_err(|e| e.with_path(path))
}
