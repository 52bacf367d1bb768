//! # twb-catalog
//!
//! Field catalog and usage extraction for Tableau workbooks.
//!
//! Reads a workbook document, reconciles field metadata spread across
//! metadata records and column definitions into one record per field,
//! and annotates each field with the worksheets and shelves that use it.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! extract   → Document → Workbook orchestration, batch loading
//!   ↓
//! catalog   → Reference normalization, usage map, field catalog, resolver
//!   ↓
//! xml       → quick-xml reader, owned element tree and queries
//!   ↓
//! source    → .twb / .twbx input
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use twb_catalog::{ExtractOptions, load_workbook};
//!
//! let workbook = load_workbook("Sales.twbx".as_ref(), &ExtractOptions::default())?;
//! for field in &workbook.datasources[0].fields {
//!     println!("{} → {}", field.name, field.usage);
//! }
//! ```

// ============================================================================
// MODULES (dependency order: source → xml → catalog → extract)
// ============================================================================

/// Workbook input: plain and packaged files
pub mod source;

/// XML document tree
pub mod xml;

/// Field reconciliation and usage resolution
pub mod catalog;

/// Document-level extraction
pub mod extract;

mod error;
mod options;

pub use catalog::{
    CanonicalFieldId, Connection, DataSource, FieldRecord, NOT_USED, Role, UsageMap, Workbook,
    normalize,
};
pub use error::WorkbookError;
pub use extract::{extract, load_workbook, load_workbooks, parse_workbook};
pub use options::{ExtractOptions, LEGACY_MARKER, LegacyRelations};
