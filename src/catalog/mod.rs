//! Field reconciliation and usage resolution.
//!
//! ## Architecture
//!
//! ```text
//! worksheets ──▶ build_usage_map ──▶ UsageMap ─────────────┐
//!                                                          ▼
//! datasource ──▶ FieldCatalog (metadata-records + columns) ──▶ resolve ──▶ Vec<FieldRecord>
//! ```
//!
//! The usage map is built once per document; the catalog and resolver run
//! once per data source. Both sides meet on [`CanonicalFieldId`].

pub mod datasource;
pub mod fields;
pub mod model;
pub mod normalize;
pub mod resolve;
pub mod usage;

pub use datasource::{DataSourceOutcome, extract_datasource};
pub use fields::{FieldCatalog, build_fields};
pub use model::{Connection, DataSource, FieldRecord, NOT_USED, Workbook};
pub use normalize::{CanonicalFieldId, normalize};
pub use resolve::{candidate_ids, render_usage, resolve_usage, usage_string};
pub use usage::{Role, UsageMap, WorksheetRoles, build_usage_map};
