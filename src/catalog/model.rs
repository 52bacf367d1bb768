//! Extracted workbook model.
//!
//! ```text
//! Workbook
//! ├── datasources: Vec<DataSource>
//! │   ├── connections: Vec<Connection>
//! │   ├── queries: Vec<String>
//! │   └── fields: Vec<FieldRecord>
//! ├── worksheets: Vec<String>
//! ├── dashboards: Vec<String>
//! └── parameters: Vec<String>
//! ```

use serde::{Deserialize, Serialize};

use crate::WorkbookError;

/// Usage string for a field no worksheet references.
pub const NOT_USED: &str = "Not Used";

/// Role forced onto any field that carries a calculation.
pub const CALCULATION_ROLE: &str = "Calculation";

/// Everything extracted from one workbook document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    pub datasources: Vec<DataSource>,
    pub worksheets: Vec<String>,
    pub dashboards: Vec<String>,
    /// Parameter display names, brackets stripped.
    pub parameters: Vec<String>,
}

impl Workbook {
    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, WorkbookError> {
        serde_json::to_string_pretty(self).map_err(|e| WorkbookError::json(e.to_string()))
    }

    /// Look up a data source by its display caption.
    pub fn datasource(&self, name: &str) -> Option<&DataSource> {
        self.datasources.iter().find(|ds| ds.name == name)
    }

    /// Total number of cataloged fields across all data sources.
    pub fn field_count(&self) -> usize {
        self.datasources.iter().map(|ds| ds.fields.len()).sum()
    }
}

/// A data source and the fields cataloged for it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    /// Display caption (falls back to the technical name).
    pub name: String,
    /// Technical name, empty when the document gives none.
    pub tech_name: String,
    pub connections: Vec<Connection>,
    /// Distinct custom SQL texts, trimmed.
    pub queries: Vec<String>,
    pub fields: Vec<FieldRecord>,
}

impl DataSource {
    pub fn new(name: impl Into<String>, tech_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tech_name: tech_name.into(),
            ..Self::default()
        }
    }

    pub fn field(&self, tech_name: &str) -> Option<&FieldRecord> {
        self.fields.iter().find(|f| f.tech_name == tech_name)
    }

    /// True when there is nothing worth reporting.
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty() && self.queries.is_empty() && self.fields.is_empty()
    }
}

/// A physical connection behind a data source.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Connector class, e.g. `sqlserver` or `excel-direct`.
    pub class: String,
    pub server: Option<String>,
    pub dbname: Option<String>,
}

/// One field of a data source after merging metadata and column info.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    /// Raw technical name; the merge key within its data source.
    pub tech_name: String,
    /// Display name.
    pub name: String,
    pub role: String,
    pub datatype: String,
    /// Non-empty only for calculated fields.
    pub formula: String,
    /// Rendered worksheet usage, or [`NOT_USED`].
    pub usage: String,
}

impl FieldRecord {
    /// A fresh record with only its names set.
    pub fn new(tech_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tech_name: tech_name.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder: set the data type.
    pub fn with_datatype(mut self, datatype: impl Into<String>) -> Self {
        self.datatype = datatype.into();
        self
    }

    pub fn is_calculated(&self) -> bool {
        self.role == CALCULATION_ROLE
    }

    pub fn is_used(&self) -> bool {
        self.usage != NOT_USED
    }
}
