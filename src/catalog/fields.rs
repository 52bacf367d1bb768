//! Field catalog for a single data source.
//!
//! Field information arrives from two places in the document:
//!
//! 1. `metadata-record` entries (schema side): local name, remote name,
//!    local type.
//! 2. `column` definitions (UI side): caption, role, datatype and, for
//!    calculated fields, a `calculation` child.
//!
//! Both are upserted into one [`FieldRecord`] per raw technical name.
//! Column definitions override individual attributes; a calculation
//! always sets the role to `Calculation` and never clears the datatype.

use indexmap::IndexMap;

use super::model::{CALCULATION_ROLE, FieldRecord};
use super::resolve;
use super::usage::UsageMap;
use crate::xml::XmlNode;

/// Field records keyed by raw technical name, in first-sighting order.
#[derive(Clone, Debug, Default)]
pub struct FieldCatalog {
    fields: IndexMap<String, FieldRecord>,
}

impl FieldCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run both passes over a data source element.
    pub fn collect(datasource: &XmlNode) -> Self {
        let mut catalog = Self::new();
        catalog.absorb_metadata_records(datasource);
        catalog.absorb_columns(datasource);
        catalog
    }

    /// Pass 1: create a record for every column-class metadata record.
    pub fn absorb_metadata_records(&mut self, datasource: &XmlNode) {
        let records = datasource
            .find_all("metadata-records")
            .flat_map(|list| list.children_named("metadata-record"))
            .filter(|record| record.attr("class") == Some("column"));

        for record in records {
            let Some(local_name) = non_empty_child_text(record, "local-name") else {
                tracing::trace!("skipping metadata record without local-name");
                continue;
            };

            let name = non_empty_child_text(record, "remote-name")
                .map(str::to_string)
                .unwrap_or_else(|| strip_brackets(local_name).to_string());
            let datatype = non_empty_child_text(record, "local-type").unwrap_or_default();

            self.fields.insert(
                local_name.to_string(),
                FieldRecord::new(local_name, name).with_datatype(datatype),
            );
        }
    }

    /// Pass 2: merge UI column definitions over what pass 1 produced.
    pub fn absorb_columns(&mut self, datasource: &XmlNode) {
        for column in datasource.find_all("column") {
            let Some(tech_name) = column.attr_non_empty("name") else {
                tracing::trace!("skipping column without a name");
                continue;
            };
            let caption = column.attr_non_empty("caption");

            // Calculated fields and UI-only parameters have no metadata record.
            let field = self
                .fields
                .entry(tech_name.to_string())
                .or_insert_with(|| {
                    let name = caption.unwrap_or_else(|| strip_brackets(tech_name));
                    FieldRecord::new(tech_name, name)
                });

            if let Some(caption) = caption {
                field.name = caption.to_string();
            }
            if let Some(role) = column.attr_non_empty("role") {
                field.role = capitalize(role);
            }
            if let Some(datatype) = column.attr_non_empty("datatype") {
                field.datatype = capitalize(datatype);
            }
            if let Some(calculation) = column.child("calculation") {
                field.formula = calculation.attr("formula").unwrap_or_default().to_string();
                field.role = CALCULATION_ROLE.to_string();
            }
        }
    }

    pub fn get(&self, tech_name: &str) -> Option<&FieldRecord> {
        self.fields.get(tech_name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Compute every usage string and hand the records out.
    pub fn finish(self, datasource_tech_name: &str, usage: &UsageMap) -> Vec<FieldRecord> {
        self.fields
            .into_values()
            .map(|mut field| {
                field.usage =
                    resolve::usage_string(&field.tech_name, datasource_tech_name, usage);
                field
            })
            .collect()
    }
}

/// Build the finished field list for one data source element.
pub fn build_fields(datasource: &XmlNode, usage: &UsageMap) -> Vec<FieldRecord> {
    let tech_name = datasource.attr("name").unwrap_or_default();
    let catalog = FieldCatalog::collect(datasource);
    tracing::trace!(datasource = tech_name, fields = catalog.len(), "collected fields");
    catalog.finish(tech_name, usage)
}

/// Remove surrounding brackets from a technical name.
pub fn strip_brackets(name: &str) -> &str {
    name.trim_start_matches('[').trim_end_matches(']')
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn non_empty_child_text<'a>(node: &'a XmlNode, tag: &str) -> Option<&'a str> {
    node.child_text(tag)
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
