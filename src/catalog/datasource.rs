//! Per-datasource extraction: parameters redirect, connections, custom SQL
//! and the field catalog.

use indexmap::IndexSet;

use super::fields::{build_fields, strip_brackets};
use super::model::{Connection, DataSource};
use super::usage::UsageMap;
use crate::options::{ExtractOptions, LegacyRelations};
use crate::xml::XmlNode;

/// Caption (and technical-name prefix) of the parameters pseudo data source.
pub const PARAMETERS: &str = "Parameters";

/// Connection class of the container connection, which is not a real source.
pub const FEDERATED: &str = "federated";

/// What a `datasource` element turned into.
#[derive(Clone, Debug, PartialEq)]
pub enum DataSourceOutcome {
    /// Parameter display names to append to the workbook's parameter list.
    Parameters(Vec<String>),
    /// A regular data source.
    DataSource(DataSource),
    /// Neither caption nor technical name; ignored.
    Unnamed,
}

/// Classify and extract one `datasource` element.
///
/// Empty data sources are returned as-is; the caller decides whether to
/// keep them.
pub fn extract_datasource(
    node: &XmlNode,
    usage: &UsageMap,
    options: &ExtractOptions,
) -> DataSourceOutcome {
    let tech_name = node.attr_non_empty("name");
    let Some(caption) = node.attr_non_empty("caption").or(tech_name) else {
        tracing::trace!("skipping datasource without caption or name");
        return DataSourceOutcome::Unnamed;
    };

    if is_parameters(caption, tech_name) {
        let names = parameter_names(node);
        tracing::debug!(parameters = names.len(), "redirected parameters datasource");
        return DataSourceOutcome::Parameters(names);
    }

    let mut datasource = DataSource::new(caption, tech_name.unwrap_or_default());
    datasource.connections = collect_connections(node);
    datasource.queries = collect_queries(node, options.legacy_relations);
    datasource.fields = build_fields(node, usage);

    tracing::debug!(
        datasource = %datasource.name,
        connections = datasource.connections.len(),
        queries = datasource.queries.len(),
        fields = datasource.fields.len(),
        "extracted datasource"
    );
    DataSourceOutcome::DataSource(datasource)
}

/// Whether a data source is the parameters container.
pub fn is_parameters(caption: &str, tech_name: Option<&str>) -> bool {
    caption == PARAMETERS || tech_name.is_some_and(|n| n.starts_with(PARAMETERS))
}

/// Display names of every parameter column, brackets stripped.
pub fn parameter_names(node: &XmlNode) -> Vec<String> {
    node.find_all("column")
        .filter_map(|column| {
            column
                .attr_non_empty("caption")
                .or_else(|| column.attr_non_empty("name"))
        })
        .map(|name| strip_brackets(name).to_string())
        .collect()
}

/// Every non-federated connection with a class.
pub fn collect_connections(node: &XmlNode) -> Vec<Connection> {
    node.find_all("connection")
        .filter_map(|conn| {
            let class = conn.attr_non_empty("class")?;
            if class == FEDERATED {
                return None;
            }
            Some(Connection {
                class: class.to_string(),
                server: conn.attr("server").map(str::to_string),
                dbname: conn.attr("dbname").map(str::to_string),
            })
        })
        .collect()
}

/// Distinct custom SQL texts from `type="text"` relation elements.
pub fn collect_queries(node: &XmlNode, legacy: LegacyRelations) -> Vec<String> {
    let mut queries: IndexSet<String> = IndexSet::new();

    for relation in node.descendants() {
        if relation.attr("type") != Some("text") || !relation.tag.contains("relation") {
            continue;
        }
        if !legacy.admits(&relation.tag) {
            tracing::trace!(tag = %relation.tag, "skipping legacy relation variant");
            continue;
        }
        let Some(sql) = relation.text().map(str::trim).filter(|t| !t.is_empty()) else {
            continue;
        };
        if !queries.contains(sql) {
            queries.insert(sql.to_string());
        }
    }

    queries.into_iter().collect()
}
