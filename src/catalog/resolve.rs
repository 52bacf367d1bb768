//! Resolve a cataloged field's worksheet usage.
//!
//! Worksheets sometimes reference a field bare (`[Sales]`) and sometimes
//! qualified by its data source (`[federated.0x1].[Sales]`). Lookup tries
//! both forms and merges what it finds.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use super::model::NOT_USED;
use super::usage::{Role, UsageMap};

/// Identity forms under which a field may appear in the usage map.
///
/// Always contains the raw technical name. When the data source has a
/// technical name and the field is not already qualified with it, the
/// qualified form `[<datasource>].<field>` is added.
pub fn candidate_ids(tech_name: &str, datasource_tech_name: &str) -> Vec<String> {
    let mut candidates = vec![tech_name.to_string()];
    if !datasource_tech_name.is_empty() {
        let prefix = format!("[{datasource_tech_name}]");
        if !tech_name.starts_with(&prefix) {
            candidates.push(format!("{prefix}.{tech_name}"));
        }
    }
    candidates
}

/// Union of worksheet roles across all candidate ids.
///
/// Candidates are compared as-is against the (already normalized) usage
/// map keys. Worksheets appear in first-found order.
pub fn resolve_usage(
    tech_name: &str,
    datasource_tech_name: &str,
    usage: &UsageMap,
) -> IndexMap<String, BTreeSet<Role>> {
    let mut merged: IndexMap<String, BTreeSet<Role>> = IndexMap::new();
    for candidate in candidate_ids(tech_name, datasource_tech_name) {
        let Some(sheets) = usage.get(&candidate) else {
            continue;
        };
        for (sheet, roles) in sheets {
            merged
                .entry(sheet.clone())
                .or_default()
                .extend(roles.iter().copied());
        }
    }
    merged
}

/// Render merged usage as `Sheet1 (Filter/Row), Sheet2 (Column)`.
///
/// Returns [`NOT_USED`] when no worksheet has any role.
pub fn render_usage(usage: &IndexMap<String, BTreeSet<Role>>) -> String {
    let parts: Vec<String> = usage
        .iter()
        .filter(|(_, roles)| !roles.is_empty())
        .map(|(sheet, roles)| {
            let roles: Vec<&str> = roles.iter().map(|r| r.as_str()).collect();
            format!("{sheet} ({})", roles.join("/"))
        })
        .collect();

    if parts.is_empty() {
        NOT_USED.to_string()
    } else {
        parts.join(", ")
    }
}

/// Resolve and render in one step.
pub fn usage_string(tech_name: &str, datasource_tech_name: &str, usage: &UsageMap) -> String {
    render_usage(&resolve_usage(tech_name, datasource_tech_name, usage))
}
