//! Worksheet usage map.
//!
//! One pass over every worksheet records, per canonical field id, which
//! worksheets place the field on which shelf.
//!
//! ```text
//! UsageMap
//! └── [Sales]
//!     ├── "Sheet1" → {Filter, Row}
//!     └── "Sheet2" → {Column}
//! ```

use std::collections::BTreeSet;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use super::normalize::CanonicalFieldId;
use crate::xml::XmlNode;

/// The shelf a field occupies on a worksheet.
///
/// Variants are declared alphabetically so that ordered sets of roles
/// render in alphabetical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Column,
    Filter,
    Row,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Column => "Column",
            Role::Filter => "Filter",
            Role::Row => "Row",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roles per worksheet, worksheets in first-registration order.
pub type WorksheetRoles = IndexMap<String, BTreeSet<Role>>;

/// Canonical field id → worksheet → roles.
#[derive(Clone, Debug, Default)]
pub struct UsageMap {
    entries: FxHashMap<CanonicalFieldId, WorksheetRoles>,
}

impl UsageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `field` is used as `role` on `worksheet`.
    ///
    /// Registering the same triple twice is a no-op.
    pub fn register(&mut self, field: CanonicalFieldId, worksheet: &str, role: Role) {
        let sheets = self.entries.entry(field).or_default();
        match sheets.get_mut(worksheet) {
            Some(roles) => {
                roles.insert(role);
            }
            None => {
                sheets.insert(worksheet.to_string(), BTreeSet::from([role]));
            }
        }
    }

    /// Usage recorded under an exact canonical id string.
    pub fn get(&self, field: &str) -> Option<&WorksheetRoles> {
        self.entries.get(field)
    }

    /// Roles of `field` on one worksheet.
    pub fn roles(&self, field: &str, worksheet: &str) -> Option<&BTreeSet<Role>> {
        self.get(field)?.get(worksheet)
    }

    /// Number of distinct fields with any usage.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scan every named worksheet under `root` and collect field usage.
///
/// Unnamed worksheets are ignored. Missing or empty shelves contribute
/// nothing; this never fails.
pub fn build_usage_map(root: &XmlNode) -> UsageMap {
    let mut usage = UsageMap::new();

    for worksheet in root.find_all("worksheet") {
        let Some(name) = worksheet.attr_non_empty("name") else {
            tracing::trace!("skipping worksheet without a name");
            continue;
        };
        scan_worksheet(worksheet, name, &mut usage);
    }

    tracing::debug!(fields = usage.len(), "built usage map");
    usage
}

fn scan_worksheet(worksheet: &XmlNode, name: &str, usage: &mut UsageMap) {
    let shelves = [("rows", Role::Row), ("cols", Role::Column)];
    for (tag, role) in shelves {
        let Some(text) = worksheet.find(tag).and_then(XmlNode::text) else {
            continue;
        };
        for reference in shelf_references(text) {
            usage.register(CanonicalFieldId::normalize(reference), name, role);
        }
    }

    for filter in worksheet.find_all("filter") {
        if let Some(column) = filter.attr_non_empty("column") {
            usage.register(CanonicalFieldId::normalize(column), name, Role::Filter);
        }
    }

    for slices in worksheet.find_all("slices") {
        for column in slices.children_named("column") {
            if let Some(text) = column.text().map(str::trim).filter(|t| !t.is_empty()) {
                usage.register(CanonicalFieldId::normalize(text), name, Role::Filter);
            }
        }
    }
}

/// Split shelf text on `/` into bare field references.
///
/// `(sum(Sales))/[Region]` yields `Sales` and `[Region]`.
pub fn shelf_references(text: &str) -> impl Iterator<Item = &str> {
    text.split('/').filter_map(|token| {
        let reference = strip_grouping(token);
        if reference.is_empty() {
            tracing::trace!(token, "skipping empty shelf token");
            None
        } else {
            Some(reference)
        }
    })
}

/// Peel whitespace, grouping parentheses and aggregation calls.
fn strip_grouping(token: &str) -> &str {
    let mut current = token.trim();
    loop {
        let mut next = current.trim_matches(&['(', ')'][..]).trim();
        // `sum(Sales` after paren trimming: an opening call outside brackets
        if let Some(open) = next.find('(') {
            if !next[..open].contains('[') {
                next = next[open + 1..].trim();
            }
        }
        if next == current {
            return current;
        }
        current = next;
    }
}
