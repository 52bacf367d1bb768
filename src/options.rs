//! Extraction options

/// Which legacy-encapsulated relation variants contribute custom SQL.
///
/// Newer workbooks store the same relation twice, once under a tag
/// containing `ObjectModelEncapsulateLegacy.true` and once under
/// `ObjectModelEncapsulateLegacy.false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegacyRelations {
    /// Only the `.true` variant.
    #[default]
    TrueOnly,
    /// Only the `.false` variant.
    FalseOnly,
    /// Both variants (duplicates still collapse by text).
    Both,
}

impl LegacyRelations {
    /// Whether a relation tag passes the legacy-encapsulation gate.
    ///
    /// Tags without the marker always pass.
    pub fn admits(self, tag: &str) -> bool {
        if !tag.contains(LEGACY_MARKER) {
            return true;
        }
        match self {
            LegacyRelations::TrueOnly => tag.contains(".true"),
            LegacyRelations::FalseOnly => !tag.contains(".true"),
            LegacyRelations::Both => true,
        }
    }
}

/// Marker in tag names of legacy-encapsulated relations.
pub const LEGACY_MARKER: &str = "ObjectModelEncapsulateLegacy";

/// Options controlling workbook extraction
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Legacy relation variants admitted as queries
    pub legacy_relations: LegacyRelations,
    /// Keep data sources with no connections, queries or fields
    pub keep_empty_datasources: bool,
}

impl ExtractOptions {
    /// Builder: choose legacy relation variants.
    pub fn with_legacy_relations(mut self, legacy_relations: LegacyRelations) -> Self {
        self.legacy_relations = legacy_relations;
        self
    }

    /// Builder: keep empty data sources.
    pub fn keep_empty_datasources(mut self, keep: bool) -> Self {
        self.keep_empty_datasources = keep;
        self
    }
}
