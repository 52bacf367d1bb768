//! Canonical field identities.
//!
//! Worksheets refer to fields in decorated forms such as
//! `[federated.0x1].[sum:Sales:qk]`; data sources declare them bare, as
//! `[Sales]`. Normalizing both sides to a [`CanonicalFieldId`] gives the
//! join key between worksheet usage and the field catalog.

use smol_str::SmolStr;

/// Boundary between two bracket groups of a qualified reference.
const SEGMENT_DELIMITER: &str = "].[";

/// A field reference with derivation and type tags removed.
///
/// Each segment is a single bracketed bare name; segments are joined
/// with `.`, e.g. `[Datasource].[Field]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalFieldId(SmolStr);

impl CanonicalFieldId {
    /// Normalize a raw reference.
    pub fn normalize(raw: &str) -> Self {
        Self(SmolStr::new(normalize(raw)))
    }

    /// Wrap a string that is already in canonical bracketed form.
    ///
    /// No normalization is applied; used for catalog-side technical
    /// names, which are compared as written.
    pub fn from_canonical(id: impl AsRef<str>) -> Self {
        Self(SmolStr::new(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CanonicalFieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for CanonicalFieldId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Reduce a field reference to its canonical string form.
///
/// - `[none:Sales:nk]` → `[Sales]`
/// - `[Datasource].[sum:Profit:qk]` → `[Datasource].[Profit]`
/// - `Region` → `[Region]`
///
/// Empty input is returned unchanged. The transform is idempotent for
/// well-formed references, where `]` only closes a segment; a stray `]`
/// inside a segment (`[a:x]:b].[q]`) can take two passes to settle.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    raw.split(SEGMENT_DELIMITER)
        .map(|segment| format!("[{}]", bare_name(segment)))
        .collect::<Vec<_>>()
        .join(".")
}

/// Strip one bracket from each end, then drop `derivation:` and `:type` tags.
fn bare_name(segment: &str) -> &str {
    let segment = segment.strip_prefix('[').unwrap_or(segment);
    let segment = segment.strip_suffix(']').unwrap_or(segment);

    if segment.contains(':') {
        // derivation:name:typecode; keep the name
        segment.split(':').nth(1).unwrap_or(segment)
    } else {
        segment
    }
}
