//! Catalog engine tests
//!
//! Tests for:
//! - Reference normalization
//! - Usage map construction
//! - Field catalog merging
//! - End-to-end workbook extraction

mod tests_usage_map;
