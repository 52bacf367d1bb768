//! Whole-document extraction.
//!
//! [`load_workbook`] and [`parse_workbook`] are the only places that fail:
//! a document that cannot be read or parsed yields an error and no
//! partial result. Inside a parsed document every irregularity is
//! absorbed by the catalog engine.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::WorkbookError;
use crate::catalog::{DataSourceOutcome, Workbook, build_usage_map, extract_datasource};
use crate::options::ExtractOptions;
use crate::source;
use crate::xml::{XmlNode, parse_document};

/// Extract the workbook model from a parsed document tree.
pub fn extract(root: &XmlNode, options: &ExtractOptions) -> Workbook {
    let usage = build_usage_map(root);

    let mut workbook = Workbook {
        worksheets: element_names(root, "worksheet"),
        dashboards: element_names(root, "dashboard"),
        ..Workbook::default()
    };

    for node in root.find_all("datasource") {
        match extract_datasource(node, &usage, options) {
            DataSourceOutcome::Parameters(names) => workbook.parameters.extend(names),
            DataSourceOutcome::DataSource(ds) => {
                if ds.is_empty() && !options.keep_empty_datasources {
                    tracing::debug!(datasource = %ds.name, "dropping empty datasource");
                    continue;
                }
                workbook.datasources.push(ds);
            }
            DataSourceOutcome::Unnamed => {}
        }
    }

    tracing::debug!(
        datasources = workbook.datasources.len(),
        worksheets = workbook.worksheets.len(),
        dashboards = workbook.dashboards.len(),
        parameters = workbook.parameters.len(),
        "extracted workbook"
    );
    workbook
}

/// Parse workbook XML bytes and extract.
pub fn parse_workbook(input: &[u8], options: &ExtractOptions) -> Result<Workbook, WorkbookError> {
    let root = parse_document(input)?;
    Ok(extract(&root, options))
}

/// Load a `.twb` or `.twbx` file and extract.
pub fn load_workbook(path: &Path, options: &ExtractOptions) -> Result<Workbook, WorkbookError> {
    let xml = source::read_workbook_xml(path)?;
    let root = parse_document(&xml).map_err(|e| e.with_path(path))?;
    Ok(extract(&root, options))
}

/// Load many workbooks in parallel.
///
/// Documents share nothing, so each is extracted independently. Results
/// keep the input order and are paired with their path.
pub fn load_workbooks<P>(
    paths: &[P],
    options: &ExtractOptions,
) -> Vec<(PathBuf, Result<Workbook, WorkbookError>)>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            let result = load_workbook(path, options);
            if let Err(ref e) = result {
                tracing::warn!(path = %path.display(), error = %e, "failed to extract workbook");
            }
            (path.to_path_buf(), result)
        })
        .collect()
}

/// `name` attributes of every `tag` element, in document order.
fn element_names(root: &XmlNode, tag: &str) -> Vec<String> {
    root.find_all(tag)
        .filter_map(|node| node.attr_non_empty("name"))
        .map(str::to_string)
        .collect()
}
