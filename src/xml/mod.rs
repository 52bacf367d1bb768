//! XML document access.
//!
//! Workbook files are read once into an owned element tree; the catalog
//! engine then runs read-only queries (`find_all`, `child_text`, ...)
//! over it.
//!
//! ```text
//! bytes ──quick-xml events──▶ DocumentReader ──▶ XmlNode (root)
//! ```

mod node;
mod reader;

pub use node::{Descendants, XmlNode};
pub use reader::parse_document;
