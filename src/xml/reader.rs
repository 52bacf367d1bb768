//! Streaming quick-xml reader that builds an owned [`XmlNode`] tree.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::XmlNode;
use crate::WorkbookError;

/// Parse a complete XML document into its root element.
///
/// Any well-formedness problem is fatal: callers get no partial tree.
pub fn parse_document(input: &[u8]) -> Result<XmlNode, WorkbookError> {
    DocumentReader::new().read(input)
}

/// Builds the tree from start/end events using an explicit element stack.
struct DocumentReader {
    /// Open elements, innermost last.
    stack: Vec<XmlNode>,
    /// The closed root element, once seen.
    root: Option<XmlNode>,
}

impl DocumentReader {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            root: None,
        }
    }

    fn read(mut self, input: &[u8]) -> Result<XmlNode, WorkbookError> {
        // Text is kept verbatim; callers trim where whitespace is insignificant.
        let mut reader = Reader::from_reader(input);

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let node = start_element(e)?;
                    self.stack.push(node);
                }
                Ok(Event::Empty(ref e)) => {
                    // Self-closing element - handle as start + end
                    let node = start_element(e)?;
                    self.close(node)?;
                }
                Ok(Event::End(_)) => {
                    let node = self
                        .stack
                        .pop()
                        .ok_or_else(|| WorkbookError::xml("Unexpected end tag"))?;
                    self.close(node)?;
                }
                Ok(Event::Text(e)) => {
                    let text = e.unescape().map_err(|e| {
                        WorkbookError::xml(format!(
                            "Text error at position {}: {e}",
                            reader.buffer_position()
                        ))
                    })?;
                    self.push_text(&text);
                }
                Ok(Event::CData(e)) => {
                    let text = String::from_utf8(e.into_inner().into_owned())
                        .map_err(|e| WorkbookError::xml(format!("Invalid UTF-8 in CDATA: {e}")))?;
                    self.push_text(&text);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(WorkbookError::xml(format!(
                        "XML parse error at position {}: {e}",
                        reader.error_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = self.stack.last() {
            return Err(WorkbookError::xml(format!(
                "Unclosed element <{}> at end of input",
                open.tag
            )));
        }

        self.root
            .ok_or_else(|| WorkbookError::missing_element("document root"))
    }

    /// Attach a finished element to its parent, or make it the root.
    fn close(&mut self, node: XmlNode) -> Result<(), WorkbookError> {
        match self.stack.last_mut() {
            Some(parent) => {
                parent.children.push(node);
                Ok(())
            }
            None if self.root.is_none() => {
                self.root = Some(node);
                Ok(())
            }
            None => Err(WorkbookError::xml(format!(
                "Multiple root elements (second is <{}>)",
                node.tag
            ))),
        }
    }

    /// Record text on the innermost open element.
    ///
    /// Only text before the first child element is kept; trailing text
    /// between children is not part of any element's content.
    fn push_text(&mut self, text: &str) {
        let Some(current) = self.stack.last_mut() else {
            return;
        };
        if !current.children.is_empty() {
            return;
        }
        match current.text {
            Some(ref mut existing) => existing.push_str(text),
            None => current.text = Some(text.to_string()),
        }
    }
}

fn start_element(e: &BytesStart<'_>) -> Result<XmlNode, WorkbookError> {
    let name_bytes = e.name();
    let tag_name = std::str::from_utf8(name_bytes.as_ref())
        .map_err(|e| WorkbookError::xml(format!("Invalid tag name: {e}")))?;

    let mut node = XmlNode::new(tag_name);
    for attr_result in e.attributes() {
        let attr =
            attr_result.map_err(|e| WorkbookError::xml(format!("Attribute error: {e}")))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| WorkbookError::xml(format!("Attribute key error: {e}")))?;
        let value = attr
            .unescape_value()
            .map_err(|e| WorkbookError::xml(format!("Attribute value error: {e}")))?;
        node.attributes.push((key.to_string(), value.into_owned()));
    }
    Ok(node)
}
