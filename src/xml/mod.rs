//! Minimal XML tree parsing
//!
//! Builds an owned element tree from a quick-xml event stream. Text
//! content, comments, and processing instructions are not retained;
//! validation only looks at element names and attributes.

use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};

/// Error while parsing a document into an element tree
#[derive(Debug, thiserror::Error)]
pub enum XmlParseError {
    #[error("XML parse error at position {position}: {source}")]
    Syntax {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },
    #[error("XML parse error: document contains no root element")]
    NoRootElement,
    #[error("XML parse error at position {position}: content outside the document root")]
    OutsideRoot { position: u64 },
    #[error("XML parse error: unclosed element <{name}>")]
    UnclosedElement { name: String },
}

/// A parsed XML element with its attributes (in document order) and
/// child elements.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Local element name, without any namespace prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute value by name
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Direct child elements, in document order
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// First direct child with the given name
    pub fn find_child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    /// First descendant with the given name, depth-first in document
    /// order. The element itself is not considered.
    pub fn find_descendant(&self, name: &str) -> Option<&XmlElement> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(name) {
                return Some(found);
            }
        }
        None
    }

    /// Serialize the element subtree for diagnostics
    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        self.write_xml(&mut out);
        out
    }

    fn write_xml(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape(value.as_str()));
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str(" />");
        } else {
            out.push('>');
            for child in &self.children {
                child.write_xml(out);
            }
            out.push_str("</");
            out.push_str(&self.name);
            out.push('>');
        }
    }
}

/// Parse a complete XML document into its root element.
///
/// Requires exactly one root element; mismatched or unclosed tags and
/// non-whitespace content outside the root are rejected.
pub fn parse_document(content: &str) -> Result<XmlElement, XmlParseError> {
    let mut reader = Reader::from_str(content);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(XmlParseError::OutsideRoot {
                        position: reader.buffer_position() as u64,
                    });
                }
                stack.push(element_from_start(e));
            }
            Ok(Event::Empty(ref e)) => {
                let element = element_from_start(e);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None if root.is_none() => root = Some(element),
                    None => {
                        return Err(XmlParseError::OutsideRoot {
                            position: reader.buffer_position() as u64,
                        });
                    }
                }
            }
            Ok(Event::End(_)) => {
                // Name matching is enforced by the reader config
                if let Some(element) = stack.pop() {
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => root = Some(element),
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if stack.is_empty() && !e.iter().all(|b| b.is_ascii_whitespace()) {
                    return Err(XmlParseError::OutsideRoot {
                        position: reader.buffer_position() as u64,
                    });
                }
            }
            Ok(Event::CData(_)) => {
                if stack.is_empty() {
                    return Err(XmlParseError::OutsideRoot {
                        position: reader.buffer_position() as u64,
                    });
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(XmlParseError::Syntax {
                    position: reader.error_position() as u64,
                    source: e,
                });
            }
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlParseError::UnclosedElement {
            name: open.name.clone(),
        });
    }

    root.ok_or(XmlParseError::NoRootElement)
}

fn element_from_start(e: &BytesStart<'_>) -> XmlElement {
    let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();

    let mut attributes = Vec::new();
    for attr in e.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = String::from_utf8_lossy(&attr.value).to_string();
        attributes.push((key, value));
    }

    XmlElement {
        name,
        attributes,
        children: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_elements() {
        let document =
            parse_document(r#"<a x="1"><b><c y="2" /></b><b /></a>"#).unwrap();

        assert_eq!(document.name(), "a");
        assert_eq!(document.attr("x"), Some("1"));
        assert_eq!(document.children().len(), 2);

        let first = &document.children()[0];
        assert_eq!(first.name(), "b");
        assert_eq!(first.children()[0].attr("y"), Some("2"));
    }

    #[test]
    fn test_find_child_is_direct_only() {
        let document = parse_document("<a><b><c /></b></a>").unwrap();

        assert!(document.find_child("b").is_some());
        assert!(document.find_child("c").is_none());
        assert!(document.find_descendant("c").is_some());
    }

    #[test]
    fn test_find_descendant_document_order() {
        let document =
            parse_document(r#"<a><b><hit n="1" /></b><hit n="2" /></a>"#).unwrap();

        let found = document.find_descendant("hit").unwrap();
        assert_eq!(found.attr("n"), Some("1"));
    }

    #[test]
    fn test_mismatched_end_tag_is_rejected() {
        assert!(parse_document("<a><b></a>").is_err());
    }

    #[test]
    fn test_unclosed_element_is_rejected() {
        assert!(parse_document("<a><b>").is_err());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(
            parse_document(""),
            Err(XmlParseError::NoRootElement)
        ));
    }

    #[test]
    fn test_second_root_is_rejected() {
        assert!(matches!(
            parse_document("<a /><b />"),
            Err(XmlParseError::OutsideRoot { .. })
        ));
    }

    #[test]
    fn test_text_content_is_skipped() {
        let document = parse_document("<a>hello<b>world</b></a>").unwrap();
        assert_eq!(document.children().len(), 1);
    }

    #[test]
    fn test_xml_declaration_is_accepted() {
        let document =
            parse_document("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<a />").unwrap();
        assert_eq!(document.name(), "a");
    }

    #[test]
    fn test_to_xml_string() {
        let document = parse_document(r#"<a x="1"><b /></a>"#).unwrap();
        assert_eq!(document.to_xml_string(), r#"<a x="1"><b /></a>"#);
    }
}
