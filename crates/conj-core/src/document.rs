//! Element tree of the template and verb list documents.
//!
//! The dictionary builder only needs named elements, their attributes,
//! their character data and the order of their children, so that is all
//! [`Element`] keeps. Documents are read with `quick-xml`; byte input is
//! first decoded with `encoding_rs` from its byte-order mark or its XML
//! declaration, defaulting to UTF-8.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order.
    pub children: Vec<Element>,
    /// Direct character data, concatenated.
    pub text: String,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text.push_str(&text.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// First child element called `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Child elements called `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.child(name).is_some()
    }

    /// Character data with surrounding whitespace removed.
    pub fn text(&self) -> &str {
        self.text.trim()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("document has no root element")]
    NoRoot,

    #[error("document is not valid {0}")]
    Encoding(&'static str),

    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
}

/// Decode a raw data file. A byte-order mark wins over the encoding named
/// in the XML declaration.
pub fn decode_document(bytes: &[u8]) -> Result<Cow<'_, str>, DocumentError> {
    let (encoding, bom_len) =
        Encoding::for_bom(bytes).unwrap_or_else(|| (declared_encoding(bytes).unwrap_or(UTF_8), 0));
    let (text, malformed) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
    if malformed {
        return Err(DocumentError::Encoding(encoding.name()));
    }
    Ok(text)
}

fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();
    match reader.read_event_into(&mut buf) {
        Ok(Event::Decl(decl)) => {
            let label = decl.encoding()?.ok()?;
            Encoding::for_label(&label).map(Encoding::output_encoding)
        }
        _ => None,
    }
}

pub fn parse_document_bytes(bytes: &[u8]) -> Result<Element, DocumentError> {
    parse_document(&decode_document(bytes)?)
}

pub fn parse_document(input: &str) -> Result<Element, DocumentError> {
    let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
    let mut reader = Reader::from_str(input);
    reader.config_mut().check_end_names = false;

    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let start = position(&reader);
        let event = reader
            .read_event()
            .map_err(|e| syntax_error(input, start, e))?;
        match event {
            Event::Start(tag) | Event::Empty(tag) if root.is_some() => {
                let name = String::from_utf8_lossy(tag.name().as_ref()).into_owned();
                return Err(syntax_error(
                    input,
                    start,
                    format!("content after the root element: <{name}>"),
                ));
            }
            Event::Start(tag) => {
                open.push(element_from_tag(&tag).map_err(|e| syntax_error(input, start, e))?);
            }
            Event::Empty(tag) => {
                let element = element_from_tag(&tag).map_err(|e| syntax_error(input, start, e))?;
                attach(element, &mut open, &mut root);
            }
            Event::End(tag) => {
                let name = String::from_utf8_lossy(tag.name().as_ref()).into_owned();
                match open.pop() {
                    Some(element) if element.name == name => {
                        attach(element, &mut open, &mut root)
                    }
                    Some(element) => {
                        return Err(syntax_error(
                            input,
                            start,
                            format!(
                                "mismatched closing tag: expected </{}>, got </{name}>",
                                element.name
                            ),
                        ))
                    }
                    None => {
                        return Err(syntax_error(
                            input,
                            start,
                            format!("unexpected closing tag </{name}>"),
                        ))
                    }
                }
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| syntax_error(input, start, e))?;
                match open.last_mut() {
                    Some(parent) => parent.text.push_str(&text),
                    None if text.trim().is_empty() => {}
                    None => {
                        return Err(syntax_error(
                            input,
                            start,
                            "character data outside the root element",
                        ))
                    }
                }
            }
            Event::CData(data) => match open.last_mut() {
                Some(parent) => parent.text.push_str(&String::from_utf8_lossy(&data)),
                None => {
                    return Err(syntax_error(
                        input,
                        start,
                        "CDATA outside the root element",
                    ))
                }
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(element) = open.first() {
        return Err(syntax_error(
            input,
            input.len(),
            format!("unclosed element <{}>", element.name),
        ));
    }
    root.ok_or(DocumentError::NoRoot)
}

fn element_from_tag(tag: &BytesStart<'_>) -> Result<Element, quick_xml::Error> {
    let mut element = Element::new(String::from_utf8_lossy(tag.name().as_ref()));
    for attribute in tag.attributes() {
        let attribute = attribute?;
        let value = attribute.unescape_value()?;
        element.attributes.push((
            String::from_utf8_lossy(attribute.key.as_ref()).into_owned(),
            value.into_owned(),
        ));
    }
    Ok(element)
}

fn attach(element: Element, open: &mut [Element], root: &mut Option<Element>) {
    match open.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn position(reader: &Reader<&[u8]>) -> usize {
    usize::try_from(reader.buffer_position()).unwrap_or(usize::MAX)
}

fn syntax_error(input: &str, offset: usize, message: impl std::fmt::Display) -> DocumentError {
    let end = offset.min(input.len());
    let line = input.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1;
    DocumentError::Syntax {
        line,
        message: message.to_string(),
    }
}
