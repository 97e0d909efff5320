//! Event-driven tree builder over quick-xml

use quick_xml::Reader;
use quick_xml::escape::resolve_xml_entity;
use quick_xml::events::{BytesStart, Event};
use std::io::BufRead;
use tracing::trace;
use xmlmap_ir::Node;

use crate::{Error, Result};

/// Parse XML text into a node tree rooted at the document element
pub fn parse_str(xml: &str) -> Result<Node> {
    let mut reader = Reader::from_str(xml);
    let mut builder = TreeBuilder::default();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| Error::Xml(format!("{e} at position {}", reader.buffer_position())))?;
        if builder.handle(event)? {
            break;
        }
    }

    builder.finish()
}

/// Parse XML from a buffered reader
pub fn parse_reader<R: BufRead>(input: R) -> Result<Node> {
    let mut reader = Reader::from_reader(input);
    let mut builder = TreeBuilder::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| Error::Xml(format!("{e} at position {}", reader.buffer_position())))?;
        if builder.handle(event)? {
            break;
        }
    }

    builder.finish()
}

/// Open elements are kept on a stack; closed ones attach to their parent
#[derive(Debug, Default)]
struct TreeBuilder {
    stack: Vec<Node>,
    root: Option<Node>,
}

impl TreeBuilder {
    /// Feed one event; returns true at end of input
    fn handle(&mut self, event: Event<'_>) -> Result<bool> {
        match event {
            Event::Start(start) => {
                let name = local_name(&start)?;
                trace!(element = %name, depth = self.stack.len(), "Open element");
                self.stack.push(Node::new(name));
            }
            Event::Empty(start) => {
                let node = Node::new(local_name(&start)?);
                self.attach(node)?;
            }
            Event::End(end) => {
                let found = std::str::from_utf8(end.local_name().as_ref())?.to_string();
                let Some(mut node) = self.stack.pop() else {
                    return Err(Error::Xml(format!("unexpected </{found}>")));
                };
                if node.name != found {
                    return Err(Error::Unbalanced {
                        expected: node.name,
                        found: format!("</{found}>"),
                    });
                }
                if node.text.trim().is_empty() {
                    node.text.clear();
                }
                self.attach(node)?;
            }
            Event::Text(text) => {
                let decoded = text.decode().map_err(|e| Error::Xml(e.to_string()))?;
                self.push_text(&decoded);
            }
            Event::CData(cdata) => {
                let text = std::str::from_utf8(cdata.as_ref())?;
                self.push_text(text);
            }
            Event::GeneralRef(reference) => {
                let raw = reference.decode().map_err(|e| Error::Xml(e.to_string()))?;
                let resolved = resolve_reference(&raw)?;
                self.push_text(&resolved);
            }
            Event::Eof => return Ok(true),
            // comments, declarations, doctypes, processing instructions
            _ => {}
        }

        Ok(false)
    }

    fn push_text(&mut self, text: &str) {
        // text outside the document element is ignored
        if let Some(current) = self.stack.last_mut() {
            current.push_text(text);
        }
    }

    fn attach(&mut self, node: Node) -> Result<()> {
        if let Some(parent) = self.stack.last_mut() {
            parent.add_child(node);
            return Ok(());
        }

        if self.root.is_some() {
            return Err(Error::Xml(format!(
                "second root element <{}>",
                node.name
            )));
        }
        self.root = Some(node);
        Ok(())
    }

    fn finish(self) -> Result<Node> {
        if let Some(open) = self.stack.last() {
            return Err(Error::Unbalanced {
                expected: open.name.clone(),
                found: "end of input".to_string(),
            });
        }
        self.root.ok_or(Error::Empty)
    }
}

fn local_name(start: &BytesStart<'_>) -> Result<String> {
    Ok(std::str::from_utf8(start.local_name().as_ref())?.to_string())
}

/// Resolve `&name;` and `&#NN;` references
fn resolve_reference(raw: &str) -> Result<String> {
    if let Some(resolved) = resolve_xml_entity(raw) {
        return Ok(resolved.to_string());
    }

    if let Some(rest) = raw.strip_prefix('#') {
        let code = if let Some(hex) = rest.strip_prefix('x').or_else(|| rest.strip_prefix('X')) {
            u32::from_str_radix(hex, 16)
        } else {
            rest.parse::<u32>()
        }
        .map_err(|_| Error::Xml(format!("invalid character reference &{raw};")))?;

        return char::from_u32(code)
            .map(String::from)
            .ok_or_else(|| Error::Xml(format!("invalid code point in &{raw};")));
    }

    Err(Error::Xml(format!("unknown entity &{raw};")))
}
