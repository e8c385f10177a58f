//! Scene-tree construction over quick-xml events.
//!
//! The converter wants a nested element tree it can recurse over, not an
//! event stream, so a frame stack folds Start/Empty/End events into owned
//! nodes. Text, comments, and declarations never materialize as nodes.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::ConvertError;

/// One element of the input document: tag name, attributes, and children
/// in document order. Read-only once built.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    attrs: Vec<(String, String)>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Parses a document and unwraps its root element: the returned nodes are
/// the root's children, so the `<svg>` wrapper itself never emits.
pub fn parse_scene(content: &str) -> Result<Vec<SceneNode>, ConvertError> {
    let mut reader = Reader::from_str(content);
    let mut buf = Vec::new();

    let mut stack: Vec<SceneNode> = Vec::new();
    let mut roots: Vec<SceneNode> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => stack.push(element(&e)),
            Ok(Event::Empty(e)) => {
                let node = element(&e);
                attach(&mut stack, &mut roots, node);
            }
            Ok(Event::End(_)) => {
                if let Some(node) = stack.pop() {
                    attach(&mut stack, &mut roots, node);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ConvertError::Xml(e)),
            // Text, comments, and processing instructions are skipped.
            Ok(_) => {}
        }
        buf.clear();
    }

    Ok(roots
        .into_iter()
        .next()
        .map(|root| root.children)
        .unwrap_or_default())
}

fn attach(stack: &mut [SceneNode], roots: &mut Vec<SceneNode>, node: SceneNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

fn element(e: &BytesStart) -> SceneNode {
    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
    let mut attrs = Vec::new();
    for attr in e.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        if let Ok(value) = String::from_utf8(attr.value.to_vec()) {
            attrs.push((key, value));
        }
    }
    SceneNode {
        name,
        attrs,
        children: Vec::new(),
    }
}
