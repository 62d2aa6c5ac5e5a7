//! Shared helpers for part-level tests: parse generated XML into a small tree and query it
//! with slash-separated element paths.
#![allow(dead_code)]

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Install a test logger so dropped references show up with `RUST_LOG=debug`.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Default)]
pub struct Node {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
    pub text: String,
}

impl Node {
    fn from_start(e: &BytesStart<'_>) -> Self {
        let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
        let attrs = e
            .attributes()
            .flatten()
            .map(|attr| {
                (
                    String::from_utf8_lossy(attr.key.as_ref()).to_string(),
                    String::from_utf8_lossy(&attr.value).to_string(),
                )
            })
            .collect();
        Self {
            name,
            attrs,
            ..Self::default()
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First match of `path` below this node in document order.
    ///
    /// Steps are element names, optionally with a 1-based position among same-named
    /// siblings: `w:body/w:p[4]/w:r/w:br`.
    pub fn find(&self, path: &str) -> Option<&Node> {
        let steps: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        self.find_steps(&steps)
    }

    fn find_steps(&self, steps: &[&str]) -> Option<&Node> {
        let Some((step, rest)) = steps.split_first() else {
            return Some(self);
        };
        let (name, position) = match step.split_once('[') {
            Some((name, index)) => (name, index.trim_end_matches(']').parse::<usize>().ok()),
            None => (*step, None),
        };
        let mut candidates = self.children.iter().filter(|c| c.name == name);
        match position {
            Some(n) => candidates.nth(n.checked_sub(1)?)?.find_steps(rest),
            None => candidates.find_map(|c| c.find_steps(rest)),
        }
    }

    pub fn exists(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    /// Attribute of the first node matching `path`.
    pub fn attr_at(&self, path: &str, key: &str) -> Option<&str> {
        self.find(path)?.attr(key)
    }

    /// Every descendant named `name`, in document order.
    pub fn descendants(&self, name: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect(name, &mut found);
        found
    }

    fn collect<'a>(&'a self, name: &str, found: &mut Vec<&'a Node>) {
        for child in &self.children {
            if child.name == name {
                found.push(child);
            }
            child.collect(name, found);
        }
    }

    pub fn children_named(&self, name: &str) -> Vec<&Node> {
        self.children.iter().filter(|c| c.name == name).collect()
    }
}

/// Parse a part into its root element. Panics on malformed XML.
pub fn parse(xml: &str) -> Node {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Node> = vec![Node::default()];

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => stack.push(Node::from_start(e)),
            Ok(Event::Empty(ref e)) => {
                let node = Node::from_start(e);
                stack.last_mut().expect("open element").children.push(node);
            },
            Ok(Event::End(_)) => {
                let node = stack.pop().expect("open element");
                stack.last_mut().expect("parent element").children.push(node);
            },
            Ok(Event::Text(ref e)) => {
                let text = String::from_utf8_lossy(e).to_string();
                stack.last_mut().expect("open element").text.push_str(&text);
            },
            Ok(Event::GeneralRef(ref e)) => {
                // quick-xml >= 0.38 reports entity references separately from text.
                let resolved = match e.resolve_char_ref().expect("valid char ref") {
                    Some(ch) => ch.to_string(),
                    None => {
                        let name = e.decode().expect("utf-8 entity name");
                        quick_xml::escape::resolve_predefined_entity(&name)
                            .unwrap_or_else(|| panic!("unknown entity &{name};"))
                            .to_string()
                    },
                };
                stack.last_mut().expect("open element").text.push_str(&resolved);
            },
            Ok(Event::Eof) => break,
            Err(e) => panic!("malformed XML at {}: {}", reader.buffer_position(), e),
            _ => {},
        }
    }

    assert_eq!(stack.len(), 1, "unclosed elements");
    let mut document = stack.pop().expect("document node");
    assert_eq!(document.children.len(), 1, "expected a single root element");
    document.children.remove(0)
}
