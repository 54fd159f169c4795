//! Markup tree rendered by widgets.
//!
//! Widgets describe their structure as a small element/text tree, the same
//! shape a browser DOM takes. Tests and the web backend consume it:
//!
//! - [`Node::to_html`] serializes it (snapshots, server rendering)
//! - [`Element::target`] routes native control events back to the widget
//! - [`NodeRef`] hands the rendered root to code outside the widget
//!
//! # Examples
//!
//! ```
//! use segmenta_core::markup::{Element, Node};
//!
//! let node: Node = Element::new("label")
//!     .class("item")
//!     .class("item-selected")
//!     .child(Element::new("input").attr("type", "radio").flag("checked"))
//!     .child(Node::text("Daily"))
//!     .into();
//!
//! assert_eq!(
//!     node.to_html(),
//!     r#"<label class="item item-selected"><input type="radio" checked=""/>Daily</label>"#
//! );
//! assert_eq!(node.text_content(), "Daily");
//! ```

use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};

/// Elements that never carry children and serialize self-closed.
const VOID_ELEMENTS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

/// A node in the markup tree.
///
/// Serializes as a bare string (text) or a map (element), so fragments can
/// sit inside untagged option records in YAML and JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A run of text
    Text(String),
    /// An element with tag, classes, attributes and children
    Element(Element),
}

impl Node {
    /// Create a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Borrow the element, if this node is one.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(t) => out.push_str(t),
            Self::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Serialize to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(t) => out.push_str(&escape(t)),
            Self::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                if !el.classes.is_empty() {
                    out.push_str(" class=\"");
                    out.push_str(&escape(&el.classes.join(" ")));
                    out.push('"');
                }
                for (name, value) in &el.attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape(value));
                    out.push('"');
                }
                if el.is_void() {
                    out.push_str("/>");
                    return;
                }
                out.push('>');
                for child in &el.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
        }
    }

    /// Serialize to indented HTML, one element per line.
    #[must_use]
    pub fn to_pretty_html(&self) -> String {
        let mut out = String::new();
        self.write_pretty(&mut out, 0);
        out
    }

    fn write_pretty(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        match self {
            Self::Text(t) => {
                out.push_str(&indent);
                out.push_str(&escape(t));
                out.push('\n');
            }
            Self::Element(el) => {
                let shallow = Self::Element(Element {
                    children: Vec::new(),
                    ..el.clone()
                })
                .to_html();
                if el.is_void() || el.children.is_empty() {
                    out.push_str(&indent);
                    out.push_str(&shallow);
                    out.push('\n');
                    return;
                }
                // Opening tag is everything before the synthesized close tag.
                let open_len = shallow.len() - el.tag.len() - 3;
                out.push_str(&indent);
                out.push_str(&shallow[..open_len]);
                out.push('\n');
                for child in &el.children {
                    child.write_pretty(out, depth + 1);
                }
                out.push_str(&indent);
                out.push_str("</");
                out.push_str(&el.tag);
                out.push_str(">\n");
            }
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Element {
    /// Tag name
    pub tag: String,
    /// Class list in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Attributes in insertion order (boolean attributes have empty values)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
    /// Child nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    /// Routing index for events raised on this element; never serialized.
    #[serde(skip)]
    pub target: Option<usize>,
}

impl Element {
    /// Create an element with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Append a class. Empty names and duplicates are ignored.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        for name in class.split_whitespace() {
            if !self.has_class(name) {
                self.classes.push(name.to_string());
            }
        }
        self
    }

    /// Append a class when `on` is true.
    #[must_use]
    pub fn class_if(self, on: bool, class: impl Into<String>) -> Self {
        if on {
            self.class(class)
        } else {
            self
        }
    }

    /// Set an attribute, replacing an existing value.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set a boolean attribute (`checked`, `disabled`, ...).
    #[must_use]
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.attr(name, "")
    }

    /// Set a boolean attribute when `on` is true.
    #[must_use]
    pub fn flag_if(self, on: bool, name: impl Into<String>) -> Self {
        if on {
            self.flag(name)
        } else {
            self
        }
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several child nodes.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Set the routing index for events raised on this element.
    #[must_use]
    pub const fn target(mut self, target: usize) -> Self {
        self.target = Some(target);
        self
    }

    /// Set an attribute in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check for an attribute (boolean attributes included).
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    /// Check for a class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The `id` attribute.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared handle to the root node a widget last rendered.
///
/// Clones point at the same slot, so a caller keeps one clone and passes
/// another to the widget.
#[derive(Debug, Clone, Default)]
pub struct NodeRef(Arc<RwLock<Option<Node>>>);

impl NodeRef {
    /// Create an empty handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The node last published to this handle.
    #[must_use]
    pub fn get(&self) -> Option<Node> {
        self.0.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Whether a node has been published.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.read().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    /// Publish a node.
    pub fn set(&self, node: Node) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = Some(node);
    }

    /// Whether two handles share a slot.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_class_dedup_and_split() {
        let el = Element::new("div").class("a b").class("a").class("");
        assert_eq!(el.classes, vec!["a", "b"]);
    }

    #[test]
    fn test_element_attr_replaces() {
        let el = Element::new("div").attr("id", "x").attr("id", "y");
        assert_eq!(el.get_attr("id"), Some("y"));
        assert_eq!(el.attributes.len(), 1);
    }

    #[test]
    fn test_flag_if() {
        let el = Element::new("input").flag_if(true, "checked").flag_if(false, "disabled");
        assert!(el.has_attr("checked"));
        assert!(!el.has_attr("disabled"));
    }

    #[test]
    fn test_to_html_escapes() {
        let node: Node = Element::new("div")
            .attr("title", "a \"b\"")
            .child("<x> & y")
            .into();
        assert_eq!(
            node.to_html(),
            r#"<div title="a &quot;b&quot;">&lt;x&gt; &amp; y</div>"#
        );
    }

    #[test]
    fn test_empty_element_html() {
        let node: Node = Element::new("div").class("group").into();
        assert_eq!(node.to_html(), r#"<div class="group"></div>"#);
    }

    #[test]
    fn test_text_content_nested() {
        let node: Node = Element::new("div")
            .child(Element::new("span").child("Kan"))
            .child("ban")
            .into();
        assert_eq!(node.text_content(), "Kanban");
    }

    #[test]
    fn test_pretty_html() {
        let node: Node = Element::new("div")
            .class("root")
            .child(Element::new("input").flag("checked"))
            .child(Element::new("span").child("hi"))
            .into();
        assert_eq!(
            node.to_pretty_html(),
            "<div class=\"root\">\n  <input checked=\"\"/>\n  <span>\n    hi\n  </span>\n</div>\n"
        );
    }

    #[test]
    fn test_target_not_serialized() {
        let node: Node = Element::new("input").target(3).into();
        assert_eq!(node.to_html(), "<input/>");
        assert_eq!(node.as_element().and_then(|e| e.target), Some(3));
    }

    #[test]
    fn test_serde_shape() {
        let node: Node = Element::new("span")
            .class("icon")
            .child("★")
            .into();
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"tag":"span","classes":["icon"],"children":["★"]}"#);
        assert_eq!(serde_json::from_str::<Node>(&json).unwrap(), node);

        let bare: Node = serde_json::from_str(r#"{"tag":"i"}"#).unwrap();
        assert_eq!(bare, Node::Element(Element::new("i")));
        assert_eq!(serde_json::from_str::<Node>(r#""text""#).unwrap(), Node::text("text"));
    }

    #[test]
    fn test_node_ref_survives_poisoned_lock() {
        let handle = NodeRef::new();
        let inner = handle.clone();
        let _ = std::thread::spawn(move || {
            let _guard = inner.0.write().unwrap();
            panic!("poison the slot");
        })
        .join();
        assert!(handle.0.is_poisoned());

        handle.set(Node::text("after"));
        assert!(handle.is_set());
        assert_eq!(handle.get(), Some(Node::text("after")));
    }

    #[test]
    fn test_node_ref_shared_slot() {
        let handle = NodeRef::new();
        let clone = handle.clone();
        assert!(!handle.is_set());
        clone.set(Node::text("root"));
        assert!(handle.is_set());
        assert_eq!(handle.get(), Some(Node::text("root")));
        assert!(handle.ptr_eq(&clone));
        assert!(!handle.ptr_eq(&NodeRef::new()));
    }
}
