//! Option values, descriptors and normalization.
//!
//! Callers hand the control a heterogeneous list: bare strings, bare numbers,
//! empty entries and descriptor records. [`normalize_options`] turns that into
//! one [`SegmentedOption`] per entry, in order, never dropping anything.

use segmenta_core::markup::{Element, Node};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of an option. Matching is strict: text `"1"` never equals number `1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SegmentedValue {
    /// Numeric value
    Number(f64),
    /// Text value
    Text(String),
}

impl SegmentedValue {
    /// The empty text value used for null/empty entries.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Text(String::new())
    }

    /// Borrow the text, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// The number, if this is a numeric value.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl Default for SegmentedValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for SegmentedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            // Integral numbers print without a fractional part.
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for SegmentedValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for SegmentedValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for SegmentedValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for SegmentedValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for SegmentedValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for SegmentedValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

/// Display content of an option: plain text or a markup fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SegmentedLabel {
    /// Plain text
    Text(String),
    /// Rich markup
    Markup(Node),
}

impl SegmentedLabel {
    /// The text if this label is plain text.
    #[must_use]
    pub fn plain_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Markup(_) => None,
        }
    }

    /// All text inside the label.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Markup(node) => node.text_content(),
        }
    }

    /// Whether the label renders nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Markup(_) => false,
        }
    }

    /// The label as a markup node.
    #[must_use]
    pub fn to_node(&self) -> Node {
        match self {
            Self::Text(s) => Node::text(s.clone()),
            Self::Markup(node) => node.clone(),
        }
    }
}

impl From<&str> for SegmentedLabel {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for SegmentedLabel {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Node> for SegmentedLabel {
    fn from(node: Node) -> Self {
        Self::Markup(node)
    }
}

impl From<Element> for SegmentedLabel {
    fn from(el: Element) -> Self {
        Self::Markup(Node::Element(el))
    }
}

/// Descriptor record for one option, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionDescriptor {
    /// Option identity
    #[serde(default)]
    pub value: SegmentedValue,
    /// Display content; the value's text when omitted
    #[serde(default)]
    pub label: Option<SegmentedLabel>,
    /// Whether the option rejects interaction
    #[serde(default)]
    pub disabled: bool,
    /// Decorative icon markup
    #[serde(default)]
    pub icon: Option<Node>,
    /// Tooltip text
    #[serde(default)]
    pub title: Option<String>,
    /// Extra class on the rendered item
    #[serde(default)]
    pub class_name: Option<String>,
}

impl OptionDescriptor {
    /// Create a descriptor with the given value.
    #[must_use]
    pub fn new(value: impl Into<SegmentedValue>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Set the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<SegmentedLabel>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the option disabled.
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the icon.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<Node>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the tooltip title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set an extra item class.
    #[must_use]
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }
}

/// One entry of the caller's option list before normalization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawOption {
    /// Null entry
    #[default]
    Empty,
    /// Bare number
    Number(f64),
    /// Bare string
    Text(String),
    /// Descriptor record
    Descriptor(OptionDescriptor),
}

impl From<&str> for RawOption {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawOption {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for RawOption {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for RawOption {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<OptionDescriptor> for RawOption {
    fn from(d: OptionDescriptor) -> Self {
        Self::Descriptor(d)
    }
}

impl<T: Into<Self>> From<Option<T>> for RawOption {
    fn from(entry: Option<T>) -> Self {
        entry.map_or(Self::Empty, Into::into)
    }
}

/// A normalized option: every field resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedOption {
    /// Option identity
    pub value: SegmentedValue,
    /// Display content
    pub label: SegmentedLabel,
    /// Whether the option rejects interaction
    pub disabled: bool,
    /// Decorative icon markup
    pub icon: Option<Node>,
    /// Tooltip text
    pub title: Option<String>,
    /// Extra class on the rendered item
    pub class_name: Option<String>,
}

impl SegmentedOption {
    fn primitive(value: SegmentedValue) -> Self {
        let label = SegmentedLabel::Text(value.to_string());
        Self {
            value,
            label,
            disabled: false,
            icon: None,
            title: None,
            class_name: None,
        }
    }

    /// Tooltip text: the explicit title, else a plain-text label.
    #[must_use]
    pub fn resolved_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .or_else(|| self.label.plain_text())
            .filter(|t| !t.is_empty())
    }
}

impl From<&RawOption> for SegmentedOption {
    fn from(raw: &RawOption) -> Self {
        match raw {
            RawOption::Empty => Self::primitive(SegmentedValue::empty()),
            RawOption::Number(n) => Self::primitive(SegmentedValue::Number(*n)),
            RawOption::Text(s) => Self::primitive(SegmentedValue::Text(s.clone())),
            RawOption::Descriptor(d) => Self {
                label: d
                    .label
                    .clone()
                    .unwrap_or_else(|| SegmentedLabel::Text(d.value.to_string())),
                value: d.value.clone(),
                disabled: d.disabled,
                icon: d.icon.clone(),
                title: d.title.clone(),
                class_name: d.class_name.clone(),
            },
        }
    }
}

/// Normalize a heterogeneous option list, preserving order and length.
#[must_use]
pub fn normalize_options(raw: &[RawOption]) -> Vec<SegmentedOption> {
    raw.iter().map(SegmentedOption::from).collect()
}
