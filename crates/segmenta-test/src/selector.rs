//! CSS-like selectors over a rendered markup tree.
//!
//! Supports:
//! - `"label"` - by tag
//! - `"#periods"` - by ID
//! - `".ant-segmented-item"` - by class (several may be chained)
//! - `"[disabled]"`, `"[data-testid='login']"` - by attribute
//! - `"div.group label"` - descendant combinator
//! - `"div > label"` - child combinator

use segmenta_core::{Element, Node};
use thiserror::Error;

/// Parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match by tag name
    Type(String),
    /// Match by ID (e.g., `#my-id`)
    Id(String),
    /// Match by test ID (e.g., `[data-testid='foo']`)
    TestId(String),
    /// Match by class (e.g., `.my-class`)
    Class(String),
    /// Match by attribute presence or value (e.g., `[checked]`, `[type='radio']`)
    Attribute { name: String, value: Option<String> },
    /// All parts must match the same element (e.g., `input.item[checked]`)
    Compound(Vec<Selector>),
    /// Descendant combinator (e.g., `div label`)
    Descendant(Box<Selector>, Box<Selector>),
    /// Child combinator (e.g., `div > label`)
    Child(Box<Selector>, Box<Selector>),
}

impl Selector {
    /// Parse a selector string.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is invalid.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        SelectorParser::new(input).parse()
    }

    /// Check if this selector matches the last element of `path`.
    ///
    /// `path` runs from the root to the candidate element.
    #[must_use]
    pub fn matches(&self, path: &[&Element]) -> bool {
        let Some((element, ancestors)) = path.split_last() else {
            return false;
        };
        match self {
            Self::Type(tag) => element.tag == *tag,
            Self::Id(id) => element.id() == Some(id.as_str()),
            Self::TestId(id) => element.get_attr("data-testid") == Some(id.as_str()),
            Self::Class(class) => element.has_class(class),
            Self::Attribute { name, value } => match value {
                Some(value) => element.get_attr(name) == Some(value.as_str()),
                None => element.has_attr(name),
            },
            Self::Compound(parts) => parts.iter().all(|p| p.matches(path)),
            Self::Descendant(ancestor, inner) => {
                inner.matches(path)
                    && (1..=ancestors.len()).any(|end| ancestor.matches(&ancestors[..end]))
            }
            Self::Child(parent, inner) => inner.matches(path) && parent.matches(ancestors),
        }
    }

    /// All elements under `root` (inclusive) matching this selector, in
    /// document order.
    #[must_use]
    pub fn select_all<'a>(&self, root: &'a Node) -> Vec<&'a Element> {
        let mut results = Vec::new();
        let mut path = Vec::new();
        if let Some(element) = root.as_element() {
            self.collect(element, &mut path, &mut results);
        }
        results
    }

    /// First element under `root` matching this selector.
    #[must_use]
    pub fn select<'a>(&self, root: &'a Node) -> Option<&'a Element> {
        self.select_all(root).into_iter().next()
    }

    fn collect<'a>(
        &self,
        element: &'a Element,
        path: &mut Vec<&'a Element>,
        results: &mut Vec<&'a Element>,
    ) {
        path.push(element);
        if self.matches(path) {
            results.push(element);
        }
        for child in element.children.iter().filter_map(Node::as_element) {
            self.collect(child, path, results);
        }
        path.pop();
    }
}

/// Selector parser.
pub struct SelectorParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> SelectorParser<'a> {
    /// Create a new parser.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Parse the selector.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is invalid.
    pub fn parse(&mut self) -> Result<Selector, SelectorError> {
        self.skip_whitespace();
        if self.peek_char().is_none() {
            return Err(SelectorError::Empty);
        }

        let mut selector = self.parse_compound()?;
        loop {
            let had_space = self.skip_whitespace();
            match self.peek_char() {
                None => return Ok(selector),
                Some('>') => {
                    self.advance();
                    self.skip_whitespace();
                    let inner = self.parse_compound()?;
                    selector = Selector::Child(Box::new(selector), Box::new(inner));
                }
                Some(_) if had_space => {
                    let inner = self.parse_compound()?;
                    selector = Selector::Descendant(Box::new(selector), Box::new(inner));
                }
                Some(c) => return Err(SelectorError::UnexpectedChar(c)),
            }
        }
    }

    fn parse_compound(&mut self) -> Result<Selector, SelectorError> {
        let mut parts = Vec::new();
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() || c == '>' {
                break;
            }
            parts.push(self.parse_simple(c)?);
        }

        match parts.len() {
            0 => Err(self.peek_char().map_or(SelectorError::ExpectedIdentifier, SelectorError::UnexpectedChar)),
            1 => Ok(parts.remove(0)),
            _ => Ok(Selector::Compound(parts)),
        }
    }

    fn parse_simple(&mut self, first: char) -> Result<Selector, SelectorError> {
        match first {
            '#' => {
                self.advance();
                Ok(Selector::Id(self.read_identifier()?))
            }
            '.' => {
                self.advance();
                Ok(Selector::Class(self.read_identifier()?))
            }
            '[' => self.parse_attribute(),
            _ if first.is_alphabetic() => Ok(Selector::Type(self.read_identifier()?)),
            _ => Err(SelectorError::UnexpectedChar(first)),
        }
    }

    fn parse_attribute(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // Skip '['

        let name = self.read_until_any(&['=', ']']).trim().to_string();
        if name.is_empty() {
            return Err(SelectorError::InvalidAttribute);
        }

        let value = if self.peek_char() == Some('=') {
            self.advance();
            let quote = self.peek_char().filter(|q| *q == '\'' || *q == '"');
            if quote.is_some() {
                self.advance();
            }
            let value = match quote {
                Some(q) => self.read_until_any(&[q]),
                None => self.read_until_any(&[']']).trim().to_string(),
            };
            if let Some(q) = quote {
                if self.peek_char() != Some(q) {
                    return Err(SelectorError::UnclosedAttribute);
                }
                self.advance();
            }
            Some(value)
        } else {
            None
        };

        if self.peek_char() != Some(']') {
            return Err(SelectorError::UnclosedAttribute);
        }
        self.advance();

        match (name.as_str(), value) {
            ("data-testid", Some(id)) => Ok(Selector::TestId(id)),
            (_, value) => Ok(Selector::Attribute { name, value }),
        }
    }

    fn read_identifier(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        if self.pos == start {
            return Err(SelectorError::ExpectedIdentifier);
        }

        Ok(self.input[start..self.pos].to_string())
    }

    fn read_until_any(&mut self, stops: &[char]) -> String {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if stops.contains(&c) {
                break;
            }
            self.advance();
        }
        self.input[start..self.pos].to_string()
    }

    /// Returns true if any whitespace was skipped.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
        self.pos > start
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }
}

/// Selector parsing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Empty selector
    #[error("empty selector")]
    Empty,
    /// Unexpected character
    #[error("unexpected character: '{0}'")]
    UnexpectedChar(char),
    /// Expected identifier
    #[error("expected identifier")]
    ExpectedIdentifier,
    /// Invalid attribute syntax
    #[error("invalid attribute syntax")]
    InvalidAttribute,
    /// Unclosed attribute bracket or quote
    #[error("unclosed attribute bracket")]
    UnclosedAttribute,
}
