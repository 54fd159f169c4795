//! Test harness driving a widget through its markup tree.

use segmenta_core::{Constraints, Element, Event, Key, MouseButton, Node, Point, Rect, Widget};
use std::any::Any;
use std::collections::VecDeque;

use crate::selector::Selector;

/// Test harness for interacting with a mounted widget.
///
/// Mounting measures the widget against the viewport and lays it out at
/// the origin. Queries run against a freshly rendered tree every time.
pub struct Harness<W: Widget> {
    /// Widget being tested
    root: W,
    /// Event queue for simulation
    event_queue: VecDeque<Event>,
    /// Messages returned by the widget, oldest first
    messages: Vec<Box<dyn Any + Send>>,
    /// Current viewport size
    viewport: Rect,
}

impl<W: Widget> Harness<W> {
    /// Mount a widget in a 1280x720 viewport.
    pub fn new(root: W) -> Self {
        Self::with_viewport(root, 1280.0, 720.0)
    }

    /// Mount a widget in a viewport of the given size.
    pub fn with_viewport(root: W, width: f32, height: f32) -> Self {
        let mut harness = Self {
            root,
            event_queue: VecDeque::new(),
            messages: Vec::new(),
            viewport: Rect::new(0.0, 0.0, width, height),
        };
        harness.relayout();
        harness
    }

    /// Re-run measure and layout against the viewport.
    pub fn relayout(&mut self) -> &mut Self {
        let size = self
            .root
            .measure(Constraints::loose(self.viewport.size()));
        self.root.layout(Rect::from_size(size));
        self
    }

    /// The mounted widget.
    pub fn widget(&self) -> &W {
        &self.root
    }

    /// The mounted widget, mutably (call [`Self::relayout`] after resizing changes).
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.root
    }

    /// Unmount, returning the widget.
    pub fn into_inner(self) -> W {
        self.root
    }

    // === Event Simulation ===

    /// Fire a change on the `nth` element matching `selector`.
    ///
    /// # Panics
    ///
    /// Panics if there is no `nth` match, or neither the match nor any of
    /// its descendants carries an interaction target.
    pub fn change(&mut self, selector: &str, nth: usize) -> &mut Self {
        let matches = self.query_all(selector);
        let Some(element) = matches.get(nth) else {
            panic!(
                "No element at index {nth} for selector '{selector}' ({} matched)",
                matches.len()
            );
        };
        let Some(target) = find_target(element) else {
            panic!("Element {nth} matching '{selector}' has no interaction target");
        };
        self.event_queue.push_back(Event::Change { target });
        self.process_events();
        self
    }

    /// Simulate a left click at `position`.
    pub fn click_at(&mut self, position: Point) -> &mut Self {
        self.event_queue.push_back(Event::MouseMove { position });
        self.event_queue.push_back(Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        self.event_queue.push_back(Event::MouseUp {
            position,
            button: MouseButton::Left,
        });
        self.process_events();
        self
    }

    /// Give the widget keyboard focus.
    pub fn focus(&mut self) -> &mut Self {
        self.event_queue.push_back(Event::FocusIn);
        self.process_events();
        self
    }

    /// Take keyboard focus away.
    pub fn blur(&mut self) -> &mut Self {
        self.event_queue.push_back(Event::FocusOut);
        self.process_events();
        self
    }

    /// Simulate a key press.
    pub fn press_key(&mut self, key: Key) -> &mut Self {
        self.event_queue.push_back(Event::KeyDown { key });
        self.event_queue.push_back(Event::KeyUp { key });
        self.process_events();
        self
    }

    /// Advance simulated time by `ms` milliseconds. Returns true while the
    /// widget is still animating.
    pub fn tick(&mut self, ms: u64) -> bool {
        self.root.animate(ms as f64 / 1000.0)
    }

    // === Queries ===

    /// Render the widget.
    #[must_use]
    pub fn render(&self) -> Node {
        self.root.render()
    }

    /// First element matching the selector (owned copy).
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<Element> {
        self.query_all(selector).into_iter().next()
    }

    /// All elements matching the selector, in document order.
    ///
    /// An invalid selector matches nothing.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        let tree = self.render();
        sel.select_all(&tree).into_iter().cloned().collect()
    }

    /// Number of matching elements.
    #[must_use]
    pub fn count(&self, selector: &str) -> usize {
        self.query_all(selector).len()
    }

    /// Check if an element exists.
    #[must_use]
    pub fn exists(&self, selector: &str) -> bool {
        self.count(selector) > 0
    }

    /// Text content of the first matching element.
    #[must_use]
    pub fn text(&self, selector: &str) -> String {
        self.query(selector)
            .map(|el| Node::from(el).text_content())
            .unwrap_or_default()
    }

    /// Text content of every matching element.
    #[must_use]
    pub fn texts(&self, selector: &str) -> Vec<String> {
        self.query_all(selector)
            .into_iter()
            .map(|el| Node::from(el).text_content())
            .collect()
    }

    /// Whether each matching element carries the `checked` attribute.
    #[must_use]
    pub fn checked_states(&self, selector: &str) -> Vec<bool> {
        self.query_all(selector)
            .iter()
            .map(|el| el.has_attr("checked"))
            .collect()
    }

    /// Messages the widget has returned so far.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Messages of type `T` returned so far.
    #[must_use]
    pub fn messages<T: Any + Clone>(&self) -> Vec<T> {
        self.messages
            .iter()
            .filter_map(|m| m.downcast_ref::<T>().cloned())
            .collect()
    }

    /// Forget recorded messages.
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    // === Assertions ===

    /// Assert that an element exists.
    ///
    /// # Panics
    ///
    /// Panics if no element matches.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.exists(selector),
            "Expected element matching '{selector}' to exist"
        );
        self
    }

    /// Assert that no element matches.
    ///
    /// # Panics
    ///
    /// Panics if an element matches.
    pub fn assert_not_exists(&self, selector: &str) -> &Self {
        assert!(
            !self.exists(selector),
            "Expected element matching '{selector}' to not exist"
        );
        self
    }

    /// Assert the count of matching elements.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_count(&self, selector: &str, expected: usize) -> &Self {
        let actual = self.count(selector);
        assert_eq!(
            actual, expected,
            "Expected {expected} elements matching '{selector}' but found {actual}"
        );
        self
    }

    /// Assert that text matches exactly.
    ///
    /// # Panics
    ///
    /// Panics if the text does not match.
    pub fn assert_text(&self, selector: &str, expected: &str) -> &Self {
        let actual = self.text(selector);
        assert_eq!(
            actual, expected,
            "Expected text '{expected}' but got '{actual}' for '{selector}'"
        );
        self
    }

    // === Internal ===

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            if let Some(message) = self.root.event(&event) {
                self.messages.push(message);
            }
        }
    }
}

fn find_target(element: &Element) -> Option<usize> {
    element.target.or_else(|| {
        element
            .children
            .iter()
            .filter_map(Node::as_element)
            .find_map(find_target)
    })
}
