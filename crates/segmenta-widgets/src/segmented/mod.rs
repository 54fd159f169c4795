//! `Segmented` widget: a row of mutually exclusive segments.
//!
//! The control normalizes a heterogeneous option list on every render,
//! resolves the active value (controlled or uncontrolled), and renders one
//! native radio input per option plus a sliding thumb under the selection.
//!
//! ```
//! use segmenta_widgets::{Segmented, SegmentedValue};
//! use segmenta_core::{Event, Widget};
//!
//! let mut control = Segmented::new()
//!     .options(["Daily", "Weekly", "Monthly"])
//!     .default_value("Weekly");
//! assert_eq!(control.selected_index(), Some(1));
//!
//! control.event(&Event::Change { target: 2 });
//! assert_eq!(control.get_value(), Some(SegmentedValue::from("Monthly")));
//! ```

mod option;
mod selection;
mod size;
mod theme;
mod thumb;

pub use option::{
    normalize_options, OptionDescriptor, RawOption, SegmentedLabel, SegmentedOption,
    SegmentedValue,
};
pub use selection::{Ignored, SegmentedChanged, SelectionController};
pub use size::{Direction, SegmentedSize};
pub use theme::SegmentedTheme;
pub use thumb::{Thumb, THUMB_DURATION};

use segmenta_core::{
    markup::{Element, Node, NodeRef},
    widget::{AccessibleRole, LayoutResult, TextStyle},
    Canvas, Constraints, Event, FontWeight, Key, MouseButton, Point, Rect, Size, TypeId, Widget,
};
use std::any::Any;
use std::fmt;
use tracing::warn;

/// Class prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "ant-segmented";

/// Padding between the track edge and the items.
const GROUP_PADDING: f32 = 2.0;
/// Gap between an icon and its label.
const ICON_GAP: f32 = 6.0;
/// Estimated glyph advance as a fraction of the font size.
const CHAR_WIDTH_RATIO: f32 = 0.6;

type ChangeHandler = Box<dyn FnMut(&SegmentedValue) + Send + Sync>;

/// Segmented control widget.
pub struct Segmented {
    /// Caller-supplied options, normalized on every render
    options: Vec<RawOption>,
    /// Active value ownership
    selection: SelectionController,
    /// Change callback
    on_change: Option<ChangeHandler>,
    /// Whole-control disabled flag
    disabled: bool,
    /// Size variant
    size: SegmentedSize,
    /// Fill the available width
    block: bool,
    /// Layout direction
    direction: Direction,
    /// Class prefix
    prefix_cls: String,
    /// Extra root class
    class_name: Option<String>,
    /// Radio group name shared by every input
    name: Option<String>,
    /// Pass-through root attributes
    attributes: Vec<(String, String)>,
    /// Handle receiving the rendered root
    node_ref: Option<NodeRef>,
    /// Paint colours
    theme: SegmentedTheme,
    /// Selection highlight
    thumb: Thumb,
    /// Keyboard focus
    focused: bool,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    bounds: Rect,
}

impl Default for Segmented {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            selection: SelectionController::default(),
            on_change: None,
            disabled: false,
            size: SegmentedSize::Middle,
            block: false,
            direction: Direction::Ltr,
            prefix_cls: DEFAULT_PREFIX.to_string(),
            class_name: None,
            name: None,
            attributes: Vec::new(),
            node_ref: None,
            theme: SegmentedTheme::default(),
            thumb: Thumb::default(),
            focused: false,
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }
}

impl fmt::Debug for Segmented {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segmented")
            .field("options", &self.options)
            .field("selection", &self.selection)
            .field("on_change", &self.on_change.is_some())
            .field("disabled", &self.disabled)
            .field("size", &self.size)
            .field("block", &self.block)
            .field("direction", &self.direction)
            .field("prefix_cls", &self.prefix_cls)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl Segmented {
    /// Create an empty segmented control.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the option list.
    #[must_use]
    pub fn options<T: Into<RawOption>>(mut self, options: impl IntoIterator<Item = T>) -> Self {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Append one option.
    #[must_use]
    pub fn option(mut self, option: impl Into<RawOption>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Control the value from outside.
    #[must_use]
    pub fn value(mut self, value: impl Into<SegmentedValue>) -> Self {
        self.selection.set_controlled(Some(value.into()));
        self
    }

    /// Seed the uncontrolled value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<SegmentedValue>) -> Self {
        self.selection.set_default(Some(value.into()));
        self
    }

    /// Register the change callback.
    #[must_use]
    pub fn on_change(mut self, handler: impl FnMut(&SegmentedValue) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Disable the whole control.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the size variant.
    #[must_use]
    pub const fn size(mut self, size: SegmentedSize) -> Self {
        self.size = size;
        self
    }

    /// Fill the available width with equal segments.
    #[must_use]
    pub const fn block(mut self, block: bool) -> Self {
        self.block = block;
        self
    }

    /// Set the layout direction.
    #[must_use]
    pub const fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the class prefix.
    #[must_use]
    pub fn prefix_cls(mut self, prefix: impl Into<String>) -> Self {
        self.prefix_cls = prefix.into();
        self
    }

    /// Add a class to the root element.
    #[must_use]
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    /// Name shared by every radio input.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Pass an attribute through to the root element.
    ///
    /// Names that cannot appear in markup are dropped with a warning.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        if !is_valid_attribute_name(&name) {
            warn!(attribute = %name, "dropping invalid pass-through attribute");
            return self;
        }
        if name == "class" {
            let class = value.into();
            self.class_name = Some(match self.class_name.take() {
                Some(existing) => format!("{existing} {class}"),
                None => class,
            });
            return self;
        }
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
        self
    }

    /// Publish the rendered root element to `handle`.
    #[must_use]
    pub fn node_ref(mut self, handle: NodeRef) -> Self {
        self.node_ref = Some(handle);
        self
    }

    /// Set the paint colours.
    #[must_use]
    pub const fn theme(mut self, theme: SegmentedTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable the sliding thumb.
    #[must_use]
    pub fn motion(mut self, motion: bool) -> Self {
        self.thumb.set_motion(motion);
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    // === Runtime updates ===

    /// Update the controlled value (`None` releases control).
    pub fn set_value(&mut self, value: Option<SegmentedValue>) {
        self.selection.set_controlled(value);
        self.sync_thumb();
    }

    /// Replace the option list.
    pub fn set_options<T: Into<RawOption>>(&mut self, options: impl IntoIterator<Item = T>) {
        self.options = options.into_iter().map(Into::into).collect();
        self.sync_thumb();
    }

    /// Toggle the whole-control disabled flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.focused = false;
        }
    }

    // === Queries ===

    /// Options after normalization.
    #[must_use]
    pub fn normalized_options(&self) -> Vec<SegmentedOption> {
        normalize_options(&self.options)
    }

    /// The raw option list.
    #[must_use]
    pub fn raw_options(&self) -> &[RawOption] {
        &self.options
    }

    /// The active value.
    #[must_use]
    pub fn get_value(&self) -> Option<SegmentedValue> {
        let options = self.normalized_options();
        self.selection.active(&options).cloned()
    }

    /// Index of the selected item.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected_index(&self.normalized_options())
    }

    /// Whether the caller owns the value.
    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        self.selection.is_controlled()
    }

    /// Whether the whole control is disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the control has keyboard focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// The size variant.
    #[must_use]
    pub const fn get_size(&self) -> SegmentedSize {
        self.size
    }

    /// The class prefix.
    #[must_use]
    pub fn get_prefix_cls(&self) -> &str {
        &self.prefix_cls
    }

    /// The selection highlight.
    #[must_use]
    pub const fn get_thumb(&self) -> &Thumb {
        &self.thumb
    }

    /// Bounds of every item, in option order.
    #[must_use]
    pub fn item_bounds(&self) -> Vec<Rect> {
        self.item_rects(&self.normalized_options())
    }

    // === Geometry ===

    fn label_width(&self, option: &SegmentedOption) -> f32 {
        let font = self.size.font_size();
        let chars = option.label.text_content().chars().count() as f32;
        let text = chars * font * CHAR_WIDTH_RATIO;
        match (&option.icon, option.label.is_empty()) {
            (Some(_), true) => font,
            (Some(_), false) => font + ICON_GAP + text,
            (None, _) => text,
        }
    }

    fn natural_widths(&self, options: &[SegmentedOption]) -> Vec<f32> {
        let padding = self.size.padding_x();
        options
            .iter()
            .map(|o| 2.0f32.mul_add(padding, self.label_width(o)))
            .collect()
    }

    fn natural_size(&self, options: &[SegmentedOption]) -> Size {
        let items: f32 = self.natural_widths(options).iter().sum();
        Size::new(2.0f32.mul_add(GROUP_PADDING, items), self.size.height())
    }

    /// Track rectangle: the laid-out bounds, or the natural size before layout.
    fn frame(&self, options: &[SegmentedOption]) -> Rect {
        if self.bounds.width > 0.0 && self.bounds.height > 0.0 {
            self.bounds
        } else {
            let size = self.natural_size(options);
            Rect::new(self.bounds.x, self.bounds.y, size.width, size.height)
        }
    }

    fn item_rects(&self, options: &[SegmentedOption]) -> Vec<Rect> {
        if options.is_empty() {
            return Vec::new();
        }
        let frame = self.frame(options);
        let inner = frame.inset(GROUP_PADDING);
        let widths = if self.block {
            vec![inner.width / options.len() as f32; options.len()]
        } else {
            self.natural_widths(options)
        };

        let mut rects = Vec::with_capacity(widths.len());
        match self.direction {
            Direction::Ltr => {
                let mut x = inner.x;
                for w in widths {
                    rects.push(Rect::new(x, inner.y, w, inner.height));
                    x += w;
                }
            }
            Direction::Rtl => {
                let mut right = inner.right();
                for w in widths {
                    rects.push(Rect::new(right - w, inner.y, w, inner.height));
                    right -= w;
                }
            }
        }
        rects
    }

    fn item_at(&self, options: &[SegmentedOption], position: Point) -> Option<usize> {
        self.item_rects(options)
            .iter()
            .position(|r| r.contains_point(&position))
    }

    fn sync_thumb(&mut self) {
        let options = self.normalized_options();
        let target = self
            .selection
            .selected_index(&options)
            .and_then(|i| self.item_rects(&options).get(i).map(|r| (i, *r)));
        self.thumb.sync(target);
    }

    // === Interaction ===

    fn key_target(&self, key: Key) -> Option<usize> {
        let options = self.normalized_options();
        let count = options.len();
        if count == 0 {
            return None;
        }
        let current = self.selection.selected_index(&options);
        let enabled = |i: &usize| !options[*i].disabled;
        let step: isize = match (key, self.direction) {
            (Key::ArrowRight, Direction::Ltr)
            | (Key::ArrowLeft, Direction::Rtl)
            | (Key::ArrowDown, _) => 1,
            (Key::ArrowLeft, Direction::Ltr)
            | (Key::ArrowRight, Direction::Rtl)
            | (Key::ArrowUp, _) => -1,
            (Key::Home, _) => {
                return (0..count).find(enabled).filter(|i| Some(*i) != current);
            }
            (Key::End, _) => {
                return (0..count).rev().find(enabled).filter(|i| Some(*i) != current);
            }
            _ => return None,
        };

        let start = current.unwrap_or(if step > 0 { count - 1 } else { 0 }) as isize;
        (1..=count as isize)
            .map(|offset| (start + step * offset).rem_euclid(count as isize) as usize)
            .find(enabled)
            .filter(|i| Some(*i) != current)
    }

    fn commit(&mut self, index: usize) -> Option<SegmentedChanged> {
        // Place the thumb on the current item first so the move slides.
        if !self.thumb.is_placed() {
            self.sync_thumb();
        }
        let options = self.normalized_options();
        let changed = self.selection.accept(&options, index, self.disabled).ok()?;
        if let Some(handler) = self.on_change.as_mut() {
            handler(&changed.value);
        }
        self.sync_thumb();
        Some(changed)
    }

    // === Markup ===

    fn render_item(&self, option: &SegmentedOption, index: usize, checked: bool) -> Element {
        let p = &self.prefix_cls;
        let disabled = self.disabled || option.disabled;

        let mut input = Element::new("input")
            .class(format!("{p}-item-input"))
            .attr("type", "radio");
        if let Some(name) = &self.name {
            input = input.attr("name", name.clone());
        }
        let input = input
            .flag_if(disabled, "disabled")
            .flag_if(checked, "checked")
            .target(index);

        let mut label = Element::new("div").class(format!("{p}-item-label"));
        if let Some(title) = option.resolved_title() {
            label = label.attr("title", title);
        }
        if let Some(icon) = &option.icon {
            label = label.child(
                Element::new("span")
                    .class(format!("{p}-item-icon"))
                    .child(icon.clone()),
            );
            if !option.label.is_empty() {
                label = label.child(Element::new("span").child(option.label.to_node()));
            }
        } else if !option.label.is_empty() {
            label = label.child(option.label.to_node());
        }

        Element::new("label")
            .class(format!("{p}-item"))
            .class_if(checked, format!("{p}-item-selected"))
            .class_if(disabled, format!("{p}-item-disabled"))
            .class(option.class_name.clone().unwrap_or_default())
            .child(input)
            .child(label)
    }
}

/// Whether `name` may be used as a markup attribute name.
#[must_use]
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '/'))
}

impl Widget for Segmented {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let mut preferred = self.natural_size(&self.normalized_options());
        if self.block && constraints.has_bounded_width() {
            preferred.width = constraints.max_width;
        }
        constraints.constrain(preferred)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.sync_thumb();
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let options = self.normalized_options();
        let frame = self.frame(&options);
        let selected = self.selection.selected_index(&options);
        let rects = self.item_rects(&options);
        let item_radius = (self.theme.radius - GROUP_PADDING).max(0.0);

        canvas.fill_rounded_rect(frame, self.theme.radius, self.theme.track);

        if let Some(index) = selected {
            let target = rects[index];
            let highlight = if self.thumb.is_visible(options.len(), selected) {
                self.thumb.rect(index, target)
            } else {
                target
            };
            canvas.fill_rounded_rect(highlight, item_radius, self.theme.thumb);
        }

        canvas.push_clip(frame);
        for (i, (option, rect)) in options.iter().zip(&rects).enumerate() {
            let text = option.label.text_content();
            if text.is_empty() {
                continue;
            }
            let is_selected = selected == Some(i);
            let color = if self.disabled || option.disabled {
                self.theme.disabled_text
            } else if is_selected {
                self.theme.selected_text
            } else {
                self.theme.text
            };
            let mut x = rect.x + self.size.padding_x();
            if option.icon.is_some() {
                x += self.size.font_size() + ICON_GAP;
            }
            let style = TextStyle {
                size: self.size.font_size(),
                color,
                weight: if is_selected {
                    FontWeight::Medium
                } else {
                    FontWeight::Normal
                },
            };
            canvas.draw_text(&text, Point::new(x, rect.center().y), &style);
        }
        canvas.pop_clip();
    }

    fn render(&self) -> Node {
        let options = self.normalized_options();
        let selected = self.selection.selected_index(&options);
        let p = &self.prefix_cls;

        let mut root = Element::new("div")
            .class(p.clone())
            .class_if(self.block, format!("{p}-block"))
            .class_if(self.disabled, format!("{p}-disabled"));
        if let Some(suffix) = self.size.class_suffix() {
            root = root.class(format!("{p}-{suffix}"));
        }
        root = root.class_if(self.direction == Direction::Rtl, format!("{p}-rtl"));
        if let Some(class) = &self.class_name {
            root = root.class(class.clone());
        }
        for (name, value) in &self.attributes {
            root = root.attr(name.clone(), value.clone());
        }
        if let Some(label) = &self.accessible_name_value {
            root = root.attr("aria-label", label.clone());
        }
        if let Some(id) = &self.test_id_value {
            root = root.attr("data-testid", id.clone());
        }

        let mut group = Element::new("div").class(format!("{p}-group"));
        if let Some(index) = selected.filter(|_| self.thumb.is_visible(options.len(), selected)) {
            let rects = self.item_rects(&options);
            let origin = self.frame(&options).x + GROUP_PADDING;
            let rect = self.thumb.rect(index, rects[index]);
            group = group.child(
                Element::new("div")
                    .class(format!("{p}-thumb"))
                    .attr("style", Thumb::style(rect, origin)),
            );
        }
        group = group.children(
            options
                .iter()
                .enumerate()
                .map(|(i, o)| self.render_item(o, i, selected == Some(i)).into()),
        );

        let root: Node = root.child(group).into();
        if let Some(handle) = &self.node_ref {
            handle.set(root.clone());
        }
        root
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let target = match event {
            Event::Change { target } => Some(*target),
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                let options = self.normalized_options();
                let selected = self.selection.selected_index(&options);
                // A checked radio emits no change when clicked again.
                self.item_at(&options, *position)
                    .filter(|i| Some(*i) != selected)
            }
            Event::KeyDown { key } if self.focused => self.key_target(*key),
            Event::FocusIn => {
                self.focused = self.is_focusable();
                None
            }
            Event::FocusOut => {
                self.focused = false;
                None
            }
            _ => None,
        }?;

        self.commit(target)
            .map(|changed| Box::new(changed) as Box<dyn Any + Send>)
    }

    fn animate(&mut self, dt: f64) -> bool {
        self.thumb.update(dt)
    }

    fn is_interactive(&self) -> bool {
        !self.disabled && !self.options.is_empty()
    }

    fn is_focusable(&self) -> bool {
        self.is_interactive()
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::RadioGroup
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
