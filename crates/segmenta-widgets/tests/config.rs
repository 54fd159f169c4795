//! Building controls from YAML documents.

use segmenta_core::{Constraints, Event, RecordingCanvas, Rect, Size, Widget};
use segmenta_widgets::{
    ConfigError, Direction, Segmented, SegmentedChanged, SegmentedConfig, SegmentedSize,
    SegmentedValue,
};

const VIEW_MODES: &str = r##"
options:
  - value: list
    label: List
    icon:
      tag: span
      classes: [anticon-bars]
  - value: kanban
    label: Kanban
    title: Board view
  - value: calendar
    label: Calendar
    disabled: true
default_value: kanban
size: large
direction: rtl
name: view-mode
accessible_name: View mode
test_id: view-mode
theme:
  track: "#f5f5f5"
  thumb: "#ffffff"
  radius: 8
"##;

fn view_modes() -> Segmented {
    let config = SegmentedConfig::from_yaml(VIEW_MODES).unwrap();
    Segmented::from_config(&config).unwrap()
}

#[test]
fn builds_configured_control() {
    let control = view_modes();
    assert_eq!(control.get_size(), SegmentedSize::Large);
    assert_eq!(control.get_value(), Some(SegmentedValue::from("kanban")));
    assert_eq!(control.selected_index(), Some(1));
    assert_eq!(Widget::accessible_name(&control), Some("View mode"));
    assert_eq!(Widget::test_id(&control), Some("view-mode"));

    let html = control.render().to_html();
    assert!(html.starts_with(r#"<div class="ant-segmented ant-segmented-lg ant-segmented-rtl""#));
    assert!(html.contains(r#"title="Board view""#));
    assert!(html.contains(r#"<span class="anticon-bars"></span>"#));
    assert_eq!(html.matches(r#"name="view-mode""#).count(), 3);
}

#[test]
fn configured_control_interacts() {
    let mut control = view_modes();
    control.layout(Rect::from_size(control.measure(Constraints::unbounded())));

    assert!(control.event(&Event::Change { target: 2 }).is_none());
    let changed = control
        .event(&Event::Change { target: 0 })
        .and_then(|m| m.downcast::<SegmentedChanged>().ok())
        .unwrap();
    assert_eq!(changed.value, SegmentedValue::from("list"));
}

#[test]
fn configured_control_paints() {
    let mut control = view_modes();
    let size = control.measure(Constraints::loose(Size::new(800.0, 100.0)));
    assert_eq!(size.height, 40.0);
    control.layout(Rect::from_size(size));

    let mut canvas = RecordingCanvas::new();
    control.paint(&mut canvas);
    assert_eq!(canvas.texts(), vec!["List", "Kanban", "Calendar"]);

    // Items run right to left.
    let bounds = control.item_bounds();
    assert!(bounds[0].x > bounds[1].x && bounds[1].x > bounds[2].x);
}

#[test]
fn config_round_trips_through_yaml() {
    let config = SegmentedConfig::from_yaml(VIEW_MODES).unwrap();
    assert_eq!(config.direction, Direction::Rtl);
    let again = SegmentedConfig::from_yaml(&config.to_yaml().unwrap()).unwrap();
    assert_eq!(again, config);
}

#[test]
fn malformed_yaml_is_an_error() {
    let err = SegmentedConfig::from_yaml("options: [unterminated").unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)));
}
