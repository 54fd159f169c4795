//! Canvas implementations for rendering.

use crate::draw::DrawCommand;
use crate::widget::{Canvas, TextStyle};
use crate::{Color, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Used by tests to verify what was painted and by backends that replay
/// commands elsewhere.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_depth: usize,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.clip_depth = 0;
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current clip nesting depth.
    #[must_use]
    pub const fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// Text strings drawn so far, in paint order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(DrawCommand::text_content)
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::rounded_rect(rect, radius, color));
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.commands.push(DrawCommand::PushClip { bounds: rect });
    }

    fn pop_clip(&mut self) {
        if self.clip_depth > 0 {
            self.clip_depth -= 1;
            self.commands.push(DrawCommand::PopClip);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn test_records_in_order() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rounded_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 4.0, Color::WHITE);
        canvas.draw_text("Daily", Point::new(1.0, 2.0), &TextStyle::default());
        canvas.fill_rounded_rect(Rect::new(2.0, 2.0, 6.0, 6.0), 2.0, Color::BLACK);
        assert_eq!(canvas.command_count(), 3);
        assert_eq!(
            canvas.commands()[2].rect_bounds(),
            Some(Rect::new(2.0, 2.0, 6.0, 6.0))
        );
        assert_eq!(canvas.texts(), vec!["Daily"]);
    }

    #[test]
    fn test_clip_balance() {
        let mut canvas = RecordingCanvas::new();
        canvas.pop_clip();
        assert!(canvas.is_empty());

        canvas.push_clip(Rect::new(0.0, 0.0, 5.0, 5.0));
        assert_eq!(canvas.clip_depth(), 1);
        canvas.pop_clip();
        assert_eq!(canvas.clip_depth(), 0);
        assert_eq!(canvas.command_count(), 2);
    }

    #[test]
    fn test_take_commands_clears() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rounded_rect(Rect::new(0.0, 0.0, 4.0, 4.0), 2.0, Color::BLACK);
        let taken = canvas.take_commands();
        assert_eq!(taken.len(), 1);
        assert!(canvas.is_empty());
    }
}
