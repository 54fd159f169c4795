//! Draw commands recorded by [`crate::RecordingCanvas`].
//!
//! All painting reduces to these primitives.

use crate::widget::TextStyle;
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Box style for rectangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
}

impl BoxStyle {
    /// Filled box.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self { fill: Some(color) }
    }
}

/// A single recorded draw operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Uniform corner radius
        radius: f32,
        /// Box style
        style: BoxStyle,
    },
    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Position
        position: Point,
        /// Text style
        style: TextStyle,
    },
    /// Push a clip rectangle
    PushClip {
        /// Clip bounds
        bounds: Rect,
    },
    /// Pop the last clip rectangle
    PopClip,
}

impl DrawCommand {
    /// Filled rectangle with rounded corners.
    #[must_use]
    pub const fn rounded_rect(bounds: Rect, radius: f32, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// Bounds of a rect command.
    #[must_use]
    pub const fn rect_bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect { bounds, .. } => Some(*bounds),
            _ => None,
        }
    }

    /// Content of a text command.
    #[must_use]
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_rect() {
        let cmd = DrawCommand::rounded_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 4.0, Color::WHITE);
        assert_eq!(cmd.rect_bounds(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(cmd.text_content(), None);
        if let DrawCommand::Rect { radius, style, .. } = cmd {
            assert_eq!(radius, 4.0);
            assert_eq!(style.fill, Some(Color::WHITE));
        }
    }
}
