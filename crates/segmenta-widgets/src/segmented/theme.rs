//! Colour palette for painting the control.

use segmenta_core::Color;

/// Colours used by [`super::Segmented::paint`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentedTheme {
    /// Track (background) colour
    pub track: Color,
    /// Thumb and selected item background
    pub thumb: Color,
    /// Label colour for unselected items
    pub text: Color,
    /// Label colour for the selected item
    pub selected_text: Color,
    /// Label colour for disabled items
    pub disabled_text: Color,
    /// Corner radius of track, thumb and items
    pub radius: f32,
}

impl Default for SegmentedTheme {
    fn default() -> Self {
        Self {
            track: Color::new(0.96, 0.96, 0.96, 1.0),
            thumb: Color::WHITE,
            text: Color::new(0.0, 0.0, 0.0, 0.65),
            selected_text: Color::new(0.0, 0.0, 0.0, 0.88),
            disabled_text: Color::new(0.0, 0.0, 0.0, 0.25),
            radius: 6.0,
        }
    }
}
