//! Size variants and layout direction.

use serde::{Deserialize, Serialize};

/// Control size variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentedSize {
    /// Compact
    Small,
    /// Standard (default)
    #[default]
    #[serde(alias = "default")]
    Middle,
    /// Roomy
    Large,
}

impl SegmentedSize {
    /// Suffix appended to the prefix class (`-sm`, `-lg`); none for middle.
    #[must_use]
    pub const fn class_suffix(self) -> Option<&'static str> {
        match self {
            Self::Small => Some("sm"),
            Self::Middle => None,
            Self::Large => Some("lg"),
        }
    }

    /// Outer control height in pixels.
    #[must_use]
    pub const fn height(self) -> f32 {
        match self {
            Self::Small => 24.0,
            Self::Middle => 32.0,
            Self::Large => 40.0,
        }
    }

    /// Label font size in pixels.
    #[must_use]
    pub const fn font_size(self) -> f32 {
        match self {
            Self::Small | Self::Middle => 14.0,
            Self::Large => 16.0,
        }
    }

    /// Horizontal padding inside each item.
    #[must_use]
    pub const fn padding_x(self) -> f32 {
        match self {
            Self::Small => 7.0,
            Self::Middle | Self::Large => 11.0,
        }
    }
}

/// Horizontal layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right (default)
    #[default]
    Ltr,
    /// Right to left
    Rtl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_classes() {
        assert_eq!(SegmentedSize::Small.class_suffix(), Some("sm"));
        assert_eq!(SegmentedSize::Middle.class_suffix(), None);
        assert_eq!(SegmentedSize::Large.class_suffix(), Some("lg"));
    }

    #[test]
    fn test_size_metrics_grow() {
        assert!(SegmentedSize::Small.height() < SegmentedSize::Middle.height());
        assert!(SegmentedSize::Middle.height() < SegmentedSize::Large.height());
        assert!(SegmentedSize::Large.font_size() > SegmentedSize::Small.font_size());
    }

    #[test]
    fn test_size_serde_names() {
        let size: SegmentedSize = serde_json::from_str(r#""small""#).unwrap();
        assert_eq!(size, SegmentedSize::Small);
        let size: SegmentedSize = serde_json::from_str(r#""default""#).unwrap();
        assert_eq!(size, SegmentedSize::Middle);
        assert!(serde_json::from_str::<SegmentedSize>(r#""huge""#).is_err());
    }

    #[test]
    fn test_direction_default() {
        assert_eq!(Direction::default(), Direction::Ltr);
    }
}
