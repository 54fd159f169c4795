//! Segmented control widget for the Segmenta toolkit.

pub mod config;
pub mod segmented;

pub use config::{ConfigError, SegmentedConfig, ThemeConfig};
pub use segmented::{
    normalize_options, Direction, Ignored, OptionDescriptor, RawOption, Segmented,
    SegmentedChanged, SegmentedLabel, SegmentedOption, SegmentedSize, SegmentedTheme,
    SegmentedValue, SelectionController, Thumb, DEFAULT_PREFIX, THUMB_DURATION,
};
