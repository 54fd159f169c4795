//! YAML configuration for [`Segmented`].
//!
//! ```
//! use segmenta_widgets::{Segmented, SegmentedConfig};
//!
//! let config = SegmentedConfig::from_yaml(
//!     "options: [Daily, Weekly, Monthly]\ndefault_value: Weekly\nsize: large\n",
//! )
//! .unwrap();
//! let control = Segmented::from_config(&config).unwrap();
//! assert_eq!(control.selected_index(), Some(1));
//! ```

use crate::segmented::{
    is_valid_attribute_name, Direction, RawOption, Segmented, SegmentedSize, SegmentedTheme,
    SegmentedValue,
};
use segmenta_core::{Color, ColorParseError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML syntax or shape error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Theme colour is not valid hex.
    #[error("invalid colour: {0}")]
    Color(#[from] ColorParseError),

    /// Pass-through attribute name cannot appear in markup.
    #[error("invalid attribute name: {0:?}")]
    InvalidAttribute(String),
}

/// Theme overrides as hex strings. Unset fields keep the default palette.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Track colour
    #[serde(default)]
    pub track: Option<String>,
    /// Thumb colour
    #[serde(default)]
    pub thumb: Option<String>,
    /// Unselected label colour
    #[serde(default)]
    pub text: Option<String>,
    /// Selected label colour
    #[serde(default)]
    pub selected_text: Option<String>,
    /// Disabled label colour
    #[serde(default)]
    pub disabled_text: Option<String>,
    /// Corner radius
    #[serde(default)]
    pub radius: Option<f32>,
}

impl ThemeConfig {
    /// Resolve against the default palette.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] for any colour that is not valid hex.
    pub fn resolve(&self) -> Result<SegmentedTheme, ColorParseError> {
        let base = SegmentedTheme::default();
        let pick = |hex: &Option<String>, fallback: Color| {
            hex.as_deref().map_or(Ok(fallback), Color::from_hex)
        };
        Ok(SegmentedTheme {
            track: pick(&self.track, base.track)?,
            thumb: pick(&self.thumb, base.thumb)?,
            text: pick(&self.text, base.text)?,
            selected_text: pick(&self.selected_text, base.selected_text)?,
            disabled_text: pick(&self.disabled_text, base.disabled_text)?,
            radius: self.radius.unwrap_or(base.radius),
        })
    }
}

const fn default_motion() -> bool {
    true
}

/// Declarative description of a segmented control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SegmentedConfig {
    /// Option list (strings, numbers, nulls or descriptor maps)
    #[serde(default)]
    pub options: Vec<RawOption>,
    /// Controlled value
    #[serde(default)]
    pub value: Option<SegmentedValue>,
    /// Uncontrolled initial value
    #[serde(default)]
    pub default_value: Option<SegmentedValue>,
    /// Disable the whole control
    #[serde(default)]
    pub disabled: bool,
    /// Size variant
    #[serde(default)]
    pub size: SegmentedSize,
    /// Fill the available width
    #[serde(default)]
    pub block: bool,
    /// Extra root class
    #[serde(default)]
    pub class_name: Option<String>,
    /// Class prefix override
    #[serde(default)]
    pub prefix_cls: Option<String>,
    /// Radio group name
    #[serde(default)]
    pub name: Option<String>,
    /// Layout direction
    #[serde(default)]
    pub direction: Direction,
    /// Animate the thumb
    #[serde(default = "default_motion")]
    pub motion: bool,
    /// Colour overrides
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Pass-through root attributes
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Accessible name
    #[serde(default)]
    pub accessible_name: Option<String>,
    /// Test ID
    #[serde(default)]
    pub test_id: Option<String>,
}

impl Default for SegmentedConfig {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            value: None,
            default_value: None,
            disabled: false,
            size: SegmentedSize::default(),
            block: false,
            class_name: None,
            prefix_cls: None,
            name: None,
            direction: Direction::default(),
            motion: true,
            theme: ThemeConfig::default(),
            attributes: BTreeMap::new(),
            accessible_name: None,
            test_id: None,
        }
    }
}

impl SegmentedConfig {
    /// Parse from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or has unknown fields.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}

impl Segmented {
    /// Build a control from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid theme colours or attribute names.
    pub fn from_config(config: &SegmentedConfig) -> Result<Self, ConfigError> {
        if let Some(name) = config.attributes.keys().find(|n| !is_valid_attribute_name(n)) {
            return Err(ConfigError::InvalidAttribute(name.clone()));
        }

        let mut control = Self::new()
            .options(config.options.iter().cloned())
            .disabled(config.disabled)
            .size(config.size)
            .block(config.block)
            .direction(config.direction)
            .motion(config.motion)
            .theme(config.theme.resolve()?);

        if let Some(value) = &config.value {
            control = control.value(value.clone());
        }
        if let Some(value) = &config.default_value {
            control = control.default_value(value.clone());
        }
        if let Some(class) = &config.class_name {
            control = control.class_name(class.clone());
        }
        if let Some(prefix) = &config.prefix_cls {
            control = control.prefix_cls(prefix.clone());
        }
        if let Some(name) = &config.name {
            control = control.name(name.clone());
        }
        if let Some(label) = &config.accessible_name {
            control = control.accessible_name(label.clone());
        }
        if let Some(id) = &config.test_id {
            control = control.test_id(id.clone());
        }
        for (name, value) in &config.attributes {
            control = control.attribute(name.clone(), value.clone());
        }
        Ok(control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use segmenta_core::Widget;

    const PERIODS_YAML: &str = r##"
options:
  - Daily
  - Weekly
  - value: Monthly
    disabled: true
  - 4
  - ~
default_value: Weekly
size: small
block: true
class_name: periods
name: period
attributes:
  data-test-id: hello
theme:
  thumb: "#1677ff"
"##;

    #[test]
    fn test_parse_full() {
        let config = SegmentedConfig::from_yaml(PERIODS_YAML).unwrap();
        assert_eq!(config.options.len(), 5);
        assert_eq!(config.options[3], RawOption::Number(4.0));
        assert_eq!(config.options[4], RawOption::Empty);
        assert_eq!(config.default_value, Some(SegmentedValue::from("Weekly")));
        assert_eq!(config.size, SegmentedSize::Small);
        assert!(config.block);
        assert!(config.motion);
    }

    #[test]
    fn test_build_from_config() {
        let config = SegmentedConfig::from_yaml(PERIODS_YAML).unwrap();
        let control = Segmented::from_config(&config).unwrap();
        assert_eq!(control.selected_index(), Some(1));
        assert_eq!(control.get_size(), SegmentedSize::Small);

        let root = control.render();
        let el = root.as_element().unwrap();
        assert!(el.has_class("ant-segmented-block"));
        assert!(el.has_class("periods"));
        assert_eq!(el.get_attr("data-test-id"), Some("hello"));
        assert!(root.to_html().contains(r#"name="period""#));
    }

    #[test]
    fn test_theme_override() {
        let config = SegmentedConfig::from_yaml(PERIODS_YAML).unwrap();
        let theme = config.theme.resolve().unwrap();
        assert_eq!(theme.thumb, Color::from_hex("#1677ff").unwrap());
        assert_eq!(theme.track, SegmentedTheme::default().track);
    }

    #[test]
    fn test_defaults() {
        let config = SegmentedConfig::from_yaml("{}").unwrap();
        assert_eq!(config, SegmentedConfig::default());
    }

    #[test]
    fn test_motion_off() {
        let config = SegmentedConfig::from_yaml("options: [A, B]\nmotion: false\n").unwrap();
        let control = Segmented::from_config(&config).unwrap();
        assert!(!control.render().to_html().contains("ant-segmented-thumb"));
    }

    #[test]
    fn test_controlled_value() {
        let config = SegmentedConfig::from_yaml("options: [1, 2, 3]\nvalue: 3\n").unwrap();
        let control = Segmented::from_config(&config).unwrap();
        assert!(control.is_controlled());
        assert_eq!(control.selected_index(), Some(2));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = SegmentedConfig::from_yaml("optoins: [A]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
        assert!(err.to_string().starts_with("YAML error"));
    }

    #[test]
    fn test_bad_size_rejected() {
        assert!(SegmentedConfig::from_yaml("size: huge\n").is_err());
    }

    #[test]
    fn test_bad_colour_rejected() {
        let config = SegmentedConfig::from_yaml("theme:\n  track: \"#zzzzzz\"\n").unwrap();
        let err = Segmented::from_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::Color(_)));
    }

    #[test]
    fn test_bad_attribute_rejected() {
        let config = SegmentedConfig::from_yaml("attributes:\n  \"bad name\": x\n").unwrap();
        let err = Segmented::from_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAttribute(ref n) if n == "bad name"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = SegmentedConfig::from_yaml(PERIODS_YAML).unwrap();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(SegmentedConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_markup_label_and_icon_round_trip() {
        use crate::segmented::{OptionDescriptor, SegmentedLabel};
        use segmenta_core::markup::Element;

        let config = SegmentedConfig {
            options: vec![
                OptionDescriptor::new("user")
                    .label(Element::new("div").class("avatar").child("Ann"))
                    .icon(Element::new("span").class("anticon-user"))
                    .into(),
                "Plain".into(),
            ],
            ..SegmentedConfig::default()
        };
        let yaml = config.to_yaml().unwrap();
        let again = SegmentedConfig::from_yaml(&yaml).unwrap();
        assert_eq!(again, config);

        let RawOption::Descriptor(descriptor) = &again.options[0] else {
            panic!("expected a descriptor, got {:?}", again.options[0]);
        };
        assert!(matches!(descriptor.label, Some(SegmentedLabel::Markup(_))));
        assert!(descriptor.icon.as_ref().and_then(|n| n.as_element()).is_some());
    }
}
