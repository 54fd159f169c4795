//! Controlled/uncontrolled selection state.

use super::option::{SegmentedOption, SegmentedValue};
use tracing::{debug, trace};

/// Message emitted when the selection changes.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedChanged {
    /// The newly selected value
    pub value: SegmentedValue,
    /// Index of the selected option
    pub index: usize,
}

/// Why an interaction was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    /// The whole control is disabled
    ControlDisabled,
    /// The targeted option is disabled
    OptionDisabled,
    /// No option at the targeted index
    OutOfRange,
}

/// Owner of the active value.
///
/// A controlled value always wins. Otherwise the last accepted interaction
/// decides, seeded by the default value, falling back to the first option.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionController {
    controlled: Option<SegmentedValue>,
    internal: Option<SegmentedValue>,
}

impl SelectionController {
    /// Uncontrolled state seeded by an optional default.
    #[must_use]
    pub const fn uncontrolled(default: Option<SegmentedValue>) -> Self {
        Self {
            controlled: None,
            internal: default,
        }
    }

    /// Controlled state.
    #[must_use]
    pub const fn controlled(value: SegmentedValue) -> Self {
        Self {
            controlled: Some(value),
            internal: None,
        }
    }

    /// Whether the caller owns the value.
    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    /// Replace the caller-owned value. `None` hands ownership back.
    pub fn set_controlled(&mut self, value: Option<SegmentedValue>) {
        if value.is_none() {
            // Keep showing what the caller last showed.
            if let Some(previous) = self.controlled.take() {
                self.internal = Some(previous);
            }
        }
        self.controlled = value;
    }

    /// Replace the internal seed (uncontrolled default).
    pub fn set_default(&mut self, value: Option<SegmentedValue>) {
        self.internal = value;
    }

    /// The value in effect for the given options.
    #[must_use]
    pub fn active<'a>(&'a self, options: &'a [SegmentedOption]) -> Option<&'a SegmentedValue> {
        self.controlled
            .as_ref()
            .or(self.internal.as_ref())
            .or_else(|| options.first().map(|o| &o.value))
    }

    /// Index of the first option matching the active value.
    #[must_use]
    pub fn selected_index(&self, options: &[SegmentedOption]) -> Option<usize> {
        let active = self.active(options)?;
        options.iter().position(|o| &o.value == active)
    }

    /// Apply an interaction targeting `index`.
    ///
    /// On success the returned message carries the new value; uncontrolled
    /// state has already been updated.
    pub fn accept(
        &mut self,
        options: &[SegmentedOption],
        index: usize,
        control_disabled: bool,
    ) -> Result<SegmentedChanged, Ignored> {
        let outcome = Self::check(options, index, control_disabled);
        match &outcome {
            Ok(option) => {
                let value = option.value.clone();
                if !self.is_controlled() {
                    self.internal = Some(value.clone());
                }
                debug!(%value, index, controlled = self.is_controlled(), "segmented selection changed");
                Ok(SegmentedChanged { value, index })
            }
            Err(reason) => {
                trace!(index, ?reason, "segmented interaction ignored");
                Err(*reason)
            }
        }
    }

    fn check(
        options: &[SegmentedOption],
        index: usize,
        control_disabled: bool,
    ) -> Result<&SegmentedOption, Ignored> {
        if control_disabled {
            return Err(Ignored::ControlDisabled);
        }
        let option = options.get(index).ok_or(Ignored::OutOfRange)?;
        if option.disabled {
            return Err(Ignored::OptionDisabled);
        }
        Ok(option)
    }
}
